mod service;
mod view;

pub use service::SimilarityService;
pub use view::{
    CatalogEntry, QuestionGroup, SimilarMatch, SimilarOutcome, SimilarityViewModel,
};
