#![forbid(unsafe_code)]

pub mod app_services;
pub mod error;
pub mod selection;
pub mod similarity;

pub use app_services::AppServices;
pub use error::AppServicesError;
pub use selection::{SelectionPhase, SelectionState};
pub use similarity::{
    CatalogEntry, QuestionGroup, SimilarMatch, SimilarOutcome, SimilarityService,
    SimilarityViewModel,
};
