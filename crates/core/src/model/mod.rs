mod band;
mod category;
mod question;
mod similar;

pub use band::SimilarityBand;
pub use category::{ALL_SENTINEL, Category, CategoryError, CategoryName};
pub use question::GenericQuestion;
pub use similar::{ScoreError, SimilarCandidate, SimilarityScore};
