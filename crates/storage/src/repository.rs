use survey_core::model::{
    Category, CategoryError, CategoryName, GenericQuestion, ScoreError, SimilarCandidate,
};
use thiserror::Error;

/// Errors surfaced while loading a catalog.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum CatalogError {
    #[error("catalog parse error: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("invalid category `{name}`: {source}")]
    InvalidCategory {
        name: String,
        #[source]
        source: CategoryError,
    },

    #[error("duplicate category: {0}")]
    DuplicateCategory(String),

    #[error("duplicate generic question: {0}")]
    DuplicateQuestion(String),

    #[error("similar questions listed for unknown generic question: {0}")]
    UnknownQuestion(String),

    #[error("similar questions listed twice for: {0}")]
    DuplicateSimilarEntry(String),

    #[error("empty similar question list for: {0}")]
    EmptyCandidates(String),

    #[error("invalid similarity score for `{question}`: {source}")]
    InvalidScore {
        question: String,
        #[source]
        source: ScoreError,
    },
}

/// Read-only catalog of generic questions and their pre-scored candidates.
///
/// Lookups are total: unknown categories or questions yield empty results.
pub trait CatalogRepository: Send + Sync {
    /// All categories in declaration order.
    fn categories(&self) -> &[Category];

    /// Candidates for a generic question, matched by exact text, in catalog order.
    fn similar_to(&self, question_text: &str) -> &[SimilarCandidate];

    fn list_categories(&self) -> Vec<&CategoryName> {
        self.categories().iter().map(Category::name).collect()
    }

    fn questions_for(&self, category: &CategoryName) -> &[GenericQuestion] {
        self.categories()
            .iter()
            .find(|c| c.name() == category)
            .map(Category::questions)
            .unwrap_or_default()
    }

    /// Every generic question, category order preserved.
    fn all_questions(&self) -> Vec<&GenericQuestion> {
        self.categories()
            .iter()
            .flat_map(Category::questions)
            .collect()
    }

    fn has_similar(&self, question_text: &str) -> bool {
        !self.similar_to(question_text).is_empty()
    }
}
