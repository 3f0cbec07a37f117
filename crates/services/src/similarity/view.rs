use serde::Serialize;
use survey_core::CategoryFilter;
use survey_core::model::{
    CategoryName, GenericQuestion, SimilarCandidate, SimilarityBand, SimilarityScore,
};
use survey_core::percent::format_percent;

/// Questions listed under one category heading.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct QuestionGroup {
    pub category: CategoryName,
    pub questions: Vec<GenericQuestion>,
}

/// A candidate that passed the threshold, tagged with its display band.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct SimilarMatch {
    pub candidate: SimilarCandidate,
    pub band: SimilarityBand,
}

/// What the similar-questions panel shows for the current selection.
#[derive(Clone, Debug, PartialEq, Serialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum SimilarOutcome {
    NothingSelected,
    NoSimilarQuestions,
    NoMatchesAtThreshold { threshold: f64 },
    Matches { matches: Vec<SimilarMatch> },
}

impl SimilarOutcome {
    /// Matches in catalog order; empty for every informational outcome.
    #[must_use]
    pub fn matches(&self) -> &[SimilarMatch] {
        match self {
            Self::Matches { matches } => matches.as_slice(),
            _ => &[],
        }
    }

    /// User-facing text for informational outcomes.
    #[must_use]
    pub fn message(&self) -> Option<String> {
        match self {
            Self::NothingSelected => {
                Some("Select a generic question to see similar questions".to_string())
            }
            Self::NoSimilarQuestions => {
                Some("No similar questions found for this question".to_string())
            }
            Self::NoMatchesAtThreshold { threshold } => Some(format!(
                "No matches at threshold {}",
                format_percent(*threshold)
            )),
            Self::Matches { .. } => None,
        }
    }
}

/// Everything the presentation layer needs for one frame.
#[derive(Clone, Debug, PartialEq)]
pub struct SimilarityViewModel {
    /// `All` first, then each category in catalog order.
    pub category_options: Vec<CategoryFilter>,
    pub category_filter: CategoryFilter,
    pub threshold: f64,
    pub question_groups: Vec<QuestionGroup>,
    pub selected: Option<String>,
    pub similar: SimilarOutcome,
}

/// One generic question with a summary of its catalog entry.
#[derive(Clone, Debug, PartialEq)]
pub struct CatalogEntry {
    pub category: CategoryName,
    pub question: String,
    pub candidate_count: usize,
    pub best_score: Option<SimilarityScore>,
}
