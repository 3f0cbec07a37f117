use serde::Serialize;
use thiserror::Error;

use crate::model::SimilarityBand;
use crate::percent::format_percent;

/// Pre-computed similarity score in `[0, 1]`.
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Serialize)]
#[serde(transparent)]
pub struct SimilarityScore(f64);

impl SimilarityScore {
    /// # Errors
    ///
    /// Returns `ScoreError::OutOfRange` for values outside `[0, 1]` (including NaN).
    pub fn new(value: f64) -> Result<Self, ScoreError> {
        if !(0.0..=1.0).contains(&value) {
            return Err(ScoreError::OutOfRange(value));
        }
        Ok(Self(value))
    }

    #[must_use]
    pub fn value(self) -> f64 {
        self.0
    }

    #[must_use]
    pub fn band(self) -> SimilarityBand {
        SimilarityBand::for_score(self.0)
    }

    #[must_use]
    pub fn percent_label(self) -> String {
        format_percent(self.0)
    }
}

#[derive(Debug, Error, Clone, Copy, PartialEq)]
#[non_exhaustive]
pub enum ScoreError {
    #[error("similarity score must be in [0, 1], got {0}")]
    OutOfRange(f64),
}

/// A question from another survey, scored against one generic question.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SimilarCandidate {
    source_survey: String,
    question_text: String,
    score: SimilarityScore,
}

impl SimilarCandidate {
    #[must_use]
    pub fn new(
        source_survey: impl Into<String>,
        question_text: impl Into<String>,
        score: SimilarityScore,
    ) -> Self {
        Self {
            source_survey: source_survey.into(),
            question_text: question_text.into(),
            score,
        }
    }

    #[must_use]
    pub fn source_survey(&self) -> &str {
        &self.source_survey
    }

    #[must_use]
    pub fn question_text(&self) -> &str {
        &self.question_text
    }

    #[must_use]
    pub fn score(&self) -> SimilarityScore {
        self.score
    }

    /// Inclusive comparison: a candidate scoring exactly the threshold passes.
    #[must_use]
    pub fn meets(&self, threshold: f64) -> bool {
        self.score.0 >= threshold
    }
}
