use serde::Serialize;

/// Cosmetic classification of a score for display styling.
///
/// Bands are fixed and independent of the user's threshold.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum SimilarityBand {
    High,
    Medium,
    Low,
}

impl SimilarityBand {
    /// Lowest score classified as `High`.
    pub const HIGH_FLOOR: f64 = 0.85;
    /// Lowest score classified as `Medium`.
    pub const MEDIUM_FLOOR: f64 = 0.75;

    pub const ALL: [SimilarityBand; 3] = [Self::High, Self::Medium, Self::Low];

    #[must_use]
    pub fn for_score(score: f64) -> Self {
        if score >= Self::HIGH_FLOOR {
            Self::High
        } else if score >= Self::MEDIUM_FLOOR {
            Self::Medium
        } else {
            Self::Low
        }
    }
}
