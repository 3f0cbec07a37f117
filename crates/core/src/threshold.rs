use std::fmt;
use std::str::FromStr;

use serde::Serialize;
use thiserror::Error;

use crate::percent::format_percent;

/// Minimum similarity a candidate must reach to be shown.
///
/// Always within `[MIN, MAX]` and aligned to `STEP`.
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Serialize)]
#[serde(transparent)]
pub struct Threshold(f64);

impl Threshold {
    pub const MIN: f64 = 0.0;
    pub const MAX: f64 = 1.0;
    pub const STEP: f64 = 0.05;
    pub const DEFAULT: Threshold = Threshold(0.70);

    const STEPS_PER_UNIT: f64 = 20.0;

    /// Validate a threshold and align it to the slider step.
    ///
    /// # Errors
    ///
    /// Returns `ThresholdError::OutOfRange` for values outside `[0, 1]` (including NaN).
    pub fn new(value: f64) -> Result<Self, ThresholdError> {
        if !(Self::MIN..=Self::MAX).contains(&value) {
            return Err(ThresholdError::OutOfRange(value));
        }
        Ok(Self::snapped(value))
    }

    /// Round a raw slider reading to the nearest step, clamped into range.
    ///
    /// NaN falls back to the default.
    #[must_use]
    pub fn snapped(value: f64) -> Self {
        if value.is_nan() {
            return Self::DEFAULT;
        }
        let clamped = value.clamp(Self::MIN, Self::MAX);
        let steps = (clamped * Self::STEPS_PER_UNIT).round();
        Self(steps / Self::STEPS_PER_UNIT)
    }

    #[must_use]
    pub fn value(self) -> f64 {
        self.0
    }

    #[must_use]
    pub fn percent_label(self) -> String {
        format_percent(self.0)
    }
}

impl Default for Threshold {
    fn default() -> Self {
        Self::DEFAULT
    }
}

impl fmt::Display for Threshold {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:.2}", self.0)
    }
}

impl FromStr for Threshold {
    type Err = ThresholdError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let value: f64 = s
            .trim()
            .parse()
            .map_err(|_| ThresholdError::Invalid(s.to_string()))?;
        Self::new(value)
    }
}

#[derive(Debug, Error, Clone, PartialEq)]
#[non_exhaustive]
pub enum ThresholdError {
    #[error("threshold must be in [0, 1], got {0}")]
    OutOfRange(f64),

    #[error("invalid threshold value: {0}")]
    Invalid(String),
}
