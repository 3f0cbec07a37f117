use serde::Serialize;
use thiserror::Error;

use crate::model::GenericQuestion;

/// Filter value that selects every category. No category may use this name.
pub const ALL_SENTINEL: &str = "all";

/// Validated category name (trimmed, non-empty, not the `all` sentinel).
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
#[serde(transparent)]
pub struct CategoryName(String);

impl CategoryName {
    /// Create a validated category name.
    ///
    /// # Errors
    ///
    /// Returns `CategoryError::EmptyName` if the name is empty after trimming,
    /// or `CategoryError::ReservedName` if it collides with the `all` filter.
    pub fn new(value: impl Into<String>) -> Result<Self, CategoryError> {
        let raw = value.into();
        let trimmed = raw.trim();
        if trimmed.is_empty() {
            return Err(CategoryError::EmptyName);
        }
        if trimmed.eq_ignore_ascii_case(ALL_SENTINEL) {
            return Err(CategoryError::ReservedName);
        }
        Ok(Self(trimmed.to_string()))
    }

    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Human-facing label: `customer_satisfaction` becomes `Customer Satisfaction`.
    #[must_use]
    pub fn label(&self) -> String {
        self.0
            .split('_')
            .filter(|word| !word.is_empty())
            .map(capitalize)
            .collect::<Vec<_>>()
            .join(" ")
    }
}

fn capitalize(word: &str) -> String {
    let mut chars = word.chars();
    match chars.next() {
        Some(first) => first
            .to_uppercase()
            .chain(chars.flat_map(char::to_lowercase))
            .collect(),
        None => String::new(),
    }
}

impl std::fmt::Display for CategoryName {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A named, ordered group of generic questions.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Category {
    name: CategoryName,
    questions: Vec<GenericQuestion>,
}

impl Category {
    /// Build a category, attaching each question text to it in order.
    ///
    /// # Errors
    ///
    /// Returns `CategoryError::EmptyQuestionText` if any question text is blank.
    pub fn new(
        name: CategoryName,
        question_texts: impl IntoIterator<Item = String>,
    ) -> Result<Self, CategoryError> {
        let questions = question_texts
            .into_iter()
            .map(|text| GenericQuestion::new(text, name.clone()))
            .collect::<Result<Vec<_>, _>>()?;
        Ok(Self { name, questions })
    }

    #[must_use]
    pub fn name(&self) -> &CategoryName {
        &self.name
    }

    #[must_use]
    pub fn questions(&self) -> &[GenericQuestion] {
        &self.questions
    }
}

#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum CategoryError {
    #[error("category name cannot be empty")]
    EmptyName,

    #[error("category name `all` is reserved for the filter")]
    ReservedName,

    #[error("question text cannot be empty")]
    EmptyQuestionText,
}
