use serde::Serialize;

use crate::model::{CategoryError, CategoryName};

/// A canonical survey question, identified by its exact text.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
pub struct GenericQuestion {
    text: String,
    category: CategoryName,
}

impl GenericQuestion {
    /// The text is kept verbatim since similar-question lookup is by exact match.
    ///
    /// # Errors
    ///
    /// Returns `CategoryError::EmptyQuestionText` if the text is blank.
    pub fn new(text: impl Into<String>, category: CategoryName) -> Result<Self, CategoryError> {
        let text = text.into();
        if text.trim().is_empty() {
            return Err(CategoryError::EmptyQuestionText);
        }
        Ok(Self { text, category })
    }

    #[must_use]
    pub fn text(&self) -> &str {
        &self.text
    }

    #[must_use]
    pub fn category(&self) -> &CategoryName {
        &self.category
    }
}
