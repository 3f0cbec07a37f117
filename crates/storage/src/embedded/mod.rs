//! Catalog compiled into the binary from a JSON seed.

mod mapping;
mod records;

use std::collections::HashMap;

use survey_core::model::{Category, SimilarCandidate};

use crate::repository::{CatalogError, CatalogRepository};

const EMBEDDED_CATALOG: &str = include_str!("../../data/catalog.json");

/// Immutable in-memory catalog.
#[derive(Debug, Clone)]
pub struct StaticCatalog {
    categories: Vec<Category>,
    similar: HashMap<String, Vec<SimilarCandidate>>,
}

impl StaticCatalog {
    /// Load and validate a catalog document.
    ///
    /// # Errors
    ///
    /// Returns `CatalogError::Parse` for malformed JSON, or a validation variant
    /// when the document breaks a catalog invariant.
    pub fn from_json(raw: &str) -> Result<Self, CatalogError> {
        let record: records::CatalogRecord = serde_json::from_str(raw)?;
        let mapped = mapping::map_catalog(record)?;
        let catalog = Self {
            categories: mapped.categories,
            similar: mapped.similar,
        };
        tracing::info!(
            categories = catalog.categories.len(),
            questions = catalog.question_count(),
            similar_entries = catalog.similar.len(),
            "loaded survey catalog"
        );
        Ok(catalog)
    }

    /// The catalog shipped with the application.
    ///
    /// # Errors
    ///
    /// Returns `CatalogError` if the built-in seed is invalid.
    pub fn embedded() -> Result<Self, CatalogError> {
        Self::from_json(EMBEDDED_CATALOG)
    }

    #[must_use]
    pub fn question_count(&self) -> usize {
        self.categories.iter().map(|c| c.questions().len()).sum()
    }
}

impl CatalogRepository for StaticCatalog {
    fn categories(&self) -> &[Category] {
        &self.categories
    }

    fn similar_to(&self, question_text: &str) -> &[SimilarCandidate] {
        self.similar
            .get(question_text)
            .map(Vec::as_slice)
            .unwrap_or_default()
    }
}
