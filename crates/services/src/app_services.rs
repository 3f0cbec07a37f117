use std::sync::Arc;

use storage::{CatalogRepository, StaticCatalog};

use crate::error::AppServicesError;
use crate::similarity::SimilarityService;

/// Assembles app-facing services over a shared catalog.
#[derive(Clone)]
pub struct AppServices {
    similarity: Arc<SimilarityService>,
}

impl AppServices {
    /// Build services backed by the catalog compiled into the binary.
    ///
    /// # Errors
    ///
    /// Returns `AppServicesError::Catalog` if the embedded catalog is invalid.
    pub fn new_embedded() -> Result<Self, AppServicesError> {
        let catalog = StaticCatalog::embedded()?;
        Ok(Self::from_catalog(Arc::new(catalog)))
    }

    #[must_use]
    pub fn from_catalog(catalog: Arc<dyn CatalogRepository>) -> Self {
        Self {
            similarity: Arc::new(SimilarityService::new(catalog)),
        }
    }

    #[must_use]
    pub fn similarity(&self) -> Arc<SimilarityService> {
        Arc::clone(&self.similarity)
    }
}
