use std::sync::Arc;

use services::SimilarityService;
use survey_core::{CategoryFilter, Threshold};

/// Initial control values for a new viewer session.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct ViewDefaults {
    pub category: CategoryFilter,
    pub threshold: Threshold,
    pub question: Option<String>,
}

pub trait UiApp: Send + Sync {
    fn similarity(&self) -> Arc<SimilarityService>;
    fn view_defaults(&self) -> ViewDefaults;
}

#[derive(Clone)]
pub struct AppContext {
    similarity: Arc<SimilarityService>,
    view_defaults: ViewDefaults,
}

impl AppContext {
    #[must_use]
    pub fn new(app: &Arc<dyn UiApp>) -> Self {
        Self {
            similarity: app.similarity(),
            view_defaults: app.view_defaults(),
        }
    }

    #[must_use]
    pub fn similarity(&self) -> Arc<SimilarityService> {
        Arc::clone(&self.similarity)
    }

    #[must_use]
    pub fn view_defaults(&self) -> ViewDefaults {
        self.view_defaults.clone()
    }
}

/// Called once by the composition root (`crates/app`) or a test harness.
#[must_use]
pub fn build_app_context(app: &Arc<dyn UiApp>) -> AppContext {
    AppContext::new(app)
}
