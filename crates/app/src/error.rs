use services::AppServicesError;
use thiserror::Error;

/// Failures at the binary layer; printed once by `main`.
#[derive(Debug, Error)]
pub enum AppError {
    #[error("{0}")]
    Logging(String),
    #[error(transparent)]
    Services(#[from] AppServicesError),
    #[error(transparent)]
    Json(#[from] serde_json::Error),
    #[error(transparent)]
    Io(#[from] std::io::Error),
}
