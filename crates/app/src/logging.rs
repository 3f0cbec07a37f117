use tracing_subscriber::{EnvFilter, fmt, prelude::*};

use crate::error::AppError;

/// Install the global subscriber. `RUST_LOG` overrides the default level.
pub fn init_logging(verbose: bool) -> Result<(), AppError> {
    let default_level = if verbose { "debug" } else { "info" };

    let env_filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(default_level))
        .map_err(|e| AppError::Logging(format!("failed to create log filter: {e}")))?;

    let fmt_layer = fmt::layer()
        .with_target(false)
        .with_writer(std::io::stderr)
        .compact();

    tracing_subscriber::registry()
        .with(env_filter)
        .with(fmt_layer)
        .try_init()
        .map_err(|e| AppError::Logging(format!("failed to initialize logging: {e}")))?;

    Ok(())
}
