//! Structured logging setup

use tracing_subscriber::EnvFilter;

use crate::{config::Config, error::Result};

const FALLBACK_LEVEL: &str = "info";

/// Initialize JSON tracing output filtered by `service.log_level`
///
/// `RUST_LOG` is ignored; the configured level wins so that file and
/// `CATALOG_` environment overrides behave the same way.
pub fn init_tracing(config: &Config) -> Result<()> {
    let (filter, invalid_level) = match EnvFilter::try_new(&config.service.log_level) {
        Ok(filter) => (filter, None),
        Err(e) => (EnvFilter::new(FALLBACK_LEVEL), Some(e)),
    };

    // A second init (tests, embedding) keeps the existing subscriber
    if tracing_subscriber::fmt()
        .json()
        .with_env_filter(filter)
        .with_current_span(true)
        .try_init()
        .is_err()
    {
        tracing::debug!("Tracing subscriber already installed");
    }

    tracing::info!(
        service = %config.service.name,
        environment = %config.service.environment,
        "Tracing initialized"
    );

    if let Some(e) = invalid_level {
        tracing::warn!(
            log_level = %config.service.log_level,
            fallback = FALLBACK_LEVEL,
            error = %e,
            "Invalid log level, using fallback"
        );
    }

    Ok(())
}
