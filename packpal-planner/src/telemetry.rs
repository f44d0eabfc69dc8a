//! Tracing subscriber setup.
//!
//! `PACKPAL_LOG` wins over the configured filter. Logs go to stderr so the
//! checklist on stdout stays clean.

use crate::config::LoggingConfig;
use crate::error::PlannerError;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

pub const LOG_ENV_VAR: &str = "PACKPAL_LOG";

pub fn init_tracing(config: &LoggingConfig) -> Result<(), PlannerError> {
    let env_filter = resolve_filter(config)?;
    let registry = tracing_subscriber::registry().with(env_filter);

    let result = if config.json {
        registry
            .with(tracing_subscriber::fmt::layer().json().with_writer(std::io::stderr))
            .try_init()
    } else {
        registry
            .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
            .try_init()
    };
    result.map_err(|e| PlannerError::Telemetry(e.to_string()))?;

    tracing::debug!(json = config.json, "Logging initialized");
    Ok(())
}

fn resolve_filter(config: &LoggingConfig) -> Result<EnvFilter, PlannerError> {
    match EnvFilter::try_from_env(LOG_ENV_VAR) {
        Ok(filter) => Ok(filter),
        Err(_) => EnvFilter::try_new(&config.filter).map_err(|e| {
            PlannerError::Telemetry(format!("invalid filter '{}': {}", config.filter, e))
        }),
    }
}
