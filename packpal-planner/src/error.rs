//! Error types for the planner.

use crate::config::ConfigError;
use crate::persistence::PersistenceError;
use crate::state::TransitionError;
use chrono::NaiveDate;
use packpal_core::{PackpalError, ProviderError, ValidationError};

#[derive(Debug, thiserror::Error)]
pub enum PlannerError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error(transparent)]
    Config(#[from] ConfigError),
    #[error(transparent)]
    Persistence(#[from] PersistenceError),
    #[error(transparent)]
    Transition(#[from] TransitionError),
    #[error(transparent)]
    Weather(#[from] ProviderError),
    #[error(transparent)]
    Generation(#[from] PackpalError),
    #[error("Invalid trip: {0}")]
    Trip(#[from] ValidationError),
    #[error("Failed to parse trip TOML: {0}")]
    TripFile(#[from] toml::de::Error),
    #[error("No saved trip to {city} starting {start}")]
    SavedTripNotFound { city: String, start: NaiveDate },
    #[error("Failed to initialize logging: {0}")]
    Telemetry(String),
    #[error("Usage: {0}")]
    Usage(String),
    #[error("Weather unavailable: {message}")]
    WeatherUnavailable { message: String },
    #[error("Packing list could not be generated: {message}")]
    ListUnavailable { message: String },
}
