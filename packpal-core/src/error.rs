//! Error types for PackPal operations

use chrono::NaiveDate;
use thiserror::Error;

/// Trip-form validation errors.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum ValidationError {
    #[error("Required field missing: {field}")]
    RequiredFieldMissing { field: &'static str },

    #[error("Invalid value for {field}: {reason}")]
    InvalidValue { field: &'static str, reason: String },

    #[error("End date {end} is before start date {start}")]
    DateOrder { start: NaiveDate, end: NaiveDate },
}

/// Forecast rejections. A forecast that fails these checks never reaches the rule catalog.
#[derive(Debug, Clone, Error, PartialEq)]
pub enum ForecastError {
    #[error("Forecast contains no daily entries")]
    EmptyForecast,

    #[error("Forecast value {field} on {date} is not a finite number: {value}")]
    NonFiniteValue {
        date: NaiveDate,
        field: &'static str,
        value: f64,
    },

    #[error("Forecast precipitation on {date} is negative: {value}mm")]
    NegativePrecipitation { date: NaiveDate, value: f64 },
}

/// Packing-item mutation errors.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum ItemError {
    #[error("Item name must not be empty")]
    EmptyName,

    #[error("Item quantity must be at least 1")]
    ZeroQuantity,
}

/// Weather provider errors.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum ProviderError {
    #[error("Weather request failed: {reason}")]
    Transport { reason: String },

    #[error("{message}")]
    Api { status: u16, message: String },

    #[error("Invalid weather data received from API: {reason}")]
    InvalidResponse { reason: String },
}

/// Master error type for all packing-list generation errors.
#[derive(Debug, Clone, Error, PartialEq)]
pub enum PackpalError {
    #[error("Malformed trip details: {0}")]
    MalformedTripDetails(#[from] ValidationError),

    #[error("Invalid forecast: {0}")]
    InvalidForecast(#[from] ForecastError),

    #[error("Invalid item: {0}")]
    InvalidItem(#[from] ItemError),
}

/// Result type alias for PackPal operations.
pub type PackpalResult<T> = Result<T, PackpalError>;

// =============================================================================
// TESTS
// =============================================================================
