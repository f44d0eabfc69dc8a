//! Weather provider seam.
//!
//! Implementations live outside the core (HTTP client, test mocks); the core
//! only consumes the resolved [`WeatherForecast`].

use crate::{ProviderError, WeatherForecast};
use async_trait::async_trait;

#[async_trait]
pub trait WeatherProvider: Send + Sync {
    /// Multi-day forecast for a place.
    async fn fetch_forecast(
        &self,
        city: &str,
        country: &str,
    ) -> Result<WeatherForecast, ProviderError>;

    /// Short identifier used in logs.
    fn provider_id(&self) -> &str;
}
