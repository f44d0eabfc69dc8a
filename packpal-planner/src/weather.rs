//! HTTP weather provider for weatherapi.com-compatible endpoints.

use crate::config::WeatherConfig;
use async_trait::async_trait;
use chrono::NaiveDate;
use packpal_core::{CurrentWeather, DailyWeather, ProviderError, WeatherForecast, WeatherProvider};
use serde::Deserialize;
use std::time::Duration;

#[derive(Debug, Clone)]
pub struct WeatherApiClient {
    client: reqwest::Client,
    base_url: String,
    api_key: String,
    forecast_days: u8,
}

impl WeatherApiClient {
    pub fn new(config: &WeatherConfig) -> Result<Self, ProviderError> {
        let client = reqwest::Client::builder()
            .timeout(Duration::from_millis(config.request_timeout_ms))
            .build()
            .map_err(|e| ProviderError::Transport {
                reason: e.to_string(),
            })?;
        Ok(Self {
            client,
            base_url: config.base_url.trim_end_matches('/').to_string(),
            api_key: config.api_key.clone(),
            forecast_days: config.forecast_days,
        })
    }

    async fn parse_response(
        &self,
        response: reqwest::Response,
    ) -> Result<WeatherForecast, ProviderError> {
        let status = response.status();
        let text = response.text().await.map_err(|e| ProviderError::Transport {
            reason: e.to_string(),
        })?;

        if !status.is_success() {
            let message = serde_json::from_str::<ApiErrorBody>(&text)
                .ok()
                .and_then(|body| body.error)
                .and_then(|detail| detail.message)
                .unwrap_or_else(|| {
                    format!("Weather API request failed with status {}", status.as_u16())
                });
            return Err(ProviderError::Api {
                status: status.as_u16(),
                message,
            });
        }

        let body: ApiForecastResponse =
            serde_json::from_str(&text).map_err(|e| ProviderError::InvalidResponse {
                reason: e.to_string(),
            })?;
        body.into_forecast()
    }
}

#[async_trait]
impl WeatherProvider for WeatherApiClient {
    async fn fetch_forecast(
        &self,
        city: &str,
        country: &str,
    ) -> Result<WeatherForecast, ProviderError> {
        let url = format!("{}/forecast.json", self.base_url);
        let place = format!("{},{}", city, country);
        let days = self.forecast_days.to_string();
        tracing::debug!(%url, place = %place, days = self.forecast_days, "Requesting forecast");

        let response = self
            .client
            .get(url)
            .query(&[
                ("key", self.api_key.as_str()),
                ("q", place.as_str()),
                ("days", days.as_str()),
            ])
            .send()
            .await
            .map_err(|e| ProviderError::Transport {
                reason: e.to_string(),
            });

        let result = match response {
            Ok(response) => self.parse_response(response).await,
            Err(err) => Err(err),
        };
        match &result {
            Ok(forecast) => tracing::debug!(
                city = %forecast.city,
                country = %forecast.country,
                days = forecast.daily.len(),
                "Forecast received"
            ),
            Err(err) => tracing::warn!(place = %place, error = %err, "Forecast request failed"),
        }
        result
    }

    fn provider_id(&self) -> &str {
        "weatherapi"
    }
}

// ============================================================================
// WIRE TYPES
// ============================================================================

#[derive(Debug, Deserialize)]
struct ApiErrorBody {
    error: Option<ApiErrorDetail>,
}

#[derive(Debug, Deserialize)]
struct ApiErrorDetail {
    message: Option<String>,
}

#[derive(Debug, Deserialize)]
struct ApiForecastResponse {
    location: ApiLocation,
    current: ApiCurrent,
    forecast: Option<ApiForecast>,
}

#[derive(Debug, Deserialize)]
struct ApiLocation {
    name: String,
    country: String,
}

#[derive(Debug, Deserialize)]
struct ApiCondition {
    text: String,
    code: i64,
}

#[derive(Debug, Deserialize)]
struct ApiCurrent {
    temp_c: f64,
    humidity: f64,
    condition: ApiCondition,
}

#[derive(Debug, Deserialize)]
struct ApiForecast {
    forecastday: Option<Vec<ApiForecastDay>>,
}

#[derive(Debug, Deserialize)]
struct ApiForecastDay {
    date: NaiveDate,
    day: ApiDay,
}

#[derive(Debug, Deserialize)]
struct ApiDay {
    maxtemp_c: f64,
    mintemp_c: f64,
    avghumidity: f64,
    condition: ApiCondition,
    totalprecip_mm: f64,
}

impl ApiForecastResponse {
    fn into_forecast(self) -> Result<WeatherForecast, ProviderError> {
        let days = self
            .forecast
            .and_then(|forecast| forecast.forecastday)
            .ok_or_else(|| ProviderError::InvalidResponse {
                reason: "missing forecast.forecastday".to_string(),
            })?;

        Ok(WeatherForecast {
            city: self.location.name,
            country: self.location.country,
            current: CurrentWeather {
                temp: self.current.temp_c,
                humidity: self.current.humidity,
                description: self.current.condition.text,
                condition_code: self.current.condition.code.to_string(),
            },
            daily: days
                .into_iter()
                .map(|day| DailyWeather {
                    date: day.date,
                    temp_max: day.day.maxtemp_c,
                    temp_min: day.day.mintemp_c,
                    humidity: day.day.avghumidity,
                    description: day.day.condition.text,
                    condition_code: day.day.condition.code.to_string(),
                    precipitation_mm: day.day.totalprecip_mm,
                })
                .collect(),
        })
    }
}
