//! Reduction of a daily forecast into the signals the weather rules read.

use crate::{DailyWeather, ForecastError, WeatherForecast};
use serde::{Deserialize, Serialize};

/// Summary signals over the whole forecast window.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct WeatherSummary {
    pub avg_temp_max: f64,
    pub avg_temp_min: f64,
    pub has_precipitation: bool,
    pub days: usize,
}

impl WeatherSummary {
    /// Aggregate the daily sequence.
    ///
    /// An empty sequence, a non-finite temperature or a negative precipitation
    /// amount is rejected rather than folded into the averages, so a NaN can
    /// never silently disable the temperature rules.
    pub fn from_daily(daily: &[DailyWeather]) -> Result<Self, ForecastError> {
        if daily.is_empty() {
            return Err(ForecastError::EmptyForecast);
        }

        for day in daily {
            check_finite(day, "tempMax", day.temp_max)?;
            check_finite(day, "tempMin", day.temp_min)?;
            check_finite(day, "precipitation", day.precipitation_mm)?;
            if day.precipitation_mm < 0.0 {
                return Err(ForecastError::NegativePrecipitation {
                    date: day.date,
                    value: day.precipitation_mm,
                });
            }
        }

        let count = daily.len() as f64;
        let avg_temp_max = daily.iter().map(|d| d.temp_max).sum::<f64>() / count;
        let avg_temp_min = daily.iter().map(|d| d.temp_min).sum::<f64>() / count;
        let has_precipitation = daily.iter().any(|d| d.precipitation_mm > 0.0);

        Ok(Self {
            avg_temp_max,
            avg_temp_min,
            has_precipitation,
            days: daily.len(),
        })
    }
}

impl WeatherForecast {
    pub fn summary(&self) -> Result<WeatherSummary, ForecastError> {
        WeatherSummary::from_daily(&self.daily)
    }
}

fn check_finite(day: &DailyWeather, field: &'static str, value: f64) -> Result<(), ForecastError> {
    if value.is_finite() {
        Ok(())
    } else {
        Err(ForecastError::NonFiniteValue {
            date: day.date,
            field,
            value,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    fn day(offset: u32, temp_min: f64, temp_max: f64, precipitation_mm: f64) -> DailyWeather {
        DailyWeather {
            date: NaiveDate::from_ymd_opt(2024, 7, 1 + offset).unwrap(),
            temp_max,
            temp_min,
            humidity: 55.0,
            description: "Partly cloudy".to_string(),
            condition_code: "1003".to_string(),
            precipitation_mm,
        }
    }

    #[test]
    fn test_averages_and_precipitation() {
        let daily = vec![day(0, 10.0, 20.0, 0.0), day(1, 14.0, 30.0, 0.4)];
        let summary = WeatherSummary::from_daily(&daily).unwrap();
        assert_eq!(summary.avg_temp_min, 12.0);
        assert_eq!(summary.avg_temp_max, 25.0);
        assert!(summary.has_precipitation);
        assert_eq!(summary.days, 2);
    }

    #[test]
    fn test_dry_forecast() {
        let daily = vec![day(0, 18.0, 24.0, 0.0); 7];
        let summary = WeatherSummary::from_daily(&daily).unwrap();
        assert!(!summary.has_precipitation);
    }

    #[test]
    fn test_empty_forecast_rejected() {
        assert_eq!(
            WeatherSummary::from_daily(&[]),
            Err(ForecastError::EmptyForecast)
        );
    }

    #[test]
    fn test_nan_temperature_rejected() {
        let daily = vec![day(0, f64::NAN, 20.0, 0.0)];
        assert!(matches!(
            WeatherSummary::from_daily(&daily),
            Err(ForecastError::NonFiniteValue { field: "tempMin", .. })
        ));
    }

    #[test]
    fn test_negative_precipitation_rejected() {
        let daily = vec![day(0, 10.0, 20.0, -1.0)];
        assert!(matches!(
            WeatherSummary::from_daily(&daily),
            Err(ForecastError::NegativePrecipitation { .. })
        ));
    }
}
