//! PackPal Test Utilities
//!
//! Centralized test infrastructure for the PackPal workspace:
//! - Proptest generators for trips and forecasts
//! - A mock weather provider
//! - Test fixtures for common scenarios
//! - Custom assertions for packing lists

// Re-export core types for convenience
pub use packpal_core::{
    AgeRange, CurrentWeather, DailyWeather, Destination, Gender, LuggageCapacity, PackingCategory,
    PackingItem, PackingList, ProviderError, TravelerDetails, TripDates, TripDetails, TripPurpose,
    WeatherForecast, WeatherProvider,
};

use async_trait::async_trait;
use chrono::NaiveDate;
use std::collections::VecDeque;
use std::sync::Mutex;

// ============================================================================
// MOCK PROVIDERS
// ============================================================================

/// Scripted weather provider.
///
/// Queued responses are returned in order; once the queue is drained every
/// call gets the fallback response.
#[derive(Debug)]
pub struct MockWeatherProvider {
    queued: Mutex<VecDeque<Result<WeatherForecast, ProviderError>>>,
    fallback: Result<WeatherForecast, ProviderError>,
    calls: Mutex<Vec<(String, String)>>,
}

impl MockWeatherProvider {
    pub fn returning(forecast: WeatherForecast) -> Self {
        Self {
            queued: Mutex::new(VecDeque::new()),
            fallback: Ok(forecast),
            calls: Mutex::new(Vec::new()),
        }
    }

    pub fn failing(error: ProviderError) -> Self {
        Self {
            queued: Mutex::new(VecDeque::new()),
            fallback: Err(error),
            calls: Mutex::new(Vec::new()),
        }
    }

    /// Queue a response ahead of the fallback.
    pub fn then(self, response: Result<WeatherForecast, ProviderError>) -> Self {
        self.queued
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
            .push_back(response);
        self
    }

    /// Every (city, country) pair requested so far.
    pub fn calls(&self) -> Vec<(String, String)> {
        self.calls
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
            .clone()
    }
}

#[async_trait]
impl WeatherProvider for MockWeatherProvider {
    async fn fetch_forecast(
        &self,
        city: &str,
        country: &str,
    ) -> Result<WeatherForecast, ProviderError> {
        self.calls
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
            .push((city.to_string(), country.to_string()));
        let queued = self
            .queued
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
            .pop_front();
        queued.unwrap_or_else(|| self.fallback.clone())
    }

    fn provider_id(&self) -> &str {
        "mock"
    }
}

// ============================================================================
// PROPTEST GENERATORS
// ============================================================================

pub mod generators {
    //! Proptest strategies for generating PackPal input types.

    use super::*;
    use proptest::prelude::*;

    pub fn arb_purpose() -> impl Strategy<Value = TripPurpose> {
        prop_oneof![
            Just(TripPurpose::Business),
            Just(TripPurpose::Leisure),
            Just(TripPurpose::Adventure),
            Just(TripPurpose::Beach),
            Just(TripPurpose::WinterSports),
        ]
    }

    pub fn arb_luggage() -> impl Strategy<Value = LuggageCapacity> {
        prop_oneof![Just(LuggageCapacity::CarryOn), Just(LuggageCapacity::Checked)]
    }

    pub fn arb_category() -> impl Strategy<Value = PackingCategory> {
        prop_oneof![
            Just(PackingCategory::Documents),
            Just(PackingCategory::Clothing),
            Just(PackingCategory::Electronics),
            Just(PackingCategory::Toiletries),
            Just(PackingCategory::Accessories),
            Just(PackingCategory::Medicine),
            Just(PackingCategory::Activity),
        ]
    }

    pub fn arb_traveler_details() -> impl Strategy<Value = TravelerDetails> {
        (
            proptest::option::of(prop_oneof![
                Just(Gender::Male),
                Just(Gender::Female),
                Just(Gender::NonBinary),
            ]),
            proptest::option::of(prop_oneof![
                Just(AgeRange::Child),
                Just(AgeRange::Teen),
                Just(AgeRange::Adult),
                Just(AgeRange::Senior),
            ]),
            proptest::option::of("[a-z ]{0,20}"),
        )
            .prop_map(|(gender, age_range, special_requirements)| TravelerDetails {
                gender,
                age_range,
                special_requirements,
            })
    }

    /// A date between 2020-01-01 and roughly 2030.
    pub fn arb_date() -> impl Strategy<Value = NaiveDate> {
        (0i64..3650).prop_map(|offset| base_date() + chrono::Duration::days(offset))
    }

    /// Well-formed trip of 1 to 30 days.
    pub fn arb_trip_details() -> impl Strategy<Value = TripDetails> {
        (
            "[A-Z][a-z]{2,12}",
            "[A-Z][a-z]{2,12}",
            arb_date(),
            0i64..30,
            arb_purpose(),
            arb_traveler_details(),
            arb_luggage(),
        )
            .prop_map(
                |(city, country, start, extra_days, purpose, traveler_details, luggage_capacity)| {
                    TripDetails {
                        destination: Destination { city, country },
                        dates: TripDates {
                            start,
                            end: start + chrono::Duration::days(extra_days),
                        },
                        purpose,
                        traveler_details,
                        luggage_capacity,
                    }
                },
            )
    }

    /// One day of weather with min <= max.
    pub fn arb_daily_weather(date: NaiveDate) -> impl Strategy<Value = DailyWeather> {
        (-25.0f64..40.0, 0.0f64..15.0, 0.0f64..100.0, prop_oneof![Just(0.0f64), 0.1f64..30.0])
            .prop_map(move |(temp_min, spread, humidity, precipitation_mm)| DailyWeather {
                date,
                temp_max: temp_min + spread,
                temp_min,
                humidity,
                description: "Generated".to_string(),
                condition_code: "1000".to_string(),
                precipitation_mm,
            })
    }

    /// Non-empty forecast of 1 to 10 days.
    pub fn arb_forecast() -> impl Strategy<Value = WeatherForecast> {
        (arb_date(), 1usize..=10)
            .prop_flat_map(|(start, len)| {
                let days: Vec<_> = (0..len)
                    .map(|offset| arb_daily_weather(start + chrono::Duration::days(offset as i64)))
                    .collect();
                (days, -25.0f64..40.0)
            })
            .prop_map(|(daily, temp)| WeatherForecast {
                city: "Generated".to_string(),
                country: "Nowhere".to_string(),
                current: CurrentWeather {
                    temp,
                    humidity: 50.0,
                    description: "Generated".to_string(),
                    condition_code: "1000".to_string(),
                },
                daily,
            })
    }
}

// ============================================================================
// TEST FIXTURES
// ============================================================================

pub mod fixtures {
    //! Pre-built test fixtures for common testing scenarios.

    use super::*;

    /// Lisbon, 2024-07-01..2024-07-08 (8 days), beach, carry-on.
    pub fn lisbon_beach_trip() -> TripDetails {
        TripDetails {
            destination: Destination {
                city: "Lisbon".to_string(),
                country: "Portugal".to_string(),
            },
            dates: TripDates {
                start: date(2024, 7, 1),
                end: date(2024, 7, 8),
            },
            purpose: TripPurpose::Beach,
            traveler_details: TravelerDetails::default(),
            luggage_capacity: LuggageCapacity::CarryOn,
        }
    }

    /// Lisbon trip starting 2024-07-01 with the given parameters.
    pub fn trip_with(purpose: TripPurpose, luggage: LuggageCapacity, days: i64) -> TripDetails {
        let mut trip = lisbon_beach_trip();
        trip.purpose = purpose;
        trip.luggage_capacity = luggage;
        trip.dates.end = trip.dates.start + chrono::Duration::days(days - 1);
        trip
    }

    /// Seven-day forecast with constant temperatures; the first `rainy_days` days get 2.5mm.
    pub fn forecast_with(temp_min: f64, temp_max: f64, rainy_days: usize) -> WeatherForecast {
        let start = date(2024, 7, 1);
        WeatherForecast {
            city: "Lisbon".to_string(),
            country: "Portugal".to_string(),
            current: CurrentWeather {
                temp: (temp_min + temp_max) / 2.0,
                humidity: 60.0,
                description: "Partly cloudy".to_string(),
                condition_code: "1003".to_string(),
            },
            daily: (0..7)
                .map(|offset| DailyWeather {
                    date: start + chrono::Duration::days(offset as i64),
                    temp_max,
                    temp_min,
                    humidity: 60.0,
                    description: if offset < rainy_days {
                        "Patchy rain possible".to_string()
                    } else {
                        "Partly cloudy".to_string()
                    },
                    condition_code: if offset < rainy_days { "1063" } else { "1003" }.to_string(),
                    precipitation_mm: if offset < rainy_days { 2.5 } else { 0.0 },
                })
                .collect(),
        }
    }

    /// Average max 29°C, average min 22°C, no precipitation.
    pub fn hot_dry_forecast() -> WeatherForecast {
        forecast_with(22.0, 29.0, 0)
    }

    /// Average min 2°C, average max 8°C, rain on two days.
    pub fn cold_wet_forecast() -> WeatherForecast {
        forecast_with(2.0, 8.0, 2)
    }

    /// Average min 16°C, average max 22°C, no precipitation. Fires no weather rule.
    pub fn mild_dry_forecast() -> WeatherForecast {
        forecast_with(16.0, 22.0, 0)
    }

    /// Average max 30°C with rain on one day.
    pub fn hot_wet_forecast() -> WeatherForecast {
        forecast_with(20.0, 30.0, 1)
    }
}

// ============================================================================
// CUSTOM ASSERTIONS
// ============================================================================

pub mod assertions {
    //! Custom assertion functions for packing lists.

    use super::*;
    use std::collections::HashSet;

    /// Assert that no two items share a name.
    #[track_caller]
    pub fn assert_unique_names(list: &PackingList) {
        let mut seen = HashSet::new();
        for item in &list.items {
            assert!(seen.insert(item.name.as_str()), "Duplicate item name: {}", item.name);
        }
    }

    /// Assert that an item with this name is present and return it.
    #[track_caller]
    pub fn assert_has_item<'a>(list: &'a PackingList, name: &str) -> &'a PackingItem {
        match list.items.iter().find(|item| item.name == name) {
            Some(item) => item,
            None => panic!("Expected item '{}' in {}", name, list.name),
        }
    }

    /// Assert that no item with this name is present.
    #[track_caller]
    pub fn assert_lacks_item(list: &PackingList, name: &str) {
        assert!(
            list.items.iter().all(|item| item.name != name),
            "Unexpected item '{}' in {}",
            name,
            list.name
        );
    }

    /// Assert two lists hold the same items in the same order, ignoring ids.
    #[track_caller]
    pub fn assert_same_items_ignoring_ids(a: &PackingList, b: &PackingList) {
        let shape = |list: &PackingList| -> Vec<(String, PackingCategory, bool, u32)> {
            list.items
                .iter()
                .map(|item| (item.name.clone(), item.category, item.essential, item.quantity))
                .collect()
        };
        assert_eq!(shape(a), shape(b));
    }
}

fn base_date() -> NaiveDate {
    date(2020, 1, 1)
}

fn date(year: i32, month: u32, day: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(year, month, day).unwrap_or_default()
}
