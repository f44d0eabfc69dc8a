//! Core entity structures

use crate::{
    AgeRange, Gender, LuggageCapacity, PackingCategory, PackingItemId, PackingListId, Timestamp,
    TripId, TripPurpose,
};
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

// ============================================================================
// TRIP
// ============================================================================

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
pub struct Destination {
    pub city: String,
    pub country: String,
}

/// Travel dates, both inclusive.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
pub struct TripDates {
    pub start: NaiveDate,
    pub end: NaiveDate,
}

/// Optional traveler attributes. Collected by the form, not consulted by any rule.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
pub struct TravelerDetails {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub gender: Option<Gender>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub age_range: Option<AgeRange>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub special_requirements: Option<String>,
}

/// Validated trip parameters. Build one through [`crate::TripDraft::validate`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
pub struct TripDetails {
    pub destination: Destination,
    pub dates: TripDates,
    pub purpose: TripPurpose,
    #[serde(default)]
    pub traveler_details: TravelerDetails,
    pub luggage_capacity: LuggageCapacity,
}

// ============================================================================
// WEATHER
// ============================================================================

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
pub struct CurrentWeather {
    /// Degrees Celsius.
    pub temp: f64,
    /// Relative humidity, 0-100.
    pub humidity: f64,
    pub description: String,
    /// Provider condition code.
    #[serde(rename = "icon")]
    pub condition_code: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
pub struct DailyWeather {
    pub date: NaiveDate,
    pub temp_max: f64,
    pub temp_min: f64,
    pub humidity: f64,
    pub description: String,
    #[serde(rename = "icon")]
    pub condition_code: String,
    #[serde(rename = "precipitation")]
    pub precipitation_mm: f64,
}

/// Multi-day forecast as resolved by a [`crate::WeatherProvider`].
///
/// `city` and `country` echo the provider's normalization and may differ
/// from the trip destination.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
pub struct WeatherForecast {
    pub city: String,
    pub country: String,
    pub current: CurrentWeather,
    pub daily: Vec<DailyWeather>,
}

// ============================================================================
// PACKING LIST
// ============================================================================

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
pub struct PackingItem {
    #[cfg_attr(feature = "openapi", schema(value_type = String, format = "uuid"))]
    pub id: PackingItemId,
    pub name: String,
    pub category: PackingCategory,
    pub checked: bool,
    pub essential: bool,
    pub quantity: u32,
    /// Grams. Reserved, never set by generation.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub weight: Option<u32>,
}

/// A generated checklist.
///
/// Generation guarantees unique item names; custom items added later may
/// repeat a name.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
pub struct PackingList {
    #[cfg_attr(feature = "openapi", schema(value_type = String, format = "uuid"))]
    pub id: PackingListId,
    pub name: String,
    #[cfg_attr(feature = "openapi", schema(value_type = String, format = "uuid"))]
    pub trip_id: TripId,
    pub items: Vec<PackingItem>,
    #[cfg_attr(feature = "openapi", schema(value_type = String, format = "date-time"))]
    pub created_at: Timestamp,
    #[cfg_attr(feature = "openapi", schema(value_type = String, format = "date-time"))]
    pub updated_at: Timestamp,
}
