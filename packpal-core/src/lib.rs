//! PackPal Core - Packing-List Engine
//!
//! Data types for trips, forecasts and packing lists, and the deterministic
//! rule engine that maps a trip plus a forecast to a deduplicated,
//! categorized packing list. No I/O happens in this crate.

mod catalog;
mod duration;
mod entities;
mod enums;
mod error;
mod generator;
mod identity;
mod list;
mod provider;
mod trip;
mod weather;

pub use catalog::{
    CandidateItem, Catalog, ItemTemplate, QuantityRule, Rule, RuleCondition, RuleFamily,
    TripSignals, COLD_MIN_TEMP_C, COOL_MIN_TEMP_C, DAYS_PER_PANTS, HOT_MAX_TEMP_C,
    LAUNDRY_CYCLE_DAYS,
};
pub use duration::trip_duration_days;
pub use entities::{
    CurrentWeather, DailyWeather, Destination, PackingItem, PackingList, TravelerDetails,
    TripDates, TripDetails, WeatherForecast,
};
pub use enums::{AgeRange, EnumParseError, Gender, LuggageCapacity, PackingCategory, TripPurpose};
pub use error::{
    ForecastError, ItemError, PackpalError, PackpalResult, ProviderError, ValidationError,
};
pub use generator::{dedup_by_name, generate_packing_list, generate_with_catalog, trip_signals};
pub use identity::{
    new_entity_id, EntityId, EntityIdType, PackingItemId, PackingListId, Timestamp, TripId,
};
pub use list::{ItemPatch, PackingProgress};
pub use provider::WeatherProvider;
pub use trip::TripDraft;
pub use weather::WeatherSummary;
