//! Trip form input and its validation into [`TripDetails`].

use crate::{
    Destination, LuggageCapacity, TravelerDetails, TripDates, TripDetails, TripPurpose,
    ValidationError,
};
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Raw trip form as entered by the traveler.
///
/// Every field is optional or free text; [`TripDraft::validate`] is the only
/// way to turn it into [`TripDetails`].
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct TripDraft {
    pub city: String,
    pub country: String,
    pub start_date: Option<String>,
    pub end_date: Option<String>,
    pub purpose: Option<String>,
    pub luggage_capacity: Option<String>,
    pub traveler_details: TravelerDetails,
}

impl TripDraft {
    pub fn validate(&self) -> Result<TripDetails, ValidationError> {
        let city = required_text("city", &self.city)?;
        let country = required_text("country", &self.country)?;
        let start = parse_date("startDate", self.start_date.as_deref())?;
        let end = parse_date("endDate", self.end_date.as_deref())?;
        if end < start {
            return Err(ValidationError::DateOrder { start, end });
        }

        let purpose = self
            .purpose
            .as_deref()
            .filter(|value| !value.trim().is_empty())
            .ok_or(ValidationError::RequiredFieldMissing { field: "purpose" })?
            .parse::<TripPurpose>()
            .map_err(|err| ValidationError::InvalidValue {
                field: "purpose",
                reason: err.to_string(),
            })?;

        let luggage_capacity = self
            .luggage_capacity
            .as_deref()
            .filter(|value| !value.trim().is_empty())
            .ok_or(ValidationError::RequiredFieldMissing {
                field: "luggageCapacity",
            })?
            .parse::<LuggageCapacity>()
            .map_err(|err| ValidationError::InvalidValue {
                field: "luggageCapacity",
                reason: err.to_string(),
            })?;

        Ok(TripDetails {
            destination: Destination { city, country },
            dates: TripDates { start, end },
            purpose,
            traveler_details: self.traveler_details.clone(),
            luggage_capacity,
        })
    }
}

impl From<&TripDetails> for TripDraft {
    fn from(trip: &TripDetails) -> Self {
        Self {
            city: trip.destination.city.clone(),
            country: trip.destination.country.clone(),
            start_date: Some(trip.dates.start.to_string()),
            end_date: Some(trip.dates.end.to_string()),
            purpose: Some(trip.purpose.to_string()),
            luggage_capacity: Some(trip.luggage_capacity.to_string()),
            traveler_details: trip.traveler_details.clone(),
        }
    }
}

fn required_text(field: &'static str, value: &str) -> Result<String, ValidationError> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        return Err(ValidationError::RequiredFieldMissing { field });
    }
    Ok(trimmed.to_string())
}

fn parse_date(field: &'static str, value: Option<&str>) -> Result<NaiveDate, ValidationError> {
    let raw = value
        .map(str::trim)
        .filter(|v| !v.is_empty())
        .ok_or(ValidationError::RequiredFieldMissing { field })?;
    NaiveDate::parse_from_str(raw, "%Y-%m-%d").map_err(|err| ValidationError::InvalidValue {
        field,
        reason: format!("'{}' is not an ISO date: {}", raw, err),
    })
}
