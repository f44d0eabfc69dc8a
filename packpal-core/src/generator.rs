//! List assembly: trip + forecast -> deduplicated packing list.

use crate::{
    CandidateItem, Catalog, EntityIdType, PackingItem, PackingItemId, PackingList, PackingListId,
    PackpalResult, TripDetails, TripId, TripSignals, WeatherForecast, WeatherSummary,
};
use chrono::Utc;
use std::collections::HashSet;

/// Generate a packing list from the standard catalog.
pub fn generate_packing_list(
    trip: &TripDetails,
    forecast: &WeatherForecast,
) -> PackpalResult<PackingList> {
    generate_with_catalog(Catalog::standard(), trip, forecast)
}

/// Generate a packing list from any rule catalog.
///
/// Fails only when the forecast is unusable. Ids and timestamps are fresh on
/// every call; everything else is a pure function of the inputs.
pub fn generate_with_catalog(
    catalog: &Catalog,
    trip: &TripDetails,
    forecast: &WeatherForecast,
) -> PackpalResult<PackingList> {
    let signals = trip_signals(trip, forecast)?;
    let candidates = catalog.candidates(&signals);
    let candidate_count = candidates.len();
    let items: Vec<PackingItem> = dedup_by_name(candidates)
        .into_iter()
        .map(into_packing_item)
        .collect();

    tracing::debug!(
        city = %trip.destination.city,
        purpose = %trip.purpose,
        luggage = %trip.luggage_capacity,
        trip_days = signals.trip_days,
        avg_temp_min = signals.weather.avg_temp_min,
        avg_temp_max = signals.weather.avg_temp_max,
        has_precipitation = signals.weather.has_precipitation,
        candidates = candidate_count,
        items = items.len(),
        "Generated packing list"
    );

    let now = Utc::now();
    Ok(PackingList {
        id: PackingListId::now_v7(),
        name: format!("{} Trip", trip.destination.city),
        trip_id: TripId::now_v7(),
        items,
        created_at: now,
        updated_at: now,
    })
}

/// Signals the rule conditions are evaluated against.
pub fn trip_signals(trip: &TripDetails, forecast: &WeatherForecast) -> PackpalResult<TripSignals> {
    let weather = WeatherSummary::from_daily(&forecast.daily)?;
    Ok(TripSignals {
        trip_days: trip.dates.duration_days(),
        weather,
        purpose: trip.purpose,
        luggage: trip.luggage_capacity,
    })
}

/// Keep the first candidate for every name, in order.
pub fn dedup_by_name(candidates: Vec<CandidateItem>) -> Vec<CandidateItem> {
    let mut seen = HashSet::with_capacity(candidates.len());
    candidates
        .into_iter()
        .filter(|candidate| seen.insert(candidate.name.clone()))
        .collect()
}

fn into_packing_item(candidate: CandidateItem) -> PackingItem {
    PackingItem {
        id: PackingItemId::now_v7(),
        name: candidate.name,
        category: candidate.category,
        checked: false,
        essential: candidate.essential,
        quantity: candidate.quantity,
        weight: None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{
        CurrentWeather, DailyWeather, Destination, ForecastError, LuggageCapacity,
        PackingCategory, PackpalError, RuleFamily, TravelerDetails, TripDates, TripPurpose,
    };
    use chrono::NaiveDate;

    fn trip(purpose: TripPurpose, luggage: LuggageCapacity, days: i64) -> TripDetails {
        let start = NaiveDate::from_ymd_opt(2024, 7, 1).unwrap();
        TripDetails {
            destination: Destination {
                city: "Lisbon".to_string(),
                country: "Portugal".to_string(),
            },
            dates: TripDates {
                start,
                end: start + chrono::Duration::days(days - 1),
            },
            purpose,
            traveler_details: TravelerDetails::default(),
            luggage_capacity: luggage,
        }
    }

    fn forecast(temp_min: f64, temp_max: f64, precipitation_mm: f64) -> WeatherForecast {
        let start = NaiveDate::from_ymd_opt(2024, 7, 1).unwrap();
        WeatherForecast {
            city: "Lisbon".to_string(),
            country: "Portugal".to_string(),
            current: CurrentWeather {
                temp: temp_max,
                humidity: 50.0,
                description: "Clear".to_string(),
                condition_code: "1000".to_string(),
            },
            daily: (0..7)
                .map(|offset| DailyWeather {
                    date: start + chrono::Duration::days(offset),
                    temp_max,
                    temp_min,
                    humidity: 50.0,
                    description: "Clear".to_string(),
                    condition_code: "1000".to_string(),
                    precipitation_mm: if offset == 3 { precipitation_mm } else { 0.0 },
                })
                .collect(),
        }
    }

    fn item<'a>(list: &'a PackingList, name: &str) -> Option<&'a PackingItem> {
        list.items.iter().find(|item| item.name == name)
    }

    #[test]
    fn test_list_name_and_fresh_items() {
        let list = generate_packing_list(
            &trip(TripPurpose::Leisure, LuggageCapacity::Checked, 3),
            &forecast(16.0, 22.0, 0.0),
        )
        .unwrap();
        assert_eq!(list.name, "Lisbon Trip");
        assert_eq!(list.created_at, list.updated_at);
        assert!(list.items.iter().all(|item| !item.checked && item.weight.is_none()));
    }

    #[test]
    fn test_item_ids_are_unique() {
        let list = generate_packing_list(
            &trip(TripPurpose::Adventure, LuggageCapacity::Checked, 5),
            &forecast(2.0, 28.0, 3.0),
        )
        .unwrap();
        let ids: HashSet<_> = list.items.iter().map(|item| item.id).collect();
        assert_eq!(ids.len(), list.items.len());
    }

    #[test]
    fn test_ten_day_trip_quantities() {
        let list = generate_packing_list(
            &trip(TripPurpose::Leisure, LuggageCapacity::Checked, 10),
            &forecast(16.0, 22.0, 0.0),
        )
        .unwrap();
        for name in ["Underwear", "Socks", "T-shirts"] {
            assert_eq!(item(&list, name).unwrap().quantity, 7, "{}", name);
        }
        assert_eq!(item(&list, "Pants/Trousers").unwrap().quantity, 4);
    }

    #[test]
    fn test_reversed_dates_still_generate_with_minimum_quantities() {
        let mut reversed = trip(TripPurpose::Leisure, LuggageCapacity::Checked, 3);
        std::mem::swap(&mut reversed.dates.start, &mut reversed.dates.end);
        let list = generate_packing_list(&reversed, &forecast(16.0, 22.0, 0.0)).unwrap();
        assert_eq!(item(&list, "Underwear").unwrap().quantity, 1);
        assert_eq!(item(&list, "Pants/Trousers").unwrap().quantity, 1);
    }

    #[test]
    fn test_first_family_wins_on_name_collision() {
        // Adventure lists First Aid Kit as essential; base essentials list it as optional.
        let list = generate_packing_list(
            &trip(TripPurpose::Adventure, LuggageCapacity::Checked, 4),
            &forecast(16.0, 22.0, 0.0),
        )
        .unwrap();
        let kits: Vec<_> = list
            .items
            .iter()
            .filter(|item| item.name == "First Aid Kit")
            .collect();
        assert_eq!(kits.len(), 1);
        assert!(!kits[0].essential);
        assert_eq!(kits[0].category, PackingCategory::Medicine);
    }

    #[test]
    fn test_beach_sunglasses_from_hot_weather_rule() {
        let list = generate_packing_list(
            &trip(TripPurpose::Beach, LuggageCapacity::CarryOn, 8),
            &forecast(22.0, 29.0, 0.0),
        )
        .unwrap();
        // Hot weather lists Sunglasses as optional, beach as essential.
        assert!(!item(&list, "Sunglasses").unwrap().essential);
        assert!(!item(&list, "Hat/Cap").unwrap().essential);
    }

    #[test]
    fn test_empty_forecast_is_rejected() {
        let mut empty = forecast(16.0, 22.0, 0.0);
        empty.daily.clear();
        let result = generate_packing_list(
            &trip(TripPurpose::Leisure, LuggageCapacity::Checked, 3),
            &empty,
        );
        assert_eq!(
            result,
            Err(PackpalError::InvalidForecast(ForecastError::EmptyForecast))
        );
    }

    #[test]
    fn test_dedup_keeps_first_occurrence_order() {
        let make = |name: &str, quantity: u32, family: RuleFamily| CandidateItem {
            name: name.to_string(),
            category: PackingCategory::Accessories,
            essential: false,
            quantity,
            family,
        };
        let deduped = dedup_by_name(vec![
            make("A", 1, RuleFamily::BaseEssentials),
            make("B", 1, RuleFamily::Weather),
            make("A", 5, RuleFamily::Purpose),
            make("a", 1, RuleFamily::Purpose),
        ]);
        let names: Vec<_> = deduped.iter().map(|c| c.name.as_str()).collect();
        assert_eq!(names, vec!["A", "B", "a"]);
        assert_eq!(deduped[0].quantity, 1);
    }
}
