//! Saved trips, stored as a JSON array of trip details.
//!
//! A trip is identified by its destination city and start date; saving a
//! trip with the same pair replaces the earlier entry.

use chrono::NaiveDate;
use packpal_core::TripDetails;
use std::path::Path;

#[derive(Debug, thiserror::Error)]
pub enum PersistenceError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("Serialization error: {0}")]
    Serde(#[from] serde_json::Error),
}

/// All saved trips in save order. A missing file is an empty list.
pub fn load(path: &Path) -> Result<Vec<TripDetails>, PersistenceError> {
    if !path.exists() {
        return Ok(Vec::new());
    }
    let contents = std::fs::read_to_string(path)?;
    let trips = serde_json::from_str::<Vec<TripDetails>>(&contents)?;
    Ok(trips)
}

pub fn save(path: &Path, trips: &[TripDetails]) -> Result<(), PersistenceError> {
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent)?;
    }
    let contents = serde_json::to_string_pretty(trips)?;
    std::fs::write(path, contents)?;
    Ok(())
}

/// Replace any trip with the same (city, start date) and append `trip`.
pub fn save_trip(path: &Path, trip: &TripDetails) -> Result<Vec<TripDetails>, PersistenceError> {
    let mut trips = load(path)?;
    trips.retain(|saved| !same_trip_key(saved, &trip.destination.city, trip.dates.start));
    trips.push(trip.clone());
    save(path, &trips)?;
    tracing::info!(
        city = %trip.destination.city,
        start = %trip.dates.start,
        saved = trips.len(),
        "Saved trip"
    );
    Ok(trips)
}

/// Remove the trip with this (city, start date). Returns whether one was removed.
pub fn remove_trip(path: &Path, city: &str, start: NaiveDate) -> Result<bool, PersistenceError> {
    let mut trips = load(path)?;
    let before = trips.len();
    trips.retain(|saved| !same_trip_key(saved, city, start));
    let removed = trips.len() != before;
    if removed {
        save(path, &trips)?;
        tracing::info!(city, %start, "Removed saved trip");
    }
    Ok(removed)
}

fn same_trip_key(trip: &TripDetails, city: &str, start: NaiveDate) -> bool {
    trip.destination.city == city && trip.dates.start == start
}
