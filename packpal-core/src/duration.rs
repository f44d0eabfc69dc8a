//! Trip length in travel days.

use crate::TripDates;
use chrono::NaiveDate;

/// Inclusive day count between two calendar dates.
///
/// Both the start and the end day count as travel days, so a same-day trip
/// lasts 1 day. Reversed dates yield zero or a negative count; quantity
/// rules clamp those to 1.
pub fn trip_duration_days(start: NaiveDate, end: NaiveDate) -> i64 {
    (end - start).num_days() + 1
}

impl TripDates {
    pub fn duration_days(&self) -> i64 {
        trip_duration_days(self.start, self.end)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn test_same_day_is_one_day() {
        assert_eq!(trip_duration_days(date(2024, 7, 1), date(2024, 7, 1)), 1);
    }

    #[test]
    fn test_week_is_inclusive() {
        assert_eq!(trip_duration_days(date(2024, 7, 1), date(2024, 7, 8)), 8);
    }

    #[test]
    fn test_crosses_month_and_leap_day() {
        assert_eq!(trip_duration_days(date(2024, 2, 27), date(2024, 3, 1)), 4);
    }

    #[test]
    fn test_reversed_dates_do_not_panic() {
        assert_eq!(trip_duration_days(date(2024, 7, 8), date(2024, 7, 1)), -6);
    }

    #[test]
    fn test_trip_dates_helper() {
        let dates = TripDates {
            start: date(2024, 12, 30),
            end: date(2025, 1, 2),
        };
        assert_eq!(dates.duration_days(), 4);
    }
}
