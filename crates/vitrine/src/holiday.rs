//! Seasonal gate for festive embellishments.

use chrono::{Datelike, NaiveDate};

/// Whether the given date falls in the festive window.
///
/// The window covers all of December and the first week of January. The
/// decorative crates never consult the calendar themselves; they consume
/// this boolean only.
pub fn is_holiday_season(date: NaiveDate) -> bool {
    match date.month() {
        12 => true,
        1 => date.day() <= 7,
        _ => false,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn test_december_is_festive() {
        assert!(is_holiday_season(date(2025, 12, 1)));
        assert!(is_holiday_season(date(2025, 12, 25)));
        assert!(is_holiday_season(date(2025, 12, 31)));
    }

    #[test]
    fn test_early_january_is_festive() {
        assert!(is_holiday_season(date(2026, 1, 1)));
        assert!(is_holiday_season(date(2026, 1, 7)));
        assert!(!is_holiday_season(date(2026, 1, 8)));
    }

    #[test]
    fn test_rest_of_year_is_not() {
        assert!(!is_holiday_season(date(2026, 8, 23)));
        assert!(!is_holiday_season(date(2025, 11, 30)));
    }
}
