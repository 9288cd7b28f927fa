//! Calendar classification helpers.
//!
//! Pure functions over dates: Saturday detection and the Sunday-anchored
//! week start used by the Friday weekly cap and the weekly overtime guard.
//! Holiday classification lives on [`crate::config::HolidayTable`] since
//! the date set is configuration.

use chrono::{Datelike, Days, NaiveDate, Weekday};

/// Returns true if the date falls on Saturday.
///
/// # Example
///
/// ```
/// use payslip_engine::calculation::is_saturday;
/// use chrono::NaiveDate;
///
/// // 2025-07-05 is a Saturday
/// assert!(is_saturday(NaiveDate::from_ymd_opt(2025, 7, 5).unwrap()));
/// assert!(!is_saturday(NaiveDate::from_ymd_opt(2025, 7, 6).unwrap()));
/// ```
pub fn is_saturday(date: NaiveDate) -> bool {
    date.weekday() == Weekday::Sat
}

/// Returns the Sunday that anchors the week containing `date`.
///
/// Weeks run Sunday through Saturday.
///
/// # Example
///
/// ```
/// use payslip_engine::calculation::week_start;
/// use chrono::NaiveDate;
///
/// // 2025-07-09 is a Wednesday; its week starts Sunday 2025-07-06.
/// let wednesday = NaiveDate::from_ymd_opt(2025, 7, 9).unwrap();
/// assert_eq!(week_start(wednesday), NaiveDate::from_ymd_opt(2025, 7, 6).unwrap());
/// ```
pub fn week_start(date: NaiveDate) -> NaiveDate {
    let days_from_sunday = date.weekday().num_days_from_sunday();
    date.checked_sub_days(Days::new(u64::from(days_from_sunday)))
        .unwrap_or(date)
}

/// Returns true if the weekday is Sunday through Thursday — the days whose
/// capped hours count toward the Friday weekly ceiling.
pub fn is_sunday_to_thursday(weekday: Weekday) -> bool {
    !matches!(weekday, Weekday::Fri | Weekday::Sat)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn test_saturday_detection() {
        assert!(is_saturday(date(2025, 7, 5)));
        assert!(is_saturday(date(2025, 7, 12)));
        assert!(!is_saturday(date(2025, 7, 11))); // Friday
    }

    #[test]
    fn test_week_start_of_sunday_is_itself() {
        assert_eq!(week_start(date(2025, 7, 6)), date(2025, 7, 6));
    }

    #[test]
    fn test_week_start_of_saturday_is_preceding_sunday() {
        assert_eq!(week_start(date(2025, 7, 12)), date(2025, 7, 6));
    }

    #[test]
    fn test_week_start_crosses_month_boundary() {
        // 2025-07-01 is a Tuesday; its week starts Sunday 2025-06-29.
        assert_eq!(week_start(date(2025, 7, 1)), date(2025, 6, 29));
    }

    #[test]
    fn test_sunday_to_thursday_classification() {
        assert!(is_sunday_to_thursday(Weekday::Sun));
        assert!(is_sunday_to_thursday(Weekday::Thu));
        assert!(!is_sunday_to_thursday(Weekday::Fri));
        assert!(!is_sunday_to_thursday(Weekday::Sat));
    }
}
