//! Clock-time parsing and elapsed-hours arithmetic.
//!
//! Times are entered as "HH:MM". Malformed input is a recoverable
//! condition, not an error: parsing yields `None` and elapsed-hours
//! calculations on unparsable input yield zero.

use chrono::{NaiveTime, Timelike};
use rust_decimal::Decimal;

/// Minutes in a full day, added once when a shift wraps past midnight.
const MINUTES_PER_DAY: i64 = 1440;

/// Parses an "HH:MM" string into a time of day.
///
/// Accepts unpadded hours ("8:30"). Returns `None` for anything that is
/// not two numeric fields within 0-23 hours and 0-59 minutes.
///
/// # Example
///
/// ```
/// use payslip_engine::calculation::parse_time;
/// use chrono::NaiveTime;
///
/// assert_eq!(parse_time("08:30"), NaiveTime::from_hms_opt(8, 30, 0));
/// assert_eq!(parse_time("8:30"), NaiveTime::from_hms_opt(8, 30, 0));
/// assert_eq!(parse_time("24:00"), None);
/// assert_eq!(parse_time("bananas"), None);
/// ```
pub fn parse_time(input: &str) -> Option<NaiveTime> {
    let (hours, minutes) = input.trim().split_once(':')?;
    let hours: u32 = hours.trim().parse().ok()?;
    let minutes: u32 = minutes.trim().parse().ok()?;
    NaiveTime::from_hms_opt(hours, minutes, 0)
}

/// Elapsed hours between two times of day, assuming an overnight shift
/// when the end precedes the start.
///
/// # Example
///
/// ```
/// use payslip_engine::calculation::elapsed_hours;
/// use chrono::NaiveTime;
/// use rust_decimal::Decimal;
///
/// let start = NaiveTime::from_hms_opt(23, 0, 0).unwrap();
/// let end = NaiveTime::from_hms_opt(1, 0, 0).unwrap();
/// assert_eq!(elapsed_hours(start, end), Decimal::new(2, 0));
/// ```
pub fn elapsed_hours(start: NaiveTime, end: NaiveTime) -> Decimal {
    let start_minutes = i64::from(start.num_seconds_from_midnight()) / 60;
    let end_minutes = i64::from(end.num_seconds_from_midnight()) / 60;

    let mut diff = end_minutes - start_minutes;
    if diff < 0 {
        diff += MINUTES_PER_DAY;
    }

    Decimal::new(diff, 0) / Decimal::new(60, 0)
}

/// Elapsed hours between two raw "HH:MM" strings.
///
/// Malformed input yields zero rather than an error, consistent with the
/// best-effort entry model.
pub fn elapsed_hours_between(start: &str, end: &str) -> Decimal {
    match (parse_time(start), parse_time(end)) {
        (Some(start), Some(end)) => elapsed_hours(start, end),
        _ => Decimal::ZERO,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;

    fn dec(s: &str) -> Decimal {
        Decimal::from_str(s).unwrap()
    }

    #[test]
    fn test_parse_time_padded_and_unpadded() {
        assert_eq!(parse_time("08:00"), NaiveTime::from_hms_opt(8, 0, 0));
        assert_eq!(parse_time("8:00"), NaiveTime::from_hms_opt(8, 0, 0));
        assert_eq!(parse_time(" 16:45 "), NaiveTime::from_hms_opt(16, 45, 0));
    }

    #[test]
    fn test_parse_time_rejects_out_of_range() {
        assert_eq!(parse_time("24:00"), None);
        assert_eq!(parse_time("12:60"), None);
        assert_eq!(parse_time("-1:00"), None);
    }

    #[test]
    fn test_parse_time_rejects_garbage() {
        assert_eq!(parse_time(""), None);
        assert_eq!(parse_time("noon"), None);
        assert_eq!(parse_time("12.30"), None);
        assert_eq!(parse_time("12:"), None);
    }

    #[test]
    fn test_ordinary_day_shift() {
        assert_eq!(elapsed_hours_between("08:00", "16:00"), dec("8"));
        assert_eq!(elapsed_hours_between("09:15", "17:45"), dec("8.5"));
    }

    #[test]
    fn test_overnight_wraparound() {
        assert_eq!(elapsed_hours_between("23:00", "01:00"), dec("2"));
        assert_eq!(elapsed_hours_between("22:30", "06:30"), dec("8"));
    }

    #[test]
    fn test_zero_duration() {
        assert_eq!(elapsed_hours_between("08:00", "08:00"), dec("0"));
    }

    #[test]
    fn test_malformed_input_yields_zero() {
        assert_eq!(elapsed_hours_between("", "16:00"), Decimal::ZERO);
        assert_eq!(elapsed_hours_between("08:00", "later"), Decimal::ZERO);
        assert_eq!(elapsed_hours_between("25:00", "16:00"), Decimal::ZERO);
    }

    #[test]
    fn test_fractional_hours() {
        assert_eq!(elapsed_hours_between("08:00", "08:20"), dec("20") / dec("60"));
    }
}
