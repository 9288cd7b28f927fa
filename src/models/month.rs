//! The raw month dataset and the day-grid builder.
//!
//! A [`RawMonthDataset`] is everything the caller hands the engine for one
//! employee-month: the profile and the ordered raw day rows (dates are
//! implicit from calendar position). [`build_day_grid`] stamps each
//! calendar day with its date, weekday name and Saturday/holiday flags.
//! [`apply_bulk_paste`] applies tab-separated time pairs positionally,
//! skipping malformed rows.

use chrono::{Datelike, NaiveDate, Weekday};
use serde::{Deserialize, Serialize};

use crate::calculation::parse_time;
use crate::config::HolidayTable;

use super::{DayRecord, EmployeeProfile, RawDay};

/// The raw input for one employee-month.
///
/// Days are ordered by calendar position: `days[0]` is the 1st of the
/// month. Missing trailing rows are treated as empty days; surplus rows
/// beyond the month's length are ignored.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RawMonthDataset {
    /// The employee profile (read-only to the engine).
    pub employee: EmployeeProfile,
    /// The calendar year.
    pub year: i32,
    /// The calendar month (1-12).
    pub month: u32,
    /// Ordered raw day rows; position implies the date.
    #[serde(default)]
    pub days: Vec<RawDay>,
}

/// Returns the display name for a weekday.
pub fn day_name(weekday: Weekday) -> &'static str {
    match weekday {
        Weekday::Sun => "Sunday",
        Weekday::Mon => "Monday",
        Weekday::Tue => "Tuesday",
        Weekday::Wed => "Wednesday",
        Weekday::Thu => "Thursday",
        Weekday::Fri => "Friday",
        Weekday::Sat => "Saturday",
    }
}

/// Builds the month's day grid with dates and calendar flags stamped.
///
/// Returns one [`DayRecord`] per calendar day of `year`/`month`, pairing
/// each with its raw row by position. An invalid month yields an empty
/// grid — the calculation is best-effort and never fails.
pub fn build_day_grid(
    year: i32,
    month: u32,
    raw_days: &[RawDay],
    holidays: &HolidayTable,
) -> Vec<DayRecord> {
    let Some(first) = NaiveDate::from_ymd_opt(year, month, 1) else {
        return Vec::new();
    };

    let mut grid = Vec::new();
    let mut date = first;
    while date.month() == month {
        let weekday = date.weekday();
        let mut record = DayRecord::empty(
            date,
            day_name(weekday).to_string(),
            weekday == Weekday::Sat,
            holidays.contains(date),
        );

        if let Some(raw) = raw_days.get(grid.len()) {
            apply_raw_day(&mut record, raw);
        }

        grid.push(record);
        match date.succ_opt() {
            Some(next) => date = next,
            None => break,
        }
    }
    grid
}

/// Normalizes one raw row onto its day record.
///
/// Marks are mutually exclusive; when both survive entry, the sick mark
/// wins and the vacation mark is dropped. A marked day's entered times are
/// discarded — the sequencer owns them.
fn apply_raw_day(record: &mut DayRecord, raw: &RawDay) {
    record.advance_payment = raw.advance_payment.unwrap_or_default();

    if raw.is_sick_marked() {
        record.sick_marked = true;
        return;
    }
    if raw.is_vacation_marked() {
        record.vacation_marked = true;
        return;
    }

    record.start_time = raw.start_time.as_deref().and_then(parse_time);
    record.end_time = raw.end_time.as_deref().and_then(parse_time);
}

/// Applies a pasted block of tab-separated `start\tend` rows positionally.
///
/// Row `i` targets `days[i]`. A row is skipped (the existing values kept)
/// when it has no tab, or when either time fails to parse. Rows beyond the
/// day list are ignored.
///
/// # Example
///
/// ```
/// use payslip_engine::models::{apply_bulk_paste, RawDay};
///
/// let mut days = vec![RawDay::default(), RawDay::default()];
/// apply_bulk_paste(&mut days, "08:00\t16:00\nnot a time\t16:00");
///
/// assert_eq!(days[0].start_time.as_deref(), Some("08:00"));
/// assert_eq!(days[0].end_time.as_deref(), Some("16:00"));
/// assert!(days[1].start_time.is_none());
/// ```
pub fn apply_bulk_paste(days: &mut [RawDay], pasted: &str) {
    for (i, line) in pasted.trim().lines().enumerate() {
        let Some(day) = days.get_mut(i) else {
            break;
        };
        let Some((start, end)) = line.split_once('\t') else {
            continue;
        };
        let start = start.trim();
        let end = end.trim();
        if parse_time(start).is_none() || parse_time(end).is_none() {
            continue;
        }
        day.start_time = Some(start.to_string());
        day.end_time = Some(end.to_string());
    }
}
