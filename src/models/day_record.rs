//! Day record model.
//!
//! A [`RawDay`] is what the caller captured for one calendar day: clock
//! times as entered, sick/vacation marks, and a manual advance payment.
//! A [`DayRecord`] is the engine's working row for that day — the raw
//! fields normalized plus every derived hour category. Derived fields are
//! recomputed on every pass and never edited independently.

use chrono::{NaiveDate, NaiveTime};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Raw per-day input as captured by the caller.
///
/// Times are kept as entered; malformed values are coerced to "no time"
/// during computation rather than rejected.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct RawDay {
    /// Clock-in time, "HH:MM".
    #[serde(default)]
    pub start_time: Option<String>,
    /// Clock-out time, "HH:MM".
    #[serde(default)]
    pub end_time: Option<String>,
    /// Sick mark; any non-empty value marks the day sick.
    #[serde(default)]
    pub sick_mark: Option<String>,
    /// Vacation mark; only the literal values "1" or "1.00" are accepted.
    #[serde(default)]
    pub vacation_mark: Option<String>,
    /// Manual advance payment for this day.
    #[serde(default)]
    pub advance_payment: Option<Decimal>,
}

impl RawDay {
    /// Returns true if the sick mark is present and non-empty.
    pub fn is_sick_marked(&self) -> bool {
        self.sick_mark
            .as_deref()
            .is_some_and(|v| !v.trim().is_empty())
    }

    /// Returns true if the vacation mark holds one of the accepted literal
    /// values. Anything else is rejected, as at entry time.
    pub fn is_vacation_marked(&self) -> bool {
        matches!(
            self.vacation_mark.as_deref().map(str::trim),
            Some("1") | Some("1.00")
        )
    }
}

/// One working row of the month: raw fields plus all derived categories.
///
/// Invariants: at most one of the sick/vacation marks is set, and
/// `final_total_hours` is fully determined by the other derived fields and
/// the marks — it is only ever written by the tier resolver or the
/// sick/vacation sequencer.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DayRecord {
    /// The calendar date. Immutable once the month is fixed.
    pub date: NaiveDate,
    /// The weekday name for display ("Sunday" through "Saturday").
    pub day_name: String,
    /// True if the date falls on Saturday.
    pub is_saturday: bool,
    /// True if the date is in the fixed holiday table.
    pub is_holiday: bool,
    /// Clock-in time, if present and well formed.
    pub start_time: Option<NaiveTime>,
    /// Clock-out time, if present and well formed.
    pub end_time: Option<NaiveTime>,
    /// True if the day carries a sick mark.
    pub sick_marked: bool,
    /// True if the day carries a valid vacation mark.
    pub vacation_marked: bool,
    /// Manual advance payment for this day.
    pub advance_payment: Decimal,

    // Derived fields. Recomputed every pass.
    /// Elapsed hours between clock-in and clock-out (overnight-aware).
    pub hours_worked: Decimal,
    /// Regular weekday hours up to the daily/weekly cap.
    pub regular_hours: Decimal,
    /// Total weekday hours beyond the regular cap.
    pub overtime_extra_hours: Decimal,
    /// First-tier weekday overtime (paid at 125%).
    pub overtime_125: Decimal,
    /// Second-tier weekday overtime (paid at 150%).
    pub overtime_150: Decimal,
    /// Saturday/holiday hours up to the daily cap.
    pub holiday_base_hours: Decimal,
    /// Saturday/holiday base tier (paid at 150%).
    pub holiday_150: Decimal,
    /// Saturday/holiday first overflow tier (paid at 175%).
    pub holiday_175: Decimal,
    /// Saturday/holiday remaining overflow (paid at 200%).
    pub holiday_200: Decimal,
    /// Sick entitlement points assigned by the sequencer.
    pub sick_points: Decimal,
    /// Vacation points (1 per vacation day).
    pub vacation_points: Decimal,
    /// Unpaid meal-break deduction in hours.
    pub food_break_hours: Decimal,
    /// Final paid hours for the day.
    pub final_total_hours: Decimal,
    /// True if both clock times are present.
    pub is_work_day: bool,
    /// Mirrors the regular-hours figure; used for absence tracking.
    pub missing_work_hours: Decimal,
}

impl DayRecord {
    /// Creates an empty record for a date with the given flags.
    pub fn empty(date: NaiveDate, day_name: String, is_saturday: bool, is_holiday: bool) -> Self {
        Self {
            date,
            day_name,
            is_saturday,
            is_holiday,
            start_time: None,
            end_time: None,
            sick_marked: false,
            vacation_marked: false,
            advance_payment: Decimal::ZERO,
            hours_worked: Decimal::ZERO,
            regular_hours: Decimal::ZERO,
            overtime_extra_hours: Decimal::ZERO,
            overtime_125: Decimal::ZERO,
            overtime_150: Decimal::ZERO,
            holiday_base_hours: Decimal::ZERO,
            holiday_150: Decimal::ZERO,
            holiday_175: Decimal::ZERO,
            holiday_200: Decimal::ZERO,
            sick_points: Decimal::ZERO,
            vacation_points: Decimal::ZERO,
            food_break_hours: Decimal::ZERO,
            final_total_hours: Decimal::ZERO,
            is_work_day: false,
            missing_work_hours: Decimal::ZERO,
        }
    }

    /// Clears every derived hour category back to zero.
    ///
    /// Called before the tier resolver runs, and by the sequencer before
    /// it writes an override.
    pub fn clear_derived(&mut self) {
        self.hours_worked = Decimal::ZERO;
        self.regular_hours = Decimal::ZERO;
        self.overtime_extra_hours = Decimal::ZERO;
        self.overtime_125 = Decimal::ZERO;
        self.overtime_150 = Decimal::ZERO;
        self.holiday_base_hours = Decimal::ZERO;
        self.holiday_150 = Decimal::ZERO;
        self.holiday_175 = Decimal::ZERO;
        self.holiday_200 = Decimal::ZERO;
        self.sick_points = Decimal::ZERO;
        self.vacation_points = Decimal::ZERO;
        self.food_break_hours = Decimal::ZERO;
        self.final_total_hours = Decimal::ZERO;
        self.missing_work_hours = Decimal::ZERO;
    }
}
