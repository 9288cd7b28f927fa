//! The sick/vacation sequencer.
//!
//! A whole-month, stateful rule: sick days earn entitlement points and paid
//! hours by their chronological ordinal position within the month, not by
//! the raw mark value. Vacation days are a flat eight-hour override. The
//! pass is idempotent and order-stable, and a guard keeps a second
//! invocation from running while one is mutating the day set.

use std::sync::atomic::{AtomicBool, Ordering};

use chrono::NaiveTime;
use rust_decimal::Decimal;

use crate::models::DayRecord;

/// Paid hours and points for one sick-day ordinal.
struct SickTier {
    points: Decimal,
    paid_hours: Decimal,
    start: NaiveTime,
    end: NaiveTime,
}

/// The schedule by ordinal position: the first sick day is unpaid, the
/// second and third earn half a point and four hours, the fourth onward a
/// full point and eight hours.
fn sick_tier(ordinal: usize) -> SickTier {
    let hms = |h, m| NaiveTime::from_hms_opt(h, m, 0).expect("valid time");
    match ordinal {
        1 => SickTier {
            points: Decimal::ZERO,
            paid_hours: Decimal::ZERO,
            start: hms(0, 0),
            end: hms(0, 0),
        },
        2 | 3 => SickTier {
            points: Decimal::new(5, 1),
            paid_hours: Decimal::new(4, 0),
            start: hms(8, 0),
            end: hms(12, 0),
        },
        _ => SickTier {
            points: Decimal::ONE,
            paid_hours: Decimal::new(8, 0),
            start: hms(8, 0),
            end: hms(16, 0),
        },
    }
}

/// Hours credited for a vacation day.
const VACATION_HOURS: Decimal = Decimal::from_parts(8, 0, 0, false, 0);

/// The month-wide sick/vacation sequencer.
///
/// Holds the single-flight guard: only one `apply` runs at a time, and a
/// trigger arriving while a run is in progress is a no-op.
///
/// # Example
///
/// ```
/// use payslip_engine::calculation::SickVacationSequencer;
/// use payslip_engine::models::DayRecord;
/// use chrono::NaiveDate;
///
/// let mut days = vec![DayRecord::empty(
///     NaiveDate::from_ymd_opt(2025, 7, 6).unwrap(),
///     "Sunday".to_string(),
///     false,
///     false,
/// )];
/// days[0].sick_marked = true;
///
/// let sequencer = SickVacationSequencer::new();
/// assert!(sequencer.apply(&mut days));
/// // The first sick day of the month is unpaid.
/// assert_eq!(days[0].final_total_hours, rust_decimal::Decimal::ZERO);
/// ```
#[derive(Debug, Default)]
pub struct SickVacationSequencer {
    in_flight: AtomicBool,
}

impl SickVacationSequencer {
    /// Creates a sequencer with no run in flight.
    pub fn new() -> Self {
        Self {
            in_flight: AtomicBool::new(false),
        }
    }

    /// Applies the sick and vacation overrides across the month.
    ///
    /// Returns `true` if the pass ran, `false` if it was skipped because
    /// another run was already in flight.
    ///
    /// Sick days are sorted by date and assigned by ordinal position;
    /// re-running after a mark is cleared re-numbers the remaining days.
    /// Vacation days get the flat override regardless of prior times.
    pub fn apply(&self, days: &mut [DayRecord]) -> bool {
        if self
            .in_flight
            .compare_exchange(false, true, Ordering::AcqRel, Ordering::Acquire)
            .is_err()
        {
            return false;
        }

        for day in days.iter_mut().filter(|d| d.vacation_marked) {
            apply_vacation_override(day);
        }

        let mut sick_indices: Vec<usize> = days
            .iter()
            .enumerate()
            .filter(|(_, d)| d.sick_marked)
            .map(|(i, _)| i)
            .collect();
        sick_indices.sort_by_key(|&i| days[i].date);

        for (position, &index) in sick_indices.iter().enumerate() {
            apply_sick_override(&mut days[index], position + 1);
        }

        self.in_flight.store(false, Ordering::Release);
        true
    }
}

fn apply_vacation_override(day: &mut DayRecord) {
    day.clear_derived();
    day.start_time = NaiveTime::from_hms_opt(8, 0, 0);
    day.end_time = NaiveTime::from_hms_opt(16, 0, 0);
    day.hours_worked = VACATION_HOURS;
    day.regular_hours = VACATION_HOURS;
    day.final_total_hours = VACATION_HOURS;
    day.missing_work_hours = VACATION_HOURS;
    day.vacation_points = Decimal::ONE;
}

fn apply_sick_override(day: &mut DayRecord, ordinal: usize) {
    let tier = sick_tier(ordinal);
    day.clear_derived();
    day.start_time = Some(tier.start);
    day.end_time = Some(tier.end);
    day.hours_worked = tier.paid_hours;
    day.regular_hours = tier.paid_hours;
    day.final_total_hours = tier.paid_hours;
    day.missing_work_hours = tier.paid_hours;
    day.sick_points = tier.points;
}
