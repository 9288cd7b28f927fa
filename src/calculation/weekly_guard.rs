//! The weekly overtime guard.
//!
//! An advisory check, not an enforcement rule: days are grouped into
//! Sunday-anchored weeks and any week whose hours (net of meal breaks)
//! exceed the weekly ceiling produces a warning. The full list is
//! returned; how many to show is the caller's concern.

use std::collections::BTreeMap;

use chrono::NaiveDate;
use rust_decimal::Decimal;

use crate::models::{DayRecord, WeeklyOvertimeAdvisory};

use super::calendar::week_start;

/// Scans the month for weeks exceeding the hours ceiling.
///
/// A day contributes `hours_worked - food_break_hours` to its week; days
/// with no hours contribute nothing. Advisories come back ordered by week
/// start.
pub fn weekly_overtime_advisories(
    days: &[DayRecord],
    weekly_ceiling: Decimal,
) -> Vec<WeeklyOvertimeAdvisory> {
    let mut weekly_totals: BTreeMap<NaiveDate, Decimal> = BTreeMap::new();

    for day in days {
        if day.hours_worked <= Decimal::ZERO {
            continue;
        }
        let adjusted = day.hours_worked - day.food_break_hours;
        *weekly_totals.entry(week_start(day.date)).or_default() += adjusted;
    }

    weekly_totals
        .into_iter()
        .filter(|(_, total)| *total > weekly_ceiling)
        .map(|(week_start, total_hours)| WeeklyOvertimeAdvisory {
            week_start,
            total_hours,
            excess_hours: total_hours - weekly_ceiling,
        })
        .collect()
}
