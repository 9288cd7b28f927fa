//! The recalculation engine.
//!
//! One pure, staged pipeline replaces the source system's recompute
//! cascade: calendar stamping, worked hours, daily tiers (with the Friday
//! weekly prepass), the sick/vacation sequencer, monthly aggregation, paid
//! amounts, the weekly guard, the tax breakdown and the yearly summary —
//! in that dependency order. `compute` never fails and never performs
//! I/O; unresolvable input becomes zeros and empties.

use std::collections::HashMap;

use chrono::{Datelike, NaiveDate};
use rust_decimal::Decimal;

use crate::config::ConfigLoader;
use crate::models::{build_day_grid, ComputedMonth, DayRecord, RawMonthDataset};

use super::aggregate::aggregate_month;
use super::calendar::{is_sunday_to_thursday, week_start};
use super::daily_tiers::{capped_daily_hours, resolve_daily_tiers};
use super::paid_amounts::calculate_paid_totals;
use super::sick_vacation::SickVacationSequencer;
use super::time_arith::elapsed_hours;
use super::weekly_guard::weekly_overtime_advisories;
use super::yearly::yearly_summary;
use crate::tax::calculate_tax_breakdown;

/// Runs one full recalculation pass over a raw month dataset.
///
/// The stages execute in strict dependency order; running the pass twice
/// over the same input yields an identical result.
///
/// # Example
///
/// ```no_run
/// use payslip_engine::calculation::compute;
/// use payslip_engine::config::ConfigLoader;
/// use payslip_engine::models::{EmployeeProfile, RawDay, RawMonthDataset};
/// use rust_decimal::Decimal;
///
/// let config = ConfigLoader::load("./config/il2025").unwrap();
/// let dataset = RawMonthDataset {
///     employee: EmployeeProfile::with_rate("emp_001", Decimal::from(50)),
///     year: 2025,
///     month: 7,
///     days: vec![RawDay {
///         start_time: Some("08:00".to_string()),
///         end_time: Some("16:00".to_string()),
///         ..Default::default()
///     }],
/// };
///
/// let result = compute(&dataset, &config);
/// assert_eq!(result.days[0].regular_hours, Decimal::from(8));
/// ```
pub fn compute(dataset: &RawMonthDataset, config: &ConfigLoader) -> ComputedMonth {
    let statutory = config.statutory();

    let mut days = build_day_grid(dataset.year, dataset.month, &dataset.days, config.holidays());

    resolve_worked_hours(&mut days);
    resolve_all_tiers(&mut days, statutory);

    SickVacationSequencer::new().apply(&mut days);

    for day in &mut days {
        day.is_work_day = day.start_time.is_some() && day.end_time.is_some();
    }

    let monthly_totals = aggregate_month(&days);
    let paid_totals = calculate_paid_totals(
        &monthly_totals,
        dataset.employee.hourly_rate,
        dataset.employee.lunch_value_per_day,
        &statutory.multipliers,
    );
    let weekly_advisories =
        weekly_overtime_advisories(&days, statutory.working_time.weekly_ceiling);

    let as_of = age_reference_date(&days, dataset.year, dataset.month);
    let tax = calculate_tax_breakdown(&paid_totals, &dataset.employee, statutory, as_of);
    let yearly = yearly_summary(&dataset.employee, &monthly_totals, &statutory.entitlements);

    ComputedMonth {
        employee_id: dataset.employee.id.clone(),
        year: dataset.year,
        month: dataset.month,
        days,
        monthly_totals,
        paid_totals,
        tax,
        yearly_summary: yearly,
        weekly_advisories,
    }
}

/// Fills in elapsed hours for every unmarked day with both clock times.
///
/// Marked days are left to the sequencer, which owns their hours.
fn resolve_worked_hours(days: &mut [DayRecord]) {
    for day in days {
        if day.sick_marked || day.vacation_marked {
            continue;
        }
        if let (Some(start), Some(end)) = (day.start_time, day.end_time) {
            day.hours_worked = elapsed_hours(start, end);
        }
    }
}

/// Runs the daily tier resolver over the month.
///
/// A prepass accumulates each week's capped Sunday-Thursday hours so the
/// Friday rule can bound its regular figure by the remaining room under
/// the weekly ceiling.
fn resolve_all_tiers(days: &mut [DayRecord], statutory: &crate::config::StatutoryConfig) {
    let rules = &statutory.working_time;

    let mut week_regular: HashMap<NaiveDate, Decimal> = HashMap::new();
    for day in days.iter() {
        if day.sick_marked || day.vacation_marked || day.is_saturday || day.is_holiday {
            continue;
        }
        if !is_sunday_to_thursday(day.date.weekday()) {
            continue;
        }
        if let Some(start) = day.start_time {
            if day.hours_worked > Decimal::ZERO {
                *week_regular.entry(week_start(day.date)).or_default() +=
                    capped_daily_hours(day.hours_worked, start, rules);
            }
        }
    }

    for day in days.iter_mut() {
        if day.sick_marked || day.vacation_marked {
            continue;
        }
        let Some(start) = day.start_time else {
            continue;
        };
        if day.end_time.is_none() || day.hours_worked <= Decimal::ZERO {
            continue;
        }

        let week_so_far = week_regular
            .get(&week_start(day.date))
            .copied()
            .unwrap_or_default();
        let tiers = resolve_daily_tiers(
            day.hours_worked,
            start,
            day.date.weekday(),
            day.is_saturday || day.is_holiday,
            week_so_far,
            rules,
            &statutory.food_break,
        );

        day.regular_hours = tiers.regular_hours;
        day.overtime_extra_hours = tiers.overtime_extra_hours;
        day.overtime_125 = tiers.overtime_125;
        day.overtime_150 = tiers.overtime_150;
        day.holiday_base_hours = tiers.holiday_base_hours;
        day.holiday_150 = tiers.holiday_150;
        day.holiday_175 = tiers.holiday_175;
        day.holiday_200 = tiers.holiday_200;
        day.food_break_hours = tiers.food_break_hours;
        day.final_total_hours = tiers.final_total_hours;
        day.missing_work_hours = tiers.regular_hours;
    }
}

/// The date age-conditional rules are evaluated against: the last day of
/// the computed month. Falls back to the epoch for an unbuildable month,
/// where every amount is zero anyway.
fn age_reference_date(days: &[DayRecord], year: i32, month: u32) -> NaiveDate {
    days.last()
        .map(|d| d.date)
        .or_else(|| NaiveDate::from_ymd_opt(year, month, 1))
        .unwrap_or_default()
}
