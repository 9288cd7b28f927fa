//! The monthly aggregator.
//!
//! A pure fold of the day records into one [`MonthlyTotals`]: every
//! derived numeric field summed component-wise, plus the derived
//! weekend-extra rollup. No hidden state; rebuilt on every pass.

use rust_decimal::Decimal;

use crate::models::{DayRecord, MonthlyTotals};

/// Sums every derived day field across the month.
///
/// `final_extra_weekend_hours` is derived from three of the sums: the
/// final paid total minus the missing-hours total minus the weekday-extra
/// total, leaving the weekend/holiday share of the month's extra hours.
pub fn aggregate_month(days: &[DayRecord]) -> MonthlyTotals {
    let mut totals = MonthlyTotals::default();

    for day in days {
        totals.hours_worked += day.hours_worked;
        totals.regular_hours += day.regular_hours;
        totals.overtime_extra_hours += day.overtime_extra_hours;
        totals.overtime_125 += day.overtime_125;
        totals.overtime_150 += day.overtime_150;
        totals.holiday_base_hours += day.holiday_base_hours;
        totals.holiday_150 += day.holiday_150;
        totals.holiday_175 += day.holiday_175;
        totals.holiday_200 += day.holiday_200;
        totals.sick_points += day.sick_points;
        totals.vacation_points += day.vacation_points;
        totals.food_break_hours += day.food_break_hours;
        totals.final_total_hours += day.final_total_hours;
        totals.missing_work_hours += day.missing_work_hours;
        totals.advance_payments += day.advance_payment;
        if day.is_work_day {
            totals.work_days += Decimal::ONE;
        }
    }

    totals.final_extra_weekend_hours =
        totals.final_total_hours - totals.missing_work_hours - totals.overtime_extra_hours;

    totals
}
