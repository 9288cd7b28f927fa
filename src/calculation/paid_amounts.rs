//! The paid-amount calculator.
//!
//! Converts monthly hour totals into monetary amounts: each tier's hours
//! times the hourly rate times its multiplier, the meal-break value as a
//! deduction, the lunch value per worked day, and the advance-payment
//! total carried through from the day rows.

use rust_decimal::Decimal;

use crate::config::TierMultipliers;
use crate::models::{MonthlyTotals, PaidTotals};

/// Computes the month's paid amounts from its hour totals.
///
/// `final_paid_total` is the sum of the tier amounts minus the meal-break
/// value; the lunch value is worked days times the per-day rate and is
/// tracked separately from the hour tiers.
///
/// # Example
///
/// ```
/// use payslip_engine::calculation::calculate_paid_totals;
/// use payslip_engine::config::TierMultipliers;
/// use payslip_engine::models::MonthlyTotals;
/// use rust_decimal::Decimal;
/// use std::str::FromStr;
///
/// let multipliers = TierMultipliers {
///     overtime_125: Decimal::from_str("1.25").unwrap(),
///     overtime_150: Decimal::from_str("1.5").unwrap(),
///     holiday_150: Decimal::from_str("1.5").unwrap(),
///     holiday_175: Decimal::from_str("1.75").unwrap(),
///     holiday_200: Decimal::from_str("2.0").unwrap(),
/// };
/// let totals = MonthlyTotals {
///     regular_hours: Decimal::from(8),
///     ..Default::default()
/// };
///
/// let paid = calculate_paid_totals(&totals, Decimal::from(50), Decimal::ZERO, &multipliers);
/// assert_eq!(paid.regular_paid, Decimal::from(400));
/// assert_eq!(paid.final_paid_total, Decimal::from(400));
/// ```
pub fn calculate_paid_totals(
    totals: &MonthlyTotals,
    hourly_rate: Decimal,
    lunch_value_per_day: Decimal,
    multipliers: &TierMultipliers,
) -> PaidTotals {
    let regular_paid = totals.regular_hours * hourly_rate;
    let overtime_125_paid = totals.overtime_125 * hourly_rate * multipliers.overtime_125;
    let overtime_150_paid = totals.overtime_150 * hourly_rate * multipliers.overtime_150;
    let holiday_150_paid = totals.holiday_150 * hourly_rate * multipliers.holiday_150;
    let holiday_175_paid = totals.holiday_175 * hourly_rate * multipliers.holiday_175;
    let holiday_200_paid = totals.holiday_200 * hourly_rate * multipliers.holiday_200;
    let food_break_paid = totals.food_break_hours * hourly_rate;

    let final_paid_total = regular_paid
        + overtime_125_paid
        + overtime_150_paid
        + holiday_150_paid
        + holiday_175_paid
        + holiday_200_paid
        - food_break_paid;

    PaidTotals {
        regular_paid,
        overtime_125_paid,
        overtime_150_paid,
        holiday_150_paid,
        holiday_175_paid,
        holiday_200_paid,
        food_break_paid,
        final_paid_total,
        lunch_value_paid: totals.work_days * lunch_value_per_day,
        advance_payment_paid: totals.advance_payments,
    }
}
