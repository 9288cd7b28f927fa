//! Aggregate result models.
//!
//! This module contains the records produced by a recalculation pass:
//! [`MonthlyTotals`], [`PaidTotals`], [`TaxBreakdown`], [`YearlySummary`],
//! the weekly-overtime advisories, and the [`ComputedMonth`] envelope that
//! carries all of them back to the caller.

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use super::DayRecord;

/// Component-wise sums of every per-day derived field over the month.
///
/// Rebuilt on every recalculation pass; never persisted independently of
/// its inputs.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct MonthlyTotals {
    /// Sum of elapsed hours worked.
    pub hours_worked: Decimal,
    /// Sum of regular weekday hours.
    pub regular_hours: Decimal,
    /// Sum of weekday hours beyond the regular cap.
    pub overtime_extra_hours: Decimal,
    /// Sum of first-tier weekday overtime hours.
    pub overtime_125: Decimal,
    /// Sum of second-tier weekday overtime hours.
    pub overtime_150: Decimal,
    /// Sum of Saturday/holiday capped base hours.
    pub holiday_base_hours: Decimal,
    /// Sum of Saturday/holiday 150% tier hours.
    pub holiday_150: Decimal,
    /// Sum of Saturday/holiday 175% tier hours.
    pub holiday_175: Decimal,
    /// Sum of Saturday/holiday 200% tier hours.
    pub holiday_200: Decimal,
    /// Sum of sick entitlement points.
    pub sick_points: Decimal,
    /// Sum of vacation points.
    pub vacation_points: Decimal,
    /// Sum of unpaid meal-break hours.
    pub food_break_hours: Decimal,
    /// Sum of final paid hours.
    pub final_total_hours: Decimal,
    /// Number of days with both clock times present.
    pub work_days: Decimal,
    /// Sum of the missing-hours mirror column.
    pub missing_work_hours: Decimal,
    /// Sum of manual advance payments.
    pub advance_payments: Decimal,
    /// Final totals minus the missing-hours and weekday-extra sums; the
    /// weekend/holiday share of the month's extra hours.
    pub final_extra_weekend_hours: Decimal,
}

/// Monetary amounts per hour tier for the month.
///
/// Depends only on [`MonthlyTotals`], the hourly rate and the lunch value.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PaidTotals {
    /// Regular hours at 100%.
    pub regular_paid: Decimal,
    /// Weekday overtime at 125%.
    pub overtime_125_paid: Decimal,
    /// Weekday overtime at 150%.
    pub overtime_150_paid: Decimal,
    /// Saturday/holiday base tier at 150%.
    pub holiday_150_paid: Decimal,
    /// Saturday/holiday overflow at 175%.
    pub holiday_175_paid: Decimal,
    /// Saturday/holiday overflow at 200%.
    pub holiday_200_paid: Decimal,
    /// Unpaid meal-break value, tracked as a deduction.
    pub food_break_paid: Decimal,
    /// Sum of the tier amounts minus the meal-break value.
    pub final_paid_total: Decimal,
    /// Worked days times the per-day lunch value.
    pub lunch_value_paid: Decimal,
    /// Sum of manual advance payments.
    pub advance_payment_paid: Decimal,
}

/// The full statutory deduction and net-pay breakdown.
///
/// Entirely derived; recomputed each pass from the monthly and paid totals
/// plus the employee profile.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TaxBreakdown {
    /// The regular-hours paid amount; the base salary.
    pub basic_salary: Decimal,
    /// Additional payments beyond the base salary (contract-dependent).
    pub additional_payments: Decimal,
    /// Base plus additional payments plus the car value.
    pub net_value: Decimal,
    /// Base plus additional payments.
    pub gross_salary: Decimal,
    /// Study-fund contribution on the salary portion above the ceiling.
    pub above_ceiling_fund: Decimal,
    /// The base for bracketed deductions: net value plus the above-ceiling
    /// fund.
    pub gross_taxable: Decimal,

    /// Employer pension contribution.
    pub employer_pension: Decimal,
    /// Employer severance compensation.
    pub employer_compensation: Decimal,
    /// Employer study-fund contribution.
    pub employer_study_fund: Decimal,
    /// Employer disability insurance.
    pub employer_disability: Decimal,
    /// Manual employer miscellaneous amount.
    pub employer_miscellaneous: Decimal,
    /// Employer national insurance (two brackets on gross taxable).
    pub employer_national_insurance: Decimal,
    /// Manual employer salary tax.
    pub salary_tax: Decimal,
    /// Sum of all employer-side contributions.
    pub total_employer_contributions: Decimal,
    /// Gross salary plus employer contributions.
    pub total_salary_cost: Decimal,

    /// The pensionable-salary base (the regular-hours paid amount).
    pub pensionable_salary: Decimal,
    /// Employee pension deduction.
    pub employee_pension: Decimal,
    /// Self-employed pension deduction on additional payments and car.
    pub self_employed_pension: Decimal,
    /// Employee study-fund deduction.
    pub study_fund_deduction: Decimal,
    /// Manual employee miscellaneous deductions.
    pub miscellaneous_deductions: Decimal,
    /// Employee national insurance deduction.
    pub national_insurance_deduction: Decimal,
    /// Employee health insurance deduction.
    pub health_insurance_deduction: Decimal,

    /// Progressive income tax before any credit.
    pub income_tax_before_credit: Decimal,
    /// The bracket rate containing gross taxable.
    pub marginal_tax_rate: Decimal,
    /// Monthly value of the employee's credit points.
    pub monthly_credit_points_value: Decimal,
    /// Pension contribution tax refund.
    pub pension_refund: Decimal,
    /// City-tax benefit.
    pub city_tax_benefit: Decimal,
    /// Final income tax after all credits, floored at zero.
    pub income_tax: Decimal,

    /// Sum of all employee-side deductions including advances.
    pub total_deductions: Decimal,
    /// Gross salary minus total deductions.
    pub net_payment: Decimal,
}

/// Cross-month leave balances for the year.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct YearlySummary {
    /// Fixed yearly sick-day entitlement.
    pub sick_entitlement: Decimal,
    /// Sick days used including the current month.
    pub sick_used: Decimal,
    /// Entitlement minus usage.
    pub sick_balance: Decimal,
    /// Fixed yearly vacation-day entitlement.
    pub vacation_entitlement: Decimal,
    /// Vacation days used including the current month.
    pub vacation_used: Decimal,
    /// Entitlement minus usage.
    pub vacation_balance: Decimal,
}

/// An advisory for a week whose hours exceed the weekly ceiling.
///
/// Non-fatal and purely informational; the engine returns the full list
/// and leaves truncation to the caller.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WeeklyOvertimeAdvisory {
    /// The Sunday that anchors the week.
    pub week_start: NaiveDate,
    /// The week's total hours net of meal breaks.
    pub total_hours: Decimal,
    /// The amount over the ceiling.
    pub excess_hours: Decimal,
}

/// The complete output of one recalculation pass.
///
/// Every field is derived from the raw dataset and the statutory
/// configuration; `compute` always returns a fully populated value.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ComputedMonth {
    /// The employee the computation is for.
    pub employee_id: String,
    /// The computed year.
    pub year: i32,
    /// The computed month (1-12).
    pub month: u32,
    /// Every day of the month with derived fields populated.
    pub days: Vec<DayRecord>,
    /// The monthly aggregate record.
    pub monthly_totals: MonthlyTotals,
    /// The monetary amounts per tier.
    pub paid_totals: PaidTotals,
    /// The statutory deduction and net-pay breakdown.
    pub tax: TaxBreakdown,
    /// The yearly leave balances.
    pub yearly_summary: YearlySummary,
    /// Advisories for weeks over the hours ceiling.
    pub weekly_advisories: Vec<WeeklyOvertimeAdvisory>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;

    fn dec(s: &str) -> Decimal {
        Decimal::from_str(s).unwrap()
    }

    #[test]
    fn test_monthly_totals_default_is_zero() {
        let totals = MonthlyTotals::default();
        assert_eq!(totals.hours_worked, Decimal::ZERO);
        assert_eq!(totals.final_total_hours, Decimal::ZERO);
        assert_eq!(totals.work_days, Decimal::ZERO);
    }

    #[test]
    fn test_advisory_serialization() {
        let advisory = WeeklyOvertimeAdvisory {
            week_start: NaiveDate::from_ymd_opt(2025, 7, 6).unwrap(),
            total_hours: dec("45.50"),
            excess_hours: dec("3.50"),
        };

        let json = serde_json::to_string(&advisory).unwrap();
        assert!(json.contains("\"week_start\":\"2025-07-06\""));
        let deserialized: WeeklyOvertimeAdvisory = serde_json::from_str(&json).unwrap();
        assert_eq!(advisory, deserialized);
    }

    #[test]
    fn test_tax_breakdown_round_trip() {
        let breakdown = TaxBreakdown {
            gross_salary: dec("10000.00"),
            income_tax: dec("701.00"),
            net_payment: dec("8000.00"),
            ..Default::default()
        };

        let json = serde_json::to_string(&breakdown).unwrap();
        let deserialized: TaxBreakdown = serde_json::from_str(&json).unwrap();
        assert_eq!(breakdown, deserialized);
    }
}
