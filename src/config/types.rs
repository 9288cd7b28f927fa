//! Configuration types for the statutory tables.
//!
//! This module contains the strongly-typed structures deserialized from the
//! YAML configuration directory: progressive income-tax brackets, the
//! two-tier social-insurance tables, employer/employee contribution rates,
//! deduction ceilings, entitlements, working-time rules and the fixed
//! holiday table.

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::Deserialize;
use std::collections::HashSet;

/// A single progressive income-tax bracket.
///
/// Brackets are applied in order; `to_amount` is `None` for the open-ended
/// top bracket.
#[derive(Debug, Clone, Deserialize)]
pub struct TaxBracket {
    /// The lower bound of the bracket (inclusive).
    pub from_amount: Decimal,
    /// The upper bound of the bracket, or `None` for the top bracket.
    #[serde(default)]
    pub to_amount: Option<Decimal>,
    /// The tax rate for income in this bracket, as a fraction (0.10 = 10%).
    pub rate: Decimal,
}

/// A single social-insurance contribution bracket.
///
/// Unlike income-tax brackets these are always bounded: contributions are
/// only collected up to the top of the last bracket.
#[derive(Debug, Clone, Deserialize)]
pub struct ContributionBracket {
    /// The lower bound of the bracket (exclusive for all but the first).
    pub from_amount: Decimal,
    /// The upper bound of the bracket (inclusive).
    pub to_amount: Decimal,
    /// The contribution rate for this bracket, as a fraction.
    pub rate: Decimal,
}

/// An employee-side insurance table with an age-reduced flat rate.
///
/// Employees under 18 or at/over 67 pay the flat `reduced_rate` in every
/// bracket instead of the bracket rates.
#[derive(Debug, Clone, Deserialize)]
pub struct InsuranceTable {
    /// The contribution brackets at the standard rates.
    pub brackets: Vec<ContributionBracket>,
    /// The flat rate applied in every bracket for reduced-rate employees.
    pub reduced_rate: Decimal,
}

/// National-insurance tables for both sides of the payslip.
#[derive(Debug, Clone, Deserialize)]
pub struct NationalInsuranceConfig {
    /// The employee-side table (age-reduced rate applies).
    pub employee: InsuranceTable,
    /// The employer-side brackets (no reduced rate).
    pub employer: Vec<ContributionBracket>,
}

/// Employer contribution rates, applied to the regular-hours paid amount.
#[derive(Debug, Clone, Deserialize)]
pub struct EmployerRates {
    /// Pension fund contribution rate.
    pub pension: Decimal,
    /// Severance compensation contribution rate.
    pub compensation: Decimal,
    /// Study fund contribution rate.
    pub study_fund: Decimal,
    /// Disability insurance contribution rate.
    pub disability: Decimal,
}

/// Employee deduction rates and the yearly deductible ceilings.
#[derive(Debug, Clone, Deserialize)]
pub struct EmployeeRates {
    /// Pension fund deduction rate (of the pensionable salary).
    pub pension: Decimal,
    /// Study fund deduction rate (of the regular-hours paid amount).
    pub study_fund: Decimal,
    /// Self-employed pension deduction rate for employees under 50.
    pub self_employed_pension_under_50: Decimal,
    /// Self-employed pension deduction rate from age 50.
    pub self_employed_pension_from_50: Decimal,
    /// Yearly cap on the self-employed pension amount deductible from
    /// taxable income.
    pub self_employed_deductible_yearly_cap: Decimal,
    /// Yearly cap on the study-fund amount deductible from taxable income.
    pub study_fund_deductible_yearly_cap: Decimal,
}

/// The pension tax-credit refund rule.
///
/// The refund is a fraction of the employee pension deduction, where the
/// eligible deduction is bounded both by a fraction of gross taxable and by
/// a fixed monthly cap.
#[derive(Debug, Clone, Deserialize)]
pub struct PensionRefundRule {
    /// The refund fraction applied to the eligible pension amount.
    pub rate: Decimal,
    /// The fixed monthly cap on the eligible pension amount.
    pub monthly_cap: Decimal,
    /// The gross-taxable fraction bounding the eligible pension amount.
    pub taxable_fraction: Decimal,
}

/// The study-fund salary ceiling and the above-ceiling contribution rate.
#[derive(Debug, Clone, Deserialize)]
pub struct StudyFundCeiling {
    /// The monthly salary threshold above which the extra contribution
    /// becomes a taxable benefit.
    pub threshold: Decimal,
    /// The rate applied to the salary portion above the threshold.
    pub above_rate: Decimal,
}

/// Fixed yearly leave entitlements, independent of tenure.
#[derive(Debug, Clone, Deserialize)]
pub struct Entitlements {
    /// Sick days per year.
    pub sick_days: Decimal,
    /// Vacation days per year.
    pub vacation_days: Decimal,
}

/// Working-time rules: daily caps, the night window, the weekly ceiling and
/// the first overtime tier width.
#[derive(Debug, Clone, Deserialize)]
pub struct WorkingTimeRules {
    /// The weekly regular-hours ceiling (Sunday-anchored weeks).
    pub weekly_ceiling: Decimal,
    /// The daily regular-hours cap for day shifts.
    pub day_cap: Decimal,
    /// The daily regular-hours cap for night shifts.
    pub night_cap: Decimal,
    /// A shift starting at or after this hour is a night shift.
    pub night_start_hour: u32,
    /// A shift starting before this hour is a night shift.
    pub night_end_hour: u32,
    /// Width of the first overtime tier (hours paid at 125%).
    pub overtime_first_tier_hours: Decimal,
}

/// The unpaid meal-break deduction thresholds.
#[derive(Debug, Clone, Deserialize)]
pub struct FoodBreakRule {
    /// No break is deducted for days under this many worked hours.
    pub qualifying_hours: Decimal,
    /// Worked hours above this threshold deduct the half break.
    pub half_break_above: Decimal,
    /// Worked hours above this threshold deduct the full break.
    pub full_break_above: Decimal,
    /// The half-break deduction in hours.
    pub half_break_hours: Decimal,
    /// The full-break deduction in hours.
    pub full_break_hours: Decimal,
}

/// The pay multipliers for each hour tier.
#[derive(Debug, Clone, Deserialize)]
pub struct TierMultipliers {
    /// First-tier weekday overtime multiplier.
    pub overtime_125: Decimal,
    /// Second-tier weekday overtime multiplier.
    pub overtime_150: Decimal,
    /// Base Saturday/holiday multiplier.
    pub holiday_150: Decimal,
    /// Saturday/holiday first-overflow multiplier.
    pub holiday_175: Decimal,
    /// Saturday/holiday remaining-overflow multiplier.
    pub holiday_200: Decimal,
}

/// The complete statutory configuration for a tax year.
///
/// Deserialized from `statutory.yaml`; every statutory number used by the
/// engine flows from here.
#[derive(Debug, Clone, Deserialize)]
pub struct StatutoryConfig {
    /// The tax year these tables describe.
    pub tax_year: i32,
    /// Yearly value of one income-tax credit point.
    pub tax_credit_point_yearly: Decimal,
    /// The progressive income-tax brackets, ordered ascending.
    pub income_tax_brackets: Vec<TaxBracket>,
    /// National-insurance tables.
    pub national_insurance: NationalInsuranceConfig,
    /// Health-insurance table (employee side only).
    pub health_insurance: InsuranceTable,
    /// Employer contribution rates.
    pub employer: EmployerRates,
    /// Employee deduction rates and ceilings.
    pub employee: EmployeeRates,
    /// The pension tax-credit refund rule.
    pub pension_refund: PensionRefundRule,
    /// The study-fund ceiling rule.
    pub study_fund_ceiling: StudyFundCeiling,
    /// Yearly leave entitlements.
    pub entitlements: Entitlements,
    /// Working-time rules.
    pub working_time: WorkingTimeRules,
    /// Meal-break deduction thresholds.
    pub food_break: FoodBreakRule,
    /// Hour-tier pay multipliers.
    pub multipliers: TierMultipliers,
}

/// Holiday dates file structure.
#[derive(Debug, Clone, Deserialize)]
pub struct HolidaysFile {
    /// The holiday dates, in any order.
    pub holidays: Vec<NaiveDate>,
}

/// The fixed holiday-date lookup table.
///
/// Lookup is exact-match over a static set of known dates; there is no
/// recurrence rule, and dates outside the table are simply not holidays.
#[derive(Debug, Clone)]
pub struct HolidayTable {
    dates: HashSet<NaiveDate>,
}

impl HolidayTable {
    /// Builds a table from a list of dates.
    pub fn new(dates: Vec<NaiveDate>) -> Self {
        Self {
            dates: dates.into_iter().collect(),
        }
    }

    /// Returns true if the date is a known holiday.
    pub fn contains(&self, date: NaiveDate) -> bool {
        self.dates.contains(&date)
    }

    /// Returns the number of known holiday dates.
    pub fn len(&self) -> usize {
        self.dates.len()
    }

    /// Returns true if the table holds no dates.
    pub fn is_empty(&self) -> bool {
        self.dates.is_empty()
    }
}
