//! Employee-side statutory deductions.
//!
//! Pension and study fund are flat fractions of the pensionable salary
//! (the regular-hours paid amount); national and health insurance run
//! through their bracket tables with a flat reduced rate for employees
//! under 18 or 67 and over; the self-employed pension deduction covers
//! additional payments and the car value at an age-dependent rate.

use rust_decimal::Decimal;

use crate::config::{EmployeeRates, InsuranceTable};

use super::brackets::{bracketed_contribution, bracketed_contribution_at};

/// The employee pension deduction.
///
/// Zero when there is no base salary; otherwise the pension rate applied
/// to the pensionable salary.
pub fn employee_pension(pensionable_salary: Decimal, rates: &EmployeeRates) -> Decimal {
    if pensionable_salary == Decimal::ZERO {
        return Decimal::ZERO;
    }
    pensionable_salary * rates.pension
}

/// The employee study-fund deduction.
///
/// Zero when there is no base salary.
pub fn study_fund_deduction(pensionable_salary: Decimal, rates: &EmployeeRates) -> Decimal {
    if pensionable_salary == Decimal::ZERO {
        return Decimal::ZERO;
    }
    pensionable_salary * rates.study_fund
}

/// An insurance deduction over its bracket table.
///
/// Reduced-rate employees pay the table's flat reduced rate in every
/// bracket; the bracket caps still apply.
pub fn insurance_deduction(
    gross_taxable: Decimal,
    table: &InsuranceTable,
    reduced: bool,
) -> Decimal {
    if reduced {
        bracketed_contribution_at(gross_taxable, &table.brackets, table.reduced_rate)
    } else {
        bracketed_contribution(gross_taxable, &table.brackets)
    }
}

/// The self-employed pension deduction.
///
/// Applied to additional payments plus the car value, at 7.5% from age 50
/// and 5% below it.
pub fn self_employed_pension(
    additional_payments: Decimal,
    car_value: Decimal,
    age: i32,
    rates: &EmployeeRates,
) -> Decimal {
    let rate = if age >= 50 {
        rates.self_employed_pension_from_50
    } else {
        rates.self_employed_pension_under_50
    };
    (additional_payments + car_value) * rate
}
