//! Progressive income tax and its credits.
//!
//! Taxable income is gross taxable minus the ceilinged self-employed
//! pension and study-fund deductions. The progressive tax on it is then
//! reduced by the monthly credit-point value, the pension refund, the
//! city-tax benefit and the child tax points, floored at zero.

use rust_decimal::Decimal;

use crate::config::{EmployeeRates, PensionRefundRule, TaxBracket};

use super::brackets::progressive_tax;

/// Months per year, for converting the yearly ceilings and credit values.
const MONTHS: Decimal = Decimal::from_parts(12, 0, 0, false, 0);

/// The progressive tax before any credit.
///
/// The self-employed pension and study-fund amounts reduce taxable income
/// only up to one-twelfth of their yearly ceilings. Taxable income under
/// one yields zero tax.
pub fn income_tax_before_credit(
    gross_taxable: Decimal,
    self_employed_pension: Decimal,
    study_fund_deduction: Decimal,
    rates: &EmployeeRates,
    brackets: &[TaxBracket],
) -> Decimal {
    let self_employed_cap = rates.self_employed_deductible_yearly_cap / MONTHS;
    let study_fund_cap = rates.study_fund_deductible_yearly_cap / MONTHS;

    let taxable = gross_taxable
        - self_employed_pension.min(self_employed_cap)
        - study_fund_deduction.min(study_fund_cap);

    progressive_tax(taxable, brackets)
}

/// The monthly monetary value of the employee's credit points.
pub fn monthly_credit_points_value(points: Decimal, yearly_point_value: Decimal) -> Decimal {
    points * yearly_point_value / MONTHS
}

/// The pension-contribution tax refund.
///
/// Only granted when there is tax to refund against and a pension
/// deduction to refund from. The eligible pension amount is bounded by a
/// fraction of gross taxable and by the fixed monthly cap.
pub fn pension_refund(
    tax_before_credit: Decimal,
    employee_pension: Decimal,
    gross_taxable: Decimal,
    rule: &PensionRefundRule,
) -> Decimal {
    if tax_before_credit <= Decimal::ZERO || employee_pension <= Decimal::ZERO {
        return Decimal::ZERO;
    }
    let by_salary = gross_taxable * rule.taxable_fraction;
    let eligible = employee_pension.min(by_salary.min(rule.monthly_cap));
    eligible * rule.rate
}

/// The city-tax benefit: the benefit rate on gross taxable, capped at the
/// rate applied to the municipal monthly ceiling.
pub fn city_tax_benefit(
    gross_taxable: Decimal,
    city_rate: Decimal,
    monthly_cap: Decimal,
) -> Decimal {
    (gross_taxable * city_rate).min(monthly_cap * city_rate)
}

/// The final income tax: the pre-credit tax minus every credit, floored
/// at zero.
pub fn final_income_tax(
    tax_before_credit: Decimal,
    credit_points_value: Decimal,
    pension_refund: Decimal,
    city_tax_benefit: Decimal,
    child_tax_points: Decimal,
) -> Decimal {
    (tax_before_credit - credit_points_value - pension_refund - city_tax_benefit
        - child_tax_points)
        .max(Decimal::ZERO)
}
