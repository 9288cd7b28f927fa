//! Employer-side contributions.
//!
//! Pension, severance compensation, study fund and disability are flat
//! fractions of the regular-hours paid amount; national insurance runs
//! through the employer brackets on gross taxable. Manual miscellaneous
//! and salary-tax amounts pass straight through into the rollup.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::config::{ContributionBracket, EmployerRates};

use super::brackets::bracketed_contribution;

/// The employer-side contribution set and its rollup.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct EmployerContributions {
    /// Pension fund contribution.
    pub pension: Decimal,
    /// Severance compensation contribution.
    pub compensation: Decimal,
    /// Study fund contribution.
    pub study_fund: Decimal,
    /// Disability insurance contribution.
    pub disability: Decimal,
    /// Manual miscellaneous amount, passed through.
    pub miscellaneous: Decimal,
    /// National insurance over the employer brackets.
    pub national_insurance: Decimal,
    /// Manual salary tax, passed through.
    pub salary_tax: Decimal,
    /// Sum of all of the above.
    pub total: Decimal,
}

/// Computes the employer contributions.
///
/// # Arguments
///
/// * `regular_paid` - The regular-hours paid amount (the base salary)
/// * `gross_taxable` - The bracketed base for national insurance
/// * `rates` - The flat employer rates
/// * `ni_brackets` - The employer national-insurance brackets
/// * `miscellaneous` - Manual employer miscellaneous amount
/// * `salary_tax` - Manual employer salary tax
pub fn employer_contributions(
    regular_paid: Decimal,
    gross_taxable: Decimal,
    rates: &EmployerRates,
    ni_brackets: &[ContributionBracket],
    miscellaneous: Decimal,
    salary_tax: Decimal,
) -> EmployerContributions {
    let pension = regular_paid * rates.pension;
    let compensation = regular_paid * rates.compensation;
    let study_fund = regular_paid * rates.study_fund;
    let disability = regular_paid * rates.disability;
    let national_insurance = bracketed_contribution(gross_taxable, ni_brackets);

    let total = pension
        + compensation
        + study_fund
        + disability
        + miscellaneous
        + national_insurance
        + salary_tax;

    EmployerContributions {
        pension,
        compensation,
        study_fund,
        disability,
        miscellaneous,
        national_insurance,
        salary_tax,
        total,
    }
}
