//! The statutory deduction and tax engine.
//!
//! A sequence of derivations where each stage consumes the outputs of the
//! prior one: gross salary, the above-ceiling study fund, gross taxable,
//! employer contributions, employee deductions, progressive income tax
//! with its credits, and the final net-pay reconciliation. Missing or
//! unparsable inputs have already been coerced to zero upstream; nothing
//! here fails.

mod brackets;
mod deductions;
mod employer;
mod income_tax;

pub use brackets::{
    bracketed_contribution, bracketed_contribution_at, marginal_rate, progressive_tax,
};
pub use deductions::{
    employee_pension, insurance_deduction, self_employed_pension, study_fund_deduction,
};
pub use employer::{employer_contributions, EmployerContributions};
pub use income_tax::{
    city_tax_benefit, final_income_tax, income_tax_before_credit, monthly_credit_points_value,
    pension_refund,
};

use chrono::NaiveDate;
use rust_decimal::Decimal;

use crate::config::StatutoryConfig;
use crate::models::{ContractStatus, EmployeeProfile, PaidTotals, TaxBreakdown};

/// Builds the full tax breakdown from the month's paid totals and the
/// employee profile.
///
/// `as_of` is the date against which age-conditional rules are evaluated
/// (the reduced insurance rates and the self-employed pension rate); the
/// engine passes the last day of the computed month.
pub fn calculate_tax_breakdown(
    paid: &PaidTotals,
    profile: &EmployeeProfile,
    statutory: &StatutoryConfig,
    as_of: NaiveDate,
) -> TaxBreakdown {
    // Stage 1: gross salary. On a flat "personal" contract the additional
    // payments are the fixed allowances plus the lunch value; otherwise
    // they are whatever the month paid beyond the regular hours.
    let basic_salary = paid.regular_paid;
    let additional_payments = if paid.final_paid_total == Decimal::ZERO {
        Decimal::ZERO
    } else {
        match profile.contract_status {
            ContractStatus::Personal => {
                profile.thirteenth_salary
                    + profile.mobile_value
                    + profile.clothing_value
                    + paid.lunch_value_paid
            }
            ContractStatus::Standard => paid.final_paid_total - basic_salary,
        }
    };
    let gross_salary = basic_salary + additional_payments;

    // Stage 2: the study-fund contribution above the salary ceiling
    // becomes a taxable benefit.
    let ceiling = &statutory.study_fund_ceiling;
    let above_ceiling_fund =
        if gross_salary >= Decimal::ONE && basic_salary > ceiling.threshold {
            (basic_salary - ceiling.threshold) * ceiling.above_rate
        } else {
            Decimal::ZERO
        };

    // Stage 3: the bracketed-deduction base.
    let net_value = basic_salary + additional_payments + profile.car_value;
    let gross_taxable = net_value + above_ceiling_fund;

    // Stage 4: employer side.
    let employer = employer_contributions(
        basic_salary,
        gross_taxable,
        &statutory.employer,
        &statutory.national_insurance.employer,
        profile.employer_miscellaneous,
        profile.salary_tax,
    );
    let total_salary_cost = gross_salary + employer.total;

    // Stage 5: employee side.
    let pensionable_salary = basic_salary;
    let employee_pension = deductions::employee_pension(pensionable_salary, &statutory.employee);
    let reduced = profile.is_reduced_rate(as_of);
    let national_insurance_deduction = insurance_deduction(
        gross_taxable,
        &statutory.national_insurance.employee,
        reduced,
    );
    let health_insurance_deduction =
        insurance_deduction(gross_taxable, &statutory.health_insurance, reduced);
    let self_employed_pension = deductions::self_employed_pension(
        additional_payments,
        profile.car_value,
        profile.age_on(as_of),
        &statutory.employee,
    );
    let study_fund_deduction =
        deductions::study_fund_deduction(pensionable_salary, &statutory.employee);

    // Stage 6: progressive tax on the deduction-capped taxable income.
    let income_tax_before_credit = income_tax::income_tax_before_credit(
        gross_taxable,
        self_employed_pension,
        study_fund_deduction,
        &statutory.employee,
        &statutory.income_tax_brackets,
    );
    let marginal_tax_rate = marginal_rate(gross_taxable, &statutory.income_tax_brackets);

    // Stage 7: credits.
    let monthly_credit_points_value = income_tax::monthly_credit_points_value(
        profile.tax_credit_points,
        statutory.tax_credit_point_yearly,
    );
    let pension_refund = income_tax::pension_refund(
        income_tax_before_credit,
        employee_pension,
        gross_taxable,
        &statutory.pension_refund,
    );
    let city_tax_benefit = income_tax::city_tax_benefit(
        gross_taxable,
        profile.city_tax_rate,
        profile.monthly_city_tax_cap,
    );
    let income_tax = final_income_tax(
        income_tax_before_credit,
        monthly_credit_points_value,
        pension_refund,
        city_tax_benefit,
        profile.child_tax_points,
    );

    // Stage 8: reconciliation.
    let total_deductions = employee_pension
        + self_employed_pension
        + study_fund_deduction
        + profile.miscellaneous_deductions
        + national_insurance_deduction
        + health_insurance_deduction
        + income_tax
        + paid.advance_payment_paid;
    let net_payment = gross_salary - total_deductions;

    TaxBreakdown {
        basic_salary,
        additional_payments,
        net_value,
        gross_salary,
        above_ceiling_fund,
        gross_taxable,
        employer_pension: employer.pension,
        employer_compensation: employer.compensation,
        employer_study_fund: employer.study_fund,
        employer_disability: employer.disability,
        employer_miscellaneous: employer.miscellaneous,
        employer_national_insurance: employer.national_insurance,
        salary_tax: employer.salary_tax,
        total_employer_contributions: employer.total,
        total_salary_cost,
        pensionable_salary,
        employee_pension,
        self_employed_pension,
        study_fund_deduction,
        miscellaneous_deductions: profile.miscellaneous_deductions,
        national_insurance_deduction,
        health_insurance_deduction,
        income_tax_before_credit,
        marginal_tax_rate,
        monthly_credit_points_value,
        pension_refund,
        city_tax_benefit,
        income_tax,
        total_deductions,
        net_payment,
    }
}
