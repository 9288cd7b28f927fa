//! Shared fixtures for the unit-test suites.

use chrono::NaiveDate;
use rust_decimal::Decimal;
use std::str::FromStr;

use crate::config::{
    ConfigLoader, ContributionBracket, EmployeeRates, EmployerRates, Entitlements, FoodBreakRule,
    HolidayTable, InsuranceTable, NationalInsuranceConfig, PensionRefundRule, StatutoryConfig,
    StudyFundCeiling, TaxBracket, TierMultipliers, WorkingTimeRules,
};

fn dec(s: &str) -> Decimal {
    Decimal::from_str(s).unwrap()
}

/// The 2025 statutory tables, built in code so unit tests need no files.
pub(crate) fn statutory_2025() -> StatutoryConfig {
    StatutoryConfig {
        tax_year: 2025,
        tax_credit_point_yearly: dec("2904.00"),
        income_tax_brackets: vec![
            TaxBracket {
                from_amount: dec("0"),
                to_amount: Some(dec("7010")),
                rate: dec("0.10"),
            },
            TaxBracket {
                from_amount: dec("7011"),
                to_amount: Some(dec("10060")),
                rate: dec("0.14"),
            },
            TaxBracket {
                from_amount: dec("10061"),
                to_amount: Some(dec("16150")),
                rate: dec("0.20"),
            },
            TaxBracket {
                from_amount: dec("16151"),
                to_amount: Some(dec("22440")),
                rate: dec("0.31"),
            },
            TaxBracket {
                from_amount: dec("22441"),
                to_amount: Some(dec("46690")),
                rate: dec("0.35"),
            },
            TaxBracket {
                from_amount: dec("46691"),
                to_amount: Some(dec("60130")),
                rate: dec("0.47"),
            },
            TaxBracket {
                from_amount: dec("60131"),
                to_amount: None,
                rate: dec("0.50"),
            },
        ],
        national_insurance: NationalInsuranceConfig {
            employee: InsuranceTable {
                brackets: vec![
                    ContributionBracket {
                        from_amount: dec("0"),
                        to_amount: dec("7522"),
                        rate: dec("0.0104"),
                    },
                    ContributionBracket {
                        from_amount: dec("7522"),
                        to_amount: dec("50695"),
                        rate: dec("0.07"),
                    },
                ],
                reduced_rate: dec("0.01"),
            },
            employer: vec![
                ContributionBracket {
                    from_amount: dec("0"),
                    to_amount: dec("7522"),
                    rate: dec("0.0451"),
                },
                ContributionBracket {
                    from_amount: dec("7522"),
                    to_amount: dec("50695"),
                    rate: dec("0.076"),
                },
            ],
        },
        health_insurance: InsuranceTable {
            brackets: vec![
                ContributionBracket {
                    from_amount: dec("0"),
                    to_amount: dec("7522"),
                    rate: dec("0.0323"),
                },
                ContributionBracket {
                    from_amount: dec("7522"),
                    to_amount: dec("50695"),
                    rate: dec("0.0517"),
                },
            ],
            reduced_rate: dec("0.03"),
        },
        employer: EmployerRates {
            pension: dec("0.065"),
            compensation: dec("0.08333"),
            study_fund: dec("0.075"),
            disability: dec("0.01"),
        },
        employee: EmployeeRates {
            pension: dec("0.06"),
            study_fund: dec("0.025"),
            self_employed_pension_under_50: dec("0.05"),
            self_employed_pension_from_50: dec("0.075"),
            self_employed_deductible_yearly_cap: dec("38412.00"),
            study_fund_deductible_yearly_cap: dec("13202.00"),
        },
        pension_refund: PensionRefundRule {
            rate: dec("0.35"),
            monthly_cap: dec("679.00"),
            taxable_fraction: dec("0.07"),
        },
        study_fund_ceiling: StudyFundCeiling {
            threshold: dec("15712.00"),
            above_rate: dec("0.075"),
        },
        entitlements: Entitlements {
            sick_days: dec("18"),
            vacation_days: dec("12"),
        },
        working_time: WorkingTimeRules {
            weekly_ceiling: dec("42"),
            day_cap: dec("8"),
            night_cap: dec("7"),
            night_start_hour: 22,
            night_end_hour: 6,
            overtime_first_tier_hours: dec("2"),
        },
        food_break: FoodBreakRule {
            qualifying_hours: dec("8"),
            half_break_above: dec("8.5"),
            full_break_above: dec("11.5"),
            half_break_hours: dec("0.5"),
            full_break_hours: dec("1.0"),
        },
        multipliers: TierMultipliers {
            overtime_125: dec("1.25"),
            overtime_150: dec("1.5"),
            holiday_150: dec("1.5"),
            holiday_175: dec("1.75"),
            holiday_200: dec("2.0"),
        },
    }
}

/// A loader over the 2025 tables with a small holiday set.
pub(crate) fn test_config() -> ConfigLoader {
    let holidays = HolidayTable::new(vec![
        NaiveDate::from_ymd_opt(2025, 5, 1).unwrap(),
        NaiveDate::from_ymd_opt(2025, 6, 2).unwrap(),
        NaiveDate::from_ymd_opt(2025, 9, 22).unwrap(),
        NaiveDate::from_ymd_opt(2025, 9, 23).unwrap(),
    ]);
    ConfigLoader::from_parts(statutory_2025(), holidays)
}
