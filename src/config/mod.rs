//! Statutory configuration for the payroll engine.
//!
//! The tables that drive the calculation (income-tax brackets, insurance
//! brackets, contribution rates, ceilings, entitlements, working-time rules
//! and the holiday list) are loaded from a YAML directory per tax year.

mod loader;
mod types;

pub use loader::ConfigLoader;
pub use types::{
    ContributionBracket, EmployeeRates, EmployerRates, Entitlements, FoodBreakRule, HolidayTable,
    HolidaysFile, InsuranceTable, NationalInsuranceConfig, PensionRefundRule, StatutoryConfig,
    StudyFundCeiling, TaxBracket, TierMultipliers, WorkingTimeRules,
};
