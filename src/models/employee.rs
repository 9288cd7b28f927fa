//! Employee profile model and related types.
//!
//! The [`EmployeeProfile`] is owned by the caller and read-only to the
//! engine: it carries the hourly rate, the tax-relevant personal fields and
//! the year-to-date leave usage from prior months.

use chrono::{Datelike, NaiveDate};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// The employee's contract arrangement.
///
/// A flat "personal" contract changes how additional payments are derived
/// in the tax stage: fixed allowances plus the lunch value, instead of the
/// overtime-and-premium remainder.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ContractStatus {
    /// Standard hourly contract.
    Standard,
    /// Flat "personal" contract with fixed allowances.
    Personal,
}

impl Default for ContractStatus {
    fn default() -> Self {
        ContractStatus::Standard
    }
}

/// An employee subject to payroll reconciliation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EmployeeProfile {
    /// Unique identifier for the employee.
    pub id: String,
    /// The hourly pay rate.
    pub hourly_rate: Decimal,
    /// The employee's date of birth.
    pub date_of_birth: NaiveDate,
    /// The contract arrangement.
    #[serde(default)]
    pub contract_status: ContractStatus,
    /// Income-tax credit points.
    #[serde(default)]
    pub tax_credit_points: Decimal,
    /// Monthly monetary credit for children, subtracted from income tax.
    #[serde(default)]
    pub child_tax_points: Decimal,
    /// City-tax benefit rate, as a fraction of gross taxable.
    #[serde(default)]
    pub city_tax_rate: Decimal,
    /// Monthly cap on the salary amount eligible for the city-tax benefit.
    #[serde(default)]
    pub monthly_city_tax_cap: Decimal,
    /// Monthly taxable value of a company car.
    #[serde(default)]
    pub car_value: Decimal,
    /// Monthly thirteenth-salary allowance (personal contracts).
    #[serde(default)]
    pub thirteenth_salary: Decimal,
    /// Monthly mobile-phone allowance (personal contracts).
    #[serde(default)]
    pub mobile_value: Decimal,
    /// Monthly clothing allowance (personal contracts).
    #[serde(default)]
    pub clothing_value: Decimal,
    /// Lunch value paid per worked day.
    #[serde(default)]
    pub lunch_value_per_day: Decimal,
    /// Manual employer-side miscellaneous contribution.
    #[serde(default)]
    pub employer_miscellaneous: Decimal,
    /// Manual employer-side salary tax.
    #[serde(default)]
    pub salary_tax: Decimal,
    /// Manual employee-side miscellaneous deductions.
    #[serde(default)]
    pub miscellaneous_deductions: Decimal,
    /// Sick days already used this year in prior months.
    #[serde(default)]
    pub ytd_sick_days_used: Decimal,
    /// Vacation days already used this year in prior months.
    #[serde(default)]
    pub ytd_vacation_days_used: Decimal,
}

impl EmployeeProfile {
    /// Returns the employee's age in whole years as of the given date.
    ///
    /// # Example
    ///
    /// ```
    /// use payslip_engine::models::EmployeeProfile;
    /// use chrono::NaiveDate;
    ///
    /// let mut profile = EmployeeProfile::with_rate("emp_001", "50".parse().unwrap());
    /// profile.date_of_birth = NaiveDate::from_ymd_opt(1990, 6, 15).unwrap();
    ///
    /// let before_birthday = NaiveDate::from_ymd_opt(2025, 6, 14).unwrap();
    /// let after_birthday = NaiveDate::from_ymd_opt(2025, 6, 15).unwrap();
    /// assert_eq!(profile.age_on(before_birthday), 34);
    /// assert_eq!(profile.age_on(after_birthday), 35);
    /// ```
    pub fn age_on(&self, as_of: NaiveDate) -> i32 {
        let mut age = as_of.year() - self.date_of_birth.year();
        let birthday_this_year = (self.date_of_birth.month(), self.date_of_birth.day());
        if (as_of.month(), as_of.day()) < birthday_this_year {
            age -= 1;
        }
        age
    }

    /// Returns true if the employee pays the reduced insurance rates
    /// (under 18, or 67 and over) as of the given date.
    pub fn is_reduced_rate(&self, as_of: NaiveDate) -> bool {
        let age = self.age_on(as_of);
        age < 18 || age >= 67
    }

    /// Creates a profile with the given id and hourly rate and every other
    /// field zeroed or defaulted.
    pub fn with_rate(id: &str, hourly_rate: Decimal) -> Self {
        Self {
            id: id.to_string(),
            hourly_rate,
            date_of_birth: NaiveDate::from_ymd_opt(1980, 1, 1).expect("valid date"),
            contract_status: ContractStatus::Standard,
            tax_credit_points: Decimal::ZERO,
            child_tax_points: Decimal::ZERO,
            city_tax_rate: Decimal::ZERO,
            monthly_city_tax_cap: Decimal::ZERO,
            car_value: Decimal::ZERO,
            thirteenth_salary: Decimal::ZERO,
            mobile_value: Decimal::ZERO,
            clothing_value: Decimal::ZERO,
            lunch_value_per_day: Decimal::ZERO,
            employer_miscellaneous: Decimal::ZERO,
            salary_tax: Decimal::ZERO,
            miscellaneous_deductions: Decimal::ZERO,
            ytd_sick_days_used: Decimal::ZERO,
            ytd_vacation_days_used: Decimal::ZERO,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn profile_born(year: i32, month: u32, day: u32) -> EmployeeProfile {
        let mut profile = EmployeeProfile::with_rate("emp_001", Decimal::new(50, 0));
        profile.date_of_birth = NaiveDate::from_ymd_opt(year, month, day).unwrap();
        profile
    }

    #[test]
    fn test_age_before_and_after_birthday() {
        let profile = profile_born(1990, 6, 15);
        assert_eq!(
            profile.age_on(NaiveDate::from_ymd_opt(2025, 6, 14).unwrap()),
            34
        );
        assert_eq!(
            profile.age_on(NaiveDate::from_ymd_opt(2025, 6, 15).unwrap()),
            35
        );
    }

    #[test]
    fn test_reduced_rate_under_18() {
        let profile = profile_born(2010, 1, 1);
        assert!(profile.is_reduced_rate(NaiveDate::from_ymd_opt(2025, 12, 31).unwrap()));
    }

    #[test]
    fn test_reduced_rate_at_67() {
        let profile = profile_born(1958, 3, 1);
        assert!(profile.is_reduced_rate(NaiveDate::from_ymd_opt(2025, 3, 1).unwrap()));
        assert!(!profile.is_reduced_rate(NaiveDate::from_ymd_opt(2025, 2, 28).unwrap()));
    }

    #[test]
    fn test_standard_rate_in_working_age() {
        let profile = profile_born(1985, 3, 15);
        assert!(!profile.is_reduced_rate(NaiveDate::from_ymd_opt(2025, 7, 1).unwrap()));
    }

    #[test]
    fn test_deserialize_profile_with_defaults() {
        let json = r#"{
            "id": "emp_001",
            "hourly_rate": "52.50",
            "date_of_birth": "1985-03-15"
        }"#;

        let profile: EmployeeProfile = serde_json::from_str(json).unwrap();
        assert_eq!(profile.id, "emp_001");
        assert_eq!(profile.hourly_rate, Decimal::new(5250, 2));
        assert_eq!(profile.contract_status, ContractStatus::Standard);
        assert_eq!(profile.tax_credit_points, Decimal::ZERO);
        assert_eq!(profile.ytd_sick_days_used, Decimal::ZERO);
    }

    #[test]
    fn test_contract_status_serialization() {
        assert_eq!(
            serde_json::to_string(&ContractStatus::Standard).unwrap(),
            "\"standard\""
        );
        assert_eq!(
            serde_json::to_string(&ContractStatus::Personal).unwrap(),
            "\"personal\""
        );
    }

    #[test]
    fn test_profile_round_trip() {
        let mut profile = profile_born(1985, 3, 15);
        profile.contract_status = ContractStatus::Personal;
        profile.thirteenth_salary = Decimal::new(100000, 2);

        let json = serde_json::to_string(&profile).unwrap();
        let deserialized: EmployeeProfile = serde_json::from_str(&json).unwrap();
        assert_eq!(profile, deserialized);
    }
}
