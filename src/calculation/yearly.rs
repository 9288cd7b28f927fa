//! The yearly summary accumulator.
//!
//! Cross-month leave balances: fixed entitlements minus the days used in
//! prior months plus the current month's usage. Entitlements are constants
//! of the statutory configuration, independent of tenure.

use crate::config::Entitlements;
use crate::models::{EmployeeProfile, MonthlyTotals, YearlySummary};

/// Builds the yearly sick/vacation balances.
///
/// Usage is the profile's year-to-date figure plus the points accumulated
/// in the month being computed; the balance may go negative when usage
/// exceeds the entitlement.
pub fn yearly_summary(
    profile: &EmployeeProfile,
    monthly: &MonthlyTotals,
    entitlements: &Entitlements,
) -> YearlySummary {
    let sick_used = profile.ytd_sick_days_used + monthly.sick_points;
    let vacation_used = profile.ytd_vacation_days_used + monthly.vacation_points;

    YearlySummary {
        sick_entitlement: entitlements.sick_days,
        sick_used,
        sick_balance: entitlements.sick_days - sick_used,
        vacation_entitlement: entitlements.vacation_days,
        vacation_used,
        vacation_balance: entitlements.vacation_days - vacation_used,
    }
}
