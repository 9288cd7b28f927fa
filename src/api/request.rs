//! Request types for the payroll engine API.
//!
//! This module defines the JSON request structures for the `/compute`
//! endpoint.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::models::{EmployeeProfile, RawDay, RawMonthDataset};

/// Request body for the `/compute` endpoint.
///
/// Carries everything needed to reconcile one employee-month: the profile,
/// the month coordinates, the ordered raw day rows, and optionally a
/// pasted block of times applied positionally before computation.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ComputeRequest {
    /// The employee profile.
    pub employee: EmployeeProfile,
    /// The calendar year.
    pub year: i32,
    /// The calendar month (1-12).
    pub month: u32,
    /// Ordered raw day rows; position implies the date.
    #[serde(default)]
    pub days: Vec<RawDayRequest>,
    /// Optional tab-separated `start\tend` rows pasted from a spreadsheet,
    /// applied positionally over `days`. Malformed rows are skipped.
    #[serde(default)]
    pub paste: Option<String>,
}

/// One raw day row in a compute request.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct RawDayRequest {
    /// Clock-in time, "HH:MM".
    #[serde(default)]
    pub start_time: Option<String>,
    /// Clock-out time, "HH:MM".
    #[serde(default)]
    pub end_time: Option<String>,
    /// Sick mark; any non-empty value marks the day sick.
    #[serde(default)]
    pub sick_mark: Option<String>,
    /// Vacation mark; only "1" or "1.00" are accepted.
    #[serde(default)]
    pub vacation_mark: Option<String>,
    /// Manual advance payment for this day.
    #[serde(default)]
    pub advance_payment: Option<Decimal>,
}

impl From<RawDayRequest> for RawDay {
    fn from(req: RawDayRequest) -> Self {
        RawDay {
            start_time: req.start_time,
            end_time: req.end_time,
            sick_mark: req.sick_mark,
            vacation_mark: req.vacation_mark,
            advance_payment: req.advance_payment,
        }
    }
}

impl ComputeRequest {
    /// Converts the request into the engine's raw dataset, applying the
    /// pasted time block if one was supplied.
    pub fn into_dataset(self) -> RawMonthDataset {
        let mut days: Vec<RawDay> = self.days.into_iter().map(Into::into).collect();
        if let Some(paste) = &self.paste {
            // Pasted rows may extend past the provided day list; pad so
            // positional application can reach them.
            let pasted_rows = paste.trim().lines().count();
            if pasted_rows > days.len() {
                days.resize_with(pasted_rows, RawDay::default);
            }
            crate::models::apply_bulk_paste(&mut days, paste);
        }

        RawMonthDataset {
            employee: self.employee,
            year: self.year,
            month: self.month,
            days,
        }
    }
}
