//! Core data models for the payroll reconciliation engine.
//!
//! This module contains all the domain models used throughout the engine.

mod day_record;
mod employee;
mod month;
mod totals;

pub use day_record::{DayRecord, RawDay};
pub use employee::{ContractStatus, EmployeeProfile};
pub use month::{apply_bulk_paste, build_day_grid, day_name, RawMonthDataset};
pub use totals::{
    ComputedMonth, MonthlyTotals, PaidTotals, TaxBreakdown, WeeklyOvertimeAdvisory, YearlySummary,
};
