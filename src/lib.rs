//! Monthly payroll reconciliation engine for hourly employees.
//!
//! This crate implements the Israeli labor-law shape of hourly payroll:
//! regular/overtime/holiday hour tiers, sick-day sequencing, vacation
//! overrides, two-bracket social insurance, progressive income tax and the
//! full net-pay reconciliation. The core is a deterministic `compute`
//! pipeline from a raw per-day dataset to a fully derived month.

#![warn(missing_docs)]

pub mod api;
pub mod calculation;
pub mod config;
pub mod error;
pub mod models;
pub mod tax;

#[cfg(test)]
pub(crate) mod test_fixtures;
