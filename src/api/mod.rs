//! HTTP API for the payroll reconciliation engine.
//!
//! The engine itself performs no I/O; this module is the boundary the
//! surrounding system calls with a raw month dataset and receives the
//! computed month back from.

mod handlers;
mod request;
mod response;
mod state;

pub use handlers::create_router;
pub use request::{ComputeRequest, RawDayRequest};
pub use response::{ApiError, ApiErrorResponse, ComputeResponse};
pub use state::AppState;
