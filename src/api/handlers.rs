//! HTTP request handlers for the payroll engine API.
//!
//! This module contains the handler functions for all API endpoints.

use axum::{
    extract::{rejection::JsonRejection, State},
    http::{header, StatusCode},
    response::IntoResponse,
    routing::post,
    Json, Router,
};
use tracing::{info, warn};
use uuid::Uuid;

use crate::calculation::compute;
use crate::error::EngineError;

use super::request::ComputeRequest;
use super::response::{ApiError, ApiErrorResponse, ComputeResponse};
use super::state::AppState;

/// Creates the API router with all endpoints.
pub fn create_router(state: AppState) -> Router {
    Router::new()
        .route("/compute", post(compute_handler))
        .with_state(state)
}

/// Handler for the POST /compute endpoint.
///
/// Accepts a raw month dataset and returns the fully derived month. The
/// only request-level failures are malformed JSON and an out-of-range
/// month; the computation itself is total.
async fn compute_handler(
    State(state): State<AppState>,
    payload: Result<Json<ComputeRequest>, JsonRejection>,
) -> impl IntoResponse {
    // Correlation ID for request tracking.
    let correlation_id = Uuid::new_v4();
    info!(correlation_id = %correlation_id, "Processing compute request");

    let request = match payload {
        Ok(Json(req)) => req,
        Err(rejection) => {
            let error = match rejection {
                JsonRejection::JsonDataError(err) => {
                    let body_text = err.body_text();
                    warn!(
                        correlation_id = %correlation_id,
                        error = %body_text,
                        "JSON data error"
                    );
                    if body_text.contains("missing field") {
                        ApiError::new("VALIDATION_ERROR", body_text)
                    } else {
                        ApiError::malformed_json(body_text)
                    }
                }
                JsonRejection::JsonSyntaxError(err) => {
                    warn!(
                        correlation_id = %correlation_id,
                        error = %err,
                        "JSON syntax error"
                    );
                    ApiError::malformed_json(format!("Invalid JSON syntax: {}", err))
                }
                JsonRejection::MissingJsonContentType(_) => ApiError::new(
                    "MISSING_CONTENT_TYPE",
                    "Content-Type must be application/json",
                ),
                _ => ApiError::malformed_json("Failed to parse request body"),
            };
            return (
                StatusCode::BAD_REQUEST,
                [(header::CONTENT_TYPE, "application/json")],
                Json(error),
            )
                .into_response();
        }
    };

    if !(1..=12).contains(&request.month) {
        warn!(
            correlation_id = %correlation_id,
            month = request.month,
            "Month out of range"
        );
        let api_error: ApiErrorResponse = EngineError::InvalidMonth {
            month: request.month,
            year: request.year,
        }
        .into();
        return (
            api_error.status,
            [(header::CONTENT_TYPE, "application/json")],
            Json(api_error.error),
        )
            .into_response();
    }

    let dataset = request.into_dataset();
    let result = compute(&dataset, state.config());

    info!(
        correlation_id = %correlation_id,
        employee_id = %result.employee_id,
        year = result.year,
        month = result.month,
        net_payment = %result.tax.net_payment,
        advisories = result.weekly_advisories.len(),
        "Computation completed"
    );

    (
        StatusCode::OK,
        [(header::CONTENT_TYPE, "application/json")],
        Json(ComputeResponse::new(result)),
    )
        .into_response()
}
