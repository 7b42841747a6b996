//! HTTP request handlers for the receipt processor API.
//!
//! This module contains the handler functions for all API endpoints.

use std::time::Instant;

use axum::{
    Json, Router,
    extract::{Path, State, rejection::JsonRejection},
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::{get, post},
};
use chrono::Utc;
use tracing::{info, warn};
use uuid::Uuid;

use crate::calculation::{calculate_breakdown, calculate_points, sum_step_points};
use crate::error::{ServiceError, ServiceResult};
use crate::models::{PointsBreakdown, Receipt};
use crate::store::ReceiptId;

use super::request::ProcessReceiptRequest;
use super::response::{ApiError, ApiErrorResponse, PointsResponse, ProcessReceiptResponse};
use super::state::AppState;

/// Creates the API router with all endpoints.
pub fn create_router(state: AppState) -> Router {
    Router::new()
        .route("/receipts/process", post(process_receipt_handler))
        .route("/receipts/:id/points", get(points_handler))
        .route("/receipts/:id/breakdown", get(breakdown_handler))
        .with_state(state)
}

/// Handler for POST /receipts/process.
///
/// Stores the submitted receipt and returns its generated identifier.
async fn process_receipt_handler(
    State(state): State<AppState>,
    payload: Result<Json<ProcessReceiptRequest>, JsonRejection>,
) -> Response {
    // Generate correlation ID for request tracking
    let correlation_id = Uuid::new_v4();
    info!(correlation_id = %correlation_id, "Processing receipt");

    let request = match payload {
        Ok(Json(req)) => req,
        Err(rejection) => {
            let error = rejection_error(correlation_id, rejection);
            return ApiErrorResponse::bad_request(error).into_response();
        }
    };

    let receipt: Receipt = request.into();
    let item_count = receipt.item_count();

    match state.store().insert(receipt) {
        Ok(id) => {
            info!(
                correlation_id = %correlation_id,
                receipt_id = %id,
                item_count,
                "Receipt stored"
            );
            (StatusCode::OK, Json(ProcessReceiptResponse { id })).into_response()
        }
        Err(err) => {
            warn!(correlation_id = %correlation_id, error = %err, "Failed to store receipt");
            ApiErrorResponse::from(err).into_response()
        }
    }
}

/// Handler for GET /receipts/:id/points.
async fn points_handler(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<PointsResponse>, ApiErrorResponse> {
    let correlation_id = Uuid::new_v4();
    let start_time = Instant::now();

    let (receipt_id, receipt) = find_receipt(&state, &id).map_err(|err| {
        warn!(correlation_id = %correlation_id, receipt_id = %id, error = %err, "Points lookup failed");
        ApiErrorResponse::from(err)
    })?;

    let points = calculate_points(&receipt);
    info!(
        correlation_id = %correlation_id,
        receipt_id = %receipt_id,
        points,
        duration_us = start_time.elapsed().as_micros(),
        "Points calculated"
    );

    Ok(Json(PointsResponse { points }))
}

/// Handler for GET /receipts/:id/breakdown.
///
/// Returns the points awarded by each rule alongside the total.
async fn breakdown_handler(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<PointsBreakdown>, ApiErrorResponse> {
    let correlation_id = Uuid::new_v4();

    let (receipt_id, receipt) = find_receipt(&state, &id).map_err(|err| {
        warn!(correlation_id = %correlation_id, receipt_id = %id, error = %err, "Breakdown lookup failed");
        ApiErrorResponse::from(err)
    })?;

    let steps = calculate_breakdown(&receipt);
    let breakdown = PointsBreakdown {
        receipt_id,
        calculated_at: Utc::now(),
        points: sum_step_points(&steps),
        steps,
    };

    info!(
        correlation_id = %correlation_id,
        receipt_id = %receipt_id,
        points = breakdown.points,
        "Points breakdown calculated"
    );

    Ok(Json(breakdown))
}

/// Looks up a stored receipt by its textual identifier.
///
/// Identifiers that are not UUIDs cannot name a stored receipt and are
/// reported as not found.
fn find_receipt(state: &AppState, id: &str) -> ServiceResult<(ReceiptId, Receipt)> {
    let not_found = || ServiceError::ReceiptNotFound { id: id.to_string() };

    let receipt_id = Uuid::parse_str(id).map_err(|_| not_found())?;
    let receipt = state.store().fetch(&receipt_id)?.ok_or_else(not_found)?;

    Ok((receipt_id, receipt))
}

/// Converts a JSON extraction failure into an API error body.
fn rejection_error(correlation_id: Uuid, rejection: JsonRejection) -> ApiError {
    match rejection {
        JsonRejection::JsonDataError(err) => {
            // The body text carries serde's description, e.g. "missing field `total`"
            let body_text = err.body_text();
            warn!(
                correlation_id = %correlation_id,
                error = %body_text,
                "JSON data error"
            );
            ApiError::validation_error(body_text)
        }
        JsonRejection::JsonSyntaxError(err) => {
            warn!(
                correlation_id = %correlation_id,
                error = %err,
                "JSON syntax error"
            );
            ApiError::malformed_json(format!("Invalid JSON syntax: {}", err))
        }
        JsonRejection::MissingJsonContentType(_) => {
            warn!(correlation_id = %correlation_id, "Missing JSON content type");
            ApiError::new("MISSING_CONTENT_TYPE", "Content-Type must be application/json")
        }
        _ => ApiError::malformed_json("Failed to parse request body"),
    }
}
