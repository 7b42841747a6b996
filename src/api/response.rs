//! Response types for the receipt processor API.
//!
//! This module defines the success bodies returned by the receipt endpoints
//! and the error response structures used for every failure.

use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::error::ServiceError;

/// Response body for `POST /receipts/process`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProcessReceiptResponse {
    /// The identifier assigned to the stored receipt.
    pub id: Uuid,
}

/// Response body for `GET /receipts/:id/points`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PointsResponse {
    /// The points awarded for the receipt.
    pub points: u64,
}

/// API error response structure.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApiError {
    /// Error code for programmatic handling.
    pub code: String,
    /// Human-readable error message.
    pub message: String,
    /// Optional details about the error.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub details: Option<String>,
}

impl ApiError {
    /// Creates a new API error.
    pub fn new(code: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            code: code.into(),
            message: message.into(),
            details: None,
        }
    }

    /// Creates a new API error with details.
    pub fn with_details(
        code: impl Into<String>,
        message: impl Into<String>,
        details: impl Into<String>,
    ) -> Self {
        Self {
            code: code.into(),
            message: message.into(),
            details: Some(details.into()),
        }
    }

    /// Creates a validation error response.
    pub fn validation_error(message: impl Into<String>) -> Self {
        Self::new("VALIDATION_ERROR", message)
    }

    /// Creates a malformed JSON error response.
    pub fn malformed_json(message: impl Into<String>) -> Self {
        Self::new("MALFORMED_JSON", message)
    }

    /// Creates a receipt not found error response.
    pub fn receipt_not_found(id: &str) -> Self {
        Self::with_details(
            "RECEIPT_NOT_FOUND",
            "No receipt found for that ID.",
            format!("No receipt is stored under '{}'", id),
        )
    }
}

/// API error with HTTP status code.
#[derive(Debug)]
pub struct ApiErrorResponse {
    /// The HTTP status code.
    pub status: StatusCode,
    /// The error body.
    pub error: ApiError,
}

impl ApiErrorResponse {
    /// Creates a 400 response carrying the given error body.
    pub fn bad_request(error: ApiError) -> Self {
        Self {
            status: StatusCode::BAD_REQUEST,
            error,
        }
    }
}

impl IntoResponse for ApiErrorResponse {
    fn into_response(self) -> Response {
        (self.status, Json(self.error)).into_response()
    }
}

impl From<ServiceError> for ApiErrorResponse {
    fn from(error: ServiceError) -> Self {
        let description = error.to_string();
        match error {
            ServiceError::ReceiptNotFound { id } => ApiErrorResponse {
                status: StatusCode::NOT_FOUND,
                error: ApiError::receipt_not_found(&id),
            },
            // Scoring absorbs field parse failures, so no handler sends this today.
            ServiceError::InvalidField { .. } => {
                ApiErrorResponse::bad_request(ApiError::validation_error(description))
            }
            ServiceError::StoreUnavailable { message } => ApiErrorResponse {
                status: StatusCode::SERVICE_UNAVAILABLE,
                error: ApiError::with_details(
                    "STORE_UNAVAILABLE",
                    "Receipt store unavailable",
                    message,
                ),
            },
            ServiceError::ConfigNotFound { .. }
            | ServiceError::ConfigParseError { .. }
            | ServiceError::InvalidConfig { .. }
            | ServiceError::TelemetryInit { .. } => ApiErrorResponse {
                status: StatusCode::INTERNAL_SERVER_ERROR,
                error: ApiError::with_details(
                    "CONFIG_ERROR",
                    "Configuration error",
                    description,
                ),
            },
            ServiceError::Io(_) => ApiErrorResponse {
                status: StatusCode::INTERNAL_SERVER_ERROR,
                error: ApiError::with_details("INTERNAL_ERROR", "Internal error", description),
            },
        }
    }
}
