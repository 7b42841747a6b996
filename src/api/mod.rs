//! HTTP API module for the receipt processor.
//!
//! This module provides the REST API endpoints for submitting receipts and
//! retrieving the points awarded for them.

mod handlers;
mod request;
mod response;
mod state;

pub use handlers::create_router;
pub use request::{ProcessReceiptRequest, ReceiptItemRequest};
pub use response::{ApiError, ApiErrorResponse, PointsResponse, ProcessReceiptResponse};
pub use state::AppState;
