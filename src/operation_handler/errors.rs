//! Error handling utilities for operation handlers
//!
//! Converts an [`OrderError`] into the response the host framework emits.

use crate::{
    error::OrderError,
    operation_handler::core::{OperationMetadata, OrderOperationResponse},
};

/// Create an error response from an OrderError.
///
/// The message is the error's display text, so clients see exactly
/// `Must include a deliverTo`, `Order id not found: 7`, and so on.
pub fn create_error_response(error: OrderError, request_id: String) -> OrderOperationResponse {
    let order_id = match &error {
        OrderError::OrderNotFound { id } => Some(id.clone()),
        OrderError::IdMismatch { route_id, .. } => Some(route_id.clone()),
        _ => None,
    };

    let mut metadata = OperationMetadata::for_request(&request_id);
    metadata.order_id = order_id;

    OrderOperationResponse {
        success: false,
        status: error.status_code(),
        data: None,
        error: Some(error.to_string()),
        error_code: Some(error.error_code().to_string()),
        metadata,
    }
}
