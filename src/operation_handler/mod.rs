//! Framework-agnostic order operation handler.
//!
//! This module provides structured request/response handling for order
//! operations. A host HTTP framework converts its request into an
//! [`OrderOperationRequest`] (or calls [`OrderOperationHandler::handle_route`]
//! with the raw method and path) and emits the returned status and body.
//!
//! # Key Types
//!
//! - [`OrderOperationHandler`] - Main handler for processing order operations
//! - [`OrderOperationRequest`] - Structured request wrapper
//! - [`OrderOperationResponse`] - Response with status code and metadata
//!
//! # Examples
//!
//! ```rust,no_run
//! use orders_server::operation_handler::{OrderOperationHandler, OrderOperationRequest};
//! use orders_server::{OrderServer, storage::InMemoryOrderStorage};
//! use serde_json::json;
//!
//! # async fn example() {
//! let server = OrderServer::new(InMemoryOrderStorage::new());
//! let handler = OrderOperationHandler::new(server);
//!
//! let request = OrderOperationRequest::create(json!({
//!     "data": {
//!         "deliverTo": "123 Main",
//!         "mobileNumber": "555-0100",
//!         "dishes": [{"id": 1, "quantity": 2}]
//!     }
//! }));
//! let response = handler.handle_operation(request).await;
//! assert_eq!(response.status, 201);
//! # }
//! ```

mod builders;
mod core;
mod errors;
mod handlers;

// Re-export all public types and functions
pub use self::core::{
    OperationMetadata, OrderOperationHandler, OrderOperationRequest, OrderOperationResponse,
    OrderOperationType,
};

// Re-export error utilities for advanced usage
pub use errors::create_error_response;
