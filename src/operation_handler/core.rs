//! Core operation handler infrastructure
//!
//! This module contains the request and response types and the dispatcher that
//! routes each operation to its handler.

use crate::{OrderServer, error::OrderResult, storage::OrderStorage};
use log::{debug, info, warn};
use serde::{Deserialize, Serialize};
use serde_json::{Value, json};
use std::collections::HashMap;

/// Framework-agnostic operation handler for order operations
///
/// This handler provides a structured interface for performing order operations
/// without being tied to any specific HTTP framework.
pub struct OrderOperationHandler<S: OrderStorage> {
    pub(super) server: OrderServer<S>,
}

/// Structured request for order operations
#[derive(Debug, Clone, PartialEq)]
pub struct OrderOperationRequest {
    /// The type of operation to perform
    pub operation: OrderOperationType,
    /// The `:orderId` route parameter for operations on a single order
    pub order_id: Option<String>,
    /// Request body, `{"data": {...}}`
    pub body: Option<Value>,
    /// Request ID for tracing and correlation
    pub request_id: Option<String>,
}

/// Types of order operations supported by the handler
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum OrderOperationType {
    /// POST /orders
    Create,
    /// GET /orders/:orderId
    Get,
    /// PUT /orders/:orderId
    Update,
    /// DELETE /orders/:orderId
    Delete,
    /// GET /orders
    List,
}

/// Structured response from order operations
#[derive(Debug, Clone, PartialEq)]
pub struct OrderOperationResponse {
    /// Whether the operation succeeded
    pub success: bool,
    /// HTTP status code to emit
    pub status: u16,
    /// The primary data returned by the operation
    pub data: Option<Value>,
    /// Error message if the operation failed
    pub error: Option<String>,
    /// Error code for programmatic handling
    pub error_code: Option<String>,
    pub metadata: OperationMetadata,
}

/// Metadata about an order operation
#[derive(Debug, Clone, PartialEq)]
pub struct OperationMetadata {
    /// Order ID if applicable
    pub order_id: Option<String>,
    /// Number of orders returned
    pub order_count: Option<usize>,
    /// Request ID for tracing
    pub request_id: String,
    /// Additional metadata such as the `location` of a created order
    pub additional: HashMap<String, Value>,
}

impl OperationMetadata {
    pub(crate) fn for_request(request_id: &str) -> Self {
        Self {
            order_id: None,
            order_count: None,
            request_id: request_id.to_string(),
            additional: HashMap::new(),
        }
    }
}

impl OrderOperationResponse {
    /// The JSON body the host framework should send.
    ///
    /// Successful responses wrap their payload as `{"data": ...}`; failures
    /// become `{"error": message}`. Responses without a payload (204) have no body.
    pub fn to_http_body(&self) -> Option<Value> {
        if self.success {
            self.data.as_ref().map(|data| json!({ "data": data }))
        } else {
            self.error.as_ref().map(|message| json!({ "error": message }))
        }
    }
}

impl<S: OrderStorage> OrderOperationHandler<S> {
    /// Create a new operation handler with the given order server.
    pub fn new(server: OrderServer<S>) -> Self {
        Self { server }
    }

    /// Handle a structured order operation request.
    ///
    /// Runs the operation's validation pipeline and, if it passes, its
    /// terminal handler. Every request resolves to exactly one response.
    pub async fn handle_operation(&self, request: OrderOperationRequest) -> OrderOperationResponse {
        let request_id = request
            .request_id
            .clone()
            .unwrap_or_else(|| uuid::Uuid::new_v4().to_string());

        info!(
            "Order operation handler processing {:?} for order {:?} (request: '{}')",
            request.operation, request.order_id, request_id
        );

        let result: OrderResult<OrderOperationResponse> = match request.operation {
            OrderOperationType::Create => {
                super::handlers::crud::handle_create(self, request, &request_id).await
            }
            OrderOperationType::Get => {
                super::handlers::crud::handle_get(self, request, &request_id).await
            }
            OrderOperationType::Update => {
                super::handlers::crud::handle_update(self, request, &request_id).await
            }
            OrderOperationType::Delete => {
                super::handlers::crud::handle_delete(self, request, &request_id).await
            }
            OrderOperationType::List => {
                super::handlers::query::handle_list(self, request, &request_id).await
            }
        };

        match &result {
            Ok(response) => {
                debug!(
                    "Order operation handler completed with status {} (request: '{}')",
                    response.status, request_id
                );
            }
            Err(e) => {
                warn!(
                    "Order operation handler failed: {} (request: '{}')",
                    e, request_id
                );
            }
        }

        result.unwrap_or_else(|e| super::errors::create_error_response(e, request_id))
    }

    /// Resolve an HTTP method and path against the configured base path and
    /// handle the resulting operation.
    ///
    /// Unknown paths answer 404 and unsupported methods 405.
    pub async fn handle_route(
        &self,
        method: &str,
        path: &str,
        body: Option<Value>,
    ) -> OrderOperationResponse {
        match OrderOperationRequest::from_route(method, path, body, &self.server.config().base_path)
        {
            Ok(request) => self.handle_operation(request).await,
            Err(e) => {
                let request_id = uuid::Uuid::new_v4().to_string();
                warn!("Order route rejected: {} (request: '{}')", e, request_id);
                super::errors::create_error_response(e, request_id)
            }
        }
    }

    /// Get access to the underlying order server.
    pub fn server(&self) -> &OrderServer<S> {
        &self.server
    }
}
