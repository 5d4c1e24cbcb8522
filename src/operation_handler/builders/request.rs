//! Request builder utilities for OrderOperationRequest
//!
//! This module provides convenient builder methods for constructing
//! OrderOperationRequest instances for different operation types.

use crate::operation_handler::core::{OrderOperationRequest, OrderOperationType};
use serde_json::Value;

impl OrderOperationRequest {
    /// Create a new create operation request.
    pub fn create(body: Value) -> Self {
        Self {
            operation: OrderOperationType::Create,
            order_id: None,
            body: Some(body),
            request_id: None,
        }
    }

    /// Create a new get operation request.
    pub fn get(order_id: impl Into<String>) -> Self {
        Self {
            operation: OrderOperationType::Get,
            order_id: Some(order_id.into()),
            body: None,
            request_id: None,
        }
    }

    /// Create a new update operation request.
    pub fn update(order_id: impl Into<String>, body: Value) -> Self {
        Self {
            operation: OrderOperationType::Update,
            order_id: Some(order_id.into()),
            body: Some(body),
            request_id: None,
        }
    }

    /// Create a new delete operation request.
    pub fn delete(order_id: impl Into<String>) -> Self {
        Self {
            operation: OrderOperationType::Delete,
            order_id: Some(order_id.into()),
            body: None,
            request_id: None,
        }
    }

    /// Create a new list operation request.
    pub fn list() -> Self {
        Self {
            operation: OrderOperationType::List,
            order_id: None,
            body: None,
            request_id: None,
        }
    }

    /// Set the request ID for tracing.
    pub fn with_request_id(mut self, request_id: impl Into<String>) -> Self {
        self.request_id = Some(request_id.into());
        self
    }
}
