//! Error types for order operations.
//!
//! Every failure a request can hit is a variant of [`OrderError`]. Each variant
//! maps to a fixed HTTP status code and a stable error code so that the host
//! framework can translate it into a response without inspecting messages.

use crate::storage::StorageError;

/// Main error type for order operations.
#[derive(Debug, thiserror::Error)]
pub enum OrderError {
    /// A required `data` field is absent or falsy
    #[error("Must include a {field}")]
    MissingField { field: String },

    /// `data.dishes` is absent, not an array, or empty
    #[error("Must include at least one dish")]
    MissingDishes,

    /// A dish has a missing, non-positive or non-integer quantity
    #[error("Dish {dish_id} must have a quantity that is an integer greater than 0")]
    InvalidDishQuantity { dish_id: String },

    /// No order with the route id exists
    #[error("Order id not found: {id}")]
    OrderNotFound { id: String },

    #[error("Order must have a status of pending, preparing, out-for-delivery, delivered")]
    InvalidStatus,

    /// The resolved order is already delivered
    #[error("A delivered order cannot be changed")]
    OrderLocked,

    #[error("An order cannot be deleted unless it is pending.")]
    DeleteNotAllowed,

    /// Body id disagrees with the route id
    #[error("Order id does not match route id. Order: {body_id}, Route: {route_id}")]
    IdMismatch { body_id: String, route_id: String },

    /// Malformed request (missing body, wrong field types)
    #[error("Invalid request: {message}")]
    InvalidRequest { message: String },

    /// No route matches the request path
    #[error("Route not found: {method} {path}")]
    RouteNotFound { method: String, path: String },

    /// The path exists but does not support the method
    #[error("Method {method} not allowed for {path}")]
    MethodNotAllowed { method: String, path: String },

    /// Failure in the storage backend
    #[error("Storage error: {0}")]
    Storage(#[from] StorageError),
}

/// Errors that can occur while building an order server.
///
/// These are configuration mistakes and should surface during startup.
#[derive(Debug, thiserror::Error)]
pub enum BuildError {
    /// Invalid configuration provided
    #[error("Invalid configuration: {message}")]
    InvalidConfiguration { message: String },
}

impl OrderError {
    /// Create a missing field error
    pub fn missing_field(field: impl Into<String>) -> Self {
        Self::MissingField {
            field: field.into(),
        }
    }

    /// Create an invalid dish quantity error
    pub fn invalid_dish_quantity(dish_id: impl Into<String>) -> Self {
        Self::InvalidDishQuantity {
            dish_id: dish_id.into(),
        }
    }

    /// Create an order not found error
    pub fn order_not_found(id: impl Into<String>) -> Self {
        Self::OrderNotFound { id: id.into() }
    }

    /// Create an id mismatch error
    pub fn id_mismatch(body_id: impl Into<String>, route_id: impl Into<String>) -> Self {
        Self::IdMismatch {
            body_id: body_id.into(),
            route_id: route_id.into(),
        }
    }

    /// Create an invalid request error
    pub fn invalid_request(message: impl Into<String>) -> Self {
        Self::InvalidRequest {
            message: message.into(),
        }
    }

    /// HTTP status code the host framework should emit for this error.
    pub fn status_code(&self) -> u16 {
        match self {
            OrderError::OrderNotFound { .. } | OrderError::RouteNotFound { .. } => 404,
            OrderError::MethodNotAllowed { .. } => 405,
            OrderError::Storage(_) => 500,
            _ => 400,
        }
    }

    /// Stable code for programmatic handling.
    pub fn error_code(&self) -> &'static str {
        match self {
            OrderError::MissingField { .. } => "MISSING_FIELD",
            OrderError::MissingDishes => "MISSING_DISHES",
            OrderError::InvalidDishQuantity { .. } => "INVALID_DISH_QUANTITY",
            OrderError::OrderNotFound { .. } => "ORDER_NOT_FOUND",
            OrderError::InvalidStatus => "INVALID_STATUS",
            OrderError::OrderLocked => "ORDER_LOCKED",
            OrderError::DeleteNotAllowed => "DELETE_NOT_ALLOWED",
            OrderError::IdMismatch { .. } => "ID_MISMATCH",
            OrderError::InvalidRequest { .. } => "INVALID_REQUEST",
            OrderError::RouteNotFound { .. } => "ROUTE_NOT_FOUND",
            OrderError::MethodNotAllowed { .. } => "METHOD_NOT_ALLOWED",
            OrderError::Storage(_) => "STORAGE_ERROR",
        }
    }
}

impl From<serde_json::Error> for OrderError {
    fn from(error: serde_json::Error) -> Self {
        Self::invalid_request(error.to_string())
    }
}

// Result type aliases for convenience
pub type OrderResult<T> = Result<T, OrderError>;
pub type BuildResult<T> = Result<T, BuildError>;
