//! Storage-specific error types.
//!
//! These errors describe failures of the storage layer itself, separate from
//! request validation.

use std::fmt;

/// Errors that can occur during storage operations.
#[derive(Debug)]
pub enum StorageError {
    /// An order with the same id is already stored.
    OrderAlreadyExists { id: String },

    /// The storage layer could not complete the operation.
    Internal { message: String },
}

impl fmt::Display for StorageError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            StorageError::OrderAlreadyExists { id } => {
                write!(f, "Order already exists: {}", id)
            }
            StorageError::Internal { message } => {
                write!(f, "Internal storage error: {}", message)
            }
        }
    }
}

impl std::error::Error for StorageError {}

impl StorageError {
    /// Create an order already exists error.
    pub fn order_already_exists(id: impl Into<String>) -> Self {
        Self::OrderAlreadyExists { id: id.into() }
    }

    pub fn internal(message: impl Into<String>) -> Self {
        Self::Internal {
            message: message.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_storage_error_display() {
        let error = StorageError::order_already_exists("12");
        assert_eq!(error.to_string(), "Order already exists: 12");

        let error = StorageError::internal("no free order id after 64 attempts");
        assert_eq!(
            error.to_string(),
            "Internal storage error: no free order id after 64 attempts"
        );
    }
}
