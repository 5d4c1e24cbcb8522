//! Storage abstraction for orders.
//!
//! The `OrderStorage` trait defines plain data operations on orders. It knows
//! nothing about request validation or status rules; those live in the
//! validation pipeline and the operation handlers.
//!
//! # Example Usage
//!
//! ```rust
//! use orders_server::order::{Dish, NewOrder, Order};
//! use orders_server::storage::{InMemoryOrderStorage, OrderStorage};
//!
//! # async fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let storage = InMemoryOrderStorage::new();
//!
//! let order = Order::from_new("1", NewOrder {
//!     deliver_to: "123 Main".to_string(),
//!     mobile_number: "555-0100".to_string(),
//!     dishes: vec![Dish::new(1, 2)],
//!     quantity: None,
//! });
//! storage.insert(order).await?;
//!
//! assert!(storage.find_by_id("1").await?.is_some());
//! assert!(storage.remove_by_id("1").await?);
//! assert!(!storage.remove_by_id("1").await?);
//! # Ok(())
//! # }
//! ```

pub mod errors;
pub mod in_memory;


pub use errors::StorageError;
pub use in_memory::{InMemoryOrderStorage, InMemoryStorageStats};

use crate::order::Order;
use std::future::Future;

/// Core trait for order storage backends.
///
/// # Behavior
///
/// - `insert` appends; `list_all` returns orders in insertion order
/// - `replace` overwrites the order with the same id in place, keeping its position
/// - `remove_by_id` returns whether an order was removed, so callers can treat
///   removal of an absent id as a no-op
pub trait OrderStorage: Send + Sync {
    /// Append a new order and return the stored copy.
    ///
    /// Fails with [`StorageError::OrderAlreadyExists`] if the id is taken.
    fn insert(&self, order: Order) -> impl Future<Output = Result<Order, StorageError>> + Send;

    /// Look up an order by id.
    fn find_by_id(
        &self,
        id: &str,
    ) -> impl Future<Output = Result<Option<Order>, StorageError>> + Send;

    /// Replace the stored order that has `order.id`.
    ///
    /// Returns `None` without storing anything if no such order exists.
    fn replace(
        &self,
        order: Order,
    ) -> impl Future<Output = Result<Option<Order>, StorageError>> + Send;

    /// Remove an order by id. Returns `true` if it existed.
    fn remove_by_id(&self, id: &str) -> impl Future<Output = Result<bool, StorageError>> + Send;

    /// All orders in insertion order.
    fn list_all(&self) -> impl Future<Output = Result<Vec<Order>, StorageError>> + Send;

    /// Check whether an order with the given id exists.
    fn exists(&self, id: &str) -> impl Future<Output = Result<bool, StorageError>> + Send;

    /// Number of stored orders.
    fn count(&self) -> impl Future<Output = Result<usize, StorageError>> + Send;

    /// Remove every order.
    fn clear(&self) -> impl Future<Output = Result<(), StorageError>> + Send;
}
