//! In-memory storage implementation for orders.
//!
//! Orders are kept in a `Vec` behind a tokio `RwLock`, so insertion order is
//! the list order. Lookups are linear scans, which is fine for the fixture-sized
//! collections this backend is meant for.
//!
//! # Example Usage
//!
//! ```rust
//! use orders_server::order::{Dish, NewOrder, Order, OrderStatus};
//! use orders_server::storage::{InMemoryOrderStorage, OrderStorage};
//!
//! # async fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let mut seeded = Order::from_new("f6069a542257054114138301947672ba", NewOrder {
//!     deliver_to: "1600 Pennsylvania Avenue NW, Washington, DC 20500".to_string(),
//!     mobile_number: "(202) 456-1111".to_string(),
//!     dishes: vec![Dish::new(1, 2)],
//!     quantity: None,
//! });
//! seeded.status = Some(OrderStatus::OutForDelivery);
//!
//! let storage = InMemoryOrderStorage::with_orders(vec![seeded])?;
//! assert_eq!(storage.count().await?, 1);
//! assert_eq!(storage.stats().await.out_for_delivery, 1);
//! # Ok(())
//! # }
//! ```

use crate::order::{Order, OrderStatus};
use crate::storage::{OrderStorage, StorageError};
use log::debug;
use std::sync::Arc;
use tokio::sync::RwLock;

/// Thread-safe in-memory order collection.
///
/// Clones share the same underlying collection.
#[derive(Clone, Default)]
pub struct InMemoryOrderStorage {
    orders: Arc<RwLock<Vec<Order>>>,
}

impl InMemoryOrderStorage {
    /// Create a new empty store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a store pre-populated with `orders`, kept in the given order.
    ///
    /// Fails with [`StorageError::OrderAlreadyExists`] if two orders share an id.
    pub fn with_orders(orders: Vec<Order>) -> Result<Self, StorageError> {
        let mut seeded: Vec<Order> = Vec::with_capacity(orders.len());
        for order in orders {
            if seeded.iter().any(|existing| existing.id == order.id) {
                return Err(StorageError::order_already_exists(order.id));
            }
            seeded.push(order);
        }

        debug!("Seeded in-memory storage with {} orders", seeded.len());
        Ok(Self {
            orders: Arc::new(RwLock::new(seeded)),
        })
    }

    /// Get storage statistics for debugging and monitoring.
    pub async fn stats(&self) -> InMemoryStorageStats {
        let orders = self.orders.read().await;
        let mut stats = InMemoryStorageStats {
            total_orders: orders.len(),
            ..InMemoryStorageStats::default()
        };

        for order in orders.iter() {
            match order.status {
                Some(OrderStatus::Pending) => stats.pending += 1,
                Some(OrderStatus::Preparing) => stats.preparing += 1,
                Some(OrderStatus::OutForDelivery) => stats.out_for_delivery += 1,
                Some(OrderStatus::Delivered) => stats.delivered += 1,
                None => stats.without_status += 1,
            }
        }

        stats
    }
}

impl OrderStorage for InMemoryOrderStorage {
    async fn insert(&self, order: Order) -> Result<Order, StorageError> {
        let mut orders = self.orders.write().await;

        if orders.iter().any(|existing| existing.id == order.id) {
            return Err(StorageError::order_already_exists(order.id));
        }

        debug!("Storing order '{}' ({} orders before insert)", order.id, orders.len());
        orders.push(order.clone());
        Ok(order)
    }

    async fn find_by_id(&self, id: &str) -> Result<Option<Order>, StorageError> {
        let orders = self.orders.read().await;
        Ok(orders.iter().find(|order| order.id == id).cloned())
    }

    async fn replace(&self, order: Order) -> Result<Option<Order>, StorageError> {
        let mut orders = self.orders.write().await;

        match orders.iter_mut().find(|existing| existing.id == order.id) {
            Some(slot) => {
                debug!("Replacing order '{}'", order.id);
                *slot = order.clone();
                Ok(Some(order))
            }
            None => Ok(None),
        }
    }

    async fn remove_by_id(&self, id: &str) -> Result<bool, StorageError> {
        let mut orders = self.orders.write().await;

        match orders.iter().position(|order| order.id == id) {
            Some(index) => {
                orders.remove(index);
                debug!("Removed order '{}'", id);
                Ok(true)
            }
            None => Ok(false),
        }
    }

    async fn list_all(&self) -> Result<Vec<Order>, StorageError> {
        let orders = self.orders.read().await;
        Ok(orders.clone())
    }

    async fn exists(&self, id: &str) -> Result<bool, StorageError> {
        let orders = self.orders.read().await;
        Ok(orders.iter().any(|order| order.id == id))
    }

    async fn count(&self) -> Result<usize, StorageError> {
        let orders = self.orders.read().await;
        Ok(orders.len())
    }

    async fn clear(&self) -> Result<(), StorageError> {
        let mut orders = self.orders.write().await;
        orders.clear();
        Ok(())
    }
}

/// Statistics about the current state of in-memory storage.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct InMemoryStorageStats {
    /// Total number of stored orders
    pub total_orders: usize,
    pub pending: usize,
    pub preparing: usize,
    pub out_for_delivery: usize,
    pub delivered: usize,
    /// Orders created but never updated, which carry no status
    pub without_status: usize,
}
