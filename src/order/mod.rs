//! Order domain types and id generation.
//!
//! # Key Types
//!
//! - [`Order`] - A stored order with its dishes and lifecycle status
//! - [`Dish`] - A dish line; extra client attributes are preserved
//! - [`OrderStatus`] - `pending`, `preparing`, `out-for-delivery`, `delivered`
//! - [`IdGenerator`] - Source of unique order ids

pub mod id;
pub mod types;

pub use id::{IdGenerator, IdStrategy, SequentialIdGenerator, UuidIdGenerator};
pub use types::{
    Dish, NewOrder, Order, OrderStatus, OrderUpdate, is_positive_integer,
};
