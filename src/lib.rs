//! Order resource handlers for REST services.
//!
//! Provides validation pipelines and create/read/update/delete/list handlers
//! for an "orders" collection, independent of any HTTP framework, with
//! pluggable storage backends.
//!
//! # Core Components
//!
//! - [`OrderServer`] - Composition root owning storage and id generation
//! - [`OrderOperationHandler`] - Runs an operation's checks and handler
//! - [`Pipeline`] - Ordered request checks that stop at the first failure
//! - [`OrderStorage`] - Trait for implementing storage backends
//!
//! # Quick Start
//!
//! ```rust,no_run
//! use orders_server::{OrderOperationHandler, OrderServer};
//! use orders_server::storage::InMemoryOrderStorage;
//! use serde_json::json;
//!
//! # async fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let server = OrderServer::builder(InMemoryOrderStorage::new())
//!     .with_base_path("/orders")
//!     .build()?;
//! let handler = OrderOperationHandler::new(server);
//!
//! let response = handler.handle_route("GET", "/orders", None).await;
//! assert_eq!(response.status, 200);
//! assert_eq!(response.to_http_body(), Some(json!({"data": []})));
//! # Ok(())
//! # }
//! ```

pub mod error;
pub mod operation_handler;
pub mod order;
pub mod order_server;
pub mod storage;
pub mod validation;

// Re-export commonly used types for convenience
pub use error::{BuildError, OrderError, OrderResult};
pub use operation_handler::{
    OperationMetadata, OrderOperationHandler, OrderOperationRequest, OrderOperationResponse,
    OrderOperationType,
};
pub use order::{Dish, Order, OrderStatus};
pub use order_server::{OrderServer, OrderServerBuilder, OrderServerConfig};
pub use storage::{InMemoryOrderStorage, OrderStorage};
pub use validation::{Check, Pipeline, PipelineContext};
