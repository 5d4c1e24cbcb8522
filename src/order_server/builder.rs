//! Builder pattern for configuring order server instances.
//!
//! The configuration covers where the orders collection is mounted and how
//! new order ids are generated.

use crate::error::{BuildError, BuildResult};
use crate::order::{IdGenerator, IdStrategy, SequentialIdGenerator, UuidIdGenerator};
use crate::order_server::OrderServer;
use crate::storage::OrderStorage;

/// Configuration for an order server.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OrderServerConfig {
    /// Path the orders collection is mounted at. Defaults to "/orders".
    pub base_path: String,

    /// Which built-in id generator to use.
    pub id_strategy: IdStrategy,

    /// First id handed out by the sequential generator.
    pub sequence_start: u64,
}

impl Default for OrderServerConfig {
    fn default() -> Self {
        Self {
            base_path: "/orders".to_string(),
            id_strategy: IdStrategy::Sequential,
            sequence_start: 1,
        }
    }
}

impl OrderServerConfig {
    /// Path of a single order, e.g. `/orders/42`.
    pub fn order_location(&self, order_id: &str) -> String {
        format!("{}/{}", self.base_path, order_id)
    }

    /// Instantiate the generator selected by `id_strategy`.
    pub fn id_generator(&self) -> Box<dyn IdGenerator> {
        match self.id_strategy {
            IdStrategy::Sequential => {
                Box::new(SequentialIdGenerator::starting_at(self.sequence_start))
            }
            IdStrategy::Uuid => Box::new(UuidIdGenerator),
        }
    }

    pub fn validate(&self) -> BuildResult<()> {
        if self.base_path.is_empty() {
            return Err(BuildError::InvalidConfiguration {
                message: "Base path cannot be empty".to_string(),
            });
        }

        if !self.base_path.starts_with('/') {
            return Err(BuildError::InvalidConfiguration {
                message: format!("Base path must start with '/': {}", self.base_path),
            });
        }

        if self.base_path.len() > 1 && self.base_path.ends_with('/') {
            return Err(BuildError::InvalidConfiguration {
                message: format!("Base path must not end with '/': {}", self.base_path),
            });
        }

        Ok(())
    }
}

/// Builder for [`OrderServer`].
///
/// ```rust
/// use orders_server::{OrderServerBuilder, order::IdStrategy, storage::InMemoryOrderStorage};
///
/// let server = OrderServerBuilder::new(InMemoryOrderStorage::new())
///     .with_base_path("/api/orders")
///     .with_id_strategy(IdStrategy::Uuid)
///     .build()
///     .unwrap();
/// assert_eq!(server.config().base_path, "/api/orders");
/// ```
pub struct OrderServerBuilder<S> {
    storage: S,
    config: OrderServerConfig,
    id_generator: Option<Box<dyn IdGenerator>>,
}

impl<S: OrderStorage> OrderServerBuilder<S> {
    pub fn new(storage: S) -> Self {
        Self {
            storage,
            config: OrderServerConfig::default(),
            id_generator: None,
        }
    }

    pub fn with_base_path(mut self, base_path: impl Into<String>) -> Self {
        self.config.base_path = base_path.into();
        self
    }

    pub fn with_id_strategy(mut self, strategy: IdStrategy) -> Self {
        self.config.id_strategy = strategy;
        self
    }

    pub fn with_sequence_start(mut self, start: u64) -> Self {
        self.config.sequence_start = start;
        self
    }

    /// Use a custom generator instead of the one selected by the id strategy.
    pub fn with_id_generator(mut self, generator: impl IdGenerator + 'static) -> Self {
        self.id_generator = Some(Box::new(generator));
        self
    }

    pub fn build(self) -> BuildResult<OrderServer<S>> {
        self.config.validate()?;
        let id_generator = self
            .id_generator
            .unwrap_or_else(|| self.config.id_generator());
        Ok(OrderServer::from_parts(self.storage, self.config, id_generator))
    }
}
