//! The order server: composition root owning storage, configuration and id
//! generation.
//!
//! Handlers never reach for global state; everything they touch is borrowed
//! from an [`OrderServer`].

mod builder;

pub use builder::{OrderServerBuilder, OrderServerConfig};

use crate::error::{OrderError, OrderResult};
use crate::order::IdGenerator;
use crate::storage::{OrderStorage, StorageError};
use log::warn;

/// Attempts made to find an id not already present in storage.
const MAX_ID_ATTEMPTS: usize = 64;

/// Owns the order store and the id generator.
pub struct OrderServer<S> {
    storage: S,
    config: OrderServerConfig,
    id_generator: Box<dyn IdGenerator>,
}

impl<S: OrderStorage> OrderServer<S> {
    /// Create a server with the default configuration.
    pub fn new(storage: S) -> Self {
        let config = OrderServerConfig::default();
        let id_generator = config.id_generator();
        Self::from_parts(storage, config, id_generator)
    }

    pub fn builder(storage: S) -> OrderServerBuilder<S> {
        OrderServerBuilder::new(storage)
    }

    pub(crate) fn from_parts(
        storage: S,
        config: OrderServerConfig,
        id_generator: Box<dyn IdGenerator>,
    ) -> Self {
        Self {
            storage,
            config,
            id_generator,
        }
    }

    pub fn storage(&self) -> &S {
        &self.storage
    }

    pub fn config(&self) -> &OrderServerConfig {
        &self.config
    }

    pub fn id_generator(&self) -> &dyn IdGenerator {
        self.id_generator.as_ref()
    }

    /// Generate an id that is not already in use.
    ///
    /// Seeded stores may already hold ids the generator would produce. On the
    /// first collision every stored id is passed to
    /// [`IdGenerator::skip_past`], so built-in generators find a free id on
    /// the next attempt. The attempt limit only stops a custom generator that
    /// keeps returning taken ids.
    pub async fn next_order_id(&self) -> OrderResult<String> {
        let mut resynced = false;
        for _ in 0..MAX_ID_ATTEMPTS {
            let id = self.id_generator.next_id();
            if !self.storage.exists(&id).await? {
                return Ok(id);
            }
            warn!("Generated order id '{}' is already taken, retrying", id);

            if !resynced {
                for order in self.storage.list_all().await? {
                    self.id_generator.skip_past(&order.id);
                }
                resynced = true;
            }
        }

        Err(OrderError::Storage(StorageError::internal(format!(
            "no free order id after {} attempts",
            MAX_ID_ATTEMPTS
        ))))
    }
}
