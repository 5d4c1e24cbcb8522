//! Ordered validation pipelines.
//!
//! A [`Pipeline`] is an explicit list of [`Check`]s. [`Pipeline::run`] applies
//! them in order and returns the first failure, so a terminal handler invoked
//! after a successful run is reached at most once per request.

use crate::error::{OrderError, OrderResult};
use crate::order::Order;
use crate::storage::OrderStorage;
use crate::validation::Check;
use log::debug;
use serde::de::DeserializeOwned;
use serde_json::{Map, Value};

/// Per-request state shared by the checks of a pipeline.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct PipelineContext {
    /// The `:orderId` route parameter, if the route has one
    pub route_id: Option<String>,
    /// The full request body, `{"data": {...}}`
    pub body: Option<Value>,
    /// Order attached by the existence check
    pub order: Option<Order>,
}

impl PipelineContext {
    pub fn new(route_id: Option<String>, body: Option<Value>) -> Self {
        Self {
            route_id,
            body,
            order: None,
        }
    }

    /// The `data` object of the body. Missing or non-object `data` reads as absent.
    pub fn data(&self) -> Option<&Map<String, Value>> {
        self.body.as_ref()?.get("data")?.as_object()
    }

    /// A single field of `data`.
    pub fn field(&self, name: &str) -> Option<&Value> {
        self.data()?.get(name)
    }

    /// The order attached by [`Check::OrderExists`].
    pub fn resolved_order(&self) -> OrderResult<&Order> {
        self.order.as_ref().ok_or_else(|| {
            OrderError::invalid_request("Order must be resolved before checking its status")
        })
    }

    /// Take ownership of the resolved order.
    pub fn take_order(&mut self) -> OrderResult<Order> {
        self.order.take().ok_or_else(|| {
            OrderError::invalid_request("Order must be resolved before it can be used")
        })
    }

    /// Deserialize `data` into a typed request body.
    pub fn parse_data<T: DeserializeOwned>(&self) -> OrderResult<T> {
        let data = self
            .data()
            .cloned()
            .ok_or_else(|| OrderError::invalid_request("Request body must contain a data object"))?;
        Ok(serde_json::from_value(Value::Object(data))?)
    }
}

/// An ordered list of checks.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Pipeline {
    steps: Vec<Check>,
}

impl Pipeline {
    pub fn new(steps: Vec<Check>) -> Self {
        Self { steps }
    }

    /// deliverTo, mobileNumber, dishes presence, then dish quantities.
    pub fn create() -> Self {
        Self::new(vec![
            Check::RequireField("deliverTo"),
            Check::RequireField("mobileNumber"),
            Check::RequireField("dishes"),
            Check::DishQuantities,
        ])
    }

    pub fn read() -> Self {
        Self::new(vec![Check::OrderExists])
    }

    /// Existence, field presence, dish quantities, status, then the delivered lock.
    pub fn update() -> Self {
        Self::new(vec![
            Check::OrderExists,
            Check::RequireField("deliverTo"),
            Check::RequireField("mobileNumber"),
            Check::RequireField("dishes"),
            Check::RequireField("status"),
            Check::DishQuantities,
            Check::ValidStatus,
            Check::NotDelivered,
        ])
    }

    pub fn delete() -> Self {
        Self::new(vec![Check::OrderExists, Check::PendingOnly])
    }

    /// Listing has no preconditions.
    pub fn list() -> Self {
        Self::default()
    }

    pub fn steps(&self) -> &[Check] {
        &self.steps
    }

    /// Apply every check in order, halting on the first failure.
    pub async fn run<S: OrderStorage>(
        &self,
        ctx: &mut PipelineContext,
        storage: &S,
    ) -> OrderResult<()> {
        for (index, step) in self.steps.iter().enumerate() {
            if let Err(e) = step.apply(ctx, storage).await {
                debug!("Check {:?} (step {}) rejected request: {}", step, index + 1, e);
                return Err(e);
            }
        }
        Ok(())
    }
}
