//! Individual request checks.
//!
//! Each check inspects the [`PipelineContext`] and either passes or returns
//! the [`OrderError`] that should end the request. Only the existence check
//! touches storage.

use crate::error::{OrderError, OrderResult};
use crate::order::{OrderStatus, is_positive_integer};
use crate::storage::OrderStorage;
use crate::validation::PipelineContext;
use log::debug;
use serde_json::Value;

/// JSON truthiness: `null`, `false`, `0` and `""` are falsy.
///
/// Arrays and objects are always truthy, even when empty.
pub fn is_truthy(value: &Value) -> bool {
    match value {
        Value::Null => false,
        Value::Bool(b) => *b,
        Value::Number(n) => n.as_f64().is_some_and(|f| f != 0.0),
        Value::String(s) => !s.is_empty(),
        Value::Array(_) | Value::Object(_) => true,
    }
}

/// Render a client-supplied id for an error message.
///
/// Strings render without quotes and whole-valued floats render as integers
/// (`1.0` as `1`). A missing or null id renders as `unknown`.
pub fn describe_value(value: Option<&Value>) -> String {
    match value {
        None | Some(Value::Null) => "unknown".to_string(),
        Some(Value::String(s)) => s.clone(),
        Some(Value::Number(n)) => match n.as_f64() {
            Some(f) if !n.is_u64() && !n.is_i64() && f.fract() == 0.0 && f.abs() < 1e21 => {
                format!("{:.0}", f + 0.0)
            }
            _ => n.to_string(),
        },
        Some(other) => other.to_string(),
    }
}

/// A single step of a validation pipeline.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Check {
    /// `data.{field}` must be present and truthy
    RequireField(&'static str),
    /// `data.dishes` must be a non-empty array of dishes with positive integer quantities
    DishQuantities,
    /// The route order id must exist; the order is attached to the context
    OrderExists,
    /// `data.status` must be a known status
    ValidStatus,
    /// The resolved order must not be delivered
    NotDelivered,
    /// The resolved order must be pending
    PendingOnly,
}

impl Check {
    /// Run this check against the context.
    pub async fn apply<S: OrderStorage>(
        &self,
        ctx: &mut PipelineContext,
        storage: &S,
    ) -> OrderResult<()> {
        match self {
            Check::RequireField(field) => require_field(ctx, field),
            Check::DishQuantities => validate_dish_quantities(ctx),
            Check::OrderExists => resolve_order(ctx, storage).await,
            Check::ValidStatus => validate_status(ctx),
            Check::NotDelivered => reject_delivered(ctx),
            Check::PendingOnly => require_pending(ctx),
        }
    }
}

pub fn require_field(ctx: &PipelineContext, field: &str) -> OrderResult<()> {
    match ctx.field(field) {
        Some(value) if is_truthy(value) => Ok(()),
        _ => Err(OrderError::missing_field(field)),
    }
}

/// Validate `data.dishes`, stopping at the first bad dish.
pub fn validate_dish_quantities(ctx: &PipelineContext) -> OrderResult<()> {
    let dishes = match ctx.field("dishes").and_then(Value::as_array) {
        Some(dishes) if !dishes.is_empty() => dishes,
        _ => return Err(OrderError::MissingDishes),
    };

    let invalid = dishes.iter().find(|dish| {
        !dish
            .get("quantity")
            .is_some_and(is_positive_integer)
    });

    match invalid {
        Some(dish) => Err(OrderError::invalid_dish_quantity(describe_value(
            dish.get("id"),
        ))),
        None => Ok(()),
    }
}

pub async fn resolve_order<S: OrderStorage>(
    ctx: &mut PipelineContext,
    storage: &S,
) -> OrderResult<()> {
    let order_id = ctx
        .route_id
        .clone()
        .ok_or_else(|| OrderError::invalid_request("Missing orderId route parameter"))?;

    match storage.find_by_id(&order_id).await? {
        Some(order) => {
            debug!("Resolved order '{}'", order_id);
            ctx.order = Some(order);
            Ok(())
        }
        None => Err(OrderError::order_not_found(order_id)),
    }
}

pub fn validate_status(ctx: &PipelineContext) -> OrderResult<()> {
    let valid = ctx
        .field("status")
        .and_then(Value::as_str)
        .is_some_and(|status| status.parse::<OrderStatus>().is_ok());

    if valid {
        Ok(())
    } else {
        Err(OrderError::InvalidStatus)
    }
}

pub fn reject_delivered(ctx: &PipelineContext) -> OrderResult<()> {
    if ctx.resolved_order()?.is_delivered() {
        return Err(OrderError::OrderLocked);
    }
    Ok(())
}

pub fn require_pending(ctx: &PipelineContext) -> OrderResult<()> {
    if !ctx.resolved_order()?.is_pending() {
        return Err(OrderError::DeleteNotAllowed);
    }
    Ok(())
}
