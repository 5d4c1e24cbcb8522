//! CRUD operation handlers
//!
//! Each handler runs its operation's validation pipeline, then performs the
//! terminal action exactly once.

use crate::{
    error::{OrderError, OrderResult},
    operation_handler::core::{
        OperationMetadata, OrderOperationHandler, OrderOperationRequest, OrderOperationResponse,
    },
    order::{NewOrder, Order, OrderUpdate},
    storage::OrderStorage,
    validation::{Pipeline, PipelineContext, describe_value, is_truthy},
};
use log::{debug, info};
use serde_json::Value;

fn order_response(
    status: u16,
    order: &Order,
    request_id: &str,
) -> OrderResult<OrderOperationResponse> {
    let mut metadata = OperationMetadata::for_request(request_id);
    metadata.order_id = Some(order.id.clone());
    metadata.order_count = Some(1);

    Ok(OrderOperationResponse {
        success: true,
        status,
        data: Some(serde_json::to_value(order)?),
        error: None,
        error_code: None,
        metadata,
    })
}

/// Handle create operations.
pub async fn handle_create<S: OrderStorage>(
    handler: &OrderOperationHandler<S>,
    request: OrderOperationRequest,
    request_id: &str,
) -> OrderResult<OrderOperationResponse> {
    let server = handler.server();
    let mut ctx = PipelineContext::new(None, request.body);
    Pipeline::create().run(&mut ctx, server.storage()).await?;

    let new_order: NewOrder = ctx.parse_data()?;
    let id = server.next_order_id().await?;
    let order = server
        .storage()
        .insert(Order::from_new(id, new_order))
        .await?;

    info!("Created order '{}' (request: '{}')", order.id, request_id);

    let mut response = order_response(201, &order, request_id)?;
    response.metadata.additional.insert(
        "location".to_string(),
        Value::String(server.config().order_location(&order.id)),
    );
    Ok(response)
}

/// Handle get operations.
pub async fn handle_get<S: OrderStorage>(
    handler: &OrderOperationHandler<S>,
    request: OrderOperationRequest,
    request_id: &str,
) -> OrderResult<OrderOperationResponse> {
    let mut ctx = PipelineContext::new(request.order_id, request.body);
    Pipeline::read()
        .run(&mut ctx, handler.server().storage())
        .await?;

    let order = ctx.take_order()?;
    order_response(200, &order, request_id)
}

/// Handle update operations.
///
/// A truthy body `id` must equal the route id. Values of different JSON
/// types never match, so a numeric `5` does not match route `"5"`.
pub async fn handle_update<S: OrderStorage>(
    handler: &OrderOperationHandler<S>,
    request: OrderOperationRequest,
    request_id: &str,
) -> OrderResult<OrderOperationResponse> {
    let storage = handler.server().storage();
    let mut ctx = PipelineContext::new(request.order_id, request.body);
    Pipeline::update().run(&mut ctx, storage).await?;

    let mut order = ctx.take_order()?;

    if let Some(body_id) = ctx.field("id").filter(|id| is_truthy(id)) {
        if body_id.as_str() != Some(order.id.as_str()) {
            return Err(OrderError::id_mismatch(
                describe_value(Some(body_id)),
                order.id,
            ));
        }
    }

    let update: OrderUpdate = ctx.parse_data()?;
    order.apply_update(update);

    let order_id = order.id.clone();
    let order = storage
        .replace(order)
        .await?
        .ok_or_else(|| OrderError::order_not_found(order_id))?;

    info!(
        "Updated order '{}' to status {:?} (request: '{}')",
        order.id, order.status, request_id
    );
    order_response(200, &order, request_id)
}

/// Handle delete operations.
pub async fn handle_delete<S: OrderStorage>(
    handler: &OrderOperationHandler<S>,
    request: OrderOperationRequest,
    request_id: &str,
) -> OrderResult<OrderOperationResponse> {
    let storage = handler.server().storage();
    let mut ctx = PipelineContext::new(request.order_id, request.body);
    Pipeline::delete().run(&mut ctx, storage).await?;

    let order = ctx.take_order()?;
    destroy(storage, &order.id, request_id).await
}

/// Remove an order and answer 204.
///
/// Removing an id that is no longer stored is a no-op and still answers 204.
pub(crate) async fn destroy<S: OrderStorage>(
    storage: &S,
    order_id: &str,
    request_id: &str,
) -> OrderResult<OrderOperationResponse> {
    if storage.remove_by_id(order_id).await? {
        info!("Deleted order '{}' (request: '{}')", order_id, request_id);
    } else {
        debug!(
            "Order '{}' was already gone, nothing to delete (request: '{}')",
            order_id, request_id
        );
    }

    let mut metadata = OperationMetadata::for_request(request_id);
    metadata.order_id = Some(order_id.to_string());

    Ok(OrderOperationResponse {
        success: true,
        status: 204,
        data: None,
        error: None,
        error_code: None,
        metadata,
    })
}
