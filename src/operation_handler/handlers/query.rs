//! Query operation handlers

use crate::{
    error::OrderResult,
    operation_handler::core::{
        OperationMetadata, OrderOperationHandler, OrderOperationRequest, OrderOperationResponse,
    },
    storage::OrderStorage,
    validation::{Pipeline, PipelineContext},
};

/// Handle list operations. Orders are returned in insertion order.
pub async fn handle_list<S: OrderStorage>(
    handler: &OrderOperationHandler<S>,
    request: OrderOperationRequest,
    request_id: &str,
) -> OrderResult<OrderOperationResponse> {
    let storage = handler.server().storage();
    let mut ctx = PipelineContext::new(request.order_id, request.body);
    Pipeline::list().run(&mut ctx, storage).await?;

    let orders = storage.list_all().await?;
    let order_count = orders.len();

    let mut metadata = OperationMetadata::for_request(request_id);
    metadata.order_count = Some(order_count);

    Ok(OrderOperationResponse {
        success: true,
        status: 200,
        data: Some(serde_json::to_value(orders)?),
        error: None,
        error_code: None,
        metadata,
    })
}
