//! Order Lifecycle Example
//!
//! Walks one order through create, update, a rejected delete, the final
//! delivery and the delivered lock, the way a host HTTP framework would drive
//! the handler with raw methods and paths.

use orders_server::{OrderOperationHandler, OrderServer, storage::InMemoryOrderStorage};
use serde_json::json;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info"))
        .format_timestamp_secs()
        .init();

    let server = OrderServer::builder(InMemoryOrderStorage::new())
        .with_base_path("/orders")
        .build()?;
    let handler = OrderOperationHandler::new(server);

    let created = handler
        .handle_route(
            "POST",
            "/orders",
            Some(json!({
                "data": {
                    "deliverTo": "123 Main",
                    "mobileNumber": "555-0100",
                    "dishes": [{"id": 1, "name": "Dolcelatte and chickpea spaghetti", "quantity": 2}]
                }
            })),
        )
        .await;
    println!("POST /orders -> {} {:?}", created.status, created.to_http_body());

    let id = created
        .metadata
        .order_id
        .clone()
        .ok_or("create did not return an order id")?;
    let path = format!("/orders/{}", id);

    for status in ["preparing", "delivered"] {
        let updated = handler
            .handle_route(
                "PUT",
                &path,
                Some(json!({
                    "data": {
                        "id": id,
                        "deliverTo": "123 Main",
                        "mobileNumber": "555-0100",
                        "dishes": [{"id": 1, "quantity": 2}],
                        "status": status
                    }
                })),
            )
            .await;
        println!("PUT {} ({}) -> {} {:?}", path, status, updated.status, updated.to_http_body());

        let deleted = handler.handle_route("DELETE", &path, None).await;
        println!("DELETE {} -> {} {:?}", path, deleted.status, deleted.to_http_body());
    }

    let locked = handler
        .handle_route(
            "PUT",
            &path,
            Some(json!({
                "data": {
                    "deliverTo": "456 Elm",
                    "mobileNumber": "555-0199",
                    "dishes": [{"id": 1, "quantity": 1}],
                    "status": "pending"
                }
            })),
        )
        .await;
    println!("PUT {} (after delivery) -> {} {:?}", path, locked.status, locked.to_http_body());

    let listed = handler.handle_route("GET", "/orders", None).await;
    println!("GET /orders -> {} {:?}", listed.status, listed.to_http_body());

    Ok(())
}
