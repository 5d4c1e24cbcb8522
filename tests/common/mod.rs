//! Shared fixtures for order integration tests.

#![allow(dead_code)]

use orders_server::order::{Dish, NewOrder};
use orders_server::{
    InMemoryOrderStorage, Order, OrderOperationHandler, OrderServer, OrderStatus,
};
use serde_json::{Value, json};

/// Body for a valid create request.
pub fn create_body() -> Value {
    json!({
        "data": {
            "deliverTo": "123 Main",
            "mobileNumber": "555-0100",
            "dishes": [{"id": 1, "quantity": 2}]
        }
    })
}

/// Body for a valid update request with the given status.
pub fn update_body(status: &str) -> Value {
    json!({
        "data": {
            "deliverTo": "456 Elm",
            "mobileNumber": "555-0199",
            "dishes": [
                {"id": 1, "name": "Falafel and tahini bagel", "price": 6, "quantity": 1},
                {"id": 3, "quantity": 4}
            ],
            "status": status
        }
    })
}

/// A stored order fixture with the given status.
pub fn order_with_status(id: &str, status: Option<OrderStatus>) -> Order {
    let mut order = Order::from_new(
        id,
        NewOrder {
            deliver_to: "1600 Pennsylvania Avenue NW, Washington, DC 20500".to_string(),
            mobile_number: "(202) 456-1111".to_string(),
            dishes: vec![Dish::new(1, 2)],
            quantity: None,
        },
    );
    order.status = status;
    order
}

/// Orders in every status, keyed by the status name.
pub fn seeded_orders() -> Vec<Order> {
    vec![
        order_with_status("pending-order", Some(OrderStatus::Pending)),
        order_with_status("preparing-order", Some(OrderStatus::Preparing)),
        order_with_status("out-order", Some(OrderStatus::OutForDelivery)),
        order_with_status("delivered-order", Some(OrderStatus::Delivered)),
    ]
}

pub fn handler() -> OrderOperationHandler<InMemoryOrderStorage> {
    handler_with(Vec::new())
}

pub fn handler_with(orders: Vec<Order>) -> OrderOperationHandler<InMemoryOrderStorage> {
    let _ = env_logger::builder().is_test(true).try_init();
    let storage = InMemoryOrderStorage::with_orders(orders).expect("fixture order ids are unique");
    OrderOperationHandler::new(OrderServer::new(storage))
}
