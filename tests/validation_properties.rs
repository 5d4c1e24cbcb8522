//! Property tests for the request validation rules.

mod common;

use common::{handler, handler_with, order_with_status, update_body};
use orders_server::storage::OrderStorage;
use orders_server::{OrderOperationRequest, OrderStatus};
use proptest::prelude::*;
use serde_json::{Value, json};

fn required_field() -> impl Strategy<Value = &'static str> {
    prop_oneof![Just("deliverTo"), Just("mobileNumber"), Just("dishes")]
}

fn falsy_value() -> impl Strategy<Value = Option<Value>> {
    prop_oneof![
        Just(None),
        Just(Some(Value::Null)),
        Just(Some(json!(""))),
        Just(Some(json!(0))),
        Just(Some(json!(false))),
    ]
}

/// Quantities that must be rejected: non-positive, fractional, or not a number.
fn bad_quantity() -> impl Strategy<Value = Option<Value>> {
    prop_oneof![
        (i64::MIN..=0).prop_map(|q| Some(json!(q))),
        (1u32..1000).prop_map(|q| Some(json!(f64::from(q) + 0.5))),
        "[0-9]{1,3}".prop_map(|s| Some(json!(s))),
        Just(Some(Value::Null)),
        Just(None),
    ]
}

fn dish(id: u32, quantity: Option<Value>) -> Value {
    let mut dish = json!({ "id": id });
    if let Some(quantity) = quantity {
        dish["quantity"] = quantity;
    }
    dish
}

fn status() -> impl Strategy<Value = OrderStatus> {
    prop_oneof![
        Just(OrderStatus::Pending),
        Just(OrderStatus::Preparing),
        Just(OrderStatus::OutForDelivery),
        Just(OrderStatus::Delivered),
    ]
}

proptest! {
    #[test]
    fn create_without_required_field_names_it(
        field in required_field(),
        replacement in falsy_value(),
    ) {
        let handler = handler();
        let mut body = json!({
            "data": {
                "deliverTo": "123 Main",
                "mobileNumber": "555-0100",
                "dishes": [{"id": 1, "quantity": 2}]
            }
        });
        match replacement {
            Some(value) => body["data"][field] = value,
            None => {
                body["data"].as_object_mut().unwrap().remove(field);
            }
        }

        let response = tokio_test::block_on(
            handler.handle_operation(OrderOperationRequest::create(body)),
        );

        prop_assert_eq!(response.status, 400);
        prop_assert_eq!(response.error, Some(format!("Must include a {}", field)));
        prop_assert_eq!(
            tokio_test::block_on(handler.server().storage().count()).unwrap(),
            0
        );
    }

    #[test]
    fn invalid_dish_is_named_on_create_and_update(
        valid_before in 0usize..4,
        bad in bad_quantity(),
    ) {
        let mut dishes: Vec<Value> = (0..valid_before)
            .map(|i| dish(i as u32 + 1, Some(json!(i + 1))))
            .collect();
        let bad_id = valid_before as u32 + 100;
        dishes.push(dish(bad_id, bad));
        dishes.push(dish(bad_id + 1, Some(json!(-1))));
        let expected = format!(
            "Dish {} must have a quantity that is an integer greater than 0",
            bad_id
        );

        let handler = handler_with(vec![order_with_status("1", Some(OrderStatus::Pending))]);

        let create_body = json!({
            "data": {"deliverTo": "a", "mobileNumber": "b", "dishes": dishes.clone()}
        });
        let response = tokio_test::block_on(
            handler.handle_operation(OrderOperationRequest::create(create_body)),
        );
        prop_assert_eq!(response.status, 400);
        prop_assert_eq!(response.error.as_deref(), Some(expected.as_str()));

        let mut body = update_body("preparing");
        body["data"]["dishes"] = Value::Array(dishes);
        let response = tokio_test::block_on(
            handler.handle_operation(OrderOperationRequest::update("1", body)),
        );
        prop_assert_eq!(response.status, 400);
        prop_assert_eq!(response.error.as_deref(), Some(expected.as_str()));
    }

    #[test]
    fn unknown_order_ids_are_not_found(id in "[a-z0-9-]{1,16}") {
        prop_assume!(id != "known");
        let handler = handler_with(vec![order_with_status("known", Some(OrderStatus::Pending))]);

        for request in [
            OrderOperationRequest::get(id.clone()),
            OrderOperationRequest::update(id.clone(), update_body("pending")),
            OrderOperationRequest::delete(id.clone()),
        ] {
            let response = tokio_test::block_on(handler.handle_operation(request));
            prop_assert_eq!(response.status, 404);
            prop_assert_eq!(response.error, Some(format!("Order id not found: {}", id)));
        }
    }

    #[test]
    fn delivered_orders_never_change(new_status in status(), delivered_first in any::<bool>()) {
        let mut orders = vec![
            order_with_status("other", Some(OrderStatus::Pending)),
            order_with_status("done", Some(OrderStatus::Delivered)),
        ];
        if delivered_first {
            orders.reverse();
        }
        let handler = handler_with(orders);

        let response = tokio_test::block_on(handler.handle_operation(
            OrderOperationRequest::update("done", update_body(new_status.as_str())),
        ));

        prop_assert_eq!(response.status, 400);
        prop_assert_eq!(response.error_code.as_deref(), Some("ORDER_LOCKED"));
        let stored = tokio_test::block_on(handler.server().storage().find_by_id("done"))
            .unwrap()
            .unwrap();
        prop_assert_eq!(stored, order_with_status("done", Some(OrderStatus::Delivered)));
    }

    #[test]
    fn only_pending_orders_can_be_deleted(current in proptest::option::of(status())) {
        let handler = handler_with(vec![order_with_status("7", current)]);

        let response = tokio_test::block_on(
            handler.handle_operation(OrderOperationRequest::delete("7")),
        );

        if current == Some(OrderStatus::Pending) {
            prop_assert_eq!(response.status, 204);
        } else {
            prop_assert_eq!(response.status, 400);
            prop_assert_eq!(
                response.error.as_deref(),
                Some("An order cannot be deleted unless it is pending.")
            );
        }
    }
}
