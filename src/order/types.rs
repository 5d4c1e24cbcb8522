//! Order and dish types.
//!
//! These are the typed forms of the JSON payloads exchanged with clients. The
//! JSON field names are camelCase (`deliverTo`, `mobileNumber`), and optional
//! fields are omitted when absent.

use serde::{Deserialize, Deserializer, Serialize};
use serde_json::{Map, Number, Value};
use std::fmt;
use std::str::FromStr;

/// Lifecycle status of an order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum OrderStatus {
    Pending,
    Preparing,
    OutForDelivery,
    Delivered,
}

impl OrderStatus {
    /// Every status, in lifecycle order.
    pub const ALL: [OrderStatus; 4] = [
        OrderStatus::Pending,
        OrderStatus::Preparing,
        OrderStatus::OutForDelivery,
        OrderStatus::Delivered,
    ];

    /// Wire representation of the status.
    pub fn as_str(&self) -> &'static str {
        match self {
            OrderStatus::Pending => "pending",
            OrderStatus::Preparing => "preparing",
            OrderStatus::OutForDelivery => "out-for-delivery",
            OrderStatus::Delivered => "delivered",
        }
    }
}

impl fmt::Display for OrderStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for OrderStatus {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        OrderStatus::ALL
            .into_iter()
            .find(|status| status.as_str() == s)
            .ok_or_else(|| format!("unknown order status '{}'", s))
    }
}

/// A dish line within an order.
///
/// `id` is an opaque client reference and is stored as sent. Attributes other
/// than `id` and `quantity` (name, price, image url, ...) are kept verbatim in
/// `attributes`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Dish {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<Value>,
    #[serde(deserialize_with = "deserialize_quantity")]
    pub quantity: Number,
    #[serde(flatten)]
    pub attributes: Map<String, Value>,
}

impl Dish {
    pub fn new(id: impl Into<Value>, quantity: u64) -> Self {
        Self {
            id: Some(id.into()),
            quantity: Number::from(quantity),
            attributes: Map::new(),
        }
    }
}

/// Whether a JSON value is a usable dish quantity: a number with no
/// fractional part that is greater than 0.
///
/// `2` and `2.0` both qualify. Strings, booleans and everything else do not.
pub fn is_positive_integer(value: &Value) -> bool {
    let Value::Number(n) = value else {
        return false;
    };
    if let Some(q) = n.as_u64() {
        return q > 0;
    }
    if n.is_i64() {
        return false;
    }
    n.as_f64()
        .is_some_and(|q| q.is_finite() && q.fract() == 0.0 && q > 0.0)
}

fn deserialize_quantity<'de, D>(deserializer: D) -> Result<Number, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Value::deserialize(deserializer)?;
    match value {
        Value::Number(ref n) if is_positive_integer(&value) => Ok(n.clone()),
        other => Err(serde::de::Error::custom(format!(
            "quantity must be an integer greater than 0, got {}",
            other
        ))),
    }
}

/// A stored order.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Order {
    pub id: String,
    pub deliver_to: String,
    pub mobile_number: String,
    pub dishes: Vec<Dish>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub status: Option<OrderStatus>,
    /// Order-level quantity, carried as sent by the client
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub quantity: Option<Value>,
}

impl Order {
    /// Build a freshly created order. New orders carry no status.
    pub fn from_new(id: impl Into<String>, new_order: NewOrder) -> Self {
        Self {
            id: id.into(),
            deliver_to: new_order.deliver_to,
            mobile_number: new_order.mobile_number,
            dishes: new_order.dishes,
            status: None,
            quantity: new_order.quantity,
        }
    }

    /// Overwrite the mutable fields. `id` and `quantity` are left alone.
    pub fn apply_update(&mut self, update: OrderUpdate) {
        self.deliver_to = update.deliver_to;
        self.mobile_number = update.mobile_number;
        self.dishes = update.dishes;
        self.status = Some(update.status);
    }

    pub fn is_delivered(&self) -> bool {
        self.status == Some(OrderStatus::Delivered)
    }

    pub fn is_pending(&self) -> bool {
        self.status == Some(OrderStatus::Pending)
    }
}

/// Body of a create request, parsed after validation.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewOrder {
    pub deliver_to: String,
    pub mobile_number: String,
    pub dishes: Vec<Dish>,
    #[serde(default)]
    pub quantity: Option<Value>,
}

/// Body of an update request, parsed after validation.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OrderUpdate {
    pub deliver_to: String,
    pub mobile_number: String,
    pub dishes: Vec<Dish>,
    pub status: OrderStatus,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_status_wire_format() {
        assert_eq!(
            serde_json::to_value(OrderStatus::OutForDelivery).unwrap(),
            json!("out-for-delivery")
        );
        assert_eq!(
            "delivered".parse::<OrderStatus>().unwrap(),
            OrderStatus::Delivered
        );
        assert!("shipped".parse::<OrderStatus>().is_err());
        assert!("Pending".parse::<OrderStatus>().is_err());
    }

    #[test]
    fn test_positive_integer_quantities() {
        for valid in [json!(2), json!(2.0), json!(5_000_000_000u64), json!(u64::MAX), json!(1e20)] {
            assert!(is_positive_integer(&valid), "{} should be accepted", valid);
        }
        for invalid in [json!(0), json!(-1), json!(i64::MIN), json!(1.5), json!(-2.0), json!("2"), json!(true), json!(null)] {
            assert!(!is_positive_integer(&invalid), "{} should be rejected", invalid);
        }
    }

    #[test]
    fn test_large_dish_quantity_is_kept() {
        let dish: Dish = serde_json::from_value(json!({"id": 7, "quantity": 5_000_000_000u64})).unwrap();
        assert_eq!(dish.quantity.as_u64(), Some(5_000_000_000));
    }

    #[test]
    fn test_dish_id_is_stored_as_sent() {
        for id in [json!(true), json!({"sku": "A-1"}), json!([1, 2]), json!(1.5)] {
            let dish: Dish = serde_json::from_value(json!({"id": id.clone(), "quantity": 1})).unwrap();
            assert_eq!(dish.id.as_ref(), Some(&id));
            assert_eq!(serde_json::to_value(&dish).unwrap()["id"], id);
        }
    }

    #[test]
    fn test_dish_keeps_extra_attributes() {
        let dish: Dish = serde_json::from_value(json!({
            "id": "d1",
            "name": "Dolcelatte and chickpea spaghetti",
            "price": 19,
            "quantity": 2
        }))
        .unwrap();

        assert_eq!(dish.id, Some(json!("d1")));
        assert_eq!(dish.quantity.as_u64(), Some(2));
        assert_eq!(dish.attributes["price"], json!(19));

        let round = serde_json::to_value(&dish).unwrap();
        assert_eq!(round["name"], "Dolcelatte and chickpea spaghetti");
        assert_eq!(round["quantity"], 2);
    }

    #[test]
    fn test_order_serializes_camel_case_without_status() {
        let order = Order::from_new(
            "1",
            NewOrder {
                deliver_to: "123 Main".to_string(),
                mobile_number: "555-0100".to_string(),
                dishes: vec![Dish::new(1, 2)],
                quantity: None,
            },
        );

        let value = serde_json::to_value(&order).unwrap();
        assert_eq!(value["deliverTo"], "123 Main");
        assert_eq!(value["mobileNumber"], "555-0100");
        assert_eq!(value["dishes"][0]["id"], 1);
        assert!(value.get("status").is_none());
        assert!(value.get("quantity").is_none());
    }

    #[test]
    fn test_apply_update_keeps_id_and_quantity() {
        let mut order = Order::from_new(
            "7",
            NewOrder {
                deliver_to: "Old Rd".to_string(),
                mobile_number: "555-0000".to_string(),
                dishes: vec![Dish::new(1, 1)],
                quantity: Some(json!("3")),
            },
        );

        order.apply_update(OrderUpdate {
            deliver_to: "New Rd".to_string(),
            mobile_number: "555-1111".to_string(),
            dishes: vec![Dish::new(2, 4)],
            status: OrderStatus::Preparing,
        });

        assert_eq!(order.id, "7");
        assert_eq!(order.quantity, Some(json!("3")));
        assert_eq!(order.deliver_to, "New Rd");
        assert_eq!(order.status, Some(OrderStatus::Preparing));
        assert!(!order.is_pending());
    }
}
