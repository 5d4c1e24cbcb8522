//! Mapping of HTTP method and path onto order operations.
//!
//! | Method | Path                 | Operation |
//! |--------|----------------------|-----------|
//! | POST   | `{base}`             | Create    |
//! | GET    | `{base}`             | List      |
//! | GET    | `{base}/:orderId`    | Get       |
//! | PUT    | `{base}/:orderId`    | Update    |
//! | DELETE | `{base}/:orderId`    | Delete    |

use crate::{
    error::{OrderError, OrderResult},
    operation_handler::core::{OrderOperationRequest, OrderOperationType},
};
use serde_json::Value;

enum Route<'a> {
    Collection,
    Order(&'a str),
}

fn match_route<'a>(path: &'a str, base_path: &str) -> Option<Route<'a>> {
    let path = path.split(['?', '#']).next().unwrap_or_default();
    let path = path.strip_suffix('/').filter(|p| !p.is_empty()).unwrap_or(path);
    let rest = path.strip_prefix(base_path)?;

    if rest.is_empty() {
        return Some(Route::Collection);
    }

    let order_id = rest.strip_prefix('/')?;
    if order_id.is_empty() || order_id.contains('/') {
        return None;
    }
    Some(Route::Order(order_id))
}

impl OrderOperationRequest {
    /// Build a request from an HTTP method, path and optional JSON body.
    ///
    /// Query strings and a single trailing slash are ignored. Methods are
    /// matched case-insensitively.
    pub fn from_route(
        method: &str,
        path: &str,
        body: Option<Value>,
        base_path: &str,
    ) -> OrderResult<Self> {
        let route = match_route(path, base_path).ok_or_else(|| OrderError::RouteNotFound {
            method: method.to_string(),
            path: path.to_string(),
        })?;

        let operation = match (method.to_ascii_uppercase().as_str(), &route) {
            ("POST", Route::Collection) => OrderOperationType::Create,
            ("GET", Route::Collection) => OrderOperationType::List,
            ("GET", Route::Order(_)) => OrderOperationType::Get,
            ("PUT", Route::Order(_)) => OrderOperationType::Update,
            ("DELETE", Route::Order(_)) => OrderOperationType::Delete,
            _ => {
                return Err(OrderError::MethodNotAllowed {
                    method: method.to_string(),
                    path: path.to_string(),
                });
            }
        };

        let order_id = match route {
            Route::Order(id) => Some(id.to_string()),
            Route::Collection => None,
        };

        Ok(Self {
            operation,
            order_id,
            body,
            request_id: None,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_collection_routes() {
        let request =
            OrderOperationRequest::from_route("POST", "/orders", Some(json!({})), "/orders")
                .unwrap();
        assert_eq!(request.operation, OrderOperationType::Create);
        assert!(request.order_id.is_none());
        assert!(request.body.is_some());

        let request = OrderOperationRequest::from_route("get", "/orders/", None, "/orders").unwrap();
        assert_eq!(request.operation, OrderOperationType::List);
    }

    #[test]
    fn test_order_routes() {
        for (method, operation) in [
            ("GET", OrderOperationType::Get),
            ("PUT", OrderOperationType::Update),
            ("DELETE", OrderOperationType::Delete),
        ] {
            let request =
                OrderOperationRequest::from_route(method, "/orders/5?verbose=1", None, "/orders")
                    .unwrap();
            assert_eq!(request.operation, operation);
            assert_eq!(request.order_id.as_deref(), Some("5"));
        }
    }

    #[test]
    fn test_custom_base_path() {
        let request =
            OrderOperationRequest::from_route("GET", "/api/v1/orders/abc", None, "/api/v1/orders")
                .unwrap();
        assert_eq!(request.order_id.as_deref(), Some("abc"));

        assert!(OrderOperationRequest::from_route("GET", "/orders/abc", None, "/api/v1/orders")
            .is_err());
    }

    #[test]
    fn test_unknown_routes() {
        for path in ["/dishes", "/orders/1/dishes", "/ordersX", "/"] {
            let err = OrderOperationRequest::from_route("GET", path, None, "/orders").unwrap_err();
            assert!(
                matches!(err, OrderError::RouteNotFound { .. }),
                "{} should not route",
                path
            );
            assert_eq!(err.status_code(), 404);
        }
    }

    #[test]
    fn test_method_not_allowed() {
        let err = OrderOperationRequest::from_route("DELETE", "/orders", None, "/orders").unwrap_err();
        assert!(matches!(err, OrderError::MethodNotAllowed { .. }));
        assert_eq!(err.status_code(), 405);

        let err =
            OrderOperationRequest::from_route("POST", "/orders/3", None, "/orders").unwrap_err();
        assert!(matches!(err, OrderError::MethodNotAllowed { .. }));
    }
}
