use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};
use serde_json::{json, Value};

pub const DEFAULT_ORDERS_TABLE: &str = "Orders";
pub const ORDER_ID_PATH_PARAMETER: &str = "orderId";

pub const ORDER_CREATED_MESSAGE: &str = "Order created successfully";
pub const INVALID_REQUEST_BODY_MESSAGE: &str = "Invalid request body";
pub const INVALID_REQUEST_MESSAGE: &str = "Invalid request";
pub const CREATE_FAILED_MESSAGE: &str = "Failed to create order";
pub const ORDER_NOT_FOUND_MESSAGE: &str = "Order not found";
pub const FETCH_ONE_FAILED_MESSAGE: &str = "Failed to fetch order";
pub const FETCH_ALL_FAILED_MESSAGE: &str = "Failed to fetch orders";
pub const METHOD_NOT_ALLOWED_MESSAGE: &str = "Method not allowed";

/// A single order record. Every field is optional on input; absent fields
/// take their zero value.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase", default)]
pub struct Order {
    pub order_id: String,
    pub customer_name: String,
    pub product: String,
    pub quantity: i64,
    pub status: String,
    pub created_at: String,
}

/// The subset of an API Gateway proxy event the handler routes on.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct ApiGatewayRequest {
    pub http_method: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub path_parameters: Option<BTreeMap<String, String>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub body: Option<Value>,
}

impl ApiGatewayRequest {
    pub fn path_parameter(&self, name: &str) -> Option<&str> {
        self.path_parameters
            .as_ref()
            .and_then(|parameters| parameters.get(name))
            .map(String::as_str)
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ApiGatewayResponse {
    #[serde(rename = "statusCode")]
    pub status_code: u16,
    pub headers: Value,
    pub body: String,
}

impl ApiGatewayResponse {
    pub fn json(status_code: u16, body: String) -> Self {
        Self {
            status_code,
            headers: json!({"Content-Type": "application/json"}),
            body,
        }
    }

    /// `{"message": ...}` envelope used by every non-listing response.
    pub fn message(status_code: u16, message: &str) -> Self {
        Self::json(status_code, json!({ "message": message }).to_string())
    }

    pub fn method_not_allowed() -> Self {
        Self {
            status_code: 405,
            headers: json!({
                "Content-Type": "text/plain",
                "Allow": "GET, POST",
            }),
            body: METHOD_NOT_ALLOWED_MESSAGE.to_string(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidationError {
    message: String,
}

impl ValidationError {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }

    pub fn message(&self) -> &str {
        &self.message
    }
}

impl std::fmt::Display for ValidationError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.message)
    }
}

impl std::error::Error for ValidationError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn order_uses_camel_case_field_names() {
        let order = Order {
            order_id: "20221".to_string(),
            customer_name: "Siri".to_string(),
            product: "Lunch Box".to_string(),
            quantity: 1,
            status: "CREATED".to_string(),
            created_at: "2026-02-14T00:00:00Z".to_string(),
        };

        let value = serde_json::to_value(&order).expect("order should serialize");
        assert_eq!(
            value,
            json!({
                "orderId": "20221",
                "customerName": "Siri",
                "product": "Lunch Box",
                "quantity": 1,
                "status": "CREATED",
                "createdAt": "2026-02-14T00:00:00Z"
            })
        );
    }

    #[test]
    fn missing_order_fields_take_zero_values() {
        let order: Order =
            serde_json::from_str(r#"{"orderId":"a-1","extra":true}"#).expect("order should parse");

        assert_eq!(order.order_id, "a-1");
        assert_eq!(order.quantity, 0);
        assert!(order.created_at.is_empty());
    }

    #[test]
    fn message_response_wraps_message_in_json_envelope() {
        let response = ApiGatewayResponse::message(404, ORDER_NOT_FOUND_MESSAGE);

        assert_eq!(response.status_code, 404);
        assert_eq!(response.body, r#"{"message":"Order not found"}"#);
        assert_eq!(response.headers["Content-Type"], "application/json");
    }

    #[test]
    fn method_not_allowed_is_plain_text() {
        let response = ApiGatewayResponse::method_not_allowed();

        assert_eq!(response.status_code, 405);
        assert_eq!(response.body, "Method not allowed");
        assert_eq!(response.headers["Content-Type"], "text/plain");
        assert_eq!(response.headers["Allow"], "GET, POST");
    }

    #[test]
    fn response_serializes_status_code_in_gateway_shape() {
        let value = serde_json::to_value(ApiGatewayResponse::message(201, ORDER_CREATED_MESSAGE))
            .expect("response should serialize");

        assert_eq!(value["statusCode"], 201);
        assert_eq!(value["body"], r#"{"message":"Order created successfully"}"#);
    }
}
