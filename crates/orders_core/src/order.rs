use chrono::{DateTime, SecondsFormat, Utc};
use serde_json::Value;

use crate::contract::{Order, ValidationError};

impl Order {
    /// Stamps `created_at` with `now` when the caller left it empty.
    pub fn assign_created_at_if_empty(&mut self, now: DateTime<Utc>) {
        if self.created_at.is_empty() {
            self.created_at = format_created_at(now);
        }
    }
}

/// RFC3339 in UTC with second precision, e.g. `2026-02-14T08:30:00Z`.
pub fn format_created_at(now: DateTime<Utc>) -> String {
    now.to_rfc3339_opts(SecondsFormat::Secs, true)
}

/// Parses a create-order body. API Gateway delivers the body as a string;
/// direct invocations may pass the object inline.
pub fn parse_order_body(body: Option<Value>) -> Result<Order, ValidationError> {
    match body {
        None | Some(Value::Null) => Err(ValidationError::new("request body is required")),
        Some(Value::String(text)) => serde_json::from_str(&text)
            .map_err(|error| ValidationError::new(format!("malformed order body: {error}"))),
        Some(value @ Value::Object(_)) => serde_json::from_value(value)
            .map_err(|error| ValidationError::new(format!("malformed order body: {error}"))),
        Some(_) => Err(ValidationError::new("order body must be a JSON object")),
    }
}

#[cfg(test)]
mod tests {
    use chrono::TimeZone;
    use serde_json::json;

    use super::*;

    fn fixed_now() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2026, 2, 14, 8, 30, 0)
            .single()
            .expect("valid timestamp")
    }

    #[test]
    fn parses_string_body() {
        let order = parse_order_body(Some(Value::String(
            r#"{"orderId":"20221","customerName":"Siri","product":"Lunch Box","quantity":1,"status":"CREATED"}"#
                .to_string(),
        )))
        .expect("body should parse");

        assert_eq!(order.order_id, "20221");
        assert_eq!(order.customer_name, "Siri");
        assert_eq!(order.quantity, 1);
        assert!(order.created_at.is_empty());
    }

    #[test]
    fn parses_inline_object_body() {
        let order = parse_order_body(Some(json!({"orderId": "o-9", "quantity": 4})))
            .expect("object body should parse");

        assert_eq!(order.order_id, "o-9");
        assert_eq!(order.quantity, 4);
    }

    #[test]
    fn rejects_missing_and_malformed_bodies() {
        assert!(parse_order_body(None).is_err());
        assert!(parse_order_body(Some(Value::Null)).is_err());
        assert!(parse_order_body(Some(Value::String("{not json".to_string()))).is_err());
        assert!(parse_order_body(Some(Value::String(String::new()))).is_err());
        assert!(parse_order_body(Some(json!([1, 2]))).is_err());
    }

    #[test]
    fn rejects_wrongly_typed_quantity() {
        let error = parse_order_body(Some(Value::String(
            r#"{"orderId":"x","quantity":"three"}"#.to_string(),
        )))
        .expect_err("string quantity should fail");

        assert!(error.message().contains("malformed order body"));
    }

    #[test]
    fn duplicate_keys_are_rejected() {
        let error = parse_order_body(Some(Value::String(
            r#"{"orderId":"a","orderId":"b"}"#.to_string(),
        )))
        .expect_err("ambiguous body should fail");

        assert!(error.message().contains("duplicate field"));
    }

    #[test]
    fn field_names_are_case_sensitive() {
        let order = parse_order_body(Some(Value::String(
            r#"{"OrderId":"a","QUANTITY":3,"product":"Desk"}"#.to_string(),
        )))
        .expect("unknown keys are ignored");

        assert!(order.order_id.is_empty());
        assert_eq!(order.quantity, 0);
        assert_eq!(order.product, "Desk");
    }

    #[test]
    fn assigns_created_at_only_when_empty() {
        let mut fresh = Order::default();
        fresh.assign_created_at_if_empty(fixed_now());
        assert_eq!(fresh.created_at, "2026-02-14T08:30:00Z");

        let mut supplied = Order {
            created_at: "2025-01-01T00:00:00Z".to_string(),
            ..Order::default()
        };
        supplied.assign_created_at_if_empty(fixed_now());
        assert_eq!(supplied.created_at, "2025-01-01T00:00:00Z");
    }

    #[test]
    fn created_at_round_trips_through_rfc3339_parser() {
        let formatted = format_created_at(fixed_now());
        let parsed = DateTime::parse_from_rfc3339(&formatted).expect("should be RFC3339");
        assert_eq!(parsed.with_timezone(&Utc), fixed_now());
    }
}
