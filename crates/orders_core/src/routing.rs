use serde_json::Value;

use crate::contract::{ApiGatewayRequest, ValidationError, ORDER_ID_PATH_PARAMETER};

#[derive(Debug, Clone, PartialEq)]
pub enum OrderRoute {
    Create { body: Option<Value> },
    FetchOne { order_id: String },
    FetchAll,
    MethodNotAllowed { method: String },
}

pub fn resolve_route(event: Value) -> Result<OrderRoute, ValidationError> {
    if !event.is_object() {
        return Err(ValidationError::new("Request payload must be a JSON object"));
    }

    let request = serde_json::from_value::<ApiGatewayRequest>(event)
        .map_err(|error| ValidationError::new(format!("Malformed request: {error}")))?;

    Ok(route_request(request))
}

/// Method names are case-sensitive and matched exactly.
pub fn route_request(request: ApiGatewayRequest) -> OrderRoute {
    if request.http_method == "POST" {
        return OrderRoute::Create { body: request.body };
    }

    if request.http_method == "GET" {
        return match request.path_parameter(ORDER_ID_PATH_PARAMETER) {
            Some(order_id) if !order_id.is_empty() => OrderRoute::FetchOne {
                order_id: order_id.to_string(),
            },
            _ => OrderRoute::FetchAll,
        };
    }

    OrderRoute::MethodNotAllowed {
        method: request.http_method,
    }
}
