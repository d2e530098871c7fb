use chrono::{DateTime, Utc};
use orders_core::contract::{
    ApiGatewayResponse, Order, CREATE_FAILED_MESSAGE, FETCH_ALL_FAILED_MESSAGE,
    FETCH_ONE_FAILED_MESSAGE, INVALID_REQUEST_BODY_MESSAGE, INVALID_REQUEST_MESSAGE,
    ORDER_CREATED_MESSAGE, ORDER_NOT_FOUND_MESSAGE,
};
use orders_core::order::parse_order_body;
use orders_core::routing::{resolve_route, OrderRoute};
use serde_json::Value;

use crate::adapters::order_store::OrderStore;

/// Routes one API Gateway event to create, fetch-one, or fetch-all. Never
/// fails: every outcome, including store errors, becomes a response.
pub fn handle_order_event(
    event: Value,
    store: &dyn OrderStore,
    now: DateTime<Utc>,
) -> ApiGatewayResponse {
    let route = match resolve_route(event) {
        Ok(value) => value,
        Err(error) => {
            tracing::warn!(
                component = "order_handler",
                event = "request_rejected",
                error = %error,
            );
            return ApiGatewayResponse::message(400, INVALID_REQUEST_MESSAGE);
        }
    };

    match route {
        OrderRoute::Create { body } => create_order(body, store, now),
        OrderRoute::FetchOne { order_id } => fetch_order(&order_id, store),
        OrderRoute::FetchAll => fetch_all_orders(store),
        OrderRoute::MethodNotAllowed { method } => {
            tracing::info!(
                component = "order_handler",
                event = "method_not_allowed",
                method = %method,
            );
            ApiGatewayResponse::method_not_allowed()
        }
    }
}

fn create_order(
    body: Option<Value>,
    store: &dyn OrderStore,
    now: DateTime<Utc>,
) -> ApiGatewayResponse {
    let mut order = match parse_order_body(body) {
        Ok(value) => value,
        Err(error) => {
            tracing::warn!(
                component = "order_handler",
                event = "invalid_order_body",
                error = %error,
            );
            return ApiGatewayResponse::message(400, INVALID_REQUEST_BODY_MESSAGE);
        }
    };
    order.assign_created_at_if_empty(now);

    if let Err(error) = store.put_order(&order) {
        tracing::error!(
            component = "order_handler",
            event = "order_create_failed",
            order_id = %order.order_id,
            error = %error,
        );
        return ApiGatewayResponse::message(500, CREATE_FAILED_MESSAGE);
    }

    tracing::info!(
        component = "order_handler",
        event = "order_created",
        order_id = %order.order_id,
        created_at = %order.created_at,
    );
    ApiGatewayResponse::message(201, ORDER_CREATED_MESSAGE)
}

fn fetch_order(order_id: &str, store: &dyn OrderStore) -> ApiGatewayResponse {
    let orders = match store.query_orders(order_id) {
        Ok(value) => value,
        Err(error) => {
            tracing::error!(
                component = "order_handler",
                event = "order_fetch_failed",
                order_id = %order_id,
                error = %error,
            );
            return ApiGatewayResponse::message(500, FETCH_ONE_FAILED_MESSAGE);
        }
    };

    if orders.is_empty() {
        tracing::info!(
            component = "order_handler",
            event = "order_not_found",
            order_id = %order_id,
        );
        return ApiGatewayResponse::message(404, ORDER_NOT_FOUND_MESSAGE);
    }

    orders_response(&orders, FETCH_ONE_FAILED_MESSAGE)
}

fn fetch_all_orders(store: &dyn OrderStore) -> ApiGatewayResponse {
    match store.scan_orders() {
        Ok(orders) => {
            tracing::info!(
                component = "order_handler",
                event = "orders_listed",
                item_count = orders.len(),
            );
            orders_response(&orders, FETCH_ALL_FAILED_MESSAGE)
        }
        Err(error) => {
            tracing::error!(
                component = "order_handler",
                event = "orders_fetch_failed",
                error = %error,
            );
            ApiGatewayResponse::message(500, FETCH_ALL_FAILED_MESSAGE)
        }
    }
}

fn orders_response(orders: &[Order], failure_message: &str) -> ApiGatewayResponse {
    match serde_json::to_string(orders) {
        Ok(body) => ApiGatewayResponse::json(200, body),
        Err(error) => {
            tracing::error!(
                component = "order_handler",
                event = "serialization_error",
                error = %error,
            );
            ApiGatewayResponse::message(500, failure_message)
        }
    }
}
