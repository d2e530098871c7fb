//! Conversion between [`Order`] and DynamoDB attribute maps.
//!
//! Reads are lenient: a missing or mistyped attribute falls back to the
//! field's zero value and is reported as an [`AttributeIssue`] so the caller
//! can log it instead of failing the whole response.

use std::collections::HashMap;
use std::fmt;

use aws_sdk_dynamodb::types::AttributeValue;
use orders_core::contract::Order;

pub type Item = HashMap<String, AttributeValue>;

pub const ORDER_ID: &str = "orderId";
pub const CUSTOMER_NAME: &str = "customerName";
pub const PRODUCT: &str = "product";
pub const QUANTITY: &str = "quantity";
pub const STATUS: &str = "status";
pub const CREATED_AT: &str = "createdAt";

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AttributeIssue {
    Missing {
        field: &'static str,
    },
    WrongType {
        field: &'static str,
        expected: &'static str,
    },
    InvalidNumber {
        field: &'static str,
        value: String,
    },
}

impl AttributeIssue {
    pub fn field(&self) -> &'static str {
        match self {
            Self::Missing { field }
            | Self::WrongType { field, .. }
            | Self::InvalidNumber { field, .. } => field,
        }
    }
}

impl fmt::Display for AttributeIssue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Missing { field } => write!(f, "attribute `{field}` is missing"),
            Self::WrongType { field, expected } => {
                write!(f, "attribute `{field}` is not of type {expected}")
            }
            Self::InvalidNumber { field, value } => {
                write!(f, "attribute `{field}` holds non-integer number `{value}`")
            }
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MappedOrder {
    pub order: Order,
    pub issues: Vec<AttributeIssue>,
}

pub fn order_to_item(order: &Order) -> Item {
    HashMap::from([
        (ORDER_ID.to_string(), AttributeValue::S(order.order_id.clone())),
        (
            CUSTOMER_NAME.to_string(),
            AttributeValue::S(order.customer_name.clone()),
        ),
        (PRODUCT.to_string(), AttributeValue::S(order.product.clone())),
        (
            QUANTITY.to_string(),
            AttributeValue::N(order.quantity.to_string()),
        ),
        (STATUS.to_string(), AttributeValue::S(order.status.clone())),
        (
            CREATED_AT.to_string(),
            AttributeValue::S(order.created_at.clone()),
        ),
    ])
}

pub fn order_from_item(item: &Item) -> MappedOrder {
    let mut issues = Vec::new();

    let order = Order {
        order_id: read_string(item, ORDER_ID, &mut issues),
        customer_name: read_string(item, CUSTOMER_NAME, &mut issues),
        product: read_string(item, PRODUCT, &mut issues),
        quantity: read_integer(item, QUANTITY, &mut issues),
        status: read_string(item, STATUS, &mut issues),
        created_at: read_string(item, CREATED_AT, &mut issues),
    };

    MappedOrder { order, issues }
}

fn read_string(item: &Item, field: &'static str, issues: &mut Vec<AttributeIssue>) -> String {
    match item.get(field) {
        None => {
            issues.push(AttributeIssue::Missing { field });
            String::new()
        }
        Some(value) => match value.as_s() {
            Ok(text) => text.clone(),
            Err(_) => {
                issues.push(AttributeIssue::WrongType {
                    field,
                    expected: "S",
                });
                String::new()
            }
        },
    }
}

fn read_integer(item: &Item, field: &'static str, issues: &mut Vec<AttributeIssue>) -> i64 {
    let raw = match item.get(field) {
        None => {
            issues.push(AttributeIssue::Missing { field });
            return 0;
        }
        Some(value) => match value.as_n() {
            Ok(number) => number,
            Err(_) => {
                issues.push(AttributeIssue::WrongType {
                    field,
                    expected: "N",
                });
                return 0;
            }
        },
    };

    raw.trim().parse::<i64>().unwrap_or_else(|_| {
        issues.push(AttributeIssue::InvalidNumber {
            field,
            value: raw.clone(),
        });
        0
    })
}
