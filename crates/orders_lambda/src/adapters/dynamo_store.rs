use std::future::Future;

use aws_sdk_dynamodb::error::DisplayErrorContext;
use aws_sdk_dynamodb::types::AttributeValue;
use orders_core::contract::Order;

use crate::adapters::attributes::{order_from_item, order_to_item, Item, ORDER_ID};
use crate::adapters::order_store::{OrderStore, StoreError};

/// DynamoDB-backed [`OrderStore`]. The client is built once per process and
/// shared by every invocation.
#[derive(Debug, Clone)]
pub struct DynamoOrderStore {
    client: aws_sdk_dynamodb::Client,
    table_name: String,
}

impl DynamoOrderStore {
    pub fn new(client: aws_sdk_dynamodb::Client, table_name: impl Into<String>) -> Self {
        Self {
            client,
            table_name: table_name.into(),
        }
    }

    pub fn table_name(&self) -> &str {
        &self.table_name
    }
}

impl OrderStore for DynamoOrderStore {
    fn put_order(&self, order: &Order) -> Result<(), StoreError> {
        let request = self
            .client
            .put_item()
            .table_name(self.table_name.clone())
            .set_item(Some(order_to_item(order)));

        block_on_runtime(async move { request.send().await })
            .map(|_| ())
            .map_err(|error| StoreError::Put(DisplayErrorContext(error).to_string()))
    }

    fn query_orders(&self, order_id: &str) -> Result<Vec<Order>, StoreError> {
        let paginator = self
            .client
            .query()
            .table_name(self.table_name.clone())
            .key_condition_expression("#order_id = :order_id")
            .expression_attribute_names("#order_id", ORDER_ID)
            .expression_attribute_values(":order_id", AttributeValue::S(order_id.to_string()))
            .into_paginator()
            .items();

        let items = block_on_runtime(async move { paginator.send().try_collect().await })
            .map_err(|error| StoreError::Query(DisplayErrorContext(error).to_string()))?;

        Ok(map_items(&items))
    }

    fn scan_orders(&self) -> Result<Vec<Order>, StoreError> {
        let paginator = self
            .client
            .scan()
            .table_name(self.table_name.clone())
            .into_paginator()
            .items();

        let items = block_on_runtime(async move { paginator.send().try_collect().await })
            .map_err(|error| StoreError::Scan(DisplayErrorContext(error).to_string()))?;

        Ok(map_items(&items))
    }
}

fn block_on_runtime<F: Future>(future: F) -> F::Output {
    tokio::task::block_in_place(|| tokio::runtime::Handle::current().block_on(future))
}

fn map_items(items: &[Item]) -> Vec<Order> {
    items
        .iter()
        .map(|item| {
            let mapped = order_from_item(item);
            for issue in &mapped.issues {
                tracing::warn!(
                    component = "order_store",
                    event = "order_attribute_defaulted",
                    order_id = %mapped.order.order_id,
                    field = issue.field(),
                    issue = %issue,
                );
            }
            mapped.order
        })
        .collect()
}
