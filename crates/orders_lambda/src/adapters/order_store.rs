use orders_core::contract::Order;
use thiserror::Error;

#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum StoreError {
    #[error("failed to put order item: {0}")]
    Put(String),
    #[error("failed to query orders: {0}")]
    Query(String),
    #[error("failed to scan orders: {0}")]
    Scan(String),
}

/// Persistence port for orders. Each call is a single logical round trip;
/// implementations never retry.
pub trait OrderStore {
    /// Unconditional upsert keyed by `order_id`. Replaces any existing record.
    fn put_order(&self, order: &Order) -> Result<(), StoreError>;

    /// Every record whose partition key equals `order_id`.
    fn query_orders(&self, order_id: &str) -> Result<Vec<Order>, StoreError>;

    fn scan_orders(&self) -> Result<Vec<Order>, StoreError>;
}
