pub mod attributes;
pub mod dynamo_store;
pub mod order_store;
