//! AWS-oriented adapters and handlers for the orders API.
//!
//! This crate owns runtime integration details (the Lambda handler, the
//! DynamoDB store adapter, configuration, and log setup). Request contracts
//! and routing live in `orders_core`.

pub mod adapters;
pub mod config;
pub mod handlers;
pub mod telemetry;
