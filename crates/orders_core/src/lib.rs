//! Order domain primitives shared by the Lambda handler and tooling.
//!
//! This crate owns the order record, the API Gateway request/response
//! contract, and route resolution. It intentionally excludes AWS SDK and
//! Lambda runtime concerns.

pub mod contract;
pub mod order;
pub mod routing;
