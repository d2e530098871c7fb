use chrono::Utc;
use lambda_runtime::{service_fn, Error, LambdaEvent};
use orders_lambda::adapters::dynamo_store::DynamoOrderStore;
use orders_lambda::config::OrdersLambdaConfig;
use orders_lambda::handlers::orders::handle_order_event;
use orders_lambda::telemetry::init_tracing;
use serde_json::Value;

#[tokio::main]
async fn main() -> Result<(), Error> {
    let config = OrdersLambdaConfig::from_env()?;
    init_tracing(&config)?;

    let aws_config = aws_config::load_defaults(aws_config::BehaviorVersion::latest()).await;
    let store = DynamoOrderStore::new(
        aws_sdk_dynamodb::Client::new(&aws_config),
        config.table_name.clone(),
    );
    tracing::info!(
        component = "orders_handler",
        event = "cold_start",
        table_name = store.table_name(),
    );

    let store_ref = &store;
    lambda_runtime::run(service_fn(move |event: LambdaEvent<Value>| async move {
        Ok::<_, Error>(handle_order_event(event.payload, store_ref, Utc::now()))
    }))
    .await
}
