use tracing_subscriber::EnvFilter;

use crate::config::{LogFormat, OrdersLambdaConfig};

pub type InitError = Box<dyn std::error::Error + Send + Sync + 'static>;

/// Installs the global subscriber. JSON lines on stdout are picked up by
/// CloudWatch as-is; `RUST_LOG` wins over the configured level.
pub fn init_tracing(config: &OrdersLambdaConfig) -> Result<(), InitError> {
    let filter = build_env_filter(&config.log_level);

    match config.log_format {
        LogFormat::Json => tracing_subscriber::fmt()
            .json()
            .with_env_filter(filter)
            .with_target(true)
            .with_current_span(false)
            .with_ansi(false)
            .try_init(),
        LogFormat::Text => tracing_subscriber::fmt()
            .with_env_filter(filter)
            .with_target(false)
            .with_ansi(false)
            .try_init(),
    }
}

pub fn build_env_filter(default_level: &str) -> EnvFilter {
    EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level))
}
