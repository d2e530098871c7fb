use orders_core::contract::DEFAULT_ORDERS_TABLE;
use thiserror::Error;

pub const TABLE_NAME_ENV: &str = "ORDERS_TABLE_NAME";
pub const LOG_LEVEL_ENV: &str = "ORDERS_LOG_LEVEL";
pub const LOG_FORMAT_ENV: &str = "ORDERS_LOG_FORMAT";

pub const DEFAULT_LOG_LEVEL: &str = "info";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LogFormat {
    Json,
    Text,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OrdersLambdaConfig {
    pub table_name: String,
    /// Default filter directive, used when `RUST_LOG` is not set.
    pub log_level: String,
    pub log_format: LogFormat,
}

#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("ORDERS_TABLE_NAME must not be blank")]
    BlankTableName,
    #[error("ORDERS_LOG_FORMAT must be `json` or `text`, got `{0}`")]
    UnknownLogFormat(String),
}

impl OrdersLambdaConfig {
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let table_name = match lookup(TABLE_NAME_ENV) {
            Some(value) if value.trim().is_empty() => return Err(ConfigError::BlankTableName),
            Some(value) => value.trim().to_string(),
            None => DEFAULT_ORDERS_TABLE.to_string(),
        };

        let log_level = lookup(LOG_LEVEL_ENV)
            .map(|value| value.trim().to_string())
            .filter(|value| !value.is_empty())
            .unwrap_or_else(|| DEFAULT_LOG_LEVEL.to_string());

        let log_format = match lookup(LOG_FORMAT_ENV) {
            None => LogFormat::Json,
            Some(value) => parse_log_format(&value)?,
        };

        Ok(Self {
            table_name,
            log_level,
            log_format,
        })
    }
}

fn parse_log_format(value: &str) -> Result<LogFormat, ConfigError> {
    match value.trim().to_ascii_lowercase().as_str() {
        "" | "json" => Ok(LogFormat::Json),
        "text" => Ok(LogFormat::Text),
        _ => Err(ConfigError::UnknownLogFormat(value.to_string())),
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashMap;

    use super::*;

    fn config_from(pairs: &[(&str, &str)]) -> Result<OrdersLambdaConfig, ConfigError> {
        let env: HashMap<String, String> = pairs
            .iter()
            .map(|(key, value)| (key.to_string(), value.to_string()))
            .collect();
        OrdersLambdaConfig::from_lookup(|key| env.get(key).cloned())
    }

    #[test]
    fn defaults_apply_when_environment_is_empty() {
        let config = config_from(&[]).expect("defaults should be valid");

        assert_eq!(config.table_name, "Orders");
        assert_eq!(config.log_level, "info");
        assert_eq!(config.log_format, LogFormat::Json);
    }

    #[test]
    fn reads_overrides() {
        let config = config_from(&[
            (TABLE_NAME_ENV, " orders-staging "),
            (LOG_LEVEL_ENV, "orders_lambda=debug"),
            (LOG_FORMAT_ENV, "TEXT"),
        ])
        .expect("overrides should be valid");

        assert_eq!(config.table_name, "orders-staging");
        assert_eq!(config.log_level, "orders_lambda=debug");
        assert_eq!(config.log_format, LogFormat::Text);
    }

    #[test]
    fn rejects_blank_table_name() {
        assert_eq!(
            config_from(&[(TABLE_NAME_ENV, "  ")]),
            Err(ConfigError::BlankTableName)
        );
    }

    #[test]
    fn rejects_unknown_log_format() {
        let error = config_from(&[(LOG_FORMAT_ENV, "xml")]).expect_err("xml is not supported");

        assert_eq!(error, ConfigError::UnknownLogFormat("xml".to_string()));
        assert_eq!(
            error.to_string(),
            "ORDERS_LOG_FORMAT must be `json` or `text`, got `xml`"
        );
    }
}
