//! # Structured Logging Module
//!
//! Environment-aware structured logging for embedding applications. The
//! library itself only emits `tracing` events; installing a subscriber is
//! left to the caller through [`init_structured_logging`].

use std::sync::OnceLock;
use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use crate::aggregation::Dimension;
use crate::config::{ConfigManager, LoggingConfig};

static LOGGER_INITIALIZED: OnceLock<()> = OnceLock::new();

/// Initialize structured logging once per process.
///
/// Level precedence: `RUST_LOG`, then `logging.level`, then the level
/// derived from the detected environment.
pub fn init_structured_logging(config: &LoggingConfig) {
    LOGGER_INITIALIZED.get_or_init(|| {
        let environment = ConfigManager::detect_environment();
        let directive = resolve_log_level(config, &environment);
        let filter =
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&directive));

        let json_layer = config.json.then(|| {
            fmt::layer()
                .json()
                .with_target(true)
                .with_thread_ids(true)
                .with_level(true)
        });
        let text_layer = (!config.json).then(|| {
            fmt::layer()
                .with_target(true)
                .with_thread_ids(true)
                .with_level(true)
                .with_ansi(true)
        });

        let subscriber = tracing_subscriber::registry()
            .with(filter)
            .with(json_layer)
            .with(text_layer);

        // A host application may already own the global subscriber
        if subscriber.try_init().is_err() {
            tracing::debug!("Global tracing subscriber already initialized, keeping it");
        }

        tracing::info!(
            environment = %environment,
            level = %directive,
            json = config.json,
            "🔧 STRUCTURED LOGGING: Initialized"
        );
    });
}

/// Configured level if present, otherwise the environment default
fn resolve_log_level(config: &LoggingConfig, environment: &str) -> String {
    config
        .level
        .as_ref()
        .map(|level| level.to_lowercase())
        .unwrap_or_else(|| get_log_level(environment))
}

/// Get log level based on environment
fn get_log_level(environment: &str) -> String {
    match environment {
        "test" => "debug".to_string(),
        "development" => "debug".to_string(),
        "production" => "info".to_string(),
        _ => "debug".to_string(),
    }
}

/// Log structured data for an aggregation pass
pub fn log_aggregation(
    operation: &str,
    dimension: Dimension,
    task_count: usize,
    bucket_count: usize,
    unresolved: usize,
) {
    tracing::debug!(
        operation = %operation,
        dimension = %dimension,
        task_count = task_count,
        bucket_count = bucket_count,
        unresolved = unresolved,
        "📊 AGGREGATION"
    );
}

/// Log error with full context
pub fn log_error(component: &str, operation: &str, error: &str, context: Option<&str>) {
    tracing::error!(
        component = %component,
        operation = %operation,
        error = %error,
        context = context,
        "❌ ERROR"
    );
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_log_level_mapping() {
        assert_eq!(get_log_level("test"), "debug");
        assert_eq!(get_log_level("development"), "debug");
        assert_eq!(get_log_level("production"), "info");
        assert_eq!(get_log_level("unknown"), "debug");
    }

    #[test]
    fn test_configured_level_wins() {
        let config = LoggingConfig {
            level: Some("WARN".to_string()),
            json: false,
        };
        assert_eq!(resolve_log_level(&config, "development"), "warn");
        assert_eq!(
            resolve_log_level(&LoggingConfig::default(), "production"),
            "info"
        );
    }

    #[test]
    fn test_init_is_idempotent() {
        let config = LoggingConfig::default();
        init_structured_logging(&config);
        init_structured_logging(&config);
        log_aggregation("count_by", Dimension::Status, 3, 2, 1);
    }
}
