//! Error types for the dashboard engine.
//!
//! The aggregation core itself never fails. These variants cover the edges
//! around it: color parsing (always contained by the chart builder), view
//! selection from user input, snapshot decoding and configuration loading.

use crate::config::ConfigurationError;
use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Error)]
pub enum DashboardError {
    #[error("Invalid color format '{value}': expected 6 hex digits with optional leading '#'")]
    InvalidColorFormat { value: String },
    #[error("Invalid dashboard view: {0}")]
    InvalidView(String),
    #[error("Invalid dashboard snapshot: {0}")]
    InvalidSnapshot(String),
    #[error("Configuration error: {0}")]
    Configuration(String),
}

impl DashboardError {
    pub fn invalid_color(value: impl Into<String>) -> Self {
        Self::InvalidColorFormat {
            value: value.into(),
        }
    }
}

impl From<serde_json::Error> for DashboardError {
    fn from(error: serde_json::Error) -> Self {
        DashboardError::InvalidSnapshot(format!("JSON deserialization error: {error}"))
    }
}

impl From<ConfigurationError> for DashboardError {
    fn from(error: ConfigurationError) -> Self {
        DashboardError::Configuration(error.to_string())
    }
}

pub type Result<T> = std::result::Result<T, DashboardError>;
