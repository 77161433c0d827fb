//! Configuration Error Types
//!
//! Errors raised while loading or validating dashboard configuration.

use std::path::PathBuf;
use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Error)]
pub enum ConfigurationError {
    /// Config directory given explicitly but missing on disk
    #[error("Configuration directory not found: {path}")]
    DirectoryNotFound { path: PathBuf },

    /// Source files or environment overrides could not be merged
    #[error("Failed to merge configuration sources: {error}")]
    ConfigMergeError { error: String },

    /// Merged values do not fit the configuration structure
    #[error("Failed to deserialize configuration: {error}")]
    DeserializationError { error: String },

    #[error("Invalid value '{value}' for field '{field}': {context}")]
    InvalidValue {
        field: String,
        value: String,
        context: String,
    },
}

impl ConfigurationError {
    pub fn invalid_value<F: Into<String>, V: Into<String>, C: Into<String>>(
        field: F,
        value: V,
        context: C,
    ) -> Self {
        Self::InvalidValue {
            field: field.into(),
            value: value.into(),
            context: context.into(),
        }
    }
}

pub type ConfigResult<T> = Result<T, ConfigurationError>;
