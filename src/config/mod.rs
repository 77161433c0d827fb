//! # Dashboard Configuration
//!
//! Display and logging settings handed explicitly to the engine and the
//! dashboard builder. Nothing in the crate reads configuration from global
//! state; callers load a [`DashboardConfig`] once and pass it down.
//!
//! ## Sources
//!
//! [`ConfigManager`] merges, in increasing priority:
//!
//! 1. built-in defaults
//! 2. `dashboard.toml` in the config directory
//! 3. `dashboard.{environment}.toml`
//! 4. `TASKBOARD__SECTION__KEY` environment variables
//!
//! ```toml
//! [display]
//! date_format = "%Y-%m-%d"
//! chart_alpha = 0.8
//! default_view = "status"
//!
//! [logging]
//! level = "info"
//! json = true
//! ```

pub mod error;
pub mod loader;

use serde::{Deserialize, Serialize};

use crate::constants::display::{DEFAULT_CHART_ALPHA, DEFAULT_DATE_FORMAT};
use crate::time_metrics::is_valid_date_format;
use crate::view::DashboardView;

pub use error::{ConfigResult, ConfigurationError};
pub use loader::ConfigManager;

const LOG_LEVELS: &[&str] = &["trace", "debug", "info", "warn", "error", "off"];

/// Root configuration structure mirroring dashboard.toml
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DashboardConfig {
    pub display: DisplayConfig,
    pub logging: LoggingConfig,
}

/// How dates, charts and the initial task list are presented
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DisplayConfig {
    /// strftime pattern for due dates
    pub date_format: String,
    /// Opacity applied to chart colors, 0.0 to 1.0
    pub chart_alpha: f64,
    /// Grouping shown when no view is requested
    pub default_view: DashboardView,
}

impl Default for DisplayConfig {
    fn default() -> Self {
        Self {
            date_format: DEFAULT_DATE_FORMAT.to_string(),
            chart_alpha: DEFAULT_CHART_ALPHA,
            default_view: DashboardView::default(),
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LoggingConfig {
    /// Overrides the environment-derived level when set
    pub level: Option<String>,
    /// Emit JSON lines instead of human-readable output
    pub json: bool,
}

impl DashboardConfig {
    pub fn validate(&self) -> Result<(), ConfigurationError> {
        let alpha = self.display.chart_alpha;
        if !alpha.is_finite() || !(0.0..=1.0).contains(&alpha) {
            return Err(ConfigurationError::invalid_value(
                "display.chart_alpha",
                alpha.to_string(),
                "alpha must be between 0.0 and 1.0",
            ));
        }

        if !is_valid_date_format(&self.display.date_format) {
            return Err(ConfigurationError::invalid_value(
                "display.date_format",
                self.display.date_format.clone(),
                "not a valid strftime pattern",
            ));
        }

        if let Some(level) = &self.logging.level {
            if !LOG_LEVELS.contains(&level.to_lowercase().as_str()) {
                return Err(ConfigurationError::invalid_value(
                    "logging.level",
                    level.clone(),
                    format!("expected one of {}", LOG_LEVELS.join(", ")),
                ));
            }
        }

        Ok(())
    }
}
