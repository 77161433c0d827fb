#![allow(clippy::doc_markdown)] // Allow technical terms like RGBA, strftime in docs
#![allow(clippy::missing_errors_doc)] // Allow public functions without # Errors sections
#![allow(clippy::must_use_candidate)] // Allow methods without must_use when context is clear

//! # Taskboard Core
//!
//! Aggregation and view-model engine for a task-tracking dashboard.
//!
//! ## Overview
//!
//! Takes a flat task list plus the category, status and priority catalogs
//! and derives everything the dashboard renders: per-dimension groupings of
//! enriched task views, count maps, chart series with display colors, and
//! days-remaining metrics. Every operation is a pure function of
//! (tasks, catalogs, now) and explicit display configuration.
//!
//! ## Module Organization
//!
//! - [`models`] - Task, dimension entry and snapshot records
//! - [`aggregation`] - Dimension grouping and counting
//! - [`charts`] - Chart series construction
//! - [`color`] - Hex to RGBA conversion
//! - [`time_metrics`] - Days remaining and due date formatting
//! - [`view`] - Active view selection
//! - [`dashboard`] - One-call dashboard assembly
//! - [`config`] - Configuration management
//! - [`logging`] - Structured logging setup
//! - [`error`] - Structured error handling
//!
//! ## Quick Start
//!
//! ```rust
//! use chrono::Utc;
//! use taskboard_core::{Dashboard, DashboardConfig, DashboardSnapshot, DashboardView};
//!
//! # fn example(body: &str) -> taskboard_core::Result<()> {
//! let snapshot = DashboardSnapshot::from_json(body)?;
//! let dashboard = Dashboard::build_with_view(
//!     &snapshot,
//!     "status".parse::<DashboardView>()?,
//!     Utc::now(),
//!     &DashboardConfig::default(),
//! );
//! println!("{} tasks", dashboard.summary.total_tasks);
//! # Ok(())
//! # }
//! # example(r#"{"tasks": [], "statuses": []}"#).unwrap();
//! ```

pub mod aggregation;
pub mod charts;
pub mod color;
pub mod config;
pub mod constants;
pub mod dashboard;
pub mod error;
pub mod logging;
pub mod models;
pub mod time_metrics;
pub mod view;

pub use aggregation::{
    AggregationEngine, CatalogIndex, CountMap, Dimension, GroupedView, TaskBucket, TaskView,
};
pub use charts::{build_series, ChartSeries, ChartSeriesBuilder};
pub use color::{to_display_color, to_display_color_or_fallback, Rgba};
pub use config::{ConfigManager, DashboardConfig, DisplayConfig, LoggingConfig};
pub use constants::{labels, sentinels};
pub use dashboard::{Dashboard, DashboardSummary, OverviewPanel};
pub use error::{DashboardError, Result};
pub use models::{DashboardSnapshot, DimensionEntry, Task};
pub use time_metrics::{days_remaining, format_due_date};
pub use view::{select, ActiveView, DashboardView};
