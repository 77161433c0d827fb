//! # Dashboard Constants
//!
//! Literal labels and display defaults shared by the aggregation engine,
//! the chart builder and the dashboard assembly. The sentinel names are
//! part of the output contract: the rendering layer shows them verbatim.

/// Bucket names for tasks whose dimension reference is absent or unknown
pub mod sentinels {
    pub const UNCATEGORIZED: &str = "Uncategorized";
    pub const NO_STATUS: &str = "No Status";
    pub const NO_PRIORITY: &str = "No Priority";
}

/// Fixed labels rendered by summary panels and charts
pub mod labels {
    /// Displayed in place of a formatted due date
    pub const NO_DUE_DATE: &str = "No due date";

    /// Summary panel scalar
    pub const TOTAL_TASKS: &str = "Total Tasks";

    pub const TASKS_BY_STATUS: &str = "Tasks by Status";
    pub const TASKS_BY_CATEGORY: &str = "Tasks by Category";
    pub const TASKS_BY_PRIORITY: &str = "Tasks by Priority";
}

/// Display defaults, overridable through [`crate::config::DisplayConfig`]
pub mod display {
    /// Month/day/year without zero padding, e.g. `3/7/2025`
    pub const DEFAULT_DATE_FORMAT: &str = "%-m/%-d/%Y";

    pub const DEFAULT_CHART_ALPHA: f64 = 1.0;

    /// Opacity of the per-task dimension colors on list rows
    pub const TASK_COLOR_ALPHA: f64 = 1.0;

    /// Neutral gray used whenever a bucket has no usable color
    pub const FALLBACK_RGB: (u8, u8, u8) = (209, 213, 219);
    pub const FALLBACK_ALPHA: f64 = 0.7;
}

/// Time arithmetic
pub mod time {
    pub const MILLIS_PER_DAY: i64 = 24 * 60 * 60 * 1000;
}
