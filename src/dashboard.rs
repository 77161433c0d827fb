//! # Dashboard Assembly
//!
//! One call that produces everything a dashboard render needs from a
//! snapshot: the summary panel counts, the colored status and category
//! overview lists, the status pie and category bar charts (plus a priority
//! series), and the active task list view.
//!
//! ```rust
//! use chrono::Utc;
//! use taskboard_core::config::DashboardConfig;
//! use taskboard_core::dashboard::Dashboard;
//! use taskboard_core::models::{DashboardSnapshot, DimensionEntry, Task};
//!
//! let todo = DimensionEntry::new(1, "To Do", "#FFA726");
//! let snapshot = DashboardSnapshot::new(
//!     vec![Task::new(1, "Gym Workout").with_status(todo.clone()), Task::new(2, "Read Book")],
//!     vec![],
//!     vec![todo],
//!     vec![],
//! );
//!
//! let dashboard = Dashboard::build(&snapshot, Utc::now(), &DashboardConfig::default());
//! assert_eq!(dashboard.summary.total_tasks, 2);
//! assert_eq!(dashboard.status_chart.labels, vec!["To Do", "No Status"]);
//! ```

use chrono::{DateTime, Utc};
use serde::Serialize;

use crate::aggregation::{AggregationEngine, CountMap, Dimension};
use crate::charts::{ChartSeries, ChartSeriesBuilder};
use crate::color::Rgba;
use crate::config::DashboardConfig;
use crate::constants::labels::TOTAL_TASKS;
use crate::models::DashboardSnapshot;
use crate::time_metrics::{days_remaining, is_overdue};
use crate::view::{select_with_engine, ActiveView, DashboardView};

/// Scalar counts for the overview panels
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DashboardSummary {
    /// Length of the task list, independent of bucket counts
    pub total_tasks: usize,
    pub overdue_tasks: usize,
    pub by_status: CountMap,
    pub by_category: CountMap,
    pub by_priority: CountMap,
}

impl DashboardSummary {
    pub fn counts_for(&self, dimension: Dimension) -> &CountMap {
        match dimension {
            Dimension::Status => &self.by_status,
            Dimension::Category => &self.by_category,
            Dimension::Priority => &self.by_priority,
        }
    }
}

/// One card of an overview list
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct OverviewPanel {
    pub label: String,
    pub count: usize,
    /// Bucket color, fallback gray for unknown buckets; `None` on the total card
    pub color: Option<Rgba>,
}

impl OverviewPanel {
    /// The "Total Tasks" card followed by one card per chart row
    fn list(total: usize, series: &ChartSeries, label: impl Fn(&str) -> String) -> Vec<Self> {
        let total = Self {
            label: TOTAL_TASKS.to_string(),
            count: total,
            color: None,
        };
        std::iter::once(total)
            .chain(series.rows().map(|(name, count, color)| Self {
                label: label(name),
                count,
                color: Some(color),
            }))
            .collect()
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Dashboard {
    pub summary: DashboardSummary,
    /// Status cards, labelled by status name
    pub status_overview: Vec<OverviewPanel>,
    /// Category cards, labelled "{name} Tasks"
    pub category_overview: Vec<OverviewPanel>,
    pub status_chart: ChartSeries,
    pub category_chart: ChartSeries,
    pub priority_chart: ChartSeries,
    pub active: ActiveView,
}

impl Dashboard {
    /// Build with the configured default view
    pub fn build(
        snapshot: &DashboardSnapshot,
        now: DateTime<Utc>,
        config: &DashboardConfig,
    ) -> Self {
        Self::build_with_view(snapshot, config.display.default_view, now, config)
    }

    pub fn build_with_view(
        snapshot: &DashboardSnapshot,
        view: DashboardView,
        now: DateTime<Utc>,
        config: &DashboardConfig,
    ) -> Self {
        let engine = AggregationEngine::new(&config.display);
        let tasks = &snapshot.tasks;

        let count =
            |dimension: Dimension| engine.count_by(dimension, tasks, dimension.catalog(snapshot));
        let chart = |dimension: Dimension, counts: &CountMap| {
            ChartSeriesBuilder::for_dimension(dimension, &config.display)
                .build(counts, dimension.catalog(snapshot))
        };

        let by_status = count(Dimension::Status);
        let by_category = count(Dimension::Category);
        let by_priority = count(Dimension::Priority);

        let overdue_tasks = tasks
            .iter()
            .filter(|task| is_overdue(days_remaining(task.due_date, now)))
            .count();

        let status_chart = chart(Dimension::Status, &by_status);
        let category_chart = chart(Dimension::Category, &by_category);
        let priority_chart = chart(Dimension::Priority, &by_priority);

        let status_overview =
            OverviewPanel::list(tasks.len(), &status_chart, |name| name.to_string());
        let category_overview = OverviewPanel::list(tasks.len(), &category_chart, |name| {
            Dimension::Category.section_title(name)
        });

        let active = select_with_engine(&engine, view, snapshot, &config.display, now);

        tracing::debug!(
            tasks = tasks.len(),
            overdue = overdue_tasks,
            view = %view,
            "Built dashboard"
        );

        Self {
            summary: DashboardSummary {
                total_tasks: tasks.len(),
                overdue_tasks,
                by_status,
                by_category,
                by_priority,
            },
            status_overview,
            category_overview,
            status_chart,
            category_chart,
            priority_chart,
            active,
        }
    }
}
