use chrono::{DateTime, Utc};

use super::catalog_index::{BucketIndex, Slot};
use super::{CatalogIndex, CountMap, Dimension, GroupedView, TaskBucket, TaskView};
use crate::color::to_display_color_or_fallback;
use crate::config::DisplayConfig;
use crate::constants::display::{DEFAULT_DATE_FORMAT, TASK_COLOR_ALPHA};
use crate::logging::log_aggregation;
use crate::models::{DashboardSnapshot, DimensionEntry, Task};
use crate::time_metrics::{days_remaining, format_due_date};

/// Partitions tasks into dimension buckets and builds their display views.
///
/// The engine holds only display settings. Every call takes its own task
/// slice, catalog and evaluation instant and returns freshly allocated
/// output, so one engine can serve concurrent renders.
#[derive(Debug, Clone)]
pub struct AggregationEngine {
    date_format: String,
}

impl Default for AggregationEngine {
    fn default() -> Self {
        Self {
            date_format: DEFAULT_DATE_FORMAT.to_string(),
        }
    }
}

impl AggregationEngine {
    pub fn new(display: &DisplayConfig) -> Self {
        Self::with_date_format(display.date_format.clone())
    }

    pub fn with_date_format(date_format: impl Into<String>) -> Self {
        Self {
            date_format: date_format.into(),
        }
    }

    pub fn date_format(&self) -> &str {
        &self.date_format
    }

    /// Group `tasks` into one bucket per `catalog` entry, plus a trailing
    /// sentinel bucket for tasks whose reference is absent or names an
    /// entry not in the catalog.
    ///
    /// Matching is by exact, case-sensitive display name. Tasks keep their
    /// input order within a bucket. Only the grouped dimension is checked
    /// against a catalog; use [`Self::group_snapshot`] to resolve all three.
    pub fn group_by(
        &self,
        dimension: Dimension,
        tasks: &[Task],
        catalog: &[DimensionEntry],
        now: DateTime<Utc>,
    ) -> GroupedView {
        let index = CatalogIndex::new().with_catalog(dimension, catalog);
        self.group_indexed(dimension, tasks, &index, now)
    }

    /// [`Self::group_by`] over a whole snapshot, with every view's category,
    /// status and priority resolved against the snapshot's catalogs.
    pub fn group_snapshot(
        &self,
        dimension: Dimension,
        snapshot: &DashboardSnapshot,
        now: DateTime<Utc>,
    ) -> GroupedView {
        let index = CatalogIndex::from_snapshot(snapshot);
        self.group_indexed(dimension, &snapshot.tasks, &index, now)
    }

    // `index` always carries a catalog for `dimension` here.
    fn group_indexed(
        &self,
        dimension: Dimension,
        tasks: &[Task],
        index: &CatalogIndex<'_>,
        now: DateTime<Utc>,
    ) -> GroupedView {
        let bucket_index = index.bucket_index(dimension);
        let entries = bucket_index.map(BucketIndex::entries).unwrap_or_default();

        let mut catalog_tasks: Vec<Vec<TaskView>> = vec![Vec::new(); entries.len()];
        let mut sentinel_tasks = Vec::new();

        for task in tasks {
            let view = self.enrich(task, index, now);
            match bucket_index.map(|buckets| buckets.slot_of(task)) {
                Some(Slot::Catalog(position)) => catalog_tasks[position].push(view),
                _ => sentinel_tasks.push(view),
            }
        }

        let mut buckets: Vec<TaskBucket> = entries
            .iter()
            .zip(catalog_tasks)
            .map(|(entry, tasks)| TaskBucket::from_entry(dimension, entry, tasks))
            .collect();

        let unresolved = sentinel_tasks.len();
        if unresolved > 0 {
            buckets.push(TaskBucket::sentinel(dimension, sentinel_tasks));
        }

        log_aggregation("group_by", dimension, tasks.len(), buckets.len(), unresolved);

        GroupedView::new(dimension, buckets)
    }

    /// Bucket sizes using the same partitioning as [`Self::group_by`],
    /// without building views.
    ///
    /// The counts always sum to `tasks.len()`.
    pub fn count_by(
        &self,
        dimension: Dimension,
        tasks: &[Task],
        catalog: &[DimensionEntry],
    ) -> CountMap {
        let index = BucketIndex::build(dimension, catalog);

        let mut catalog_counts = vec![0usize; index.entries().len()];
        let mut sentinel_count = 0usize;

        for task in tasks {
            match index.slot_of(task) {
                Slot::Catalog(position) => catalog_counts[position] += 1,
                Slot::Sentinel => sentinel_count += 1,
            }
        }

        let mut counts: CountMap = index
            .entries()
            .iter()
            .zip(catalog_counts)
            .map(|(entry, count)| (entry.name.clone(), count))
            .collect();

        if sentinel_count > 0 {
            counts.insert(dimension.sentinel(), sentinel_count);
        }

        log_aggregation("count_by", dimension, tasks.len(), counts.len(), sentinel_count);

        counts
    }

    /// Build the display view of a single task, resolving its dimension
    /// names and colors through `index`
    pub fn enrich(&self, task: &Task, index: &CatalogIndex<'_>, now: DateTime<Utc>) -> TaskView {
        let resolved = |dimension: Dimension| match index.resolve(dimension, task) {
            Some(entry) => (
                entry.name.clone(),
                Some(to_display_color_or_fallback(&entry.color, TASK_COLOR_ALPHA)),
            ),
            None => (dimension.sentinel().to_string(), None),
        };
        let (category, category_color) = resolved(Dimension::Category);
        let (status, status_color) = resolved(Dimension::Status);
        let (priority, priority_color) = resolved(Dimension::Priority);

        TaskView {
            id: task.id,
            title: task.title.clone(),
            description: task.description.clone(),
            value_added: task.value_added.clone(),
            due_date: task.due_date,
            due_date_display: format_due_date(task.due_date, &self.date_format),
            days_left: days_remaining(task.due_date, now),
            category,
            category_color,
            status,
            status_color,
            priority,
            priority_color,
        }
    }
}
