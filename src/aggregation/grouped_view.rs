use chrono::{DateTime, Utc};
use serde::Serialize;

use super::{CountMap, Dimension};
use crate::color::Rgba;
use crate::models::DimensionEntry;
use crate::time_metrics;

/// A task as the list panels display it, with derived time fields.
///
/// Built fresh for every aggregation call and never persisted. Dimension
/// names are resolved through the same catalog lookup that assigns
/// buckets, with sentinel literals for absent or unknown references.
/// Colors are `None` exactly when the name is a sentinel.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TaskView {
    pub id: i64,
    pub title: String,
    pub description: Option<String>,
    pub value_added: Option<String>,
    pub due_date: Option<DateTime<Utc>>,
    /// Formatted due date, or "No due date"
    pub due_date_display: String,
    /// Signed; negative means overdue
    pub days_left: Option<i64>,
    pub category: String,
    pub category_color: Option<Rgba>,
    pub status: String,
    pub status_color: Option<Rgba>,
    pub priority: String,
    pub priority_color: Option<Rgba>,
}

impl TaskView {
    /// Resolved name along `dimension`
    pub fn label(&self, dimension: Dimension) -> &str {
        match dimension {
            Dimension::Category => &self.category,
            Dimension::Status => &self.status,
            Dimension::Priority => &self.priority,
        }
    }

    pub fn color(&self, dimension: Dimension) -> Option<Rgba> {
        match dimension {
            Dimension::Category => self.category_color,
            Dimension::Status => self.status_color,
            Dimension::Priority => self.priority_color,
        }
    }

    pub fn is_overdue(&self) -> bool {
        time_metrics::is_overdue(self.days_left)
    }
}

/// One section of a grouped view.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TaskBucket {
    pub name: String,
    pub title: String,
    /// Catalog color; `None` for the sentinel bucket
    pub color: Option<String>,
    pub is_sentinel: bool,
    pub tasks: Vec<TaskView>,
}

impl TaskBucket {
    pub(crate) fn from_entry(
        dimension: Dimension,
        entry: &DimensionEntry,
        tasks: Vec<TaskView>,
    ) -> Self {
        Self {
            name: entry.name.clone(),
            title: dimension.section_title(&entry.name),
            color: Some(entry.color.clone()),
            is_sentinel: false,
            tasks,
        }
    }

    pub(crate) fn sentinel(dimension: Dimension, tasks: Vec<TaskView>) -> Self {
        Self {
            name: dimension.sentinel().to_string(),
            title: dimension.sentinel().to_string(),
            color: None,
            is_sentinel: true,
            tasks,
        }
    }

    pub fn len(&self) -> usize {
        self.tasks.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tasks.is_empty()
    }

    pub fn overdue_count(&self) -> usize {
        self.tasks.iter().filter(|task| task.is_overdue()).count()
    }
}

/// Tasks partitioned along one dimension.
///
/// Buckets follow catalog order, including empty ones; the sentinel
/// bucket, when present, is last.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct GroupedView {
    pub dimension: Dimension,
    buckets: Vec<TaskBucket>,
}

impl GroupedView {
    pub(crate) fn new(dimension: Dimension, buckets: Vec<TaskBucket>) -> Self {
        Self { dimension, buckets }
    }

    /// Tasks in the bucket called `name`
    pub fn get(&self, name: &str) -> Option<&[TaskView]> {
        self.bucket(name).map(|bucket| bucket.tasks.as_slice())
    }

    pub fn bucket(&self, name: &str) -> Option<&TaskBucket> {
        self.buckets.iter().find(|bucket| bucket.name == name)
    }

    pub fn buckets(&self) -> &[TaskBucket] {
        &self.buckets
    }

    pub fn names(&self) -> impl Iterator<Item = &str> + '_ {
        self.buckets.iter().map(|bucket| bucket.name.as_str())
    }

    pub fn sentinel(&self) -> Option<&TaskBucket> {
        self.buckets.iter().find(|bucket| bucket.is_sentinel)
    }

    /// Number of buckets
    pub fn len(&self) -> usize {
        self.buckets.len()
    }

    pub fn is_empty(&self) -> bool {
        self.buckets.is_empty()
    }

    pub fn task_count(&self) -> usize {
        self.buckets.iter().map(TaskBucket::len).sum()
    }

    /// Bucket sizes in bucket order
    pub fn counts(&self) -> CountMap {
        self.buckets
            .iter()
            .map(|bucket| (bucket.name.clone(), bucket.len()))
            .collect()
    }
}
