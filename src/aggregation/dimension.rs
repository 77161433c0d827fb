use serde::{Deserialize, Serialize};
use std::fmt;

use crate::constants::{labels, sentinels};
use crate::error::DashboardError;
use crate::models::{DashboardSnapshot, DimensionEntry, Task};

/// An axis tasks can be grouped along.
///
/// Each variant knows how to read its key off a task, which sentinel
/// bucket collects tasks without a usable reference, and how the dashboard
/// titles its sections and charts.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Dimension {
    Category,
    Status,
    Priority,
}

impl Dimension {
    pub const ALL: [Dimension; 3] = [Self::Status, Self::Category, Self::Priority];

    /// The resolved dimension object attached to `task`, if any
    pub fn entry_of<'a>(&self, task: &'a Task) -> Option<&'a DimensionEntry> {
        match self {
            Self::Category => task.category.as_ref(),
            Self::Status => task.status.as_ref(),
            Self::Priority => task.priority.as_ref(),
        }
    }

    /// Grouping key for `task`: the display name of its dimension object
    pub fn key_of<'a>(&self, task: &'a Task) -> Option<&'a str> {
        self.entry_of(task).map(|entry| entry.name.as_str())
    }

    /// Display name for `task` with the sentinel substituted when absent
    pub fn label_of(&self, task: &Task) -> String {
        self.key_of(task).unwrap_or(self.sentinel()).to_string()
    }

    pub fn sentinel(&self) -> &'static str {
        match self {
            Self::Category => sentinels::UNCATEGORIZED,
            Self::Status => sentinels::NO_STATUS,
            Self::Priority => sentinels::NO_PRIORITY,
        }
    }

    /// Heading of a task list section, e.g. "Done Tasks" or "High Priority"
    pub fn section_title(&self, name: &str) -> String {
        match self {
            Self::Category | Self::Status => format!("{name} Tasks"),
            Self::Priority => format!("{name} Priority"),
        }
    }

    pub fn chart_label(&self) -> &'static str {
        match self {
            Self::Category => labels::TASKS_BY_CATEGORY,
            Self::Status => labels::TASKS_BY_STATUS,
            Self::Priority => labels::TASKS_BY_PRIORITY,
        }
    }

    /// The catalog in `snapshot` that lists this dimension's buckets
    pub fn catalog<'a>(&self, snapshot: &'a DashboardSnapshot) -> &'a [DimensionEntry] {
        match self {
            Self::Category => &snapshot.categories,
            Self::Status => &snapshot.statuses,
            Self::Priority => &snapshot.priorities,
        }
    }
}

impl fmt::Display for Dimension {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Category => write!(f, "category"),
            Self::Status => write!(f, "status"),
            Self::Priority => write!(f, "priority"),
        }
    }
}

impl std::str::FromStr for Dimension {
    type Err = DashboardError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "category" => Ok(Self::Category),
            "status" => Ok(Self::Status),
            "priority" => Ok(Self::Priority),
            _ => Err(DashboardError::InvalidView(format!("unknown dimension: {s}"))),
        }
    }
}
