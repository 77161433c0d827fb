use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::DimensionEntry;

/// A single unit of work as delivered by the dashboard data endpoint.
///
/// Field names follow the endpoint's camelCase JSON (`dueDate`,
/// `valueAdded`). Foreign-key columns and timestamps that the endpoint
/// also emits are ignored on deserialization.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Task {
    pub id: i64,
    pub title: String,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub due_date: Option<DateTime<Utc>>,
    /// Free-form note on why the task matters
    #[serde(default)]
    pub value_added: Option<String>,
    #[serde(default)]
    pub category: Option<DimensionEntry>,
    #[serde(default)]
    pub status: Option<DimensionEntry>,
    #[serde(default)]
    pub priority: Option<DimensionEntry>,
}

impl Task {
    /// Create a task with only the required fields set
    pub fn new(id: i64, title: impl Into<String>) -> Self {
        Self {
            id,
            title: title.into(),
            description: None,
            due_date: None,
            value_added: None,
            category: None,
            status: None,
            priority: None,
        }
    }

    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    pub fn with_due_date(mut self, due_date: DateTime<Utc>) -> Self {
        self.due_date = Some(due_date);
        self
    }

    pub fn with_value_added(mut self, value_added: impl Into<String>) -> Self {
        self.value_added = Some(value_added.into());
        self
    }

    pub fn with_category(mut self, category: DimensionEntry) -> Self {
        self.category = Some(category);
        self
    }

    pub fn with_status(mut self, status: DimensionEntry) -> Self {
        self.status = Some(status);
        self
    }

    pub fn with_priority(mut self, priority: DimensionEntry) -> Self {
        self.priority = Some(priority);
        self
    }
}
