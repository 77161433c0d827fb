use serde::{Deserialize, Serialize};

use super::{DimensionEntry, Task};
use crate::error::Result;
use crate::logging::log_error;

/// Everything one dashboard render needs: the task list and the three
/// dimension catalogs, in the shape the dashboard data endpoint returns.
///
/// A snapshot is fetched once per render cycle and passed by reference to
/// the engine; nothing in this crate mutates it.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct DashboardSnapshot {
    #[serde(default)]
    pub tasks: Vec<Task>,
    #[serde(default)]
    pub categories: Vec<DimensionEntry>,
    #[serde(default)]
    pub statuses: Vec<DimensionEntry>,
    #[serde(default)]
    pub priorities: Vec<DimensionEntry>,
}

impl DashboardSnapshot {
    pub fn new(
        tasks: Vec<Task>,
        categories: Vec<DimensionEntry>,
        statuses: Vec<DimensionEntry>,
        priorities: Vec<DimensionEntry>,
    ) -> Self {
        Self {
            tasks,
            categories,
            statuses,
            priorities,
        }
    }

    /// Decode a snapshot from the data endpoint's JSON body.
    pub fn from_json(json: &str) -> Result<Self> {
        let snapshot: DashboardSnapshot = serde_json::from_str(json).map_err(|e| {
            log_error("snapshot", "from_json", &e.to_string(), None);
            e
        })?;
        tracing::debug!(
            tasks = snapshot.tasks.len(),
            categories = snapshot.categories.len(),
            statuses = snapshot.statuses.len(),
            priorities = snapshot.priorities.len(),
            "Decoded dashboard snapshot"
        );
        Ok(snapshot)
    }

    pub fn is_empty(&self) -> bool {
        self.tasks.is_empty()
    }
}
