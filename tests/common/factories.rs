//! Seed catalogs and task builders matching the dashboard's default data

use chrono::{DateTime, Duration, TimeZone, Utc};
use taskboard_core::models::{DashboardSnapshot, DimensionEntry, Task};

/// Fixed evaluation instant: 2025-03-07 12:00 UTC
pub fn reference_now() -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2025, 3, 7, 12, 0, 0).unwrap()
}

pub fn categories() -> Vec<DimensionEntry> {
    vec![
        DimensionEntry::new(1, "Work", "#FF4444"),
        DimensionEntry::new(2, "Personal", "#4CAF50"),
        DimensionEntry::new(3, "Shopping", "#2196F3"),
    ]
}

pub fn statuses() -> Vec<DimensionEntry> {
    vec![
        DimensionEntry::new(1, "To Do", "#FFA726"),
        DimensionEntry::new(2, "In Progress", "#42A5F5"),
        DimensionEntry::new(3, "Done", "#66BB6A"),
    ]
}

pub fn priorities() -> Vec<DimensionEntry> {
    vec![
        DimensionEntry::new(1, "High", "#FF4444"),
        DimensionEntry::new(2, "Medium", "#FFA726"),
        DimensionEntry::new(3, "Low", "#66BB6A"),
    ]
}

fn entry(catalog: &[DimensionEntry], name: &str) -> DimensionEntry {
    catalog
        .iter()
        .find(|e| e.name == name)
        .cloned()
        .unwrap_or_else(|| panic!("no seed entry named {name}"))
}

/// Builder for tasks that reference the seed catalogs by name
pub struct TaskFactory {
    task: Task,
}

impl TaskFactory {
    pub fn new(id: i64, title: &str) -> Self {
        Self {
            task: Task::new(id, title),
        }
    }

    pub fn category(mut self, name: &str) -> Self {
        self.task.category = Some(entry(&categories(), name));
        self
    }

    pub fn status(mut self, name: &str) -> Self {
        self.task.status = Some(entry(&statuses(), name));
        self
    }

    pub fn priority(mut self, name: &str) -> Self {
        self.task.priority = Some(entry(&priorities(), name));
        self
    }

    /// Due `days` whole days after [`reference_now`]; negative for past dates
    pub fn due_in_days(mut self, days: i64) -> Self {
        self.task.due_date = Some(reference_now() + Duration::days(days));
        self
    }

    pub fn build(self) -> Task {
        self.task
    }
}

/// The sample tasks the dashboard ships with, plus one unassigned task
pub fn seed_tasks() -> Vec<Task> {
    vec![
        TaskFactory::new(1, "Client Presentation")
            .category("Work")
            .status("In Progress")
            .priority("High")
            .due_in_days(2)
            .build(),
        TaskFactory::new(2, "Grocery Run")
            .category("Shopping")
            .status("To Do")
            .priority("Medium")
            .due_in_days(-1)
            .build(),
        TaskFactory::new(3, "Gym Workout")
            .category("Personal")
            .status("Done")
            .priority("Low")
            .build(),
        TaskFactory::new(4, "Quarterly Report")
            .category("Work")
            .status("To Do")
            .priority("High")
            .due_in_days(10)
            .build(),
        Task::new(5, "Read Book"),
    ]
}

pub fn seed_snapshot() -> DashboardSnapshot {
    DashboardSnapshot::new(seed_tasks(), categories(), statuses(), priorities())
}
