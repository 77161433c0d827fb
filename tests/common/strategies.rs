use chrono::Duration;
use proptest::prelude::*;
use proptest::strategy::Just;
use taskboard_core::models::{DashboardSnapshot, DimensionEntry, Task};

use super::factories::reference_now;

/// Name that never appears in a generated catalog
pub const UNKNOWN_NAME: &str = "Archived";

/// Strategy for generating display colors, mostly well-formed
pub fn color_strategy() -> impl Strategy<Value = String> {
    prop_oneof![
        4 => "#[0-9A-Fa-f]{6}",
        1 => "[0-9A-F]{6}",
        1 => Just("ZZZZZZ".to_string()),
    ]
}

/// Strategy for generating catalogs with unique names
pub fn catalog_strategy() -> impl Strategy<Value = Vec<DimensionEntry>> {
    prop::collection::vec(("[A-Z][a-z]{1,8}", color_strategy()), 0..6).prop_map(|pairs| {
        let mut catalog: Vec<DimensionEntry> = Vec::new();
        for (name, color) in pairs {
            if catalog.iter().all(|e| e.name != name) {
                let id = catalog.len() as i64 + 1;
                catalog.push(DimensionEntry::new(id, name, color));
            }
        }
        catalog
    })
}

/// Strategy for a task's reference into `catalog`: absent, unknown, or a catalog entry
pub fn reference_strategy(catalog: Vec<DimensionEntry>) -> BoxedStrategy<Option<DimensionEntry>> {
    let unknown = DimensionEntry::new(999, UNKNOWN_NAME, "#000000");
    if catalog.is_empty() {
        prop_oneof![Just(None), Just(Some(unknown))].boxed()
    } else {
        prop_oneof![
            1 => Just(None),
            1 => Just(Some(unknown)),
            4 => prop::sample::select(catalog).prop_map(Some),
        ]
        .boxed()
    }
}

/// Strategy for generating due date offsets from the reference instant, in milliseconds
pub fn due_offset_strategy() -> impl Strategy<Value = Option<i64>> {
    prop::option::of(-10_000_000_000i64..10_000_000_000i64)
}

fn task_strategy(
    categories: Vec<DimensionEntry>,
    statuses: Vec<DimensionEntry>,
    priorities: Vec<DimensionEntry>,
) -> impl Strategy<Value = Task> {
    (
        1i64..10_000,
        "[A-Za-z ]{1,20}",
        reference_strategy(categories),
        reference_strategy(statuses),
        reference_strategy(priorities),
        due_offset_strategy(),
    )
        .prop_map(|(id, title, category, status, priority, offset)| Task {
            id,
            title,
            description: None,
            due_date: offset.map(|ms| reference_now() + Duration::milliseconds(ms)),
            value_added: None,
            category,
            status,
            priority,
        })
}

/// Strategy for generating whole snapshots whose tasks reference their catalogs
pub fn snapshot_strategy() -> impl Strategy<Value = DashboardSnapshot> {
    (catalog_strategy(), catalog_strategy(), catalog_strategy()).prop_flat_map(
        |(categories, statuses, priorities)| {
            let tasks = prop::collection::vec(
                task_strategy(categories.clone(), statuses.clone(), priorities.clone()),
                0..30,
            );
            (
                tasks,
                Just(categories),
                Just(statuses),
                Just(priorities),
            )
                .prop_map(|(tasks, categories, statuses, priorities)| {
                    DashboardSnapshot::new(tasks, categories, statuses, priorities)
                })
        },
    )
}
