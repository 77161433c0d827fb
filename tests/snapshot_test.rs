mod common;

use common::factories::reference_now;
use taskboard_core::aggregation::{AggregationEngine, CatalogIndex, Dimension};
use taskboard_core::error::DashboardError;
use taskboard_core::models::DashboardSnapshot;

const ENDPOINT_BODY: &str = r##"{
    "tasks": [
        {
            "id": 1,
            "title": "Client Presentation",
            "description": "Prepare slides",
            "dueDate": "2025-03-09T12:00:00.000Z",
            "valueAdded": "Closes the Q1 deal",
            "categoryId": 1,
            "statusId": 2,
            "priorityId": 1,
            "createdAt": "2025-03-01T09:00:00.000Z",
            "category": {"id": 1, "name": "Work", "color": "#FF4444"},
            "status": {"id": 2, "name": "In Progress", "color": "#42A5F5"},
            "priority": {"id": 1, "name": "High", "color": "#FF4444"}
        },
        {
            "id": 2,
            "title": "Read Book",
            "description": null,
            "dueDate": null,
            "valueAdded": null,
            "category": null,
            "status": null,
            "priority": null
        }
    ],
    "categories": [{"id": 1, "name": "Work", "color": "#FF4444"}],
    "statuses": [
        {"id": 1, "name": "To Do", "color": "#FFA726"},
        {"id": 2, "name": "In Progress", "color": "#42A5F5"}
    ],
    "priorities": [{"id": 1, "name": "High", "color": "#FF4444"}]
}"##;

#[test]
fn test_parse_endpoint_body() {
    let snapshot = DashboardSnapshot::from_json(ENDPOINT_BODY).unwrap();

    assert_eq!(snapshot.tasks.len(), 2);
    assert_eq!(snapshot.statuses.len(), 2);
    let first = &snapshot.tasks[0];
    assert_eq!(first.value_added.as_deref(), Some("Closes the Q1 deal"));
    assert_eq!(first.status.as_ref().map(|s| s.name.as_str()), Some("In Progress"));
    assert!(snapshot.tasks[1].due_date.is_none());
}

#[test]
fn test_parsed_snapshot_aggregates() {
    let snapshot = DashboardSnapshot::from_json(ENDPOINT_BODY).unwrap();
    let engine = AggregationEngine::default();

    let counts = engine.count_by(Dimension::Status, &snapshot.tasks, &snapshot.statuses);
    assert_eq!(
        counts.iter().collect::<Vec<_>>(),
        vec![("To Do", 0), ("In Progress", 1), ("No Status", 1)]
    );

    let index = CatalogIndex::from_snapshot(&snapshot);
    let view = engine.enrich(&snapshot.tasks[0], &index, reference_now());
    assert_eq!(view.days_left, Some(2));
    assert_eq!(
        view.category_color.map(|c| c.to_string()).as_deref(),
        Some("rgba(255,68,68,1)")
    );
}

#[test]
fn test_missing_catalogs_default_to_empty() {
    let snapshot = DashboardSnapshot::from_json(r#"{"tasks": []}"#).unwrap();
    assert!(snapshot.is_empty());
    assert!(snapshot.categories.is_empty());
}

#[test]
fn test_malformed_body_is_invalid_snapshot() {
    let result = DashboardSnapshot::from_json("{\"tasks\": [");
    assert!(matches!(result, Err(DashboardError::InvalidSnapshot(_))));
}
