use chrono::{Duration, TimeZone, Utc};
use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use taskboard_core::aggregation::{AggregationEngine, Dimension};
use taskboard_core::charts::build_series;
use taskboard_core::config::DashboardConfig;
use taskboard_core::dashboard::Dashboard;
use taskboard_core::models::{DashboardSnapshot, DimensionEntry, Task};

fn catalog(prefix: &str, size: usize) -> Vec<DimensionEntry> {
    (0..size)
        .map(|i| DimensionEntry::new(i as i64 + 1, format!("{prefix} {i}"), "#42A5F5"))
        .collect()
}

fn snapshot(task_count: usize) -> DashboardSnapshot {
    let categories = catalog("Category", 8);
    let statuses = catalog("Status", 4);
    let priorities = catalog("Priority", 3);
    let start = Utc.with_ymd_and_hms(2025, 3, 1, 0, 0, 0).unwrap();

    let tasks = (0..task_count)
        .map(|i| {
            let mut task = Task::new(i as i64, format!("Task {i}"))
                .with_due_date(start + Duration::hours(i as i64 % 500));
            // Every seventh task is left unassigned to exercise the sentinel path
            if i % 7 != 0 {
                task = task
                    .with_category(categories[i % categories.len()].clone())
                    .with_status(statuses[i % statuses.len()].clone())
                    .with_priority(priorities[i % priorities.len()].clone());
            }
            task
        })
        .collect();

    DashboardSnapshot::new(tasks, categories, statuses, priorities)
}

fn benchmark_group_by(c: &mut Criterion) {
    let engine = AggregationEngine::default();
    let now = Utc.with_ymd_and_hms(2025, 3, 7, 12, 0, 0).unwrap();
    let mut group = c.benchmark_group("group_by");

    for size in [100, 1_000, 10_000] {
        let snapshot = snapshot(size);
        group.bench_with_input(BenchmarkId::from_parameter(size), &snapshot, |b, snapshot| {
            b.iter(|| {
                engine.group_by(
                    black_box(Dimension::Category),
                    black_box(&snapshot.tasks),
                    &snapshot.categories,
                    now,
                )
            })
        });
    }
    group.finish();
}

fn benchmark_count_and_chart(c: &mut Criterion) {
    let engine = AggregationEngine::default();
    let snapshot = snapshot(10_000);

    c.bench_function("count_by_and_build_series", |b| {
        b.iter(|| {
            let counts =
                engine.count_by(Dimension::Status, black_box(&snapshot.tasks), &snapshot.statuses);
            build_series(&counts, &snapshot.statuses)
        })
    });
}

fn benchmark_dashboard_build(c: &mut Criterion) {
    let snapshot = snapshot(1_000);
    let config = DashboardConfig::default();
    let now = Utc.with_ymd_and_hms(2025, 3, 7, 12, 0, 0).unwrap();

    c.bench_function("dashboard_build", |b| {
        b.iter(|| Dashboard::build(black_box(&snapshot), now, &config))
    });
}

criterion_group!(
    benches,
    benchmark_group_by,
    benchmark_count_and_chart,
    benchmark_dashboard_build
);
criterion_main!(benches);
