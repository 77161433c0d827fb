//! # Aggregation Engine
//!
//! Turns a flat task list and a dimension catalog into the projections the
//! dashboard renders: grouped task lists ([`GroupedView`]) and bucket sizes
//! ([`CountMap`]).
//!
//! ## Bucketing rules
//!
//! - One bucket per catalog entry, in catalog order, even when empty
//! - Tasks match buckets by exact display name, not by identifier
//! - Tasks without a reference, or whose reference is not in the catalog,
//!   fall into the dimension's sentinel bucket ("No Status",
//!   "Uncategorized", "No Priority"), which appears last and only when used
//! - `group_by` and `count_by` share one partitioning, so their bucket
//!   membership always agrees
//!
//! ```rust
//! use chrono::Utc;
//! use taskboard_core::aggregation::{AggregationEngine, Dimension};
//! use taskboard_core::models::{DimensionEntry, Task};
//!
//! let statuses = vec![
//!     DimensionEntry::new(1, "To Do", "#FFA726"),
//!     DimensionEntry::new(2, "Done", "#66BB6A"),
//! ];
//! let tasks = vec![
//!     Task::new(1, "Sprint Planning").with_status(statuses[0].clone()),
//!     Task::new(2, "Pay Bills"),
//! ];
//!
//! let engine = AggregationEngine::default();
//! let counts = engine.count_by(Dimension::Status, &tasks, &statuses);
//!
//! assert_eq!(counts.get("To Do"), Some(1));
//! assert_eq!(counts.get("Done"), Some(0));
//! assert_eq!(counts.get("No Status"), Some(1));
//!
//! let view = engine.group_by(Dimension::Status, &tasks, &statuses, Utc::now());
//! assert_eq!(view.counts(), counts);
//! ```

pub mod catalog_index;
pub mod count_map;
pub mod dimension;
pub mod engine;
pub mod grouped_view;

pub use catalog_index::CatalogIndex;
pub use count_map::CountMap;
pub use dimension::Dimension;
pub use engine::AggregationEngine;
pub use grouped_view::{GroupedView, TaskBucket, TaskView};
