//! # Dashboard Data Model
//!
//! Read-only records handed to the engine by the data-access layer. Tasks
//! arrive with their category, status and priority already resolved to
//! full [`DimensionEntry`] values rather than bare foreign keys.

pub mod dimension_entry;
pub mod snapshot;
pub mod task;

pub use dimension_entry::DimensionEntry;
pub use snapshot::DashboardSnapshot;
pub use task::Task;
