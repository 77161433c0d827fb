//! # View Selection
//!
//! Which grouping the task list panel shows. The selection itself lives in
//! the presentation layer; this module only maps a [`DashboardView`] to the
//! grouping and series that back it.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;

use crate::aggregation::{AggregationEngine, Dimension, GroupedView};
use crate::charts::{ChartSeries, ChartSeriesBuilder};
use crate::config::DisplayConfig;
use crate::error::DashboardError;
use crate::models::DashboardSnapshot;

/// The grouping selected in the "View Tasks By" control
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DashboardView {
    Status,
    Category,
    #[default]
    Priority,
}

impl DashboardView {
    pub const ALL: [DashboardView; 3] = [Self::Status, Self::Category, Self::Priority];

    pub fn dimension(&self) -> Dimension {
        match self {
            Self::Status => Dimension::Status,
            Self::Category => Dimension::Category,
            Self::Priority => Dimension::Priority,
        }
    }
}

impl fmt::Display for DashboardView {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.dimension())
    }
}

impl std::str::FromStr for DashboardView {
    type Err = DashboardError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "status" => Ok(Self::Status),
            "category" => Ok(Self::Category),
            "priority" => Ok(Self::Priority),
            _ => Err(DashboardError::InvalidView(s.to_string())),
        }
    }
}

/// The grouping and chart series for the selected view
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ActiveView {
    pub view: DashboardView,
    pub grouped: GroupedView,
    pub series: ChartSeries,
}

/// Build the grouping and series backing `view`.
pub fn select(
    view: DashboardView,
    snapshot: &DashboardSnapshot,
    display: &DisplayConfig,
    now: DateTime<Utc>,
) -> ActiveView {
    let engine = AggregationEngine::new(display);
    select_with_engine(&engine, view, snapshot, display, now)
}

pub(crate) fn select_with_engine(
    engine: &AggregationEngine,
    view: DashboardView,
    snapshot: &DashboardSnapshot,
    display: &DisplayConfig,
    now: DateTime<Utc>,
) -> ActiveView {
    let dimension = view.dimension();
    let catalog = dimension.catalog(snapshot);

    let grouped = engine.group_snapshot(dimension, snapshot, now);
    let series =
        ChartSeriesBuilder::for_dimension(dimension, display).build(&grouped.counts(), catalog);

    ActiveView {
        view,
        grouped,
        series,
    }
}
