//! # Chart Series
//!
//! Converts a [`CountMap`] into the parallel label/value/color arrays a
//! pie or bar chart consumes.
//!
//! Ordering comes from the catalog, not the count map, so legends stay
//! stable between renders. Zero-count catalog entries are kept. Labels the
//! catalog does not know (the sentinel bucket, normally) follow in the
//! order the count map lists them, drawn in [`Rgba::FALLBACK`]. Malformed
//! catalog colors also fall back rather than failing the chart.

use serde::Serialize;
use std::collections::HashSet;

use crate::aggregation::{CountMap, Dimension};
use crate::color::{to_display_color_or_fallback, Rgba};
use crate::config::DisplayConfig;
use crate::constants::display::DEFAULT_CHART_ALPHA;
use crate::models::DimensionEntry;

/// Chart-ready data: three arrays of equal length.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ChartSeries {
    /// Dataset label, e.g. "Tasks by Status"
    pub label: String,
    pub labels: Vec<String>,
    pub values: Vec<usize>,
    pub colors: Vec<Rgba>,
}

impl ChartSeries {
    pub fn len(&self) -> usize {
        self.labels.len()
    }

    pub fn is_empty(&self) -> bool {
        self.labels.is_empty()
    }

    /// `(label, value, color)` rows for overview lists
    pub fn rows(&self) -> impl Iterator<Item = (&str, usize, Rgba)> + '_ {
        self.labels
            .iter()
            .zip(&self.values)
            .zip(&self.colors)
            .map(|((label, value), color)| (label.as_str(), *value, *color))
    }

    pub fn value_of(&self, label: &str) -> Option<usize> {
        self.labels
            .iter()
            .position(|existing| existing == label)
            .map(|index| self.values[index])
    }
}

/// Builds [`ChartSeries`] with a fixed alpha and dataset label.
#[derive(Debug, Clone, PartialEq)]
pub struct ChartSeriesBuilder {
    alpha: f64,
    label: String,
}

impl Default for ChartSeriesBuilder {
    fn default() -> Self {
        Self {
            alpha: DEFAULT_CHART_ALPHA,
            label: String::new(),
        }
    }
}

impl ChartSeriesBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Builder preset for one dimension, taking alpha from display settings
    pub fn for_dimension(dimension: Dimension, display: &DisplayConfig) -> Self {
        Self::new()
            .with_alpha(display.chart_alpha)
            .with_label(dimension.chart_label())
    }

    pub fn with_alpha(mut self, alpha: f64) -> Self {
        self.alpha = alpha;
        self
    }

    pub fn with_label(mut self, label: impl Into<String>) -> Self {
        self.label = label.into();
        self
    }

    pub fn build(&self, counts: &CountMap, catalog: &[DimensionEntry]) -> ChartSeries {
        let mut series = ChartSeries {
            label: self.label.clone(),
            labels: Vec::with_capacity(catalog.len() + 1),
            values: Vec::with_capacity(catalog.len() + 1),
            colors: Vec::with_capacity(catalog.len() + 1),
        };
        let mut seen: HashSet<&str> = HashSet::with_capacity(catalog.len());

        for entry in catalog {
            if !seen.insert(entry.name.as_str()) {
                continue;
            }
            series.labels.push(entry.name.clone());
            series.values.push(counts.get(&entry.name).unwrap_or(0));
            series
                .colors
                .push(to_display_color_or_fallback(&entry.color, self.alpha));
        }

        for (name, count) in counts.iter() {
            if seen.insert(name) {
                series.labels.push(name.to_string());
                series.values.push(count);
                series.colors.push(Rgba::FALLBACK);
            }
        }

        tracing::debug!(
            label = %series.label,
            entries = series.len(),
            catalog = catalog.len(),
            "Built chart series"
        );

        series
    }
}

/// Build a series with full opacity and no dataset label.
///
/// ```rust
/// use taskboard_core::aggregation::CountMap;
/// use taskboard_core::charts::build_series;
/// use taskboard_core::models::DimensionEntry;
///
/// let catalog = vec![
///     DimensionEntry::new(1, "To Do", "#FFA726"),
///     DimensionEntry::new(2, "Done", "#66BB6A"),
/// ];
/// let mut counts = CountMap::new();
/// counts.insert("No Status", 1);
/// counts.insert("To Do", 2);
///
/// let series = build_series(&counts, &catalog);
/// assert_eq!(series.labels, vec!["To Do", "Done", "No Status"]);
/// assert_eq!(series.values, vec![2, 0, 1]);
/// assert_eq!(series.colors[2].to_string(), "rgba(209,213,219,0.7)");
/// ```
pub fn build_series(counts: &CountMap, catalog: &[DimensionEntry]) -> ChartSeries {
    ChartSeriesBuilder::new().build(counts, catalog)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn catalog() -> Vec<DimensionEntry> {
        vec![
            DimensionEntry::new(1, "Work", "#FF4444"),
            DimensionEntry::new(2, "Personal", "#4CAF50"),
            DimensionEntry::new(3, "Shopping", "#2196F3"),
        ]
    }

    #[test]
    fn test_catalog_order_wins_over_count_order() {
        let mut counts = CountMap::new();
        counts.insert("Shopping", 4);
        counts.insert("Work", 1);

        let series = build_series(&counts, &catalog());

        assert_eq!(series.labels, vec!["Work", "Personal", "Shopping"]);
        assert_eq!(series.values, vec![1, 0, 4]);
        assert_eq!(series.colors[0].to_string(), "rgba(255,68,68,1)");
    }

    #[test]
    fn test_unknown_labels_appended_in_encounter_order() {
        let mut counts = CountMap::new();
        counts.insert("Uncategorized", 2);
        counts.insert("Work", 1);
        counts.insert("Archive", 5);

        let series = build_series(&counts, &catalog());

        assert_eq!(
            series.labels,
            vec!["Work", "Personal", "Shopping", "Uncategorized", "Archive"]
        );
        assert_eq!(series.values, vec![1, 0, 0, 2, 5]);
        assert_eq!(series.colors[3], Rgba::FALLBACK);
        assert_eq!(series.colors[4], Rgba::FALLBACK);
    }

    #[test]
    fn test_malformed_catalog_color_falls_back() {
        let catalog = vec![
            DimensionEntry::new(1, "Work", "ZZZZZZ"),
            DimensionEntry::new(2, "Personal", "#4CAF50"),
        ];

        let series = build_series(&CountMap::new(), &catalog);

        assert_eq!(series.colors[0], Rgba::FALLBACK);
        assert_eq!(series.colors[1].to_string(), "rgba(76,175,80,1)");
        assert_eq!(series.len(), 2);
    }

    #[test]
    fn test_builder_alpha_and_label() {
        let display = DisplayConfig {
            chart_alpha: 0.5,
            ..DisplayConfig::default()
        };
        let builder = ChartSeriesBuilder::for_dimension(Dimension::Category, &display);

        let series = builder.build(&CountMap::new(), &catalog());

        assert_eq!(series.label, "Tasks by Category");
        assert_eq!(series.colors[2].to_string(), "rgba(33,150,243,0.5)");
    }

    #[test]
    fn test_rows_and_lookup() {
        let mut counts = CountMap::new();
        counts.insert("Personal", 3);
        let series = build_series(&counts, &catalog());

        let rows: Vec<_> = series.rows().map(|(label, value, _)| (label, value)).collect();
        assert_eq!(rows, vec![("Work", 0), ("Personal", 3), ("Shopping", 0)]);
        assert_eq!(series.value_of("Personal"), Some(3));
        assert_eq!(series.value_of("Nope"), None);
    }

    #[test]
    fn test_serializes_colors_as_strings() {
        let series = build_series(&CountMap::new(), &catalog()[..1]);
        let json = serde_json::to_value(&series).unwrap();

        assert_eq!(json["colors"][0], "rgba(255,68,68,1)");
        assert_eq!(json["values"][0], 0);
    }
}
