use std::collections::HashMap;
use tracing::{debug, warn};

use super::Dimension;
use crate::models::{DashboardSnapshot, DimensionEntry, Task};

pub(crate) enum Slot {
    Catalog(usize),
    Sentinel,
}

/// Catalog entries with duplicate names removed, and a name lookup
#[derive(Debug)]
pub(crate) struct BucketIndex<'a> {
    dimension: Dimension,
    entries: Vec<&'a DimensionEntry>,
    positions: HashMap<&'a str, usize>,
}

impl<'a> BucketIndex<'a> {
    pub(crate) fn build(dimension: Dimension, catalog: &'a [DimensionEntry]) -> Self {
        let mut entries = Vec::with_capacity(catalog.len());
        let mut positions = HashMap::with_capacity(catalog.len());

        for entry in catalog {
            if positions.contains_key(entry.name.as_str()) {
                warn!(
                    dimension = %dimension,
                    name = %entry.name,
                    id = entry.id,
                    "Duplicate catalog name, keeping first entry"
                );
                continue;
            }
            positions.insert(entry.name.as_str(), entries.len());
            entries.push(entry);
        }

        Self {
            dimension,
            entries,
            positions,
        }
    }

    pub(crate) fn entries(&self) -> &[&'a DimensionEntry] {
        &self.entries
    }

    // Unresolved tasks land in the sentinel bucket, which may itself be a
    // catalog entry if the catalog reuses the sentinel name.
    pub(crate) fn slot_of(&self, task: &Task) -> Slot {
        if let Some(name) = self.dimension.key_of(task) {
            if let Some(&position) = self.positions.get(name) {
                return Slot::Catalog(position);
            }
            debug!(
                dimension = %self.dimension,
                task_id = task.id,
                name = %name,
                "Task references a name missing from the catalog"
            );
        }

        match self.positions.get(self.dimension.sentinel()) {
            Some(&position) => Slot::Catalog(position),
            None => Slot::Sentinel,
        }
    }

    fn resolve(&self, task: &Task) -> Option<&'a DimensionEntry> {
        match self.slot_of(task) {
            Slot::Catalog(position) => Some(self.entries[position]),
            Slot::Sentinel => None,
        }
    }
}

/// Name lookups for the catalogs known to one aggregation call.
///
/// Task views resolve their category, status and priority through this
/// index, the same lookup that decides bucket membership, so a view always
/// names the bucket it sits in. A dimension without a catalog trusts the
/// task's own reference.
#[derive(Debug, Default)]
pub struct CatalogIndex<'a> {
    category: Option<BucketIndex<'a>>,
    status: Option<BucketIndex<'a>>,
    priority: Option<BucketIndex<'a>>,
}

impl<'a> CatalogIndex<'a> {
    pub fn new() -> Self {
        Self::default()
    }

    /// Index all three catalogs of `snapshot`
    pub fn from_snapshot(snapshot: &'a DashboardSnapshot) -> Self {
        Dimension::ALL
            .into_iter()
            .fold(Self::new(), |index, dimension| {
                index.with_catalog(dimension, dimension.catalog(snapshot))
            })
    }

    pub fn with_catalog(mut self, dimension: Dimension, catalog: &'a [DimensionEntry]) -> Self {
        *self.slot_mut(dimension) = Some(BucketIndex::build(dimension, catalog));
        self
    }

    pub fn has_catalog(&self, dimension: Dimension) -> bool {
        self.bucket_index(dimension).is_some()
    }

    /// The catalog entry `task` resolves to along `dimension`; `None` means
    /// the sentinel bucket.
    pub fn resolve<'t>(
        &'t self,
        dimension: Dimension,
        task: &'t Task,
    ) -> Option<&'t DimensionEntry> {
        match self.bucket_index(dimension) {
            Some(index) => index.resolve(task),
            None => dimension.entry_of(task),
        }
    }

    pub(crate) fn bucket_index(&self, dimension: Dimension) -> Option<&BucketIndex<'a>> {
        match dimension {
            Dimension::Category => self.category.as_ref(),
            Dimension::Status => self.status.as_ref(),
            Dimension::Priority => self.priority.as_ref(),
        }
    }

    fn slot_mut(&mut self, dimension: Dimension) -> &mut Option<BucketIndex<'a>> {
        match dimension {
            Dimension::Category => &mut self.category,
            Dimension::Status => &mut self.status,
            Dimension::Priority => &mut self.priority,
        }
    }
}
