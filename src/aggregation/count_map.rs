use serde::ser::SerializeMap;
use serde::{Serialize, Serializer};

/// Ordered bucket name → task count.
///
/// Insertion order is preserved, so a map produced by the engine lists
/// catalog buckets first and the sentinel last. Serializes as a JSON
/// object in that order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CountMap {
    entries: Vec<(String, usize)>,
}

impl CountMap {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add one to `name`, appending it with a count of 1 if unseen
    pub fn increment(&mut self, name: &str) {
        match self.position(name) {
            Some(index) => self.entries[index].1 += 1,
            None => self.entries.push((name.to_string(), 1)),
        }
    }

    /// Set the count for `name`, keeping its position if already present
    pub fn insert(&mut self, name: impl Into<String>, count: usize) {
        let name = name.into();
        match self.position(&name) {
            Some(index) => self.entries[index].1 = count,
            None => self.entries.push((name, count)),
        }
    }

    pub fn get(&self, name: &str) -> Option<usize> {
        self.position(name).map(|index| self.entries[index].1)
    }

    pub fn contains(&self, name: &str) -> bool {
        self.position(name).is_some()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, usize)> + '_ {
        self.entries
            .iter()
            .map(|(name, count)| (name.as_str(), *count))
    }

    pub fn names(&self) -> impl Iterator<Item = &str> + '_ {
        self.entries.iter().map(|(name, _)| name.as_str())
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Sum of all bucket counts
    pub fn total(&self) -> usize {
        self.entries.iter().map(|(_, count)| count).sum()
    }

    fn position(&self, name: &str) -> Option<usize> {
        self.entries.iter().position(|(existing, _)| existing == name)
    }
}

/// Repeated names are summed.
impl FromIterator<(String, usize)> for CountMap {
    fn from_iter<I: IntoIterator<Item = (String, usize)>>(iter: I) -> Self {
        let mut map = CountMap::new();
        for (name, count) in iter {
            let current = map.get(&name).unwrap_or(0);
            map.insert(name, current + count);
        }
        map
    }
}

impl Serialize for CountMap {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        let mut map = serializer.serialize_map(Some(self.entries.len()))?;
        for (name, count) in &self.entries {
            map.serialize_entry(name, count)?;
        }
        map.end()
    }
}
