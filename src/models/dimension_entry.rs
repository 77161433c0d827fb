use serde::{Deserialize, Serialize};

/// A named, colored bucket in one of the three dimension catalogs
/// (category, status or priority).
///
/// The display `name` is the grouping key and is expected to be unique
/// within its catalog. `color` is a `#RRGGBB` string as stored by the
/// catalog editor; it is not validated here.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct DimensionEntry {
    pub id: i64,
    pub name: String,
    pub color: String,
}

impl DimensionEntry {
    pub fn new(id: i64, name: impl Into<String>, color: impl Into<String>) -> Self {
        Self {
            id,
            name: name.into(),
            color: color.into(),
        }
    }
}
