//! Collection-level schema metadata.

use serde::{Deserialize, Serialize};

/// Metadata for a single collection.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct CollectionMeta {
    pub collection: String,
    /// When set, the synthetic `$version` pseudo-field is merged into the
    /// collection's top-level candidates before tree construction.
    #[serde(default)]
    pub versioning: bool,
}

impl CollectionMeta {
    pub fn new(collection: impl Into<String>) -> Self {
        Self { collection: collection.into(), versioning: false }
    }

    pub fn with_versioning(mut self) -> Self {
        self.versioning = true;
        self
    }
}

/// A relational edge from one collection to another via a foreign-key field.
///
/// Only consulted for the search-box visibility existence check; the search
/// predicate reasons through `FieldSchema::foreign_key_table` instead.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Relation {
    pub collection: String,
    pub field: String,
    pub related_collection: String,
}

impl Relation {
    pub fn new(
        collection: impl Into<String>,
        field: impl Into<String>,
        related_collection: impl Into<String>,
    ) -> Self {
        Self {
            collection: collection.into(),
            field: field.into(),
            related_collection: related_collection.into(),
        }
    }
}
