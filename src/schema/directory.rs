//! Read-only schema metadata lookups.
//!
//! The directory is the single source the tree builder and search predicate
//! consult. Unknown collection names yield empty sequences rather than
//! errors; all schema inputs are treated as best-effort snapshots.

use std::collections::HashMap;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::Result;
use crate::schema::collection::{CollectionMeta, Relation};
use crate::schema::field::Field;

/// Read-only lookup of schema metadata by collection name.
pub trait SchemaDirectory {
    /// All fields of a collection, in schema order. Empty for unknown names.
    fn fields_for_collection(&self, collection: &str) -> Vec<Field>;

    /// Direct children of a group field within a collection.
    fn group_children(&self, collection: &str, group_key: &str) -> Vec<Field> {
        self.fields_for_collection(collection)
            .into_iter()
            .filter(|f| f.group_key() == Some(group_key))
            .collect()
    }

    /// Relational edges originating from a collection. Existence check only.
    fn relations_for_collection(&self, collection: &str) -> Vec<Relation>;

    /// Collection-level metadata, if the collection is known.
    fn collection(&self, collection: &str) -> Option<CollectionMeta>;
}

/// A serializable bundle of schema metadata.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct SchemaSnapshot {
    #[serde(default)]
    pub collections: Vec<CollectionMeta>,
    #[serde(default)]
    pub fields: Vec<Field>,
    #[serde(default)]
    pub relations: Vec<Relation>,
}

impl SchemaSnapshot {
    pub fn from_json_str(data: &str) -> Result<Self> {
        Ok(serde_json::from_str(data)?)
    }

    pub fn to_json_pretty(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }
}

/// In-memory [`SchemaDirectory`] built from a [`SchemaSnapshot`].
///
/// Field order within a collection is the snapshot order.
#[derive(Clone, Debug, Default)]
pub struct InMemorySchemaDirectory {
    fields: HashMap<String, Vec<Field>>,
    relations: HashMap<String, Vec<Relation>>,
    collections: HashMap<String, CollectionMeta>,
}

impl InMemorySchemaDirectory {
    pub fn from_snapshot(snapshot: SchemaSnapshot) -> Self {
        let mut directory = Self::default();
        for meta in snapshot.collections {
            directory.collections.insert(meta.collection.clone(), meta);
        }
        for field in snapshot.fields {
            directory.fields.entry(field.collection.clone()).or_default().push(field);
        }
        for relation in snapshot.relations {
            directory.relations.entry(relation.collection.clone()).or_default().push(relation);
        }
        directory
    }

    pub fn from_json_str(data: &str) -> Result<Self> {
        Ok(Self::from_snapshot(SchemaSnapshot::from_json_str(data)?))
    }

    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let data = std::fs::read_to_string(path)?;
        Self::from_json_str(&data)
    }
}

impl SchemaDirectory for InMemorySchemaDirectory {
    fn fields_for_collection(&self, collection: &str) -> Vec<Field> {
        self.fields.get(collection).cloned().unwrap_or_default()
    }

    fn relations_for_collection(&self, collection: &str) -> Vec<Relation> {
        self.relations.get(collection).cloned().unwrap_or_default()
    }

    fn collection(&self, collection: &str) -> Option<CollectionMeta> {
        self.collections.get(collection).cloned()
    }
}
