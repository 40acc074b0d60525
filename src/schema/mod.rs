//! Schema metadata: field and collection models plus the directory lookups
//! the tree builder and search predicate consume.

pub mod collection;
pub mod directory;
pub mod field;

pub use collection::{CollectionMeta, Relation};
pub use directory::{InMemorySchemaDirectory, SchemaDirectory, SchemaSnapshot};
pub use field::{Field, FieldMeta, FieldSchema, GROUP_SPECIAL, VERSION_KEY, group_field, version_field};
