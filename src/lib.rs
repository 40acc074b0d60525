//! fieldpick — headless field-selection core for schema-driven collection
//! browsers.
//!
//! Given a schema directory (collections, fields with nested groups,
//! foreign-key relations), the crate answers which fields stay visible under
//! a text query, annotates the resulting tree with disabled state, and
//! aggregates the bulk "add all" action. Groups are searched at any nesting
//! depth; relations are searched exactly one hop away from the root
//! collection and never chased further, so relation cycles stay bounded.
//!
//! The [`picker::FieldPicker`] controller ties the pieces together behind a
//! small configuration surface and a single `Add` event; everything beneath
//! it is a pure function over in-memory schema snapshots.

pub mod error;
pub mod picker;
pub mod schema;
pub mod search;
pub mod select;
pub mod tree;
pub mod visibility;

pub use error::{Error, Result};
pub use picker::{FieldPicker, PickerEvent, PickerOptions};
pub use schema::{
    CollectionMeta, Field, FieldMeta, FieldSchema, InMemorySchemaDirectory, Relation,
    SchemaDirectory, SchemaSnapshot,
};
pub use search::SearchPredicate;
pub use tree::{FieldNode, FieldTree};
