//! A sample schema graph shared across the integration tests.
//!
//! Root collection `articles` (versioning enabled) with a nested group chain
//! (`meta` → `seo`), a relational field into `categories`, and a plain alias
//! field. `categories` carries its own group, a self-referencing relation and
//! a relation into `taxonomies` — the latter is reachable only two hops from
//! `articles`, so nothing in it may ever match an `articles` search.

#![allow(dead_code)]

use std::sync::Arc;

use fieldpick::schema::{
    CollectionMeta, Field, InMemorySchemaDirectory, Relation, SchemaDirectory, SchemaSnapshot,
    group_field,
};

pub fn sample_snapshot() -> SchemaSnapshot {
    SchemaSnapshot {
        collections: vec![
            CollectionMeta::new("articles").with_versioning(),
            CollectionMeta::new("categories"),
            CollectionMeta::new("taxonomies"),
        ],
        fields: vec![
            // articles
            Field::new("articles", "id", "ID", "integer"),
            Field::new("articles", "title", "Title", "string"),
            Field::new("articles", "status", "Status", "string"),
            group_field("articles", "meta", "Meta"),
            Field::new("articles", "author_name", "Author Name", "string").in_group("meta"),
            group_field("articles", "seo", "SEO").in_group("meta"),
            Field::new("articles", "seo_description", "Search Description", "text")
                .in_group("seo"),
            Field::new("articles", "category", "Category", "integer")
                .with_foreign_key("categories"),
            Field::new("articles", "translations", "Translations", "alias"),
            // categories
            Field::new("categories", "id", "ID", "integer"),
            Field::new("categories", "label", "Label", "string"),
            group_field("categories", "details", "Details"),
            Field::new("categories", "internal_notes", "Internal Notes", "text")
                .in_group("details"),
            Field::new("categories", "parent", "Parent Category", "integer")
                .with_foreign_key("categories"),
            Field::new("categories", "taxonomy", "Taxonomy", "integer")
                .with_foreign_key("taxonomies"),
            // taxonomies
            Field::new("taxonomies", "id", "ID", "integer"),
            Field::new("taxonomies", "code", "Zebra Code", "string"),
        ],
        relations: vec![
            Relation::new("articles", "category", "categories"),
            Relation::new("categories", "parent", "categories"),
            Relation::new("categories", "taxonomy", "taxonomies"),
        ],
    }
}

pub fn sample_directory() -> InMemorySchemaDirectory {
    InMemorySchemaDirectory::from_snapshot(sample_snapshot())
}

pub fn shared_directory() -> Arc<InMemorySchemaDirectory> {
    Arc::new(sample_directory())
}

/// Look up a field definition from the sample schema.
pub fn field(directory: &InMemorySchemaDirectory, collection: &str, key: &str) -> Field {
    directory
        .fields_for_collection(collection)
        .into_iter()
        .find(|f| f.field == key)
        .unwrap_or_else(|| panic!("fixture field {collection}.{key} missing"))
}
