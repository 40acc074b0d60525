//! Field schema definitions.

use serde::{Deserialize, Serialize};

/// Key of the synthetic current-version pseudo-field injected when a
/// collection has versioning enabled.
pub const VERSION_KEY: &str = "$version";

/// Special tag carried by group container fields.
pub const GROUP_SPECIAL: &str = "group";

/// A field definition within a collection schema.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Field {
    /// Owning collection name
    pub collection: String,
    /// Field key, unique within its collection
    pub field: String,
    /// Display label
    pub name: String,
    /// Field type (e.g. "string", "integer", "alias")
    #[serde(rename = "type")]
    pub field_type: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub schema: Option<FieldSchema>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub meta: Option<FieldMeta>,
}

/// Column-level schema attributes.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct FieldSchema {
    /// Present iff the field is a relational (foreign-key) reference
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub foreign_key_table: Option<String>,
    #[serde(default)]
    pub required: bool,
}

/// Presentation-level field metadata.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct FieldMeta {
    /// Key of the group field containing this field, or None if top-level
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub group: Option<String>,
    /// Special tags; a group container carries "group"
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub special: Vec<String>,
    #[serde(default)]
    pub readonly: bool,
}

impl Field {
    /// Create a plain leaf field.
    pub fn new(
        collection: impl Into<String>,
        field: impl Into<String>,
        name: impl Into<String>,
        field_type: impl Into<String>,
    ) -> Self {
        Self {
            collection: collection.into(),
            field: field.into(),
            name: name.into(),
            field_type: field_type.into(),
            schema: None,
            meta: None,
        }
    }

    /// Place this field inside a group container.
    pub fn in_group(mut self, group: impl Into<String>) -> Self {
        self.meta.get_or_insert_with(FieldMeta::default).group = Some(group.into());
        self
    }

    /// Mark this field as a relational reference to another collection.
    pub fn with_foreign_key(mut self, table: impl Into<String>) -> Self {
        self.schema.get_or_insert_with(FieldSchema::default).foreign_key_table =
            Some(table.into());
        self
    }

    /// Attach a special tag.
    pub fn with_special(mut self, tag: impl Into<String>) -> Self {
        self.meta.get_or_insert_with(FieldMeta::default).special.push(tag.into());
        self
    }

    /// Mark this field read-only.
    pub fn readonly(mut self) -> Self {
        self.meta.get_or_insert_with(FieldMeta::default).readonly = true;
        self
    }

    /// The referenced collection name, if this field is relational.
    pub fn foreign_key_table(&self) -> Option<&str> {
        self.schema.as_ref().and_then(|s| s.foreign_key_table.as_deref())
    }

    /// Whether this field is a relational reference.
    pub fn is_relational(&self) -> bool {
        self.foreign_key_table().is_some()
    }

    /// Whether this field is an alias-typed field.
    pub fn is_alias(&self) -> bool {
        self.field_type == "alias"
    }

    /// Whether this field is a group container (alias type with the "group"
    /// special tag).
    pub fn is_group(&self) -> bool {
        self.is_alias()
            && self
                .meta
                .as_ref()
                .is_some_and(|m| m.special.iter().any(|s| s == GROUP_SPECIAL))
    }

    /// Key of the containing group, if any.
    pub fn group_key(&self) -> Option<&str> {
        self.meta.as_ref().and_then(|m| m.group.as_deref())
    }

    /// Whether this field sits at the top level of its collection.
    pub fn is_top_level(&self) -> bool {
        self.group_key().is_none()
    }
}

/// Build a group container field.
pub fn group_field(
    collection: impl Into<String>,
    field: impl Into<String>,
    name: impl Into<String>,
) -> Field {
    Field::new(collection, field, name, "alias").with_special(GROUP_SPECIAL)
}

/// The synthetic current-version pseudo-field for a versioned collection.
///
/// Always top-level (no group), read-only and not required, so the disabled
/// annotator only ever greys it out through the explicit-exclusion list.
pub fn version_field(collection: impl Into<String>) -> Field {
    Field::new(collection, VERSION_KEY, "Version", "string").readonly()
}
