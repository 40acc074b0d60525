//! Tree projection of schema fields.

use crate::schema::Field;

/// A lightweight tree projection of a [`Field`].
///
/// Nodes carry only what the selection layer needs to render and aggregate:
/// identity, display label, container flags, children and — after annotation —
/// the disabled state. Instances are ephemeral per rebuild.
#[derive(Clone, Debug, PartialEq)]
pub struct FieldNode {
    /// Field key within its collection
    pub field: String,
    /// Owning collection name
    pub collection: String,
    /// Display label
    pub name: String,
    /// Whether this node is a group container rather than a leaf
    pub group: bool,
    /// Whether this node is a relational reference (children load lazily)
    pub relational: bool,
    /// Ordered children; eager for groups, lazy for relations
    pub children: Vec<FieldNode>,
    /// Attached by the disabled annotator; false until annotated
    pub disabled: bool,
}

impl FieldNode {
    pub fn from_field(field: &Field) -> Self {
        Self {
            field: field.field.clone(),
            collection: field.collection.clone(),
            name: field.name.clone(),
            group: field.is_group(),
            relational: field.is_relational(),
            children: Vec::new(),
            disabled: false,
        }
    }
}
