//! Building the ordered field tree for a root collection.
//!
//! Top-level candidates are the root collection's ungrouped fields plus any
//! extra fields merged in by the caller (e.g. the synthetic `$version`
//! pseudo-field), each run through the filter predicate. Group children are
//! built eagerly — the predicate receives the group as `parent`, so a
//! matching group header keeps its children visible. Relation branches stay
//! empty until [`load_relation_branch`] fetches them on expand.

use crate::schema::{Field, SchemaDirectory};
use crate::search::SearchPredicate;
use crate::tree::node::FieldNode;

/// Build the visible field tree for `root_collection`.
pub fn build_tree_list(
    directory: &dyn SchemaDirectory,
    root_collection: &str,
    extra_fields: &[Field],
    predicate: &SearchPredicate<'_>,
) -> Vec<FieldNode> {
    let mut candidates: Vec<Field> = directory
        .fields_for_collection(root_collection)
        .into_iter()
        .filter(Field::is_top_level)
        .collect();
    candidates.extend(extra_fields.iter().cloned());

    candidates
        .iter()
        .filter(|field| predicate.matches(field, None))
        .map(|field| build_node(directory, predicate, field))
        .collect()
}

fn build_node(
    directory: &dyn SchemaDirectory,
    predicate: &SearchPredicate<'_>,
    field: &Field,
) -> FieldNode {
    let mut node = FieldNode::from_field(field);
    if node.group {
        node.children = directory
            .group_children(&field.collection, &field.field)
            .iter()
            .filter(|child| predicate.matches(child, Some(field)))
            .map(|child| build_node(directory, predicate, child))
            .collect();
    }
    node
}

/// Populate the children of the relational node identified by `key`.
///
/// Searches the tree recursively, fills the first matching relational node
/// with the referenced collection's top-level fields (groups within the
/// target expand eagerly) and returns true. A node that is already loaded is
/// left alone. Returns false when no relational node carries the key.
pub fn load_relation_branch(
    directory: &dyn SchemaDirectory,
    predicate: &SearchPredicate<'_>,
    nodes: &mut [FieldNode],
    key: &str,
) -> bool {
    for node in nodes.iter_mut() {
        if node.relational && node.field == key {
            if node.children.is_empty() {
                node.children = build_relation_children(directory, predicate, node);
                log::debug!(
                    "loaded relation branch {}.{} ({} children)",
                    node.collection,
                    node.field,
                    node.children.len()
                );
            }
            return true;
        }
        if load_relation_branch(directory, predicate, &mut node.children, key) {
            return true;
        }
    }
    false
}

fn build_relation_children(
    directory: &dyn SchemaDirectory,
    predicate: &SearchPredicate<'_>,
    node: &FieldNode,
) -> Vec<FieldNode> {
    let Some(parent_field) = directory
        .fields_for_collection(&node.collection)
        .into_iter()
        .find(|f| f.field == node.field)
    else {
        log::warn!("relation branch {}.{} has no backing field", node.collection, node.field);
        return Vec::new();
    };
    let Some(related) = parent_field.foreign_key_table() else {
        return Vec::new();
    };

    directory
        .fields_for_collection(related)
        .iter()
        .filter(|field| field.is_top_level())
        .filter(|field| predicate.matches(field, Some(&parent_field)))
        .map(|field| build_node(directory, predicate, field))
        .collect()
}

/// Flatten the tree into field keys in visible (depth-first) order.
pub fn flatten_order(nodes: &[FieldNode]) -> Vec<String> {
    fn recurse(nodes: &[FieldNode], order: &mut Vec<String>) {
        for node in nodes {
            order.push(node.field.clone());
            recurse(&node.children, order);
        }
    }

    let mut order = Vec::new();
    recurse(nodes, &mut order);
    order
}

/// A built field tree that can refresh itself and lazily load relation
/// branches against the directory it was built from.
pub struct FieldTree<'a> {
    directory: &'a dyn SchemaDirectory,
    root_collection: String,
    extra_fields: Vec<Field>,
    query: String,
    restrict_to_root: bool,
    tree_list: Vec<FieldNode>,
}

impl<'a> FieldTree<'a> {
    pub fn build(
        directory: &'a dyn SchemaDirectory,
        root_collection: impl Into<String>,
        extra_fields: Vec<Field>,
        query: impl Into<String>,
        restrict_to_root: bool,
    ) -> Self {
        let mut tree = Self {
            directory,
            root_collection: root_collection.into(),
            extra_fields,
            query: query.into(),
            restrict_to_root,
            tree_list: Vec::new(),
        };
        tree.refresh();
        tree
    }

    /// Rebuild the tree from the directory with the current query.
    pub fn refresh(&mut self) {
        let predicate = SearchPredicate::new(
            self.directory,
            &self.root_collection,
            &self.query,
            self.restrict_to_root,
        );
        self.tree_list =
            build_tree_list(self.directory, &self.root_collection, &self.extra_fields, &predicate);
    }

    /// Change the query and rebuild.
    pub fn set_query(&mut self, query: impl Into<String>) {
        self.query = query.into();
        self.refresh();
    }

    pub fn tree_list(&self) -> &[FieldNode] {
        &self.tree_list
    }

    /// Lazily populate the relation branch identified by `key`.
    pub fn load_relation_branch(&mut self, key: &str) -> bool {
        let predicate = SearchPredicate::new(
            self.directory,
            &self.root_collection,
            &self.query,
            self.restrict_to_root,
        );
        load_relation_branch(self.directory, &predicate, &mut self.tree_list, key)
    }
}
