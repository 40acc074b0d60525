//! Disabled-state annotation.
//!
//! Each node is decided purely from its own data: group containers and
//! explicitly excluded keys are greyed out. Nothing is inherited from an
//! ancestor and nothing propagates to descendants, so a leaf inside a
//! disabled group header stays selectable.

use std::collections::HashSet;

use crate::tree::node::FieldNode;

/// Annotate a single node and its subtree, producing a new tree.
///
/// `disabled = node.group || disabled_keys.contains(node.field)`, applied
/// independently to every node. Idempotent.
pub fn annotate(node: &FieldNode, disabled_keys: &HashSet<String>) -> FieldNode {
    FieldNode {
        disabled: node.group || disabled_keys.contains(&node.field),
        children: annotate_list(&node.children, disabled_keys),
        ..node.clone()
    }
}

/// Annotate an ordered node list.
pub fn annotate_list(nodes: &[FieldNode], disabled_keys: &HashSet<String>) -> Vec<FieldNode> {
    nodes.iter().map(|node| annotate(node, disabled_keys)).collect()
}

/// Narrow a top-level node list to the node(s) matching a single field key.
///
/// A view-layer concern applied after annotation; descendants are untouched.
pub fn narrow_to_field(nodes: Vec<FieldNode>, key: &str) -> Vec<FieldNode> {
    nodes.into_iter().filter(|node| node.field == key).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn node(field: &str, group: bool, children: Vec<FieldNode>) -> FieldNode {
        FieldNode {
            field: field.to_string(),
            collection: "articles".to_string(),
            name: field.to_string(),
            group,
            relational: false,
            children,
            disabled: false,
        }
    }

    #[test]
    fn group_nodes_are_disabled_but_their_children_are_not() {
        let tree = node("meta", true, vec![node("author_name", false, vec![])]);
        let annotated = annotate(&tree, &HashSet::new());
        assert!(annotated.disabled);
        assert!(!annotated.children[0].disabled);
    }

    #[test]
    fn explicit_exclusion_applies_at_any_depth() {
        let keys: HashSet<String> = ["author_name".to_string()].into();
        let tree = node("meta", true, vec![node("author_name", false, vec![])]);
        let annotated = annotate(&tree, &keys);
        assert!(annotated.children[0].disabled);
    }

    #[test]
    fn annotation_is_idempotent_and_leaves_input_untouched() {
        let keys: HashSet<String> = ["title".to_string()].into();
        let tree = node("meta", true, vec![node("title", false, vec![])]);
        let once = annotate(&tree, &keys);
        let twice = annotate(&once, &keys);
        assert_eq!(once, twice);
        assert!(!tree.disabled);
    }
}
