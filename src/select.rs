//! Bulk-selection aggregation over the annotated top level.

use crate::tree::FieldNode;

/// Whether the bulk "add all" action should be greyed out: true iff every
/// top-level node is disabled. Vacuously true for an empty tree.
pub fn is_select_all_disabled(nodes: &[FieldNode]) -> bool {
    nodes.iter().all(|node| node.disabled)
}

/// Top-level field keys in tree order. Not recursive.
pub fn collect_all(nodes: &[FieldNode]) -> Vec<String> {
    nodes.iter().map(|node| node.field.clone()).collect()
}
