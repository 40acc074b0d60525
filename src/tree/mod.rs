//! Field tree construction and annotation.

pub mod annotate;
pub mod builder;
pub mod node;

pub use annotate::{annotate, annotate_list, narrow_to_field};
pub use builder::{FieldTree, build_tree_list, flatten_order, load_relation_branch};
pub use node::FieldNode;
