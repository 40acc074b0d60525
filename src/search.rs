//! Query filtering over the schema field graph.
//!
//! The predicate decides which fields stay visible under a text query. Group
//! containers nest arbitrarily deep and are recursed without a depth bound
//! (the directory guarantees group nesting is acyclic). Relation traversal is
//! deliberately capped at one hop: only a relational field owned by the root
//! collection exposes its target collection's fields to the search, and a
//! relation found inside that target is never expanded further. Relation
//! graphs may contain cycles (including self-references), so the cap is what
//! keeps the walk bounded. This boundary is intentional; keep it.

use crate::schema::{Field, SchemaDirectory};

/// The recursive search filter, closed over a query string and the root
/// collection identity.
pub struct SearchPredicate<'a> {
    directory: &'a dyn SchemaDirectory,
    root_collection: &'a str,
    query: String,
    restrict_to_root: bool,
}

impl<'a> SearchPredicate<'a> {
    /// `restrict_to_root` excludes relational candidates entirely: fields of
    /// other collections and non-group alias fields are rejected before any
    /// text matching.
    pub fn new(
        directory: &'a dyn SchemaDirectory,
        root_collection: &'a str,
        query: &str,
        restrict_to_root: bool,
    ) -> Self {
        Self { directory, root_collection, query: query.to_lowercase(), restrict_to_root }
    }

    /// Whether `field` stays visible. `parent` is the immediate containing
    /// group field when the caller is walking group children; a matching
    /// group header keeps its children visible even when their own names
    /// don't match.
    pub fn matches(&self, field: &Field, parent: Option<&Field>) -> bool {
        if self.restrict_to_root
            && (field.collection != self.root_collection || (field.is_alias() && !field.is_group()))
        {
            return false;
        }

        if self.query.is_empty() {
            return true;
        }

        self.matches_self(field)
            || parent.is_some_and(|p| self.matches_self(p))
            || self.matches_descendant(field)
    }

    fn matches_self(&self, field: &Field) -> bool {
        field.name.to_lowercase().contains(&self.query)
    }

    /// Recursive descendant match. The children set of a non-relational field
    /// is its group children; a relational field owned by the root collection
    /// contributes the referenced collection's fields (the single permitted
    /// hop); a relational field owned by any other collection contributes
    /// nothing, so relation chains and cycles are never chased.
    fn matches_descendant(&self, field: &Field) -> bool {
        self.descendant_match(field, true)
    }

    /// Taking the hop consumes the allowance: the target collection's groups
    /// still recurse, but no relational field inside the target expands —
    /// not even one owned by the root, which is what keeps a relation
    /// pointing back at the root collection from re-entering itself.
    fn descendant_match(&self, field: &Field, allow_relation_hop: bool) -> bool {
        let (children, hopped) = match field.foreign_key_table() {
            None => (self.directory.group_children(&field.collection, &field.field), false),
            Some(related) if allow_relation_hop && field.collection == self.root_collection => {
                (self.directory.fields_for_collection(related), true)
            }
            Some(_) => (Vec::new(), false),
        };

        if children
            .iter()
            .any(|child| self.descendant_match(child, allow_relation_hop && !hopped))
        {
            return true;
        }

        self.matches_self(field)
    }
}
