//! Search-box visibility.

use crate::schema::Field;

/// Whether the search box is worth showing for a field set.
///
/// An empty field set never shows it. Otherwise: more than ten fields, any
/// grouped field, or any relation turns it on. Checks run in that order and
/// short-circuit.
pub fn should_show_search(fields: &[Field], relations_exist: bool) -> bool {
    if fields.is_empty() {
        return false;
    }
    if fields.len() > 10 {
        return true;
    }
    if fields.iter().any(|field| field.group_key().is_some()) {
        return true;
    }
    relations_exist
}
