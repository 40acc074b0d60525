//! The field-picker controller.
//!
//! Owns the configuration surface, the debounced query state and the rebuilt
//! tree, and emits the `Add` event for single and bulk selection. Rendering
//! is someone else's job: callers read [`FieldPicker::tree_list`] and wire
//! the emitted events into their UI.

use std::collections::HashSet;
use std::sync::Arc;
use std::sync::atomic::{AtomicU64, Ordering};
use std::time::Duration;

use parking_lot::Mutex;

use crate::schema::{Field, SchemaDirectory, version_field};
use crate::search::SearchPredicate;
use crate::select::{collect_all, is_select_all_disabled};
use crate::tree::{FieldNode, annotate_list, build_tree_list, load_relation_branch, narrow_to_field};
use crate::visibility::should_show_search;

/// Default query debounce window.
pub const DEBOUNCE: Duration = Duration::from_millis(400);

/// Configuration surface for a [`FieldPicker`].
#[derive(Clone, Debug)]
pub struct PickerOptions {
    /// The root collection whose fields are being picked
    pub root_collection: String,
    /// Exclude relational candidates entirely: fields of other collections
    /// and non-group alias fields are rejected before any text matching
    pub restrict_to_root_collection_fields: bool,
    /// Narrow the result to exactly this field key
    pub single_field_filter: Option<String>,
    /// Keys greyed out by the disabled annotator in addition to group headers
    pub disabled_keys: HashSet<String>,
    /// Whether the bulk "add all" action is offered
    pub allow_bulk_select: bool,
    /// Query debounce window
    pub debounce: Duration,
}

impl PickerOptions {
    pub fn new(root_collection: impl Into<String>) -> Self {
        Self {
            root_collection: root_collection.into(),
            restrict_to_root_collection_fields: false,
            single_field_filter: None,
            disabled_keys: HashSet::new(),
            allow_bulk_select: false,
            debounce: DEBOUNCE,
        }
    }

    pub fn restrict_to_root_collection_fields(mut self) -> Self {
        self.restrict_to_root_collection_fields = true;
        self
    }

    pub fn single_field(mut self, key: impl Into<String>) -> Self {
        self.single_field_filter = Some(key.into());
        self
    }

    pub fn disable_key(mut self, key: impl Into<String>) -> Self {
        self.disabled_keys.insert(key.into());
        self
    }

    pub fn allow_bulk_select(mut self) -> Self {
        self.allow_bulk_select = true;
        self
    }

    pub fn debounce(mut self, window: Duration) -> Self {
        self.debounce = window;
        self
    }
}

/// Events emitted by [`FieldPicker`].
#[derive(Clone, Debug, PartialEq)]
pub enum PickerEvent {
    /// One or more field keys were chosen; a single key for an individual
    /// selection, the full top-level key list for "add all".
    Add { fields: Vec<String> },
}

type EventHandler = Box<dyn Fn(&PickerEvent) + Send + Sync>;

struct PickerState {
    query: Mutex<String>,
    tree: Mutex<Vec<FieldNode>>,
    generation: AtomicU64,
}

/// Headless field-selection controller over a schema directory.
pub struct FieldPicker {
    directory: Arc<dyn SchemaDirectory + Send + Sync>,
    options: PickerOptions,
    state: Arc<PickerState>,
    handlers: Mutex<Vec<EventHandler>>,
}

impl FieldPicker {
    pub fn new(directory: Arc<dyn SchemaDirectory + Send + Sync>, options: PickerOptions) -> Self {
        let picker = Self {
            directory,
            options,
            state: Arc::new(PickerState {
                query: Mutex::new(String::new()),
                tree: Mutex::new(Vec::new()),
                generation: AtomicU64::new(0),
            }),
            handlers: Mutex::new(Vec::new()),
        };
        picker.rebuild_now();
        picker
    }

    /// Register an event handler.
    pub fn subscribe(&self, handler: impl Fn(&PickerEvent) + Send + Sync + 'static) {
        self.handlers.lock().push(Box::new(handler));
    }

    fn emit(&self, event: &PickerEvent) {
        for handler in self.handlers.lock().iter() {
            handler(event);
        }
    }

    /// Extra top-level candidates merged before tree construction.
    fn extra_fields(directory: &dyn SchemaDirectory, root_collection: &str) -> Vec<Field> {
        if directory.collection(root_collection).is_some_and(|meta| meta.versioning) {
            vec![version_field(root_collection)]
        } else {
            Vec::new()
        }
    }

    fn rebuild(
        directory: &dyn SchemaDirectory,
        options: &PickerOptions,
        query: &str,
    ) -> Vec<FieldNode> {
        let extra = Self::extra_fields(directory, &options.root_collection);
        let predicate = SearchPredicate::new(
            directory,
            &options.root_collection,
            query,
            options.restrict_to_root_collection_fields,
        );
        build_tree_list(directory, &options.root_collection, &extra, &predicate)
    }

    /// Rebuild the tree synchronously with the current query.
    pub fn rebuild_now(&self) {
        let query = self.state.query.lock().clone();
        let tree = Self::rebuild(&*self.directory, &self.options, &query);
        log::debug!(
            "rebuilt field tree for {} ({} top-level nodes, query {query:?})",
            self.options.root_collection,
            tree.len()
        );
        *self.state.tree.lock() = tree;
    }

    /// Change the query and rebuild after the debounce window.
    ///
    /// Last write wins: a newer query bumps the generation counter, so a
    /// pending rebuild whose generation has gone stale returns without
    /// touching the tree.
    pub fn set_search(&self, query: impl Into<String>) {
        let query = query.into();
        *self.state.query.lock() = query.clone();
        let generation = self.state.generation.fetch_add(1, Ordering::SeqCst) + 1;

        let state = Arc::clone(&self.state);
        let directory = Arc::clone(&self.directory);
        let options = self.options.clone();
        let window = self.options.debounce;
        std::thread::spawn(move || {
            std::thread::sleep(window);
            if state.generation.load(Ordering::SeqCst) != generation {
                return;
            }
            let tree = Self::rebuild(&*directory, &options, &query);
            log::debug!(
                "rebuilt field tree for {} ({} top-level nodes, query {query:?})",
                options.root_collection,
                tree.len()
            );
            *state.tree.lock() = tree;
        });
    }

    /// Change the query and rebuild immediately, superseding any pending
    /// debounced rebuild.
    pub fn set_search_now(&self, query: impl Into<String>) {
        *self.state.query.lock() = query.into();
        self.state.generation.fetch_add(1, Ordering::SeqCst);
        self.rebuild_now();
    }

    pub fn search(&self) -> String {
        self.state.query.lock().clone()
    }

    /// The annotated (and, when configured, single-field-narrowed) tree.
    pub fn tree_list(&self) -> Vec<FieldNode> {
        let annotated = annotate_list(&self.state.tree.lock(), &self.options.disabled_keys);
        match &self.options.single_field_filter {
            Some(key) => narrow_to_field(annotated, key),
            None => annotated,
        }
    }

    /// Lazily populate the relation branch identified by `key`.
    pub fn load_relation_branch(&self, key: &str) -> bool {
        let query = self.state.query.lock().clone();
        let predicate = SearchPredicate::new(
            &*self.directory,
            &self.options.root_collection,
            &query,
            self.options.restrict_to_root_collection_fields,
        );
        load_relation_branch(&*self.directory, &predicate, &mut self.state.tree.lock(), key)
    }

    /// Whether the search box is worth showing for the root collection.
    pub fn should_show_search(&self) -> bool {
        let fields = self.directory.fields_for_collection(&self.options.root_collection);
        let relations_exist =
            !self.directory.relations_for_collection(&self.options.root_collection).is_empty();
        should_show_search(&fields, relations_exist)
    }

    /// Whether the bulk action should be greyed out.
    pub fn is_select_all_disabled(&self) -> bool {
        is_select_all_disabled(&self.tree_list())
    }

    /// Emit a single-key selection.
    pub fn add_field(&self, key: impl Into<String>) {
        self.emit(&PickerEvent::Add { fields: vec![key.into()] });
    }

    /// Emit the full top-level key list. Returns whether the event fired:
    /// bulk selection must be enabled and at least one top-level node must be
    /// selectable.
    pub fn add_all(&self) -> bool {
        if !self.options.allow_bulk_select {
            return false;
        }
        let tree = self.tree_list();
        if is_select_all_disabled(&tree) {
            return false;
        }
        self.emit(&PickerEvent::Add { fields: collect_all(&tree) });
        true
    }
}
