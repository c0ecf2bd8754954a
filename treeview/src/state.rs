//! Treeview component state.

use log::debug;

use crate::all::{AllItem, AllState};
use crate::config::TreeviewConfig;
use crate::error::TreeviewError;
use crate::events::{TreeviewEvent, TreeviewEventKind, TreeviewId};
use crate::filter::{DisplayRef, FilterNode, Located, filter_forest, locate, locate_mut};
use crate::header::{AllRow, FilterInput, Header};
use crate::i18n::{DefaultTreeviewI18n, TreeviewI18n};
use crate::item::{NodePath, TreeNode, find_path, node_at, node_at_mut};
use crate::propagation;
use crate::rows::{FlatRow, visible_rows};
use crate::selection::Selection;

/// Output of the recompute pipeline, returned by every operation that can
/// change checked state.
#[derive(Debug, Clone, PartialEq)]
pub struct Refresh<V> {
    pub selection: Selection<V>,
    pub all: AllState,
}

/// A checkable tree with filtering and an "All" control.
///
/// `Treeview<V>` owns:
/// - the root forest supplied by the host
/// - the displayed forest, rebuilt from the root forest and the filter text
/// - the "All" aggregate control
/// - the last computed [`Selection`]
///
/// Every interaction runs the same pipeline to completion: propagate checked
/// state, re-derive the "All" control, recompute the selection, queue a
/// [`TreeviewEventKind::SelectedChange`] event.
///
/// Interactions address nodes by their path in the displayed forest, as
/// reported by [`Treeview::visible_rows`] or [`Treeview::display_path`].
///
/// # Example
///
/// ```
/// use treeview::{NodePath, TreeNode, Treeview};
///
/// let mut tree = Treeview::with_items(vec![TreeNode::new("Fruit", "fruit").with_children(vec![
///     TreeNode::new("Apple", "apple"),
///     TreeNode::new("Banana", "banana"),
/// ])]);
///
/// let refresh = tree.set_checked(&NodePath::from([0, 0]), true).unwrap();
/// assert_eq!(refresh.selection.checked_values(), vec!["apple"]);
/// assert!(tree.items()[0].is_indeterminate());
/// ```
#[derive(Debug)]
pub struct Treeview<V> {
    /// Unique identifier.
    id: TreeviewId,
    config: TreeviewConfig,
    i18n: Box<dyn TreeviewI18n<V>>,
    /// Root forest.
    items: Vec<TreeNode<V>>,
    filter_text: String,
    /// Displayed forest (rebuilt on filter or items change).
    filter_items: Vec<FilterNode<V>>,
    all: AllItem,
    selection: Selection<V>,
    /// Events not yet taken by the host.
    events: Vec<TreeviewEvent<V>>,
}

impl<V: Clone> Default for Treeview<V> {
    fn default() -> Self {
        Self::new()
    }
}

impl<V: Clone> Treeview<V> {
    /// Create an empty treeview with the default config.
    pub fn new() -> Self {
        Self {
            id: TreeviewId::new(),
            config: TreeviewConfig::default(),
            i18n: Box::new(DefaultTreeviewI18n),
            items: Vec::new(),
            filter_text: String::new(),
            filter_items: Vec::new(),
            all: AllItem::new(),
            selection: Selection::default(),
            events: Vec::new(),
        }
    }

    /// Create a treeview over the given root forest.
    pub fn with_items(items: Vec<TreeNode<V>>) -> Self {
        let mut tree = Self::new();
        tree.set_items(items);
        tree
    }

    pub fn with_config(mut self, config: TreeviewConfig) -> Self {
        self.config = config;
        self
    }

    /// Use a different text provider.
    pub fn with_i18n(mut self, i18n: impl TreeviewI18n<V> + 'static) -> Self {
        self.i18n = Box::new(i18n);
        self
    }

    pub fn id(&self) -> TreeviewId {
        self.id
    }

    // -------------------------------------------------------------------------
    // Read methods
    // -------------------------------------------------------------------------

    pub fn config(&self) -> &TreeviewConfig {
        &self.config
    }

    /// Root forest.
    pub fn items(&self) -> &[TreeNode<V>] {
        &self.items
    }

    /// Give the root forest back to the host.
    pub fn into_items(self) -> Vec<TreeNode<V>> {
        self.items
    }

    pub fn filter_text(&self) -> &str {
        &self.filter_text
    }

    /// Displayed forest.
    pub fn filter_items(&self) -> &[FilterNode<V>] {
        &self.filter_items
    }

    /// Check if anything is displayed.
    pub fn has_filter_items(&self) -> bool {
        !self.filter_items.is_empty()
    }

    pub fn selection(&self) -> &Selection<V> {
        &self.selection
    }

    pub fn all_state(&self) -> AllState {
        self.all.state(&self.filter_items, &self.items)
    }

    pub fn max_height(&self) -> u32 {
        self.config.max_height
    }

    /// Summary text for the current selection.
    pub fn text(&self) -> String {
        self.i18n.text(&self.selection)
    }

    /// Text shown instead of the items when nothing is displayed.
    pub fn no_items_text(&self) -> Option<String> {
        (!self.has_filter_items()).then(|| self.i18n.filter_no_items_found_text())
    }

    pub fn header(&self) -> Header {
        let filter = self.config.has_filter.then(|| FilterInput {
            placeholder: self.i18n.filter_placeholder(),
            text: self.filter_text.clone(),
        });
        let has_items = self.has_filter_items();
        let all_row = (has_items
            && (self.config.has_all_check_box || self.config.has_collapse_expand))
            .then(|| {
                let state = self.all_state();
                AllRow {
                    state,
                    label: self
                        .config
                        .has_all_check_box
                        .then(|| self.i18n.all_checkbox_text()),
                    collapse_expand_tooltip: self
                        .config
                        .has_collapse_expand
                        .then(|| self.i18n.tooltip_collapse_expand_text(state.collapsed)),
                }
            });
        Header {
            filter,
            all_row,
            divider: has_items && self.config.has_divider,
        }
    }

    /// Rows of the displayed forest that are not hidden by a collapsed parent.
    pub fn visible_rows(&self) -> Vec<FlatRow> {
        visible_rows(&self.filter_items, &self.items)
    }

    /// Displayed node at `path`.
    pub fn node(&self, path: &NodePath) -> Option<DisplayRef<'_, V>> {
        locate(&self.filter_items, &self.items, path.indices())
    }

    /// Drain queued output events.
    pub fn take_events(&mut self) -> Vec<TreeviewEvent<V>> {
        std::mem::take(&mut self.events)
    }

    // -------------------------------------------------------------------------
    // Host input
    // -------------------------------------------------------------------------

    /// Replace the root forest. The filter text is kept.
    pub fn set_items(&mut self, items: Vec<TreeNode<V>>) -> Refresh<V> {
        debug!("{}: items replaced ({} top-level)", self.id, items.len());
        self.items = items;
        self.update_filter_items();
        self.raise_selected_change()
    }

    /// Replace the config; `None` restores the default.
    pub fn set_config(&mut self, config: Option<TreeviewConfig>) {
        self.config = config.unwrap_or_default();
    }

    // -------------------------------------------------------------------------
    // User interactions
    // -------------------------------------------------------------------------

    /// Change the filter text and rebuild the displayed forest.
    pub fn set_filter_text(&mut self, text: impl Into<String>) -> Refresh<V> {
        self.filter_text = text.into();
        debug!("{}: filter text {:?}", self.id, self.filter_text);
        self.push_event(TreeviewEventKind::FilterChange(self.filter_text.clone()));
        self.update_filter_items();
        self.raise_selected_change()
    }

    /// Set the checked state of a displayed node and propagate it.
    pub fn set_checked(
        &mut self,
        path: &NodePath,
        checked: bool,
    ) -> Result<Refresh<V>, TreeviewError> {
        propagation::set_checked(
            &mut self.filter_items,
            &mut self.items,
            path,
            checked,
            self.config.decouple_child_from_parent,
        )?;
        self.update_all();
        Ok(self.raise_selected_change())
    }

    /// Flip the checked state of a displayed node.
    pub fn toggle_checked(&mut self, path: &NodePath) -> Result<Refresh<V>, TreeviewError> {
        let checked = self
            .node(path)
            .ok_or_else(|| TreeviewError::NodeNotFound { path: path.clone() })?
            .is_checked();
        self.set_checked(path, !checked)
    }

    /// Flip the collapsed state of a displayed node. Returns the new state.
    pub fn toggle_collapsed(&mut self, path: &NodePath) -> Result<bool, TreeviewError> {
        let not_found = || TreeviewError::NodeNotFound { path: path.clone() };
        let located =
            locate_mut(&mut self.filter_items, &self.items, path.indices()).ok_or_else(not_found)?;
        let collapsed = match located {
            Located::Original(origin) => {
                let node = node_at_mut(&mut self.items, &origin).ok_or_else(not_found)?;
                node.set_collapsed(!node.is_collapsed());
                node.is_collapsed()
            }
            Located::Overlay(overlay) => {
                overlay.set_collapsed(!overlay.is_collapsed());
                overlay.is_collapsed()
            }
        };
        debug!("{}: {} collapsed={}", self.id, path, collapsed);
        Ok(collapsed)
    }

    /// Check or uncheck every displayed node through the "All" control.
    pub fn set_all_checked(&mut self, checked: bool) -> Refresh<V> {
        debug!("{}: all checked={}", self.id, checked);
        self.all.set_checked(&mut self.filter_items, &mut self.items, checked);
        self.raise_selected_change()
    }

    pub fn toggle_all_checked(&mut self) -> Refresh<V> {
        let checked = !self.all.is_checked();
        self.set_all_checked(checked)
    }

    /// Collapse or expand every displayed node through the "All" control.
    pub fn toggle_all_collapsed(&mut self) -> AllState {
        self.all.toggle_collapsed(&mut self.filter_items, &mut self.items);
        debug!("{}: all collapsed={}", self.id, self.all.is_collapsed());
        self.all_state()
    }

    // -------------------------------------------------------------------------
    // Lookup
    // -------------------------------------------------------------------------

    /// Original node carrying `value`.
    pub fn find(&self, value: &V) -> Option<&TreeNode<V>>
    where
        V: PartialEq,
    {
        find_path(&self.items, value).and_then(|path| node_at(&self.items, &path))
    }

    /// Path of the first displayed node (pre-order) carrying `value`.
    pub fn display_path(&self, value: &V) -> Option<NodePath>
    where
        V: PartialEq,
    {
        self.filter_items.iter().enumerate().find_map(|(i, node)| {
            node.resolve(&self.items)
                .and_then(|node| find_displayed(node, &self.items, NodePath::root(i), value))
        })
    }

    // -------------------------------------------------------------------------
    // Pipeline
    // -------------------------------------------------------------------------

    fn update_filter_items(&mut self) {
        self.filter_items = filter_forest(&self.items, &self.filter_text);
        self.update_all();
    }

    fn update_all(&mut self) {
        self.all.derive_checked(&self.filter_items, &self.items);
        self.all.derive_collapsed(&self.filter_items, &self.items);
    }

    fn raise_selected_change(&mut self) -> Refresh<V> {
        self.selection = Selection::collect(&self.items);
        debug!(
            "{}: selection {} checked, {} unchecked",
            self.id,
            self.selection.checked.len(),
            self.selection.unchecked.len()
        );
        self.push_event(TreeviewEventKind::SelectedChange(
            self.selection.checked_values(),
        ));
        Refresh {
            selection: self.selection.clone(),
            all: self.all_state(),
        }
    }

    fn push_event(&mut self, kind: TreeviewEventKind<V>) {
        self.events.push(TreeviewEvent::new(kind, self.id));
    }
}

fn find_displayed<'a, V: PartialEq>(
    node: DisplayRef<'a, V>,
    items: &'a [TreeNode<V>],
    path: NodePath,
    value: &V,
) -> Option<NodePath> {
    if node.value() == value {
        return Some(path);
    }
    node.children(items)
        .into_iter()
        .enumerate()
        .find_map(|(i, child)| find_displayed(child, items, path.child(i), value))
}
