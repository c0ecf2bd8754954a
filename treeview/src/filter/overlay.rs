//! Displayed nodes: originals referenced by path, or overlays of them.

use log::{trace, warn};

use crate::item::{NodePath, TreeNode, node_at, node_at_mut};
use crate::propagation::{CheckState, Consensus};

/// A top-level or nested entry of the displayed forest.
#[derive(Debug, Clone, PartialEq)]
pub enum FilterNode<V> {
    /// An original node shown unchanged, together with its whole subtree.
    Plain(NodePath),
    /// A pruned copy of an original node that writes its checked state back.
    Overlay(OverlayNode<V>),
}

/// A filtered copy of an original node.
///
/// Only the children that matched the filter (directly or through their own
/// descendants) are attached. Checked changes made here are reconciled into
/// the original through [`OverlayNode::write_back`].
#[derive(Debug, Clone, PartialEq)]
pub struct OverlayNode<V> {
    origin: NodePath,
    text: String,
    value: V,
    disabled: bool,
    checked: bool,
    collapsed: bool,
    children: Vec<FilterNode<V>>,
}

impl<V: Clone> OverlayNode<V> {
    /// Wrap `node`, attaching the surviving `children`. Overlays start expanded
    /// so matches are visible.
    pub fn wrap(node: &TreeNode<V>, origin: NodePath, children: Vec<FilterNode<V>>) -> Self {
        Self {
            origin,
            text: node.text().to_string(),
            value: node.value().clone(),
            disabled: node.is_disabled(),
            checked: node.is_checked(),
            collapsed: false,
            children,
        }
    }
}

impl<V> OverlayNode<V> {
    /// Path of the original node in the root forest.
    pub fn origin(&self) -> &NodePath {
        &self.origin
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn value(&self) -> &V {
        &self.value
    }

    pub fn is_checked(&self) -> bool {
        self.checked
    }

    pub fn is_collapsed(&self) -> bool {
        self.collapsed
    }

    pub fn is_disabled(&self) -> bool {
        self.disabled
    }

    /// Surviving children.
    pub fn children(&self) -> &[FilterNode<V>] {
        &self.children
    }

    pub fn set_checked(&mut self, checked: bool) {
        self.checked = checked;
    }

    pub fn set_collapsed(&mut self, collapsed: bool) {
        self.collapsed = collapsed;
    }

    /// Agreement of the surviving children's checked flags.
    pub fn children_consensus(&self, items: &[TreeNode<V>]) -> Consensus {
        Consensus::of(self.children.iter().map(|c| c.is_checked(items)))
    }

    /// Set checked on this overlay and every displayed descendant.
    pub fn set_checked_recursive(&mut self, items: &mut [TreeNode<V>], checked: bool) {
        self.checked = checked;
        for child in &mut self.children {
            child.set_checked_recursive(items, checked);
        }
    }

    /// Set collapsed on this overlay and every displayed descendant.
    pub fn set_collapsed_recursive(&mut self, items: &mut [TreeNode<V>], collapsed: bool) {
        self.collapsed = collapsed;
        for child in &mut self.children {
            child.set_collapsed_recursive(items, collapsed);
        }
    }

    /// Reconcile this overlay's checked flag into the original node.
    ///
    /// Nested overlays are flushed first. The original ends up checked only
    /// when this overlay is checked and every one of the original's real
    /// children is checked, hidden ones included.
    pub fn write_back(&self, items: &mut [TreeNode<V>]) {
        for child in &self.children {
            if let FilterNode::Overlay(overlay) = child {
                overlay.write_back(items);
            }
        }

        let Some(origin) = node_at_mut(items, &self.origin) else {
            warn!("Overlay origin {} no longer exists", self.origin);
            return;
        };
        let checked = self.checked && origin.children().iter().all(TreeNode::is_checked);
        trace!(
            "Write back {} -> {} (overlay checked: {})",
            self.origin, checked, self.checked
        );
        origin.set_checked(checked);
    }
}

impl<V> FilterNode<V> {
    /// Resolve to a read-only view of the displayed node.
    pub fn resolve<'a>(&'a self, items: &'a [TreeNode<V>]) -> Option<DisplayRef<'a, V>> {
        match self {
            FilterNode::Plain(path) => node_at(items, path).map(DisplayRef::Original),
            FilterNode::Overlay(overlay) => Some(DisplayRef::Overlay(overlay)),
        }
    }

    /// Check if this entry wraps an original.
    pub fn is_overlay(&self) -> bool {
        matches!(self, FilterNode::Overlay(_))
    }

    pub fn is_checked(&self, items: &[TreeNode<V>]) -> bool {
        self.resolve(items).is_some_and(|n| n.is_checked())
    }

    pub fn is_collapsed(&self, items: &[TreeNode<V>]) -> bool {
        self.resolve(items).is_none_or(|n| n.is_collapsed())
    }

    pub fn set_checked_recursive(&mut self, items: &mut [TreeNode<V>], checked: bool) {
        match self {
            FilterNode::Plain(path) => {
                if let Some(node) = node_at_mut(items, path) {
                    node.set_checked_recursive(checked);
                }
            }
            FilterNode::Overlay(overlay) => overlay.set_checked_recursive(items, checked),
        }
    }

    pub fn set_collapsed_recursive(&mut self, items: &mut [TreeNode<V>], collapsed: bool) {
        match self {
            FilterNode::Plain(path) => {
                if let Some(node) = node_at_mut(items, path) {
                    node.set_collapsed_recursive(collapsed);
                }
            }
            FilterNode::Overlay(overlay) => overlay.set_collapsed_recursive(items, collapsed),
        }
    }

    /// Write back into the original; nothing to do for plain entries.
    pub fn write_back(&self, items: &mut [TreeNode<V>]) {
        if let FilterNode::Overlay(overlay) = self {
            overlay.write_back(items);
        }
    }
}

/// Read-only view of a displayed node, whichever variant backs it.
#[derive(Debug)]
pub enum DisplayRef<'a, V> {
    Original(&'a TreeNode<V>),
    Overlay(&'a OverlayNode<V>),
}

impl<V> Clone for DisplayRef<'_, V> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<V> Copy for DisplayRef<'_, V> {}

impl<'a, V> DisplayRef<'a, V> {
    pub fn text(&self) -> &'a str {
        match self {
            DisplayRef::Original(node) => node.text(),
            DisplayRef::Overlay(overlay) => overlay.text(),
        }
    }

    pub fn value(&self) -> &'a V {
        match self {
            DisplayRef::Original(node) => node.value(),
            DisplayRef::Overlay(overlay) => overlay.value(),
        }
    }

    pub fn is_checked(&self) -> bool {
        match self {
            DisplayRef::Original(node) => node.is_checked(),
            DisplayRef::Overlay(overlay) => overlay.is_checked(),
        }
    }

    pub fn is_collapsed(&self) -> bool {
        match self {
            DisplayRef::Original(node) => node.is_collapsed(),
            DisplayRef::Overlay(overlay) => overlay.is_collapsed(),
        }
    }

    pub fn is_disabled(&self) -> bool {
        match self {
            DisplayRef::Original(node) => node.is_disabled(),
            DisplayRef::Overlay(overlay) => overlay.is_disabled(),
        }
    }

    pub fn is_overlay(&self) -> bool {
        matches!(self, DisplayRef::Overlay(_))
    }

    /// Displayed children: all children of an original, surviving children
    /// of an overlay.
    pub fn children(&self, items: &'a [TreeNode<V>]) -> Vec<DisplayRef<'a, V>> {
        match self {
            DisplayRef::Original(node) => {
                node.children().iter().map(DisplayRef::Original).collect()
            }
            DisplayRef::Overlay(overlay) => overlay
                .children()
                .iter()
                .filter_map(|c| c.resolve(items))
                .collect(),
        }
    }

    pub fn has_children(&self) -> bool {
        match self {
            DisplayRef::Original(node) => node.has_children(),
            DisplayRef::Overlay(overlay) => !overlay.children().is_empty(),
        }
    }

    /// Tri-state value over the displayed children.
    pub fn check_state(&self, items: &[TreeNode<V>]) -> CheckState {
        match self {
            DisplayRef::Original(node) => node.check_state(),
            DisplayRef::Overlay(overlay) => {
                CheckState::from_parts(overlay.is_checked(), overlay.children_consensus(items))
            }
        }
    }
}

/// A displayed node resolved for mutation.
#[derive(Debug)]
pub enum Located<'a, V> {
    /// An original node, by its path in the root forest.
    Original(NodePath),
    Overlay(&'a mut OverlayNode<V>),
}

/// Resolve a path in the displayed forest.
///
/// Indices walk overlay children until a plain entry is reached; the
/// remaining indices then continue into that original's real subtree.
pub fn locate_mut<'a, V>(
    displayed: &'a mut [FilterNode<V>],
    items: &[TreeNode<V>],
    path: &[usize],
) -> Option<Located<'a, V>> {
    let (first, rest) = path.split_first()?;
    match displayed.get_mut(*first)? {
        FilterNode::Plain(origin) => {
            let origin = origin.join(rest);
            node_at(items, &origin).map(|_| Located::Original(origin))
        }
        FilterNode::Overlay(overlay) => {
            if rest.is_empty() {
                Some(Located::Overlay(overlay))
            } else {
                locate_mut(&mut overlay.children, items, rest)
            }
        }
    }
}

/// Resolve a path in the displayed forest for reading.
pub fn locate<'a, V>(
    displayed: &'a [FilterNode<V>],
    items: &'a [TreeNode<V>],
    path: &[usize],
) -> Option<DisplayRef<'a, V>> {
    let (first, rest) = path.split_first()?;
    match displayed.get(*first)? {
        FilterNode::Plain(origin) => node_at(items, &origin.join(rest)).map(DisplayRef::Original),
        FilterNode::Overlay(overlay) => {
            if rest.is_empty() {
                Some(DisplayRef::Overlay(overlay))
            } else {
                locate(&overlay.children, items, rest)
            }
        }
    }
}
