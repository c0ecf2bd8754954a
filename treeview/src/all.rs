//! The synthetic "All" control over the displayed forest.

use log::trace;

use crate::filter::FilterNode;
use crate::item::TreeNode;
use crate::propagation::{CheckState, Consensus};

/// Snapshot of the "All" control.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct AllState {
    pub checked: bool,
    pub collapsed: bool,
    pub indeterminate: bool,
}

impl AllState {
    pub fn check_state(&self) -> CheckState {
        if self.indeterminate {
            CheckState::Indeterminate
        } else if self.checked {
            CheckState::Checked
        } else {
            CheckState::Unchecked
        }
    }
}

/// Aggregate node whose children are the top-level displayed nodes.
///
/// Its flags are derived from the displayed forest, except right after the
/// user toggles it, when they seed propagation into that forest.
#[derive(Debug, Clone)]
pub struct AllItem {
    text: String,
    checked: bool,
    collapsed: bool,
}

impl Default for AllItem {
    fn default() -> Self {
        Self {
            text: "All".to_string(),
            checked: false,
            collapsed: true,
        }
    }
}

impl AllItem {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn is_checked(&self) -> bool {
        self.checked
    }

    pub fn is_collapsed(&self) -> bool {
        self.collapsed
    }

    /// Agreement of the top-level displayed nodes.
    pub fn consensus<V>(&self, displayed: &[FilterNode<V>], items: &[TreeNode<V>]) -> Consensus {
        Consensus::of(displayed.iter().map(|n| n.is_checked(items)))
    }

    pub fn is_indeterminate<V>(&self, displayed: &[FilterNode<V>], items: &[TreeNode<V>]) -> bool {
        self.consensus(displayed, items) == Consensus::Mixed
    }

    pub fn state<V>(&self, displayed: &[FilterNode<V>], items: &[TreeNode<V>]) -> AllState {
        AllState {
            checked: self.checked,
            collapsed: self.collapsed,
            indeterminate: self.is_indeterminate(displayed, items),
        }
    }

    /// Checked iff the forest is non-empty and every top-level node is checked.
    pub fn derive_checked<V>(&mut self, displayed: &[FilterNode<V>], items: &[TreeNode<V>]) {
        self.checked = self.consensus(displayed, items).resolve();
        trace!("All checked derived: {}", self.checked);
    }

    /// Collapsed iff no top-level node is expanded; an empty forest counts as
    /// collapsed.
    pub fn derive_collapsed<V>(&mut self, displayed: &[FilterNode<V>], items: &[TreeNode<V>]) {
        self.collapsed = displayed.iter().all(|n| n.is_collapsed(items));
        trace!("All collapsed derived: {}", self.collapsed);
    }

    /// User toggled the "All" checkbox to `checked`.
    pub fn set_checked<V>(
        &mut self,
        displayed: &mut [FilterNode<V>],
        items: &mut [TreeNode<V>],
        checked: bool,
    ) {
        self.checked = checked;
        for node in displayed.iter_mut() {
            node.set_checked_recursive(items, checked);
            node.write_back(items);
        }
    }

    /// User toggled collapse/expand-all.
    pub fn toggle_collapsed<V>(
        &mut self,
        displayed: &mut [FilterNode<V>],
        items: &mut [TreeNode<V>],
    ) {
        self.collapsed = !self.collapsed;
        for node in displayed.iter_mut() {
            node.set_collapsed_recursive(items, self.collapsed);
        }
    }
}
