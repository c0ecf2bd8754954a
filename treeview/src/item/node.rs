//! Checkable tree node.

use serde::{Deserialize, Serialize};

use crate::propagation::{CheckState, Consensus};

/// A labelled node in a checkable tree.
///
/// `TreeNode<V>` carries the per-node flags the widget operates on:
/// - `checked`: the stored boolean; a mixed parent stores `false`
/// - `collapsed`: whether children are hidden
/// - `disabled`: whether the user may toggle this node
///
/// The indeterminate state is never stored. It is derived from the children
/// on demand, see [`TreeNode::is_indeterminate`].
///
/// # Example
///
/// ```
/// use treeview::TreeNode;
///
/// let fruit = TreeNode::new("Fruit", 1).with_children(vec![
///     TreeNode::new("Apple", 2).with_checked(true),
///     TreeNode::new("Banana", 3),
/// ]);
/// assert!(fruit.is_indeterminate());
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(from = "RawTreeNode<V>")]
pub struct TreeNode<V> {
    text: String,
    value: V,
    checked: bool,
    collapsed: bool,
    disabled: bool,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    children: Vec<TreeNode<V>>,
}

/// Wire form of a node; converted through the builder so a disabled parent
/// cascades to its children.
#[derive(Deserialize)]
struct RawTreeNode<V> {
    text: String,
    value: V,
    #[serde(default)]
    checked: bool,
    #[serde(default)]
    collapsed: bool,
    #[serde(default)]
    disabled: bool,
    #[serde(default = "Vec::new")]
    children: Vec<TreeNode<V>>,
}

impl<V> From<RawTreeNode<V>> for TreeNode<V> {
    fn from(raw: RawTreeNode<V>) -> Self {
        TreeNode::new(raw.text, raw.value)
            .with_checked(raw.checked)
            .with_collapsed(raw.collapsed)
            .with_disabled(raw.disabled)
            .with_children(raw.children)
    }
}

impl<V> TreeNode<V> {
    /// Create an unchecked, expanded, enabled leaf.
    pub fn new(text: impl Into<String>, value: V) -> Self {
        Self {
            text: text.into(),
            value,
            checked: false,
            collapsed: false,
            disabled: false,
            children: Vec::new(),
        }
    }

    /// Set the checked flag of this node only.
    pub fn with_checked(mut self, checked: bool) -> Self {
        self.checked = checked;
        self
    }

    /// Set the collapsed flag of this node only.
    pub fn with_collapsed(mut self, collapsed: bool) -> Self {
        self.collapsed = collapsed;
        self
    }

    /// Set the disabled flag. Disabling cascades to the whole subtree.
    pub fn with_disabled(mut self, disabled: bool) -> Self {
        self.set_disabled(disabled);
        self
    }

    /// Attach children. A disabled node disables the children it receives.
    pub fn with_children(mut self, children: Vec<TreeNode<V>>) -> Self {
        self.children = children;
        if self.disabled {
            self.set_disabled(true);
        }
        self
    }

    /// Append one child.
    pub fn with_child(mut self, child: TreeNode<V>) -> Self {
        let mut child = child;
        if self.disabled {
            child.set_disabled(true);
        }
        self.children.push(child);
        self
    }

    // -------------------------------------------------------------------------
    // Read methods
    // -------------------------------------------------------------------------

    /// Display label.
    pub fn text(&self) -> &str {
        &self.text
    }

    /// Opaque payload reported in selections.
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

    /// Child nodes; empty for a leaf.
    pub fn children(&self) -> &[TreeNode<V>] {
        &self.children
    }

    pub fn children_mut(&mut self) -> &mut [TreeNode<V>] {
        &mut self.children
    }

    pub fn has_children(&self) -> bool {
        !self.children.is_empty()
    }

    /// True iff the node has children whose checked flags disagree.
    pub fn is_indeterminate(&self) -> bool {
        self.children_consensus() == Consensus::Mixed
    }

    /// Tri-state value for display.
    pub fn check_state(&self) -> CheckState {
        CheckState::from_parts(self.checked, self.children_consensus())
    }

    /// Agreement of the direct children's checked flags.
    pub fn children_consensus(&self) -> Consensus {
        Consensus::of(self.children.iter().map(|c| c.checked))
    }

    /// Number of nodes in this subtree, including this one.
    pub fn node_count(&self) -> usize {
        1 + self.children.iter().map(TreeNode::node_count).sum::<usize>()
    }

    // -------------------------------------------------------------------------
    // Write methods
    // -------------------------------------------------------------------------

    /// Set the checked flag of this node only.
    pub fn set_checked(&mut self, checked: bool) {
        self.checked = checked;
    }

    /// Set the collapsed flag of this node only.
    pub fn set_collapsed(&mut self, collapsed: bool) {
        self.collapsed = collapsed;
    }

    /// Set the disabled flag on this node and every descendant.
    pub fn set_disabled(&mut self, disabled: bool) {
        self.disabled = disabled;
        for child in &mut self.children {
            child.set_disabled(disabled);
        }
    }

    /// Set the checked flag on this node and every descendant.
    ///
    /// Disabled descendants receive the value too; disabling only blocks
    /// direct user toggles.
    pub fn set_checked_recursive(&mut self, checked: bool) {
        self.checked = checked;
        for child in &mut self.children {
            child.set_checked_recursive(checked);
        }
    }

    /// Set the collapsed flag on this node and every descendant.
    pub fn set_collapsed_recursive(&mut self, collapsed: bool) {
        self.collapsed = collapsed;
        for child in &mut self.children {
            child.set_collapsed_recursive(collapsed);
        }
    }

    /// Recompute every internal node's checked flag from its leaves.
    ///
    /// Leaves keep their flag. A parent becomes checked only when all of its
    /// children are checked after their own correction.
    pub fn correct_checked(&mut self) {
        if self.children.is_empty() {
            return;
        }
        for child in &mut self.children {
            child.correct_checked();
        }
        self.checked = self.children_consensus().resolve();
    }
}
