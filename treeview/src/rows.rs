//! Flattened rows of the displayed forest, for renderers.

use crate::filter::{DisplayRef, FilterNode};
use crate::item::{NodePath, TreeNode};
use crate::propagation::CheckState;

/// A visible row of the displayed forest.
#[derive(Debug, Clone, PartialEq)]
pub struct FlatRow {
    /// Path into the displayed forest; pass it back to toggle this row.
    pub path: NodePath,
    /// Depth in tree (0 = top level).
    pub depth: u16,
    pub text: String,
    pub state: CheckState,
    pub collapsed: bool,
    pub disabled: bool,
    /// Whether this row has displayed children.
    pub has_children: bool,
}

/// Collect visible rows in pre-order, skipping children of collapsed rows.
pub fn visible_rows<V>(displayed: &[FilterNode<V>], items: &[TreeNode<V>]) -> Vec<FlatRow> {
    let mut out = Vec::new();
    for (i, node) in displayed.iter().enumerate() {
        if let Some(node) = node.resolve(items) {
            collect_visible(node, items, NodePath::root(i), 0, &mut out);
        }
    }
    out
}

fn collect_visible<'a, V>(
    node: DisplayRef<'a, V>,
    items: &'a [TreeNode<V>],
    path: NodePath,
    depth: u16,
    out: &mut Vec<FlatRow>,
) {
    out.push(FlatRow {
        path: path.clone(),
        depth,
        text: node.text().to_string(),
        state: node.check_state(items),
        collapsed: node.is_collapsed(),
        disabled: node.is_disabled(),
        has_children: node.has_children(),
    });

    if node.is_collapsed() {
        return;
    }
    for (i, child) in node.children(items).into_iter().enumerate() {
        collect_visible(child, items, path.child(i), depth + 1, out);
    }
}
