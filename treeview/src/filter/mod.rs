//! Filter overlay: a pruned, non-destructive view of the root forest.

mod matcher;
mod overlay;

pub use matcher::TextMatcher;
pub use overlay::{DisplayRef, FilterNode, Located, OverlayNode, locate, locate_mut};

use crate::item::{NodePath, TreeNode};

/// Build the displayed forest for `filter_text`.
///
/// An empty filter shows every original unchanged. Otherwise a node is kept
/// as-is when its label contains the filter text (case-insensitive), wrapped
/// in an [`OverlayNode`] when only some descendants match, and dropped when
/// nothing below it matches.
///
/// # Example
///
/// ```
/// use treeview::filter::{FilterNode, filter_forest};
/// use treeview::TreeNode;
///
/// let items = vec![TreeNode::new("A", 0).with_children(vec![
///     TreeNode::new("B", 1),
///     TreeNode::new("C", 2),
/// ])];
/// let displayed = filter_forest(&items, "b");
/// assert!(matches!(displayed[0], FilterNode::Overlay(_)));
/// ```
pub fn filter_forest<V: Clone>(items: &[TreeNode<V>], filter_text: &str) -> Vec<FilterNode<V>> {
    let mut matcher = TextMatcher::new(filter_text);
    if matcher.is_empty() {
        return (0..items.len())
            .map(|i| FilterNode::Plain(NodePath::root(i)))
            .collect();
    }

    items
        .iter()
        .enumerate()
        .filter_map(|(i, item)| filter_item(item, NodePath::root(i), &mut matcher))
        .collect()
}

fn filter_item<V: Clone>(
    item: &TreeNode<V>,
    path: NodePath,
    matcher: &mut TextMatcher,
) -> Option<FilterNode<V>> {
    if matcher.matches(item.text()) {
        return Some(FilterNode::Plain(path));
    }

    let children: Vec<FilterNode<V>> = item
        .children()
        .iter()
        .enumerate()
        .filter_map(|(i, child)| filter_item(child, path.child(i), matcher))
        .collect();
    if children.is_empty() {
        return None;
    }

    Some(FilterNode::Overlay(OverlayNode::wrap(item, path, children)))
}
