//! Tree nodes and forest addressing.

mod node;
mod path;

pub use node::TreeNode;
pub use path::NodePath;

/// Look up a node by path.
pub fn node_at<'a, V>(forest: &'a [TreeNode<V>], path: &NodePath) -> Option<&'a TreeNode<V>> {
    let (first, rest) = path.indices().split_first()?;
    let mut node = forest.get(*first)?;
    for index in rest {
        node = node.children().get(*index)?;
    }
    Some(node)
}

/// Look up a node by path for mutation.
pub fn node_at_mut<'a, V>(
    forest: &'a mut [TreeNode<V>],
    path: &NodePath,
) -> Option<&'a mut TreeNode<V>> {
    let (first, rest) = path.indices().split_first()?;
    let mut node = forest.get_mut(*first)?;
    for index in rest {
        node = node.children_mut().get_mut(*index)?;
    }
    Some(node)
}

/// Find the first node (pre-order) whose value equals `value`.
pub fn find_path<V: PartialEq>(forest: &[TreeNode<V>], value: &V) -> Option<NodePath> {
    forest
        .iter()
        .enumerate()
        .find_map(|(i, node)| find_in_node(node, NodePath::root(i), value))
}

fn find_in_node<V: PartialEq>(node: &TreeNode<V>, path: NodePath, value: &V) -> Option<NodePath> {
    if node.value() == value {
        return Some(path);
    }
    node.children()
        .iter()
        .enumerate()
        .find_map(|(i, child)| find_in_node(child, path.child(i), value))
}

/// Total number of nodes in a forest.
pub fn node_count<V>(forest: &[TreeNode<V>]) -> usize {
    forest.iter().map(TreeNode::node_count).sum()
}
