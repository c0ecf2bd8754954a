use treeview::{CheckState, NodePath, TreeNode, Treeview, TreeviewConfig, TreeviewError};

/// Root
/// ├── Mid
/// │   ├── L1
/// │   └── L2
/// └── M2
///     └── L3
fn three_levels() -> Vec<TreeNode<&'static str>> {
    vec![TreeNode::new("Root", "root").with_children(vec![
        TreeNode::new("Mid", "mid").with_children(vec![
            TreeNode::new("L1", "l1"),
            TreeNode::new("L2", "l2"),
        ]),
        TreeNode::new("M2", "m2").with_children(vec![TreeNode::new("L3", "l3")]),
    ])]
}

fn path<const N: usize>(indices: [usize; N]) -> NodePath {
    NodePath::from(indices)
}

fn all_checked(node: &TreeNode<&'static str>) -> bool {
    node.is_checked() && node.children().iter().all(all_checked)
}

fn all_unchecked(node: &TreeNode<&'static str>) -> bool {
    !node.is_checked() && node.children().iter().all(all_unchecked)
}

// ============================================================================
// Downward
// ============================================================================

#[test]
fn test_checking_parent_checks_subtree() {
    let mut tree = Treeview::with_items(three_levels());
    tree.set_checked(&path([0]), true).unwrap();
    assert!(all_checked(&tree.items()[0]));

    tree.set_checked(&path([0, 0]), false).unwrap();
    assert!(all_unchecked(&tree.items()[0].children()[0]));
    assert!(tree.items()[0].children()[1].is_checked());
}

#[test]
fn test_toggle_checked_flips() {
    let mut tree = Treeview::with_items(three_levels());
    tree.toggle_checked(&path([0, 1])).unwrap();
    assert!(tree.items()[0].children()[1].is_checked());
    tree.toggle_checked(&path([0, 1])).unwrap();
    assert!(!tree.items()[0].children()[1].is_checked());
}

// ============================================================================
// Upward
// ============================================================================

#[test]
fn test_bubbles_level_by_level() {
    let mut tree = Treeview::with_items(three_levels());

    tree.set_checked(&path([0, 0, 0]), true).unwrap();
    let root = &tree.items()[0];
    assert!(!root.children()[0].is_checked());
    assert!(root.children()[0].is_indeterminate());
    assert!(!root.is_checked());
    assert!(!root.is_indeterminate());

    tree.set_checked(&path([0, 0, 1]), true).unwrap();
    let root = &tree.items()[0];
    assert!(root.children()[0].is_checked());
    assert!(!root.is_checked());
    assert_eq!(root.check_state(), CheckState::Indeterminate);

    tree.set_checked(&path([0, 1, 0]), true).unwrap();
    assert!(all_checked(&tree.items()[0]));

    tree.set_checked(&path([0, 1, 0]), false).unwrap();
    let root = &tree.items()[0];
    assert!(!root.children()[1].is_checked());
    assert!(!root.is_checked());
    assert!(root.is_indeterminate());
}

#[test]
fn test_parent_matches_children_after_each_toggle() {
    let mut tree = Treeview::with_items(three_levels());
    let toggles = [[0, 0, 1], [0, 1, 0], [0, 0, 0], [0, 0, 1], [0, 1, 0]];
    for indices in toggles {
        tree.toggle_checked(&path(indices)).unwrap();
        let root = &tree.items()[0];
        for parent in std::iter::once(root).chain(root.children()) {
            let expected = parent.children().iter().all(TreeNode::is_checked);
            assert_eq!(parent.is_checked(), expected, "parent {}", parent.text());
        }
    }
}

#[test]
fn test_leaf_toggle_under_single_parent() {
    let mut tree = Treeview::with_items(three_levels());
    tree.set_checked(&path([0, 1, 0]), true).unwrap();
    let m2 = &tree.items()[0].children()[1];
    assert!(m2.is_checked());
    assert!(!m2.children()[0].is_indeterminate());
}

// ============================================================================
// Decoupled
// ============================================================================

#[test]
fn test_decoupled_parent_does_not_touch_children() {
    let mut tree =
        Treeview::with_items(three_levels()).with_config(TreeviewConfig::default().decoupled());
    tree.set_checked(&path([0]), true).unwrap();
    let root = &tree.items()[0];
    assert!(root.is_checked());
    assert!(all_unchecked(&root.children()[0]));
}

#[test]
fn test_decoupled_child_does_not_touch_parent() {
    let mut tree =
        Treeview::with_items(three_levels()).with_config(TreeviewConfig::default().decoupled());
    tree.set_checked(&path([0, 1, 0]), true).unwrap();
    let root = &tree.items()[0];
    assert!(!root.children()[1].is_checked());
    assert!(!root.is_checked());
    assert!(root.children()[1].children()[0].is_checked());
}

// ============================================================================
// Disabled and missing nodes
// ============================================================================

#[test]
fn test_disabled_node_rejects_user_toggle() {
    let items = vec![TreeNode::new("Fruit", "fruit").with_children(vec![
        TreeNode::new("Apple", "apple").with_disabled(true),
        TreeNode::new("Banana", "banana"),
    ])];
    let mut tree = Treeview::with_items(items);
    let err = tree.set_checked(&path([0, 0]), true).unwrap_err();
    assert!(matches!(err, TreeviewError::NodeDisabled { .. }));
    assert!(!tree.items()[0].children()[0].is_checked());
}

#[test]
fn test_disabled_node_still_receives_propagation() {
    let items = vec![TreeNode::new("Fruit", "fruit").with_children(vec![
        TreeNode::new("Apple", "apple").with_disabled(true),
        TreeNode::new("Banana", "banana"),
    ])];
    let mut tree = Treeview::with_items(items);
    tree.set_checked(&path([0]), true).unwrap();
    assert!(tree.items()[0].children()[0].is_checked());
}

#[test]
fn test_unknown_path_is_an_error() {
    let mut tree = Treeview::with_items(three_levels());
    let err = tree.set_checked(&path([3]), true).unwrap_err();
    assert!(matches!(err, TreeviewError::NodeNotFound { .. }));
    assert_eq!(err.to_string(), "No displayed node at /3");

    let err = tree.toggle_checked(&path([0, 0, 5])).unwrap_err();
    assert!(matches!(err, TreeviewError::NodeNotFound { .. }));
    assert!(all_unchecked(&tree.items()[0]));
}
