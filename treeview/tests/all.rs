use treeview::{CheckState, NodePath, TreeNode, Treeview};

fn pair(first: bool, second: bool) -> Vec<TreeNode<u32>> {
    vec![
        TreeNode::new("X", 1).with_checked(first),
        TreeNode::new("Y", 2).with_checked(second),
    ]
}

fn groups() -> Vec<TreeNode<u32>> {
    vec![
        TreeNode::new("Fruit", 1).with_children(vec![
            TreeNode::new("Apple", 2),
            TreeNode::new("Banana", 3),
        ]),
        TreeNode::new("Vegetables", 4).with_children(vec![
            TreeNode::new("Carrot", 5),
            TreeNode::new("Leek", 6),
        ]),
    ]
}

// ============================================================================
// Derivation
// ============================================================================

#[test]
fn test_mixed_top_level_is_indeterminate() {
    let tree = Treeview::with_items(pair(true, false));
    let all = tree.all_state();
    assert!(!all.checked);
    assert!(all.indeterminate);
    assert_eq!(all.check_state(), CheckState::Indeterminate);
}

#[test]
fn test_all_checked_top_level() {
    let tree = Treeview::with_items(pair(true, true));
    let all = tree.all_state();
    assert!(all.checked);
    assert!(!all.indeterminate);
}

#[test]
fn test_empty_forest() {
    let tree: Treeview<u32> = Treeview::with_items(Vec::new());
    let all = tree.all_state();
    assert!(!all.checked);
    assert!(!all.indeterminate);
    assert!(all.collapsed);
}

#[test]
fn test_collapsed_iff_nothing_expanded() {
    let tree = Treeview::with_items(groups());
    assert!(!tree.all_state().collapsed);

    let items = groups()
        .into_iter()
        .map(|n| n.with_collapsed(true))
        .collect();
    let tree = Treeview::with_items(items);
    assert!(tree.all_state().collapsed);

    let mut items: Vec<_> = groups()
        .into_iter()
        .map(|n| n.with_collapsed(true))
        .collect();
    items[1].set_collapsed(false);
    let tree = Treeview::with_items(items);
    assert!(!tree.all_state().collapsed);
}

#[test]
fn test_rederived_after_item_toggle() {
    let mut tree = Treeview::with_items(groups());
    let refresh = tree.set_checked(&NodePath::root(0), true).unwrap();
    assert!(!refresh.all.checked);
    assert!(refresh.all.indeterminate);

    let refresh = tree.set_checked(&NodePath::root(1), true).unwrap();
    assert!(refresh.all.checked);
    assert!(!refresh.all.indeterminate);
}

#[test]
fn test_rederived_against_filtered_forest() {
    let mut tree = Treeview::with_items(groups());
    tree.set_checked(&NodePath::root(0), true).unwrap();
    assert!(!tree.all_state().checked);

    let refresh = tree.set_filter_text("apple");
    assert!(refresh.all.checked);
    assert!(!refresh.all.indeterminate);

    let refresh = tree.set_filter_text("durian");
    assert!(!refresh.all.checked);
}

// ============================================================================
// Setting
// ============================================================================

#[test]
fn test_set_all_checked() {
    let mut tree = Treeview::with_items(groups());
    let refresh = tree.set_all_checked(true);
    assert!(refresh.all.checked);
    assert_eq!(refresh.selection.unchecked.len(), 0);
    assert_eq!(refresh.selection.checked.len(), 6);

    let refresh = tree.toggle_all_checked();
    assert!(!refresh.all.checked);
    assert_eq!(refresh.selection.checked.len(), 0);
}

#[test]
fn test_set_all_checked_writes_back_overlays() {
    let mut tree = Treeview::with_items(groups());
    tree.set_filter_text("a");
    // "Fruit" is an overlay over Apple and Banana; "Vegetables" matches.
    assert!(tree.filter_items()[0].is_overlay());
    assert!(!tree.filter_items()[1].is_overlay());

    tree.set_all_checked(true);
    assert!(tree.items()[0].is_checked());
    assert!(tree.items()[1].children().iter().all(TreeNode::is_checked));

    tree.set_filter_text("apple");
    tree.set_all_checked(false);
    let fruit = &tree.items()[0];
    assert!(!fruit.children()[0].is_checked());
    assert!(fruit.children()[1].is_checked());
    assert!(!fruit.is_checked());
}

#[test]
fn test_set_all_checked_only_touches_displayed_nodes() {
    let mut tree = Treeview::with_items(groups());
    tree.set_filter_text("carrot");
    tree.set_all_checked(true);
    let items = tree.items();
    assert!(!items[0].is_checked());
    assert!(items[1].children()[0].is_checked());
    assert!(!items[1].children()[1].is_checked());
    assert!(!items[1].is_checked());
}

#[test]
fn test_toggle_all_collapsed() {
    let mut tree = Treeview::with_items(groups());
    assert!(!tree.all_state().collapsed);

    let all = tree.toggle_all_collapsed();
    assert!(all.collapsed);
    assert!(tree.items().iter().all(TreeNode::is_collapsed));
    assert!(tree.items()[0].children()[0].is_collapsed());

    let all = tree.toggle_all_collapsed();
    assert!(!all.collapsed);
    assert!(tree.items().iter().all(|n| !n.is_collapsed()));
}

#[test]
fn test_toggle_all_collapsed_on_overlays_leaves_originals() {
    let mut tree = Treeview::with_items(groups());
    tree.set_filter_text("leek");
    tree.toggle_all_collapsed();
    assert!(tree.node(&NodePath::root(0)).unwrap().is_collapsed());
    assert!(!tree.items()[1].is_collapsed());
    // Leek itself is a plain original and was collapsed recursively.
    assert!(tree.items()[1].children()[1].is_collapsed());
}
