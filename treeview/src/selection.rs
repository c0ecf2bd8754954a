//! Checked/unchecked report over the root forest.

use crate::item::TreeNode;

/// A reported node.
#[derive(Debug, Clone, PartialEq)]
pub struct SelectionItem<V> {
    pub text: String,
    pub value: V,
}

/// Every node of the root forest, split by its own checked flag.
///
/// Both sequences are in pre-order. Internal nodes are reported like leaves,
/// independent of their children.
#[derive(Debug, Clone, PartialEq)]
pub struct Selection<V> {
    pub checked: Vec<SelectionItem<V>>,
    pub unchecked: Vec<SelectionItem<V>>,
}

impl<V> Default for Selection<V> {
    fn default() -> Self {
        Self {
            checked: Vec::new(),
            unchecked: Vec::new(),
        }
    }
}

impl<V: Clone> Selection<V> {
    /// Walk the forest and build the report.
    pub fn collect(items: &[TreeNode<V>]) -> Self {
        let mut selection = Self::default();
        for item in items {
            selection.visit(item);
        }
        selection
    }

    fn visit(&mut self, node: &TreeNode<V>) {
        let entry = SelectionItem {
            text: node.text().to_string(),
            value: node.value().clone(),
        };
        if node.is_checked() {
            self.checked.push(entry);
        } else {
            self.unchecked.push(entry);
        }
        for child in node.children() {
            self.visit(child);
        }
    }

    pub fn checked_values(&self) -> Vec<V> {
        self.checked.iter().map(|i| i.value.clone()).collect()
    }

    pub fn unchecked_values(&self) -> Vec<V> {
        self.unchecked.iter().map(|i| i.value.clone()).collect()
    }
}

impl<V> Selection<V> {
    /// Total number of reported nodes.
    pub fn len(&self) -> usize {
        self.checked.len() + self.unchecked.len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}
