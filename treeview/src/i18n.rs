//! Text provider for labels, placeholders and tooltips.

use std::fmt::Debug;

use crate::selection::Selection;

/// Supplies every user-visible string. Swap the implementation per locale.
pub trait TreeviewI18n<V>: Debug {
    /// Summary of the current selection, e.g. for a dropdown button.
    fn text(&self, selection: &Selection<V>) -> String;

    fn all_checkbox_text(&self) -> String;

    fn filter_placeholder(&self) -> String;

    fn filter_no_items_found_text(&self) -> String;

    /// Tooltip for the collapse/expand-all control.
    fn tooltip_collapse_expand_text(&self, collapsed: bool) -> String;
}

/// English texts.
#[derive(Debug, Clone, Copy, Default)]
pub struct DefaultTreeviewI18n;

impl<V> TreeviewI18n<V> for DefaultTreeviewI18n {
    fn text(&self, selection: &Selection<V>) -> String {
        if selection.unchecked.is_empty() {
            return "All".to_string();
        }
        match selection.checked.as_slice() {
            [] => "Select options".to_string(),
            [only] => only.text.clone(),
            checked => format!("{} options selected", checked.len()),
        }
    }

    fn all_checkbox_text(&self) -> String {
        "All".to_string()
    }

    fn filter_placeholder(&self) -> String {
        "Filter".to_string()
    }

    fn filter_no_items_found_text(&self) -> String {
        "No items found".to_string()
    }

    fn tooltip_collapse_expand_text(&self, collapsed: bool) -> String {
        if collapsed {
            "Expand".to_string()
        } else {
            "Collapse".to_string()
        }
    }
}
