//! What the header above the items shows.

use crate::all::AllState;

/// Header rows, resolved against the config and the text provider.
#[derive(Debug, Clone, PartialEq)]
pub struct Header {
    /// Filter input, when `has_filter` is set.
    pub filter: Option<FilterInput>,
    /// "All" row, when there are displayed items and either the all checkbox
    /// or the collapse/expand control is enabled.
    pub all_row: Option<AllRow>,
    /// Divider under the header; only drawn when there are displayed items.
    pub divider: bool,
}

#[derive(Debug, Clone, PartialEq)]
pub struct FilterInput {
    pub placeholder: String,
    pub text: String,
}

#[derive(Debug, Clone, PartialEq)]
pub struct AllRow {
    pub state: AllState,
    /// Checkbox label, when `has_all_check_box` is set.
    pub label: Option<String>,
    /// Collapse/expand-all tooltip, when `has_collapse_expand` is set.
    pub collapse_expand_tooltip: Option<String>,
}
