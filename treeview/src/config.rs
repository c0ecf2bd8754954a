//! Treeview configuration.

use log::warn;
use serde::{Deserialize, Serialize};

use crate::error::TreeviewError;

/// Display and behaviour options for a treeview.
///
/// Deserializes from camelCase JSON; missing fields take their defaults.
///
/// # Example
///
/// ```
/// use treeview::TreeviewConfig;
///
/// let config = TreeviewConfig::default()
///     .with_filter(true)
///     .with_max_height(300);
/// assert!(config.has_all_check_box);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct TreeviewConfig {
    /// Show the "All" checkbox.
    ///
    /// Default: true
    pub has_all_check_box: bool,

    /// Show the filter input.
    ///
    /// Default: false
    pub has_filter: bool,

    /// Show the collapse/expand-all control.
    ///
    /// Default: false
    pub has_collapse_expand: bool,

    /// Stop propagating checked state between parents and children.
    ///
    /// Default: false
    pub decouple_child_from_parent: bool,

    /// Maximum height of the item container, in pixels.
    ///
    /// Default: 500
    pub max_height: u32,

    /// Draw a divider under the header.
    ///
    /// Default: true
    pub has_divider: bool,
}

impl Default for TreeviewConfig {
    fn default() -> Self {
        Self {
            has_all_check_box: true,
            has_filter: false,
            has_collapse_expand: false,
            decouple_child_from_parent: false,
            max_height: 500,
            has_divider: true,
        }
    }
}

impl TreeviewConfig {
    pub fn new() -> Self {
        Self::default()
    }

    /// Parse a JSON object.
    pub fn from_json(json: &str) -> Result<Self, TreeviewError> {
        Ok(serde_json::from_str(json)?)
    }

    /// Parse a JSON object, falling back to the default on malformed input.
    pub fn from_json_or_default(json: &str) -> Self {
        Self::from_json(json).unwrap_or_else(|e| {
            warn!("Using default treeview config: {}", e);
            Self::default()
        })
    }

    pub fn with_all_check_box(mut self, enabled: bool) -> Self {
        self.has_all_check_box = enabled;
        self
    }

    pub fn with_filter(mut self, enabled: bool) -> Self {
        self.has_filter = enabled;
        self
    }

    pub fn with_collapse_expand(mut self, enabled: bool) -> Self {
        self.has_collapse_expand = enabled;
        self
    }

    pub fn with_divider(mut self, enabled: bool) -> Self {
        self.has_divider = enabled;
        self
    }

    /// Decouple children from their parent's checked state.
    pub fn decoupled(mut self) -> Self {
        self.decouple_child_from_parent = true;
        self
    }

    pub fn with_max_height(mut self, max_height: u32) -> Self {
        self.max_height = max_height;
        self
    }
}
