//! Error types

use thiserror::Error;

use crate::item::NodePath;

/// Errors returned by treeview operations.
#[derive(Debug, Error)]
pub enum TreeviewError {
    /// No displayed node at the given path.
    #[error("No displayed node at {path}")]
    NodeNotFound {
        /// Path into the displayed forest.
        path: NodePath,
    },

    /// The node is disabled and cannot be toggled by the user.
    #[error("Node at {path} is disabled")]
    NodeDisabled {
        /// Path into the displayed forest.
        path: NodePath,
    },

    /// Configuration JSON could not be parsed.
    #[error("Invalid treeview config: {0}")]
    InvalidConfig(#[from] serde_json::Error),
}
