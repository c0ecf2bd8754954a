//! Check-state propagation across tree levels.
//!
//! A user toggle runs in three steps over the displayed forest:
//! 1. the toggled node and, unless decoupled, its displayed subtree take the
//!    new value
//! 2. unless decoupled, each ancestor re-derives its flag from its direct
//!    displayed children, innermost first
//! 3. the top-level entry writes overlay state back into the original forest

use log::trace;

use crate::error::TreeviewError;
use crate::filter::{FilterNode, Located, locate, locate_mut};
use crate::item::{NodePath, TreeNode, node_at_mut};

/// Agreement among a set of checked flags.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Consensus {
    /// No flags at all.
    Empty,
    /// Every flag has this value.
    All(bool),
    /// Flags disagree.
    Mixed,
}

impl Consensus {
    pub fn of(flags: impl IntoIterator<Item = bool>) -> Self {
        let mut consensus = Consensus::Empty;
        for flag in flags {
            consensus = match consensus {
                Consensus::Empty => Consensus::All(flag),
                Consensus::All(value) if value == flag => consensus,
                _ => return Consensus::Mixed,
            };
        }
        consensus
    }

    /// Stored checked value for a parent with this consensus.
    ///
    /// Mixed and empty both store `false`; the mixed case is displayed as
    /// indeterminate.
    pub fn resolve(self) -> bool {
        self == Consensus::All(true)
    }
}

/// Tri-state checkbox value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum CheckState {
    #[default]
    Unchecked,
    Checked,
    Indeterminate,
}

impl CheckState {
    /// Combine a stored flag with the children's consensus.
    pub fn from_parts(checked: bool, children: Consensus) -> Self {
        match (children, checked) {
            (Consensus::Mixed, _) => CheckState::Indeterminate,
            (_, true) => CheckState::Checked,
            (_, false) => CheckState::Unchecked,
        }
    }

    pub fn is_checked(self) -> bool {
        self == CheckState::Checked
    }

    pub fn is_indeterminate(self) -> bool {
        self == CheckState::Indeterminate
    }
}

/// Apply a user toggle to the displayed node at `path`.
///
/// `path` indexes the displayed forest. With `decoupled`, only the addressed
/// node changes (plus the overlay write-back).
pub fn set_checked<V>(
    displayed: &mut [FilterNode<V>],
    items: &mut [TreeNode<V>],
    path: &NodePath,
    checked: bool,
    decoupled: bool,
) -> Result<(), TreeviewError> {
    let indices = path.indices();
    let target = locate(displayed, items, indices).ok_or_else(|| TreeviewError::NodeNotFound {
        path: path.clone(),
    })?;
    if target.is_disabled() {
        return Err(TreeviewError::NodeDisabled { path: path.clone() });
    }

    trace!("Set {} checked={} (decoupled: {})", path, checked, decoupled);
    apply_downward(displayed, items, indices, checked, decoupled)?;
    if !decoupled {
        propagate_upward(displayed, items, indices);
    }
    if let Some(top) = indices.first().and_then(|i| displayed.get(*i)) {
        top.write_back(items);
    }
    Ok(())
}

/// Set the addressed node and, when coupled, its whole displayed subtree.
fn apply_downward<V>(
    displayed: &mut [FilterNode<V>],
    items: &mut [TreeNode<V>],
    indices: &[usize],
    checked: bool,
    decoupled: bool,
) -> Result<(), TreeviewError> {
    let located = locate_mut(displayed, items, indices).ok_or_else(|| {
        TreeviewError::NodeNotFound {
            path: NodePath::from(indices),
        }
    })?;
    match located {
        Located::Original(origin) => {
            if let Some(node) = node_at_mut(items, &origin) {
                if decoupled {
                    node.set_checked(checked);
                } else {
                    node.set_checked_recursive(checked);
                }
            }
        }
        Located::Overlay(overlay) => {
            if decoupled {
                overlay.set_checked(checked);
            } else {
                overlay.set_checked_recursive(items, checked);
            }
        }
    }
    Ok(())
}

/// Re-derive every ancestor of `indices` from its displayed children,
/// innermost first.
fn propagate_upward<V>(
    displayed: &mut [FilterNode<V>],
    items: &mut [TreeNode<V>],
    indices: &[usize],
) {
    for depth in (1..indices.len()).rev() {
        let parent = &indices[..depth];
        match locate_mut(displayed, items, parent) {
            Some(Located::Original(origin)) => {
                if let Some(node) = node_at_mut(items, &origin) {
                    let checked = node.children_consensus().resolve();
                    trace!("Parent {} -> {}", origin, checked);
                    node.set_checked(checked);
                }
            }
            Some(Located::Overlay(overlay)) => {
                let checked = overlay.children_consensus(items).resolve();
                trace!("Overlay parent of {} -> {}", overlay.origin(), checked);
                overlay.set_checked(checked);
            }
            None => break,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_consensus() {
        assert_eq!(Consensus::of([]), Consensus::Empty);
        assert_eq!(Consensus::of([true, true]), Consensus::All(true));
        assert_eq!(Consensus::of([false]), Consensus::All(false));
        assert_eq!(Consensus::of([true, false, true]), Consensus::Mixed);
    }

    #[test]
    fn test_resolve_stores_mixed_as_unchecked() {
        assert!(Consensus::All(true).resolve());
        assert!(!Consensus::All(false).resolve());
        assert!(!Consensus::Mixed.resolve());
        assert!(!Consensus::Empty.resolve());
    }

    #[test]
    fn test_check_state_from_parts() {
        assert_eq!(
            CheckState::from_parts(false, Consensus::Mixed),
            CheckState::Indeterminate
        );
        assert_eq!(
            CheckState::from_parts(true, Consensus::Empty),
            CheckState::Checked
        );
        assert_eq!(
            CheckState::from_parts(false, Consensus::All(false)),
            CheckState::Unchecked
        );
    }
}
