//! Output events raised by a treeview.

use std::fmt;
use std::sync::atomic::{AtomicUsize, Ordering};

/// Unique identifier for a Treeview instance.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct TreeviewId(usize);

impl TreeviewId {
    pub(crate) fn new() -> Self {
        static COUNTER: AtomicUsize = AtomicUsize::new(0);
        Self(COUNTER.fetch_add(1, Ordering::SeqCst))
    }
}

impl fmt::Display for TreeviewId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "__treeview_{}", self.0)
    }
}

/// The kind of event raised.
#[derive(Debug, Clone, PartialEq)]
pub enum TreeviewEventKind<V> {
    /// The selection was recomputed; carries the checked values.
    SelectedChange(Vec<V>),
    /// The filter text changed.
    FilterChange(String),
}

/// An event queued on a treeview, drained by the host.
#[derive(Debug, Clone, PartialEq)]
pub struct TreeviewEvent<V> {
    pub kind: TreeviewEventKind<V>,
    pub source: TreeviewId,
}

impl<V> TreeviewEvent<V> {
    pub fn new(kind: TreeviewEventKind<V>, source: TreeviewId) -> Self {
        Self { kind, source }
    }
}
