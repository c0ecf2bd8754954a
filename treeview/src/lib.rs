pub mod all;
pub mod config;
pub mod dropdown;
pub mod error;
pub mod events;
pub mod filter;
pub mod header;
pub mod i18n;
pub mod item;
pub mod propagation;
pub mod rows;
pub mod selection;
pub mod state;

pub use all::{AllItem, AllState};
pub use config::TreeviewConfig;
pub use dropdown::{ClickTarget, DropdownTreeview};
pub use error::TreeviewError;
pub use events::{TreeviewEvent, TreeviewEventKind, TreeviewId};
pub use filter::{DisplayRef, FilterNode, OverlayNode};
pub use i18n::{DefaultTreeviewI18n, TreeviewI18n};
pub use item::{NodePath, TreeNode};
pub use propagation::{CheckState, Consensus};
pub use selection::{Selection, SelectionItem};
pub use state::{Refresh, Treeview};

pub mod prelude {
    pub use crate::all::AllState;
    pub use crate::config::TreeviewConfig;
    pub use crate::dropdown::{ClickTarget, DropdownTreeview};
    pub use crate::error::TreeviewError;
    pub use crate::events::{TreeviewEvent, TreeviewEventKind};
    pub use crate::i18n::TreeviewI18n;
    pub use crate::item::{NodePath, TreeNode};
    pub use crate::propagation::CheckState;
    pub use crate::rows::FlatRow;
    pub use crate::selection::Selection;
    pub use crate::state::{Refresh, Treeview};
}
