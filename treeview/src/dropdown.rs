//! Dropdown container hosting a treeview.

use log::debug;

use crate::state::Treeview;

/// Where a click landed, relative to the dropdown.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ClickTarget {
    /// The toggle button.
    Button,
    /// Anywhere inside the open menu, including the tree.
    Menu,
    /// Outside the dropdown.
    Outside,
}

/// A button that opens a menu containing a [`Treeview`].
///
/// The container only controls visibility. Clicks inside the menu never
/// close it, so toggling tree nodes keeps the menu open.
#[derive(Debug)]
pub struct DropdownTreeview<V> {
    treeview: Treeview<V>,
    open: bool,
    button_class: String,
}

impl<V: Clone> DropdownTreeview<V> {
    /// Wrap a treeview in a closed dropdown.
    pub fn new(treeview: Treeview<V>) -> Self {
        Self {
            treeview,
            open: false,
            button_class: "btn-outline-secondary".to_string(),
        }
    }

    /// Set the CSS class of the toggle button.
    pub fn with_button_class(mut self, class: impl Into<String>) -> Self {
        self.button_class = class.into();
        self
    }

    pub fn treeview(&self) -> &Treeview<V> {
        &self.treeview
    }

    pub fn treeview_mut(&mut self) -> &mut Treeview<V> {
        &mut self.treeview
    }

    pub fn button_class(&self) -> &str {
        &self.button_class
    }

    /// Button label, summarising the selection.
    pub fn button_text(&self) -> String {
        self.treeview.text()
    }

    pub fn is_open(&self) -> bool {
        self.open
    }

    pub fn open(&mut self) {
        self.set_open(true);
    }

    pub fn close(&mut self) {
        self.set_open(false);
    }

    pub fn toggle(&mut self) {
        self.set_open(!self.open);
    }

    /// Route a click. Returns whether visibility changed.
    pub fn on_click(&mut self, target: ClickTarget) -> bool {
        let was_open = self.open;
        match target {
            ClickTarget::Button => self.toggle(),
            ClickTarget::Menu => {}
            ClickTarget::Outside => self.close(),
        }
        was_open != self.open
    }

    /// Escape closes the menu.
    pub fn on_escape(&mut self) -> bool {
        let was_open = self.open;
        self.close();
        was_open
    }

    fn set_open(&mut self, open: bool) {
        if self.open != open {
            debug!("{}: dropdown open={}", self.treeview.id(), open);
            self.open = open;
        }
    }
}
