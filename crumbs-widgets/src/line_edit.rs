// SPDX-License-Identifier: LGPL-3.0-only
//! Contains the [AddressEdit] state behind the text-edit view.

/// The single-line edit field shown in edit view.
///
/// Holds the editing state the controller needs: the text, visibility,
/// focus, whether the text is fully selected, and whether a context menu on
/// the field is currently open (which suppresses the focus-loss revert).
#[derive(Debug, Default)]
pub struct AddressEdit {
    text: String,
    visible: bool,
    focused: bool,
    all_selected: bool,
    context_menu_open: bool,
}

impl AddressEdit {
    /// Create a hidden, empty field.
    pub fn new() -> Self {
        Self::default()
    }

    /// The current text.
    pub fn text(&self) -> &str {
        &self.text
    }

    /// Replace the text. Any selection is dropped.
    pub fn set_text(&mut self, text: impl Into<String>) {
        self.text = text.into();
        self.all_selected = false;
    }

    /// Show the field, give it focus and select the whole text.
    pub fn show_and_focus(&mut self) {
        self.visible = true;
        self.focused = true;
        self.all_selected = true;
    }

    /// Hide the field and drop focus and selection.
    pub fn hide(&mut self) {
        self.visible = false;
        self.focused = false;
        self.all_selected = false;
    }

    /// Whether the field is shown.
    pub fn is_visible(&self) -> bool {
        self.visible
    }

    /// Whether the field holds keyboard focus.
    pub fn has_focus(&self) -> bool {
        self.focused
    }

    /// Record a focus change reported by the host.
    pub fn set_focus(&mut self, focused: bool) {
        self.focused = focused;
    }

    /// Whether the whole text is selected.
    pub fn all_selected(&self) -> bool {
        self.all_selected
    }

    /// Record that a context menu on the field opened or closed.
    pub fn set_context_menu_open(&mut self, open: bool) {
        self.context_menu_open = open;
    }

    /// Whether a context menu on the field is open.
    pub fn context_menu_open(&self) -> bool {
        self.context_menu_open
    }
}
