// SPDX-License-Identifier: LGPL-3.0-only
//! Input event primitives forwarded by the host window.

/// A mouse button reported with a click event.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum MouseButton {
    /// The primary button.
    Left,
    /// The secondary button.
    Right,
    /// The wheel button.
    Middle,
}

/// A key press reported to a focused text field.
///
/// Only the keys the address bar reacts to are distinguished; everything
/// else is forwarded to the text field as [Key::Other].
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Key {
    /// Return or keypad enter: commit the edited text.
    Enter,
    /// Escape: discard the edited text.
    Escape,
    /// Any other key, handled by the text field itself.
    Other,
}
