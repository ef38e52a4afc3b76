// SPDX-License-Identifier: LGPL-3.0-only
use bitflags::bitflags;

bitflags! {
    /// Flags describing what a widget or layout operation invalidated.
    ///
    /// Returned by update and geometry passes so the host event loop knows
    /// whether to repaint, re-run layout, or move focus.
    #[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
    pub struct Update: u8 {
        /// The visual state changed and a repaint is needed.
        const DRAW = 0b001;
        /// The geometry changed and another layout pass is needed.
        const LAYOUT = 0b010;
        /// Input focus moved to another widget.
        const FOCUS = 0b100;
    }
}
