// SPDX-License-Identifier: GPL-3.0-only

//! Messages emitted by the keyboard view.

/// Messages emitted by the keyboard widget.
///
/// Drag gestures do not produce widget messages: the host feeds raw pointer
/// events to [`FloatingKeyboard`](crate::keyboard::FloatingKeyboard)
/// directly so it can see presses on the handle strip.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KeyboardMessage {
    /// A key was pressed. Contains its raw key code.
    KeyPressed(i32),
}
