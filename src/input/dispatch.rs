// SPDX-License-Identifier: GPL-3.0-only

//! Key dispatch into the focused text field.
//!
//! The host passes the field that currently holds focus (if any) with every
//! key event. Edits are applied to it directly; keys that need the host
//! (hiding the keyboard, moving focus) are returned as a [`Dispatch`].

use crate::form::TextField;
use crate::input::keycode::KeyCode;

/// What the host has to do after a key was dispatched.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Dispatch {
    /// The focused field was edited or its cursor moved.
    Edited,
    /// The keyboard should be hidden.
    Hide,
    /// Focus should move to the previous field.
    FocusPrevious,
    /// Focus should move to the next field.
    FocusNext,
    /// Nothing happened.
    Ignored,
}

/// Applies `key` to `target`.
///
/// Without a target, or with a target that is not a plain text input, every
/// key (including cancel) is dropped.
pub fn dispatch(key: KeyCode, target: Option<&mut TextField>) -> Dispatch {
    let Some(field) = target.filter(|f| f.is_text_input()) else {
        tracing::trace!("Dropping {} without a text field in focus", key);
        return Dispatch::Ignored;
    };

    match key {
        KeyCode::Cancel => return Dispatch::Hide,
        KeyCode::Previous => return Dispatch::FocusPrevious,
        KeyCode::Next => return Dispatch::FocusNext,
        KeyCode::Delete => field.delete_backward(),
        KeyCode::Clear => field.clear(),
        KeyCode::Left => field.move_left(),
        KeyCode::Right => field.move_right(),
        KeyCode::AllLeft => field.move_to_start(),
        KeyCode::AllRight => field.move_to_end(),
        KeyCode::Character(c) => field.insert_char(c),
        KeyCode::Grab
        | KeyCode::CellUp
        | KeyCode::CellDown
        | KeyCode::CellLeft
        | KeyCode::CellRight => return Dispatch::Ignored,
    }

    tracing::debug!(
        "{} applied to '{}': {} chars, selection {}..{}",
        key,
        field.id,
        field.len(),
        field.selection_start(),
        field.selection_end()
    );
    Dispatch::Edited
}

/// Parses `code` and dispatches it; malformed codes are ignored.
pub fn dispatch_code(code: i32, target: Option<&mut TextField>) -> Dispatch {
    match KeyCode::from_code(code) {
        Some(key) => dispatch(key, target),
        None => {
            tracing::debug!("Ignoring malformed key code {}", code);
            Dispatch::Ignored
        }
    }
}
