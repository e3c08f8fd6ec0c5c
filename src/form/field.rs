// SPDX-License-Identifier: GPL-3.0-only

//! Text field model edited by the key dispatcher.
//!
//! Positions are character indices, not byte offsets. The selection is kept
//! normalized (`start <= end`); a collapsed selection is the cursor.

use std::ops::Range;

/// Identifier of a field on the host screen.
pub type FieldId = String;

/// What kind of view a focusable field is.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldKind {
    /// A plain text input the keyboard can edit.
    Text,
    /// A focusable view without an editable buffer.
    Static,
}

/// A text buffer with a selection.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TextField {
    /// Identifier used for registration and focus lookups
    pub id: FieldId,
    /// Kind of view; only `Text` fields accept key events
    pub kind: FieldKind,
    /// Hint shown while the buffer is empty
    pub hint: Option<String>,
    text: String,
    start: usize,
    end: usize,
}

impl TextField {
    /// Creates an empty plain text field.
    pub fn new(id: impl Into<FieldId>) -> Self {
        Self {
            id: id.into(),
            kind: FieldKind::Text,
            hint: None,
            text: String::new(),
            start: 0,
            end: 0,
        }
    }

    /// Creates a focusable field that is not a text input.
    pub fn non_text(id: impl Into<FieldId>) -> Self {
        Self {
            kind: FieldKind::Static,
            ..Self::new(id)
        }
    }

    /// Sets the hint text.
    pub fn with_hint(mut self, hint: impl Into<String>) -> Self {
        self.hint = Some(hint.into());
        self
    }

    /// Replaces the buffer and puts the cursor at its end.
    pub fn with_text(mut self, text: impl Into<String>) -> Self {
        self.text = text.into();
        let len = self.len();
        self.start = len;
        self.end = len;
        self
    }

    /// Returns `true` if the keyboard may edit this field.
    pub fn is_text_input(&self) -> bool {
        self.kind == FieldKind::Text
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    /// Number of characters in the buffer.
    pub fn len(&self) -> usize {
        self.text.chars().count()
    }

    pub fn is_empty(&self) -> bool {
        self.text.is_empty()
    }

    pub fn selection_start(&self) -> usize {
        self.start
    }

    pub fn selection_end(&self) -> usize {
        self.end
    }

    /// Returns the selected range, or `None` when the selection is collapsed.
    pub fn selection(&self) -> Option<Range<usize>> {
        (self.start != self.end).then(|| self.start..self.end)
    }

    /// Cursor position (start of the selection).
    pub fn cursor(&self) -> usize {
        self.start
    }

    /// Selects `a..b` in either order, clamped to the buffer.
    pub fn set_selection(&mut self, a: usize, b: usize) {
        let len = self.len();
        let (a, b) = (a.min(len), b.min(len));
        self.start = a.min(b);
        self.end = a.max(b);
    }

    /// Collapses the selection to a cursor at `position`.
    pub fn set_cursor(&mut self, position: usize) {
        self.set_selection(position, position);
    }

    /// Splits the buffer around the selection: before, selected, after.
    pub fn segments(&self) -> (&str, &str, &str) {
        let start = self.byte_offset(self.start);
        let end = self.byte_offset(self.end);
        (&self.text[..start], &self.text[start..end], &self.text[end..])
    }

    /// Removes the characters in `range` and collapses the cursor at its start.
    pub fn delete(&mut self, range: Range<usize>) {
        let len = self.len();
        let (from, to) = (range.start.min(len), range.end.min(len));
        if from >= to {
            return;
        }
        let byte_range = self.byte_offset(from)..self.byte_offset(to);
        self.text.replace_range(byte_range, "");
        self.set_cursor(from);
    }

    /// Deletes the selection if there is one, otherwise the character left
    /// of the cursor. A no-op with a collapsed cursor at position 0.
    pub fn delete_backward(&mut self) {
        if let Some(selection) = self.selection() {
            self.delete(selection);
        } else if self.start > 0 {
            self.delete(self.start - 1..self.start);
        }
    }

    /// Empties the buffer.
    pub fn clear(&mut self) {
        self.text.clear();
        self.set_cursor(0);
    }

    /// Replaces the selection (if any) with `c` and places the cursor after it.
    pub fn insert_char(&mut self, c: char) {
        if let Some(selection) = self.selection() {
            self.delete(selection);
        }
        let at = self.byte_offset(self.start);
        self.text.insert(at, c);
        self.set_cursor(self.start + 1);
    }

    /// Moves the cursor one character left of the selection start.
    pub fn move_left(&mut self) {
        if self.start > 0 {
            self.set_cursor(self.start - 1);
        }
    }

    /// Moves the cursor one character right of the selection start.
    pub fn move_right(&mut self) {
        if self.start < self.len() {
            self.set_cursor(self.start + 1);
        }
    }

    pub fn move_to_start(&mut self) {
        self.set_cursor(0);
    }

    pub fn move_to_end(&mut self) {
        self.set_cursor(self.len());
    }

    fn byte_offset(&self, char_index: usize) -> usize {
        self.text
            .char_indices()
            .nth(char_index)
            .map_or(self.text.len(), |(offset, _)| offset)
    }
}
