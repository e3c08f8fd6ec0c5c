// SPDX-License-Identifier: GPL-3.0-only

//! Host screen fields and focus handling.
//!
//! The [`Form`] owns the focusable fields of a screen in tab order and
//! tracks which one has focus. Focus changes are reported as
//! [`FocusChange`] values so the host can forward them to the keyboard
//! without the form knowing about it.

pub mod field;
pub mod view;

pub use field::{FieldId, FieldKind, TextField};
pub use view::render_field;

/// Direction for [`Form::focus_search`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FocusDirection {
    Backward,
    Forward,
}

/// A focus transition between two fields.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct FocusChange {
    /// Field that lost focus, if any
    pub lost: Option<FieldId>,
    /// Field that gained focus, if any
    pub gained: Option<FieldId>,
}

/// Ordered focusable fields with at most one focused.
#[derive(Debug, Clone, Default)]
pub struct Form {
    fields: Vec<TextField>,
    focused: Option<usize>,
}

impl Form {
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends a field at the end of the focus order.
    pub fn push(&mut self, field: TextField) {
        self.fields.push(field);
    }

    pub fn fields(&self) -> &[TextField] {
        &self.fields
    }

    pub fn field(&self, id: &str) -> Option<&TextField> {
        self.fields.iter().find(|f| f.id == id)
    }

    pub fn field_mut(&mut self, id: &str) -> Option<&mut TextField> {
        self.fields.iter_mut().find(|f| f.id == id)
    }

    /// Identifier of the focused field.
    pub fn focused_id(&self) -> Option<&str> {
        self.focused.map(|i| self.fields[i].id.as_str())
    }

    /// The focused field, whatever its kind.
    pub fn focused_mut(&mut self) -> Option<&mut TextField> {
        self.focused.map(|i| &mut self.fields[i])
    }

    pub fn is_focused(&self, id: &str) -> bool {
        self.focused_id() == Some(id)
    }

    /// Gives focus to `id`. Unknown ids and the already focused field
    /// produce an empty change.
    pub fn request_focus(&mut self, id: &str) -> FocusChange {
        let Some(index) = self.fields.iter().position(|f| f.id == id) else {
            return FocusChange::default();
        };
        self.focus_index(index)
    }

    /// Removes focus from the focused field.
    pub fn clear_focus(&mut self) -> FocusChange {
        FocusChange {
            lost: self.focused.take().map(|i| self.fields[i].id.clone()),
            gained: None,
        }
    }

    /// Finds the field next to the focused one in `direction`.
    ///
    /// Stops at either end of the focus order rather than wrapping.
    pub fn focus_search(&self, direction: FocusDirection) -> Option<&str> {
        let current = self.focused?;
        let index = match direction {
            FocusDirection::Backward => current.checked_sub(1)?,
            FocusDirection::Forward => current + 1,
        };
        self.fields.get(index).map(|f| f.id.as_str())
    }

    /// Moves focus in `direction` if there is a field to move to.
    pub fn move_focus(&mut self, direction: FocusDirection) -> FocusChange {
        match self.focus_search(direction).map(str::to_owned) {
            Some(id) => self.request_focus(&id),
            None => FocusChange::default(),
        }
    }

    fn focus_index(&mut self, index: usize) -> FocusChange {
        if self.focused == Some(index) {
            return FocusChange::default();
        }
        let lost = self.focused.map(|i| self.fields[i].id.clone());
        self.focused = Some(index);
        FocusChange {
            lost,
            gained: Some(self.fields[index].id.clone()),
        }
    }
}
