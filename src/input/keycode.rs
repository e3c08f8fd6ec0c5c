// SPDX-License-Identifier: GPL-3.0-only

//! Key code parsing for the key dispatcher.
//!
//! Layouts describe each key with an integer code. The codes in the table
//! below are commands; every other valid Unicode scalar value inserts that
//! character. The `55000` block shadows a few Hangul syllables, which can
//! therefore not be typed.
//!
//! | code        | key                          |
//! |-------------|------------------------------|
//! | `-10`       | grab (reserved)              |
//! | `-5`        | delete                       |
//! | `-3`        | cancel                       |
//! | `55000`     | focus previous field         |
//! | `55001`     | cursor to start              |
//! | `55002`     | cursor left                  |
//! | `55003`     | cursor right                 |
//! | `55004`     | cursor to end                |
//! | `55005`     | focus next field             |
//! | `55006`     | clear                        |
//! | `1001-1004` | cell navigation (reserved)   |

use std::fmt;

/// A parsed key code.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum KeyCode {
    /// Reserved for grabbing the keyboard from a key; ignored by dispatch.
    Grab,
    /// Delete the selection, or one character left of the cursor.
    Delete,
    /// Hide the keyboard.
    Cancel,
    /// Move focus to the previous field.
    Previous,
    /// Move the cursor to the start of the buffer.
    AllLeft,
    /// Move the cursor one character left.
    Left,
    /// Move the cursor one character right.
    Right,
    /// Move the cursor to the end of the buffer.
    AllRight,
    /// Move focus to the next field.
    Next,
    /// Clear the whole buffer.
    Clear,
    /// Reserved cell navigation; ignored by dispatch.
    CellUp,
    /// Reserved cell navigation; ignored by dispatch.
    CellDown,
    /// Reserved cell navigation; ignored by dispatch.
    CellLeft,
    /// Reserved cell navigation; ignored by dispatch.
    CellRight,
    /// Insert a literal character.
    Character(char),
}

impl KeyCode {
    pub const GRAB: i32 = -10;
    pub const DELETE: i32 = -5;
    pub const CANCEL: i32 = -3;
    pub const PREVIOUS: i32 = 55000;
    pub const ALL_LEFT: i32 = 55001;
    pub const LEFT: i32 = 55002;
    pub const RIGHT: i32 = 55003;
    pub const ALL_RIGHT: i32 = 55004;
    pub const NEXT: i32 = 55005;
    pub const CLEAR: i32 = 55006;
    pub const CELL_UP: i32 = 1001;
    pub const CELL_DOWN: i32 = 1002;
    pub const CELL_LEFT: i32 = 1003;
    pub const CELL_RIGHT: i32 = 1004;

    /// Parses an integer key code.
    ///
    /// Returns `None` for negative codes without a meaning and for values
    /// that are not Unicode scalar values (surrogates, out of range).
    pub fn from_code(code: i32) -> Option<Self> {
        let key = match code {
            Self::GRAB => Self::Grab,
            Self::DELETE => Self::Delete,
            Self::CANCEL => Self::Cancel,
            Self::PREVIOUS => Self::Previous,
            Self::ALL_LEFT => Self::AllLeft,
            Self::LEFT => Self::Left,
            Self::RIGHT => Self::Right,
            Self::ALL_RIGHT => Self::AllRight,
            Self::NEXT => Self::Next,
            Self::CLEAR => Self::Clear,
            Self::CELL_UP => Self::CellUp,
            Self::CELL_DOWN => Self::CellDown,
            Self::CELL_LEFT => Self::CellLeft,
            Self::CELL_RIGHT => Self::CellRight,
            other => {
                let scalar = u32::try_from(other).ok()?;
                Self::Character(char::from_u32(scalar)?)
            }
        };
        Some(key)
    }

    /// Returns the integer code this key was parsed from.
    pub fn code(&self) -> i32 {
        match self {
            Self::Grab => Self::GRAB,
            Self::Delete => Self::DELETE,
            Self::Cancel => Self::CANCEL,
            Self::Previous => Self::PREVIOUS,
            Self::AllLeft => Self::ALL_LEFT,
            Self::Left => Self::LEFT,
            Self::Right => Self::RIGHT,
            Self::AllRight => Self::ALL_RIGHT,
            Self::Next => Self::NEXT,
            Self::Clear => Self::CLEAR,
            Self::CellUp => Self::CELL_UP,
            Self::CellDown => Self::CELL_DOWN,
            Self::CellLeft => Self::CELL_LEFT,
            Self::CellRight => Self::CELL_RIGHT,
            Self::Character(c) => *c as i32,
        }
    }

    /// Returns `true` for codes the dispatcher recognizes but never acts on.
    pub fn is_reserved(&self) -> bool {
        matches!(
            self,
            Self::Grab | Self::CellUp | Self::CellDown | Self::CellLeft | Self::CellRight
        )
    }
}

impl fmt::Display for KeyCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            KeyCode::Character(c) => write!(f, "'{}'", c.escape_debug()),
            other => write!(f, "{:?}({})", other, other.code()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_command_codes() {
        assert_eq!(KeyCode::from_code(-5), Some(KeyCode::Delete));
        assert_eq!(KeyCode::from_code(-3), Some(KeyCode::Cancel));
        assert_eq!(KeyCode::from_code(55000), Some(KeyCode::Previous));
        assert_eq!(KeyCode::from_code(55006), Some(KeyCode::Clear));
        assert_eq!(KeyCode::from_code(1003), Some(KeyCode::CellLeft));
    }

    #[test]
    fn test_parse_character_codes() {
        assert_eq!(KeyCode::from_code(48), Some(KeyCode::Character('0')));
        assert_eq!(KeyCode::from_code(46), Some(KeyCode::Character('.')));
        assert_eq!(KeyCode::from_code(0x03C0), Some(KeyCode::Character('π')));
    }

    /// Test: malformed codes are rejected rather than inserted as garbage
    #[test]
    fn test_parse_malformed_codes() {
        assert_eq!(KeyCode::from_code(-1), None, "Unknown negative code");
        assert_eq!(KeyCode::from_code(0xD800), None, "Surrogate is not a char");
        assert_eq!(KeyCode::from_code(0x11_0000), None, "Beyond Unicode range");
    }

    #[test]
    fn test_code_is_inverse_of_from_code() {
        for code in [-10, -5, -3, 1001, 1004, 55000, 55003, 55006, 49, 0x20AC] {
            let key = KeyCode::from_code(code).unwrap();
            assert_eq!(key.code(), code, "code() should return {} for {:?}", code, key);
        }
    }

    #[test]
    fn test_reserved_codes() {
        assert!(KeyCode::Grab.is_reserved());
        assert!(KeyCode::CellDown.is_reserved());
        assert!(!KeyCode::Next.is_reserved());
        assert!(!KeyCode::Character('1').is_reserved());
    }

    #[test]
    fn test_display() {
        assert_eq!(KeyCode::Character('7').to_string(), "'7'");
        assert_eq!(KeyCode::Delete.to_string(), "Delete(-5)");
    }
}
