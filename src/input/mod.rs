// SPDX-License-Identifier: GPL-3.0-only

//! Input handling for the floating keyboard.
//!
//! Key buttons carry the integer code from the layout definition. This
//! module parses those codes and applies them to the focused text field.
//!
//! # Example Usage
//!
//! ```rust,ignore
//! use floatboard::form::TextField;
//! use floatboard::input::{dispatch, Dispatch, KeyCode};
//!
//! let mut field = TextField::new("amount").with_text("1234");
//! field.set_cursor(2);
//!
//! let outcome = dispatch(KeyCode::Delete, Some(&mut field));
//! assert_eq!(outcome, Dispatch::Edited);
//! assert_eq!(field.text(), "134");
//!
//! // Keys the host has to act on are returned instead of applied
//! assert_eq!(dispatch(KeyCode::Cancel, Some(&mut field)), Dispatch::Hide);
//! ```

pub mod dispatch;
pub mod keycode;

pub use dispatch::{dispatch, dispatch_code, Dispatch};
pub use keycode::KeyCode;
