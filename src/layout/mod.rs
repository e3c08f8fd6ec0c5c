// SPDX-License-Identifier: GPL-3.0-only

//! Key layouts for the floating keyboard.
//!
//! A layout is a list of rows, each a list of keys with a label, an integer
//! key code and a relative width:
//!
//! ```json
//! {
//!   "name": "Numeric",
//!   "rows": [
//!     { "keys": [ { "label": "7", "code": 55 }, { "label": "⌫", "code": -5 } ] },
//!     { "keys": [ { "label": "0", "code": 48, "width": 2.0 } ] }
//!   ]
//! }
//! ```
//!
//! Codes are interpreted by [`crate::input::KeyCode`]. Built-in layouts are
//! embedded from `resources/layouts/`; custom layouts are loaded from disk.
//!
//! # Example Usage
//!
//! ```rust,ignore
//! use floatboard::layout::load_layout;
//!
//! match load_layout("numeric") {
//!     Ok(result) => {
//!         for warning in &result.warnings {
//!             println!("{}", warning);
//!         }
//!         println!("{} rows", result.layout.rows.len());
//!     }
//!     Err(e) => eprintln!("Failed to load layout: {}", e),
//! }
//! ```

pub mod parser;
pub mod types;
pub mod validation;

pub use parser::{
    builtin_layout_names, load_layout, parse_builtin_layout, parse_layout_file,
    parse_layout_from_string,
};
pub use types::{Key, Layout, ParseError, ParseResult, Row, Severity, ValidationIssue};
pub use validation::validate_layout;
