// SPDX-License-Identifier: GPL-3.0-only

//! Layout parsing logic for loading JSON layout definitions.
//!
//! Layouts come from three places: a JSON string, a file on disk, or the
//! built-in set under `resources/layouts/` that is embedded into the binary.

use crate::layout::types::{Layout, ParseError, ParseResult};
use crate::layout::validation::validate_layout;
use rust_embed::RustEmbed;
use std::fs;

/// Layouts shipped inside the binary.
#[derive(RustEmbed)]
#[folder = "resources/layouts/"]
struct BuiltinLayouts;

/// Parses a layout from a JSON string and validates it.
///
/// # Example
///
/// ```rust,ignore
/// use floatboard::layout::parse_layout_from_string;
///
/// let json = r#"{ "name": "Digits", "rows": [ { "keys": [ { "label": "1", "code": 49 } ] } ] }"#;
/// let result = parse_layout_from_string(json).unwrap();
/// assert_eq!(result.layout.rows.len(), 1);
/// ```
pub fn parse_layout_from_string(json: &str) -> Result<ParseResult<Layout>, ParseError> {
    let layout: Layout = serde_json::from_str(json).map_err(ParseError::json_error)?;
    validate_layout(layout)
}

/// Parses a layout from a JSON file.
///
/// I/O failures, JSON syntax errors and validation errors are reported with
/// the file path attached.
pub fn parse_layout_file(path: &str) -> Result<ParseResult<Layout>, ParseError> {
    let json_str = fs::read_to_string(path).map_err(|e| ParseError::io_error_with_path(e, path))?;
    parse_layout_from_string(&json_str).map_err(|e| e.with_path(path))
}

/// Names of the built-in layouts, sorted.
pub fn builtin_layout_names() -> Vec<String> {
    let mut names: Vec<String> = BuiltinLayouts::iter()
        .filter_map(|file| file.strip_suffix(".json").map(str::to_owned))
        .collect();
    names.sort();
    names
}

/// Parses one of the built-in layouts by name (file stem).
pub fn parse_builtin_layout(name: &str) -> Result<ParseResult<Layout>, ParseError> {
    let file_name = format!("{}.json", name);
    let Some(file) = BuiltinLayouts::get(&file_name) else {
        return Err(ParseError::UnknownLayout {
            name: name.to_string(),
            available: builtin_layout_names(),
        });
    };

    let layout: Layout = serde_json::from_slice(&file.data)
        .map_err(|e| ParseError::json_error_with_path(e, file_name.as_str()))?;
    validate_layout(layout).map_err(|e| e.with_path(&file_name))
}

/// Loads a layout from a built-in name or, for values ending in `.json`, a file path.
pub fn load_layout(source: &str) -> Result<ParseResult<Layout>, ParseError> {
    if source.ends_with(".json") {
        parse_layout_file(source)
    } else {
        parse_builtin_layout(source)
    }
}

// ============================================================================
// Tests
// ============================================================================
