// SPDX-License-Identifier: GPL-3.0-only

//! Validation rules for key layout definitions.
//!
//! Structural problems (no rows, empty rows, non-positive widths) are fatal.
//! Keys the dispatcher would never act on are reported as warnings so a
//! layout still loads while it is being edited.

use crate::input::KeyCode;
use crate::layout::types::{Layout, ParseError, ParseResult, Severity, ValidationIssue};

/// Validates a layout and returns it with warnings.
pub fn validate_layout(layout: Layout) -> Result<ParseResult<Layout>, ParseError> {
    let mut issues = Vec::new();

    validate_structure(&layout, &mut issues);
    validate_keys(&layout, &mut issues);

    let (errors, warnings): (Vec<_>, Vec<_>) = issues
        .into_iter()
        .partition(|issue| issue.severity == Severity::Error);

    if !errors.is_empty() {
        return Err(ParseError::validation_error(errors));
    }

    Ok(ParseResult::with_warnings(layout, warnings))
}

/// Checks rows and widths.
pub fn validate_structure(layout: &Layout, issues: &mut Vec<ValidationIssue>) {
    if layout.name.is_empty() {
        issues.push(
            ValidationIssue::warning("Layout name is empty", "name")
                .with_suggestion("Provide a descriptive name for the layout"),
        );
    }

    if layout.rows.is_empty() {
        issues.push(
            ValidationIssue::error("Layout has no rows", "rows")
                .with_suggestion("Add at least one row of keys"),
        );
    }

    for (r, row) in layout.rows.iter().enumerate() {
        if row.keys.is_empty() {
            issues.push(ValidationIssue::error(
                "Row has no keys",
                format!("rows[{}]", r),
            ));
        }
    }

    for (r, k, key) in layout.keys() {
        if key.width.is_nan() || key.width <= 0.0 {
            issues.push(
                ValidationIssue::error(
                    format!("Key width {} is not positive", key.width),
                    format!("rows[{}].keys[{}].width", r, k),
                )
                .with_suggestion("Use a relative width such as 1.0 or 1.5"),
            );
        }
    }
}

/// Checks labels and codes.
pub fn validate_keys(layout: &Layout, issues: &mut Vec<ValidationIssue>) {
    for (r, k, key) in layout.keys() {
        let path = format!("rows[{}].keys[{}]", r, k);

        if key.label.trim().is_empty() {
            issues.push(ValidationIssue::warning("Key label is empty", format!("{}.label", path)));
        }

        match KeyCode::from_code(key.code) {
            None => issues.push(
                ValidationIssue::warning(
                    format!("Key code {} is not a command or a character", key.code),
                    format!("{}.code", path),
                )
                .with_suggestion("The key will do nothing when pressed"),
            ),
            Some(code) if code.is_reserved() => issues.push(ValidationIssue::warning(
                format!("Key code {} is reserved and ignored", key.code),
                format!("{}.code", path),
            )),
            Some(_) => {}
        }
    }
}
