// SPDX-License-Identifier: GPL-3.0-only

//! Sizing calculations for the floating keyboard.
//!
//! The keyboard has a fixed pixel width. Key widths are relative to a base
//! unit chosen so the widest row exactly fills the width inside the
//! keyboard padding. Rows have a fixed height, so the keyboard height only
//! depends on the row count and the handle strip above them.
//!
//! ```text
//! +--------------------------------+  -
//! |          handle strip          |  | strip_height
//! +--------------------------------+  -
//! |  [ 7 ] [ 8 ] [ 9 ] [ ⌫ ]       |  padding + rows * KEY_HEIGHT
//! |  [ 4 ] [ 5 ] [ 6 ] [CLR]       |  + (rows - 1) * KEY_SPACING
//! +--------------------------------+  + padding
//! ```

use crate::app_settings::{KEY_HEIGHT, KEY_SPACING, KEYBOARD_PADDING};
use crate::keyboard::geometry::Extent;
use crate::layout::Layout;

/// Calculates the base unit for a row area `inner_width` pixels wide.
///
/// A key `w` units wide is drawn `w * base_unit - KEY_SPACING` pixels wide,
/// so a row of `max_row_units` units plus its spacing fills `inner_width`.
/// Returns a minimum of 1.0.
pub fn calculate_base_unit(inner_width: f32, max_row_units: f32) -> f32 {
    if max_row_units <= 0.0 || inner_width <= 0.0 {
        return 1.0;
    }
    ((inner_width + KEY_SPACING) / max_row_units).max(1.0)
}

/// Pixel width of a key `width_units` wide.
pub fn key_width(width_units: f32, base_unit: f32) -> f32 {
    (width_units * base_unit - KEY_SPACING).max(1.0)
}

/// Width available to key rows inside a keyboard `keyboard_width` wide.
pub fn inner_width(keyboard_width: i32) -> f32 {
    (keyboard_width as f32 - 2.0 * KEYBOARD_PADDING).max(0.0)
}

/// Height of the key area below the handle strip.
pub fn rows_height(row_count: usize) -> f32 {
    if row_count == 0 {
        return 2.0 * KEYBOARD_PADDING;
    }
    let rows = row_count as f32;
    2.0 * KEYBOARD_PADDING + rows * KEY_HEIGHT + (rows - 1.0) * KEY_SPACING
}

/// Total keyboard size for `layout` at `width` pixels with a handle strip
/// `strip_height` pixels tall.
pub fn keyboard_extent(layout: &Layout, width: i32, strip_height: i32) -> Extent {
    let height = strip_height as f32 + rows_height(layout.rows.len());
    Extent::new(width.max(0), height.ceil() as i32)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::layout::{Key, Row};

    fn layout(row_units: &[f32]) -> Layout {
        Layout {
            name: "Test".into(),
            rows: row_units
                .iter()
                .map(|units| Row {
                    keys: vec![Key::new("x", 120).with_width(*units)],
                })
                .collect(),
        }
    }

    /// Test: the widest row plus its spacing fills the inner width exactly
    #[test]
    fn test_widest_row_fills_inner_width() {
        let inner = inner_width(360);
        assert_eq!(inner, 348.0);

        let base = calculate_base_unit(inner, 4.0);
        let row: f32 = (0..4).map(|_| key_width(1.0, base)).sum::<f32>() + 3.0 * KEY_SPACING;
        assert!((row - inner).abs() < 0.001, "Row is {} wide, expected {}", row, inner);
    }

    #[test]
    fn test_wide_key_spans_neighbours() {
        let base = calculate_base_unit(348.0, 4.0);
        let double = key_width(2.0, base);
        let two_single = 2.0 * key_width(1.0, base) + KEY_SPACING;
        assert!((double - two_single).abs() < 0.001);
    }

    #[test]
    fn test_base_unit_degenerate_inputs() {
        assert_eq!(calculate_base_unit(0.0, 4.0), 1.0);
        assert_eq!(calculate_base_unit(300.0, 0.0), 1.0);
        assert_eq!(calculate_base_unit(-5.0, 4.0), 1.0);
    }

    #[test]
    fn test_keyboard_extent() {
        // 28 + 6 + 5 * 48 + 4 * 4 + 6 = 296
        let extent = keyboard_extent(&layout(&[1.0; 5]), 360, 28);
        assert_eq!(extent, Extent::new(360, 296));
    }

    #[test]
    fn test_keyboard_extent_tracks_strip_height() {
        let small = keyboard_extent(&layout(&[1.0]), 200, 28);
        let large = keyboard_extent(&layout(&[1.0]), 200, 56);
        assert_eq!(large.height - small.height, 28);
        assert_eq!(small.width, 200);
    }
}
