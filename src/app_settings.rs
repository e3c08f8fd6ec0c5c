// SPDX-License-Identifier: GPL-3.0-only

//! Centralized application settings and constants.

/// Application ID in RDNN (reverse domain name notation) format.
pub const APP_ID: &str = "io.github.floatboard.Floatboard";

/// Default host window width in pixels.
pub const DEFAULT_WIDTH: f32 = 480.0;

/// Default host window height in pixels.
pub const DEFAULT_HEIGHT: f32 = 720.0;

/// Minimum host window width in pixels.
pub const MIN_WIDTH: f32 = 320.0;

/// Minimum host window height in pixels.
pub const MIN_HEIGHT: f32 = 400.0;

/// Padding of the stage the keyboard floats in, on every side.
pub const STAGE_PADDING: i32 = 12;

/// Height of the draggable handle strip in density-independent pixels.
pub const HANDLE_HEIGHT_DP: f32 = 28.0;

/// Depth of the full-width band at the bottom of the handle, in pixels.
pub const HANDLE_BAND_DEPTH: f32 = 25.0;

/// Corner radius applied to the handle outline.
pub const HANDLE_CORNER_RADIUS: f32 = 20.0;

/// Handle colour while idle, as `0xAARRGGBB`.
pub const HANDLE_COLOR: u32 = 0xAAD1_D6D9;

/// Handle colour while a drag gesture holds it, as `0xAARRGGBB`.
pub const HANDLE_PRESSED_COLOR: u32 = 0xFFD1_D6D9;

/// Reference density: one dp equals one px at this DPI.
pub const DENSITY_DEFAULT: u32 = 160;

/// Default keyboard width in pixels.
pub const KEYBOARD_WIDTH: i32 = 360;

/// Height of one key row in pixels.
pub const KEY_HEIGHT: f32 = 48.0;

/// Spacing between keys and between rows in pixels.
pub const KEY_SPACING: f32 = 4.0;

/// Padding between the keyboard edge and its key rows.
pub const KEYBOARD_PADDING: f32 = 6.0;

/// Built-in layout used when nothing else is configured or loading fails.
pub const DEFAULT_LAYOUT: &str = "numeric";

/// Identifier of the text field the demo host registers.
pub const HOST_FIELD_ID: &str = "edittext1";

/// Accepted range for the handle strip height in dp.
pub const HANDLE_HEIGHT_DP_RANGE: (f32, f32) = (8.0, 96.0);

/// Accepted range for the screen density in DPI.
pub const DENSITY_RANGE: (u32, u32) = (80, 640);

/// Accepted range for the keyboard width in pixels.
pub const KEYBOARD_WIDTH_RANGE: (i32, i32) = (160, 4096);

/// Largest accepted move threshold in pixels.
pub const MAX_MOVE_THRESHOLD: i32 = 200;
