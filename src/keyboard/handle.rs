// SPDX-License-Identifier: GPL-3.0-only

//! Drawing resources for the drag handle.
//!
//! Each keyboard owns one [`Handle`]. Its outline is a full-width band along
//! the bottom of the handle strip with a raised tab across the middle third:
//!
//! ```text
//!            +--------+
//!            |  tab   |
//! +----------+        +----------+
//! |              band            |
//! +------------------------------+
//! ```
//!
//! The outline is rebuilt whenever the keyboard changes size.

use cosmic::iced::Color;

use crate::app_settings;

/// A rectangle in keyboard-local float coordinates.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct HandleRect {
    pub x: f32,
    pub y: f32,
    pub width: f32,
    pub height: f32,
}

/// The handle outline, split into the two rectangles that form it.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct HandleShape {
    /// Raised tab across the middle third, from the top edge down to the band
    pub tab: HandleRect,
    /// Full-width band at the bottom of the strip
    pub band: HandleRect,
}

impl HandleShape {
    /// Builds the outline for a keyboard `width` wide with a strip of
    /// `strip_height` pixels.
    pub fn new(width: f32, strip_height: f32) -> Self {
        let band_depth = app_settings::HANDLE_BAND_DEPTH.min(strip_height).max(0.0);
        let band_top = strip_height - band_depth;
        let third = width / 3.0;

        Self {
            tab: HandleRect {
                x: third,
                y: 0.0,
                width: third,
                height: band_top,
            },
            band: HandleRect {
                x: 0.0,
                y: band_top,
                width,
                height: band_depth,
            },
        }
    }

    /// Total height covered by the outline.
    pub fn height(&self) -> f32 {
        self.tab.height + self.band.height
    }
}

/// Visual state of the handle.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum HandleState {
    #[default]
    Idle,
    Pressed,
}

/// Fill used to paint the handle.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct HandlePaint {
    pub color: Color,
    pub corner_radius: f32,
}

impl HandlePaint {
    pub fn for_state(state: HandleState) -> Self {
        let argb = match state {
            HandleState::Idle => app_settings::HANDLE_COLOR,
            HandleState::Pressed => app_settings::HANDLE_PRESSED_COLOR,
        };
        Self {
            color: argb_to_color(argb),
            corner_radius: app_settings::HANDLE_CORNER_RADIUS,
        }
    }
}

/// Converts a packed `0xAARRGGBB` value.
pub fn argb_to_color(argb: u32) -> Color {
    let [a, r, g, b] = argb.to_be_bytes();
    Color::from_rgba8(r, g, b, a as f32 / 255.0)
}

/// The handle drawing resources owned by one keyboard.
#[derive(Debug, Clone, PartialEq)]
pub struct Handle {
    shape: HandleShape,
    state: HandleState,
    paint: HandlePaint,
    strip_height: i32,
}

impl Handle {
    pub fn new(strip_height: i32) -> Self {
        Self {
            shape: HandleShape::default(),
            state: HandleState::Idle,
            paint: HandlePaint::for_state(HandleState::Idle),
            strip_height,
        }
    }

    /// Height of the touchable strip in pixels.
    pub fn strip_height(&self) -> i32 {
        self.strip_height
    }

    pub fn shape(&self) -> &HandleShape {
        &self.shape
    }

    pub fn paint(&self) -> &HandlePaint {
        &self.paint
    }

    pub fn state(&self) -> HandleState {
        self.state
    }

    /// Rebuilds the outline for a new keyboard width.
    pub fn on_size_changed(&mut self, width: i32) {
        self.shape = HandleShape::new(width as f32, self.strip_height as f32);
    }

    /// Changes the strip height and rebuilds the outline.
    pub fn set_strip_height(&mut self, strip_height: i32, width: i32) {
        self.strip_height = strip_height;
        self.on_size_changed(width);
    }

    /// Switches the paint. Returns `true` if a repaint is needed.
    pub fn set_state(&mut self, state: HandleState) -> bool {
        if self.state == state {
            return false;
        }
        self.state = state;
        self.paint = HandlePaint::for_state(state);
        true
    }
}
