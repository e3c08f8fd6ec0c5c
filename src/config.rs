// SPDX-License-Identifier: GPL-3.0-only

use crate::app_settings;
use cosmic::cosmic_config;
use cosmic::cosmic_config::{cosmic_config_derive::CosmicConfigEntry, CosmicConfigEntry};

/// User configuration that persists between application runs.
#[derive(Debug, Clone, CosmicConfigEntry, PartialEq)]
#[version = 1]
pub struct Config {
    /// Built-in layout name (e.g. `numeric`) or a path to a JSON layout file.
    pub layout: String,
    /// Pointer travel in pixels ignored before a drag starts moving the keyboard.
    pub move_threshold: i32,
    /// Height of the drag handle strip in dp.
    pub handle_height_dp: f32,
    /// Screen density used to convert dp to pixels.
    pub density_dpi: u32,
    /// Keyboard width in pixels.
    pub keyboard_width: i32,
    /// Place the keyboard at the bottom centre of the stage once its size is known.
    pub align_bottom_center: bool,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            layout: app_settings::DEFAULT_LAYOUT.to_string(),
            move_threshold: 0,
            handle_height_dp: app_settings::HANDLE_HEIGHT_DP,
            density_dpi: app_settings::DENSITY_DEFAULT,
            keyboard_width: app_settings::KEYBOARD_WIDTH,
            align_bottom_center: true,
        }
    }
}

/// Converts a dp value into pixels for the given screen density.
pub fn dp_to_px(dp: f32, density_dpi: u32) -> f32 {
    dp * (density_dpi as f32 / app_settings::DENSITY_DEFAULT as f32)
}

impl Config {
    /// Returns a copy with every numeric setting pulled into its accepted
    /// range. Non-finite handle heights fall back to the default.
    pub fn sanitized(&self) -> Self {
        let (min_dp, max_dp) = app_settings::HANDLE_HEIGHT_DP_RANGE;
        let (min_dpi, max_dpi) = app_settings::DENSITY_RANGE;
        let (min_width, max_width) = app_settings::KEYBOARD_WIDTH_RANGE;

        let handle_height_dp = if self.handle_height_dp.is_finite() {
            self.handle_height_dp.clamp(min_dp, max_dp)
        } else {
            app_settings::HANDLE_HEIGHT_DP
        };

        let sanitized = Self {
            layout: self.layout.clone(),
            move_threshold: self.move_threshold.clamp(0, app_settings::MAX_MOVE_THRESHOLD),
            handle_height_dp,
            density_dpi: self.density_dpi.clamp(min_dpi, max_dpi),
            keyboard_width: self.keyboard_width.clamp(min_width, max_width),
            align_bottom_center: self.align_bottom_center,
        };
        if sanitized != *self {
            tracing::warn!("Clamped out-of-range settings: {:?} -> {:?}", self, sanitized);
        }
        sanitized
    }

    /// Handle strip height in whole pixels.
    pub fn handle_height_px(&self) -> i32 {
        dp_to_px(self.handle_height_dp, self.density_dpi) as i32
    }
}
