// SPDX-License-Identifier: GPL-3.0-only

//! Floatboard - A floating on-screen keyboard for COSMIC
//!
//! This crate provides a draggable keyboard widget that floats above a
//! screen of text fields and edits whichever field holds focus.
//!
//! # Architecture
//!
//! Pointer events reach the [`host::HostScreen`], which hands them to the
//! [`keyboard::FloatingKeyboard`]. Presses on the handle strip at the top of
//! the keyboard drag it around inside the padded stage; everything else is
//! left to the widgets below. Key buttons emit integer key codes that the
//! host passes to [`input::dispatch`] together with the focused field.
//!
//! # Modules
//!
//! - `app`: Main application model and COSMIC Application trait implementation
//! - `app_settings`: Centralized application constants
//! - `config`: User configuration with cosmic_config persistence
//! - `form`: Text fields, selection editing and focus order
//! - `host`: The screen wiring fields, keyboard and dispatcher together
//! - `i18n`: Localization support using fluent translations
//! - `input`: Key codes and dispatch into the focused field
//! - `keyboard`: The floating keyboard widget, its drag handle and geometry
//! - `layout`: JSON key layout parsing and validation

pub mod app;
pub mod app_settings;
pub mod config;
pub mod form;
pub mod host;
pub mod i18n;
pub mod input;
pub mod keyboard;
pub mod layout;

// Re-export the fl! macro for localization
pub use crate::i18n::LANGUAGE_LOADER;

// ============================================================================
// Integration Tests
// ============================================================================

#[cfg(test)]
mod integration_tests {
    use crate::app_settings::HOST_FIELD_ID;
    use crate::config::Config;
    use crate::host::{load_layout_or_default, HostScreen};
    use crate::input::{Dispatch, KeyCode};
    use crate::keyboard::{Gesture, HandleState};

    fn screen() -> HostScreen {
        let mut screen = HostScreen::new(
            load_layout_or_default("numeric"),
            &Config::default(),
            "Amount",
        );
        screen.resized(480.0, 720.0);
        screen
    }

    fn field_text(screen: &HostScreen) -> String {
        screen
            .form()
            .field(HOST_FIELD_ID)
            .map(|f| f.text().to_string())
            .unwrap_or_default()
    }

    /// Every key code in the built-in layout is handled without panicking,
    /// and only cancel hides the keyboard.
    #[test]
    fn test_every_builtin_key_dispatches() {
        let mut screen = screen();
        screen.field_pressed(HOST_FIELD_ID);

        let codes: Vec<i32> = screen
            .keyboard()
            .layout()
            .keys()
            .map(|(_, _, key)| key.code)
            .collect();

        for code in codes {
            let outcome = screen.handle_key(code);
            if code == KeyCode::CANCEL {
                assert_eq!(outcome, Dispatch::Hide);
                assert!(!screen.keyboard().is_visible());
                screen.field_pressed(HOST_FIELD_ID);
            } else {
                assert!(screen.keyboard().is_visible(), "Code {} hid the keyboard", code);
            }
        }
    }

    /// Full session: show, type, edit with cursor keys, drag, cancel.
    #[test]
    fn test_type_edit_drag_cancel_session() {
        let mut screen = screen();
        screen.field_pressed(HOST_FIELD_ID);

        for c in "42.5".chars() {
            screen.handle_key(c as i32);
        }
        screen.handle_key(KeyCode::ALL_LEFT);
        screen.handle_key('-' as i32);
        screen.handle_key(KeyCode::ALL_RIGHT);
        screen.handle_key(KeyCode::DELETE);
        assert_eq!(field_text(&screen), "-42.");

        // Drag by the handle
        let rect = screen.keyboard().window_rect(screen.parent());
        let start = screen.keyboard().position();
        let (x, y) = (rect.left as f32 + 10.0, rect.top as f32 + 2.0);
        assert_eq!(screen.pointer_pressed(x, y), Gesture::Consumed);
        assert_eq!(screen.keyboard().handle().state(), HandleState::Pressed);
        screen.pointer_moved(x + 5.0, y - 50.0);
        screen.pointer_released();
        assert_eq!(screen.keyboard().handle().state(), HandleState::Idle);
        assert_eq!(screen.keyboard().position().top, start.top - 50);
        assert_eq!(screen.keyboard().position().left, start.left + 5);

        // Typing still goes to the field after a drag
        screen.handle_key(KeyCode::CLEAR);
        assert_eq!(field_text(&screen), "");

        screen.handle_key(KeyCode::CANCEL);
        assert!(!screen.keyboard().is_visible());
        assert_eq!(screen.pointer_pressed(x, y), Gesture::PassThrough, "Hidden keyboard ignores presses");
    }

    /// Shrinking the window never leaves the keyboard outside the stage.
    #[test]
    fn test_window_shrink_keeps_keyboard_inside() {
        let mut screen = screen();
        screen.field_pressed(HOST_FIELD_ID);

        for (w, h) in [(400.0, 600.0), (384.0, 400.0), (800.0, 1000.0)] {
            screen.resized(w, h);
            let bounds = screen.parent().clamp_rect();
            let position = screen.keyboard().position();
            let extent = screen.keyboard().extent();
            assert!(position.top >= bounds.top);
            assert!(position.left >= bounds.left);
            assert!(position.top + extent.height <= bounds.bottom);
            assert!(position.left + extent.width <= bounds.right);
        }
    }
}
