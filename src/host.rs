// SPDX-License-Identifier: GPL-3.0-only

//! The host screen: text fields with a floating keyboard above them.
//!
//! [`HostScreen`] owns the fields and the keyboard and does the wiring
//! between them that a widget toolkit would otherwise do: focus changes and
//! clicks go to the keyboard, key presses go to the dispatcher together
//! with the focused field, and dispatch outcomes that need the screen
//! (hiding, moving focus) are applied here.

use crate::app_settings;
use crate::config::Config;
use crate::form::{FocusChange, FocusDirection, Form, TextField};
use crate::input::{dispatch_code, Dispatch};
use crate::keyboard::{FloatingKeyboard, Gesture, Insets, ParentBounds};
use crate::layout::{load_layout, parse_builtin_layout, Layout};

/// Fields and keyboard of one screen.
#[derive(Debug, Clone)]
pub struct HostScreen {
    form: Form,
    keyboard: FloatingKeyboard,
    parent: ParentBounds,
    cursor: Option<(f32, f32)>,
}

impl HostScreen {
    /// Creates the screen with a single text field registered with the keyboard.
    pub fn new(layout: Layout, config: &Config, hint: impl Into<String>) -> Self {
        let field = TextField::new(app_settings::HOST_FIELD_ID).with_hint(hint);
        Self::with_fields(vec![field], layout, config)
    }

    /// Creates the screen with `fields` in focus order. Text inputs are
    /// registered with the keyboard; other fields are not.
    pub fn with_fields(fields: Vec<TextField>, layout: Layout, config: &Config) -> Self {
        let mut form = Form::new();
        let mut keyboard = FloatingKeyboard::new(layout, config);
        for field in fields {
            if field.is_text_input() {
                keyboard.register_field(field.id.clone());
            }
            form.push(field);
        }

        Self {
            form,
            keyboard,
            parent: ParentBounds::default(),
            cursor: None,
        }
    }

    pub fn form(&self) -> &Form {
        &self.form
    }

    pub fn keyboard(&self) -> &FloatingKeyboard {
        &self.keyboard
    }

    /// Bounds of the stage the keyboard floats in.
    pub fn parent(&self) -> &ParentBounds {
        &self.parent
    }

    /// Last known pointer position in window coordinates.
    pub fn cursor(&self) -> Option<(f32, f32)> {
        self.cursor
    }

    // ========================================================================
    // Fields
    // ========================================================================

    /// A field was clicked: focus it and let the keyboard react.
    ///
    /// Clicks that arrive while the keyboard holds a handle drag landed on
    /// the keyboard, not the field, and are dropped.
    pub fn field_pressed(&mut self, id: &str) {
        if self.keyboard.is_dragging() {
            tracing::debug!("Ignoring press on '{}' under the drag handle", id);
            return;
        }
        let change = self.form.request_focus(id);
        self.apply_focus_change(change);
        self.keyboard.on_field_click(id);
    }

    fn apply_focus_change(&mut self, change: FocusChange) {
        if let Some(lost) = change.lost {
            tracing::debug!("Field '{}' lost focus", lost);
            self.keyboard.on_focus_change(&lost, false);
        }
        if let Some(gained) = change.gained {
            tracing::debug!("Field '{}' gained focus", gained);
            self.keyboard.on_focus_change(&gained, true);
        }
    }

    /// Dispatches a key code to the focused field and applies the outcome.
    pub fn handle_key(&mut self, code: i32) -> Dispatch {
        let outcome = dispatch_code(code, self.form.focused_mut());
        match outcome {
            Dispatch::Hide => self.keyboard.hide(),
            Dispatch::FocusPrevious => {
                let change = self.form.move_focus(FocusDirection::Backward);
                self.apply_focus_change(change);
            }
            Dispatch::FocusNext => {
                let change = self.form.move_focus(FocusDirection::Forward);
                self.apply_focus_change(change);
            }
            Dispatch::Edited | Dispatch::Ignored => {}
        }
        outcome
    }

    // ========================================================================
    // Pointer and window events
    // ========================================================================

    /// Pointer pressed at window point `(x, y)`.
    pub fn pointer_pressed(&mut self, x: f32, y: f32) -> Gesture {
        self.cursor = Some((x, y));
        self.keyboard.pointer_down(x, y, &self.parent)
    }

    /// Pointer moved to window point `(x, y)`.
    pub fn pointer_moved(&mut self, x: f32, y: f32) -> Gesture {
        self.cursor = Some((x, y));
        self.keyboard.pointer_move(x, y, &self.parent)
    }

    /// Pointer released or the gesture was cancelled.
    pub fn pointer_released(&mut self) -> Gesture {
        self.keyboard.pointer_up()
    }

    /// The stage was resized to `width` x `height` pixels.
    pub fn resized(&mut self, width: f32, height: f32) {
        self.parent = ParentBounds::from_size(
            width as i32,
            height as i32,
            Insets::uniform(app_settings::STAGE_PADDING),
        );
        self.keyboard.on_parent_resized(&self.parent);
    }

    /// Applies changed settings and reloads the layout if its source changed.
    pub fn apply_config(&mut self, config: &Config, layout_changed: bool) {
        self.keyboard.apply_config(config, &self.parent);
        if layout_changed {
            let layout = load_layout_or_default(&config.layout);
            self.keyboard.set_layout(layout, &self.parent);
        }
    }
}

/// Loads the layout from `source`, falling back to the built-in default.
///
/// Validation warnings are logged. A layout that fails to load is logged
/// as an error and replaced by the default layout.
pub fn load_layout_or_default(source: &str) -> Layout {
    match load_layout(source) {
        Ok(result) => {
            for warning in &result.warnings {
                tracing::warn!("Layout '{}': {}", source, warning);
            }
            tracing::info!(
                "Loaded layout '{}' with {} rows",
                result.layout.name,
                result.layout.rows.len()
            );
            result.into_layout()
        }
        Err(e) => {
            tracing::error!("Failed to load layout '{}': {}", source, e);
            match parse_builtin_layout(app_settings::DEFAULT_LAYOUT) {
                Ok(result) => result.into_layout(),
                Err(e) => {
                    tracing::error!("Failed to load the default layout: {}", e);
                    Layout {
                        name: String::new(),
                        rows: Vec::new(),
                    }
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::input::KeyCode;
    use crate::keyboard::Position;

    const FIELD: &str = app_settings::HOST_FIELD_ID;

    fn screen() -> HostScreen {
        let mut screen = HostScreen::new(
            load_layout_or_default("numeric"),
            &Config::default(),
            "Amount",
        );
        screen.resized(480.0, 720.0);
        screen
    }

    fn text(screen: &HostScreen, id: &str) -> String {
        screen.form().field(id).map(|f| f.text().to_string()).unwrap_or_default()
    }

    #[test]
    fn test_starts_unfocused_with_hidden_keyboard() {
        let screen = screen();
        assert_eq!(screen.form().focused_id(), None);
        assert!(!screen.keyboard().is_visible());
        assert!(screen.keyboard().is_registered(FIELD));
    }

    #[test]
    fn test_click_focuses_and_shows_keyboard() {
        let mut screen = screen();
        screen.field_pressed(FIELD);
        assert!(screen.form().is_focused(FIELD));
        assert!(screen.keyboard().is_visible());
        assert_eq!(screen.keyboard().target(), Some(FIELD));
    }

    /// Test: typing on the keyboard edits the focused field
    #[test]
    fn test_keys_edit_focused_field() {
        let mut screen = screen();
        screen.field_pressed(FIELD);
        for c in "1234".chars() {
            assert_eq!(screen.handle_key(c as i32), Dispatch::Edited);
        }
        screen.handle_key(KeyCode::LEFT);
        screen.handle_key(KeyCode::LEFT);
        screen.handle_key(KeyCode::DELETE);
        assert_eq!(text(&screen, FIELD), "134");
        assert_eq!(screen.form().field(FIELD).map(|f| f.cursor()), Some(1));
    }

    #[test]
    fn test_keys_without_focus_are_dropped() {
        let mut screen = screen();
        assert_eq!(screen.handle_key('5' as i32), Dispatch::Ignored);
        assert_eq!(text(&screen, FIELD), "");
    }

    /// Test: cancel hides the keyboard and a click on the field brings it back
    #[test]
    fn test_cancel_then_click_shows_again() {
        let mut screen = screen();
        screen.field_pressed(FIELD);
        assert_eq!(screen.handle_key(KeyCode::CANCEL), Dispatch::Hide);
        assert!(!screen.keyboard().is_visible());
        assert!(screen.form().is_focused(FIELD), "Cancel keeps focus");

        screen.field_pressed(FIELD);
        assert!(screen.keyboard().is_visible());
    }

    #[test]
    fn test_focus_next_and_previous() {
        let mut screen = HostScreen::with_fields(
            vec![TextField::new("first"), TextField::new("second")],
            load_layout_or_default("numeric"),
            &Config::default(),
        );
        screen.field_pressed("first");

        assert_eq!(screen.handle_key(KeyCode::NEXT), Dispatch::FocusNext);
        assert!(screen.form().is_focused("second"));
        assert!(screen.keyboard().is_visible());
        assert_eq!(screen.keyboard().target(), Some("second"));

        screen.handle_key('9' as i32);
        assert_eq!(text(&screen, "second"), "9");

        screen.handle_key(KeyCode::NEXT);
        assert!(screen.form().is_focused("second"), "No wrap past the last field");

        screen.handle_key(KeyCode::PREVIOUS);
        assert!(screen.form().is_focused("first"));
    }

    /// Test: moving focus to an unregistered field hides the keyboard
    #[test]
    fn test_focus_to_non_text_field_hides_keyboard() {
        let mut screen = HostScreen::with_fields(
            vec![TextField::new("amount"), TextField::non_text("submit")],
            load_layout_or_default("numeric"),
            &Config::default(),
        );
        screen.field_pressed("amount");
        screen.handle_key(KeyCode::NEXT);
        assert!(screen.form().is_focused("submit"));
        assert!(!screen.keyboard().is_visible());
        assert_eq!(screen.handle_key('1' as i32), Dispatch::Ignored);
    }

    /// Test: the keyboard starts at the bottom centre of the stage
    #[test]
    fn test_resize_places_keyboard_bottom_center() {
        let screen = screen();
        let extent = screen.keyboard().extent();
        // Stage 480x720 with 12px padding: clamp area is 456x696
        assert_eq!(
            screen.keyboard().position(),
            Position::new(696 - extent.height, (456 - extent.width) / 2)
        );
    }

    #[test]
    fn test_drag_through_host() {
        let mut screen = screen();
        screen.field_pressed(FIELD);
        let start = screen.keyboard().position();
        let rect = screen.keyboard().window_rect(screen.parent());
        let (x, y) = (rect.left as f32 + 20.0, rect.top as f32 + 5.0);

        assert_eq!(screen.pointer_pressed(x, y), Gesture::Consumed);
        assert_eq!(screen.pointer_moved(x - 30.0, y - 100.0), Gesture::Consumed);
        assert_eq!(
            screen.keyboard().position(),
            Position::new(start.top - 100, start.left - 30)
        );
        assert_eq!(screen.cursor(), Some((x - 30.0, y - 100.0)));
        assert_eq!(screen.pointer_released(), Gesture::Consumed);
    }

    /// Test: a handle press over another field does not move focus to it
    #[test]
    fn test_handle_press_over_field_keeps_focus() {
        let mut screen = HostScreen::with_fields(
            vec![TextField::new("first"), TextField::new("second")],
            load_layout_or_default("numeric"),
            &Config::default(),
        );
        screen.resized(480.0, 720.0);
        screen.field_pressed("first");

        // The keyboard sits over "second"; both the handle and that field see the press
        let rect = screen.keyboard().window_rect(screen.parent());
        let (x, y) = (rect.left as f32 + 20.0, rect.top as f32 + 5.0);
        assert_eq!(screen.pointer_pressed(x, y), Gesture::Consumed);
        screen.field_pressed("second");

        assert!(screen.form().is_focused("first"));
        assert_eq!(screen.keyboard().target(), Some("first"));
        assert!(screen.keyboard().is_visible());

        screen.pointer_released();
        screen.field_pressed("second");
        assert!(screen.form().is_focused("second"), "Presses work again after release");
    }

    #[test]
    fn test_bad_layout_falls_back_to_default() {
        let layout = load_layout_or_default("/nonexistent/layout.json");
        assert_eq!(layout.name, "Numeric");
        let layout = load_layout_or_default("qwerty");
        assert_eq!(layout.name, "Numeric");
    }

    #[test]
    fn test_config_change_reloads_layout() {
        let mut screen = screen();
        let config = Config {
            layout: "/nonexistent/layout.json".into(),
            keyboard_width: 300,
            ..Config::default()
        };
        screen.apply_config(&config, true);
        assert_eq!(screen.keyboard().extent().width, 300);
        assert_eq!(screen.keyboard().layout().name, "Numeric");
    }
}
