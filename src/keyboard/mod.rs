// SPDX-License-Identifier: GPL-3.0-only

//! The floating keyboard widget.
//!
//! [`FloatingKeyboard`] holds everything the widget needs between frames:
//! the key layout, visibility, its position inside the parent and the state
//! of the current pointer gesture. The host feeds it raw pointer events and
//! focus changes; key presses come back from the view as
//! [`KeyboardMessage`]s for the host to dispatch.
//!
//! # Module Structure
//!
//! - `geometry` - Integer positions, extents and parent bounds
//! - `drag` - Drag gesture state, move threshold and clamping
//! - `handle` - Shape and paint of the drag handle
//! - `sizing` - Key and keyboard size calculations
//! - `message` - Messages emitted by the view
//! - `view` - Rendering with libcosmic widgets

pub mod drag;
pub mod geometry;
pub mod handle;
pub mod message;
pub mod sizing;
pub mod view;

use std::collections::HashSet;

pub use drag::{apply_move_threshold, keep_in_screen, DragState, Gesture};
pub use geometry::{Extent, Insets, ParentBounds, Position, Rect};
pub use handle::{Handle, HandlePaint, HandleShape, HandleState};
pub use message::KeyboardMessage;
pub use sizing::keyboard_extent;
pub use view::render_keyboard;

use crate::config::Config;
use crate::form::FieldId;
use crate::layout::Layout;

/// A draggable on-screen keyboard floating inside a parent view.
#[derive(Debug, Clone)]
pub struct FloatingKeyboard {
    layout: Layout,
    visible: bool,
    enabled: bool,
    position: Position,
    extent: Extent,
    width: i32,
    handle: Handle,
    drag: Option<DragState>,
    registered: HashSet<FieldId>,
    target: Option<FieldId>,
    move_threshold: i32,
    align_bottom_center: bool,
    placed: bool,
}

impl FloatingKeyboard {
    /// Creates a hidden keyboard for `layout`.
    ///
    /// Out-of-range settings are clamped first.
    pub fn new(layout: Layout, config: &Config) -> Self {
        let config = config.sanitized();
        let strip_height = config.handle_height_px();
        let width = config.keyboard_width;
        let extent = keyboard_extent(&layout, width, strip_height);
        let mut handle = Handle::new(strip_height);
        handle.on_size_changed(extent.width);

        Self {
            layout,
            visible: false,
            enabled: false,
            position: Position::default(),
            extent,
            width,
            handle,
            drag: None,
            registered: HashSet::new(),
            target: None,
            move_threshold: config.move_threshold,
            align_bottom_center: config.align_bottom_center,
            placed: false,
        }
    }

    // ========================================================================
    // Visibility
    // ========================================================================

    /// Makes the keyboard visible and enabled for `target`.
    ///
    /// The target field's own text input is suppressed while the keyboard
    /// serves it.
    pub fn show(&mut self, target: Option<&str>) {
        if !self.visible {
            tracing::info!("Showing keyboard for {:?}", target);
        }
        self.visible = true;
        self.enabled = true;
        self.target = target.map(str::to_owned);
    }

    /// Makes the keyboard invisible and disabled.
    pub fn hide(&mut self) {
        if self.visible {
            tracing::info!("Hiding keyboard");
        }
        self.visible = false;
        self.enabled = false;
        self.target = None;
        self.end_gesture();
    }

    pub fn is_visible(&self) -> bool {
        self.visible
    }

    /// Whether the keys accept presses.
    pub fn is_enabled(&self) -> bool {
        self.enabled
    }

    /// Field the keyboard was last shown for.
    pub fn target(&self) -> Option<&str> {
        self.target.as_deref()
    }

    // ========================================================================
    // Field registration
    // ========================================================================

    /// Wires a field so its focus changes and clicks toggle the keyboard.
    pub fn register_field(&mut self, id: impl Into<FieldId>) {
        let id = id.into();
        tracing::debug!("Registering field '{}'", id);
        self.registered.insert(id);
    }

    pub fn is_registered(&self, id: &str) -> bool {
        self.registered.contains(id)
    }

    /// Shows the keyboard when a registered field gains focus, hides it when
    /// one loses focus.
    pub fn on_focus_change(&mut self, id: &str, has_focus: bool) {
        if !self.is_registered(id) {
            return;
        }
        if has_focus {
            self.show(Some(id));
        } else {
            self.hide();
        }
    }

    /// Shows the keyboard again when a registered field is clicked.
    pub fn on_field_click(&mut self, id: &str) {
        if self.is_registered(id) {
            self.show(Some(id));
        }
    }

    // ========================================================================
    // Pointer gestures
    // ========================================================================

    /// Window-space rectangle of the keyboard inside `parent`.
    pub fn window_rect(&self, parent: &ParentBounds) -> Rect {
        let (origin_x, origin_y) = parent.content_origin();
        Rect::at(
            Position::new(origin_y + self.position.top, origin_x + self.position.left),
            self.extent,
        )
    }

    /// Starts a gesture at window point `(x, y)`.
    ///
    /// Presses outside the keyboard, or while it is hidden, start nothing.
    pub fn pointer_down(&mut self, x: f32, y: f32, parent: &ParentBounds) -> Gesture {
        self.drag = None;
        if !self.visible {
            return Gesture::PassThrough;
        }

        let rect = self.window_rect(parent);
        if !rect.contains(x, y) {
            return Gesture::PassThrough;
        }

        let local_y = y - rect.top as f32;
        let state = DragState::begin(x, y, local_y, self.handle.strip_height(), self.position);
        self.drag = Some(state);

        if !state.handle_touched {
            return Gesture::PassThrough;
        }

        tracing::debug!("Drag started at ({}, {})", x, y);
        self.handle.set_state(HandleState::Pressed);
        Gesture::Consumed
    }

    /// Follows the pointer while a handle drag is in progress.
    pub fn pointer_move(&mut self, x: f32, y: f32, parent: &ParentBounds) -> Gesture {
        let Some(state) = self.drag.filter(|s| s.handle_touched) else {
            return Gesture::PassThrough;
        };

        let candidate = state.candidate(x, y);
        if let Some(next) = apply_move_threshold(candidate, self.position, self.move_threshold) {
            let rect = keep_in_screen(next.top, next.left, self.extent, parent);
            self.position = Position::new(rect.top, rect.left);
            tracing::debug!(
                "Drag to top={} left={} (wanted {}, {})",
                rect.top,
                rect.left,
                next.top,
                next.left
            );
        }
        Gesture::Consumed
    }

    /// Ends the current gesture and restores the idle handle paint.
    pub fn pointer_up(&mut self) -> Gesture {
        match self.end_gesture() {
            Some(state) if state.handle_touched => {
                tracing::debug!(
                    "Drag ended at top={} left={}",
                    self.position.top,
                    self.position.left
                );
                Gesture::Consumed
            }
            _ => Gesture::PassThrough,
        }
    }

    fn end_gesture(&mut self) -> Option<DragState> {
        self.handle.set_state(HandleState::Idle);
        self.drag.take()
    }

    /// Whether a handle drag is in progress.
    pub fn is_dragging(&self) -> bool {
        self.drag.is_some_and(|s| s.handle_touched)
    }

    // ========================================================================
    // Sizing and placement
    // ========================================================================

    /// Places the keyboard for a new parent size.
    ///
    /// With bottom-centre alignment, the first known size places it centred
    /// along the bottom edge. Every size then clamps the current position.
    pub fn on_parent_resized(&mut self, parent: &ParentBounds) {
        if self.align_bottom_center && !self.placed {
            let bounds = parent.clamp_rect();
            self.position = Position::new(
                bounds.bottom - self.extent.height,
                bounds.left + (bounds.width() - self.extent.width) / 2,
            );
        }
        self.placed = true;
        self.reclamp(parent);
    }

    fn reclamp(&mut self, parent: &ParentBounds) {
        let rect = keep_in_screen(self.position.top, self.position.left, self.extent, parent);
        self.position = Position::new(rect.top, rect.left);
    }

    /// Applies changed settings, keeping the keyboard inside `parent`.
    pub fn apply_config(&mut self, config: &Config, parent: &ParentBounds) {
        let config = config.sanitized();
        self.move_threshold = config.move_threshold;
        self.align_bottom_center = config.align_bottom_center;
        self.width = config.keyboard_width;
        self.handle
            .set_strip_height(config.handle_height_px(), self.width);
        self.resize();
        self.reclamp(parent);
    }

    /// Replaces the key layout, keeping the keyboard inside `parent`.
    pub fn set_layout(&mut self, layout: Layout, parent: &ParentBounds) {
        tracing::info!("Switching keyboard layout to '{}'", layout.name);
        self.layout = layout;
        self.resize();
        self.reclamp(parent);
    }

    fn resize(&mut self) {
        self.extent = keyboard_extent(&self.layout, self.width, self.handle.strip_height());
        self.handle.on_size_changed(self.extent.width);
    }

    pub fn layout(&self) -> &Layout {
        &self.layout
    }

    /// Top/left margins inside the parent's padded content area.
    pub fn position(&self) -> Position {
        self.position
    }

    pub fn extent(&self) -> Extent {
        self.extent
    }

    pub fn handle(&self) -> &Handle {
        &self.handle
    }
}
