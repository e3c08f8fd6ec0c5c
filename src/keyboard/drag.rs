// SPDX-License-Identifier: GPL-3.0-only

//! Drag gesture tracking and clamping for the floating keyboard.
//!
//! A gesture starts on pointer-down. Only gestures that start on the handle
//! strip move the keyboard; all others are passed through as ordinary taps.
//!
//! Positions follow the pointer in raw (window) coordinates:
//! `candidate = raw - offset`, where `offset` is the pointer-to-margin
//! distance captured at pointer-down. Each candidate is clamped per axis so
//! the keyboard stays inside the parent's padded bounds.

use crate::keyboard::geometry::{Extent, ParentBounds, Position, Rect};

/// Whether the keyboard took a pointer event or left it to whatever is below.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Gesture {
    /// The event belongs to a handle drag.
    Consumed,
    /// The event is an ordinary tap/click for the content under the pointer.
    PassThrough,
}

/// State of one pointer gesture on the keyboard.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DragState {
    /// Horizontal pointer-to-margin offset captured at pointer-down
    pub dx: f32,
    /// Vertical pointer-to-margin offset captured at pointer-down
    pub dy: f32,
    /// Whether the gesture started on the handle strip
    pub handle_touched: bool,
}

impl DragState {
    /// Starts a gesture at raw pointer `(x, y)`.
    ///
    /// `local_y` is the pointer's y relative to the keyboard's top edge.
    pub fn begin(x: f32, y: f32, local_y: f32, handle_height: i32, position: Position) -> Self {
        Self {
            dx: x - position.left as f32,
            dy: y - position.top as f32,
            handle_touched: local_y <= handle_height as f32,
        }
    }

    /// Unclamped margins that keep the pointer at its grab offset.
    pub fn candidate(&self, x: f32, y: f32) -> Position {
        Position::new((y - self.dy) as i32, (x - self.dx) as i32)
    }
}

/// Applies the move threshold to a candidate position.
///
/// Returns `None` while neither axis has moved further than `threshold`
/// from `current`. Once it has, both axes give up the first `threshold`
/// pixels of their travel.
pub fn apply_move_threshold(
    candidate: Position,
    current: Position,
    threshold: i32,
) -> Option<Position> {
    let dist_y = candidate.top.saturating_sub(current.top);
    let dist_x = candidate.left.saturating_sub(current.left);

    if dist_y.saturating_abs() <= threshold && dist_x.saturating_abs() <= threshold {
        return None;
    }

    Some(Position::new(
        candidate.top.saturating_sub(dist_y.signum() * threshold.min(dist_y.saturating_abs())),
        candidate.left.saturating_sub(dist_x.signum() * threshold.min(dist_x.saturating_abs())),
    ))
}

/// Clamps desired margins so a keyboard of `extent` stays inside `parent`.
///
/// Axes are clamped independently. A keyboard larger than the parent ends
/// up overflowing the far edge.
pub fn keep_in_screen(top: i32, left: i32, extent: Extent, parent: &ParentBounds) -> Rect {
    let bounds = parent.clamp_rect();

    let top = if top <= bounds.top {
        bounds.top
    } else if top.saturating_add(extent.height) > bounds.bottom {
        bounds.bottom.saturating_sub(extent.height)
    } else {
        top
    };

    let left = if left <= bounds.left {
        bounds.left
    } else if left.saturating_add(extent.width) > bounds.right {
        bounds.right.saturating_sub(extent.width)
    } else {
        left
    };

    Rect::at(Position::new(top, left), extent)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::keyboard::geometry::Insets;

    fn parent() -> ParentBounds {
        ParentBounds::from_size(500, 900, Insets::uniform(10))
    }

    /// Test: every candidate lands inside [min, max - size] on both axes
    #[test]
    fn test_keep_in_screen_bounds_hold_for_any_candidate() {
        let parent = parent();
        let extent = Extent::new(200, 150);
        let bounds = parent.clamp_rect();

        for top in (-2000..2000).step_by(37) {
            for left in (-2000..2000).step_by(41) {
                let rect = keep_in_screen(top, left, extent, &parent);
                assert!(rect.top >= bounds.top && rect.top <= bounds.bottom - extent.height);
                assert!(rect.left >= bounds.left && rect.left <= bounds.right - extent.width);
                assert_eq!(rect.width(), extent.width);
                assert_eq!(rect.height(), extent.height);
            }
        }
    }

    #[test]
    fn test_keep_in_screen_inside_is_unchanged() {
        let rect = keep_in_screen(100, 50, Extent::new(200, 150), &parent());
        assert_eq!(rect, Rect::new(50, 100, 250, 250));
    }

    /// Test: overflowing on one axis only clamps that axis
    #[test]
    fn test_keep_in_screen_axes_are_independent() {
        let extent = Extent::new(200, 150);
        // clamp rect is 0..480 x 0..880
        let rect = keep_in_screen(100, 400, extent, &parent());
        assert_eq!((rect.top, rect.left), (100, 280), "Only left is clamped");

        let rect = keep_in_screen(-30, 120, extent, &parent());
        assert_eq!((rect.top, rect.left), (0, 120), "Only top is clamped");
    }

    #[test]
    fn test_keep_in_screen_oversized_overflows_far_edge() {
        let rect = keep_in_screen(5, 5, Extent::new(600, 1000), &parent());
        assert_eq!(rect.left, 480 - 600);
        assert_eq!(rect.top, 880 - 1000);
    }

    #[test]
    fn test_extreme_candidates_do_not_overflow() {
        let extent = Extent::new(200, 150);
        let rect = keep_in_screen(i32::MAX - 10, i32::MAX - 10, extent, &parent());
        assert_eq!((rect.top, rect.left), (880 - 150, 480 - 200));

        let next = apply_move_threshold(Position::new(i32::MIN, i32::MAX), Position::new(5, -5), 8);
        assert_eq!(next, Some(Position::new(i32::MIN + 8, i32::MAX - 8)));
    }

    #[test]
    fn test_zero_threshold_moves_on_any_delta() {
        let current = Position::new(10, 10);
        assert_eq!(apply_move_threshold(current, current, 0), None);
        assert_eq!(
            apply_move_threshold(Position::new(11, 10), current, 0),
            Some(Position::new(11, 10))
        );
    }

    #[test]
    fn test_threshold_swallows_initial_travel() {
        let current = Position::new(100, 100);
        assert_eq!(apply_move_threshold(Position::new(104, 97), current, 5), None);
        assert_eq!(
            apply_move_threshold(Position::new(112, 97), current, 5),
            Some(Position::new(107, 100)),
            "Each axis gives up at most the threshold"
        );
        assert_eq!(
            apply_move_threshold(Position::new(90, 100), current, 5),
            Some(Position::new(95, 100))
        );
    }

    #[test]
    fn test_drag_state_offsets() {
        let state = DragState::begin(130.0, 415.0, 15.0, 28, Position::new(400, 100));
        assert!(state.handle_touched);
        assert_eq!(state.candidate(150.0, 395.0), Position::new(380, 120));

        let state = DragState::begin(130.0, 450.0, 50.0, 28, Position::new(400, 100));
        assert!(!state.handle_touched, "Below the strip is not the handle");
    }
}
