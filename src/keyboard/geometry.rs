// SPDX-License-Identifier: GPL-3.0-only

//! Integer geometry for positioning the keyboard inside its parent.
//!
//! All values are whole pixels. The keyboard position is a pair of margins
//! measured from the parent's padded content origin.

/// Top/left margins of the keyboard inside its parent.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Position {
    pub top: i32,
    pub left: i32,
}

impl Position {
    pub const fn new(top: i32, left: i32) -> Self {
        Self { top, left }
    }
}

/// Width and height of a view.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Extent {
    pub width: i32,
    pub height: i32,
}

impl Extent {
    pub const fn new(width: i32, height: i32) -> Self {
        Self { width, height }
    }
}

/// An axis-aligned rectangle given by its edges.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Rect {
    pub left: i32,
    pub top: i32,
    pub right: i32,
    pub bottom: i32,
}

impl Rect {
    pub const fn new(left: i32, top: i32, right: i32, bottom: i32) -> Self {
        Self {
            left,
            top,
            right,
            bottom,
        }
    }

    /// Rectangle of `extent` placed at `position`. Far edges saturate at
    /// the `i32` range.
    pub const fn at(position: Position, extent: Extent) -> Self {
        Self::new(
            position.left,
            position.top,
            position.left.saturating_add(extent.width),
            position.top.saturating_add(extent.height),
        )
    }

    pub const fn width(&self) -> i32 {
        self.right - self.left
    }

    pub const fn height(&self) -> i32 {
        self.bottom - self.top
    }

    /// Returns `true` if the point lies inside, edges included.
    pub fn contains(&self, x: f32, y: f32) -> bool {
        x >= self.left as f32
            && x <= self.right as f32
            && y >= self.top as f32
            && y <= self.bottom as f32
    }
}

/// Padding on each side of a view.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Insets {
    pub left: i32,
    pub top: i32,
    pub right: i32,
    pub bottom: i32,
}

impl Insets {
    /// Same padding on every side.
    pub const fn uniform(value: i32) -> Self {
        Self {
            left: value,
            top: value,
            right: value,
            bottom: value,
        }
    }

    pub const fn horizontal(&self) -> i32 {
        self.left + self.right
    }

    pub const fn vertical(&self) -> i32 {
        self.top + self.bottom
    }
}

/// The view the keyboard floats in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ParentBounds {
    /// Hit rectangle of the parent in its own parent's coordinates
    pub hit_rect: Rect,
    /// Padding of the parent
    pub padding: Insets,
}

impl ParentBounds {
    pub const fn new(hit_rect: Rect, padding: Insets) -> Self {
        Self { hit_rect, padding }
    }

    /// Parent of `width` x `height` placed at the origin.
    pub const fn from_size(width: i32, height: i32, padding: Insets) -> Self {
        Self::new(Rect::new(0, 0, width, height), padding)
    }

    /// The region margins are clamped into.
    ///
    /// Margins are measured from the padded content origin, so the parent's
    /// total horizontal and vertical padding come off the far edges.
    pub const fn clamp_rect(&self) -> Rect {
        Rect::new(
            self.hit_rect.left,
            self.hit_rect.top,
            self.hit_rect.right - self.padding.horizontal(),
            self.hit_rect.bottom - self.padding.vertical(),
        )
    }

    /// Window-space origin of the padded content area.
    pub const fn content_origin(&self) -> (i32, i32) {
        (
            self.hit_rect.left + self.padding.left,
            self.hit_rect.top + self.padding.top,
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rect_at() {
        let rect = Rect::at(Position::new(10, 20), Extent::new(100, 50));
        assert_eq!(rect, Rect::new(20, 10, 120, 60));
        assert_eq!(rect.width(), 100);
        assert_eq!(rect.height(), 50);
    }

    #[test]
    fn test_rect_at_saturates() {
        let rect = Rect::at(Position::new(12, 12), Extent::new(360, i32::MAX));
        assert_eq!(rect.bottom, i32::MAX);
        assert_eq!(rect.right, 372);
    }

    #[test]
    fn test_rect_contains_edges() {
        let rect = Rect::new(0, 0, 10, 10);
        assert!(rect.contains(0.0, 0.0));
        assert!(rect.contains(10.0, 10.0));
        assert!(!rect.contains(10.5, 5.0));
        assert!(!rect.contains(5.0, -0.1));
    }

    /// Test: padding on all four sides shrinks the far edges only
    #[test]
    fn test_clamp_rect_subtracts_padding_from_far_edges() {
        let parent = ParentBounds::new(
            Rect::new(0, 0, 400, 800),
            Insets {
                left: 10,
                top: 20,
                right: 30,
                bottom: 40,
            },
        );
        assert_eq!(parent.clamp_rect(), Rect::new(0, 0, 360, 740));
        assert_eq!(parent.content_origin(), (10, 20));
    }
}
