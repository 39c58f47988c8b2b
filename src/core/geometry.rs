// Integer screen-space geometry

use glam::IVec2;

/// Axis-aligned rectangle in screen coordinates
///
/// Used both for entity collision boxes and for sprite-sheet source regions.
/// `pos` is the top-left corner; the rectangle spans `[x, x + width)` by
/// `[y, y + height)`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Rect {
    pub pos: IVec2,
    pub width: i32,
    pub height: i32,
}

impl Rect {
    /// Create a rectangle from its top-left corner and size
    pub fn new(x: i32, y: i32, width: i32, height: i32) -> Self {
        Self {
            pos: IVec2::new(x, y),
            width,
            height,
        }
    }

    /// Left edge
    pub fn left(&self) -> i32 {
        self.pos.x
    }

    /// Top edge
    pub fn top(&self) -> i32 {
        self.pos.y
    }

    /// One past the right edge
    pub fn right(&self) -> i32 {
        self.pos.x + self.width
    }

    /// One past the bottom edge
    pub fn bottom(&self) -> i32 {
        self.pos.y + self.height
    }

    /// Check whether two rectangles overlap
    ///
    /// Touching edges do not count as an overlap, so a box resting exactly
    /// on top of an obstacle is not a collision.
    pub fn intersects(&self, other: &Rect) -> bool {
        self.left() < other.right()
            && other.left() < self.right()
            && self.top() < other.bottom()
            && other.top() < self.bottom()
    }
}
