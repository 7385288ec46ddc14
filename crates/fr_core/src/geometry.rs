//! Axis-aligned rectangles in screen pixel coordinates.
//!
//! The coordinate system is y-down: (0, 0) is the top-left corner of the
//! viewport, y grows toward the bottom of the screen. Positions are f32 so
//! physics integration stays sub-pixel; entity sizes are fixed constants
//! set at construction.

use glam::Vec2;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Rect {
    pub x: f32,
    pub y: f32,
    pub width: f32,
    pub height: f32,
}

impl Rect {
    pub const fn new(x: f32, y: f32, width: f32, height: f32) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }

    pub fn from_pos_size(pos: Vec2, size: Vec2) -> Self {
        Self::new(pos.x, pos.y, size.x, size.y)
    }

    pub fn left(&self) -> f32 {
        self.x
    }

    pub fn right(&self) -> f32 {
        self.x + self.width
    }

    pub fn top(&self) -> f32 {
        self.y
    }

    pub fn bottom(&self) -> f32 {
        self.y + self.height
    }

    pub fn position(&self) -> Vec2 {
        Vec2::new(self.x, self.y)
    }

    /// Strict overlap test: rectangles that merely share an edge do not
    /// intersect. Collision resolution relies on this so a snapped-flush
    /// entity is not re-corrected on the following pass.
    pub fn intersects(&self, other: &Rect) -> bool {
        self.left() < other.right()
            && other.left() < self.right()
            && self.top() < other.bottom()
            && other.top() < self.bottom()
    }

    pub fn offset_x(&mut self, dx: f32) {
        self.x += dx;
    }

    pub fn offset_y(&mut self, dy: f32) {
        self.y += dy;
    }

    pub fn move_to(&mut self, target: Vec2) {
        self.x = target.x;
        self.y = target.y;
    }
}
