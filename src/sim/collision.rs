//! Axis-aligned rectangle overlap
//!
//! Everything in the cave is a box: player, bricks and the coin. Overlap
//! follows the usual SDL rules, so rectangles that merely share an edge do
//! not collide and degenerate rectangles never collide.

use glam::IVec2;
use serde::{Deserialize, Serialize};

/// Integer rectangle in screen space (y grows downward)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Rect {
    /// Top-left corner
    pub pos: IVec2,
    /// Width and height
    pub size: IVec2,
}

impl Rect {
    pub fn new(x: i32, y: i32, w: i32, h: i32) -> Self {
        Self {
            pos: IVec2::new(x, y),
            size: IVec2::new(w, h),
        }
    }

    #[inline]
    pub fn x(&self) -> i32 {
        self.pos.x
    }

    #[inline]
    pub fn y(&self) -> i32 {
        self.pos.y
    }

    #[inline]
    pub fn w(&self) -> i32 {
        self.size.x
    }

    #[inline]
    pub fn h(&self) -> i32 {
        self.size.y
    }

    /// Exclusive right edge
    #[inline]
    pub fn right(&self) -> i32 {
        self.pos.x + self.size.x
    }

    /// Exclusive bottom edge
    #[inline]
    pub fn bottom(&self) -> i32 {
        self.pos.y + self.size.y
    }

    pub fn is_empty(&self) -> bool {
        self.size.x <= 0 || self.size.y <= 0
    }

    /// Fully past the left edge of the screen
    pub fn is_off_left(&self) -> bool {
        self.right() < 0
    }

    /// True when the two rectangles share a non-empty area
    pub fn intersects(&self, other: &Rect) -> bool {
        if self.is_empty() || other.is_empty() {
            return false;
        }
        self.pos.x < other.right()
            && other.pos.x < self.right()
            && self.pos.y < other.bottom()
            && other.pos.y < self.bottom()
    }
}
