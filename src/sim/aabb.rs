//! Axis-aligned bounding boxes and viewport bounds
//!
//! Everything in the world is a rectangle: the player, ground tiles, and
//! obstacles. Overlap is strict - boxes that merely touch edge-to-edge do
//! not collide, which is what lets the player rest on the ground surface
//! without re-triggering landing every frame.

use glam::Vec2;
use serde::{Deserialize, Serialize};

/// Logical screen bounds, owned by the session and passed by parameter.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Viewport {
    pub width: f32,
    pub height: f32,
}

impl Viewport {
    pub fn new(width: f32, height: f32) -> Self {
        Self { width, height }
    }
}

/// An axis-aligned bounding box in y-down screen coordinates.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Aabb {
    pub min: Vec2,
    pub max: Vec2,
}

impl Aabb {
    pub fn new(min: Vec2, max: Vec2) -> Self {
        debug_assert!(min.x <= max.x && min.y <= max.y);
        Self { min, max }
    }

    /// Box anchored by its bottom-center point (how sprites sit on the ground).
    pub fn from_bottom_center(anchor: Vec2, width: f32, height: f32) -> Self {
        Self {
            min: Vec2::new(anchor.x - width / 2.0, anchor.y - height),
            max: Vec2::new(anchor.x + width / 2.0, anchor.y),
        }
    }

    /// Box anchored by its bottom-left corner.
    pub fn from_bottom_left(anchor: Vec2, width: f32, height: f32) -> Self {
        Self {
            min: Vec2::new(anchor.x, anchor.y - height),
            max: Vec2::new(anchor.x + width, anchor.y),
        }
    }

    pub fn left(&self) -> f32 {
        self.min.x
    }

    pub fn right(&self) -> f32 {
        self.max.x
    }

    pub fn top(&self) -> f32 {
        self.min.y
    }

    pub fn bottom(&self) -> f32 {
        self.max.y
    }

    pub fn width(&self) -> f32 {
        self.max.x - self.min.x
    }

    pub fn height(&self) -> f32 {
        self.max.y - self.min.y
    }

    pub fn center_x(&self) -> f32 {
        (self.min.x + self.max.x) / 2.0
    }

    /// Strict overlap: a non-empty intersection on both axes.
    pub fn overlaps(&self, other: &Aabb) -> bool {
        self.min.x < other.max.x
            && self.max.x > other.min.x
            && self.min.y < other.max.y
            && self.max.y > other.min.y
    }

    /// Uniformly inset box (fairness margin on hitboxes). Collapses to a
    /// point at the center rather than inverting when the inset is large.
    pub fn shrink(&self, amount: f32) -> Aabb {
        let inset_x = amount.min(self.width() / 2.0);
        let inset_y = amount.min(self.height() / 2.0);
        Aabb {
            min: self.min + Vec2::new(inset_x, inset_y),
            max: self.max - Vec2::new(inset_x, inset_y),
        }
    }
}
