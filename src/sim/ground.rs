//! Infinite ground ribbon
//!
//! A handful of tiles scroll leftward at world speed; tiles that leave the
//! viewport are dropped and new ones are appended flush to the trailing
//! edge, so the ground always renders edge-to-edge with O(1) amortized
//! churn. Tiles stay in spawn order - "first" always means oldest.

use glam::Vec2;
use serde::{Deserialize, Serialize};

use super::aabb::{Aabb, Viewport};
use crate::consts::*;

/// One ground tile, bottom-left anchored on the viewport floor.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct GroundTile {
    /// Left edge x position
    pub x: f32,
}

impl GroundTile {
    pub fn aabb(&self, viewport: &Viewport) -> Aabb {
        Aabb::from_bottom_left(Vec2::new(self.x, viewport.height), TILE_WIDTH, TILE_HEIGHT)
    }

    pub fn right(&self) -> f32 {
        self.x + TILE_WIDTH
    }

    /// Top surface y of the tile (the landing plane).
    pub fn top(&self, viewport: &Viewport) -> f32 {
        viewport.height - TILE_HEIGHT
    }
}

/// The contiguous ribbon of ground tiles.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct GroundRibbon {
    tiles: Vec<GroundTile>,
}

impl GroundRibbon {
    pub fn new() -> Self {
        Self { tiles: Vec::new() }
    }

    pub fn tiles(&self) -> &[GroundTile] {
        &self.tiles
    }

    /// Shift every tile by `world_speed * dt` (world speed is negative, so
    /// the ribbon scrolls leftward).
    pub fn advance(&mut self, dt: f32, world_speed: f32) {
        for tile in &mut self.tiles {
            tile.x += world_speed * dt;
        }
    }

    /// Keep the ribbon covering the viewport: seed it when empty, append a
    /// tile flush to the trailing edge as it nears the right side, and drop
    /// the leading tile once it has fully scrolled off the left side.
    ///
    /// Post-conditions: the ribbon is non-empty and gapless.
    pub fn recycle(&mut self, viewport: &Viewport) {
        if self.tiles.is_empty() {
            self.tiles.push(GroundTile { x: 0.0 });
        }

        // Drop the leading tile first so the slot it frees can be refilled
        // in the same call; the ribbon is never reduced below one tile.
        if self.tiles.len() > 1 && self.tiles[0].right() <= 0.0 {
            self.tiles.remove(0);
        }

        let last_right = self.tiles.last().map(|t| t.right()).unwrap_or(0.0);
        if self.tiles.len() < MAX_TILES && last_right <= viewport.width + TILE_SPAWN_MARGIN {
            self.tiles.push(GroundTile { x: last_right });
        }

        debug_assert!(!self.tiles.is_empty());
        debug_assert!(self.is_gapless());
    }

    /// Whether consecutive tiles are flush (trailing edge == next leading edge).
    pub fn is_gapless(&self) -> bool {
        self.tiles
            .windows(2)
            .all(|w| (w[0].right() - w[1].x).abs() < 1e-3)
    }
}
