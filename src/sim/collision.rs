//! Collision detection and resolution
//!
//! Three checks run every frame, all plain AABB tests: landing against the
//! ground ribbon, fatal overlap against live obstacles, and the pass test
//! that drives scoring. Pass policy: the player has passed an obstacle once
//! the player's horizontal center reaches the obstacle's horizontal center.

use super::aabb::Viewport;
use super::ground::GroundRibbon;
use super::obstacles::{Obstacle, ObstacleField};
use super::player::PlayerBody;

/// Land the player on the first ground tile its box overlaps.
///
/// Returns whether a landing happened this frame. Resting contact (bottom
/// edge flush with the tile top) does not overlap, so a grounded body does
/// not re-land every frame.
pub fn resolve_landing(player: &mut PlayerBody, ribbon: &GroundRibbon, viewport: &Viewport) -> bool {
    if player.on_ground {
        return false;
    }
    let body = player.aabb();
    for tile in ribbon.tiles() {
        if body.overlaps(&tile.aabb(viewport)) {
            player.land(tile.top(viewport));
            return true;
        }
    }
    false
}

/// Whether the player's box overlaps any live obstacle's hitbox.
pub fn check_fatal(player: &PlayerBody, field: &ObstacleField) -> bool {
    let body = player.aabb();
    field.obstacles().iter().any(|o| body.overlaps(&o.hitbox()))
}

/// Whether the player has passed the given obstacle (center-vs-center).
pub fn player_passed(player: &PlayerBody, obstacle: &Obstacle) -> bool {
    player.aabb().center_x() >= obstacle.aabb().center_x()
}
