//! The controllable runner body
//!
//! Physics integration, the grace-window jump, fast-fall, and grounded
//! horizontal movement. The body is bottom-center anchored so landing is a
//! single y-snap to the ground surface.

use glam::Vec2;
use serde::{Deserialize, Serialize};

use super::aabb::{Aabb, Viewport};
use crate::consts::*;

/// Sprite facing, alternated on a timer while grounded (cosmetic only).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum Facing {
    #[default]
    Right,
    Left,
}

impl Facing {
    fn flipped(self) -> Self {
        match self {
            Facing::Right => Facing::Left,
            Facing::Left => Facing::Right,
        }
    }
}

/// The player body.
///
/// Invariant: `on_ground` implies `vel.y == 0.0` and `air_time == 0.0`.
/// `air_time` only resets while grounded.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PlayerBody {
    /// Bottom-center anchor position
    pub pos: Vec2,
    pub vel: Vec2,
    pub on_ground: bool,
    /// Seconds since the body last left the ground
    pub air_time: f32,
    /// One-shot latch, cleared on landing
    pub fast_falling: bool,
    facing: Facing,
    flip_timer: f32,
}

impl PlayerBody {
    /// Spawn resting on the ground surface at the session start position.
    pub fn new(ground_top: f32) -> Self {
        Self {
            pos: Vec2::new(PLAYER_SPAWN_X, ground_top),
            vel: Vec2::ZERO,
            on_ground: true,
            air_time: 0.0,
            fast_falling: false,
            facing: Facing::default(),
            flip_timer: 0.0,
        }
    }

    pub fn aabb(&self) -> Aabb {
        Aabb::from_bottom_center(self.pos, PLAYER_WIDTH, PLAYER_HEIGHT)
    }

    pub fn facing(&self) -> Facing {
        self.facing
    }

    /// Advance the body by one frame.
    ///
    /// Gravity and air-time accumulate while airborne; horizontal velocity
    /// decays by a fixed per-frame factor (exponential decay, deliberately
    /// not dt-scaled); the body is clamped to the viewport's horizontal
    /// bounds, zeroing horizontal velocity at the left wall.
    pub fn integrate(&mut self, dt: f32, viewport: &Viewport) {
        // Idle facing flip while grounded
        self.flip_timer += dt;
        if self.on_ground && self.flip_timer > FLIP_SECS {
            self.flip_timer = 0.0;
            self.facing = self.facing.flipped();
        }

        if self.on_ground {
            self.air_time = 0.0;
        } else {
            let mut accel = GRAVITY;
            if self.fast_falling {
                accel += FAST_FALL_ACCEL;
            }
            self.vel.y += accel * dt;
            self.air_time += dt;
        }

        self.vel.x *= FRICTION;
        self.pos += self.vel * dt;

        // Horizontal clamp; hitting the left wall kills horizontal motion
        let half = PLAYER_WIDTH / 2.0;
        if self.pos.x - half <= 0.0 {
            self.pos.x = half;
            self.vel.x = 0.0;
        } else if self.pos.x + half > viewport.width {
            self.pos.x = viewport.width - half;
        }
    }

    /// Jump if still inside the grace window (`air_time <= MAX_AIR_TIME`).
    ///
    /// Returns whether the jump fired. The window makes a jump pressed just
    /// after walking off the ground edge still register.
    pub fn jump(&mut self) -> bool {
        if self.air_time <= MAX_AIR_TIME {
            self.vel.y = JUMP_VELOCITY;
            self.on_ground = false;
            true
        } else {
            false
        }
    }

    /// Engage the fast-fall latch. Airborne only; idempotent per airborne
    /// period. Returns whether the latch newly engaged (cosmetic one-shot).
    pub fn fast_fall(&mut self) -> bool {
        if self.on_ground || self.fast_falling {
            return false;
        }
        self.fast_falling = true;
        true
    }

    /// Accelerate horizontally. Grounded only; aerial horizontal control is
    /// disallowed, only fast-fall is available in the air.
    pub fn run(&mut self, dir: f32, dt: f32) {
        if self.on_ground {
            self.vel.x += RUN_ACCEL * dir.signum() * dt;
        }
    }

    /// Landing resolution, invoked by the collision resolver.
    pub fn land(&mut self, ground_top: f32) {
        self.on_ground = true;
        self.pos.y = ground_top;
        self.vel.y = 0.0;
        self.air_time = 0.0;
        self.fast_falling = false;
    }
}
