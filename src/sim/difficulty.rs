//! Score-driven difficulty scaling
//!
//! World speed and spawn chance both ratchet up multiplicatively every
//! `DIFFICULTY_INTERVAL` points. Both are capped so an arbitrarily long
//! session can never escalate them to infinity.

use serde::{Deserialize, Serialize};

use crate::consts::*;

/// Scroll speed and spawn probability, monotone over a session.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Difficulty {
    /// Signed horizontal world velocity (negative = leftward scroll)
    pub world_speed: f32,
    /// Spawn probability density per second, in (0, 1)
    pub spawn_chance: f32,
    score_at_last_escalation: u32,
}

impl Default for Difficulty {
    fn default() -> Self {
        Self {
            world_speed: INITIAL_SPEED,
            spawn_chance: INITIAL_SPAWN_CHANCE,
            score_at_last_escalation: 0,
        }
    }
}

impl Difficulty {
    /// Escalate if the score has advanced a full interval since the last
    /// escalation. Returns whether an escalation fired.
    pub fn maybe_escalate(&mut self, score: u32) -> bool {
        if score - self.score_at_last_escalation < DIFFICULTY_INTERVAL {
            return false;
        }
        self.score_at_last_escalation = score;

        // world_speed is negative; scaling the raw value grows its magnitude
        self.world_speed = (self.world_speed * DIFFICULTY_MULTIPLIER).max(-MAX_WORLD_SPEED);
        self.spawn_chance = (self.spawn_chance * DIFFICULTY_MULTIPLIER).min(MAX_SPAWN_CHANCE);
        debug_assert!(self.world_speed.is_finite() && self.spawn_chance.is_finite());

        log::debug!(
            "difficulty up: speed {:.0}, spawn chance {:.3}",
            self.world_speed,
            self.spawn_chance
        );
        true
    }

    /// Freeze the world on game over: scrolling stops. The step function is
    /// a no-op past that point, so the spawn knob is left untouched.
    pub fn halt(&mut self) {
        self.world_speed = 0.0;
    }
}
