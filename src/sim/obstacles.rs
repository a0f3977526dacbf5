//! Obstacle spawning, advancement, and retirement
//!
//! Obstacles scroll in from the right at world speed and retire once fully
//! off the left edge. Spawning is stochastic per frame, gated by a minimum
//! scroll gap since the last spawn, with a forced spawn once the gap grows
//! past a maximum - no unbounded empty stretches regardless of the draw.
//! The field owns the distance accumulator; obstacles are plain data.

use glam::Vec2;
use rand::Rng;
use serde::{Deserialize, Serialize};

use super::aabb::{Aabb, Viewport};
use crate::consts::*;

/// Visual/size variant of an obstacle.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ObstacleKind {
    Sapling,
    Saguaro,
    Cluster,
}

impl ObstacleKind {
    /// Hitbox dimensions (width, height) per variant.
    pub fn size(&self) -> (f32, f32) {
        match self {
            ObstacleKind::Sapling => (36.0, 48.0),
            ObstacleKind::Saguaro => (44.0, 84.0),
            ObstacleKind::Cluster => (72.0, 56.0),
        }
    }

    fn pick(rng: &mut impl Rng) -> Self {
        match rng.random_range(0..3) {
            0 => ObstacleKind::Sapling,
            1 => ObstacleKind::Saguaro,
            _ => ObstacleKind::Cluster,
        }
    }
}

/// One live obstacle. `passed` latches exactly once, when the player is
/// judged to have safely traversed it.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Obstacle {
    /// Bottom-left anchor position (bottom snapped to the ground surface)
    pub pos: Vec2,
    pub kind: ObstacleKind,
    pub passed: bool,
}

impl Obstacle {
    pub fn aabb(&self) -> Aabb {
        let (w, h) = self.kind.size();
        Aabb::from_bottom_left(self.pos, w, h)
    }

    /// Hitbox used for fatal checks, inset slightly for fairness.
    pub fn hitbox(&self) -> Aabb {
        self.aabb().shrink(OBSTACLE_HITBOX_INSET)
    }
}

/// The ordered set of live obstacles plus spawn bookkeeping.
///
/// Obstacles are kept in spawn order and never reordered, so the first
/// unpassed obstacle is always the one nearest ahead of the player.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ObstacleField {
    obstacles: Vec<Obstacle>,
    /// Scroll distance accumulated since the last spawn (non-negative)
    distance_since_spawn: f32,
}

impl Default for ObstacleField {
    fn default() -> Self {
        Self::new()
    }
}

impl ObstacleField {
    pub fn new() -> Self {
        Self {
            obstacles: Vec::new(),
            // A fresh session starts mid-gap so the first obstacle is not
            // stalled behind the minimum-gap gate.
            distance_since_spawn: MIN_OBSTACLE_GAP,
        }
    }

    pub fn obstacles(&self) -> &[Obstacle] {
        &self.obstacles
    }

    pub fn distance_since_spawn(&self) -> f32 {
        self.distance_since_spawn
    }

    /// Move, ground-snap, and retire obstacles, accumulating scroll distance.
    pub fn advance(&mut self, dt: f32, world_speed: f32, ground_top: f32) {
        self.distance_since_spawn += world_speed.abs() * dt;
        for obstacle in &mut self.obstacles {
            obstacle.pos.x += world_speed * dt;
            obstacle.pos.y = ground_top;
        }
        self.obstacles.retain(|o| o.aabb().right() > 0.0);
    }

    /// One stochastic spawn check per frame.
    ///
    /// The uniform draw must land under `spawn_chance * dt` and the scroll
    /// gap since the last spawn must be at least `MIN_OBSTACLE_GAP`. Once
    /// the gap exceeds `MAX_OBSTACLE_GAP` a spawn fires regardless of the
    /// draw. A zero `spawn_chance` disables the spawner entirely, forced
    /// rule included - the gap bound only holds while spawning is live.
    /// Returns whether an obstacle spawned.
    pub fn maybe_spawn(
        &mut self,
        dt: f32,
        spawn_chance: f32,
        viewport: &Viewport,
        rng: &mut impl Rng,
    ) -> bool {
        // One draw per frame regardless of gating, keeping the RNG stream
        // in lockstep across replays
        let sample = rng.random::<f32>();
        let forced = spawn_chance > 0.0 && self.distance_since_spawn > MAX_OBSTACLE_GAP;
        let stochastic =
            self.distance_since_spawn >= MIN_OBSTACLE_GAP && sample < spawn_chance * dt;
        if !(forced || stochastic) {
            return false;
        }

        self.obstacles.push(Obstacle {
            pos: Vec2::new(viewport.width, viewport.height - TILE_HEIGHT),
            kind: ObstacleKind::pick(rng),
            passed: false,
        });
        self.distance_since_spawn = 0.0;
        true
    }

    /// Insert an obstacle directly, bypassing the spawn rules. Used by
    /// scenario tests and debug tooling.
    pub fn inject(&mut self, obstacle: Obstacle) {
        self.obstacles.push(obstacle);
    }

    /// Oldest obstacle not yet marked passed, if any.
    pub fn first_unpassed(&mut self) -> Option<&mut Obstacle> {
        self.obstacles.iter_mut().find(|o| !o.passed)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand_pcg::Pcg32;

    fn viewport() -> Viewport {
        Viewport::new(VIEWPORT_WIDTH, VIEWPORT_HEIGHT)
    }

    /// A live spawner whose stochastic draw practically never lands, so
    /// only the forced-gap rule can fire.
    const FORCED_ONLY: f32 = 1e-6;

    #[test]
    fn test_advance_moves_and_snaps() {
        let mut field = ObstacleField::new();
        let mut rng = Pcg32::seed_from_u64(7);
        // Force an immediate spawn via the max-gap rule
        field.distance_since_spawn = MAX_OBSTACLE_GAP + 1.0;
        assert!(field.maybe_spawn(1.0 / 60.0, FORCED_ONLY, &viewport(), &mut rng));

        let x0 = field.obstacles()[0].pos.x;
        field.advance(1.0 / 60.0, INITIAL_SPEED, GROUND_TOP);
        let o = &field.obstacles()[0];
        assert!(o.pos.x < x0);
        assert_eq!(o.pos.y, GROUND_TOP);
        assert_eq!(o.aabb().bottom(), GROUND_TOP);
    }

    #[test]
    fn test_retire_past_left_edge() {
        let mut field = ObstacleField::new();
        let mut rng = Pcg32::seed_from_u64(7);
        field.distance_since_spawn = MAX_OBSTACLE_GAP + 1.0;
        field.maybe_spawn(1.0 / 60.0, FORCED_ONLY, &viewport(), &mut rng);

        // Scroll far enough that the obstacle is fully off-screen
        for _ in 0..600 {
            field.advance(1.0 / 60.0, INITIAL_SPEED, GROUND_TOP);
        }
        assert!(field.obstacles().is_empty());
    }

    #[test]
    fn test_min_gap_blocks_stochastic_spawn() {
        let mut field = ObstacleField::new();
        let mut rng = Pcg32::seed_from_u64(42);
        field.distance_since_spawn = MIN_OBSTACLE_GAP - 1.0;
        // Even with certain odds, the near-zone gate holds
        for _ in 0..100 {
            assert!(!field.maybe_spawn(1.0, 1.0, &viewport(), &mut rng));
        }
    }

    #[test]
    fn test_forced_spawn_overrides_random_draw() {
        let mut field = ObstacleField::new();
        let mut rng = Pcg32::seed_from_u64(42);
        field.distance_since_spawn = MAX_OBSTACLE_GAP + 0.5;
        // Negligible odds: only the forced-gap rule can fire
        assert!(field.maybe_spawn(1.0 / 60.0, FORCED_ONLY, &viewport(), &mut rng));
        assert_eq!(field.distance_since_spawn(), 0.0);
        assert_eq!(field.obstacles().len(), 1);
    }

    #[test]
    fn test_disabled_spawner_never_spawns() {
        let mut field = ObstacleField::new();
        let mut rng = Pcg32::seed_from_u64(11);
        let dt = 1.0 / 60.0;
        // A zero spawn chance silences the forced-gap rule too, no matter
        // how far the gap accumulator runs past the maximum
        for _ in 0..1000 {
            field.advance(dt, INITIAL_SPEED, GROUND_TOP);
            assert!(!field.maybe_spawn(dt, 0.0, &viewport(), &mut rng));
        }
        assert!(field.obstacles().is_empty());
        assert!(field.distance_since_spawn() > MAX_OBSTACLE_GAP);
    }

    #[test]
    fn test_default_matches_new() {
        let field = ObstacleField::default();
        assert!(field.obstacles().is_empty());
        assert_eq!(field.distance_since_spawn(), MIN_OBSTACLE_GAP);
    }

    #[test]
    fn test_gap_bounded_over_long_run() {
        let mut field = ObstacleField::new();
        let mut rng = Pcg32::seed_from_u64(1);
        let dt = 1.0 / 60.0;
        for _ in 0..20_000 {
            field.advance(dt, INITIAL_SPEED, GROUND_TOP);
            field.maybe_spawn(dt, FORCED_ONLY, &viewport(), &mut rng);
            let slack = INITIAL_SPEED.abs() * dt;
            assert!(field.distance_since_spawn() <= MAX_OBSTACLE_GAP + slack);
        }
        assert!(!field.obstacles().is_empty() || field.distance_since_spawn() < MAX_OBSTACLE_GAP);
    }

    #[test]
    fn test_spawns_respect_min_gap_spacing() {
        let mut field = ObstacleField::new();
        let mut rng = Pcg32::seed_from_u64(99);
        let dt = 1.0 / 60.0;
        let mut since_spawn = f32::MAX;
        for _ in 0..60_000 {
            field.advance(dt, INITIAL_SPEED, GROUND_TOP);
            let step = INITIAL_SPEED.abs() * dt;
            since_spawn += step;
            if field.maybe_spawn(dt, 0.9, &viewport(), &mut rng) {
                assert!(
                    since_spawn >= MIN_OBSTACLE_GAP,
                    "spawned {since_spawn} after previous spawn"
                );
                since_spawn = 0.0;
            }
        }
    }

    #[test]
    fn test_first_unpassed_is_oldest() {
        let mut field = ObstacleField::new();
        let mut rng = Pcg32::seed_from_u64(3);
        for _ in 0..3 {
            field.distance_since_spawn = MAX_OBSTACLE_GAP + 1.0;
            field.maybe_spawn(1.0 / 60.0, FORCED_ONLY, &viewport(), &mut rng);
            // Separate them so identity is observable
            field.advance(0.5, INITIAL_SPEED, GROUND_TOP);
        }
        assert_eq!(field.obstacles().len(), 3);

        let oldest_x = field.obstacles()[0].pos.x;
        let first = field.first_unpassed().unwrap();
        assert_eq!(first.pos.x, oldest_x);
        first.passed = true;

        let second_x = field.obstacles()[1].pos.x;
        let next = field.first_unpassed().unwrap();
        assert_eq!(next.pos.x, second_x);
    }
}
