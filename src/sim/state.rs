//! Session state and the Running/GameOver state machine
//!
//! `GameSession` exclusively owns every piece of mutable simulation state:
//! the player body, ground ribbon, obstacle field, difficulty knobs, score,
//! and the session RNG. Nothing here is a process-wide singleton; components
//! receive what they need by parameter from the step function.

use rand::{Rng, SeedableRng};
use rand_pcg::Pcg32;
use serde::Serialize;

use super::aabb::Viewport;
use super::difficulty::Difficulty;
use super::ground::{GroundRibbon, GroundTile};
use super::obstacles::{Obstacle, ObstacleField};
use super::player::PlayerBody;
use crate::consts::*;

/// Current phase of the session. A single terminal transition:
/// `Running` → `GameOver`, triggered solely by a fatal collision.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum SessionState {
    Running,
    GameOver,
}

/// Cosmetic reaction overlays, surfaced to the host as events. The host
/// owns overlay rendering and lifetime; the core only picks the kind.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum EmoteKind {
    Peace,
    Pika,
    LegsTogether,
}

impl EmoteKind {
    /// Weighted draw used on pass events.
    pub(crate) fn draw(rng: &mut impl Rng) -> Self {
        match rng.random_range(0..10) {
            0..=4 => EmoteKind::Peace,
            5..=7 => EmoteKind::Pika,
            _ => EmoteKind::LegsTogether,
        }
    }
}

/// Everything that happened during one step, for the host to react to
/// (audio, overlays, UI) without the core depending on any of that.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct FrameEvents {
    pub jumped: bool,
    pub landed: bool,
    pub obstacle_passed: bool,
    pub fatal_collision: bool,
    pub difficulty_escalated: bool,
    pub emote: Option<EmoteKind>,
}

/// One run of the game, from spawn to fatal collision.
#[derive(Debug, Clone, Serialize)]
pub struct GameSession {
    seed: u64,
    #[serde(skip)]
    pub(crate) rng: Pcg32,
    pub(crate) viewport: Viewport,
    /// `None` once a fatal collision removed the body from simulation
    pub(crate) player: Option<PlayerBody>,
    pub(crate) ground: GroundRibbon,
    pub(crate) obstacles: ObstacleField,
    pub(crate) difficulty: Difficulty,
    pub(crate) score: u32,
    pub(crate) state: SessionState,
}

impl GameSession {
    /// Start a fresh session from the given RNG seed.
    pub fn new(seed: u64) -> Self {
        let viewport = Viewport::new(VIEWPORT_WIDTH, VIEWPORT_HEIGHT);
        let mut ground = GroundRibbon::new();
        ground.recycle(&viewport);

        Self {
            seed,
            rng: Pcg32::seed_from_u64(seed),
            viewport,
            player: Some(PlayerBody::new(GROUND_TOP)),
            ground,
            obstacles: ObstacleField::new(),
            difficulty: Difficulty::default(),
            score: 0,
            state: SessionState::Running,
        }
    }

    /// Reinitialize every component to session start, reusing the seed.
    pub fn reset(&mut self) {
        *self = Self::new(self.seed);
        log::info!("session reset (seed {})", self.seed);
    }

    pub fn seed(&self) -> u64 {
        self.seed
    }

    pub fn state(&self) -> SessionState {
        self.state
    }

    pub fn score(&self) -> u32 {
        self.score
    }

    pub fn world_speed(&self) -> f32 {
        self.difficulty.world_speed
    }

    pub fn spawn_chance(&self) -> f32 {
        self.difficulty.spawn_chance
    }

    pub fn viewport(&self) -> Viewport {
        self.viewport
    }

    /// The player body, while alive.
    pub fn player(&self) -> Option<&PlayerBody> {
        self.player.as_ref()
    }

    /// Ground tiles in spawn order (oldest, i.e. leftmost, first).
    pub fn tiles(&self) -> &[GroundTile] {
        self.ground.tiles()
    }

    /// Live obstacles in spawn order.
    pub fn obstacles(&self) -> &[Obstacle] {
        self.obstacles.obstacles()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_session_starts_running_and_grounded() {
        let s = GameSession::new(12345);
        assert_eq!(s.state(), SessionState::Running);
        assert_eq!(s.score(), 0);
        assert_eq!(s.world_speed(), INITIAL_SPEED);
        assert!(!s.tiles().is_empty());
        assert!(s.obstacles().is_empty());

        let p = s.player().unwrap();
        assert!(p.on_ground);
        assert_eq!(p.pos.y, GROUND_TOP);
    }

    #[test]
    fn test_reset_restores_session_start() {
        let mut s = GameSession::new(7);
        s.score = 9;
        s.state = SessionState::GameOver;
        s.player = None;
        s.difficulty.world_speed = 0.0;

        s.reset();
        assert_eq!(s.state(), SessionState::Running);
        assert_eq!(s.score(), 0);
        assert_eq!(s.world_speed(), INITIAL_SPEED);
        assert!(s.player().is_some());
        assert_eq!(s.seed(), 7);
    }

    #[test]
    fn test_emote_draw_covers_all_kinds() {
        use rand::SeedableRng;
        let mut rng = rand_pcg::Pcg32::seed_from_u64(0);
        let mut seen = [false; 3];
        for _ in 0..200 {
            match EmoteKind::draw(&mut rng) {
                EmoteKind::Peace => seen[0] = true,
                EmoteKind::Pika => seen[1] = true,
                EmoteKind::LegsTogether => seen[2] = true,
            }
        }
        assert!(seen.iter().all(|&s| s));
    }

    #[test]
    fn test_session_snapshot_serializes() {
        let s = GameSession::new(1);
        let json = serde_json::to_string(&s).unwrap();
        assert!(json.contains("\"score\":0"));
        assert!(json.contains("Running"));
    }
}
