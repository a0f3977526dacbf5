//! Deterministic simulation module
//!
//! All gameplay logic lives here. This module must be pure and deterministic:
//! - Variable timestep, but every delta clamped to `MAX_FRAME_DT`
//! - Seeded RNG only, owned by the session
//! - Stable iteration order (tiles and obstacles stay in spawn order)
//! - No rendering, audio, or platform dependencies

pub mod aabb;
pub mod collision;
pub mod difficulty;
pub mod ground;
pub mod obstacles;
pub mod player;
pub mod state;
pub mod tick;

pub use aabb::{Aabb, Viewport};
pub use collision::{check_fatal, player_passed, resolve_landing};
pub use difficulty::Difficulty;
pub use ground::{GroundRibbon, GroundTile};
pub use obstacles::{Obstacle, ObstacleField, ObstacleKind};
pub use player::{Facing, PlayerBody};
pub use state::{EmoteKind, FrameEvents, GameSession, SessionState};
pub use tick::{StepInput, step};
