//! Cactus Dash - an endless side-scrolling runner
//!
//! Core modules:
//! - `sim`: Deterministic simulation (physics, ground tiling, obstacle
//!   spawning, collisions, difficulty, session state machine)
//!
//! Rendering, audio, and input polling are host concerns. The host calls
//! [`sim::step`] once per frame with a delta and abstract intents, then
//! reacts to the returned [`sim::FrameEvents`] and reads the session's
//! snapshot accessors to draw.

pub mod sim;

pub use sim::{EmoteKind, FrameEvents, GameSession, SessionState, StepInput, step};

/// Game configuration constants
pub mod consts {
    /// Viewport dimensions (logical pixels, y-down)
    pub const VIEWPORT_WIDTH: f32 = 640.0;
    pub const VIEWPORT_HEIGHT: f32 = 480.0;

    /// Target frame rate; the host's pump owns wall-clock pacing
    pub const TARGET_FPS: f32 = 60.0;
    /// Largest delta a single step will integrate. Larger host deltas are
    /// clamped so a fast obstacle cannot tunnel through the player.
    pub const MAX_FRAME_DT: f32 = 1.0 / 20.0;

    /// Downward acceleration while airborne (pixels/s²)
    pub const GRAVITY: f32 = 2000.0;
    /// Extra downward acceleration while fast-falling (pixels/s²)
    pub const FAST_FALL_ACCEL: f32 = 6000.0;
    /// Vertical impulse applied by a jump (negative = up)
    pub const JUMP_VELOCITY: f32 = -700.0;
    /// Grace window after leaving the ground during which a jump still fires
    pub const MAX_AIR_TIME: f32 = 0.2;
    /// Grounded horizontal acceleration from move intents (pixels/s²)
    pub const RUN_ACCEL: f32 = 2000.0;
    /// Per-frame horizontal damping factor (fixed decay, not dt-scaled)
    pub const FRICTION: f32 = 0.9;
    /// Seconds between sprite-facing flips while grounded (cosmetic)
    pub const FLIP_SECS: f32 = 0.3;

    /// Player hitbox (bottom-center anchored)
    pub const PLAYER_WIDTH: f32 = 56.0;
    pub const PLAYER_HEIGHT: f32 = 72.0;
    /// Player spawn point (bottom-center x), resting on the ground surface
    pub const PLAYER_SPAWN_X: f32 = 75.0;

    /// Ground tile dimensions; one tile spans the whole viewport
    pub const TILE_WIDTH: f32 = 640.0;
    pub const TILE_HEIGHT: f32 = 80.0;
    /// Top surface of the ground ribbon
    pub const GROUND_TOP: f32 = VIEWPORT_HEIGHT - TILE_HEIGHT;
    /// Append a new tile once the ribbon's trailing edge is within this
    /// margin of the viewport's right edge
    pub const TILE_SPAWN_MARGIN: f32 = 20.0;
    /// Tiles needed to span the viewport; the ribbon never grows past this
    pub const MAX_TILES: usize = 2;

    /// Initial world scroll speed (negative = leftward)
    pub const INITIAL_SPEED: f32 = -400.0;
    /// Initial stochastic spawn probability density (per second)
    pub const INITIAL_SPAWN_CHANCE: f32 = 0.25;
    /// No stochastic spawn until this much scroll distance has accumulated
    pub const MIN_OBSTACLE_GAP: f32 = 100.0;
    /// Forced spawn once this much scroll distance passes without one
    pub const MAX_OBSTACLE_GAP: f32 = 600.0;
    /// Fairness inset applied to obstacle hitboxes on fatal checks
    pub const OBSTACLE_HITBOX_INSET: f32 = 2.0;

    /// Escalate difficulty every this many points
    pub const DIFFICULTY_INTERVAL: u32 = 3;
    /// Speed/spawn-chance multiplier per escalation
    pub const DIFFICULTY_MULTIPLIER: f32 = 1.1;
    /// Escalation ceilings; keeps long sessions finite and playable
    pub const MAX_WORLD_SPEED: f32 = 4000.0;
    pub const MAX_SPAWN_CHANCE: f32 = 0.95;
}
