//! Per-frame simulation step
//!
//! Advances the whole session once per host frame in a fixed order:
//! intents → player integration → landing → ground advance/recycle →
//! obstacle advance/spawn → fatal check → pass check. The step is a no-op
//! once the session is in `GameOver`.

use super::collision::{check_fatal, player_passed, resolve_landing};
use super::state::{EmoteKind, FrameEvents, GameSession, SessionState};
use crate::consts::*;

/// Input intents for a single frame. The host translates raw input events
/// into these; the core never polls devices.
#[derive(Debug, Clone, Copy, Default)]
pub struct StepInput {
    pub jump: bool,
    pub left: bool,
    pub right: bool,
    pub fast_fall: bool,
}

/// Advance the session by one frame.
///
/// `dt` must be non-negative; deltas above `MAX_FRAME_DT` are clamped so a
/// stalled host frame cannot tunnel an obstacle through the player.
pub fn step(session: &mut GameSession, input: &StepInput, dt: f32) -> FrameEvents {
    assert!(dt >= 0.0, "negative frame delta: {dt}");
    let dt = dt.min(MAX_FRAME_DT);

    let mut events = FrameEvents::default();
    if session.state == SessionState::GameOver {
        return events;
    }

    let viewport = session.viewport;
    let ground_top = viewport.height - TILE_HEIGHT;

    // Intents, then physics, then landing
    if let Some(player) = session.player.as_mut() {
        if input.jump && player.jump() {
            events.jumped = true;
        }
        if input.fast_fall && player.fast_fall() {
            // One-shot pose on entering fast-fall
            events.emote = Some(EmoteKind::LegsTogether);
        }
        if input.left {
            player.run(-1.0, dt);
        }
        if input.right {
            player.run(1.0, dt);
        }

        player.integrate(dt, &viewport);
        if resolve_landing(player, &session.ground, &viewport) {
            events.landed = true;
        }
    }

    // World scroll
    let world_speed = session.difficulty.world_speed;
    session.ground.advance(dt, world_speed);
    session.ground.recycle(&viewport);
    session.obstacles.advance(dt, world_speed, ground_top);
    session
        .obstacles
        .maybe_spawn(dt, session.difficulty.spawn_chance, &viewport, &mut session.rng);

    // Fatal collision: remove the body, freeze the world, terminal state
    if let Some(player) = &session.player
        && check_fatal(player, &session.obstacles)
    {
        session.player = None;
        session.difficulty.halt();
        session.state = SessionState::GameOver;
        events.fatal_collision = true;
        log::info!("game over at score {}", session.score);
        return events;
    }

    // Pass detection: only the oldest unpassed obstacle can be the one the
    // player is currently clearing
    let mut passed = false;
    if let Some(player) = &session.player
        && let Some(obstacle) = session.obstacles.first_unpassed()
        && player_passed(player, obstacle)
    {
        obstacle.passed = true;
        passed = true;
    }
    if passed {
        session.score += 1;
        events.obstacle_passed = true;
        events.emote = Some(EmoteKind::draw(&mut session.rng));
        if session.difficulty.maybe_escalate(session.score) {
            events.difficulty_escalated = true;
        }
    }

    events
}
