//! Cactus Dash entry point
//!
//! Headless demo: runs the simulation at a fixed 60 Hz with a naive
//! autopilot on the stick, logging frame events, and prints the final
//! score plus a JSON snapshot of the session when the run ends.

use std::time::{SystemTime, UNIX_EPOCH};

use cactus_dash::consts::*;
use cactus_dash::sim::{GameSession, SessionState, StepInput, step};

/// Hard stop so a lucky autopilot cannot run forever.
const MAX_FRAMES: u64 = 60 * 60 * 10;

fn main() {
    env_logger::init();

    let seed = std::env::args()
        .nth(1)
        .and_then(|arg| arg.parse::<u64>().ok())
        .unwrap_or_else(|| {
            SystemTime::now()
                .duration_since(UNIX_EPOCH)
                .map(|d| d.as_secs())
                .unwrap_or(0)
        });

    log::info!("starting run with seed {seed}");
    let mut session = GameSession::new(seed);
    let dt = 1.0 / TARGET_FPS;

    let mut frames = 0u64;
    while session.state() == SessionState::Running && frames < MAX_FRAMES {
        let input = autopilot(&session);
        let events = step(&mut session, &input, dt);

        if events.jumped {
            log::debug!("jump at frame {frames}");
        }
        if events.obstacle_passed {
            log::info!("passed obstacle, score {}", session.score());
        }
        if events.difficulty_escalated {
            log::info!(
                "difficulty escalated: speed {:.0}, spawn chance {:.3}",
                session.world_speed(),
                session.spawn_chance()
            );
        }
        if let Some(kind) = events.emote {
            log::debug!("emote: {kind:?}");
        }

        frames += 1;
    }

    println!(
        "run over: score {} after {} frames ({:.1}s)",
        session.score(),
        frames,
        frames as f32 * dt
    );
    match serde_json::to_string_pretty(&session) {
        Ok(snapshot) => println!("{snapshot}"),
        Err(e) => log::error!("snapshot serialization failed: {e}"),
    }
}

/// Jump when the nearest unpassed obstacle gets close, with the lookahead
/// scaled to the current scroll speed so later waves still get cleared.
fn autopilot(session: &GameSession) -> StepInput {
    let mut input = StepInput::default();
    let Some(player) = session.player() else {
        return input;
    };

    let lookahead = session.world_speed().abs() * 0.3;
    if let Some(obstacle) = session.obstacles().iter().find(|o| !o.passed) {
        let gap = obstacle.aabb().left() - player.aabb().right();
        if (0.0..lookahead).contains(&gap) && player.on_ground {
            input.jump = true;
        }
    }
    input
}
