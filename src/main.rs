//! Mountain Hop entry point
//!
//! Runs a headless demo session: an autopilot taps the ball through a number
//! of simulated frames while the high score is kept in a JSON prefs file.
//!
//! Usage: `mountain-hop [tuning.json]`

use mountain_hop::platform::{Clock, FrameTimer, ManualClock};
use mountain_hop::sim::{DEFAULT_SEED, GamePhase, WorldSnapshot};
use mountain_hop::{JsonFileStore, Session, Tuning, Viewport};

const PREFS_FILE: &str = "mountain_hop_prefs.json";
const VIEWPORT: (f32, f32) = (1280.0, 720.0);
/// One simulated minute at ~60 Hz
const DEMO_FRAMES: u32 = 3750;

fn main() {
    env_logger::init();
    log::info!("Mountain Hop (headless demo) starting...");

    if let Err(e) = run() {
        log::error!("{}", e);
        std::process::exit(1);
    }
}

fn run() -> Result<(), mountain_hop::ConfigError> {
    let tuning = match std::env::args().nth(1) {
        Some(path) => Tuning::load(path)?,
        None => Tuning::default(),
    };
    let viewport = Viewport::new(VIEWPORT.0, VIEWPORT.1)?;
    let frame_interval = tuning.frame_interval_ms;

    let mut session = Session::new(
        tuning,
        viewport,
        DEFAULT_SEED,
        JsonFileStore::new(PREFS_FILE),
        FrameTimer::new(frame_interval),
        ManualClock::new(0),
    )?;

    let mut runs = 0u32;
    let mut frames = 0u32;
    while frames < DEMO_FRAMES {
        session.clock().advance(frame_interval);

        let waiting = session.phase() == GamePhase::WaitingToStart;
        if waiting || autopilot_wants_jump(&session.snapshot(), &viewport) {
            session.tap();
        }

        if let Some(result) = session.pump() {
            frames += 1;
            if let Some(cause) = result.terminal {
                runs += 1;
                log::info!("Run {} over ({:?})", runs, cause);
            }
        }
    }

    let snapshot = session.snapshot();
    println!(
        "Played {} frames over {}ms: {} runs finished, current score {}, high score {}",
        frames,
        session.clock().now_ms(),
        runs,
        snapshot.score,
        snapshot.high_score
    );
    Ok(())
}

/// Idle/demo mode: hop when sinking below center or when something is
/// about to arrive at the ball's height
fn autopilot_wants_jump(snapshot: &WorldSnapshot, viewport: &Viewport) -> bool {
    let ball = snapshot.ball_pos;
    if ball.y > viewport.height * 0.6 {
        return true;
    }

    snapshot.obstacles.iter().any(|o| {
        let approaching = o.pos.x > ball.x && o.pos.x - ball.x < snapshot.ball_radius * 3.0;
        let below = o.pos.y < ball.y + snapshot.ball_radius * 2.0 && o.pos.y + o.size.y > ball.y;
        approaching && below && ball.y > viewport.height * 0.3
    })
}
