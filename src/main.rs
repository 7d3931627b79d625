//! Skyhaul entry point
//!
//! Headless demo runner: plays one autopilot session in a fixed virtual
//! viewport and prints the outcome. Useful for exercising the simulation
//! without a renderer attached.
//!
//! ```text
//! skyhaul [seed] [score-file]
//! ```

use glam::Vec2;

use skyhaul::sim::{Session, SessionEvent, SessionPhase, TickInput};
use skyhaul::{InMemoryScores, JsonFileScores, ScoreStore, WorldTuning};

const VIEWPORT: Vec2 = Vec2::new(1280.0, 720.0);
const DT: f32 = 1.0 / 60.0;
/// Ten minutes of play at 60 Hz
const MAX_TICKS: u32 = 60 * 600;

fn main() {
    env_logger::init();

    let mut args = std::env::args().skip(1);
    let seed = args
        .next()
        .and_then(|arg| arg.parse().ok())
        .unwrap_or(0xC0FFEE);
    let store: Box<dyn ScoreStore> = match args.next() {
        Some(path) => Box::new(JsonFileScores::new(path)),
        None => Box::new(InMemoryScores::new()),
    };

    let mut session = Session::new(WorldTuning::default(), seed, store);
    session.start();

    // Bang-bang autopilot: thrust whenever the vessel sags below its lane
    let lane_y = VIEWPORT.y * 0.4;

    for tick_no in 0..MAX_TICKS {
        let snapshot = session.snapshot();
        let input = TickInput {
            thrusting: snapshot.phase == SessionPhase::Playing && snapshot.vessel_y > lane_y,
            dt: DT,
            viewport: VIEWPORT,
        };
        for event in session.tick(&input) {
            if let SessionEvent::Fatal(fatal) = event {
                println!(
                    "run over after {tick_no} ticks: {:?}, score {}, best {}",
                    fatal.reason, fatal.final_score, fatal.high_score
                );
                return;
            }
        }
    }

    println!(
        "autopilot survived {MAX_TICKS} ticks, score {}",
        session.snapshot().score
    );
}
