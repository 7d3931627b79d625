//! Obstacle spawning, scrolling, and culling

use log::debug;
use rand::Rng;
use rand_pcg::Pcg32;

use crate::Bounds;
use crate::consts::CULL_MARGIN;
use crate::tuning::WorldTuning;

use super::state::{Obstacle, ObstacleKind, SessionState};

/// Spawn on the interval timer, then scroll and cull the collection.
///
/// New obstacles appear at the right viewport edge, so they cannot satisfy
/// the same-tick pass check; they become eligible only after scrolling.
pub fn update(
    state: &mut SessionState,
    dt: f32,
    bounds: &Bounds,
    tuning: &WorldTuning,
    rng: &mut Pcg32,
) {
    state.spawn_timer += dt;
    if state.spawn_timer > tuning.spawn_interval {
        state.spawn_timer = 0.0;

        let kind = if rng.random_bool(0.5) {
            ObstacleKind::Depot
        } else {
            ObstacleKind::Pylon
        };
        let size = tuning.obstacle_size(kind);
        let id = state.next_obstacle_id();
        state.obstacles.push(Obstacle {
            id,
            x: bounds.width,
            width: size.x,
            height: size.y,
            kind,
            passed: false,
        });
        debug!("spawned {kind:?} #{id} at x={}", bounds.width);
    }

    for obstacle in &mut state.obstacles {
        obstacle.x -= tuning.scroll_speed * dt;
    }
    state.obstacles.retain(|o| o.trailing_edge() >= CULL_MARGIN);
}
