//! Pass detection and scoring
//!
//! An obstacle scores when its trailing edge clears the payload's leading
//! edge. `passed` latches, so each obstacle contributes exactly once even
//! though it keeps scrolling for many more ticks.

use log::debug;

use super::state::{SessionEvent, SessionState};

/// Mark newly passed obstacles and bump the score once per obstacle.
pub fn update(state: &mut SessionState, events: &mut Vec<SessionEvent>) {
    let payload_left = state.payload.left_edge();
    for obstacle in &mut state.obstacles {
        if !obstacle.passed && obstacle.trailing_edge() < payload_left {
            obstacle.passed = true;
            state.score += 1;
            events.push(SessionEvent::ObstaclePassed { id: obstacle.id });
            debug!("passed obstacle #{}, score {}", obstacle.id, state.score);
        }
    }
}
