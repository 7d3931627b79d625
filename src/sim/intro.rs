//! Pre-game intro sequencer
//!
//! Three scripted phases position the vessel and payload before gravity goes
//! live: the vessel eases in toward its hover point, the payload lifts off
//! the ground to the tether point, and the handoff flips the session into
//! play. Rates are per tick; the sequence ignores thrust input and touches
//! neither fuel nor collisions.

use glam::Vec2;

use crate::Bounds;
use crate::consts::*;

use super::state::{IntroPhase, SessionState};

/// Advance the intro by one tick. Returns `true` on handoff, when gameplay
/// should begin.
pub fn advance(state: &mut SessionState, bounds: &Bounds) -> bool {
    let target = Vec2::new(
        bounds.width * VESSEL_X_FRACTION,
        bounds.height * HOVER_Y_FRACTION,
    );

    match state.intro {
        IntroPhase::Approach => {
            // Payload waits on the ground under the hover point
            state.payload.pos = Vec2::new(target.x, bounds.payload_ground_y());

            let delta = target - state.vessel.pos;
            if delta.length() > INTRO_SNAP_DISTANCE {
                state.vessel.pos += delta * INTRO_APPROACH_RATE;
            } else {
                state.vessel.pos = target;
                state.intro = IntroPhase::Lift;
                state.tether_visible = true;
            }
            false
        }
        IntroPhase::Lift => {
            state.payload.pos.x = state.vessel.pos.x;
            let lift_target = state.vessel.pos.y + TETHER_OFFSET;
            if state.payload.pos.y - lift_target > INTRO_LIFT_SPEED {
                state.payload.pos.y -= INTRO_LIFT_SPEED;
            } else {
                state.payload.pos.y = lift_target;
                state.intro = IntroPhase::Handoff;
            }
            false
        }
        IntroPhase::Handoff => {
            state.intro = IntroPhase::Approach;
            true
        }
    }
}
