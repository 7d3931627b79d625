//! Skyhaul - a side-scrolling tow-flight arcade game
//!
//! Core modules:
//! - `sim`: Deterministic simulation (physics, spawning, collisions, session state)
//! - `scores`: High score persistence
//! - `tuning`: Data-driven game balance

pub mod scores;
pub mod sim;
pub mod tuning;

pub use scores::{InMemoryScores, JsonFileScores, ScoreStore};
pub use tuning::WorldTuning;

use glam::Vec2;

/// Game configuration constants
pub mod consts {
    /// Vessel anchor column as a fraction of viewport width
    pub const VESSEL_X_FRACTION: f32 = 0.15;
    /// Intro hover target as a fraction of viewport height
    pub const HOVER_Y_FRACTION: f32 = 0.25;
    /// Height of the ground strip at the bottom of the viewport
    pub const GROUND_DEPTH: f32 = 80.0;
    /// Vertical drop from vessel to payload when the tether is taut
    pub const TETHER_OFFSET: f32 = 200.0;

    /// Vessel sprite dimensions
    pub const VESSEL_WIDTH: f32 = 96.0;
    pub const VESSEL_HEIGHT: f32 = 40.0;
    /// Payload sprite dimensions
    pub const PAYLOAD_WIDTH: f32 = 56.0;
    pub const PAYLOAD_HEIGHT: f32 = 34.0;

    /// Forgiveness: fraction of the sprite box that can actually collide
    pub const VESSEL_HITBOX_W: f32 = 0.7;
    pub const VESSEL_HITBOX_H: f32 = 0.4;
    pub const PAYLOAD_HITBOX_W: f32 = 0.8;
    pub const PAYLOAD_HITBOX_H: f32 = 0.8;
    /// Obstacle boxes are pulled in this far on the leading/trailing edges
    pub const OBSTACLE_EDGE_MARGIN: f32 = 8.0;

    /// Vessel and payload centers closer than this tangle the tether
    pub const ENTANGLEMENT_DISTANCE: f32 = 40.0;

    /// Obstacles are culled once their trailing edge is left of this x
    pub const CULL_MARGIN: f32 = -150.0;

    /// Intro approach easing per tick
    pub const INTRO_APPROACH_RATE: f32 = 0.05;
    /// Snap to the hover target below this distance
    pub const INTRO_SNAP_DISTANCE: f32 = 5.0;
    /// Payload lift speed during the intro, px per tick
    pub const INTRO_LIFT_SPEED: f32 = 2.5;

    /// Ambient cue scheduling window, seconds of play
    pub const CUE_DELAY_MIN: f32 = 20.0;
    pub const CUE_DELAY_MAX: f32 = 40.0;

    /// Thrust burn grows by this factor times normalized altitude
    pub const ALTITUDE_BURN_FACTOR: f32 = 2.8;
}

/// Viewport-derived world bounds.
///
/// Recomputed from the raw viewport every tick, so a mid-session resize takes
/// effect on the next tick without discarding any in-flight state.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Bounds {
    pub width: f32,
    pub height: f32,
    /// y of the ground plane
    pub ground_y: f32,
}

impl Bounds {
    pub fn from_viewport(viewport: Vec2) -> Self {
        Self {
            width: viewport.x,
            height: viewport.y,
            ground_y: viewport.y - consts::GROUND_DEPTH,
        }
    }

    /// Resting y for the payload center: box bottom on the ground plane.
    pub fn payload_ground_y(&self) -> f32 {
        self.ground_y - consts::PAYLOAD_HEIGHT / 2.0
    }
}
