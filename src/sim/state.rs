//! Session state and core simulation types

use glam::Vec2;
use serde::{Deserialize, Serialize};

use crate::Bounds;
use crate::consts::*;

/// Top-level phase of a session
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum SessionPhase {
    /// Waiting for the start command
    Start,
    /// Scripted positioning before gameplay
    Intro,
    /// Active gameplay
    Playing,
    /// Run ended
    GameOver,
}

/// Intro sequencer phase
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum IntroPhase {
    /// Vessel eases toward its hover point
    #[default]
    Approach,
    /// Payload lifts off the ground to the tether point
    Lift,
    /// Gravity goes live and gameplay begins
    Handoff,
}

/// The player-controlled flying entity
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct Vessel {
    /// Center position. `x` is re-anchored to the viewport every tick.
    pub pos: Vec2,
    pub velocity_y: f32,
    pub fuel: f32,
}

impl Vessel {
    /// Off-screen intro start with a full tank.
    pub fn new(max_fuel: f32) -> Self {
        Self {
            pos: Vec2::new(-300.0, -300.0),
            velocity_y: 0.0,
            fuel: max_fuel,
        }
    }
}

/// The towed cargo. Never integrated: derived from the vessel every tick.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize)]
pub struct Payload {
    pub pos: Vec2,
}

impl Payload {
    /// Follow the vessel at tether length, resting on the ground when the
    /// tether would push it below the plane.
    pub fn follow(&mut self, vessel: &Vessel, bounds: &Bounds) {
        self.pos.x = vessel.pos.x;
        self.pos.y = (vessel.pos.y + TETHER_OFFSET).min(bounds.payload_ground_y());
    }

    /// Leading (left) edge of the payload sprite box.
    pub fn left_edge(&self) -> f32 {
        self.pos.x - PAYLOAD_WIDTH / 2.0
    }
}

/// Obstacle flavor; dimensions come from the tuning table.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ObstacleKind {
    /// Wide and squat
    Depot,
    /// Narrow and tall
    Pylon,
}

/// A ground obstacle scrolling right to left. `x` is the left edge.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct Obstacle {
    pub id: u32,
    pub x: f32,
    pub width: f32,
    pub height: f32,
    pub kind: ObstacleKind,
    /// Set once the obstacle scrolls past the payload; never reverts
    pub passed: bool,
}

impl Obstacle {
    /// Trailing (right) edge x.
    pub fn trailing_edge(&self) -> f32 {
        self.x + self.width
    }
}

/// Why the run ended
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum FatalReason {
    /// The towed payload struck an obstacle
    Payload,
    /// The vessel struck an obstacle or the ground
    Vessel,
    /// The tether slackened until vessel and payload tangled
    Both,
}

/// The single terminal signal ending a Playing session
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct FatalEvent {
    pub reason: FatalReason,
    pub final_score: u32,
    pub high_score: u32,
}

/// Events emitted by a tick for front-end collaborators to react to
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub enum SessionEvent {
    /// An obstacle cleared the payload; score went up by one
    ObstaclePassed { id: u32 },
    /// Periodic ambient sound trigger
    AmbientCue,
    /// The run ended
    Fatal(FatalEvent),
}

/// Complete session state. Owned and mutated exclusively by
/// [`Session`](super::session::Session).
#[derive(Debug, Clone)]
pub struct SessionState {
    pub phase: SessionPhase,
    pub intro: IntroPhase,
    pub vessel: Vessel,
    pub payload: Payload,
    /// Spawn order; x decreases monotonically while scrolling
    pub obstacles: Vec<Obstacle>,
    pub score: u32,
    pub high_score: u32,
    /// Seconds accumulated toward the next spawn
    pub spawn_timer: f32,
    /// Seconds until the next ambient cue; `None` when cancelled
    pub cue_timer: Option<f32>,
    /// Set exactly once, when the run ends
    pub fatal: Option<FatalEvent>,
    /// Tether is drawn from the intro lift onward
    pub tether_visible: bool,
    next_id: u32,
}

impl SessionState {
    /// Fresh pre-intro state. `high_score` comes from the persistence
    /// collaborator.
    pub fn new(max_fuel: f32, high_score: u32) -> Self {
        Self {
            phase: SessionPhase::Start,
            intro: IntroPhase::Approach,
            vessel: Vessel::new(max_fuel),
            payload: Payload::default(),
            obstacles: Vec::new(),
            score: 0,
            high_score,
            spawn_timer: 0.0,
            cue_timer: None,
            fatal: None,
            tether_visible: false,
            next_id: 1,
        }
    }

    /// Allocate a new obstacle ID
    pub fn next_obstacle_id(&mut self) -> u32 {
        let id = self.next_id;
        self.next_id += 1;
        id
    }

    /// Cancel the ambient-cue timer. A no-op when already cancelled.
    pub fn cancel_cue(&mut self) {
        self.cue_timer = None;
    }
}
