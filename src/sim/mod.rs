//! Deterministic simulation module
//!
//! All gameplay logic lives here. This module must be pure and deterministic:
//! - Frame-driven, synchronous ticks
//! - Seeded RNG only
//! - No rendering or platform dependencies

pub mod collision;
pub mod intro;
pub mod physics;
pub mod score;
pub mod session;
pub mod spawner;
pub mod state;

pub use collision::Aabb;
pub use session::{Session, Snapshot, TickInput};
pub use state::{
    FatalEvent, FatalReason, IntroPhase, Obstacle, ObstacleKind, Payload, SessionEvent,
    SessionPhase, SessionState, Vessel,
};
