//! Gameplay tuning
//!
//! One immutable table per session. Keep this separate from viewport-derived
//! bounds (ground plane, anchor column), which are recomputed every tick.
//! Rates are per second; callers integrate with their frame delta.

use glam::Vec2;
use serde::{Deserialize, Serialize};

use crate::sim::ObstacleKind;

/// World parameters, fixed for the lifetime of a session.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct WorldTuning {
    /// Downward acceleration, px/s²
    pub gravity: f32,
    /// Upward acceleration while thrusting, px/s²
    pub thrust: f32,
    /// Fuel drained per second of thrust at ground level; scales with altitude
    pub fuel_consumption: f32,
    /// Fuel regained per second while coasting
    pub fuel_recharge: f32,
    /// Tank capacity
    pub max_fuel: f32,
    /// Vertical speed clamp, px/s
    pub max_velocity: f32,
    /// Horizontal world scroll, px/s
    pub scroll_speed: f32,
    /// Seconds between obstacle spawns
    pub spawn_interval: f32,
    /// Depot dimensions (w, h)
    pub depot_size: Vec2,
    /// Pylon dimensions (w, h)
    pub pylon_size: Vec2,
}

impl Default for WorldTuning {
    fn default() -> Self {
        Self {
            gravity: 450.0,
            thrust: 2250.0,
            fuel_consumption: 19.2,
            fuel_recharge: 7.2,
            max_fuel: 100.0,
            max_velocity: 600.0,
            scroll_speed: 240.0,
            spawn_interval: 3.0,
            depot_size: Vec2::new(150.0, 110.0),
            pylon_size: Vec2::new(70.0, 170.0),
        }
    }
}

impl WorldTuning {
    /// Dimension table lookup for a spawned obstacle.
    pub fn obstacle_size(&self, kind: ObstacleKind) -> Vec2 {
        match kind {
            ObstacleKind::Depot => self.depot_size,
            ObstacleKind::Pylon => self.pylon_size,
        }
    }
}
