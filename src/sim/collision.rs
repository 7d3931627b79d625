//! Fatal collision detection
//!
//! Axis-aligned boxes shrunk by forgiveness margins. The detector runs once
//! per tick while the session is Playing and reports at most the first hit;
//! the session freezes on it, so it can never fire twice.

use glam::Vec2;

use crate::Bounds;
use crate::consts::*;

use super::state::{FatalReason, Obstacle, Payload, Vessel};

/// Axis-aligned bounding box
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Aabb {
    pub min: Vec2,
    pub max: Vec2,
}

impl Aabb {
    pub fn from_center(center: Vec2, size: Vec2) -> Self {
        let half = size / 2.0;
        Self {
            min: center - half,
            max: center + half,
        }
    }

    /// Strict overlap: boxes that exactly touch do not collide.
    pub fn overlaps(&self, other: &Aabb) -> bool {
        self.min.x < other.max.x
            && other.min.x < self.max.x
            && self.min.y < other.max.y
            && other.min.y < self.max.y
    }
}

/// Vessel hitbox, shrunk for forgiveness.
pub fn vessel_box(vessel: &Vessel) -> Aabb {
    Aabb::from_center(
        vessel.pos,
        Vec2::new(
            VESSEL_WIDTH * VESSEL_HITBOX_W,
            VESSEL_HEIGHT * VESSEL_HITBOX_H,
        ),
    )
}

/// Payload hitbox, shrunk for forgiveness.
pub fn payload_box(payload: &Payload) -> Aabb {
    Aabb::from_center(
        payload.pos,
        Vec2::new(
            PAYLOAD_WIDTH * PAYLOAD_HITBOX_W,
            PAYLOAD_HEIGHT * PAYLOAD_HITBOX_H,
        ),
    )
}

/// Obstacle hitbox: rooted on the ground plane, edges pulled in.
pub fn obstacle_box(obstacle: &Obstacle, bounds: &Bounds) -> Aabb {
    Aabb {
        min: Vec2::new(
            obstacle.x + OBSTACLE_EDGE_MARGIN,
            bounds.ground_y - obstacle.height,
        ),
        max: Vec2::new(
            obstacle.trailing_edge() - OBSTACLE_EDGE_MARGIN,
            bounds.ground_y,
        ),
    }
}

/// Test the payload and vessel against the world, first hit wins:
/// payload/obstacle, then vessel/obstacle, then vessel/ground, then the
/// tether tangle.
pub fn detect(
    vessel: &Vessel,
    payload: &Payload,
    obstacles: &[Obstacle],
    bounds: &Bounds,
) -> Option<FatalReason> {
    let vessel_aabb = vessel_box(vessel);
    let payload_aabb = payload_box(payload);

    if obstacles
        .iter()
        .any(|o| payload_aabb.overlaps(&obstacle_box(o, bounds)))
    {
        return Some(FatalReason::Payload);
    }
    if obstacles
        .iter()
        .any(|o| vessel_aabb.overlaps(&obstacle_box(o, bounds)))
    {
        return Some(FatalReason::Vessel);
    }

    // Ground contact is fatal for the vessel alone; touching counts here,
    // unlike the obstacle boxes
    if vessel_aabb.max.y >= bounds.ground_y {
        return Some(FatalReason::Vessel);
    }

    if vessel.pos.distance(payload.pos) < ENTANGLEMENT_DISTANCE {
        return Some(FatalReason::Both);
    }

    None
}
