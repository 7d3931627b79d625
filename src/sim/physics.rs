//! Vertical physics and fuel economy
//!
//! Pure function of the input, bounds, and current vessel. No errors: all
//! ranges are enforced by clamping.

use crate::Bounds;
use crate::consts::ALTITUDE_BURN_FACTOR;
use crate::tuning::WorldTuning;

use super::state::Vessel;

/// Advance vessel position, velocity, and fuel by one tick.
pub fn integrate(
    vessel: &mut Vessel,
    thrusting: bool,
    dt: f32,
    bounds: &Bounds,
    tuning: &WorldTuning,
) {
    if thrusting && vessel.fuel > 0.0 {
        vessel.velocity_y -= tuning.thrust * dt;

        // Thrust burns faster the higher the vessel hangs
        let altitude = (bounds.ground_y - vessel.pos.y).max(0.0);
        let multiplier = 1.0 + (altitude / bounds.height) * ALTITUDE_BURN_FACTOR;
        vessel.fuel = (vessel.fuel - tuning.fuel_consumption * multiplier * dt).max(0.0);
    } else {
        vessel.velocity_y += tuning.gravity * dt;
        vessel.fuel = (vessel.fuel + tuning.fuel_recharge * dt).min(tuning.max_fuel);
    }

    vessel.velocity_y = vessel
        .velocity_y
        .clamp(-tuning.max_velocity, tuning.max_velocity);
    vessel.pos.y += vessel.velocity_y * dt;

    // Ceiling: only an upward breach stops the vessel
    if vessel.pos.y < 0.0 {
        vessel.pos.y = 0.0;
        vessel.velocity_y = 0.0;
    }

    // Ground plane: park the vessel; the collision pass turns contact fatal
    if vessel.pos.y > bounds.ground_y {
        vessel.pos.y = bounds.ground_y;
        vessel.velocity_y = 0.0;
    }
}
