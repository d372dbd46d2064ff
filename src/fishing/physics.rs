//! Bobber physics: a minimal ballistic flight plus cosmetic floating.
//!
//! Not a physics engine. The only collision surface in the world is the
//! water plane at y = 0.

use super::types::{Bobber, CastOrigin};
use crate::constants::{
    BASE_CAST_SPEED, BITE_DEPRESSION, BITE_JITTER, BITE_JITTER_SPEED, CAST_ARC_BIAS,
    CAST_ORIGIN_OFFSET, CHARGE_CAST_SPEED, FLOAT_AMPLITUDE, FLOAT_SPEED, GRAVITY, MAX_CHARGE,
    WATER_HEIGHT,
};
use crate::math::Vec3;

/// Launch velocity from the aim direction and the accumulated charge.
///
/// The aim gets a fixed upward bias before renormalizing so every cast
/// arcs; speed runs 10..30 units/s across the charge range.
pub fn launch_velocity(forward: Vec3, charge: f64) -> Vec3 {
    let dir = Vec3::new(forward.x, forward.y + CAST_ARC_BIAS, forward.z).normalized();
    let speed = BASE_CAST_SPEED + (charge / MAX_CHARGE) * CHARGE_CAST_SPEED;
    dir.scale(speed)
}

/// Creates the bobber at the camera's forward-projected point with its
/// launch velocity.
pub fn spawn_bobber(origin: &CastOrigin, charge: f64) -> Bobber {
    Bobber {
        position: origin.position.add_scaled(origin.forward, CAST_ORIGIN_OFFSET),
        velocity: launch_velocity(origin.forward, charge),
        biting: false,
    }
}

/// Advances one flight step: gravity on the vertical component, then a
/// position step. Returns true on the step that reaches the water, with the
/// bobber clamped to the surface and its velocity zeroed.
pub fn integrate_flight(bobber: &mut Bobber, dt: f64) -> bool {
    bobber.velocity.y -= GRAVITY * dt;
    bobber.position = bobber.position.add_scaled(bobber.velocity, dt);

    if bobber.position.y <= WATER_HEIGHT {
        bobber.position.y = WATER_HEIGHT;
        bobber.velocity = Vec3::ZERO;
        return true;
    }
    false
}

/// Vertical offset of a floating bobber, as a function of simulation time.
/// Purely visual.
pub fn float_height(sim_time: f64) -> f64 {
    (sim_time * FLOAT_SPEED).sin() * FLOAT_AMPLITUDE
}

/// Vertical offset while a fish is on: held under the surface with a fast
/// wobble. Purely visual.
pub fn bite_height(sim_time: f64) -> f64 {
    BITE_DEPRESSION + (sim_time * BITE_JITTER_SPEED).sin().abs() * BITE_JITTER
}
