//! The fishing state machine.
//!
//! Consumes discrete press/release events and per-frame time deltas, drives
//! the bobber physics, and emits [`FishingEvent`]s for the presentation
//! layer. Failed reels are ordinary transitions, never errors.

use super::generation;
use super::physics;
use super::types::{CastOrigin, FishingEvent, FishingSession, FishingState};
use crate::constants::{CHARGE_RATE, MAX_CHARGE};
use rand::Rng;

/// Handles the primary action press.
///
/// Idle → Charging, Waiting → Idle (too early), Biting → Idle (catch).
/// Any other state has no press transition and the event is ignored; in
/// particular the line cannot be touched while in flight.
pub fn press_action(session: &mut FishingSession, rng: &mut impl Rng) -> Vec<FishingEvent> {
    match session.state {
        FishingState::Idle => {
            session.state = FishingState::Charging;
            session.charge = 0.0;
            vec![FishingEvent::ChargingStarted]
        }
        FishingState::Waiting => {
            session.reset();
            vec![FishingEvent::TooEarly]
        }
        FishingState::Biting => {
            let fish = generation::roll_catch(rng);
            session.reset();
            vec![FishingEvent::Caught(fish)]
        }
        FishingState::Charging | FishingState::Casting => Vec::new(),
    }
}

/// Handles the primary action release: Charging → Casting, spawning the
/// bobber from the camera pose captured at this instant. Ignored in every
/// other state.
pub fn release_action(session: &mut FishingSession, origin: &CastOrigin) -> Vec<FishingEvent> {
    if session.state != FishingState::Charging {
        return Vec::new();
    }

    session.state = FishingState::Casting;
    session.bobber = Some(physics::spawn_bobber(origin, session.charge));
    vec![FishingEvent::Cast]
}

/// Advances the simulation by `dt` seconds.
///
/// Timer expiry is checked once per frame; a long frame can overshoot a
/// window by up to one frame's worth of time, which is accepted behavior.
/// Negative deltas are clamped to zero.
pub fn update(session: &mut FishingSession, dt: f64, rng: &mut impl Rng) -> Vec<FishingEvent> {
    let dt = dt.max(0.0);
    session.sim_time += dt;

    let mut events = Vec::new();

    match session.state {
        FishingState::Idle => {}

        FishingState::Charging => {
            session.charge = (session.charge + CHARGE_RATE * dt).min(MAX_CHARGE);
        }

        FishingState::Casting => {
            if let Some(bobber) = session.bobber.as_mut() {
                if physics::integrate_flight(bobber, dt) {
                    session.state = FishingState::Waiting;
                    session.bite_timer = generation::roll_bite_delay(rng);
                    events.push(FishingEvent::Splashdown);
                }
            }
        }

        FishingState::Waiting => {
            if let Some(bobber) = session.bobber.as_mut() {
                bobber.position.y = physics::float_height(session.sim_time);
            }
            session.bite_timer = (session.bite_timer - dt).max(0.0);
            if session.bite_timer <= 0.0 {
                session.state = FishingState::Biting;
                session.bite_window = generation::roll_bite_window(rng);
                if let Some(bobber) = session.bobber.as_mut() {
                    bobber.biting = true;
                }
                events.push(FishingEvent::BiteCue);
            }
        }

        FishingState::Biting => {
            if let Some(bobber) = session.bobber.as_mut() {
                bobber.position.y = physics::bite_height(session.sim_time);
            }
            session.bite_window = (session.bite_window - dt).max(0.0);
            if session.bite_window <= 0.0 {
                session.reset();
                events.push(FishingEvent::GotAway);
            }
        }
    }

    events
}
