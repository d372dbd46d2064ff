//! Fishing engine data structures.

use crate::math::Vec3;

/// The phase of the fishing interaction. Exactly one is active at a time.
///
/// The cycle is Idle → Charging → Casting → Waiting → Biting → Idle, with
/// early exits back to Idle on a failed reel. Reel-in resolves in the same
/// frame as the triggering press, so there is no separate reeling phase.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FishingState {
    /// Rod ready, no line out.
    Idle,
    /// Player is holding the action, building cast power.
    Charging,
    /// Bobber is in ballistic flight toward the water.
    Casting,
    /// Bobber is floating, waiting for the bite delay to run out.
    Waiting,
    /// A fish is on; the player has a short window to reel.
    Biting,
}

/// The floating marker at the end of the line.
///
/// Exists only while the state is Casting, Waiting, or Biting. Velocity is
/// meaningful only during flight.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Bobber {
    pub position: Vec3,
    pub velocity: Vec3,
    /// Visual highlight while a fish is on the line.
    pub biting: bool,
}

/// Camera pose sampled at cast time. The engine reads it only when the
/// line is released.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CastOrigin {
    pub position: Vec3,
    /// Unit-length aim direction.
    pub forward: Vec3,
}

/// A sellable fish species from the static catalog.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FishSpecies {
    pub name: &'static str,
    /// Sale price in dollars.
    pub price: u64,
    /// Display weight in kilograms.
    pub weight_kg: f64,
    /// Display color (RGB).
    pub color: (u8, u8, u8),
}

/// The species catalog, ordered from most to least common. Catch resolution
/// indexes into this by rank, so the order is load-bearing.
pub static SPECIES: [FishSpecies; 5] = [
    FishSpecies {
        name: "Sardine",
        price: 5,
        weight_kg: 0.1,
        color: (192, 192, 192),
    },
    FishSpecies {
        name: "Mackerel",
        price: 15,
        weight_kg: 0.5,
        color: (58, 124, 165),
    },
    FishSpecies {
        name: "Red Snapper",
        price: 50,
        weight_kg: 2.0,
        color: (217, 83, 79),
    },
    FishSpecies {
        name: "Tuna",
        price: 150,
        weight_kg: 10.0,
        color: (0, 0, 139),
    },
    FishSpecies {
        name: "Goldfish",
        price: 500,
        weight_kg: 0.2,
        color: (255, 215, 0),
    },
];

/// One fish pulled out of the water. Handed to the inventory on a successful
/// reel; the engine keeps no reference to it afterwards.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CaughtFish {
    pub species: FishSpecies,
}

/// Notifications the engine emits for the presentation layer.
#[derive(Debug, Clone, PartialEq)]
pub enum FishingEvent {
    /// Entered Charging; the power bar should appear.
    ChargingStarted,
    /// The line was released and the bobber is in flight.
    Cast,
    /// The bobber hit the water and settled.
    Splashdown,
    /// A fish struck. Shown persistently until the next notification.
    BiteCue,
    /// Successful reel-in.
    Caught(CaughtFish),
    /// Reeled while still waiting; the cast is wasted.
    TooEarly,
    /// The bite window lapsed with no reel.
    GotAway,
}

/// All mutable fishing state. Owned by the game loop and mutated only from
/// the per-frame update and the synchronous input handlers.
#[derive(Debug, Clone, PartialEq)]
pub struct FishingSession {
    pub state: FishingState,
    /// Cast power in [0, 100], accumulated while Charging.
    pub charge: f64,
    /// Present only while the state is Casting, Waiting, or Biting.
    pub bobber: Option<Bobber>,
    /// Seconds until a waiting bobber attracts a bite.
    pub bite_timer: f64,
    /// Seconds left to react once biting.
    pub bite_window: f64,
    /// Accumulated simulation time, drives the cosmetic float/jitter
    /// animation so the engine never reads a wall clock.
    pub sim_time: f64,
}

impl FishingSession {
    pub fn new() -> Self {
        Self {
            state: FishingState::Idle,
            charge: 0.0,
            bobber: None,
            bite_timer: 0.0,
            bite_window: 0.0,
            sim_time: 0.0,
        }
    }

    /// Returns to Idle, destroying the bobber. Charge is left as-is; it is
    /// reset on the next Charging entry before anything reads it.
    pub fn reset(&mut self) {
        self.state = FishingState::Idle;
        self.bobber = None;
    }
}

impl Default for FishingSession {
    fn default() -> Self {
        Self::new()
    }
}
