//! The fishing interaction engine.
//!
//! A cast→wait→bite→reel state machine driven by per-frame time deltas and
//! discrete press/release input events, plus the bobber's projectile physics
//! and the catch-outcome probability model.

pub mod generation;
pub mod logic;
pub mod physics;
pub mod types;

pub use types::{
    Bobber, CastOrigin, CaughtFish, FishSpecies, FishingEvent, FishingSession, FishingState,
};
