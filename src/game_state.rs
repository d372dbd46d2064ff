//! Session state: the player, the fishing session, and the inventory/money
//! held for the lifetime of the run. Nothing here persists to disk.

use crate::constants::{NOTIFICATION_LONG_SECS, NOTIFICATION_SECS};
use crate::fishing::{CaughtFish, FishingEvent, FishingSession};
use crate::player::Player;

/// A message shown to the player. `remaining: None` keeps it on screen until
/// the next notification replaces it (the bite cue works this way).
#[derive(Debug, Clone, PartialEq)]
pub struct Notification {
    pub text: String,
    pub remaining: Option<f64>,
}

impl Notification {
    pub fn transient(text: impl Into<String>, secs: f64) -> Self {
        Self {
            text: text.into(),
            remaining: Some(secs),
        }
    }

    pub fn persistent(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            remaining: None,
        }
    }

    /// Counts down. Returns false once the notification should disappear.
    pub fn tick(&mut self, dt: f64) -> bool {
        match self.remaining.as_mut() {
            Some(remaining) => {
                *remaining -= dt;
                *remaining > 0.0
            }
            None => true,
        }
    }
}

/// Everything the running game owns.
#[derive(Debug, Clone, PartialEq)]
pub struct GameState {
    pub player: Player,
    pub session: FishingSession,
    pub inventory: Vec<CaughtFish>,
    pub money: u64,
    pub notification: Option<Notification>,
    pub play_time: f64,
}

impl GameState {
    pub fn new() -> Self {
        Self {
            player: Player::new(),
            session: FishingSession::new(),
            inventory: Vec::new(),
            money: 0,
            notification: None,
            play_time: 0.0,
        }
    }

    pub fn notify(&mut self, text: impl Into<String>, secs: f64) {
        self.notification = Some(Notification::transient(text, secs));
    }

    pub fn notify_persistent(&mut self, text: impl Into<String>) {
        self.notification = Some(Notification::persistent(text));
    }

    /// Maps engine events to notifications and inventory changes.
    pub fn apply_fishing_events(&mut self, events: Vec<FishingEvent>) {
        for event in events {
            match event {
                FishingEvent::ChargingStarted => {
                    // The power bar renders directly off the session state.
                }
                FishingEvent::Cast => self.notify("Cast!", NOTIFICATION_SECS),
                FishingEvent::Splashdown => self.notify("Waiting...", NOTIFICATION_SECS),
                FishingEvent::BiteCue => self.notify_persistent("!!!"),
                FishingEvent::Caught(fish) => {
                    self.notify(
                        format!("Caught a {}!", fish.species.name),
                        NOTIFICATION_LONG_SECS,
                    );
                    self.inventory.push(fish);
                }
                FishingEvent::TooEarly => self.notify("Too early!", NOTIFICATION_SECS),
                FishingEvent::GotAway => self.notify("Got away...", NOTIFICATION_SECS),
            }
        }
    }

    /// Sells the whole inventory at catalog prices. Returns the total.
    pub fn sell_all(&mut self) -> u64 {
        let total: u64 = self.inventory.iter().map(|fish| fish.species.price).sum();
        self.money += total;
        self.inventory.clear();
        self.notify(format!("Sold all for ${}!", total), NOTIFICATION_LONG_SECS);
        total
    }

    /// Per-frame bookkeeping outside the fishing engine.
    pub fn tick(&mut self, dt: f64) {
        self.play_time += dt;
        if let Some(notification) = self.notification.as_mut() {
            if !notification.tick(dt) {
                self.notification = None;
            }
        }
    }
}

impl Default for GameState {
    fn default() -> Self {
        Self::new()
    }
}
