//! Keyboard handling for the game screen.
//!
//! Maps crossterm key events onto the fishing engine's press/release events,
//! the player's walk/look steps, and the inventory/shop overlays.
//!
//! Space is the primary action. On terminals that report key releases
//! (keyboard enhancement protocol) the release maps straight onto the
//! engine's release event. Everywhere else only presses and repeats arrive,
//! so while the session is Charging each Space repeat refreshes a hold
//! timer and the release is synthesized when the timer lapses.

use crate::constants::CAST_HOLD_WINDOW;
use crate::fishing::{logic, FishingState};
use crate::game_state::GameState;
use crossterm::event::{KeyCode, KeyEvent, KeyEventKind};
use rand::Rng;

/// Modal overlay over the first-person view. At most one is open at a time.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Overlay {
    None,
    Inventory,
    Shop,
}

/// Result of handling one key event.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputResult {
    Continue,
    Quit,
}

/// Countdown used to infer a Space release from the stream of repeats.
#[derive(Debug, Clone, Copy)]
pub struct CastHold {
    remaining: f64,
}

impl CastHold {
    pub fn new() -> Self {
        Self {
            remaining: CAST_HOLD_WINDOW,
        }
    }

    pub fn refresh(&mut self) {
        self.remaining = CAST_HOLD_WINDOW;
    }

    /// Counts down. Returns true once the hold has lapsed.
    pub fn tick(&mut self, dt: f64) -> bool {
        self.remaining -= dt;
        self.remaining <= 0.0
    }
}

/// Dispatches one key event.
pub fn handle_key(
    key: KeyEvent,
    state: &mut GameState,
    overlay: &mut Overlay,
    hold: &mut Option<CastHold>,
    rng: &mut impl Rng,
) -> InputResult {
    // A reported Space release is a real release event for the engine.
    if key.kind == KeyEventKind::Release {
        if key.code == KeyCode::Char(' ') {
            release_line(state, hold);
        }
        return InputResult::Continue;
    }

    // Overlays capture input while open.
    match *overlay {
        Overlay::Inventory => {
            if matches!(key.code, KeyCode::Esc | KeyCode::Char('i') | KeyCode::Char('I')) {
                *overlay = Overlay::None;
            }
            return InputResult::Continue;
        }
        Overlay::Shop => {
            match key.code {
                KeyCode::Esc | KeyCode::Char('b') | KeyCode::Char('B') => {
                    *overlay = Overlay::None;
                }
                KeyCode::Char('s') | KeyCode::Char('S') => {
                    state.sell_all();
                }
                _ => {}
            }
            return InputResult::Continue;
        }
        Overlay::None => {}
    }

    match key.code {
        KeyCode::Char(' ') => action_key(state, hold, rng),
        KeyCode::Char('i') | KeyCode::Char('I') => *overlay = Overlay::Inventory,
        KeyCode::Char('b') | KeyCode::Char('B') => *overlay = Overlay::Shop,
        KeyCode::Char('q') | KeyCode::Char('Q') => return InputResult::Quit,
        KeyCode::Char('w') | KeyCode::Char('W') => state.player.walk(1.0, 0.0),
        KeyCode::Char('s') | KeyCode::Char('S') => state.player.walk(-1.0, 0.0),
        KeyCode::Char('a') | KeyCode::Char('A') => state.player.walk(0.0, -1.0),
        KeyCode::Char('d') | KeyCode::Char('D') => state.player.walk(0.0, 1.0),
        KeyCode::Left => state.player.look(-1.0, 0.0),
        KeyCode::Right => state.player.look(1.0, 0.0),
        KeyCode::Up => state.player.look(0.0, 1.0),
        KeyCode::Down => state.player.look(0.0, -1.0),
        _ => {}
    }

    InputResult::Continue
}

/// Space press or repeat.
fn action_key(state: &mut GameState, hold: &mut Option<CastHold>, rng: &mut impl Rng) {
    if state.session.state == FishingState::Charging {
        // Still holding; keep the synthesized release at bay.
        match hold.as_mut() {
            Some(hold) => hold.refresh(),
            None => *hold = Some(CastHold::new()),
        }
        return;
    }

    let events = logic::press_action(&mut state.session, rng);
    if state.session.state == FishingState::Charging {
        *hold = Some(CastHold::new());
    }
    state.apply_fishing_events(events);
}

/// Per-frame upkeep: fires the synthesized release once Space repeats stop.
pub fn tick_cast_hold(state: &mut GameState, hold: &mut Option<CastHold>, dt: f64) {
    if state.session.state != FishingState::Charging {
        *hold = None;
        return;
    }

    if let Some(active) = hold.as_mut() {
        if active.tick(dt) {
            release_line(state, hold);
        }
    }
}

fn release_line(state: &mut GameState, hold: &mut Option<CastHold>) {
    *hold = None;
    let origin = state.player.cast_origin();
    let events = logic::release_action(&mut state.session, &origin);
    state.apply_fishing_events(events);
}
