//! End-to-end tests for the fishing engine: full cast cycles through the
//! state machine, physics, and catch resolution, driven frame by frame with
//! seeded RNGs.

use dockside::fishing::{logic, types::SPECIES, CastOrigin, FishingEvent, FishingSession, FishingState};
use dockside::game_state::GameState;
use dockside::math::Vec3;
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

const DT: f64 = 1.0 / 60.0;

fn origin() -> CastOrigin {
    CastOrigin {
        position: Vec3::new(0.0, 2.5, 5.0),
        forward: Vec3::new(0.0, 0.0, -1.0),
    }
}

/// Steps the engine until it leaves `state`, returning the transition events.
fn step_until_leaves(
    session: &mut FishingSession,
    state: FishingState,
    rng: &mut ChaCha8Rng,
) -> Vec<FishingEvent> {
    for _ in 0..10_000 {
        let events = logic::update(session, DT, rng);
        if session.state != state {
            return events;
        }
    }
    panic!("engine never left {:?}", state);
}

#[test]
fn test_full_successful_cast_cycle() {
    let mut rng = ChaCha8Rng::seed_from_u64(99);
    let mut session = FishingSession::new();

    // Idle → Charging, charge reset.
    let events = logic::press_action(&mut session, &mut rng);
    assert_eq!(events, vec![FishingEvent::ChargingStarted]);
    assert_eq!(session.state, FishingState::Charging);
    assert_eq!(session.charge, 0.0);

    // One full second of holding reaches exactly full power.
    for _ in 0..4 {
        logic::update(&mut session, 0.25, &mut rng);
    }
    assert_eq!(session.charge, 100.0);

    // Release: bobber launches at full speed (30 units/s).
    let events = logic::release_action(&mut session, &origin());
    assert_eq!(events, vec![FishingEvent::Cast]);
    assert_eq!(session.state, FishingState::Casting);
    let launch_speed = session.bobber.unwrap().velocity.length();
    assert!((launch_speed - 30.0).abs() < 1e-9);

    // Flight settles on the water plane.
    let events = step_until_leaves(&mut session, FishingState::Casting, &mut rng);
    assert_eq!(events, vec![FishingEvent::Splashdown]);
    assert_eq!(session.state, FishingState::Waiting);
    let settled = session.bobber.unwrap();
    assert_eq!(settled.position.y, 0.0);
    assert_eq!(settled.velocity, Vec3::ZERO);
    assert!((2.0..7.0).contains(&session.bite_timer));

    // Bite delay runs out.
    let events = step_until_leaves(&mut session, FishingState::Waiting, &mut rng);
    assert_eq!(events, vec![FishingEvent::BiteCue]);
    assert_eq!(session.state, FishingState::Biting);
    assert!((0.5..1.0).contains(&session.bite_window));
    assert!(session.bobber.unwrap().biting);

    // Reel inside the window: exactly one fish from the catalog.
    let events = logic::press_action(&mut session, &mut rng);
    assert_eq!(events.len(), 1);
    match &events[0] {
        FishingEvent::Caught(fish) => assert!(SPECIES.contains(&fish.species)),
        other => panic!("expected Caught, got {:?}", other),
    }
    assert_eq!(session.state, FishingState::Idle);
    assert!(session.bobber.is_none());
}

#[test]
fn test_reeling_too_early_wastes_the_cast() {
    let mut rng = ChaCha8Rng::seed_from_u64(5);
    let mut session = FishingSession::new();

    logic::press_action(&mut session, &mut rng);
    logic::update(&mut session, 0.5, &mut rng);
    logic::release_action(&mut session, &origin());
    step_until_leaves(&mut session, FishingState::Casting, &mut rng);

    // Press immediately, long before the bite timer can expire.
    let events = logic::press_action(&mut session, &mut rng);
    assert_eq!(events, vec![FishingEvent::TooEarly]);
    assert_eq!(session.state, FishingState::Idle);
    assert!(session.bobber.is_none());
}

#[test]
fn test_missed_window_lets_the_fish_escape() {
    let mut rng = ChaCha8Rng::seed_from_u64(6);
    let mut session = FishingSession::new();

    logic::press_action(&mut session, &mut rng);
    logic::update(&mut session, 1.0, &mut rng);
    logic::release_action(&mut session, &origin());
    step_until_leaves(&mut session, FishingState::Casting, &mut rng);
    step_until_leaves(&mut session, FishingState::Waiting, &mut rng);

    let events = step_until_leaves(&mut session, FishingState::Biting, &mut rng);
    assert_eq!(events, vec![FishingEvent::GotAway]);
    assert_eq!(session.state, FishingState::Idle);
    assert!(session.bobber.is_none());
}

#[test]
fn test_machine_cycles_repeatedly() {
    let mut rng = ChaCha8Rng::seed_from_u64(11);
    let mut session = FishingSession::new();

    for _ in 0..5 {
        logic::press_action(&mut session, &mut rng);
        logic::update(&mut session, 0.7, &mut rng);
        logic::release_action(&mut session, &origin());
        step_until_leaves(&mut session, FishingState::Casting, &mut rng);
        step_until_leaves(&mut session, FishingState::Waiting, &mut rng);
        let events = logic::press_action(&mut session, &mut rng);
        assert!(matches!(events[0], FishingEvent::Caught(_)));
        assert_eq!(session.state, FishingState::Idle);
    }
}

#[test]
fn test_bobber_never_sinks_during_flight() {
    let mut rng = ChaCha8Rng::seed_from_u64(13);
    let mut session = FishingSession::new();

    logic::press_action(&mut session, &mut rng);
    logic::update(&mut session, 1.0, &mut rng);
    // Aim steeply down to force a fast water hit.
    let steep = CastOrigin {
        position: Vec3::new(0.0, 2.5, 5.0),
        forward: Vec3::new(0.0, -0.9, -0.3).normalized(),
    };
    logic::release_action(&mut session, &steep);

    let mut splashes = 0;
    for _ in 0..10_000 {
        let events = logic::update(&mut session, DT, &mut rng);
        if events.contains(&FishingEvent::Splashdown) {
            splashes += 1;
        }
        if session.state != FishingState::Casting {
            break;
        }
        assert!(session.bobber.unwrap().position.y >= 0.0);
    }
    assert_eq!(splashes, 1);
}

#[test]
fn test_catches_accumulate_in_game_inventory_and_sell() {
    let mut rng = ChaCha8Rng::seed_from_u64(21);
    let mut state = GameState::new();

    for _ in 0..3 {
        let events = logic::press_action(&mut state.session, &mut rng);
        state.apply_fishing_events(events);
        let events = logic::update(&mut state.session, 1.0, &mut rng);
        state.apply_fishing_events(events);
        let origin = state.player.cast_origin();
        let events = logic::release_action(&mut state.session, &origin);
        state.apply_fishing_events(events);

        for _ in 0..10_000 {
            let events = logic::update(&mut state.session, DT, &mut rng);
            let biting = matches!(state.session.state, FishingState::Biting);
            state.apply_fishing_events(events);
            if biting {
                break;
            }
        }
        assert_eq!(state.session.state, FishingState::Biting);
        let events = logic::press_action(&mut state.session, &mut rng);
        state.apply_fishing_events(events);
    }

    assert_eq!(state.inventory.len(), 3);
    let expected: u64 = state.inventory.iter().map(|f| f.species.price).sum();
    let total = state.sell_all();
    assert_eq!(total, expected);
    assert_eq!(state.money, expected);
    assert!(state.inventory.is_empty());
}

#[test]
fn test_bite_cue_notification_is_persistent() {
    let mut rng = ChaCha8Rng::seed_from_u64(31);
    let mut state = GameState::new();

    let events = logic::press_action(&mut state.session, &mut rng);
    state.apply_fishing_events(events);
    let events = logic::update(&mut state.session, 1.0, &mut rng);
    state.apply_fishing_events(events);
    let origin = state.player.cast_origin();
    let events = logic::release_action(&mut state.session, &origin);
    state.apply_fishing_events(events);

    // Run until the bite cue fires.
    for _ in 0..10_000 {
        let events = logic::update(&mut state.session, DT, &mut rng);
        state.apply_fishing_events(events.clone());
        state.tick(DT);
        if events.contains(&FishingEvent::BiteCue) {
            break;
        }
    }
    let cue = state.notification.clone().expect("bite cue shown");
    assert_eq!(cue.text, "!!!");
    assert_eq!(cue.remaining, None);

    // It outlives any transient duration, then the outcome replaces it.
    state.tick(30.0);
    assert!(state.notification.is_some());
    for _ in 0..10_000 {
        let events = logic::update(&mut state.session, DT, &mut rng);
        let done = !events.is_empty();
        state.apply_fishing_events(events);
        if done {
            break;
        }
    }
    assert_eq!(state.notification.unwrap().text, "Got away...");
}
