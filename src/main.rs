mod constants;
mod fishing;
mod game_state;
mod input;
mod math;
mod player;
mod ui;

use constants::FRAME_INTERVAL_MS;
use crossterm::event::{
    self, Event, KeyboardEnhancementFlags, PopKeyboardEnhancementFlags,
    PushKeyboardEnhancementFlags,
};
use crossterm::terminal::{
    disable_raw_mode, enable_raw_mode, supports_keyboard_enhancement, EnterAlternateScreen,
    LeaveAlternateScreen,
};
use crossterm::ExecutableCommand;
use game_state::GameState;
use input::{handle_key, tick_cast_hold, CastHold, InputResult, Overlay};
use ratatui::{backend::CrosstermBackend, Terminal};
use std::io;
use std::time::{Duration, Instant};

fn main() -> io::Result<()> {
    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    stdout.execute(EnterAlternateScreen)?;

    // Real key-release events where the terminal supports them; elsewhere
    // the input layer synthesizes releases from the repeat stream.
    let release_reporting = supports_keyboard_enhancement().unwrap_or(false);
    if release_reporting {
        stdout.execute(PushKeyboardEnhancementFlags(
            KeyboardEnhancementFlags::REPORT_EVENT_TYPES,
        ))?;
    }

    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let mut state = GameState::new();
    let mut overlay = Overlay::None;
    let mut cast_hold: Option<CastHold> = None;
    let mut last_frame = Instant::now();

    // Main loop
    loop {
        terminal.draw(|frame| ui::draw_ui(frame, &state, overlay))?;

        // Poll for input; the timeout sets the frame cadence.
        if event::poll(Duration::from_millis(FRAME_INTERVAL_MS))? {
            if let Event::Key(key_event) = event::read()? {
                let mut rng = rand::thread_rng();
                let result = handle_key(
                    key_event,
                    &mut state,
                    &mut overlay,
                    &mut cast_hold,
                    &mut rng,
                );
                if result == InputResult::Quit {
                    break;
                }
            }
        }

        let dt = last_frame.elapsed().as_secs_f64();
        last_frame = Instant::now();

        let mut rng = rand::thread_rng();
        let events = fishing::logic::update(&mut state.session, dt, &mut rng);
        state.apply_fishing_events(events);

        if !release_reporting {
            tick_cast_hold(&mut state, &mut cast_hold, dt);
        }

        state.tick(dt);
    }

    // Cleanup terminal
    if release_reporting {
        terminal.backend_mut().execute(PopKeyboardEnhancementFlags)?;
    }
    disable_raw_mode()?;
    terminal.backend_mut().execute(LeaveAlternateScreen)?;

    println!("Goodbye!");

    Ok(())
}
