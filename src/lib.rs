//! Dockside - a first-person terminal fishing game.
//!
//! This module exposes the game logic for testing and external use.

// Allow dead code in library - some functions are only used by the binary
#![allow(dead_code)]

pub mod constants;
pub mod fishing;
pub mod game_state;
pub mod input;
pub mod math;
pub mod player;

// UI module is not exposed as it's tightly coupled to the terminal
mod ui;
