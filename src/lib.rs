//! Hookline - Terminal Fishing Minigame Library
//!
//! This module exposes the game logic for testing and external use.

// Allow dead code in library - some functions are only used by the binaries
#![allow(dead_code)]

pub mod constants;
pub mod core;
pub mod fishing;
pub mod simulator;
pub mod ui;

pub use crate::core::game_state::GameState;
