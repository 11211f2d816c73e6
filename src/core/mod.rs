//! Surrounding game state: bait, rods, and the player's progress.

pub mod bait;
pub mod game_state;
pub mod rods;
