//! Fishing fight: types, tuning, threshold rolls, the state machine, and
//! the collaborators that feed it (area, rod caster, reel crank).

#![allow(unused_imports)]

pub mod area;
pub mod generation;
pub mod logic;
pub mod reel;
pub mod rod;
pub mod tuning;
pub mod types;

pub use area::*;
pub use generation::*;
pub use logic::*;
pub use reel::*;
pub use rod::*;
pub use tuning::*;
pub use types::*;
