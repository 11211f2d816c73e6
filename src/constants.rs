//! Game-wide tunable constants.

/// Main loop tick interval in milliseconds (~30 FPS).
pub const TICK_INTERVAL_MS: u64 = 33;

/// Maximum number of entries kept in the message log.
pub const LOG_CAPACITY: usize = 50;

/// Degrees of reel-crank rotation applied per crank keypress.
pub const CRANK_DEGREES_PER_PRESS: f32 = 15.0;

/// Simulated backward pitch speed of a rod flick keypress (degrees/second).
/// Comfortably above the hook detection threshold.
pub const FLICK_PITCH_SPEED: f32 = 650.0;

/// Sale value of a landed fish, by difficulty (easy, medium, hard).
pub const FISH_VALUES: [u32; 3] = [10, 25, 60];
