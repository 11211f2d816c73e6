//! The rod caster: owns the `can_start` gate and turns raw flick motion
//! into pull reports for the fight machine.
//!
//! A flick counts when the backward pitch speed crosses the hook threshold
//! while a pull fight is on, at most once per cooldown window.

use super::logic::FishFight;
use super::types::FishingPhase;
use crate::core::bait::EquippedBait;
use rand::Rng;

/// Degrees per second of backward pitch that count as a hook-setting flick.
pub const HOOK_PITCH_THRESHOLD: f32 = 500.0;

/// Seconds between two countable flicks.
pub const PULL_COOLDOWN_SECS: f32 = 1.0;

/// State of the rod and its cast.
#[derive(Debug)]
pub struct RodCaster {
    is_held: bool,
    /// True while the bait hangs at the rod tip, ready to cast.
    bait_at_rest: bool,
    /// True while the bait is out on the water.
    bait_cast: bool,
    backward_pitch_speed: f32,
    cooldown_remaining: f32,
    /// Set when the last update reported a pull, for feedback at the host.
    pulled_this_frame: bool,
}

impl Default for RodCaster {
    fn default() -> Self {
        RodCaster::new()
    }
}

impl RodCaster {
    pub fn new() -> Self {
        RodCaster {
            is_held: false,
            bait_at_rest: true,
            bait_cast: false,
            backward_pitch_speed: 0.0,
            cooldown_remaining: 0.0,
            pulled_this_frame: false,
        }
    }

    pub fn is_held(&self) -> bool {
        self.is_held
    }

    pub fn is_bait_cast(&self) -> bool {
        self.bait_cast
    }

    pub fn pulled_this_frame(&self) -> bool {
        self.pulled_this_frame
    }

    pub fn grab(&mut self) {
        self.is_held = true;
    }

    pub fn release(&mut self) {
        self.is_held = false;
    }

    /// Throws the bait out. Refused while the rod is down, the bait is
    /// already out, or a won fish still floats unclaimed.
    pub fn cast(&mut self, fight: &FishFight) -> bool {
        if !self.is_held || !self.bait_at_rest || fight.can_grab_fish() {
            return false;
        }
        self.bait_at_rest = false;
        self.bait_cast = true;
        true
    }

    /// The reel wound the bait all the way back to the rod tip.
    pub fn on_bait_recalled(&mut self) {
        self.bait_at_rest = true;
        self.bait_cast = false;
    }

    /// Raw backward pitch speed for this frame, in degrees per second.
    pub fn record_pitch(&mut self, degrees_per_sec: f32) {
        self.backward_pitch_speed = degrees_per_sec.max(0.0);
    }

    /// Per-frame update: refreshes the `can_start` gate and reports a pull
    /// when a flick lands during a pull fight.
    pub fn update(&mut self, dt: f32, fight: &mut FishFight, bait: &EquippedBait, rng: &mut impl Rng) {
        // The bait can only enter water while it is a free, cast-out body.
        fight.set_can_start(self.bait_cast);

        self.cooldown_remaining = (self.cooldown_remaining - dt).max(0.0);
        self.pulled_this_frame = false;

        if !self.is_held || fight.phase() != FishingPhase::Pulling {
            self.backward_pitch_speed = 0.0;
            return;
        }

        if self.cooldown_remaining <= 0.0 && self.backward_pitch_speed > HOOK_PITCH_THRESHOLD {
            fight.pull_success(bait, rng);
            self.pulled_this_frame = true;
            self.cooldown_remaining = PULL_COOLDOWN_SECS;
        }

        // Pitch is an instantaneous reading, consumed once.
        self.backward_pitch_speed = 0.0;
    }
}
