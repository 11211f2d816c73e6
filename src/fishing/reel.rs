//! The reel crank: converts crank rotation into reel force.
//!
//! While a reel fight is on, each crank turn feeds the fight machine and
//! the crank lets go of the handle the moment the machine says the
//! sub-phase is complete. Outside a fight, cranking just winds the bait
//! back toward the rod tip.

use super::logic::FishFight;
use super::types::{DialogueCheckpoint, FishingPhase};
use crate::core::bait::EquippedBait;
use crate::core::rods::RodStats;
use rand::Rng;

/// Reel force produced per degree of crank rotation.
pub const REEL_FORCE_MULTIPLIER: f32 = 0.02;

/// Largest crank rotation counted in one turn, in degrees.
pub const MAX_CRANK_ANGLE: f32 = 30.0;

/// Rotations below this are treated as hand jitter.
pub const MIN_CRANK_ANGLE: f32 = 0.1;

/// Shortest the line ever gets: the bait is back at the rod tip.
pub const LINE_LENGTH_MIN: f32 = 0.1;

/// Extra line a hooked fish drags out during a fight.
const FIGHT_LINE_BONUS: f32 = 8.0;

/// What one crank turn amounted to.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum CrankOutcome {
    /// Rotation was inside the dead zone.
    Idle,
    /// Line was wound in (or force spent against a pulling fish).
    Reeled { amount: f32 },
    /// The reel fight sub-phase completed: the crank let go of the handle.
    HandleReleased { amount: f32 },
    /// The bait reached the rod tip; the caster can re-arm.
    BaitRecalled,
}

/// Reel handle state plus the simulated line length.
#[derive(Debug)]
pub struct ReelCrank {
    line_length: f32,
}

impl Default for ReelCrank {
    fn default() -> Self {
        ReelCrank::new()
    }
}

impl ReelCrank {
    pub fn new() -> Self {
        ReelCrank {
            line_length: LINE_LENGTH_MIN,
        }
    }

    pub fn line_length(&self) -> f32 {
        self.line_length
    }

    /// A cast lets the whole line out.
    pub fn on_cast(&mut self, rod: &RodStats) {
        self.line_length = rod.max_line_length;
    }

    /// Applies one crank turn of `angle_delta` degrees.
    pub fn turn(
        &mut self,
        angle_delta: f32,
        rod: &RodStats,
        fight: &mut FishFight,
        bait: &EquippedBait,
        rng: &mut impl Rng,
    ) -> CrankOutcome {
        let angle = angle_delta.clamp(0.0, MAX_CRANK_ANGLE);
        if angle < MIN_CRANK_ANGLE {
            return CrankOutcome::Idle;
        }

        // A hooked fish resists: crank force is divided down during a fight.
        let fighting = matches!(
            fight.phase(),
            FishingPhase::Pulling | FishingPhase::Reeling
        );
        let divisor = if fighting {
            fight.tuning().reel_force_divisor
        } else {
            1.0
        };
        let amount = angle * REEL_FORCE_MULTIPLIER * rod.reel_speed / divisor;

        match fight.phase() {
            FishingPhase::Reeling => {
                if fight.reel_success(amount, bait, rng) {
                    CrankOutcome::HandleReleased { amount }
                } else {
                    self.line_length =
                        (self.line_length - amount).max(LINE_LENGTH_MIN);
                    CrankOutcome::Reeled { amount }
                }
            }
            FishingPhase::Pulling => {
                // The fish drags line out faster than the crank winds it in;
                // the turn is spent without shortening anything.
                self.line_length = rod.max_line_length + FIGHT_LINE_BONUS;
                CrankOutcome::Reeled { amount }
            }
            FishingPhase::NotStarted | FishingPhase::WaitingFish | FishingPhase::Win => {
                self.line_length = (self.line_length - amount).max(LINE_LENGTH_MIN);

                if self.line_length <= LINE_LENGTH_MIN * 1.1 {
                    self.line_length = LINE_LENGTH_MIN;
                    // Winding all the way in while waiting drags the bait out
                    // of the spot: the attempt is forfeited.
                    fight.exit_fishing_area();
                    fight.emit_dialogue(DialogueCheckpoint::AimBubble);
                    CrankOutcome::BaitRecalled
                } else {
                    CrankOutcome::Reeled { amount }
                }
            }
        }
    }
}
