//! Threshold rolls for the fishing fight.
//!
//! Every "needed" value the state machine compares against is rolled here,
//! from the band of the active difficulty, through an injected RNG so tests
//! can pin the draws with a seeded generator.
//!
//! Range convention: integer bands are uniform inclusive-inclusive draws,
//! float bands uniform inclusive-exclusive draws.

use super::tuning::DifficultyParams;
use rand::Rng;

/// Minimum effective value for any rolled counter target. Bait bonuses can
/// never push a threshold below this.
pub const MIN_TARGET: u32 = 1;

/// How many sub-phases a bait strength shaves off the win requirement
/// (and flicks off the pull requirement).
pub fn bait_phase_reduction(strength: u8) -> u32 {
    match strength {
        0 | 1 => 0,
        2 => 1,
        _ => 2,
    }
}

/// Multiplier a bait strength applies to the rolled reel length.
/// Stronger bait means less line to crank in.
pub fn bait_reel_multiplier(strength: u8) -> f32 {
    match strength {
        0 => 1.0,
        1 => 0.85,
        2 => 0.7,
        _ => 0.4,
    }
}

/// Seconds until a fish bites, in `[wait_min, wait_max)`.
pub fn roll_wait_time(params: &DifficultyParams, rng: &mut impl Rng) -> f32 {
    roll_float(params.wait_min_secs, params.wait_max_secs, rng)
}

/// Rod flicks needed for one pulling sub-phase, in `[pull_min, pull_max]`
/// minus the bait reduction, floored at [`MIN_TARGET`].
pub fn roll_pull_target(params: &DifficultyParams, bait_strength: u8, rng: &mut impl Rng) -> u32 {
    let rolled = roll_int(params.pull_min, params.pull_max, rng);
    rolled
        .saturating_sub(bait_phase_reduction(bait_strength))
        .max(MIN_TARGET)
}

/// Reel force needed for one reeling sub-phase, in `[reel_min, reel_max)`
/// scaled by the bait multiplier.
pub fn roll_reel_target(params: &DifficultyParams, bait_strength: u8, rng: &mut impl Rng) -> f32 {
    roll_float(params.reel_min, params.reel_max, rng) * bait_reel_multiplier(bait_strength)
}

/// Completed sub-phases needed to win, in `[phases_min, phases_max]` minus
/// the bait reduction, floored at [`MIN_TARGET`].
pub fn roll_phase_target(params: &DifficultyParams, bait_strength: u8, rng: &mut impl Rng) -> u32 {
    let rolled = roll_int(params.phases_min, params.phases_max, rng);
    rolled
        .saturating_sub(bait_phase_reduction(bait_strength))
        .max(MIN_TARGET)
}

fn roll_int(min: u32, max: u32, rng: &mut impl Rng) -> u32 {
    if min >= max {
        return min;
    }
    rng.gen_range(min..=max)
}

fn roll_float(min: f32, max: f32, rng: &mut impl Rng) -> f32 {
    if min >= max {
        return min;
    }
    rng.gen_range(min..max)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::fishing::tuning::FishingTuning;
    use crate::fishing::types::Difficulty;
    use rand::SeedableRng;
    use rand_chacha::ChaCha8Rng;

    fn create_test_rng() -> ChaCha8Rng {
        ChaCha8Rng::seed_from_u64(12345)
    }

    #[test]
    fn test_rolls_stay_inside_their_bands() {
        let tuning = FishingTuning::default();
        let mut rng = create_test_rng();

        for difficulty in Difficulty::ALL {
            let p = tuning.params(difficulty);
            for _ in 0..500 {
                let wait = roll_wait_time(p, &mut rng);
                assert!(
                    wait >= p.wait_min_secs && wait < p.wait_max_secs,
                    "wait {wait} outside [{}, {}) for {difficulty}",
                    p.wait_min_secs,
                    p.wait_max_secs
                );

                let pulls = roll_pull_target(p, 0, &mut rng);
                assert!(pulls >= p.pull_min && pulls <= p.pull_max);

                let reel = roll_reel_target(p, 0, &mut rng);
                assert!(reel >= p.reel_min && reel < p.reel_max);

                let phases = roll_phase_target(p, 0, &mut rng);
                assert!(phases >= p.phases_min && phases <= p.phases_max);
            }
        }
    }

    #[test]
    fn test_targets_never_drop_below_minimum_at_max_bait_strength() {
        let tuning = FishingTuning::default();
        let mut rng = create_test_rng();

        for difficulty in Difficulty::ALL {
            let p = tuning.params(difficulty);
            for strength in 0..=3u8 {
                for _ in 0..500 {
                    assert!(roll_pull_target(p, strength, &mut rng) >= MIN_TARGET);
                    assert!(roll_phase_target(p, strength, &mut rng) >= MIN_TARGET);
                    assert!(roll_reel_target(p, strength, &mut rng) > 0.0);
                }
            }
        }
    }

    #[test]
    fn test_bait_reductions_match_table() {
        assert_eq!(bait_phase_reduction(0), 0);
        assert_eq!(bait_phase_reduction(1), 0);
        assert_eq!(bait_phase_reduction(2), 1);
        assert_eq!(bait_phase_reduction(3), 2);

        assert_eq!(bait_reel_multiplier(0), 1.0);
        assert_eq!(bait_reel_multiplier(1), 0.85);
        assert_eq!(bait_reel_multiplier(2), 0.7);
        assert_eq!(bait_reel_multiplier(3), 0.4);
    }

    #[test]
    fn test_collapsed_band_returns_min() {
        let mut rng = create_test_rng();
        assert_eq!(roll_int(4, 4, &mut rng), 4);
        assert_eq!(roll_float(2.5, 2.5, &mut rng), 2.5);
    }
}
