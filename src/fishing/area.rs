//! Fishing areas: trigger volumes the bait can land in.
//!
//! An area carries a difficulty and forwards bait enter/exit to the fight
//! machine, but only while no fight is underway (a cast into a second area
//! mid-fight must not restart the attempt).

use super::logic::FishFight;
use super::types::{Difficulty, FishingPhase};
use crate::core::bait::EquippedBait;
use rand::Rng;

/// One fishable zone.
#[derive(Debug, Clone, Copy)]
pub struct FishingArea {
    pub difficulty: Difficulty,
}

impl FishingArea {
    pub fn new(difficulty: Difficulty) -> Self {
        FishingArea { difficulty }
    }

    /// The bait entered this area. Starts an attempt at this area's
    /// difficulty if the machine is idle or still waiting.
    pub fn on_bait_enter(&self, fight: &mut FishFight, bait: &EquippedBait, rng: &mut impl Rng) {
        if !matches!(
            fight.phase(),
            FishingPhase::NotStarted | FishingPhase::WaitingFish
        ) {
            return;
        }
        fight.start_game(self.difficulty, bait, rng);
    }

    /// The bait left this area. Returns false when the exit is ignored
    /// because a fight is underway (the bait is pinned to the fish until the
    /// attempt resolves, so the host must keep the bait registered here).
    pub fn on_bait_exit(&self, fight: &mut FishFight) -> bool {
        if !matches!(
            fight.phase(),
            FishingPhase::NotStarted | FishingPhase::WaitingFish
        ) {
            return false;
        }
        fight.exit_fishing_area();
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::fishing::tuning::FishingTuning;
    use rand::SeedableRng;
    use rand_chacha::ChaCha8Rng;

    #[test]
    fn test_area_sets_difficulty_on_enter() {
        let mut rng = ChaCha8Rng::seed_from_u64(7);
        let bait = EquippedBait::default_bait();
        let mut fight = FishFight::new(FishingTuning::default());
        fight.set_can_start(true);

        let area = FishingArea::new(Difficulty::Hard);
        area.on_bait_enter(&mut fight, &bait, &mut rng);

        assert_eq!(fight.phase(), FishingPhase::WaitingFish);
        assert_eq!(fight.difficulty(), Difficulty::Hard);
    }

    #[test]
    fn test_area_enter_ignored_mid_fight() {
        let mut rng = ChaCha8Rng::seed_from_u64(7);
        let bait = EquippedBait::default_bait();
        let mut fight = FishFight::new(FishingTuning::default());
        fight.set_can_start(true);

        FishingArea::new(Difficulty::Easy).on_bait_enter(&mut fight, &bait, &mut rng);
        while fight.phase() == FishingPhase::WaitingFish {
            fight.update(0.1, &bait, &mut rng);
        }
        assert_eq!(fight.phase(), FishingPhase::Pulling);

        // Drifting into another area must not restart the fight.
        FishingArea::new(Difficulty::Medium).on_bait_enter(&mut fight, &bait, &mut rng);
        assert_eq!(fight.phase(), FishingPhase::Pulling);
        assert_eq!(fight.difficulty(), Difficulty::Easy);
    }

    #[test]
    fn test_exit_honored_only_outside_a_fight() {
        let mut rng = ChaCha8Rng::seed_from_u64(7);
        let bait = EquippedBait::default_bait();
        let mut fight = FishFight::new(FishingTuning::default());
        fight.set_can_start(true);

        let area = FishingArea::new(Difficulty::Easy);
        area.on_bait_enter(&mut fight, &bait, &mut rng);
        while fight.phase() == FishingPhase::WaitingFish {
            fight.update(0.1, &bait, &mut rng);
        }
        assert_eq!(fight.phase(), FishingPhase::Pulling);

        // Mid-fight the exit is refused: the bait stays registered here.
        assert!(!area.on_bait_exit(&mut fight));
        assert_eq!(fight.phase(), FishingPhase::Pulling);

        fight.lose_game();
        assert!(area.on_bait_exit(&mut fight));
    }
}
