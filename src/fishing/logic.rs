//! The fishing fight state machine.
//!
//! A single attempt moves through WaitingFish → Pulling ⇄ Reeling → Win, or
//! drops back to NotStarted on a timeout or an area exit. Collaborators (the
//! fishing area, the rod caster, the reel crank) report discrete events; the
//! machine decides every transition and buffers its side effects as
//! [`FishingEvent`]s for the host to drain each frame.
//!
//! All "error" conditions are precondition no-ops: reporting a pull outside
//! the Pulling phase is silently ignored, and both loss paths (sub-phase
//! timeout, area exit while waiting) funnel through [`FishFight::lose_game`].

use super::generation;
use super::tuning::FishingTuning;
use super::types::{AudioCue, DialogueCheckpoint, Difficulty, FishingEvent, FishingPhase, Hand};
use crate::core::bait::EquippedBait;
use rand::Rng;

/// One fishing attempt. At most one is active at a time; the app's
/// composition root owns the instance and hands it to collaborators by
/// mutable reference.
#[derive(Debug)]
pub struct FishFight {
    tuning: FishingTuning,
    phase: FishingPhase,
    difficulty: Difficulty,

    /// Gate owned by the rod caster: true only while the bait is a free
    /// body eligible to enter water.
    can_start: bool,

    current_wait: f32,
    needed_wait: f32,

    current_pull: u32,
    needed_pull: u32,

    current_reel: f32,
    needed_reel: f32,

    current_phase_time: f32,
    needed_phase_time: f32,

    current_phases: u32,
    needed_phases: u32,

    bait_splashed: bool,
    fish_hooked: bool,

    events: Vec<FishingEvent>,
}

impl FishFight {
    pub fn new(tuning: FishingTuning) -> Self {
        FishFight {
            tuning,
            phase: FishingPhase::NotStarted,
            difficulty: Difficulty::Easy,
            can_start: false,
            current_wait: 0.0,
            needed_wait: 0.0,
            current_pull: 0,
            needed_pull: 0,
            current_reel: 0.0,
            needed_reel: 0.0,
            current_phase_time: 0.0,
            needed_phase_time: 0.0,
            current_phases: 0,
            needed_phases: 0,
            bait_splashed: false,
            fish_hooked: false,
            events: Vec::new(),
        }
    }

    pub fn phase(&self) -> FishingPhase {
        self.phase
    }

    pub fn difficulty(&self) -> Difficulty {
        self.difficulty
    }

    pub fn tuning(&self) -> &FishingTuning {
        &self.tuning
    }

    pub fn can_start(&self) -> bool {
        self.can_start
    }

    /// Updated every frame by the rod caster.
    pub fn set_can_start(&mut self, can_start: bool) {
        self.can_start = can_start;
    }

    /// True once the bait has settled into the water this attempt.
    pub fn is_bait_in_water(&self) -> bool {
        self.phase == FishingPhase::WaitingFish && self.bait_splashed
    }

    /// True while a won fish floats free, waiting to be grabbed.
    pub fn can_grab_fish(&self) -> bool {
        self.phase == FishingPhase::Win && self.fish_hooked
    }

    pub fn wait_progress(&self) -> (f32, f32) {
        (self.current_wait, self.needed_wait)
    }

    pub fn pull_progress(&self) -> (u32, u32) {
        (self.current_pull, self.needed_pull)
    }

    pub fn reel_progress(&self) -> (f32, f32) {
        (self.current_reel, self.needed_reel)
    }

    pub fn phase_time(&self) -> (f32, f32) {
        (self.current_phase_time, self.needed_phase_time)
    }

    pub fn win_phases(&self) -> (u32, u32) {
        (self.current_phases, self.needed_phases)
    }

    /// Takes the buffered side effects. The host applies them each frame.
    pub fn drain_events(&mut self) -> Vec<FishingEvent> {
        std::mem::take(&mut self.events)
    }

    /// Lets collaborators route their tutorial checkpoints through the same
    /// event buffer the machine uses.
    pub fn emit_dialogue(&mut self, checkpoint: DialogueCheckpoint) {
        self.events.push(FishingEvent::Dialogue(checkpoint));
    }

    /// The bait entered a fishing area: begin waiting for a bite.
    ///
    /// No-op while the `can_start` gate is down. Rolls the wait time from
    /// the difficulty's band and the win requirement from its band minus the
    /// bait bonus.
    pub fn start_game(
        &mut self,
        difficulty: Difficulty,
        bait: &EquippedBait,
        rng: &mut impl Rng,
    ) {
        if !self.can_start {
            return;
        }

        self.difficulty = difficulty;
        self.phase = FishingPhase::WaitingFish;
        self.bait_splashed = false;

        self.events.push(FishingEvent::Haptic {
            hand: Hand::Right,
            amplitude: 0.8,
            duration_secs: 1.6,
        });

        let params = *self.tuning.params(difficulty);
        self.current_wait = 0.0;
        self.needed_wait = generation::roll_wait_time(&params, rng);

        self.current_phases = 0;
        self.needed_phases = generation::roll_phase_target(&params, bait.strength, rng);
    }

    /// The bait drifted out of the fishing area.
    ///
    /// Only aborts an attempt that is still waiting for a bite; leaving the
    /// area mid-fight has no effect (the area only spans the waiting
    /// radius, but the contract tolerates exit calls in any phase).
    pub fn exit_fishing_area(&mut self) {
        if self.phase == FishingPhase::WaitingFish {
            self.lose_game();
        }
    }

    /// Advances the time-driven counters. Called once per frame.
    pub fn update(&mut self, dt: f32, bait: &EquippedBait, rng: &mut impl Rng) {
        match self.phase {
            FishingPhase::WaitingFish => {
                self.current_wait += dt;

                if !self.bait_splashed && self.current_wait >= self.tuning.bait_splash_delay_secs {
                    self.bait_splashed = true;
                    self.events
                        .push(FishingEvent::Dialogue(DialogueCheckpoint::WaitingFish));
                    self.events.push(FishingEvent::Audio(AudioCue::BaitSplash));
                }

                if self.current_wait >= self.needed_wait {
                    self.events.push(FishingEvent::Haptic {
                        hand: Hand::Right,
                        amplitude: 0.8,
                        duration_secs: 2.0,
                    });
                    self.events.push(FishingEvent::SpawnFish {
                        difficulty: self.difficulty,
                    });
                    self.fish_hooked = true;
                    self.start_pulling(bait, rng);
                }
            }
            FishingPhase::Pulling | FishingPhase::Reeling => {
                self.current_phase_time += dt;
                if self.current_phase_time >= self.needed_phase_time {
                    self.lose_game();
                }
            }
            FishingPhase::NotStarted | FishingPhase::Win => {}
        }
    }

    /// The rod caster detected one successful flick.
    pub fn pull_success(&mut self, bait: &EquippedBait, rng: &mut impl Rng) {
        if self.phase != FishingPhase::Pulling {
            return;
        }

        self.current_pull += 1;
        if self.current_pull < self.needed_pull {
            return;
        }

        self.next_game_phase(bait, rng);
    }

    /// The reel crank made incremental progress. Returns true exactly when
    /// the reel threshold is crossed, signalling the crank to let go of the
    /// handle.
    pub fn reel_success(&mut self, amount: f32, bait: &EquippedBait, rng: &mut impl Rng) -> bool {
        if self.phase != FishingPhase::Reeling {
            return false;
        }

        self.current_reel += amount;
        if self.current_reel < self.needed_reel {
            return false;
        }

        self.next_game_phase(bait, rng);
        true
    }

    /// The fish got away. A win is never retroactively lost, and repeating
    /// the call from NotStarted produces no further side effects.
    pub fn lose_game(&mut self) {
        if self.phase == FishingPhase::Win {
            return;
        }

        let was_active = self.phase != FishingPhase::NotStarted;
        let was_hooked =
            matches!(self.phase, FishingPhase::Pulling | FishingPhase::Reeling);

        self.phase = FishingPhase::NotStarted;

        if self.fish_hooked {
            self.fish_hooked = false;
            self.events.push(FishingEvent::DespawnFish);
        }

        if was_active {
            self.events.push(FishingEvent::Audio(AudioCue::Lose));
            self.events
                .push(FishingEvent::Dialogue(DialogueCheckpoint::LossRewind));
        }

        // Durability is only spent once a fish was actually hooked.
        if was_hooked {
            self.events.push(FishingEvent::ConsumeBaitDurability);
        }
    }

    /// The player physically grabbed the won fish: the attempt is over.
    pub fn reset_after_fish_grabbed(&mut self) {
        self.phase = FishingPhase::NotStarted;
        self.fish_hooked = false;
    }

    /// One pull or reel sub-phase completed. Either the fight is won, or the
    /// sub-phases alternate.
    fn next_game_phase(&mut self, bait: &EquippedBait, rng: &mut impl Rng) {
        self.current_phases += 1;

        if self.current_phases >= self.needed_phases {
            self.events
                .push(FishingEvent::Dialogue(DialogueCheckpoint::GrabFish));
            self.phase = FishingPhase::Win;
            self.events.push(FishingEvent::ReleaseFishPhysics);
            self.events.push(FishingEvent::Audio(AudioCue::Victory));
            self.events.push(FishingEvent::ConsumeBaitDurability);
            return;
        }

        self.events.push(FishingEvent::Audio(AudioCue::PhaseSuccess));

        match self.phase {
            FishingPhase::Pulling => self.start_reeling(bait, rng),
            FishingPhase::Reeling => {
                // Only on the way back from reeling, never on the very
                // first pulling entry.
                self.events
                    .push(FishingEvent::Dialogue(DialogueCheckpoint::AlternatePullReel));
                self.start_pulling(bait, rng);
            }
            FishingPhase::NotStarted | FishingPhase::WaitingFish | FishingPhase::Win => {
                unreachable!("sub-phase advance outside an active fight");
            }
        }
    }

    fn start_pulling(&mut self, bait: &EquippedBait, rng: &mut impl Rng) {
        self.events
            .push(FishingEvent::Dialogue(DialogueCheckpoint::PullFight));
        self.phase = FishingPhase::Pulling;
        self.events.push(FishingEvent::Haptic {
            hand: Hand::Right,
            amplitude: 0.8,
            duration_secs: 0.8,
        });

        let params = *self.tuning.params(self.difficulty);
        self.current_pull = 0;
        self.needed_pull = generation::roll_pull_target(&params, bait.strength, rng);

        self.current_phase_time = 0.0;
        self.needed_phase_time = self.tuning.max_pulling_time_before_lose;
    }

    fn start_reeling(&mut self, bait: &EquippedBait, rng: &mut impl Rng) {
        self.events
            .push(FishingEvent::Dialogue(DialogueCheckpoint::ReelFight));
        self.phase = FishingPhase::Reeling;
        self.events.push(FishingEvent::Haptic {
            hand: Hand::Left,
            amplitude: 0.8,
            duration_secs: 0.8,
        });

        let params = *self.tuning.params(self.difficulty);
        self.current_reel = 0.0;
        self.needed_reel = generation::roll_reel_target(&params, bait.strength, rng);

        self.current_phase_time = 0.0;
        self.needed_phase_time = self.tuning.max_reeling_time_before_lose;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand_chacha::ChaCha8Rng;

    fn create_test_rng() -> ChaCha8Rng {
        ChaCha8Rng::seed_from_u64(12345)
    }

    fn started_fight(
        difficulty: Difficulty,
        bait: &EquippedBait,
        rng: &mut ChaCha8Rng,
    ) -> FishFight {
        let mut fight = FishFight::new(FishingTuning::default());
        fight.set_can_start(true);
        fight.start_game(difficulty, bait, rng);
        fight
    }

    /// Advances the fight until the waiting phase resolves into Pulling.
    fn wait_out_the_bite(fight: &mut FishFight, bait: &EquippedBait, rng: &mut ChaCha8Rng) {
        let mut elapsed = 0.0;
        while fight.phase() == FishingPhase::WaitingFish {
            fight.update(0.1, bait, rng);
            elapsed += 0.1;
            assert!(elapsed < 20.0, "fish never bit");
        }
    }

    #[test]
    fn test_start_game_gated_on_can_start() {
        let mut rng = create_test_rng();
        let bait = EquippedBait::default_bait();

        let mut fight = FishFight::new(FishingTuning::default());
        fight.start_game(Difficulty::Easy, &bait, &mut rng);

        assert_eq!(fight.phase(), FishingPhase::NotStarted);
        assert!(fight.drain_events().is_empty(), "gated start must be silent");
    }

    #[test]
    fn test_start_game_rolls_wait_time_inside_band() {
        let bait = EquippedBait::default_bait();

        for difficulty in Difficulty::ALL {
            for seed in 0..50 {
                let mut rng = ChaCha8Rng::seed_from_u64(seed);
                let fight = started_fight(difficulty, &bait, &mut rng);
                let params = *FishingTuning::default().params(difficulty);

                let (current, needed) = fight.wait_progress();
                assert_eq!(current, 0.0);
                assert!(
                    needed >= params.wait_min_secs && needed < params.wait_max_secs,
                    "wait target {needed} outside band for {difficulty}"
                );

                let (_, phases) = fight.win_phases();
                assert!(phases >= 1 && phases <= params.phases_max);
            }
        }
    }

    #[test]
    fn test_bait_splash_fires_exactly_once() {
        let mut rng = create_test_rng();
        let bait = EquippedBait::default_bait();
        let mut fight = started_fight(Difficulty::Easy, &bait, &mut rng);

        // 3 seconds of updates, well past the 1.5s splash delay
        for _ in 0..30 {
            fight.update(0.1, &bait, &mut rng);
        }
        assert!(fight.is_bait_in_water());

        let splashes = fight
            .drain_events()
            .iter()
            .filter(|e| matches!(e, FishingEvent::Audio(AudioCue::BaitSplash)))
            .count();
        assert_eq!(splashes, 1, "splash must fire exactly once per attempt");
    }

    #[test]
    fn test_waiting_resolves_into_pulling_with_spawned_fish() {
        // Scenario A: Easy difficulty, bait strength 0.
        let mut rng = create_test_rng();
        let bait = EquippedBait::default_bait();
        let mut fight = started_fight(Difficulty::Easy, &bait, &mut rng);

        wait_out_the_bite(&mut fight, &bait, &mut rng);

        assert_eq!(fight.phase(), FishingPhase::Pulling);
        let (current, needed) = fight.pull_progress();
        assert_eq!(current, 0);
        assert!((2..=3).contains(&needed), "easy pull target in [2,3]");

        let events = fight.drain_events();
        assert!(events.contains(&FishingEvent::SpawnFish {
            difficulty: Difficulty::Easy
        }));
        assert!(events.contains(&FishingEvent::Dialogue(DialogueCheckpoint::PullFight)));
    }

    #[test]
    fn test_pulling_timeout_loses_and_despawns_once() {
        // Scenario B: no pulls for longer than the pulling time limit.
        let mut rng = create_test_rng();
        let bait = EquippedBait::default_bait();
        let mut fight = started_fight(Difficulty::Easy, &bait, &mut rng);
        wait_out_the_bite(&mut fight, &bait, &mut rng);
        fight.drain_events();

        let (_, limit) = fight.phase_time();
        assert_eq!(limit, 12.0);

        let mut elapsed = 0.0;
        while fight.phase() == FishingPhase::Pulling {
            fight.update(0.25, &bait, &mut rng);
            elapsed += 0.25;
            assert!(elapsed < 15.0, "timeout never fired");
        }

        assert_eq!(fight.phase(), FishingPhase::NotStarted);
        assert!(elapsed >= 12.0, "lost before the time limit");

        let events = fight.drain_events();
        let despawns = events
            .iter()
            .filter(|e| matches!(e, FishingEvent::DespawnFish))
            .count();
        assert_eq!(despawns, 1);
        assert!(events.contains(&FishingEvent::Audio(AudioCue::Lose)));
        assert!(events.contains(&FishingEvent::ConsumeBaitDurability));
    }

    #[test]
    fn test_pull_threshold_advances_exactly_once() {
        let mut rng = create_test_rng();
        let bait = EquippedBait::default_bait();
        let mut fight = started_fight(Difficulty::Easy, &bait, &mut rng);
        wait_out_the_bite(&mut fight, &bait, &mut rng);
        fight.drain_events();

        let (_, needed) = fight.pull_progress();
        for _ in 0..needed {
            assert_eq!(fight.phase(), FishingPhase::Pulling);
            fight.pull_success(&bait, &mut rng);
        }

        // The crossing pull flipped the sub-phase exactly once.
        assert_eq!(fight.phase(), FishingPhase::Reeling);
        let advances = fight
            .drain_events()
            .iter()
            .filter(|e| matches!(e, FishingEvent::Audio(AudioCue::PhaseSuccess)))
            .count();
        assert_eq!(advances, 1);
    }

    #[test]
    fn test_reel_success_returns_true_exactly_at_threshold() {
        // Scenario C: a single call reaching the threshold exactly.
        let mut rng = create_test_rng();
        let bait = EquippedBait::default_bait();
        let mut fight = started_fight(Difficulty::Easy, &bait, &mut rng);
        wait_out_the_bite(&mut fight, &bait, &mut rng);

        let (_, pulls) = fight.pull_progress();
        for _ in 0..pulls {
            fight.pull_success(&bait, &mut rng);
        }
        assert_eq!(fight.phase(), FishingPhase::Reeling);

        let (_, needed_reel) = fight.reel_progress();
        assert!(fight.reel_success(needed_reel, &bait, &mut rng));
        assert_ne!(fight.phase(), FishingPhase::Reeling);
    }

    #[test]
    fn test_reel_success_below_threshold_returns_false() {
        let mut rng = create_test_rng();
        let bait = EquippedBait::default_bait();
        let mut fight = started_fight(Difficulty::Easy, &bait, &mut rng);
        wait_out_the_bite(&mut fight, &bait, &mut rng);

        let (_, pulls) = fight.pull_progress();
        for _ in 0..pulls {
            fight.pull_success(&bait, &mut rng);
        }

        let (_, needed_reel) = fight.reel_progress();
        assert!(!fight.reel_success(needed_reel * 0.25, &bait, &mut rng));
        assert_eq!(fight.phase(), FishingPhase::Reeling);
    }

    #[test]
    fn test_events_outside_their_phase_are_ignored() {
        let mut rng = create_test_rng();
        let bait = EquippedBait::default_bait();
        let mut fight = started_fight(Difficulty::Easy, &bait, &mut rng);

        // Still waiting: neither pull nor reel may do anything.
        fight.pull_success(&bait, &mut rng);
        assert!(!fight.reel_success(100.0, &bait, &mut rng));
        assert_eq!(fight.phase(), FishingPhase::WaitingFish);
        let (pulls, _) = fight.pull_progress();
        assert_eq!(pulls, 0);
    }

    #[test]
    fn test_alternation_reaches_win_and_releases_fish_once() {
        // Scenario D: complete exactly the needed number of sub-phases.
        let mut rng = create_test_rng();
        let bait = EquippedBait::default_bait();
        let mut fight = started_fight(Difficulty::Medium, &bait, &mut rng);
        wait_out_the_bite(&mut fight, &bait, &mut rng);

        let (_, needed_phases) = fight.win_phases();
        let mut completed = 0;
        while fight.phase() != FishingPhase::Win {
            match fight.phase() {
                FishingPhase::Pulling => {
                    let (_, pulls) = fight.pull_progress();
                    for _ in 0..pulls {
                        fight.pull_success(&bait, &mut rng);
                    }
                    completed += 1;
                }
                FishingPhase::Reeling => {
                    let (_, reel) = fight.reel_progress();
                    assert!(fight.reel_success(reel, &bait, &mut rng));
                    completed += 1;
                }
                other => panic!("unexpected phase {other:?} mid-fight"),
            }
            assert!(completed <= needed_phases, "fight ran past its win target");
        }

        assert_eq!(completed, needed_phases);
        assert!(fight.can_grab_fish());

        let events = fight.drain_events();
        let releases = events
            .iter()
            .filter(|e| matches!(e, FishingEvent::ReleaseFishPhysics))
            .count();
        assert_eq!(releases, 1);
        assert!(
            !events.iter().any(|e| matches!(e, FishingEvent::DespawnFish)),
            "winning must not despawn the fish"
        );
        assert!(events.contains(&FishingEvent::ConsumeBaitDurability));
        assert!(events.contains(&FishingEvent::Dialogue(DialogueCheckpoint::GrabFish)));
    }

    #[test]
    fn test_alternate_dialogue_only_after_reeling() {
        let mut rng = create_test_rng();
        let bait = EquippedBait::default_bait();
        // Hard has at least 4 sub-phases, so a full Pull→Reel→Pull cycle occurs.
        let mut fight = started_fight(Difficulty::Hard, &bait, &mut rng);
        wait_out_the_bite(&mut fight, &bait, &mut rng);

        // First pulling entry: no alternate dialogue yet.
        assert!(!fight
            .drain_events()
            .contains(&FishingEvent::Dialogue(DialogueCheckpoint::AlternatePullReel)));

        let (_, pulls) = fight.pull_progress();
        for _ in 0..pulls {
            fight.pull_success(&bait, &mut rng);
        }
        assert!(!fight
            .drain_events()
            .contains(&FishingEvent::Dialogue(DialogueCheckpoint::AlternatePullReel)));

        let (_, reel) = fight.reel_progress();
        fight.reel_success(reel, &bait, &mut rng);
        assert_eq!(fight.phase(), FishingPhase::Pulling);
        assert!(fight
            .drain_events()
            .contains(&FishingEvent::Dialogue(DialogueCheckpoint::AlternatePullReel)));
    }

    #[test]
    fn test_exit_area_only_matters_while_waiting() {
        // Scenario E.
        let mut rng = create_test_rng();
        let bait = EquippedBait::default_bait();

        let mut fight = started_fight(Difficulty::Easy, &bait, &mut rng);
        assert_eq!(fight.phase(), FishingPhase::WaitingFish);
        fight.exit_fishing_area();
        assert_eq!(fight.phase(), FishingPhase::NotStarted);

        let mut fight = started_fight(Difficulty::Easy, &bait, &mut rng);
        wait_out_the_bite(&mut fight, &bait, &mut rng);
        assert_eq!(fight.phase(), FishingPhase::Pulling);
        fight.exit_fishing_area();
        assert_eq!(fight.phase(), FishingPhase::Pulling, "mid-fight exit ignored");
    }

    #[test]
    fn test_lose_game_is_idempotent_from_not_started() {
        let mut rng = create_test_rng();
        let bait = EquippedBait::default_bait();
        let mut fight = started_fight(Difficulty::Easy, &bait, &mut rng);
        wait_out_the_bite(&mut fight, &bait, &mut rng);

        fight.lose_game();
        fight.drain_events();

        fight.lose_game();
        assert_eq!(fight.phase(), FishingPhase::NotStarted);
        assert!(
            fight.drain_events().is_empty(),
            "second loss must add no side effects"
        );
    }

    #[test]
    fn test_lose_game_never_unwins() {
        let mut rng = create_test_rng();
        let bait = EquippedBait::default_bait();
        let mut fight = started_fight(Difficulty::Easy, &bait, &mut rng);
        wait_out_the_bite(&mut fight, &bait, &mut rng);

        while fight.phase() != FishingPhase::Win {
            match fight.phase() {
                FishingPhase::Pulling => fight.pull_success(&bait, &mut rng),
                FishingPhase::Reeling => {
                    let (_, reel) = fight.reel_progress();
                    fight.reel_success(reel, &bait, &mut rng);
                }
                other => panic!("unexpected phase {other:?}"),
            }
        }
        fight.drain_events();

        fight.lose_game();
        assert_eq!(fight.phase(), FishingPhase::Win);
        assert!(fight.drain_events().is_empty());
    }

    #[test]
    fn test_waiting_loss_spends_no_bait() {
        let mut rng = create_test_rng();
        let bait = EquippedBait::default_bait();
        let mut fight = started_fight(Difficulty::Easy, &bait, &mut rng);

        fight.exit_fishing_area();
        let events = fight.drain_events();
        assert!(
            !events
                .iter()
                .any(|e| matches!(e, FishingEvent::ConsumeBaitDurability)),
            "no fish was hooked, no bait use"
        );
        assert!(events.contains(&FishingEvent::Audio(AudioCue::Lose)));
    }

    #[test]
    fn test_grab_resets_to_not_started() {
        let mut rng = create_test_rng();
        let bait = EquippedBait::default_bait();
        let mut fight = started_fight(Difficulty::Easy, &bait, &mut rng);
        wait_out_the_bite(&mut fight, &bait, &mut rng);

        while fight.phase() != FishingPhase::Win {
            match fight.phase() {
                FishingPhase::Pulling => fight.pull_success(&bait, &mut rng),
                FishingPhase::Reeling => {
                    let (_, reel) = fight.reel_progress();
                    fight.reel_success(reel, &bait, &mut rng);
                }
                other => panic!("unexpected phase {other:?}"),
            }
        }

        fight.reset_after_fish_grabbed();
        assert_eq!(fight.phase(), FishingPhase::NotStarted);
        assert!(!fight.can_grab_fish());
    }

    #[test]
    fn test_strong_bait_floors_targets_at_one() {
        for seed in 0..100 {
            let mut rng = ChaCha8Rng::seed_from_u64(seed);
            let bait = EquippedBait {
                strength: 3,
                durability: 10,
                name: "test",
            };
            let mut fight = started_fight(Difficulty::Easy, &bait, &mut rng);
            let (_, phases) = fight.win_phases();
            assert!(phases >= 1);

            wait_out_the_bite(&mut fight, &bait, &mut rng);
            let (_, pulls) = fight.pull_progress();
            assert!(pulls >= 1);
        }
    }
}
