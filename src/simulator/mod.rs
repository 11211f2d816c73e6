//! Headless balance simulator.
//!
//! Runs a scripted bot against the real fight machine at a fixed timestep
//! and aggregates win rates, attempt durations, and round counts, so
//! tuning changes can be sanity-checked without playing.

use crate::core::bait::EquippedBait;
use crate::core::rods::{RodStats, BASIC_ROD};
use crate::fishing::area::FishingArea;
use crate::fishing::logic::FishFight;
use crate::fishing::reel::ReelCrank;
use crate::fishing::rod::RodCaster;
use crate::fishing::tuning::FishingTuning;
use crate::fishing::types::{AudioCue, Difficulty, FishingEvent, FishingPhase};
use rand::rngs::StdRng;
use rand::SeedableRng;
use std::fmt::Write as _;

/// Simulation parameters.
#[derive(Debug, Clone)]
pub struct SimConfig {
    pub num_runs: u32,
    /// Base seed; run `i` uses `seed + i`. None derives from entropy.
    pub seed: Option<u64>,
    pub difficulty: Difficulty,
    pub bait_strength: u8,
    pub rod: RodStats,
    pub tuning: FishingTuning,
    /// Simulation timestep in seconds.
    pub dt: f32,
    /// How often the bot flicks the rod during a pull fight.
    pub flick_interval_secs: f32,
    /// How fast the bot cranks during a reel fight, degrees per second.
    pub crank_speed_deg_per_sec: f32,
    /// Hard cap per attempt; hitting it counts as a stall.
    pub max_secs_per_run: f32,
}

impl Default for SimConfig {
    fn default() -> Self {
        SimConfig {
            num_runs: 1000,
            seed: None,
            difficulty: Difficulty::Easy,
            bait_strength: 0,
            rod: BASIC_ROD,
            tuning: FishingTuning::default(),
            dt: 0.05,
            flick_interval_secs: 1.1,
            crank_speed_deg_per_sec: 240.0,
            max_secs_per_run: 300.0,
        }
    }
}

/// Aggregated results over all runs.
#[derive(Debug, Clone, Default)]
pub struct SimReport {
    pub runs: u32,
    pub wins: u32,
    pub losses: u32,
    pub stalls: u32,
    pub avg_duration_secs: f32,
    pub avg_rounds: f32,
    pub avg_wait_secs: f32,
    pub bait_uses: u32,
}

impl SimReport {
    pub fn win_rate(&self) -> f32 {
        if self.runs == 0 {
            return 0.0;
        }
        self.wins as f32 / self.runs as f32
    }

    pub fn to_text(&self) -> String {
        let mut out = String::new();
        let _ = writeln!(out, "Runs:          {}", self.runs);
        let _ = writeln!(
            out,
            "Wins:          {} ({:.1}%)",
            self.wins,
            self.win_rate() * 100.0
        );
        let _ = writeln!(out, "Losses:        {}", self.losses);
        if self.stalls > 0 {
            let _ = writeln!(out, "Stalls:        {} (bot never resolved!)", self.stalls);
        }
        let _ = writeln!(out, "Avg duration:  {:.1}s", self.avg_duration_secs);
        let _ = writeln!(out, "Avg wait:      {:.1}s", self.avg_wait_secs);
        let _ = writeln!(out, "Avg rounds:    {:.1}", self.avg_rounds);
        let _ = writeln!(out, "Bait uses:     {}", self.bait_uses);
        out
    }
}

/// Runs `config.num_runs` scripted attempts and aggregates the outcomes.
pub fn run_simulation(config: &SimConfig) -> SimReport {
    let base_seed = config.seed.unwrap_or_else(rand::random);

    let mut report = SimReport {
        runs: config.num_runs,
        ..SimReport::default()
    };
    let mut total_duration = 0.0f64;
    let mut total_rounds = 0u64;
    let mut total_wait = 0.0f64;

    for run in 0..config.num_runs {
        let mut rng = StdRng::seed_from_u64(base_seed.wrapping_add(run as u64));
        let outcome = run_one_attempt(config, &mut rng);

        match outcome.result {
            AttemptResult::Win => report.wins += 1,
            AttemptResult::Loss => report.losses += 1,
            AttemptResult::Stall => report.stalls += 1,
        }
        report.bait_uses += outcome.bait_uses;
        total_duration += outcome.duration_secs as f64;
        total_rounds += outcome.rounds as u64;
        total_wait += outcome.wait_secs as f64;
    }

    if config.num_runs > 0 {
        report.avg_duration_secs = (total_duration / config.num_runs as f64) as f32;
        report.avg_rounds = (total_rounds as f64 / config.num_runs as f64) as f32;
        report.avg_wait_secs = (total_wait / config.num_runs as f64) as f32;
    }
    report
}

enum AttemptResult {
    Win,
    Loss,
    Stall,
}

struct AttemptOutcome {
    result: AttemptResult,
    duration_secs: f32,
    rounds: u32,
    wait_secs: f32,
    bait_uses: u32,
}

fn run_one_attempt(config: &SimConfig, rng: &mut StdRng) -> AttemptOutcome {
    let bait = EquippedBait {
        strength: config.bait_strength,
        durability: u32::MAX,
        name: "sim bait",
    };

    let mut fight = FishFight::new(config.tuning);
    let mut rod = RodCaster::new();
    let mut crank = ReelCrank::new();
    let area = FishingArea::new(config.difficulty);

    rod.grab();
    rod.cast(&fight);
    crank.on_cast(&config.rod);
    rod.update(config.dt, &mut fight, &bait, rng);
    area.on_bait_enter(&mut fight, &bait, rng);
    debug_assert_eq!(fight.phase(), FishingPhase::WaitingFish);

    let mut elapsed = 0.0f32;
    let mut since_flick = config.flick_interval_secs;
    let mut wait_secs = 0.0f32;
    let mut rounds = 0u32;
    let mut bait_uses = 0u32;

    while elapsed < config.max_secs_per_run {
        elapsed += config.dt;

        match fight.phase() {
            FishingPhase::WaitingFish => {
                wait_secs = fight.wait_progress().0;
            }
            FishingPhase::Pulling => {
                since_flick += config.dt;
                if since_flick >= config.flick_interval_secs {
                    rod.record_pitch(650.0);
                    since_flick = 0.0;
                }
            }
            FishingPhase::Reeling => {
                let angle = config.crank_speed_deg_per_sec * config.dt;
                crank.turn(angle, &config.rod, &mut fight, &bait, rng);
            }
            FishingPhase::NotStarted | FishingPhase::Win => {}
        }

        rod.update(config.dt, &mut fight, &bait, rng);
        fight.update(config.dt, &bait, rng);

        rounds = rounds.max(fight.win_phases().0);
        let mut resolved = None;
        for event in fight.drain_events() {
            match event {
                FishingEvent::Audio(AudioCue::Victory) => resolved = Some(AttemptResult::Win),
                FishingEvent::Audio(AudioCue::Lose) => resolved = Some(AttemptResult::Loss),
                FishingEvent::ConsumeBaitDurability => bait_uses += 1,
                _ => {}
            }
        }
        if let Some(result) = resolved {
            return AttemptOutcome {
                result,
                duration_secs: elapsed,
                rounds,
                wait_secs,
                bait_uses,
            };
        }
    }

    AttemptOutcome {
        result: AttemptResult::Stall,
        duration_secs: elapsed,
        rounds,
        wait_secs,
        bait_uses,
    }
}
