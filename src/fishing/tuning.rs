//! Fight tuning: one parameter block per difficulty plus the shared
//! constants, loadable from a JSON file for balance experiments.

use super::types::Difficulty;
use serde::{Deserialize, Serialize};
use std::fs;
use std::io;
use std::path::Path;

/// Randomization bands for one difficulty.
///
/// Integer bands are drawn inclusive-inclusive, float bands
/// inclusive-exclusive (see [`crate::fishing::generation`]).
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct DifficultyParams {
    /// Successful rod flicks needed per pulling sub-phase.
    pub pull_min: u32,
    pub pull_max: u32,
    /// Seconds before a fish bites.
    pub wait_min_secs: f32,
    pub wait_max_secs: f32,
    /// Accumulated reel force needed per reeling sub-phase.
    pub reel_min: f32,
    pub reel_max: f32,
    /// Completed pull/reel sub-phases needed to win.
    pub phases_min: u32,
    pub phases_max: u32,
}

/// Full fight tuning table.
///
/// Defaults mirror the shipped balance; a JSON override file can replace the
/// whole table (`FishingTuning::load`).
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct FishingTuning {
    pub easy: DifficultyParams,
    pub medium: DifficultyParams,
    pub hard: DifficultyParams,
    /// Seconds allowed in one pulling sub-phase before the fish escapes.
    pub max_pulling_time_before_lose: f32,
    /// Seconds allowed in one reeling sub-phase before the fish escapes.
    pub max_reeling_time_before_lose: f32,
    /// Seconds after a cast before the bait settles into the water.
    pub bait_splash_delay_secs: f32,
    /// Divisor applied to reel crank force while a fight is active.
    pub reel_force_divisor: f32,
}

impl Default for FishingTuning {
    fn default() -> Self {
        FishingTuning {
            easy: DifficultyParams {
                pull_min: 2,
                pull_max: 3,
                wait_min_secs: 5.0,
                wait_max_secs: 8.0,
                reel_min: 0.3,
                reel_max: 0.5,
                phases_min: 3,
                phases_max: 4,
            },
            medium: DifficultyParams {
                pull_min: 2,
                pull_max: 4,
                wait_min_secs: 7.0,
                wait_max_secs: 10.0,
                reel_min: 0.4,
                reel_max: 0.8,
                phases_min: 2,
                phases_max: 5,
            },
            hard: DifficultyParams {
                pull_min: 4,
                pull_max: 6,
                wait_min_secs: 9.0,
                wait_max_secs: 12.0,
                reel_min: 0.8,
                reel_max: 1.5,
                phases_min: 4,
                phases_max: 6,
            },
            max_pulling_time_before_lose: 12.0,
            max_reeling_time_before_lose: 15.0,
            bait_splash_delay_secs: 1.5,
            reel_force_divisor: 10.0,
        }
    }
}

impl FishingTuning {
    /// Parameter block for a difficulty.
    pub fn params(&self, difficulty: Difficulty) -> &DifficultyParams {
        match difficulty {
            Difficulty::Easy => &self.easy,
            Difficulty::Medium => &self.medium,
            Difficulty::Hard => &self.hard,
        }
    }

    /// Loads a complete tuning table from a JSON file.
    pub fn load(path: impl AsRef<Path>) -> io::Result<Self> {
        let contents = fs::read_to_string(path)?;
        serde_json::from_str(&contents).map_err(|e| io::Error::new(io::ErrorKind::InvalidData, e))
    }
}
