//! Player-facing game state surrounding the fishing fight: money, the fish
//! bucket, the equipped bait and rod, and the rolling message log.
//!
//! Also the bridge that maps drained [`FishingEvent`]s onto state changes
//! and log lines; the fight machine itself never touches any of this.

use crate::constants::{FISH_VALUES, LOG_CAPACITY};
use crate::core::bait::{EquippedBait, BAIT_PRESETS, BAIT_PRICES};
use crate::core::rods::{all_rods, RodStats, BASIC_ROD};
use crate::fishing::types::{AudioCue, DialogueCheckpoint, Difficulty, FishingEvent, Hand};

#[derive(Debug)]
pub struct GameState {
    /// Coins in the player's pocket.
    pub money: u32,
    /// Value of fish in the bucket, not yet cashed in.
    pub bucket_value: u32,

    pub easy_fish_caught: u32,
    pub medium_fish_caught: u32,
    pub hard_fish_caught: u32,

    pub equipped_bait: EquippedBait,
    pub rod: RodStats,

    /// Rolling message log shown by the UI, newest last.
    pub log: Vec<String>,
}

impl Default for GameState {
    fn default() -> Self {
        GameState::new()
    }
}

impl GameState {
    pub fn new() -> Self {
        GameState {
            money: 0,
            bucket_value: 0,
            easy_fish_caught: 0,
            medium_fish_caught: 0,
            hard_fish_caught: 0,
            equipped_bait: EquippedBait::default_bait(),
            rod: BASIC_ROD,
            log: Vec::new(),
        }
    }

    pub fn total_fish_caught(&self) -> u32 {
        self.easy_fish_caught + self.medium_fish_caught + self.hard_fish_caught
    }

    pub fn add_log(&mut self, message: impl Into<String>) {
        self.log.push(message.into());
        if self.log.len() > LOG_CAPACITY {
            let excess = self.log.len() - LOG_CAPACITY;
            self.log.drain(..excess);
        }
    }

    /// A won fish was grabbed: count it and drop it in the bucket.
    pub fn record_catch(&mut self, difficulty: Difficulty) {
        let value = match difficulty {
            Difficulty::Easy => {
                self.easy_fish_caught += 1;
                FISH_VALUES[0]
            }
            Difficulty::Medium => {
                self.medium_fish_caught += 1;
                FISH_VALUES[1]
            }
            Difficulty::Hard => {
                self.hard_fish_caught += 1;
                FISH_VALUES[2]
            }
        };
        self.bucket_value += value;
        self.add_log(format!(
            "Dropped a {} fish in the bucket (+{} value)",
            difficulty.name().to_lowercase(),
            value
        ));
    }

    /// Sells the bucket's contents.
    pub fn cash_in_bucket(&mut self) {
        if self.bucket_value == 0 {
            return;
        }
        self.money += self.bucket_value;
        self.add_log(format!("Sold the bucket for {} coins", self.bucket_value));
        self.bucket_value = 0;
    }

    /// The next rod model up from the equipped one, if any.
    pub fn next_rod_upgrade(&self) -> Option<RodStats> {
        all_rods()
            .iter()
            .copied()
            .find(|rod| rod.price > self.rod.price)
    }

    /// Spends coins on the next rod up. Returns false when already on the
    /// best rod or the bucket money hasn't been sold yet.
    pub fn buy_next_rod(&mut self) -> bool {
        let Some(rod) = self.next_rod_upgrade() else {
            self.add_log("Larry: No finer rod exists, friend.");
            return false;
        };
        if self.money < rod.price {
            self.add_log(format!(
                "Larry: The {} runs {} coins. Sell some fish first!",
                rod.name, rod.price
            ));
            return false;
        }
        self.money -= rod.price;
        self.rod = rod;
        self.add_log(format!("Bought the {} for {} coins", rod.name, rod.price));
        true
    }

    /// Buys one of the craftable baits and threads it on the hook,
    /// replacing whatever was equipped.
    pub fn buy_bait(&mut self, index: usize) -> bool {
        let bait = BAIT_PRESETS[index];
        let price = BAIT_PRICES[index];
        if self.money < price {
            self.add_log(format!(
                "Larry: {} costs {} coins. Sell some fish first!",
                bait.name, price
            ));
            return false;
        }
        self.money -= price;
        self.equipped_bait = bait;
        self.add_log(format!(
            "Bought {} ({} uses) for {} coins",
            bait.name, bait.durability, price
        ));
        true
    }

    /// Applies one frame's worth of drained fight events.
    pub fn apply_fishing_events(&mut self, events: &[FishingEvent]) {
        for event in events {
            match event {
                FishingEvent::SpawnFish { difficulty } => {
                    self.add_log(format!("Something {} is on the line!", strike_word(*difficulty)));
                }
                FishingEvent::ReleaseFishPhysics => {
                    self.add_log("The fish gives up and floats free. Grab it!");
                }
                FishingEvent::DespawnFish => {
                    self.add_log("The fish slips the hook and vanishes.");
                }
                FishingEvent::ConsumeBaitDurability => {
                    let name = self.equipped_bait.name;
                    if self.equipped_bait.consume_use() {
                        self.add_log(format!("{name} is used up. Back to the plain worm."));
                    }
                }
                FishingEvent::Audio(cue) => {
                    if let Some(line) = audio_log_line(*cue) {
                        self.add_log(line);
                    }
                }
                FishingEvent::Dialogue(checkpoint) => {
                    self.add_log(dialogue_line(*checkpoint));
                }
                FishingEvent::Haptic { hand, .. } => {
                    let which = match hand {
                        Hand::Left => "left",
                        Hand::Right => "right",
                    };
                    self.add_log(format!("* your {which} hand buzzes *"));
                }
            }
        }
    }
}

fn strike_word(difficulty: Difficulty) -> &'static str {
    match difficulty {
        Difficulty::Easy => "small",
        Difficulty::Medium => "hefty",
        Difficulty::Hard => "monstrous",
    }
}

fn audio_log_line(cue: AudioCue) -> Option<&'static str> {
    match cue {
        AudioCue::BaitSplash => Some("~ sploosh ~"),
        AudioCue::PhaseSuccess => Some("* the fish tires a little *"),
        AudioCue::Lose => Some("* the line goes slack *"),
        AudioCue::Victory => Some("* fanfare! *"),
    }
}

fn dialogue_line(checkpoint: DialogueCheckpoint) -> &'static str {
    match checkpoint {
        DialogueCheckpoint::WaitingFish => "Larry: Now we wait. Patience, friend.",
        DialogueCheckpoint::PullFight => "Larry: It's biting! Flick the rod back, hard!",
        DialogueCheckpoint::ReelFight => "Larry: Hook's set! Crank that reel!",
        DialogueCheckpoint::AlternatePullReel => "Larry: It's fighting back! Rod again!",
        DialogueCheckpoint::GrabFish => "Larry: You beat it! Grab your fish!",
        DialogueCheckpoint::LossRewind => "Larry: Ah, tough luck. Cast again when you're ready.",
        DialogueCheckpoint::AimBubble => "Larry: Bait's back. Aim for the bubbly spots!",
    }
}
