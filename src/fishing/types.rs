//! Core types for the fishing fight: phases, difficulties, and the
//! side-effect events the state machine emits toward its collaborators.

use std::fmt;

/// Difficulty of a fishing area, set once per attempt by the area the bait
/// landed in. Selects the band every randomized threshold is rolled from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Difficulty {
    #[default]
    Easy,
    Medium,
    Hard,
}

impl Difficulty {
    pub const ALL: [Difficulty; 3] = [Difficulty::Easy, Difficulty::Medium, Difficulty::Hard];

    pub fn name(&self) -> &'static str {
        match self {
            Difficulty::Easy => "Easy",
            Difficulty::Medium => "Medium",
            Difficulty::Hard => "Hard",
        }
    }
}

impl fmt::Display for Difficulty {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Stage of a single fishing attempt. Exactly one is active at a time.
///
/// `NotStarted` and `Win` are terminal: `NotStarted` is where every loss or
/// reset lands, `Win` holds until the player physically grabs the fish.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FishingPhase {
    #[default]
    NotStarted,
    WaitingFish,
    Pulling,
    Reeling,
    Win,
}

impl FishingPhase {
    pub fn name(&self) -> &'static str {
        match self {
            FishingPhase::NotStarted => "Not Started",
            FishingPhase::WaitingFish => "Waiting",
            FishingPhase::Pulling => "Pulling",
            FishingPhase::Reeling => "Reeling",
            FishingPhase::Win => "Win",
        }
    }
}

/// Which hand a haptic cue targets (right hand holds the rod, left the reel).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Hand {
    Left,
    Right,
}

/// Fire-and-forget audio cues. No acknowledgement expected.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AudioCue {
    /// The bait settled into the water after a cast.
    BaitSplash,
    /// A pull or reel sub-phase was completed (non-terminal advance).
    PhaseSuccess,
    /// The fish got away.
    Lose,
    /// The fight is won.
    Victory,
}

/// Named tutorial checkpoints, fired exactly once per corresponding
/// transition and consumed by the scripted dialogue sequencer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DialogueCheckpoint {
    /// Bait is in the water; nothing to do but wait.
    WaitingFish,
    /// A fish struck: flick the rod to set the hook.
    PullFight,
    /// Hook is set: crank the reel.
    ReelFight,
    /// The fish is fighting back, switch to pulling again.
    AlternatePullReel,
    /// The fight is over, the fish floats free to be grabbed.
    GrabFish,
    /// The attempt was lost; the tutorial rewinds to the cast step.
    LossRewind,
    /// The bait is back at the rod tip, ready to aim the next cast.
    AimBubble,
}

/// Side effects produced by the fight state machine.
///
/// The machine buffers these and the host drains them each frame; it never
/// touches audio, rendering, or the bait inventory directly.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum FishingEvent {
    /// Spawn a fish of the given difficulty and constrain it to the bait.
    SpawnFish { difficulty: Difficulty },
    /// The fight is won: free the fish so the player can grab it.
    ReleaseFishPhysics,
    /// The fight is lost: remove the hooked fish.
    DespawnFish,
    Audio(AudioCue),
    Haptic {
        hand: Hand,
        amplitude: f32,
        duration_secs: f32,
    },
    Dialogue(DialogueCheckpoint),
    /// A hooked fight resolved (win or loss): spend one bait use.
    ConsumeBaitDurability,
}
