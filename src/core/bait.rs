//! Bait: the player-equipped consumable that eases the fight.
//!
//! Strength scales the fight thresholds down (see
//! [`crate::fishing::generation`]); durability is spent by the game state
//! when a hooked fight resolves, never by the fight machine itself.

/// The bait currently threaded on the hook.
///
/// Read-only from the fight machine's perspective: it is sampled when a
/// phase starts, and the durability decrement arrives as a
/// [`crate::fishing::types::FishingEvent::ConsumeBaitDurability`] event.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EquippedBait {
    /// 0 = the default bait, 1-3 = crafted baits of increasing quality.
    pub strength: u8,
    /// Uses left before the bait is gone. Ignored for the default bait.
    pub durability: u32,
    pub name: &'static str,
}

impl EquippedBait {
    /// The free starter bait: no bonus, never runs out.
    pub fn default_bait() -> Self {
        EquippedBait {
            strength: 0,
            durability: 0,
            name: "Plain Worm",
        }
    }

    pub fn is_default(&self) -> bool {
        self.strength == 0
    }

    /// Spends one use. Returns true if the bait just ran out (the caller
    /// should revert to the default bait).
    pub fn consume_use(&mut self) -> bool {
        if self.is_default() {
            return false;
        }
        self.durability = self.durability.saturating_sub(1);
        if self.durability == 0 {
            *self = EquippedBait::default_bait();
            return true;
        }
        false
    }
}

/// Coin prices at the tackle shop, matching [`BAIT_PRESETS`] order.
pub const BAIT_PRICES: [u32; 3] = [15, 30, 60];

/// Craftable baits, in the order the bait menu cycles through them.
pub const BAIT_PRESETS: [EquippedBait; 3] = [
    EquippedBait {
        strength: 1,
        durability: 5,
        name: "Glow Grub",
    },
    EquippedBait {
        strength: 2,
        durability: 4,
        name: "Spinner Shrimp",
    },
    EquippedBait {
        strength: 3,
        durability: 3,
        name: "Royal Lure",
    },
];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_bait_never_expires() {
        let mut bait = EquippedBait::default_bait();
        for _ in 0..100 {
            assert!(!bait.consume_use());
        }
        assert_eq!(bait.strength, 0);
    }

    #[test]
    fn test_crafted_bait_reverts_to_default_when_spent() {
        let mut bait = BAIT_PRESETS[2];
        assert!(!bait.consume_use());
        assert!(!bait.consume_use());
        // Third use exhausts it
        assert!(bait.consume_use());
        assert!(bait.is_default());
        assert_eq!(bait.name, "Plain Worm");
    }
}
