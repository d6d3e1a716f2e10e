//! Combat-defeat orchestration.
//!
//! When a monster's health hits zero the store itself does not advance;
//! a `DefeatSequence` takes over and guarantees the protocol: spawn the
//! configured diamond drops, credit one diamond per collection, and advance
//! to the next monster exactly once — after the last collection, or
//! immediately (phase-wise) when the drop count is zero. Presentation layers
//! are free to delay the advance call for effect; tests call it directly.

use rand::Rng;

use crate::store::GameStore;

/// Scatter radius for drop placement, in cell offsets from the monster.
const DROP_SCATTER: i16 = 100;

/// A collectable diamond on the battle screen. Offsets are presentation-only
/// and never persisted.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DiamondDrop {
    pub id: u64,
    pub dx: i16,
    pub dy: i16,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum DefeatPhase {
    /// Drops remain on screen; the advance is locked.
    Collecting,
    /// Everything collected (or nothing dropped); one advance is armed.
    ReadyToAdvance,
    /// The single advance has fired. Terminal.
    Advanced,
}

/// Drives one defeated monster from zero health to the next monster.
#[derive(Debug, Clone)]
pub struct DefeatSequence {
    drops: Vec<DiamondDrop>,
    phase: DefeatPhase,
}

impl DefeatSequence {
    /// Starts the sequence for the store's active (defeated) monster, rolling
    /// scatter positions for the configured drop count. Callers start this
    /// when `apply_damage` returns zero.
    pub fn begin(store: &GameStore, rng: &mut impl Rng) -> Self {
        let is_boss = store.current_monster().template.is_boss;
        let count = store.diamond_reward_for(is_boss);

        let drops: Vec<DiamondDrop> = (0..count as u64)
            .map(|i| DiamondDrop {
                id: i + 1,
                dx: rng.gen_range(-DROP_SCATTER..=DROP_SCATTER),
                dy: rng.gen_range(-DROP_SCATTER..=DROP_SCATTER),
            })
            .collect();

        let phase = if drops.is_empty() {
            DefeatPhase::ReadyToAdvance
        } else {
            DefeatPhase::Collecting
        };

        Self { drops, phase }
    }

    /// Drops still waiting to be collected.
    pub fn remaining_drops(&self) -> &[DiamondDrop] {
        &self.drops
    }

    /// True once every drop is collected and the advance has not fired yet.
    pub fn ready_to_advance(&self) -> bool {
        self.phase == DefeatPhase::ReadyToAdvance
    }

    /// True once the advance has fired; the sequence can be discarded.
    pub fn is_finished(&self) -> bool {
        self.phase == DefeatPhase::Advanced
    }

    /// Collects one drop by id, crediting a single diamond. Unknown or
    /// already-collected ids change nothing. Collecting the last drop arms
    /// the advance.
    pub fn collect(&mut self, id: u64, store: &mut GameStore) -> bool {
        if self.phase != DefeatPhase::Collecting {
            return false;
        }
        let index = match self.drops.iter().position(|d| d.id == id) {
            Some(i) => i,
            None => return false,
        };
        self.drops.remove(index);
        store.add_diamonds(1);
        if self.drops.is_empty() {
            self.phase = DefeatPhase::ReadyToAdvance;
        }
        true
    }

    /// Fires the one-and-only advance to the next monster. Refused while
    /// drops remain and after it has already fired.
    pub fn advance(&mut self, store: &mut GameStore) -> bool {
        if self.phase != DefeatPhase::ReadyToAdvance {
            return false;
        }
        store.advance_to_next_monster();
        self.phase = DefeatPhase::Advanced;
        true
    }
}
