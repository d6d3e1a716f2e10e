//! Stage progression state and health scaling.

use serde::{Deserialize, Serialize};

use super::data::{get_all_stages, stage_count, MonsterTemplate, StageTemplate};
use crate::constants::{BOSS_SLOT, HP_LOOP_MULTIPLIER};

/// Tracks position within the endless stage cycle.
///
/// `current_stage` never wraps: it keeps counting past the catalog length so
/// that health scaling grows without bound, and is reduced modulo the catalog
/// length only when resolving templates.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StageProgression {
    /// Total stages cleared plus the one in progress (0-based, unbounded).
    #[serde(default)]
    pub current_stage: u32,
    /// Slot within the stage: 0-4 regular monsters in order, 5 boss.
    #[serde(default)]
    pub current_slot: u8,
    /// Remaining health of the active monster. `None` means the slot was just
    /// entered and health should be derived from scaled max health.
    #[serde(default)]
    pub current_monster_hp: Option<u32>,
}

/// Resolved view of the monster currently in play.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MonsterView {
    pub template: MonsterTemplate,
    pub max_hp: u32,
    pub current_hp: u32,
}

impl MonsterView {
    pub fn is_defeated(&self) -> bool {
        self.current_hp == 0
    }
}

/// Max health after `loop_count` complete passes through the catalog:
/// `floor(base_hp * 1.5^loop_count)`.
pub fn scaled_max_hp(base_hp: u32, loop_count: u32) -> u32 {
    (base_hp as f64 * HP_LOOP_MULTIPLIER.powi(loop_count as i32)).floor() as u32
}

impl Default for StageProgression {
    fn default() -> Self {
        Self::new()
    }
}

impl StageProgression {
    /// Starts at the first monster of the first stage.
    pub fn new() -> Self {
        Self {
            current_stage: 0,
            current_slot: 0,
            current_monster_hp: None,
        }
    }

    /// Number of complete passes through the catalog so far.
    pub fn loop_count(&self) -> u32 {
        self.current_stage / stage_count() as u32
    }

    /// The stage template currently in play (stage index wrapped into the
    /// catalog).
    pub fn stage_template(&self) -> StageTemplate {
        let stages = get_all_stages();
        let index = self.current_stage as usize % stages.len();
        stages[index].clone()
    }

    fn monster_template(&self) -> MonsterTemplate {
        let stage = self.stage_template();
        if self.current_slot >= BOSS_SLOT {
            stage.boss
        } else {
            stage.monsters[self.current_slot as usize]
        }
    }

    /// Resolves the active monster: template, loop-scaled max health, and the
    /// remaining health (defaulting to max for a freshly entered slot).
    pub fn current_monster(&self) -> MonsterView {
        let template = self.monster_template();
        let max_hp = scaled_max_hp(template.base_hp, self.loop_count());
        let current_hp = match self.current_monster_hp {
            Some(hp) => hp.min(max_hp),
            None => max_hp,
        };
        MonsterView {
            template,
            max_hp,
            current_hp,
        }
    }

    /// Applies damage to the active monster, clamping at zero, and stores the
    /// result. Returns the new health. Defeat handling (drops, advancing) is
    /// the caller's responsibility when this returns 0.
    pub fn apply_damage(&mut self, amount: u32) -> u32 {
        let new_hp = self.current_monster().current_hp.saturating_sub(amount);
        self.current_monster_hp = Some(new_hp);
        new_hp
    }

    /// Moves to the next slot, rolling into the next stage after the boss.
    /// Clears the stored health so the new monster derives a fresh maximum.
    /// Callers must only invoke this once the current monster is defeated.
    pub fn advance_to_next_monster(&mut self) {
        if self.current_slot < BOSS_SLOT {
            self.current_slot += 1;
        } else {
            self.current_slot = 0;
            self.current_stage += 1;
        }
        self.current_monster_hp = None;
    }

    /// Clamps loaded values back into their invariants. Applied once when a
    /// persisted document is restored: a saved health can exceed the current
    /// maximum if catalog base health was lowered between sessions, and a
    /// saved slot can fall outside 0-5 if the document was hand-edited.
    pub fn normalize(&mut self) {
        if self.current_slot > BOSS_SLOT {
            self.current_slot = BOSS_SLOT;
        }
        if let Some(hp) = self.current_monster_hp {
            let max_hp = scaled_max_hp(self.monster_template().base_hp, self.loop_count());
            if hp > max_hp {
                self.current_monster_hp = Some(max_hp);
            }
        }
    }
}
