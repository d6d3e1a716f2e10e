//! Chore task records.
//!
//! Completing a task (once a parent approves it) grants attack charges. The
//! reward amount lives in `attack_reward`; `coin_reward` is a legacy field
//! from an earlier save schema and is honored when the primary field is
//! absent, falling back to a fixed default when both are missing.

use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::constants::FALLBACK_TASK_ATTACK_REWARD;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Task {
    pub id: String,
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub attack_reward: Option<u32>,
    /// Legacy reward field. Never written by current code; read so that old
    /// save documents keep their configured amounts.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub coin_reward: Option<u32>,
    #[serde(default)]
    pub completed: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub icon: Option<String>,
}

impl Task {
    pub fn new(name: String, attack_reward: u32) -> Self {
        Self {
            id: Uuid::new_v4().to_string(),
            name,
            attack_reward: Some(attack_reward),
            coin_reward: None,
            completed: false,
            icon: None,
        }
    }

    pub fn with_icon(mut self, icon: &str) -> Self {
        self.icon = Some(icon.to_string());
        self
    }

    /// Resolves the attack charges this task grants: the primary field, then
    /// the legacy field, then the fixed fallback.
    pub fn resolved_attack_reward(&self) -> u32 {
        self.attack_reward
            .or(self.coin_reward)
            .unwrap_or(FALLBACK_TASK_ATTACK_REWARD)
    }
}
