//! The authoritative game state document and its single owner.
//!
//! `GameState` is everything that persists between sessions. `GameStore` owns
//! one `GameState` privately and exposes every legal mutation as a method, so
//! views can only read and operations stay atomic under the single-threaded
//! event loop.

use serde::{Deserialize, Serialize};

use crate::constants::{DEFAULT_BOSS_DIAMOND_REWARD, DEFAULT_NORMAL_DIAMOND_REWARD};
use crate::economy::Wallet;
use crate::rewards::{Reward, RewardStatus};
use crate::stages::{MonsterView, StageProgression};
use crate::tasks::Task;

fn default_normal_reward() -> u32 {
    DEFAULT_NORMAL_DIAMOND_REWARD
}

fn default_boss_reward() -> u32 {
    DEFAULT_BOSS_DIAMOND_REWARD
}

/// The full persisted document.
///
/// Every field carries a serde default so that documents written by older
/// versions (or with fields yet to exist) restore without error.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GameState {
    #[serde(default)]
    pub wallet: Wallet,
    #[serde(default)]
    pub progression: StageProgression,
    #[serde(default = "seed_tasks")]
    pub tasks: Vec<Task>,
    #[serde(default = "seed_rewards")]
    pub rewards: Vec<Reward>,
    #[serde(default = "default_normal_reward")]
    pub normal_monster_diamond_reward: u32,
    #[serde(default = "default_boss_reward")]
    pub boss_monster_diamond_reward: u32,
    #[serde(default)]
    pub last_save_time: i64,
}

/// Starter chores for a brand-new family.
fn seed_tasks() -> Vec<Task> {
    vec![
        Task::new("Brush your teeth".to_string(), 50).with_icon("🦷"),
        Task::new("Get dressed by yourself".to_string(), 30).with_icon("👕"),
        Task::new("Tidy up your toys".to_string(), 40).with_icon("🧸"),
        Task::new("Finish your plate".to_string(), 50).with_icon("🍽️"),
    ]
}

/// Starter rewards for a brand-new family.
fn seed_rewards() -> Vec<Reward> {
    vec![
        Reward::new("15 minutes of cartoons".to_string(), 10, None),
        Reward::new("An ice cream".to_string(), 30, None),
        Reward::new("Weekend zoo trip".to_string(), 100, None),
    ]
}

impl Default for GameState {
    fn default() -> Self {
        Self {
            wallet: Wallet::new(),
            progression: StageProgression::new(),
            tasks: seed_tasks(),
            rewards: seed_rewards(),
            normal_monster_diamond_reward: DEFAULT_NORMAL_DIAMOND_REWARD,
            boss_monster_diamond_reward: DEFAULT_BOSS_DIAMOND_REWARD,
            last_save_time: 0,
        }
    }
}

/// Owns the state document and is its only writer.
#[derive(Debug, Clone)]
pub struct GameStore {
    state: GameState,
}

impl Default for GameStore {
    fn default() -> Self {
        Self::new()
    }
}

impl GameStore {
    /// Fresh store with seeded starter content.
    pub fn new() -> Self {
        Self {
            state: GameState::default(),
        }
    }

    /// Wraps a restored document, normalizing loaded values back into their
    /// invariants first.
    pub fn from_state(mut state: GameState) -> Self {
        state.progression.normalize();
        Self { state }
    }

    /// Read-only view of the whole document, for persistence and rendering.
    pub fn state(&self) -> &GameState {
        &self.state
    }

    /// Stamps the save timestamp; called by the persistence layer right
    /// before serializing.
    pub fn mark_saved(&mut self, timestamp: i64) {
        self.state.last_save_time = timestamp;
    }

    // === Economy ===

    pub fn attacks(&self) -> u32 {
        self.state.wallet.attacks
    }

    pub fn diamonds(&self) -> u32 {
        self.state.wallet.diamonds
    }

    pub fn add_attacks(&mut self, amount: u32) {
        self.state.wallet.add_attacks(amount);
    }

    pub fn add_diamonds(&mut self, amount: u32) {
        self.state.wallet.add_diamonds(amount);
    }

    pub fn use_attack(&mut self) -> bool {
        self.state.wallet.use_attack()
    }

    pub fn spend_diamonds(&mut self, amount: u32) -> bool {
        self.state.wallet.spend_diamonds(amount)
    }

    // === Progression ===

    pub fn current_monster(&self) -> MonsterView {
        self.state.progression.current_monster()
    }

    pub fn progression(&self) -> &StageProgression {
        &self.state.progression
    }

    /// Applies damage to the active monster and returns its new health.
    /// Callers must have consumed an attack charge first; a result of 0 means
    /// the monster is defeated and the defeat sequence should begin.
    pub fn apply_damage(&mut self, amount: u32) -> u32 {
        self.state.progression.apply_damage(amount)
    }

    pub fn advance_to_next_monster(&mut self) {
        self.state.progression.advance_to_next_monster();
    }

    /// Diamond drop count for the given monster kind, from the parent-tuned
    /// configuration.
    pub fn diamond_reward_for(&self, is_boss: bool) -> u32 {
        if is_boss {
            self.state.boss_monster_diamond_reward
        } else {
            self.state.normal_monster_diamond_reward
        }
    }

    // === Configuration (gated behind the parent panel in the UI) ===

    pub fn set_normal_monster_diamond_reward(&mut self, amount: u32) {
        self.state.normal_monster_diamond_reward = amount;
    }

    pub fn set_boss_monster_diamond_reward(&mut self, amount: u32) {
        self.state.boss_monster_diamond_reward = amount;
    }

    // === Task registry ===

    pub fn tasks(&self) -> &[Task] {
        &self.state.tasks
    }

    /// Appends a new task and returns its id.
    pub fn add_task(&mut self, name: String, attack_reward: u32) -> String {
        let task = Task::new(name, attack_reward);
        let id = task.id.clone();
        self.state.tasks.push(task);
        id
    }

    pub fn remove_task(&mut self, id: &str) {
        self.state.tasks.retain(|t| t.id != id);
    }

    /// Edits an existing task in place. Completion state and id are never
    /// touched here. Returns false when the id is unknown.
    pub fn update_task(
        &mut self,
        id: &str,
        name: Option<&str>,
        attack_reward: Option<u32>,
        icon: Option<&str>,
    ) -> bool {
        match self.state.tasks.iter_mut().find(|t| t.id == id) {
            Some(task) => {
                if let Some(name) = name {
                    task.name = name.to_string();
                }
                if let Some(amount) = attack_reward {
                    task.attack_reward = Some(amount);
                }
                if let Some(icon) = icon {
                    task.icon = Some(icon.to_string());
                }
                true
            }
            None => false,
        }
    }

    /// Marks a task complete and credits its attack reward, exactly once.
    /// A missing or already-completed task changes nothing and returns false.
    pub fn approve_task(&mut self, id: &str) -> bool {
        let reward = match self.state.tasks.iter_mut().find(|t| t.id == id) {
            Some(task) if !task.completed => {
                task.completed = true;
                task.resolved_attack_reward()
            }
            _ => return false,
        };
        self.state.wallet.add_attacks(reward);
        true
    }

    /// Reopens a task for another round. Already-granted charges stay
    /// granted; reset is for redoing a chore, not punishing.
    pub fn reset_task(&mut self, id: &str) {
        if let Some(task) = self.state.tasks.iter_mut().find(|t| t.id == id) {
            task.completed = false;
        }
    }

    // === Reward registry ===

    pub fn rewards(&self) -> &[Reward] {
        &self.state.rewards
    }

    /// Appends a new reward and returns its id.
    pub fn add_reward(&mut self, name: String, diamond_cost: u32, icon: Option<String>) -> String {
        let reward = Reward::new(name, diamond_cost, icon);
        let id = reward.id.clone();
        self.state.rewards.push(reward);
        id
    }

    /// Deletes unconditionally. Removing a pending reward forfeits the
    /// diamonds that were debited when it was requested; there is no refund.
    pub fn remove_reward(&mut self, id: &str) {
        self.state.rewards.retain(|r| r.id != id);
    }

    /// Edits an existing reward in place. Lifecycle flags and id are never
    /// touched here. Returns false when the id is unknown.
    pub fn update_reward(
        &mut self,
        id: &str,
        name: Option<&str>,
        diamond_cost: Option<u32>,
        icon: Option<&str>,
    ) -> bool {
        match self.state.rewards.iter_mut().find(|r| r.id == id) {
            Some(reward) => {
                if let Some(name) = name {
                    reward.name = name.to_string();
                }
                if let Some(cost) = diamond_cost {
                    reward.diamond_cost = cost;
                }
                if let Some(icon) = icon {
                    reward.icon = Some(icon.to_string());
                }
                true
            }
            None => false,
        }
    }

    /// The child asks for a reward: diamonds are debited up front and the
    /// reward goes pending until a parent fulfills it. Fails with no state
    /// change when the reward is missing, already pending or redeemed, or the
    /// balance cannot cover the cost.
    pub fn request_reward(&mut self, id: &str) -> bool {
        let (index, cost) = match self
            .state
            .rewards
            .iter()
            .enumerate()
            .find(|(_, r)| r.id == id)
        {
            Some((i, r)) if r.status() == RewardStatus::Available => (i, r.diamond_cost),
            _ => return false,
        };
        if !self.state.wallet.spend_diamonds(cost) {
            return false;
        }
        self.state.rewards[index].pending = true;
        true
    }

    /// A parent fulfills a reward. Tolerates a non-pending reward (treated as
    /// immediate fulfillment); a missing id is a no-op.
    pub fn approve_reward(&mut self, id: &str) {
        if let Some(reward) = self.state.rewards.iter_mut().find(|r| r.id == id) {
            reward.pending = false;
            reward.redeemed = true;
        }
    }
}
