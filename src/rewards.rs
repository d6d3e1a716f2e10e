//! Redeemable reward records.

use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Lifecycle of a reward, derived from its two flags.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RewardStatus {
    /// Can be requested; no diamonds committed.
    Available,
    /// Diamonds already debited, awaiting parental fulfillment.
    Pending,
    /// Fulfilled. Terminal.
    Redeemed,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Reward {
    pub id: String,
    pub name: String,
    pub diamond_cost: u32,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub icon: Option<String>,
    #[serde(default)]
    pub pending: bool,
    #[serde(default)]
    pub redeemed: bool,
}

impl Reward {
    pub fn new(name: String, diamond_cost: u32, icon: Option<String>) -> Self {
        Self {
            id: Uuid::new_v4().to_string(),
            name,
            diamond_cost,
            icon,
            pending: false,
            redeemed: false,
        }
    }

    /// Current lifecycle state. `pending && redeemed` is unreachable through
    /// the store operations; a hand-edited document in that shape reads as
    /// redeemed, the terminal state.
    pub fn status(&self) -> RewardStatus {
        if self.redeemed {
            RewardStatus::Redeemed
        } else if self.pending {
            RewardStatus::Pending
        } else {
            RewardStatus::Available
        }
    }
}
