//! The dual-currency ledger: attack charges and diamonds.

use serde::{Deserialize, Serialize};

/// Holds the two spendable balances. Unsigned fields make a negative balance
/// unrepresentable; every decrement goes through a sufficiency check.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Wallet {
    #[serde(default)]
    pub attacks: u32,
    #[serde(default)]
    pub diamonds: u32,
}

impl Wallet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Credits attack charges unconditionally.
    pub fn add_attacks(&mut self, amount: u32) {
        self.attacks = self.attacks.saturating_add(amount);
    }

    /// Credits diamonds unconditionally.
    pub fn add_diamonds(&mut self, amount: u32) {
        self.diamonds = self.diamonds.saturating_add(amount);
    }

    /// Consumes a single attack charge. Fails without touching the balance
    /// when none are left; this is the sole gate on combat input.
    pub fn use_attack(&mut self) -> bool {
        if self.attacks > 0 {
            self.attacks -= 1;
            true
        } else {
            false
        }
    }

    /// Spends `amount` diamonds, all or nothing.
    pub fn spend_diamonds(&mut self, amount: u32) -> bool {
        if self.diamonds >= amount {
            self.diamonds -= amount;
            true
        } else {
            false
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_wallet_is_empty() {
        let wallet = Wallet::new();
        assert_eq!(wallet.attacks, 0);
        assert_eq!(wallet.diamonds, 0);
    }

    #[test]
    fn test_add_attacks() {
        let mut wallet = Wallet::new();
        wallet.add_attacks(50);
        wallet.add_attacks(0);
        wallet.add_attacks(30);
        assert_eq!(wallet.attacks, 80);
    }

    #[test]
    fn test_use_attack_decrements() {
        let mut wallet = Wallet::new();
        wallet.add_attacks(2);
        assert!(wallet.use_attack());
        assert_eq!(wallet.attacks, 1);
        assert!(wallet.use_attack());
        assert_eq!(wallet.attacks, 0);
    }

    #[test]
    fn test_use_attack_fails_at_zero() {
        let mut wallet = Wallet::new();
        assert!(!wallet.use_attack());
        assert_eq!(wallet.attacks, 0);

        // Still fails after a drained balance, never wraps
        wallet.add_attacks(1);
        assert!(wallet.use_attack());
        assert!(!wallet.use_attack());
        assert_eq!(wallet.attacks, 0);
    }

    #[test]
    fn test_spend_diamonds_sufficient() {
        let mut wallet = Wallet::new();
        wallet.add_diamonds(30);
        assert!(wallet.spend_diamonds(10));
        assert_eq!(wallet.diamonds, 20);
        assert!(wallet.spend_diamonds(20));
        assert_eq!(wallet.diamonds, 0);
    }

    #[test]
    fn test_spend_diamonds_insufficient_is_no_op() {
        let mut wallet = Wallet::new();
        wallet.add_diamonds(9);
        assert!(!wallet.spend_diamonds(10));
        assert_eq!(wallet.diamonds, 9);
    }

    #[test]
    fn test_spend_exact_balance() {
        let mut wallet = Wallet::new();
        wallet.add_diamonds(10);
        assert!(wallet.spend_diamonds(10));
        assert_eq!(wallet.diamonds, 0);
    }

    #[test]
    fn test_add_saturates_instead_of_overflowing() {
        let mut wallet = Wallet::new();
        wallet.add_attacks(u32::MAX);
        wallet.add_attacks(10);
        assert_eq!(wallet.attacks, u32::MAX);
    }
}
