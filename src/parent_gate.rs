//! Arithmetic parental lock for the management panel.
//!
//! A multiplication question with both factors in [2,9] gates access to
//! task/reward/settings management. The unlocked flag lives only in memory
//! for the current session; the state document is never involved, and the
//! core registries do not check it — the UI layer does.

use rand::Rng;

use crate::constants::{GATE_FACTOR_MAX, GATE_FACTOR_MIN};

/// One multiplication question.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GateChallenge {
    a: u32,
    b: u32,
}

impl GateChallenge {
    pub fn generate(rng: &mut impl Rng) -> Self {
        Self {
            a: rng.gen_range(GATE_FACTOR_MIN..=GATE_FACTOR_MAX),
            b: rng.gen_range(GATE_FACTOR_MIN..=GATE_FACTOR_MAX),
        }
    }

    /// Question text as shown on the lock screen.
    pub fn prompt(&self) -> String {
        format!("{} × {} = ?", self.a, self.b)
    }

    /// Checks a typed answer. Non-numeric input never matches.
    pub fn check(&self, answer: &str) -> bool {
        answer
            .trim()
            .parse::<u32>()
            .map(|n| n == self.a * self.b)
            .unwrap_or(false)
    }
}

/// Session lock state for the parent panel.
#[derive(Debug, Clone)]
pub struct ParentGate {
    unlocked: bool,
    challenge: GateChallenge,
}

impl ParentGate {
    pub fn new(rng: &mut impl Rng) -> Self {
        Self {
            unlocked: false,
            challenge: GateChallenge::generate(rng),
        }
    }

    pub fn is_unlocked(&self) -> bool {
        self.unlocked
    }

    pub fn challenge(&self) -> &GateChallenge {
        &self.challenge
    }

    /// Submits an answer. A correct one unlocks the panel; a wrong one keeps
    /// it locked and swaps in a fresh question.
    pub fn submit(&mut self, answer: &str, rng: &mut impl Rng) -> bool {
        if self.challenge.check(answer) {
            self.unlocked = true;
            true
        } else {
            self.challenge = GateChallenge::generate(rng);
            false
        }
    }

    /// Relocks the panel and rolls a new question for the next attempt.
    pub fn lock(&mut self, rng: &mut impl Rng) {
        self.unlocked = false;
        self.challenge = GateChallenge::generate(rng);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand_chacha::ChaCha8Rng;

    fn rng() -> ChaCha8Rng {
        ChaCha8Rng::seed_from_u64(7)
    }

    #[test]
    fn test_factors_within_range() {
        let mut rng = rng();
        for _ in 0..100 {
            let challenge = GateChallenge::generate(&mut rng);
            assert!((GATE_FACTOR_MIN..=GATE_FACTOR_MAX).contains(&challenge.a));
            assert!((GATE_FACTOR_MIN..=GATE_FACTOR_MAX).contains(&challenge.b));
        }
    }

    #[test]
    fn test_correct_answer_accepted() {
        let challenge = GateChallenge { a: 7, b: 8 };
        assert!(challenge.check("56"));
        assert!(challenge.check("  56  "));
    }

    #[test]
    fn test_wrong_and_malformed_answers_rejected() {
        let challenge = GateChallenge { a: 7, b: 8 };
        assert!(!challenge.check("55"));
        assert!(!challenge.check(""));
        assert!(!challenge.check("abc"));
        assert!(!challenge.check("-56"));
    }

    #[test]
    fn test_prompt_shows_factors() {
        let challenge = GateChallenge { a: 3, b: 4 };
        assert_eq!(challenge.prompt(), "3 × 4 = ?");
    }

    #[test]
    fn test_submit_unlocks_on_correct() {
        let mut rng = rng();
        let mut gate = ParentGate::new(&mut rng);
        let answer = (gate.challenge().a * gate.challenge().b).to_string();
        assert!(gate.submit(&answer, &mut rng));
        assert!(gate.is_unlocked());
    }

    #[test]
    fn test_submit_regenerates_on_wrong() {
        let mut rng = rng();
        let mut gate = ParentGate::new(&mut rng);
        // 2*2..9*9 never reaches 100, so this is always wrong
        assert!(!gate.submit("100", &mut rng));
        assert!(!gate.is_unlocked());
        // A correct answer to the replacement question still unlocks
        let answer = (gate.challenge().a * gate.challenge().b).to_string();
        assert!(gate.submit(&answer, &mut rng));
        assert!(gate.is_unlocked());
    }

    #[test]
    fn test_lock_relocks_and_rerolls() {
        let mut rng = rng();
        let mut gate = ParentGate::new(&mut rng);
        let answer = (gate.challenge().a * gate.challenge().b).to_string();
        gate.submit(&answer, &mut rng);
        assert!(gate.is_unlocked());

        gate.lock(&mut rng);
        assert!(!gate.is_unlocked());
    }
}
