//! Reward request/approval workflow integration tests
//!
//! Covers the three-state lifecycle, the up-front diamond debit, and the
//! no-refund forfeiture rule.

use habit_hero::rewards::RewardStatus;
use habit_hero::store::GameStore;

fn status_of(store: &GameStore, id: &str) -> RewardStatus {
    store
        .rewards()
        .iter()
        .find(|r| r.id == id)
        .expect("reward should exist")
        .status()
}

#[test]
fn test_unaffordable_request_changes_nothing() {
    let mut store = GameStore::new();
    let id = store.add_reward("Movie night".to_string(), 60, None);
    store.add_diamonds(59);

    assert!(!store.request_reward(&id));
    assert_eq!(store.diamonds(), 59);
    assert_eq!(status_of(&store, &id), RewardStatus::Available);
}

#[test]
fn test_request_debits_before_fulfillment() {
    let mut store = GameStore::new();
    let id = store.add_reward("Movie night".to_string(), 60, None);
    store.add_diamonds(80);

    assert!(store.request_reward(&id));
    assert_eq!(store.diamonds(), 20, "diamonds leave the wallet at request");
    assert_eq!(status_of(&store, &id), RewardStatus::Pending);

    store.approve_reward(&id);
    assert_eq!(store.diamonds(), 20, "fulfillment costs nothing extra");
    assert_eq!(status_of(&store, &id), RewardStatus::Redeemed);
}

#[test]
fn test_pending_reward_cannot_be_rerequested() {
    let mut store = GameStore::new();
    let id = store.add_reward("Cartoons".to_string(), 10, None);
    store.add_diamonds(30);

    assert!(store.request_reward(&id));
    assert!(!store.request_reward(&id));
    assert_eq!(store.diamonds(), 20, "only one debit");
}

#[test]
fn test_redeemed_reward_is_terminal() {
    let mut store = GameStore::new();
    let id = store.add_reward("Cartoons".to_string(), 10, None);
    store.add_diamonds(30);
    store.request_reward(&id);
    store.approve_reward(&id);

    assert!(!store.request_reward(&id));
    assert_eq!(store.diamonds(), 20);
    assert_eq!(status_of(&store, &id), RewardStatus::Redeemed);

    // Approving again keeps it redeemed, never pending
    store.approve_reward(&id);
    let reward = store.rewards().iter().find(|r| r.id == id).unwrap();
    assert!(reward.redeemed && !reward.pending);
}

#[test]
fn test_request_missing_reward_fails() {
    let mut store = GameStore::new();
    store.add_diamonds(100);
    assert!(!store.request_reward("not-a-real-id"));
    assert_eq!(store.diamonds(), 100);
}

#[test]
fn test_removing_pending_reward_forfeits_diamonds() {
    let mut store = GameStore::new();
    let id = store.add_reward("Cartoons".to_string(), 10, None);
    store.add_diamonds(10);
    store.request_reward(&id);
    assert_eq!(store.diamonds(), 0);

    store.remove_reward(&id);
    assert!(store.rewards().iter().all(|r| r.id != id));
    // No refund for the committed diamonds
    assert_eq!(store.diamonds(), 0);
}

#[test]
fn test_approve_without_request_is_immediate_fulfillment() {
    let mut store = GameStore::new();
    let id = store.add_reward("Surprise gift".to_string(), 40, None);
    store.add_diamonds(5);

    store.approve_reward(&id);
    assert_eq!(status_of(&store, &id), RewardStatus::Redeemed);
    // A gifted reward never touched the wallet
    assert_eq!(store.diamonds(), 5);
}

#[test]
fn test_pending_and_redeemed_never_both_set() {
    let mut store = GameStore::new();
    let id = store.add_reward("Cartoons".to_string(), 10, None);
    store.add_diamonds(10);

    store.request_reward(&id);
    store.approve_reward(&id);

    for reward in store.rewards() {
        assert!(
            !(reward.pending && reward.redeemed),
            "reward {} reached the forbidden state",
            reward.name
        );
    }
}
