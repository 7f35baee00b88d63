//! Integration tests for the file-backed progress store

mod common;

use proptest::prelude::*;
use tempfile::TempDir;

use lomdim::progress::{
    FileStorage, FixedClock, KeyValueStore, MemoryStorage, ProgressRules, ProgressStore,
    RankInfo, STORAGE_KEY, StorageError, default_ranks,
};

use common::{open_store, start_day};

#[test]
fn test_progress_survives_reopen() {
    let dir = TempDir::new().expect("Failed to create temp dir");
    let clock = FixedClock::new(start_day());

    let id = {
        let mut store = open_store(&dir, &clock);
        let profile = store.create_profile("Noa", "🦁");
        store.add_experience(10, Some(("math", true)));
        store.add_experience(5, Some(("math", false)));
        store.unlock_level("sorter", 2);
        assert!(store.award_trophy("first_steps"));
        profile.id
    };

    let mut store = open_store(&dir, &clock);
    assert!(store.active_profile().is_none());
    assert!(store.select_profile(&id));

    let profile = store.active_profile().expect("profile selected");
    assert_eq!(profile.total_xp, 15);
    assert_eq!(profile.accuracy_by_subject["math"].correct, 1);
    assert_eq!(profile.accuracy_by_subject["math"].total, 2);
    assert_eq!(profile.unlocked_levels["sorter"], vec![1, 2]);

    // Trophy stays earned across sessions
    assert!(!store.award_trophy("first_steps"));
    assert_eq!(store.trophies().len(), 1);
}

#[test]
fn test_profiles_are_independent() {
    let dir = TempDir::new().expect("Failed to create temp dir");
    let clock = FixedClock::new(start_day());
    let mut store = open_store(&dir, &clock);

    let noa = store.create_profile("Noa", "🦁");
    store.add_experience(40, None);
    let dan = store.create_profile("Dan", "🐶");
    store.add_experience(3, None);

    let reopened = open_store(&dir, &clock);
    let xp: Vec<_> = reopened
        .profiles()
        .iter()
        .map(|p| (p.id.clone(), p.total_xp))
        .collect();
    assert_eq!(xp, vec![(noa.id, 40), (dan.id, 3)]);
}

#[test]
fn test_streak_trophy_over_simulated_days() {
    let dir = TempDir::new().expect("Failed to create temp dir");
    let clock = FixedClock::new(start_day());
    let mut store = open_store(&dir, &clock);
    store.create_profile("Noa", "🦁");

    let mut earned = Vec::new();
    for _ in 0..3 {
        store.add_experience(5, Some(("logic", true)));
        earned.extend(store.check_trophies().into_iter().map(|t| t.id));
        clock.advance(1);
    }
    assert!(earned.contains(&"streak_3".to_string()));

    // A gap does not take the trophy away
    clock.advance(5);
    store.add_experience(5, None);
    assert!(store.trophies().iter().any(|t| t.id == "streak_3"));
}

#[test]
fn test_legacy_document_is_migrated() {
    let dir = TempDir::new().expect("Failed to create temp dir");
    let storage = FileStorage::new(dir.path());
    storage
        .set(
            STORAGE_KEY,
            r#"[{"id":"1","name":"Dana","avatar":"🐱","totalXP":650,"currentZone":null,
                "unlockedLevels":{},"themePreference":"space","activityHistory":[],
                "accuracyBySubject":{}}]"#,
        )
        .expect("write legacy doc");

    let clock = FixedClock::new(start_day());
    let mut store = open_store(&dir, &clock);
    assert!(store.select_profile("1"));
    assert_eq!(store.rank().name, "זהב");

    // First write upgrades the stored layout
    store.add_experience(1, None);
    let raw = storage.get(STORAGE_KEY).expect("read").expect("present");
    assert!(raw.starts_with("{\"version\":1"));
}

#[test]
fn test_corrupt_document_is_reported() {
    let storage = MemoryStorage::new();
    storage.set(STORAGE_KEY, "{not json").expect("write");
    let result = ProgressStore::open(storage, ProgressRules::default());
    assert!(matches!(result, Err(StorageError::Corrupt(_))));
}

proptest! {
    #[test]
    fn total_xp_is_sum_of_amounts(amounts in prop::collection::vec(0u32..500, 0..60)) {
        let mut store = ProgressStore::open(MemoryStorage::new(), ProgressRules::default()).unwrap();
        store.create_profile("Noa", "🦁");
        for amount in &amounts {
            store.add_experience(*amount, None);
        }
        let expected: u32 = amounts.iter().sum();
        prop_assert_eq!(store.active_profile().unwrap().total_xp, expected);
    }

    #[test]
    fn history_is_capped_and_unique(steps in prop::collection::vec((0u64..3, 1u32..50), 0..120)) {
        let clock = FixedClock::new(start_day());
        let mut store = ProgressStore::open_with_clock(
            MemoryStorage::new(),
            ProgressRules::default(),
            clock.clone(),
        ).unwrap();
        store.create_profile("Noa", "🦁");
        for (advance, amount) in steps {
            clock.advance(advance);
            store.add_experience(amount, Some(("math", amount % 2 == 0)));
        }

        let profile = store.active_profile().unwrap();
        prop_assert!(profile.activity_history.len() <= 30);
        for pair in profile.activity_history.windows(2) {
            prop_assert!(pair[0].date < pair[1].date);
        }
        let math = profile.accuracy_by_subject.get("math").copied().unwrap_or_default();
        prop_assert!(math.correct <= math.total);
    }

    #[test]
    fn rank_is_monotonic(a in 0u32..5000, b in 0u32..5000) {
        let ranks = default_ranks();
        let (low, high) = if a <= b { (a, b) } else { (b, a) };
        let low_rank = RankInfo::for_xp(&ranks, low);
        let high_rank = RankInfo::for_xp(&ranks, high);
        prop_assert!(low_rank.tier <= high_rank.tier);
        prop_assert!(high_rank.min_xp <= high);
        if high_rank.is_top_rank() {
            prop_assert_eq!(high_rank.next_rank_xp, high_rank.min_xp);
        } else {
            prop_assert!(high < high_rank.next_rank_xp);
        }
    }
}
