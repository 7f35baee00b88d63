//! Progress store - the authoritative profile collection
//!
//! Every mutation works on a copy of the active profile, replaces it in the
//! collection and writes the whole collection back to storage. A failed write
//! is logged and otherwise ignored: the in-memory state stays authoritative
//! for the rest of the session.

use super::checker::pending_trophies;
use super::clock::{Clock, LocalClock};
use super::document::{self, STORAGE_KEY};
use super::profile::{Profile, Zone};
use super::ranks::{RankInfo, RankTier, default_ranks};
use super::report::ProgressReport;
use super::rules::append_unique;
use super::storage::{KeyValueStore, StorageError};
use super::trophies::{TrophyDefinition, default_trophies};

/// Default number of days kept in the activity history
pub const HISTORY_LIMIT: usize = 30;

/// Static tables the store evaluates profiles against
#[derive(Debug, Clone)]
pub struct ProgressRules {
    pub ranks: Vec<RankTier>,
    pub trophies: Vec<TrophyDefinition>,
    pub history_limit: usize,
}

impl Default for ProgressRules {
    fn default() -> Self {
        Self {
            ranks: default_ranks(),
            trophies: default_trophies(),
            history_limit: HISTORY_LIMIT,
        }
    }
}

/// Something a game screen may want to celebrate
#[derive(Debug, Clone, PartialEq)]
pub enum ProgressEvent {
    XpAwarded { amount: u32 },
    RankUp { from: RankInfo, to: RankInfo },
    TrophyEarned(TrophyDefinition),
}

/// Profile collection plus the active profile of the current session
pub struct ProgressStore<S: KeyValueStore, C: Clock = LocalClock> {
    storage: S,
    clock: C,
    rules: ProgressRules,
    profiles: Vec<Profile>,
    active: Option<String>,
}

impl<S: KeyValueStore> ProgressStore<S, LocalClock> {
    /// Open the store on `storage` using the local system date
    pub fn open(storage: S, rules: ProgressRules) -> Result<Self, StorageError> {
        Self::open_with_clock(storage, rules, LocalClock)
    }
}

impl<S: KeyValueStore, C: Clock> ProgressStore<S, C> {
    /// Open the store, loading any previously saved profiles
    pub fn open_with_clock(storage: S, rules: ProgressRules, clock: C) -> Result<Self, StorageError> {
        let profiles = match storage.get(STORAGE_KEY)? {
            Some(raw) => document::decode(&raw, rules.history_limit)?,
            None => Vec::new(),
        };
        tracing::debug!("Loaded {} profile(s)", profiles.len());

        Ok(Self {
            storage,
            clock,
            rules,
            profiles,
            active: None,
        })
    }

    pub fn storage(&self) -> &S {
        &self.storage
    }

    pub fn rules(&self) -> &ProgressRules {
        &self.rules
    }

    pub fn profiles(&self) -> &[Profile] {
        &self.profiles
    }

    pub fn active_profile(&self) -> Option<&Profile> {
        let id = self.active.as_deref()?;
        self.profiles.iter().find(|p| p.id == id)
    }

    // ========================================
    // SESSION
    // ========================================

    /// Make `id` the active profile. Unknown ids leave the session unchanged.
    pub fn select_profile(&mut self, id: &str) -> bool {
        if self.profiles.iter().any(|p| p.id == id) {
            self.active = Some(id.to_string());
            true
        } else {
            tracing::debug!("Cannot select unknown profile {id}");
            false
        }
    }

    pub fn clear_active(&mut self) {
        self.active = None;
    }

    /// Create, persist and activate a new profile
    pub fn create_profile(&mut self, name: &str, avatar: &str) -> Profile {
        let profile = Profile::new(name, avatar);
        tracing::info!("Created profile {} ({})", profile.name, profile.id);
        self.profiles.push(profile.clone());
        self.active = Some(profile.id.clone());
        self.persist();
        profile
    }

    // ========================================
    // MUTATIONS
    // ========================================

    /// Record XP for today and, when `attempt` is given, one accuracy attempt
    /// `(subject, correct)`. A zero amount still records the attempt.
    pub fn add_experience(&mut self, amount: u32, attempt: Option<(&str, bool)>) {
        let today = self.clock.today();
        let limit = self.rules.history_limit;
        let applied = self.update_active(|profile| {
            profile.log_activity(today, amount, limit);
            if let Some((subject, correct)) = attempt {
                profile.record_attempt(subject, correct);
            }
            profile.total_xp = profile.total_xp.saturating_add(amount);
        });
        if applied.is_some() {
            tracing::debug!("Added {amount} XP (attempt: {attempt:?})");
        }
    }

    /// Unlock `level` of `game_id`. Already unlocked levels are kept as is.
    pub fn unlock_level(&mut self, game_id: &str, level: u32) {
        if let Some(true) = self.update_active(|profile| profile.unlock(game_id, level)) {
            tracing::info!("Unlocked level {level} of {game_id}");
        }
    }

    /// Award a trophy. Returns true only the first time it is earned.
    pub fn award_trophy(&mut self, trophy_id: &str) -> bool {
        match self.active_profile() {
            Some(profile) if !profile.has_trophy(trophy_id) => {}
            _ => return false,
        }
        let earned = self
            .update_active(|profile| append_unique(&mut profile.trophies, trophy_id.to_string()))
            .unwrap_or(false);
        if earned {
            tracing::info!("Trophy earned: {trophy_id}");
        }
        earned
    }

    /// Persisted zone preference of the active profile
    pub fn set_current_zone(&mut self, zone: Zone) {
        self.update_active(|profile| profile.current_zone = Some(zone));
    }

    /// Award every trophy whose condition the active profile now meets.
    /// Returns the newly earned definitions.
    pub fn check_trophies(&mut self) -> Vec<TrophyDefinition> {
        let Some(profile) = self.active_profile() else {
            return Vec::new();
        };
        let pending: Vec<TrophyDefinition> =
            pending_trophies(profile, &self.rules.trophies, self.clock.today())
                .into_iter()
                .cloned()
                .collect();

        pending
            .into_iter()
            .filter(|trophy| self.award_trophy(&trophy.id))
            .collect()
    }

    /// Apply one answered question and report what happened
    pub fn record_answer(&mut self, amount: u32, attempt: Option<(&str, bool)>) -> Vec<ProgressEvent> {
        if self.active_profile().is_none() {
            return Vec::new();
        }
        let mut events = Vec::new();
        let old_rank = self.rank();

        self.add_experience(amount, attempt);
        if amount > 0 {
            events.push(ProgressEvent::XpAwarded { amount });
        }

        let new_rank = self.rank();
        if new_rank.tier > old_rank.tier {
            tracing::info!("Rank up: {} -> {}", old_rank.name, new_rank.name);
            events.push(ProgressEvent::RankUp {
                from: old_rank,
                to: new_rank,
            });
        }

        events.extend(self.check_trophies().into_iter().map(ProgressEvent::TrophyEarned));
        events
    }

    // ========================================
    // QUERIES
    // ========================================

    /// Rank of the active profile (0 XP when there is none)
    pub fn rank(&self) -> RankInfo {
        let xp = self.active_profile().map(|p| p.total_xp).unwrap_or(0);
        RankInfo::for_xp(&self.rules.ranks, xp)
    }

    /// Earned trophies of the active profile. Ids missing from the catalog
    /// are skipped.
    pub fn trophies(&self) -> Vec<&TrophyDefinition> {
        let Some(profile) = self.active_profile() else {
            return Vec::new();
        };
        profile
            .trophies
            .iter()
            .filter_map(|id| TrophyDefinition::find(&self.rules.trophies, id))
            .collect()
    }

    pub fn is_level_unlocked(&self, game_id: &str, level: u32) -> bool {
        self.active_profile()
            .is_some_and(|p| p.is_unlocked(game_id, level))
    }

    /// Parents' summary of the active profile
    pub fn report(&self) -> Option<ProgressReport> {
        self.active_profile()
            .map(|p| ProgressReport::for_profile(p, &self.rules))
    }

    // ========================================
    // INTERNALS
    // ========================================

    /// Apply `f` to a copy of the active profile, swap it into the collection
    /// and persist. `None` if there is no active profile.
    fn update_active<T>(&mut self, f: impl FnOnce(&mut Profile) -> T) -> Option<T> {
        let id = self.active.as_deref()?;
        let index = self.profiles.iter().position(|p| p.id == id)?;

        let mut updated = self.profiles[index].clone();
        let result = f(&mut updated);
        self.profiles[index] = updated;

        self.persist();
        Some(result)
    }

    /// Best-effort write of the whole collection
    fn persist(&self) {
        let result = document::encode(&self.profiles)
            .and_then(|raw| self.storage.set(STORAGE_KEY, &raw));
        if let Err(e) = result {
            tracing::warn!("Failed to persist profiles: {}", e);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::progress::clock::FixedClock;
    use crate::progress::storage::MemoryStorage;
    use chrono::NaiveDate;

    fn store() -> (ProgressStore<MemoryStorage, FixedClock>, FixedClock) {
        let clock = FixedClock::new(NaiveDate::from_ymd_opt(2024, 9, 1).unwrap());
        let store = ProgressStore::open_with_clock(
            MemoryStorage::new(),
            ProgressRules::default(),
            clock.clone(),
        )
        .unwrap();
        (store, clock)
    }

    /// Storage that refuses every write
    struct ReadOnlyStorage;

    impl KeyValueStore for ReadOnlyStorage {
        fn get(&self, _key: &str) -> Result<Option<String>, StorageError> {
            Ok(None)
        }

        fn set(&self, _key: &str, _value: &str) -> Result<(), StorageError> {
            Err(StorageError::Corrupt("quota exceeded".to_string()))
        }
    }

    #[test]
    fn test_mutations_without_active_profile_are_noops() {
        let (mut store, _) = store();
        store.add_experience(10, Some(("math", true)));
        store.unlock_level("sorter", 2);
        assert!(!store.award_trophy("xp_100"));
        assert!(store.check_trophies().is_empty());
        assert!(store.record_answer(10, None).is_empty());
        assert!(store.trophies().is_empty());
        assert_eq!(store.rank().min_xp, 0);
        assert!(store.report().is_none());
        assert_eq!(store.storage().get(STORAGE_KEY).unwrap(), None);
    }

    #[test]
    fn test_create_profile_activates_and_persists() {
        let (mut store, _) = store();
        let profile = store.create_profile("Noa", "🦁");
        assert_eq!(store.active_profile(), Some(&profile));
        let raw = store.storage().get(STORAGE_KEY).unwrap().unwrap();
        assert!(raw.contains(&profile.id));
    }

    #[test]
    fn test_math_scenario() {
        let (mut store, _) = store();
        store.create_profile("Noa", "🦁");
        store.add_experience(10, Some(("math", true)));
        store.add_experience(5, Some(("math", false)));

        let profile = store.active_profile().unwrap();
        assert_eq!(profile.total_xp, 15);
        let math = profile.accuracy_by_subject["math"];
        assert_eq!((math.correct, math.total), (1, 2));
        assert_eq!(profile.activity_history.len(), 1);
        assert_eq!(profile.activity_history[0].xp, 15);
    }

    #[test]
    fn test_zero_xp_attempts_still_count() {
        let (mut store, _) = store();
        store.create_profile("Noa", "🦁");
        store.add_experience(0, Some(("math", false)));
        store.add_experience(0, Some(("math", true)));

        let profile = store.active_profile().unwrap();
        assert_eq!(profile.total_xp, 0);
        let math = profile.accuracy_by_subject["math"];
        assert_eq!((math.correct, math.total), (1, 2));
        assert_eq!(profile.activity_history.len(), 1);
        assert_eq!(profile.activity_history[0].xp, 0);
        assert_eq!(
            profile.activity_history[0].date,
            NaiveDate::from_ymd_opt(2024, 9, 1).unwrap()
        );
    }

    #[test]
    fn test_history_capped_one_entry_per_day() {
        let (mut store, clock) = store();
        store.create_profile("Noa", "🦁");
        for _ in 0..40 {
            store.add_experience(1, None);
            store.add_experience(1, None);
            clock.advance(1);
        }
        let profile = store.active_profile().unwrap();
        assert_eq!(profile.activity_history.len(), HISTORY_LIMIT);
        assert!(profile.activity_history.iter().all(|e| e.xp == 2));
        assert_eq!(profile.total_xp, 80);
    }

    #[test]
    fn test_unlock_level_idempotent() {
        let (mut store, _) = store();
        store.create_profile("Noa", "🦁");
        store.unlock_level("sorter", 2);
        store.unlock_level("sorter", 2);
        let profile = store.active_profile().unwrap();
        assert_eq!(profile.unlocked_levels["sorter"], vec![1, 2]);
        assert!(store.is_level_unlocked("sorter", 2));
        assert!(!store.is_level_unlocked("sorter", 3));
    }

    #[test]
    fn test_award_trophy_once() {
        let (mut store, _) = store();
        store.create_profile("Noa", "🦁");
        assert!(store.award_trophy("xp_100"));
        assert!(!store.award_trophy("xp_100"));
        assert_eq!(store.trophies().len(), 1);
    }

    #[test]
    fn test_unknown_trophies_are_filtered() {
        let (mut store, _) = store();
        store.create_profile("Noa", "🦁");
        assert!(store.award_trophy("retired_trophy"));
        assert!(store.award_trophy("xp_100"));
        let names: Vec<_> = store.trophies().iter().map(|t| t.id.as_str()).collect();
        assert_eq!(names, vec!["xp_100"]);
    }

    #[test]
    fn test_rank_scenario() {
        let (mut store, _) = store();
        store.create_profile("Noa", "🦁");
        store.add_experience(150, None);
        let rank = store.rank();
        assert_eq!(rank.min_xp, 100);
        assert_eq!(rank.next_rank_xp, 300);
    }

    #[test]
    fn test_record_answer_events() {
        let (mut store, _) = store();
        store.create_profile("Noa", "🦁");
        let events = store.record_answer(120, Some(("math", true)));

        assert_eq!(events[0], ProgressEvent::XpAwarded { amount: 120 });
        assert!(matches!(&events[1], ProgressEvent::RankUp { to, .. } if to.name == "ארד"));
        let trophies: Vec<_> = events
            .iter()
            .filter_map(|e| match e {
                ProgressEvent::TrophyEarned(t) => Some(t.id.as_str()),
                _ => None,
            })
            .collect();
        assert_eq!(trophies, vec!["first_steps", "xp_100"]);

        // Nothing new the second time
        let events = store.record_answer(0, Some(("math", false)));
        assert!(events.is_empty());
    }

    #[test]
    fn test_select_profile() {
        let (mut store, _) = store();
        let first = store.create_profile("Noa", "🦁");
        let second = store.create_profile("Dan", "🐶");
        assert_eq!(store.active_profile().unwrap().id, second.id);

        assert!(store.select_profile(&first.id));
        store.add_experience(7, None);
        assert!(!store.select_profile("missing"));
        assert_eq!(store.active_profile().unwrap().id, first.id);

        assert_eq!(store.profiles()[0].total_xp, 7);
        assert_eq!(store.profiles()[1].total_xp, 0);

        store.clear_active();
        assert!(store.active_profile().is_none());
    }

    #[test]
    fn test_set_current_zone() {
        let (mut store, _) = store();
        store.create_profile("Noa", "🦁");
        store.set_current_zone(Zone::B);
        assert_eq!(store.active_profile().unwrap().current_zone, Some(Zone::B));
    }

    #[test]
    fn test_failed_writes_keep_memory_state() {
        let mut store = ProgressStore::open(ReadOnlyStorage, ProgressRules::default()).unwrap();
        store.create_profile("Noa", "🦁");
        store.add_experience(25, Some(("logic", true)));
        assert!(store.award_trophy("first_steps"));
        assert_eq!(store.active_profile().unwrap().total_xp, 25);
    }
}
