//! Progression: profiles, XP, ranks, level unlocks and trophies
//!
//! # Usage
//!
//! ```ignore
//! let mut store = ProgressStore::open(FileStorage::new(data_dir), ProgressRules::default())?;
//! store.create_profile("Noa", "🦁");
//!
//! // A game screen reports an answer
//! for event in store.record_answer(XpRewards::SEQUENCE, Some(("logic", true))) {
//!     // celebrate rank ups and new trophies
//! }
//! ```

mod checker;
mod clock;
mod document;
mod profile;
mod ranks;
mod report;
mod rewards;
mod rules;
mod storage;
mod store;
mod trophies;

pub use checker::{daily_streak, is_met, pending_trophies};
pub use clock::{Clock, FixedClock, LocalClock};
pub use document::{DOCUMENT_VERSION, STORAGE_KEY};
pub use profile::{Accuracy, ActivityEntry, Profile, Theme, Zone};
pub use ranks::{RankInfo, RankTier, default_ranks, validate_ranks};
pub use report::{ProgressReport, SubjectAccuracy};
pub use rewards::XpRewards;
pub use rules::{append_unique, threshold_index};
pub use storage::{FileStorage, KeyValueStore, MemoryStorage, StorageError};
pub use store::{HISTORY_LIMIT, ProgressEvent, ProgressRules, ProgressStore};
pub use trophies::{TrophyCondition, TrophyDefinition, default_trophies, validate_trophies};
