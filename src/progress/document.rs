//! Persisted profile collection
//!
//! Layout under [`STORAGE_KEY`]:
//!
//! ```json
//! { "version": 1, "profiles": [ { "id": "...", "totalXP": 0, ... } ] }
//! ```
//!
//! Older data stored a bare array of profiles. It is read as version 0 and
//! migrated on load.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};
use serde_json::Value;

use super::profile::{ActivityEntry, Profile};
use super::storage::StorageError;

/// Fixed key of the profile collection
pub const STORAGE_KEY: &str = "lomdim_profiles";

/// Current document version
pub const DOCUMENT_VERSION: u32 = 1;

#[derive(Serialize)]
struct DocumentRef<'a> {
    version: u32,
    profiles: &'a [Profile],
}

#[derive(Deserialize)]
struct Document {
    profiles: Vec<Profile>,
}

/// Serialize the full collection
pub fn encode(profiles: &[Profile]) -> Result<String, StorageError> {
    let doc = DocumentRef {
        version: DOCUMENT_VERSION,
        profiles,
    };
    Ok(serde_json::to_string(&doc)?)
}

/// Parse a stored collection, migrating older layouts and sanitizing every
/// profile with `history_limit`.
pub fn decode(raw: &str, history_limit: usize) -> Result<Vec<Profile>, StorageError> {
    let value: Value =
        serde_json::from_str(raw).map_err(|e| StorageError::Corrupt(e.to_string()))?;

    let mut profiles = match value {
        Value::Array(_) => {
            tracing::info!("Migrating unversioned profile document to version {DOCUMENT_VERSION}");
            serde_json::from_value::<Vec<Profile>>(value)
                .map_err(|e| StorageError::Corrupt(e.to_string()))?
        }
        Value::Object(_) => {
            let version = value
                .get("version")
                .and_then(Value::as_u64)
                .ok_or_else(|| StorageError::Corrupt("missing document version".to_string()))?;
            let version = u32::try_from(version)
                .map_err(|_| StorageError::Corrupt(format!("invalid version {version}")))?;
            if version > DOCUMENT_VERSION {
                return Err(StorageError::UnsupportedVersion {
                    found: version,
                    supported: DOCUMENT_VERSION,
                });
            }
            serde_json::from_value::<Document>(value)
                .map_err(|e| StorageError::Corrupt(e.to_string()))?
                .profiles
        }
        _ => {
            return Err(StorageError::Corrupt(
                "expected an object or an array of profiles".to_string(),
            ));
        }
    };

    for profile in &mut profiles {
        if sanitize(profile, history_limit) {
            tracing::warn!("Repaired inconsistent stored profile {}", profile.id);
        }
    }
    Ok(profiles)
}

/// Restore the profile invariants. Returns true if anything changed.
pub fn sanitize(profile: &mut Profile, history_limit: usize) -> bool {
    let before = profile.clone();

    // One entry per day, oldest first, capped
    let mut by_day: BTreeMap<_, u32> = BTreeMap::new();
    for entry in &profile.activity_history {
        let xp = by_day.entry(entry.date).or_default();
        *xp = xp.saturating_add(entry.xp);
    }
    let mut history: Vec<ActivityEntry> = by_day
        .into_iter()
        .map(|(date, xp)| ActivityEntry { date, xp })
        .collect();
    if history.len() > history_limit {
        history.drain(..history.len() - history_limit);
    }
    profile.activity_history = history;

    for accuracy in profile.accuracy_by_subject.values_mut() {
        accuracy.correct = accuracy.correct.min(accuracy.total);
    }

    dedup_in_order(&mut profile.trophies);

    for levels in profile.unlocked_levels.values_mut() {
        dedup_in_order(levels);
        if !levels.contains(&1) {
            levels.insert(0, 1);
        }
    }

    *profile != before
}

fn dedup_in_order<T: PartialEq + Clone>(items: &mut Vec<T>) {
    let mut kept: Vec<T> = Vec::with_capacity(items.len());
    for item in items.drain(..) {
        if !kept.contains(&item) {
            kept.push(item);
        }
    }
    *items = kept;
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::progress::profile::Accuracy;
    use chrono::NaiveDate;

    fn day(d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(2024, 6, d).unwrap()
    }

    #[test]
    fn test_encode_decode() {
        let mut profile = Profile::new("Noa", "🦁");
        profile.total_xp = 42;
        profile.log_activity(day(1), 42, 30);
        let raw = encode(std::slice::from_ref(&profile)).unwrap();
        assert!(raw.contains("\"version\":1"));
        assert_eq!(decode(&raw, 30).unwrap(), vec![profile]);
    }

    #[test]
    fn test_decode_legacy_array() {
        let raw = r#"[{
            "id": "1700000000000",
            "name": "Dana",
            "avatar": "🐱",
            "totalXP": 35,
            "currentZone": "b",
            "unlockedLevels": {"sorter": [1, 2]},
            "themePreference": "dino",
            "activityHistory": [{"date": "2024-06-01", "xp": 35}],
            "accuracyBySubject": {"math": {"correct": 2, "total": 3}}
        }]"#;
        let profiles = decode(raw, 30).unwrap();
        assert_eq!(profiles.len(), 1);
        let p = &profiles[0];
        assert_eq!(p.total_xp, 35);
        assert_eq!(p.unlocked_levels["sorter"], vec![1, 2]);
        assert!(p.trophies.is_empty());
        assert_eq!(p.accuracy_by_subject["math"], Accuracy { correct: 2, total: 3 });
    }

    #[test]
    fn test_decode_rejects_future_version() {
        let err = decode(r#"{"version": 9, "profiles": []}"#, 30).unwrap_err();
        assert!(matches!(
            err,
            StorageError::UnsupportedVersion { found: 9, supported: 1 }
        ));
    }

    #[test]
    fn test_decode_rejects_garbage() {
        assert!(matches!(decode("not json", 30), Err(StorageError::Corrupt(_))));
        assert!(matches!(decode("42", 30), Err(StorageError::Corrupt(_))));
        assert!(matches!(decode("{}", 30), Err(StorageError::Corrupt(_))));
    }

    #[test]
    fn test_sanitize_repairs_invariants() {
        let mut p = Profile::new("Noa", "🦁");
        p.activity_history = vec![
            ActivityEntry { date: day(3), xp: 5 },
            ActivityEntry { date: day(1), xp: 1 },
            ActivityEntry { date: day(3), xp: 5 },
            ActivityEntry { date: day(2), xp: 2 },
        ];
        p.accuracy_by_subject
            .insert("math".to_string(), Accuracy { correct: 9, total: 4 });
        p.trophies = vec!["a".into(), "b".into(), "a".into()];
        p.unlocked_levels.insert("memory".to_string(), vec![3, 2, 3]);

        assert!(sanitize(&mut p, 2));
        assert_eq!(
            p.activity_history,
            vec![
                ActivityEntry { date: day(2), xp: 2 },
                ActivityEntry { date: day(3), xp: 10 },
            ]
        );
        assert_eq!(p.accuracy_by_subject["math"], Accuracy { correct: 4, total: 4 });
        assert_eq!(p.trophies, vec!["a".to_string(), "b".to_string()]);
        assert_eq!(p.unlocked_levels["memory"], vec![1, 3, 2]);

        assert!(!sanitize(&mut p, 2));
    }
}
