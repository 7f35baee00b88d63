//! Player profile document
//!
//! The persisted shape uses the field names of the stored JSON document
//! (`totalXP`, `unlockedLevels`, ...), so renames here are breaking changes.

use std::collections::BTreeMap;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use super::rules::append_unique;

/// Age-tiered game zone a profile last played in
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Zone {
    A,
    B,
}

/// Visual theme preference
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Theme {
    #[default]
    Space,
    Dino,
    Unicorn,
}

/// XP earned on one calendar day
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ActivityEntry {
    pub date: NaiveDate,
    pub xp: u32,
}

/// Attempt counters for one subject
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Accuracy {
    pub correct: u32,
    pub total: u32,
}

impl Accuracy {
    pub fn record(&mut self, correct: bool) {
        self.total = self.total.saturating_add(1);
        if correct {
            self.correct = self.correct.saturating_add(1);
        }
    }

    /// Rounded percentage of correct attempts (0 when nothing was attempted)
    pub fn percent(&self) -> u32 {
        if self.total == 0 {
            return 0;
        }
        ((self.correct as f64 / self.total as f64) * 100.0).round() as u32
    }
}

/// One player's persisted progress
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Profile {
    pub id: String,
    pub name: String,
    pub avatar: String,
    #[serde(rename = "totalXP")]
    pub total_xp: u32,
    #[serde(default)]
    pub current_zone: Option<Zone>,
    /// Game id -> unlocked levels in unlock order. Level 1 is implicit.
    #[serde(default)]
    pub unlocked_levels: BTreeMap<String, Vec<u32>>,
    #[serde(default)]
    pub theme_preference: Theme,
    /// Oldest first, at most one entry per day
    #[serde(default)]
    pub activity_history: Vec<ActivityEntry>,
    #[serde(default)]
    pub accuracy_by_subject: BTreeMap<String, Accuracy>,
    #[serde(default)]
    pub trophies: Vec<String>,
}

impl Profile {
    /// Fresh profile with all counters zeroed and a new UUID
    pub fn new(name: impl Into<String>, avatar: impl Into<String>) -> Self {
        Self {
            id: uuid::Uuid::new_v4().to_string(),
            name: name.into(),
            avatar: avatar.into(),
            total_xp: 0,
            current_zone: None,
            unlocked_levels: BTreeMap::new(),
            theme_preference: Theme::default(),
            activity_history: Vec::new(),
            accuracy_by_subject: BTreeMap::new(),
            trophies: Vec::new(),
        }
    }

    /// Add XP to the entry for `day`, creating it if needed, and keep only
    /// the newest `limit` entries.
    pub fn log_activity(&mut self, day: NaiveDate, amount: u32, limit: usize) {
        match self.activity_history.iter_mut().find(|e| e.date == day) {
            Some(entry) => entry.xp = entry.xp.saturating_add(amount),
            None => self.activity_history.push(ActivityEntry {
                date: day,
                xp: amount,
            }),
        }

        if self.activity_history.len() > limit {
            let excess = self.activity_history.len() - limit;
            self.activity_history.drain(..excess);
        }
    }

    pub fn record_attempt(&mut self, subject: &str, correct: bool) {
        self.accuracy_by_subject
            .entry(subject.to_string())
            .or_default()
            .record(correct);
    }

    /// Returns true if `level` was not unlocked before
    pub fn unlock(&mut self, game_id: &str, level: u32) -> bool {
        let levels = self
            .unlocked_levels
            .entry(game_id.to_string())
            .or_insert_with(|| vec![1]);
        append_unique(levels, level)
    }

    pub fn is_unlocked(&self, game_id: &str, level: u32) -> bool {
        level == 1
            || self
                .unlocked_levels
                .get(game_id)
                .is_some_and(|levels| levels.contains(&level))
    }

    pub fn has_trophy(&self, trophy_id: &str) -> bool {
        self.trophies.iter().any(|t| t == trophy_id)
    }

    pub fn correct_answers(&self, subject: &str) -> u32 {
        self.accuracy_by_subject
            .get(subject)
            .map(|a| a.correct)
            .unwrap_or(0)
    }

    pub fn unlocked_level_count(&self) -> usize {
        self.unlocked_levels.values().map(Vec::len).sum()
    }
}
