//! Parents' summary of a profile

use serde::Serialize;

use super::profile::{ActivityEntry, Profile};
use super::ranks::RankInfo;
use super::store::ProgressRules;

/// Days of activity shown in the summary
pub const REPORT_DAYS: usize = 7;

/// Accuracy of one subject
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SubjectAccuracy {
    pub subject: String,
    pub correct: u32,
    pub total: u32,
    /// Rounded, 0 when nothing was attempted
    pub percent: u32,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ProgressReport {
    pub name: String,
    pub avatar: String,
    pub total_xp: u32,
    pub rank: RankInfo,
    /// Most recent history entries, oldest first
    pub last_week: Vec<ActivityEntry>,
    pub accuracy: Vec<SubjectAccuracy>,
    pub unlocked_level_count: usize,
    pub trophy_count: usize,
}

impl ProgressReport {
    pub fn for_profile(profile: &Profile, rules: &ProgressRules) -> Self {
        let history = &profile.activity_history;
        let last_week = history[history.len().saturating_sub(REPORT_DAYS)..].to_vec();

        let accuracy = profile
            .accuracy_by_subject
            .iter()
            .map(|(subject, a)| SubjectAccuracy {
                subject: subject.clone(),
                correct: a.correct,
                total: a.total,
                percent: a.percent(),
            })
            .collect();

        Self {
            name: profile.name.clone(),
            avatar: profile.avatar.clone(),
            total_xp: profile.total_xp,
            rank: RankInfo::for_xp(&rules.ranks, profile.total_xp),
            last_week,
            accuracy,
            unlocked_level_count: profile.unlocked_level_count(),
            trophy_count: profile.trophies.len(),
        }
    }

    /// XP over the reported days
    pub fn week_xp(&self) -> u32 {
        self.last_week.iter().map(|e| e.xp).sum()
    }
}
