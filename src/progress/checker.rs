//! Trophy condition checking

use chrono::NaiveDate;

use super::profile::{ActivityEntry, Profile};
use super::trophies::{TrophyCondition, TrophyDefinition};

/// Consecutive active days ending today, or ending yesterday if nothing was
/// played yet today.
pub fn daily_streak(history: &[ActivityEntry], today: NaiveDate) -> u32 {
    let mut days: Vec<NaiveDate> = history.iter().map(|e| e.date).collect();
    days.sort_unstable();
    days.dedup();

    let Some(&last) = days.last() else {
        return 0;
    };
    // Streak is broken if the last activity is older than yesterday
    if (today - last).num_days() > 1 {
        return 0;
    }

    let mut streak = 1;
    for pair in days.windows(2).rev() {
        if (pair[1] - pair[0]).num_days() != 1 {
            break;
        }
        streak += 1;
    }
    streak
}

/// Whether `condition` holds for `profile`
pub fn is_met(condition: &TrophyCondition, profile: &Profile, today: NaiveDate) -> bool {
    match condition {
        TrophyCondition::TotalXp { min } => profile.total_xp >= *min,
        TrophyCondition::CorrectAnswers { subject, count } => {
            profile.correct_answers(subject) >= *count
        }
        TrophyCondition::ActiveDays { days } => {
            let active = profile.activity_history.iter().filter(|e| e.xp > 0).count();
            active >= *days as usize
        }
        TrophyCondition::DailyStreak { days } => {
            daily_streak(&profile.activity_history, today) >= *days
        }
        TrophyCondition::LevelUnlocked { game, level } => profile.is_unlocked(game, *level),
        TrophyCondition::SubjectsPlayed { count } => {
            let played = profile
                .accuracy_by_subject
                .values()
                .filter(|a| a.total > 0)
                .count();
            played >= *count as usize
        }
    }
}

/// Trophies whose condition is met but that the profile has not earned yet
pub fn pending_trophies<'a>(
    profile: &Profile,
    catalog: &'a [TrophyDefinition],
    today: NaiveDate,
) -> Vec<&'a TrophyDefinition> {
    catalog
        .iter()
        .filter(|t| !profile.has_trophy(&t.id) && is_met(&t.condition, profile, today))
        .collect()
}
