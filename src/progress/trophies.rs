//! Trophy catalog
//!
//! Trophies are static definitions. A profile only stores the ids it earned.

use std::collections::HashSet;

use serde::{Deserialize, Serialize};

/// Condition that earns a trophy
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum TrophyCondition {
    /// Total XP reached
    TotalXp { min: u32 },
    /// Correct answers in one subject
    CorrectAnswers { subject: String, count: u32 },
    /// Distinct days with recorded activity
    ActiveDays { days: u32 },
    /// Consecutive active days ending today or yesterday
    DailyStreak { days: u32 },
    /// A specific level of a game was unlocked
    LevelUnlocked { game: String, level: u32 },
    /// Distinct subjects with at least one attempt
    SubjectsPlayed { count: u32 },
}

/// Trophy definition with display metadata
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TrophyDefinition {
    pub id: String,
    pub name: String,
    pub description: String,
    pub icon: String,
    pub condition: TrophyCondition,
}

impl TrophyDefinition {
    pub fn new(id: &str, name: &str, description: &str, icon: &str, condition: TrophyCondition) -> Self {
        Self {
            id: id.to_string(),
            name: name.to_string(),
            description: description.to_string(),
            icon: icon.to_string(),
            condition,
        }
    }

    /// Find a definition by id
    pub fn find<'a>(catalog: &'a [TrophyDefinition], id: &str) -> Option<&'a TrophyDefinition> {
        catalog.iter().find(|t| t.id == id)
    }
}

/// Built-in trophy catalog
pub fn default_trophies() -> Vec<TrophyDefinition> {
    use TrophyCondition::*;

    vec![
        TrophyDefinition::new(
            "first_steps",
            "First Steps",
            "Earn your first XP",
            "🎯",
            TotalXp { min: 1 },
        ),
        TrophyDefinition::new(
            "xp_100",
            "Rising Star",
            "Collect 100 XP",
            "⭐",
            TotalXp { min: 100 },
        ),
        TrophyDefinition::new(
            "xp_1000",
            "Super Learner",
            "Collect 1000 XP",
            "🚀",
            TotalXp { min: 1000 },
        ),
        TrophyDefinition::new(
            "math_10",
            "Number Ninja",
            "Answer 10 math questions correctly",
            "🔢",
            CorrectAnswers {
                subject: "math".to_string(),
                count: 10,
            },
        ),
        TrophyDefinition::new(
            "memory_10",
            "Elephant Memory",
            "Find 10 matching pairs",
            "🐘",
            CorrectAnswers {
                subject: "memory".to_string(),
                count: 10,
            },
        ),
        TrophyDefinition::new(
            "reader_10",
            "Bookworm",
            "Read 10 words correctly",
            "📚",
            CorrectAnswers {
                subject: "reading".to_string(),
                count: 10,
            },
        ),
        TrophyDefinition::new(
            "explorer",
            "Explorer",
            "Play three different kinds of games",
            "🧭",
            SubjectsPlayed { count: 3 },
        ),
        TrophyDefinition::new(
            "streak_3",
            "On Fire",
            "Play three days in a row",
            "🔥",
            DailyStreak { days: 3 },
        ),
        TrophyDefinition::new(
            "streak_7",
            "Week Warrior",
            "Play seven days in a row",
            "📅",
            DailyStreak { days: 7 },
        ),
        TrophyDefinition::new(
            "loyal_10",
            "Regular",
            "Play on ten different days",
            "🗓️",
            ActiveDays { days: 10 },
        ),
        TrophyDefinition::new(
            "math_master",
            "Math Master",
            "Reach the last level of the math challenge",
            "🧮",
            LevelUnlocked {
                game: "math-challenge".to_string(),
                level: 5,
            },
        ),
    ]
}

/// Check that trophy ids are non-empty and unique
pub fn validate_trophies(catalog: &[TrophyDefinition]) -> Result<(), String> {
    let mut seen = HashSet::new();
    for trophy in catalog {
        if trophy.id.trim().is_empty() {
            return Err(format!("trophy '{}' has an empty id", trophy.name));
        }
        if !seen.insert(trophy.id.as_str()) {
            return Err(format!("duplicate trophy id '{}'", trophy.id));
        }
    }
    Ok(())
}
