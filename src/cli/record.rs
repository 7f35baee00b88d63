//! Commands that change a profile

use anyhow::{Result, bail};
use clap::ValueEnum;
use std::path::Path;

use lomdim::progress::{ProgressEvent, XpRewards};

use super::open_active_store;

/// Fixed XP payouts that can stand in for `--xp`
#[derive(Debug, Clone, Copy, ValueEnum)]
pub enum Reward {
    Comparison,
    Sequence,
    MemoryMatch,
    MemoryBoard,
    SortingItem,
    SortingLevel,
    FirstWord,
}

impl Reward {
    pub fn xp(self) -> u32 {
        match self {
            Reward::Comparison => XpRewards::COMPARISON,
            Reward::Sequence => XpRewards::SEQUENCE,
            Reward::MemoryMatch => XpRewards::MEMORY_MATCH,
            Reward::MemoryBoard => XpRewards::MEMORY_BOARD,
            Reward::SortingItem => XpRewards::SORTING_ITEM,
            Reward::SortingLevel => XpRewards::SORTING_LEVEL,
            Reward::FirstWord => XpRewards::FIRST_WORD,
        }
    }
}

/// Resolve the XP amount from `--xp` or `--reward`
pub fn resolve_xp(xp: Option<u32>, reward: Option<Reward>) -> Result<u32> {
    match (xp, reward) {
        (Some(_), Some(_)) => bail!("Use either --xp or --reward, not both"),
        (Some(xp), None) => Ok(xp),
        (None, Some(reward)) => Ok(reward.xp()),
        (None, None) => Ok(0),
    }
}

/// Record one answer and print anything worth celebrating
pub fn record_command(
    config_path: Option<&Path>,
    profile_id: Option<&str>,
    xp: u32,
    attempt: Option<(String, bool)>,
) -> Result<()> {
    let mut store = open_active_store(config_path, profile_id)?;
    let attempt = attempt.as_ref().map(|(subject, correct)| (subject.as_str(), *correct));

    let events = store.record_answer(xp, attempt);
    if events.is_empty() {
        println!("Recorded.");
    }
    for event in events {
        match event {
            ProgressEvent::XpAwarded { amount } => println!("+{} XP", amount),
            ProgressEvent::RankUp { to, .. } => println!("Rank up! {} {}", to.emoji, to.name),
            ProgressEvent::TrophyEarned(trophy) => {
                println!("New trophy: {} {} - {}", trophy.icon, trophy.name, trophy.description)
            }
        }
    }
    Ok(())
}

pub fn unlock_command(
    config_path: Option<&Path>,
    profile_id: Option<&str>,
    game: &str,
    level: u32,
) -> Result<()> {
    let mut store = open_active_store(config_path, profile_id)?;
    let was_unlocked = store.is_level_unlocked(game, level);
    store.unlock_level(game, level);

    if was_unlocked {
        println!("Level {} of {} was already unlocked.", level, game);
    } else {
        println!("Unlocked level {} of {}.", level, game);
    }
    for trophy in store.check_trophies() {
        println!("New trophy: {} {} - {}", trophy.icon, trophy.name, trophy.description);
    }
    Ok(())
}
