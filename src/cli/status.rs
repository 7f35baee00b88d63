//! Read-only profile views

use anyhow::Result;
use std::path::Path;

use super::open_active_store;

pub fn rank_command(config_path: Option<&Path>, profile_id: Option<&str>) -> Result<()> {
    let store = open_active_store(config_path, profile_id)?;
    let xp = store.active_profile().map(|p| p.total_xp).unwrap_or(0);
    let rank = store.rank();

    println!("{} {} ({} XP)", rank.emoji, rank.name, xp);
    if rank.is_top_rank() {
        println!("Top rank reached!");
    } else {
        println!(
            "Next rank at {} XP ({:.0}% there)",
            rank.next_rank_xp,
            rank.progress_to_next(xp) * 100.0
        );
    }
    Ok(())
}

pub fn trophies_command(config_path: Option<&Path>, profile_id: Option<&str>) -> Result<()> {
    let mut store = open_active_store(config_path, profile_id)?;
    for trophy in store.check_trophies() {
        println!("New trophy: {} {}", trophy.icon, trophy.name);
    }

    let earned = store.trophies();
    let total = store.rules().trophies.len();
    println!("Trophies ({}/{}):\n", earned.len(), total);
    for trophy in earned {
        println!("  {} {} - {}", trophy.icon, trophy.name, trophy.description);
    }
    Ok(())
}

pub fn report_command(config_path: Option<&Path>, profile_id: Option<&str>, json: bool) -> Result<()> {
    let store = open_active_store(config_path, profile_id)?;
    let Some(report) = store.report() else {
        return Ok(());
    };

    if json {
        println!("{}", serde_json::to_string_pretty(&report)?);
        return Ok(());
    }

    println!("{} {}", report.avatar, report.name);
    println!("  Rank: {} {} ({} XP)", report.rank.emoji, report.rank.name, report.total_xp);
    println!("  Levels unlocked: {}", report.unlocked_level_count);
    println!("  Trophies: {}", report.trophy_count);

    println!("\n  Last {} days ({} XP):", report.last_week.len(), report.week_xp());
    for entry in &report.last_week {
        println!("    {}  {:>5} XP", entry.date.format("%a %Y-%m-%d"), entry.xp);
    }

    if !report.accuracy.is_empty() {
        println!("\n  Accuracy:");
        for subject in &report.accuracy {
            println!(
                "    {:<10} {:>3}%  ({}/{})",
                subject.subject, subject.percent, subject.correct, subject.total
            );
        }
    }
    Ok(())
}
