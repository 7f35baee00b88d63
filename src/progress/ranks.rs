//! Rank table and rank derivation
//!
//! Ranks are not stored. They are derived from a profile's total XP against
//! an ascending table of thresholds.

use serde::{Deserialize, Serialize};

use super::rules::threshold_index;

/// One tier of the rank table
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RankTier {
    pub name: String,
    pub emoji: String,
    pub min_xp: u32,
}

impl RankTier {
    pub fn new(name: &str, emoji: &str, min_xp: u32) -> Self {
        Self {
            name: name.to_string(),
            emoji: emoji.to_string(),
            min_xp,
        }
    }
}

/// Built-in rank table (sorted by `min_xp`)
pub fn default_ranks() -> Vec<RankTier> {
    vec![
        RankTier::new("מתחיל", "🌟", 0),
        RankTier::new("ארד", "🥉", 100),
        RankTier::new("כסף", "🥈", 300),
        RankTier::new("זהב", "🥇", 600),
        RankTier::new("פלטינה", "💎", 1000),
        RankTier::new("אלוף", "🏆", 1500),
        RankTier::new("אגדה", "👑", 2500),
    ]
}

/// Current rank of a player
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct RankInfo {
    pub name: String,
    pub emoji: String,
    pub min_xp: u32,
    /// Threshold of the next tier, or `min_xp` itself at the top tier
    pub next_rank_xp: u32,
    /// Position in the rank table
    pub tier: usize,
}

impl RankInfo {
    /// Derive the rank for `xp` from `tiers`.
    ///
    /// XP below the first threshold still maps to the first tier.
    pub fn for_xp(tiers: &[RankTier], xp: u32) -> Self {
        let Some(first) = tiers.first() else {
            return Self::default();
        };
        let index = threshold_index(tiers, xp, |t| t.min_xp).unwrap_or(0);
        let current = tiers.get(index).unwrap_or(first);
        let next_rank_xp = tiers
            .get(index + 1)
            .map(|t| t.min_xp)
            .unwrap_or(current.min_xp);

        Self {
            name: current.name.clone(),
            emoji: current.emoji.clone(),
            min_xp: current.min_xp,
            next_rank_xp,
            tier: index,
        }
    }

    pub fn is_top_rank(&self) -> bool {
        self.next_rank_xp <= self.min_xp
    }

    /// Progress towards the next tier (0.0 - 1.0), 1.0 at the top tier
    pub fn progress_to_next(&self, xp: u32) -> f32 {
        if self.is_top_rank() {
            return 1.0;
        }
        let span = self.next_rank_xp - self.min_xp;
        let earned = xp.saturating_sub(self.min_xp).min(span);
        earned as f32 / span as f32
    }
}

/// Check that a rank table is usable: non-empty, starts at 0, ascending.
pub fn validate_ranks(tiers: &[RankTier]) -> Result<(), String> {
    let Some(first) = tiers.first() else {
        return Err("rank table is empty".to_string());
    };
    if first.min_xp != 0 {
        return Err(format!("first rank '{}' must start at 0 XP", first.name));
    }
    for pair in tiers.windows(2) {
        if pair[1].min_xp <= pair[0].min_xp {
            return Err(format!(
                "rank '{}' ({} XP) must have a higher threshold than '{}' ({} XP)",
                pair[1].name, pair[1].min_xp, pair[0].name, pair[0].min_xp
            ));
        }
    }
    Ok(())
}
