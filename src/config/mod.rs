//! Configuration loading and management

mod io;
mod settings;

pub use settings::Settings;

use anyhow::{Result, anyhow};
use serde::{Deserialize, Serialize};

use crate::progress::{
    ProgressRules, RankTier, TrophyDefinition, default_ranks, default_trophies, validate_ranks,
    validate_trophies,
};

/// Main configuration structure
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Config {
    /// General settings
    #[serde(default)]
    pub settings: Settings,

    /// Rank table, lowest threshold first
    #[serde(default = "default_ranks", rename = "rank")]
    pub ranks: Vec<RankTier>,

    /// Trophy catalog
    #[serde(default = "default_trophies", rename = "trophy")]
    pub trophies: Vec<TrophyDefinition>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            settings: Settings::default(),
            ranks: default_ranks(),
            trophies: default_trophies(),
        }
    }
}

impl Config {
    /// Reject catalogs the progress store cannot work with
    pub fn validate(&self) -> Result<()> {
        validate_ranks(&self.ranks).map_err(|e| anyhow!("Invalid rank table: {e}"))?;
        validate_trophies(&self.trophies).map_err(|e| anyhow!("Invalid trophy catalog: {e}"))?;
        if self.settings.history_limit == 0 {
            return Err(anyhow!("settings.history_limit must be at least 1"));
        }
        Ok(())
    }

    /// Rules handed to the progress store
    pub fn rules(&self) -> ProgressRules {
        ProgressRules {
            ranks: self.ranks.clone(),
            trophies: self.trophies.clone(),
            history_limit: self.settings.history_limit,
        }
    }
}
