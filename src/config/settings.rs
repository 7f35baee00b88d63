//! Settings configuration types

use std::path::PathBuf;

use serde::{Deserialize, Serialize};

use crate::progress::HISTORY_LIMIT;

/// General settings
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Settings {
    /// Directory holding the profile document (defaults to ~/.lomdim/)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub data_dir: Option<PathBuf>,

    /// Days of activity kept per profile
    #[serde(default = "default_history_limit")]
    pub history_limit: usize,

    /// Avatar used when a profile is created without one
    #[serde(default = "default_avatar")]
    pub default_avatar: String,
}

fn default_history_limit() -> usize {
    HISTORY_LIMIT
}

fn default_avatar() -> String {
    "🦁".to_string()
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            data_dir: None,
            history_limit: default_history_limit(),
            default_avatar: default_avatar(),
        }
    }
}
