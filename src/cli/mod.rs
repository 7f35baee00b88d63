//! CLI command implementations

pub mod init;
pub mod profile;
pub mod question;
pub mod record;
pub mod status;

use std::path::Path;

use anyhow::{Context, Result, bail};

use lomdim::config::Config;
use lomdim::progress::{FileStorage, ProgressStore};

/// Open the store from config and select the requested profile.
///
/// Without an explicit id the only existing profile is used.
pub fn open_active_store(
    config_path: Option<&Path>,
    profile_id: Option<&str>,
) -> Result<ProgressStore<FileStorage>> {
    let mut store = open_store(&Config::load(config_path)?)?;

    let id = match profile_id {
        Some(id) => id.to_string(),
        None => match store.profiles() {
            [only] => only.id.clone(),
            [] => bail!("No profiles yet. Create one with `lomdim profile create --name <name>`"),
            _ => bail!("Several profiles exist, pick one with --profile <id>"),
        },
    };

    if !store.select_profile(&id) {
        bail!("Unknown profile: {}", id);
    }
    Ok(store)
}

/// Open the store without selecting a profile
pub fn open_store(config: &Config) -> Result<ProgressStore<FileStorage>> {
    let storage = config.storage();
    let dir = storage.dir().to_path_buf();
    ProgressStore::open(storage, config.rules())
        .with_context(|| format!("Failed to load profiles from {}", dir.display()))
}
