//! Profile commands

use anyhow::Result;
use clap::Subcommand;
use std::path::Path;

use lomdim::config::Config;

use super::open_store;

#[derive(Subcommand)]
pub enum ProfileCommands {
    /// Create a new profile
    Create {
        /// Display name
        #[arg(long)]
        name: String,

        /// Avatar emoji (defaults to settings.default_avatar)
        #[arg(long)]
        avatar: Option<String>,
    },

    /// List all profiles
    List,
}

pub fn profile_command(config_path: Option<&Path>, command: ProfileCommands) -> Result<()> {
    let config = Config::load(config_path)?;

    match command {
        ProfileCommands::Create { name, avatar } => {
            let avatar = avatar.unwrap_or_else(|| config.settings.default_avatar.clone());
            let mut store = open_store(&config)?;
            let profile = store.create_profile(&name, &avatar);
            println!("Created {} {} ({})", profile.avatar, profile.name, profile.id);
        }
        ProfileCommands::List => {
            let store = open_store(&config)?;
            if store.profiles().is_empty() {
                println!("No profiles found.");
                return Ok(());
            }

            println!("Profiles ({}):\n", store.profiles().len());
            for profile in store.profiles() {
                println!(
                    "  {} {} - {} XP, {} trophies",
                    profile.avatar,
                    profile.name,
                    profile.total_xp,
                    profile.trophies.len()
                );
                println!("    id: {}", profile.id);
            }
        }
    }
    Ok(())
}
