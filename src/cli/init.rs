//! Init command implementation

use anyhow::{Result, bail};
use std::path::{Path, PathBuf};
use tracing::info;

use lomdim::config::Config;

/// Write the default configuration
pub fn init_command(config_path: Option<&Path>, force: bool) -> Result<()> {
    let path = config_path
        .map(Path::to_path_buf)
        .unwrap_or_else(Config::global_config_path);

    if path.exists() && !force {
        bail!(
            "Config file already exists: {}. Use --force to overwrite.",
            path.display()
        );
    }

    Config::default().save_to_file(&path)?;
    info!("Created {}", path.display());

    println!("Initialized lomdim configuration:");
    println!("  {}", path.display());
    println!("Profiles are stored in {}", data_dir_hint(&path).display());

    Ok(())
}

fn data_dir_hint(config_path: &Path) -> PathBuf {
    Config::from_file(config_path)
        .map(|c| c.data_dir())
        .unwrap_or_else(|_| Config::global_config_dir())
}
