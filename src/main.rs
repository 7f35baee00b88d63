use anyhow::Result;
use clap::{Parser, Subcommand};
use std::path::PathBuf;

mod cli;

use cli::question::QuestionKind;

#[derive(Parser)]
#[command(name = "lomdim")]
#[command(about = "Lomdim - learning games progress and round generator")]
#[command(version)]
struct Cli {
    /// Path to the config file (defaults to ~/.lomdim/config.toml)
    #[arg(short, long, global = true)]
    config: Option<PathBuf>,

    /// Profile id to act on (optional when only one profile exists)
    #[arg(short, long, global = true)]
    profile: Option<String>,

    /// Enable verbose logging
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Write a config file with the default rank table and trophy catalog
    Init {
        /// Overwrite existing config file
        #[arg(long)]
        force: bool,
    },

    /// Manage player profiles
    Profile {
        #[command(subcommand)]
        command: cli::profile::ProfileCommands,
    },

    /// Record an answer: XP and, optionally, an accuracy attempt
    Record {
        /// XP to add
        #[arg(long)]
        xp: Option<u32>,

        /// Use a game's fixed payout instead of --xp
        #[arg(long, value_enum)]
        reward: Option<cli::record::Reward>,

        /// Subject tag for accuracy tracking (math, memory, reading, ...)
        #[arg(long)]
        subject: Option<String>,

        /// The answer was correct (otherwise the attempt counts as wrong)
        #[arg(long, requires = "subject")]
        correct: bool,
    },

    /// Unlock a game level
    Unlock {
        /// Game id (e.g. sorter, math-challenge)
        #[arg(long)]
        game: String,

        /// Level number
        #[arg(long)]
        level: u32,
    },

    /// Show the current rank
    Rank,

    /// Show earned trophies (and award any that are due)
    Trophies,

    /// Parents' summary
    Report {
        /// Print as JSON
        #[arg(long)]
        json: bool,
    },

    /// Generate one round of game content
    Question {
        #[arg(value_enum)]
        kind: QuestionKind,

        /// Level index for math, english and sorting rounds (0-based)
        #[arg(long, default_value_t = 0)]
        level: usize,

        /// Seed for a reproducible round
        #[arg(long)]
        seed: Option<u64>,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Initialize logging
    let log_level = if cli.verbose { "debug" } else { "info" };
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(log_level)),
        )
        .with_writer(std::io::stderr)
        .init();

    let config_path = cli.config.as_deref();
    let profile = cli.profile.as_deref();

    match cli.command {
        Commands::Init { force } => {
            cli::init::init_command(config_path, force)?;
        }
        Commands::Profile { command } => {
            cli::profile::profile_command(config_path, command)?;
        }
        Commands::Record {
            xp,
            reward,
            subject,
            correct,
        } => {
            let xp = cli::record::resolve_xp(xp, reward)?;
            let attempt = subject.map(|s| (s, correct));
            cli::record::record_command(config_path, profile, xp, attempt)?;
        }
        Commands::Unlock { game, level } => {
            cli::record::unlock_command(config_path, profile, &game, level)?;
        }
        Commands::Rank => {
            cli::status::rank_command(config_path, profile)?;
        }
        Commands::Trophies => {
            cli::status::trophies_command(config_path, profile)?;
        }
        Commands::Report { json } => {
            cli::status::report_command(config_path, profile, json)?;
        }
        Commands::Question { kind, level, seed } => {
            cli::question::question_command(kind, level, seed)?;
        }
    }

    Ok(())
}
