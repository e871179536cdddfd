//! CLI command implementations for Scramble.

pub(crate) mod play;
pub(crate) mod regions;
pub(crate) mod run;

mod output;

use clap::{Args, ValueEnum};
use scramble::config::{ConfigError, GameConfig, TeamNames};
use scramble::seed::{self, SeedError};
use scramble::{GameError, GameSession, RegionRegistry};
use std::error::Error;
use std::fmt;
use std::path::PathBuf;

/// Output format for the `run` command.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub(crate) enum OutputFormat {
    /// Human-readable text output.
    Text,
    /// Machine-readable JSON output.
    Json,
}

/// Options shared by every command.
#[derive(Debug, Clone, Args)]
pub(crate) struct GameOptions {
    /// Configuration file (TOML)
    #[arg(short, long, global = true)]
    pub(crate) config: Option<PathBuf>,

    /// Region seed file (.toml or .json); overrides the config file
    #[arg(short, long, global = true)]
    pub(crate) seed: Option<PathBuf>,

    /// Score population only (no area bonus)
    #[arg(long, global = true)]
    pub(crate) no_area_bonus: bool,

    /// Write logs to this file
    #[arg(long, global = true)]
    pub(crate) log_file: Option<PathBuf>,
}

/// Everything a command needs to start playing.
#[derive(Debug)]
pub(crate) struct Setup {
    pub(crate) session: GameSession,
    pub(crate) names: TeamNames,
}

impl GameOptions {
    /// Load config and seed, then build a fresh session.
    ///
    /// # Errors
    ///
    /// Returns an error if the config or seed cannot be loaded, or the seed
    /// contains duplicate or blank region ids.
    pub(crate) fn setup(&self) -> Result<Setup, CliError> {
        let mut config = match &self.config {
            Some(path) => GameConfig::load(path)?,
            None => GameConfig::default(),
        };
        if self.no_area_bonus {
            config.scoring.area_bonus = false;
        }

        let records = match self.seed.as_ref().or(config.regions.seed.as_ref()) {
            Some(path) => seed::load(path)?,
            None => seed::builtin(),
        };
        let registry = RegionRegistry::load(records)?;
        tracing::info!(
            regions = registry.len(),
            area_bonus = config.scoring.area_bonus,
            "Session ready"
        );

        Ok(Setup {
            session: GameSession::new(registry, config.scoring),
            names: config.teams,
        })
    }
}

/// CLI error type.
#[derive(Debug)]
pub(crate) struct CliError {
    message: String,
}

impl CliError {
    /// Create a new CLI error.
    pub(crate) fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}

impl fmt::Display for CliError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.message)
    }
}

impl Error for CliError {}

impl From<std::io::Error> for CliError {
    fn from(e: std::io::Error) -> Self {
        Self::new(e.to_string())
    }
}

impl From<GameError> for CliError {
    fn from(e: GameError) -> Self {
        Self::new(e.to_string())
    }
}

impl From<SeedError> for CliError {
    fn from(e: SeedError) -> Self {
        Self::new(e.to_string())
    }
}

impl From<ConfigError> for CliError {
    fn from(e: ConfigError) -> Self {
        Self::new(e.to_string())
    }
}
