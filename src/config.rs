//! Game configuration file (TOML).
//!
//! ```toml
//! [teams]
//! a = "Green"
//! b = "Red"
//!
//! [scoring]
//! area_bonus = false
//!
//! [regions]
//! seed = "towns.toml"
//! ```
//!
//! Every key is optional.

use std::fmt;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use serde::Deserialize;

use crate::game::{ScoringConfig, Team};

/// Top-level configuration.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct GameConfig {
    /// Team display names.
    pub teams: TeamNames,
    /// Scoring options.
    pub scoring: ScoringConfig,
    /// Where regions come from.
    pub regions: RegionsConfig,
}

/// Display names for the two teams.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct TeamNames {
    /// Name shown for team A.
    pub a: String,
    /// Name shown for team B.
    pub b: String,
}

impl Default for TeamNames {
    fn default() -> Self {
        Self {
            a: "Team 1".to_string(),
            b: "Team 2".to_string(),
        }
    }
}

impl TeamNames {
    /// Display name for a team.
    #[must_use]
    pub fn name(&self, team: Team) -> &str {
        match team {
            Team::A => &self.a,
            Team::B => &self.b,
        }
    }
}

/// Region source settings.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct RegionsConfig {
    /// Seed file; the built-in board is used when absent.
    pub seed: Option<PathBuf>,
}

/// Error type for configuration loading.
#[derive(Debug)]
pub enum ConfigError {
    /// The file could not be read.
    Io {
        /// Config file path.
        path: PathBuf,
        /// Underlying error.
        error: io::Error,
    },
    /// The file is not valid TOML for this schema.
    Parse {
        /// Config file path.
        path: PathBuf,
        /// Parser message.
        message: String,
    },
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::Io { path, error } => {
                write!(f, "failed to read config {}: {error}", path.display())
            }
            ConfigError::Parse { path, message } => {
                write!(f, "invalid config {}: {message}", path.display())
            }
        }
    }
}

impl std::error::Error for ConfigError {}

impl GameConfig {
    /// Parse configuration from TOML text.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Parse`] if the text does not match the schema.
    pub fn from_toml(content: &str) -> Result<Self, ConfigError> {
        toml::from_str(content).map_err(|e| ConfigError::Parse {
            path: PathBuf::new(),
            message: e.to_string(),
        })
    }

    /// Load configuration from a file.
    ///
    /// A relative seed path is resolved against the config file's directory.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read or parsed.
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let content = fs::read_to_string(path).map_err(|error| ConfigError::Io {
            path: path.to_path_buf(),
            error,
        })?;

        let mut config: Self = toml::from_str(&content).map_err(|e| ConfigError::Parse {
            path: path.to_path_buf(),
            message: e.to_string(),
        })?;

        if let Some(seed) = &config.regions.seed
            && seed.is_relative()
            && let Some(dir) = path.parent()
        {
            config.regions.seed = Some(dir.join(seed));
        }

        tracing::debug!(path = %path.display(), "Config loaded");
        Ok(config)
    }
}
