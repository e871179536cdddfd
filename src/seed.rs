//! Region seed data: the built-in DuPage County board and seed files.
//!
//! Seed files hold a list of region records, either as TOML
//!
//! ```toml
//! [[region]]
//! name = "Lisle"
//! population = 23464
//! area = 78
//! position = { x = 2.0, y = 2.0 }
//! ```
//!
//! or as a JSON array of the same records. The format is chosen by file
//! extension (`.json` for JSON, anything else is read as TOML).

use std::fmt;
use std::fs;
use std::io;
use std::path::Path;

use serde::Deserialize;

use crate::game::RegionRecord;

/// The original board: seventeen towns with population and area in tenths
/// of a square mile. Positions are board cells (x east, y north).
#[must_use]
pub fn builtin() -> Vec<RegionRecord> {
    vec![
        RegionRecord::new("Downers Grove", 50_437, 149).at(3.0, 2.0),
        RegionRecord::new("Westmont", 24_685, 48).at(4.0, 1.0),
        RegionRecord::new("Lisle", 23_464, 78).at(2.0, 2.0),
        RegionRecord::new("Woodridge", 34_158, 96).at(2.0, 1.0),
        RegionRecord::new("Clarendon Hills", 8_702, 17).at(5.0, 1.0),
        RegionRecord::new("Hinsdale", 17_395, 47).at(5.0, 2.0),
        RegionRecord::new("Oak Brook", 8_163, 82).at(4.0, 2.0),
        RegionRecord::new("Lombard", 44_476, 109).at(3.0, 3.0),
        RegionRecord::new("Villa Park", 21_113, 48).at(4.0, 3.0),
        RegionRecord::new("Darien", 21_916, 60).at(4.0, 0.0),
        RegionRecord::new("Bolingbrook", 73_922, 243).at(2.0, 0.0),
        RegionRecord::new("Glen Ellyn", 28_846, 65).at(2.0, 3.0),
        RegionRecord::new("Elmhurst", 46_748, 103).at(4.0, 4.0),
        RegionRecord::new("Addison", 35_702, 100).at(3.0, 4.0),
        RegionRecord::new("Willowbrook", 8_500, 35).at(5.0, 0.0),
        RegionRecord::new("Wheaton", 53_970, 115).at(1.0, 3.0),
        RegionRecord::new("Naperville", 149_540, 391).at(0.0, 1.0),
    ]
}

/// Error type for seed file loading.
#[derive(Debug)]
pub enum SeedError {
    /// The file could not be read.
    Io(io::Error),
    /// The file content is not a valid record list.
    Parse {
        /// Parser message.
        message: String,
    },
}

impl fmt::Display for SeedError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SeedError::Io(e) => write!(f, "failed to read seed file: {e}"),
            SeedError::Parse { message } => write!(f, "invalid seed file: {message}"),
        }
    }
}

impl std::error::Error for SeedError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            SeedError::Io(e) => Some(e),
            SeedError::Parse { .. } => None,
        }
    }
}

impl From<io::Error> for SeedError {
    fn from(e: io::Error) -> Self {
        SeedError::Io(e)
    }
}

#[derive(Deserialize)]
struct TomlSeed {
    #[serde(default)]
    region: Vec<RegionRecord>,
}

/// Parse TOML seed content (`[[region]]` tables).
///
/// # Errors
///
/// Returns [`SeedError::Parse`] if the content is not valid.
pub fn parse_toml(content: &str) -> Result<Vec<RegionRecord>, SeedError> {
    toml::from_str::<TomlSeed>(content)
        .map(|seed| seed.region)
        .map_err(|e| SeedError::Parse {
            message: e.to_string(),
        })
}

/// Parse JSON seed content (an array of records).
///
/// # Errors
///
/// Returns [`SeedError::Parse`] if the content is not valid.
pub fn parse_json(content: &str) -> Result<Vec<RegionRecord>, SeedError> {
    serde_json::from_str(content).map_err(|e| SeedError::Parse {
        message: e.to_string(),
    })
}

/// Load seed records from a file.
///
/// # Errors
///
/// Returns an error if the file cannot be read or parsed.
pub fn load(path: &Path) -> Result<Vec<RegionRecord>, SeedError> {
    let content = fs::read_to_string(path)?;
    let is_json = path
        .extension()
        .is_some_and(|ext| ext.eq_ignore_ascii_case("json"));

    let records = if is_json {
        parse_json(&content)?
    } else {
        parse_toml(&content)?
    };
    tracing::debug!(path = %path.display(), records = records.len(), "Seed file loaded");
    Ok(records)
}
