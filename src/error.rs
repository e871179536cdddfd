//! Error types for the game core.

use std::fmt;

/// Errors raised by the region registry, claim engine and scoreboard.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GameError {
    /// An operation referenced a region that is not in the registry.
    UnknownRegion {
        /// The id that failed to resolve.
        id: String,
    },
    /// The same region id appeared twice while building the registry.
    DuplicateRegion {
        /// The repeated id.
        id: String,
    },
    /// A seed record had an empty or whitespace-only id.
    EmptyRegionId,
    /// Board-wide population or area would not fit in a `u64` total.
    TotalOverflow {
        /// The region whose figures pushed the total past the limit.
        id: String,
    },
}

impl fmt::Display for GameError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            GameError::UnknownRegion { id } => write!(f, "unknown region: {id:?}"),
            GameError::DuplicateRegion { id } => write!(f, "duplicate region: {id:?}"),
            GameError::EmptyRegionId => write!(f, "region id must not be empty"),
            GameError::TotalOverflow { id } => {
                write!(f, "board totals overflow at region {id:?}")
            }
        }
    }
}

impl std::error::Error for GameError {}

/// Result type for game operations.
pub type GameResult<T> = Result<T, GameError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_names_the_region() {
        let err = GameError::UnknownRegion {
            id: "Nowhere".to_string(),
        };
        assert_eq!(err.to_string(), "unknown region: \"Nowhere\"");

        let err = GameError::DuplicateRegion {
            id: "Lisle".to_string(),
        };
        assert!(err.to_string().contains("Lisle"));

        let err = GameError::TotalOverflow {
            id: "Lisle".to_string(),
        };
        assert_eq!(err.to_string(), "board totals overflow at region \"Lisle\"");
    }
}
