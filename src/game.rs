//! Game layer for Suburban Scramble.
//!
//! Implements the rules:
//! - Region registry (towns with population and area)
//! - Claim engine (unclaimed → team A → team B → unclaimed)
//! - Scoreboard (town points plus population and area bonuses)
//! - Session object tying them together for a UI

mod claim;
mod invariants;
mod region;
mod registry;
mod score;
mod session;

pub use claim::{ClaimEngine, ClaimState, Team, TeamClaimSet};
pub use invariants::{InvariantViolation, check_invariants};
pub use region::{Area, Position, Region, RegionRecord};
pub use registry::RegionRegistry;
pub use score::{ScoreReport, ScoringConfig, TeamScore, Verdict, compute_scoreboard};
pub use session::GameSession;
