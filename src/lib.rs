// Allow unwrap and unreadable literals in tests (test code is not production)
#![cfg_attr(test, allow(clippy::unwrap_used))]
#![cfg_attr(test, allow(clippy::unreadable_literal))]
//! Scramble: a two-team town-claiming board game.
//!
//! Players click towns to cycle their ownership between team A, team B and
//! nobody. A scoreboard can be requested at any time: one point per town,
//! plus a bonus point each for the larger total population and the larger
//! total area.
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────────────────────────────┐
//! │     CLI / TUI board (binary)        │
//! ├─────────────────────────────────────┤
//! │  GameSession                        │
//! │   ├─ ClaimEngine                    │
//! │   └─ compute_scoreboard             │
//! ├─────────────────────────────────────┤
//! │  RegionRegistry  ←  seed / config   │
//! └─────────────────────────────────────┘
//! ```

pub mod board;
pub mod config;
pub mod error;
pub mod game;
pub mod report;
pub mod seed;

pub use error::{GameError, GameResult};

// Re-export key game types at crate root for convenience
pub use game::{
    Area, ClaimEngine, ClaimState, GameSession, Region, RegionRecord, RegionRegistry, ScoreReport,
    ScoringConfig, Team, TeamScore, Verdict,
};
