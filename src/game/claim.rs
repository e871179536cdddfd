//! Claim engine: per-region three-state ownership cycle.

use std::collections::BTreeSet;
use std::fmt;

use serde::{Deserialize, Serialize};

use crate::error::GameResult;
use crate::game::RegionRegistry;

/// One of the two competing teams.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Team {
    /// First team (claims on the first click).
    A,
    /// Second team (claims on the second click).
    B,
}

impl Team {
    /// Both teams, A first.
    pub const ALL: [Team; 2] = [Team::A, Team::B];

    /// The opposing team.
    #[must_use]
    pub const fn other(self) -> Team {
        match self {
            Team::A => Team::B,
            Team::B => Team::A,
        }
    }
}

/// Default board labels, numbered from one.
impl fmt::Display for Team {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Team::A => write!(f, "Team 1"),
            Team::B => write!(f, "Team 2"),
        }
    }
}

/// Ownership state of a single region.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ClaimState {
    /// Owned by neither team.
    #[default]
    Unclaimed,
    /// Owned by team A.
    ClaimedByA,
    /// Owned by team B.
    ClaimedByB,
}

impl ClaimState {
    /// The state a click moves to. The cycle has no terminal state.
    #[must_use]
    pub const fn next(self) -> ClaimState {
        match self {
            ClaimState::Unclaimed => ClaimState::ClaimedByA,
            ClaimState::ClaimedByA => ClaimState::ClaimedByB,
            ClaimState::ClaimedByB => ClaimState::Unclaimed,
        }
    }

    /// The owning team, if any.
    #[must_use]
    pub const fn owner(self) -> Option<Team> {
        match self {
            ClaimState::Unclaimed => None,
            ClaimState::ClaimedByA => Some(Team::A),
            ClaimState::ClaimedByB => Some(Team::B),
        }
    }
}

/// Region ids currently owned by one team.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TeamClaimSet {
    ids: BTreeSet<String>,
}

impl TeamClaimSet {
    /// Whether the team owns the region.
    #[must_use]
    pub fn contains(&self, id: &str) -> bool {
        self.ids.contains(id)
    }

    /// Number of regions owned.
    #[must_use]
    pub fn len(&self) -> usize {
        self.ids.len()
    }

    /// Whether the team owns nothing.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.ids.is_empty()
    }

    /// Owned region ids in sorted order.
    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.ids.iter().map(String::as_str)
    }

    fn insert(&mut self, id: &str) {
        self.ids.insert(id.to_string());
    }

    fn remove(&mut self, id: &str) {
        self.ids.remove(id);
    }
}

/// Owns both teams' claim sets and keeps them disjoint.
#[derive(Debug, Clone, Default)]
pub struct ClaimEngine {
    team_a: TeamClaimSet,
    team_b: TeamClaimSet,
}

impl ClaimEngine {
    /// Create an engine with no claims.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Advance the claim cycle for a region and return its new state.
    ///
    /// # Errors
    ///
    /// Returns [`crate::GameError::UnknownRegion`] if the region is not in
    /// `registry`; the claim sets are left untouched.
    pub fn cycle_claim(&mut self, registry: &RegionRegistry, id: &str) -> GameResult<ClaimState> {
        registry.get(id)?;

        let next = self.state_of(id).next();
        match next {
            ClaimState::ClaimedByA => {
                self.team_a.insert(id);
            }
            ClaimState::ClaimedByB => {
                self.team_a.remove(id);
                self.team_b.insert(id);
            }
            ClaimState::Unclaimed => {
                self.team_b.remove(id);
            }
        }
        Ok(next)
    }

    /// Current state of a region, derived from set membership.
    ///
    /// Ids that were never claimed (including unknown ones) are `Unclaimed`.
    #[must_use]
    pub fn state_of(&self, id: &str) -> ClaimState {
        if self.team_a.contains(id) {
            ClaimState::ClaimedByA
        } else if self.team_b.contains(id) {
            ClaimState::ClaimedByB
        } else {
            ClaimState::Unclaimed
        }
    }

    /// The claim set for a team.
    #[must_use]
    pub fn claims(&self, team: Team) -> &TeamClaimSet {
        match team {
            Team::A => &self.team_a,
            Team::B => &self.team_b,
        }
    }

    /// Release every claim.
    pub fn reset(&mut self) {
        self.team_a = TeamClaimSet::default();
        self.team_b = TeamClaimSet::default();
    }
}
