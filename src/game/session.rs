//! Game session: the single entry point for a UI layer.

use crate::error::GameResult;
use crate::game::{
    ClaimEngine, ClaimState, RegionRegistry, ScoreReport, ScoringConfig, Team, compute_scoreboard,
};

/// One game from registry load until the end-game request.
///
/// Owns the registry, the claim sets and the scoring options. The UI maps its
/// widgets to region ids and forwards events here; nothing in the session
/// knows about the UI.
#[derive(Debug, Clone)]
pub struct GameSession {
    registry: RegionRegistry,
    engine: ClaimEngine,
    scoring: ScoringConfig,
}

impl GameSession {
    /// Start a session with no claims.
    #[must_use]
    pub fn new(registry: RegionRegistry, scoring: ScoringConfig) -> Self {
        Self {
            registry,
            engine: ClaimEngine::new(),
            scoring,
        }
    }

    /// Handle a click on a region: advance its claim cycle.
    ///
    /// # Errors
    ///
    /// Returns [`crate::GameError::UnknownRegion`] if `id` is not registered.
    pub fn on_region_clicked(&mut self, id: &str) -> GameResult<ClaimState> {
        let state = self.engine.cycle_claim(&self.registry, id).inspect_err(|e| {
            tracing::warn!(region = id, "Claim rejected: {e}");
        })?;

        match state.owner() {
            Some(team) => tracing::info!(region = id, %team, "{team} has claimed: {id}"),
            None => tracing::info!(region = id, "Reset claim for: {id}"),
        }

        debug_assert!(crate::game::check_invariants(self).is_empty());
        Ok(state)
    }

    /// Compute the current scoreboard.
    ///
    /// # Errors
    ///
    /// Returns [`crate::GameError::UnknownRegion`] if a claim references a
    /// region missing from the registry.
    pub fn on_show_stats_requested(&self) -> GameResult<ScoreReport> {
        compute_scoreboard(&self.registry, &self.engine, self.scoring)
    }

    /// Compute the final scoreboard and end the session.
    ///
    /// # Errors
    ///
    /// Same as [`GameSession::on_show_stats_requested`].
    pub fn on_end_game_requested(self) -> GameResult<ScoreReport> {
        let report = self.on_show_stats_requested()?;
        tracing::info!(verdict = ?report.verdict, "Game ended");
        Ok(report)
    }

    /// Claim state of a region, for rendering.
    ///
    /// # Errors
    ///
    /// Returns [`crate::GameError::UnknownRegion`] if `id` is not registered.
    pub fn state_of(&self, id: &str) -> GameResult<ClaimState> {
        self.registry.get(id)?;
        Ok(self.engine.state_of(id))
    }

    /// Release every claim, keeping the registry.
    pub fn reset(&mut self) {
        self.engine.reset();
        tracing::info!("All claims reset");
    }

    /// The region registry.
    #[must_use]
    pub const fn registry(&self) -> &RegionRegistry {
        &self.registry
    }

    /// The claim engine.
    #[must_use]
    pub const fn claims(&self) -> &ClaimEngine {
        &self.engine
    }

    /// Region ids owned by a team, sorted.
    pub fn claimed_by(&self, team: Team) -> impl Iterator<Item = &str> {
        self.engine.claims(team).iter()
    }

    /// Scoring options in effect.
    #[must_use]
    pub const fn scoring(&self) -> ScoringConfig {
        self.scoring
    }
}
