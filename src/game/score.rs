//! Scoreboard calculation.
//!
//! The report is derived from the registry and the current claim sets on
//! every request and never cached.

use serde::{Deserialize, Serialize};

use crate::error::GameResult;
use crate::game::{Area, ClaimEngine, RegionRegistry, Team, TeamClaimSet};

/// Scoring options.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ScoringConfig {
    /// Award a bonus point for the larger total area.
    ///
    /// When disabled only the population bonus is scored.
    pub area_bonus: bool,
}

impl Default for ScoringConfig {
    fn default() -> Self {
        Self { area_bonus: true }
    }
}

/// Per-team totals and points.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct TeamScore {
    /// Which team these figures belong to.
    pub team: Team,
    /// Number of regions claimed.
    pub town_count: usize,
    /// Summed population of claimed regions.
    pub total_population: u64,
    /// Summed area of claimed regions.
    pub total_area: Area,
    /// Team has strictly more population than the other.
    pub population_bonus: bool,
    /// Team has strictly more area than the other (always false when the
    /// area bonus is disabled).
    pub area_bonus: bool,
    /// Town count plus bonus points.
    pub points: u64,
}

/// Outcome of comparing point totals.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum Verdict {
    /// Team A has more points.
    TeamAWins,
    /// Team B has more points.
    TeamBWins,
    /// Equal points.
    Tie,
}

impl Verdict {
    /// The leading team, or `None` on a tie.
    #[must_use]
    pub const fn winner(self) -> Option<Team> {
        match self {
            Verdict::TeamAWins => Some(Team::A),
            Verdict::TeamBWins => Some(Team::B),
            Verdict::Tie => None,
        }
    }
}

/// Scoreboard snapshot for both teams.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct ScoreReport {
    /// Team A figures.
    pub team_a: TeamScore,
    /// Team B figures.
    pub team_b: TeamScore,
    /// Who is ahead on points.
    pub verdict: Verdict,
    /// Whether area bonus scoring was applied.
    pub area_bonus_enabled: bool,
}

impl ScoreReport {
    /// Figures for one team.
    #[must_use]
    pub const fn team(&self, team: Team) -> &TeamScore {
        match team {
            Team::A => &self.team_a,
            Team::B => &self.team_b,
        }
    }
}

/// Raw sums before bonuses are decided.
struct Totals {
    town_count: usize,
    population: u64,
    area: Area,
}

// Board-wide sums are checked at registry load, so these cannot overflow.
fn totals(registry: &RegionRegistry, claims: &TeamClaimSet) -> GameResult<Totals> {
    let mut population = 0u64;
    let mut area = Area::default();
    for id in claims.iter() {
        let region = registry.get(id)?;
        population += region.population();
        area += region.area();
    }
    Ok(Totals {
        town_count: claims.len(),
        population,
        area,
    })
}

fn team_score(team: Team, own: &Totals, other: &Totals, config: ScoringConfig) -> TeamScore {
    let population_bonus = own.population > other.population;
    let area_bonus = config.area_bonus && own.area > other.area;
    let points =
        own.town_count as u64 + u64::from(population_bonus) + u64::from(area_bonus);

    TeamScore {
        team,
        town_count: own.town_count,
        total_population: own.population,
        total_area: own.area,
        population_bonus,
        area_bonus,
        points,
    }
}

/// Compute the scoreboard for the current claims.
///
/// # Errors
///
/// Returns [`crate::GameError::UnknownRegion`] if a claimed id is missing
/// from the registry.
pub fn compute_scoreboard(
    registry: &RegionRegistry,
    engine: &ClaimEngine,
    config: ScoringConfig,
) -> GameResult<ScoreReport> {
    let a = totals(registry, engine.claims(Team::A))?;
    let b = totals(registry, engine.claims(Team::B))?;

    let team_a = team_score(Team::A, &a, &b, config);
    let team_b = team_score(Team::B, &b, &a, config);

    let verdict = match team_a.points.cmp(&team_b.points) {
        std::cmp::Ordering::Greater => Verdict::TeamAWins,
        std::cmp::Ordering::Less => Verdict::TeamBWins,
        std::cmp::Ordering::Equal => Verdict::Tie,
    };

    Ok(ScoreReport {
        team_a,
        team_b,
        verdict,
        area_bonus_enabled: config.area_bonus,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::game::RegionRecord;

    fn registry() -> RegionRegistry {
        RegionRegistry::load(vec![
            RegionRecord::new("X", 100, 50),
            RegionRecord::new("Y", 200, 30),
            RegionRecord::new("Z", 100, 30),
        ])
        .unwrap()
    }

    fn claim(engine: &mut ClaimEngine, registry: &RegionRegistry, id: &str, team: Team) {
        let clicks = match team {
            Team::A => 1,
            Team::B => 2,
        };
        for _ in 0..clicks {
            engine.cycle_claim(registry, id).unwrap();
        }
    }

    #[test]
    fn test_empty_board_is_tie() {
        let report =
            compute_scoreboard(&registry(), &ClaimEngine::new(), ScoringConfig::default()).unwrap();
        assert_eq!(report.verdict, Verdict::Tie);
        assert_eq!(report.team_a.points, 0);
        assert_eq!(report.team_b.points, 0);
        assert!(!report.team_a.population_bonus);
        assert!(!report.team_b.area_bonus);
    }

    #[test]
    fn test_split_bonuses_tie() {
        let registry = registry();
        let mut engine = ClaimEngine::new();
        claim(&mut engine, &registry, "X", Team::A);
        claim(&mut engine, &registry, "Y", Team::B);

        let report = compute_scoreboard(&registry, &engine, ScoringConfig::default()).unwrap();
        assert_eq!(report.team_a.total_population, 100);
        assert_eq!(report.team_a.total_area, Area(50));
        assert!(report.team_a.area_bonus);
        assert!(!report.team_a.population_bonus);
        assert_eq!(report.team_a.points, 2);
        assert!(report.team_b.population_bonus);
        assert_eq!(report.team_b.points, 2);
        assert_eq!(report.verdict, Verdict::Tie);
        assert_eq!(report.verdict.winner(), None);
    }

    #[test]
    fn test_area_bonus_disabled() {
        let registry = registry();
        let mut engine = ClaimEngine::new();
        claim(&mut engine, &registry, "X", Team::A);
        claim(&mut engine, &registry, "Y", Team::B);

        let report =
            compute_scoreboard(&registry, &engine, ScoringConfig { area_bonus: false }).unwrap();
        assert!(!report.team_a.area_bonus);
        assert!(!report.area_bonus_enabled);
        assert_eq!(report.team_a.points, 1);
        assert_eq!(report.team_b.points, 2);
        assert_eq!(report.verdict, Verdict::TeamBWins);
    }

    #[test]
    fn test_equal_population_awards_no_bonus() {
        let registry = registry();
        let mut engine = ClaimEngine::new();
        claim(&mut engine, &registry, "X", Team::A);
        claim(&mut engine, &registry, "Z", Team::B);

        let report = compute_scoreboard(&registry, &engine, ScoringConfig::default()).unwrap();
        assert!(!report.team_a.population_bonus);
        assert!(!report.team_b.population_bonus);
        assert!(report.team_a.area_bonus);
        assert_eq!(report.verdict, Verdict::TeamAWins);
        assert_eq!(report.verdict.winner(), Some(Team::A));
    }

    #[test]
    fn test_town_count_dominates() {
        let registry = registry();
        let mut engine = ClaimEngine::new();
        claim(&mut engine, &registry, "X", Team::B);
        claim(&mut engine, &registry, "Z", Team::B);
        claim(&mut engine, &registry, "Y", Team::A);

        let report = compute_scoreboard(&registry, &engine, ScoringConfig::default()).unwrap();
        // B: 2 towns + area bonus (80 > 30); A: 1 town, no bonus (200 == 200).
        assert_eq!(report.team(Team::B).points, 3);
        assert_eq!(report.team(Team::A).points, 1);
        assert_eq!(report.verdict, Verdict::TeamBWins);
    }

    #[test]
    fn test_claim_outside_registry_is_an_error() {
        let mut engine = ClaimEngine::new();
        let big = RegionRegistry::load(vec![RegionRecord::new("W", 1, 1)]).unwrap();
        engine.cycle_claim(&big, "W").unwrap();

        let result = compute_scoreboard(&registry(), &engine, ScoringConfig::default());
        assert!(result.is_err());
    }
}
