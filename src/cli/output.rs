//! Output formatting utilities for CLI.

use scramble::config::TeamNames;
use scramble::{Region, ScoreReport, Team, TeamScore, Verdict};
use serde::Serialize;

/// JSON-serializable scoreboard.
#[derive(Debug, Serialize)]
pub(super) struct JsonScoreReport {
    /// Winning team name (null on a tie).
    pub(super) winner: Option<String>,
    /// Whether area bonus scoring was applied.
    pub(super) area_bonus_enabled: bool,
    /// Per-team results, team A first.
    pub(super) teams: Vec<JsonTeamScore>,
}

/// JSON-serializable team result.
#[derive(Debug, Serialize)]
pub(super) struct JsonTeamScore {
    /// Team display name.
    pub(super) name: String,
    /// Towns claimed.
    pub(super) towns: usize,
    /// Total population.
    pub(super) population: u64,
    /// Total area in tenths of a square mile.
    pub(super) area_tenths: u64,
    /// Total area formatted in square miles.
    pub(super) area: String,
    /// Population bonus held.
    pub(super) population_bonus: bool,
    /// Area bonus held.
    pub(super) area_bonus: bool,
    /// Points.
    pub(super) points: u64,
    /// Claimed town ids, sorted.
    pub(super) claimed: Vec<String>,
}

impl JsonScoreReport {
    /// Create from a ScoreReport.
    pub(super) fn from_report(
        report: &ScoreReport,
        names: &TeamNames,
        claimed: impl Fn(Team) -> Vec<String>,
    ) -> Self {
        let team = |score: &TeamScore| JsonTeamScore {
            name: names.name(score.team).to_string(),
            towns: score.town_count,
            population: score.total_population,
            area_tenths: score.total_area.tenths(),
            area: score.total_area.to_string(),
            population_bonus: score.population_bonus,
            area_bonus: score.area_bonus,
            points: score.points,
            claimed: claimed(score.team),
        };

        Self {
            winner: match report.verdict {
                Verdict::Tie => None,
                Verdict::TeamAWins => Some(names.name(Team::A).to_string()),
                Verdict::TeamBWins => Some(names.name(Team::B).to_string()),
            },
            area_bonus_enabled: report.area_bonus_enabled,
            teams: vec![team(&report.team_a), team(&report.team_b)],
        }
    }
}

/// JSON-serializable region listing entry.
#[derive(Debug, Serialize)]
pub(super) struct JsonRegion {
    /// Region id.
    pub(super) id: String,
    /// Population.
    pub(super) population: u64,
    /// Area in tenths of a square mile.
    pub(super) area_tenths: u64,
    /// Area formatted in square miles.
    pub(super) area: String,
}

impl From<&Region> for JsonRegion {
    fn from(region: &Region) -> Self {
        Self {
            id: region.id().to_string(),
            population: region.population(),
            area_tenths: region.area().tenths(),
            area: region.area().to_string(),
        }
    }
}

/// Format a region table as human-readable text.
pub(super) fn format_regions<'a>(regions: impl IntoIterator<Item = &'a Region>) -> String {
    let regions: Vec<&Region> = regions.into_iter().collect();
    let width = regions
        .iter()
        .map(|r| r.id().chars().count())
        .max()
        .unwrap_or(4)
        .max(4);

    let mut output = format!("{:<width$}  {:>10}  {:>10}\n", "Town", "Population", "Area (mi²)");
    for region in &regions {
        output.push_str(&format!(
            "{:<width$}  {:>10}  {:>10}\n",
            region.id(),
            region.population(),
            region.area().to_string(),
        ));
    }
    output.push_str(&format!("\n{} towns\n", regions.len()));
    output
}
