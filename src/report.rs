//! Plain-text scoreboard rendering.

use crate::config::TeamNames;
use crate::game::{ScoreReport, Team, TeamScore, Verdict};

/// Render the full stats text shown on "Display Team Data" and at game end.
#[must_use]
pub fn render_stats(report: &ScoreReport, names: &TeamNames) -> String {
    let mut output = String::from("=== GAME STATS ===\n\n");

    for team in Team::ALL {
        output.push_str(&render_team(
            report.team(team),
            names.name(team),
            report.area_bonus_enabled,
        ));
        output.push('\n');
    }

    output.push('\n');
    output.push_str(&render_verdict(report, names));
    output.push('\n');
    output
}

/// Render one team's block.
#[must_use]
pub fn render_team(score: &TeamScore, name: &str, show_area: bool) -> String {
    let mut output = format!("{name}:\n");
    output.push_str(&format!("  Towns claimed: {}\n", score.town_count));
    output.push_str(&format!("  Total population: {}\n", score.total_population));
    if show_area {
        output.push_str(&format!("  Total area: {} sq mi\n", score.total_area));
    }
    output.push_str(&format!("  Bonuses: {}\n", bonus_list(score)));
    output
}

/// Bonus names held by a team, or "None".
#[must_use]
pub fn bonus_list(score: &TeamScore) -> String {
    let mut bonuses = Vec::new();
    if score.population_bonus {
        bonuses.push("Population");
    }
    if score.area_bonus {
        bonuses.push("Area");
    }
    if bonuses.is_empty() {
        "None".to_string()
    } else {
        bonuses.join(", ")
    }
}

/// One-line verdict: who is winning, or the tie.
#[must_use]
pub fn render_verdict(report: &ScoreReport, names: &TeamNames) -> String {
    match report.verdict {
        Verdict::TeamAWins => format!(
            "{} is winning with {} points!",
            names.name(Team::A),
            report.team_a.points
        ),
        Verdict::TeamBWins => format!(
            "{} is winning with {} points!",
            names.name(Team::B),
            report.team_b.points
        ),
        Verdict::Tie => format!("The game is tied with {} points each!", report.team_a.points),
    }
}
