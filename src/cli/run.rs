//! Run command implementation: apply clicks headlessly and score the board.

use super::output::JsonScoreReport;
use super::{CliError, GameOptions, OutputFormat};
use scramble::report::render_stats;
use scramble::{ClaimState, Team};

/// Execute the run command.
///
/// # Errors
///
/// Returns an error if setup fails or a click names an unknown town.
pub(crate) fn execute(
    options: &GameOptions,
    clicks: Vec<String>,
    format: OutputFormat,
    quiet: bool,
) -> Result<(), CliError> {
    let super::Setup { mut session, names } = options.setup()?;

    for id in &clicks {
        let state = session.on_region_clicked(id)?;
        if !quiet && format == OutputFormat::Text {
            let owner = match state {
                ClaimState::ClaimedByA => names.name(Team::A),
                ClaimState::ClaimedByB => names.name(Team::B),
                ClaimState::Unclaimed => "nobody",
            };
            println!("{id} -> {owner}");
        }
    }
    if !quiet && format == OutputFormat::Text && !clicks.is_empty() {
        println!();
    }

    let claimed_a: Vec<String> = session.claimed_by(Team::A).map(str::to_string).collect();
    let claimed_b: Vec<String> = session.claimed_by(Team::B).map(str::to_string).collect();
    let report = session.on_end_game_requested()?;

    match format {
        OutputFormat::Text => print!("{}", render_stats(&report, &names)),
        OutputFormat::Json => {
            let json_report = JsonScoreReport::from_report(&report, &names, |team| match team {
                Team::A => claimed_a.clone(),
                Team::B => claimed_b.clone(),
            });
            let json = serde_json::to_string_pretty(&json_report)
                .map_err(|e| CliError::new(format!("JSON serialization failed: {e}")))?;
            println!("{json}");
        }
    }

    Ok(())
}
