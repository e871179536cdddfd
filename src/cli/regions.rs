//! Regions command: list and validate the loaded towns.

use super::output::{JsonRegion, format_regions};
use super::{CliError, GameOptions, OutputFormat};
use scramble::board::layout_rows;

/// Execute the regions command.
///
/// Loading the registry is the validation: duplicate or blank ids and
/// malformed records fail here with the same errors a game would hit.
///
/// # Errors
///
/// Returns an error if the seed or config cannot be loaded.
pub(crate) fn execute(
    options: &GameOptions,
    format: OutputFormat,
    board: bool,
) -> Result<(), CliError> {
    let super::Setup { session, .. } = options.setup()?;
    let registry = session.registry();

    match format {
        OutputFormat::Json => {
            let regions: Vec<JsonRegion> = registry.all().iter().map(JsonRegion::from).collect();
            let json = serde_json::to_string_pretty(&regions)
                .map_err(|e| CliError::new(format!("JSON serialization failed: {e}")))?;
            println!("{json}");
        }
        OutputFormat::Text if board => {
            for (i, row) in layout_rows(registry).iter().enumerate() {
                let names: Vec<&str> = row.iter().map(|r| r.id()).collect();
                println!("Row {}: {}", i + 1, names.join(" | "));
            }
        }
        OutputFormat::Text => print!("{}", format_regions(registry.all())),
    }

    Ok(())
}
