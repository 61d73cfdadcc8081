//! Amenities command: classify free-text phrases into canonical keys.

use std::io::Write;

use clap::Parser;
use rentscore_core::AmenitySet;
use rentscore_data::classify_phrases;

use crate::CliError;

/// CLI arguments for the `amenities` subcommand.
#[derive(Debug, Clone, Parser, Default)]
#[command(about = "Classify amenity phrases into canonical keys")]
pub(crate) struct AmenitiesArgs {
    /// Amenity phrases as they appear on a listing page.
    #[arg(value_name = "phrase", required = true)]
    pub(crate) phrases: Vec<String>,
}

pub(crate) fn run_amenities(args: &AmenitiesArgs) -> Result<(), CliError> {
    let mut stdout = std::io::stdout().lock();
    run_amenities_with(args, &mut stdout)
}

pub(crate) fn run_amenities_with(
    args: &AmenitiesArgs,
    writer: &mut dyn Write,
) -> Result<(), CliError> {
    let amenities: AmenitySet = classify_phrases(&args.phrases);
    let payload = serde_json::to_string(&amenities).map_err(CliError::SerialiseReport)?;
    writer
        .write_all(payload.as_bytes())
        .map_err(CliError::WriteOutput)?;
    writer.write_all(b"\n").map_err(CliError::WriteOutput)?;
    Ok(())
}
