//! Command-line interface for scoring apartment listings.
#![forbid(unsafe_code)]

use clap::{Parser, Subcommand};

mod amenities;
mod error;
mod listing;
mod score;

pub use error::CliError;

use amenities::{AmenitiesArgs, run_amenities};
use score::{ScoreArgs, run_score};

const ARG_SCORE_LISTING: &str = "listing";
const ARG_BUDGET_CAP: &str = "budget-cap";
const ARG_MARKET_AVG_RENT: &str = "market-avg-rent";
const ARG_IDEAL_BEDROOMS: &str = "ideal-bedrooms";
const ARG_IDEAL_BATHROOMS: &str = "ideal-bathrooms";
const ARG_IDEAL_SQFT: &str = "ideal-sqft";
const ARG_NECESSITIES: &str = "necessities";
const ARG_NICE_TO_HAVES: &str = "nice-to-haves";
const ARG_COMMUTE_LAT: &str = "commute-lat";
const ARG_COMMUTE_LON: &str = "commute-lon";
const ARG_POLICY: &str = "policy";
const ENV_SCORE_LISTING: &str = "RENTSCORE_CMDS_SCORE_LISTING_PATH";

/// Run the rentscore CLI with the current process arguments and environment.
///
/// # Errors
/// Returns [`CliError`] when arguments, configuration, or the listing file
/// are invalid, or when the report cannot be written.
pub fn run() -> Result<(), CliError> {
    let cli = Cli::try_parse().map_err(CliError::ArgumentParsing)?;
    match cli.command {
        Command::Score(args) => run_score(args),
        Command::Amenities(args) => run_amenities(&args),
    }
}

#[derive(Debug, Parser)]
#[command(
    name = "rentscore",
    about = "Score apartment listings against personal preferences",
    version
)]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Score a listing described in a JSON file.
    Score(ScoreArgs),
    /// Classify free-text amenity phrases.
    Amenities(AmenitiesArgs),
}

#[cfg(test)]
mod tests;
