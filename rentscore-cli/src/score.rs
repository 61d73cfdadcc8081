//! Score command implementation for the rentscore CLI.

use std::io::Write;
use std::str::FromStr;

use camino::Utf8PathBuf;
use clap::Parser;
use ortho_config::{OrthoConfig, SubcmdConfigMerge};
use rentscore_core::{
    AmenityKey, GeoPoint, ListingScorer, ScoreColors, ScoreVector, ScoringPolicy, Settings,
};
use rentscore_scorer::CategoryScorer;
use serde::{Deserialize, Serialize};

use crate::listing::{Candidate, load_listing};
use crate::{
    ARG_BUDGET_CAP, ARG_COMMUTE_LAT, ARG_COMMUTE_LON, ARG_IDEAL_BATHROOMS, ARG_IDEAL_BEDROOMS,
    ARG_IDEAL_SQFT, ARG_MARKET_AVG_RENT, ARG_NECESSITIES, ARG_NICE_TO_HAVES, ARG_POLICY,
    ARG_SCORE_LISTING, CliError, ENV_SCORE_LISTING,
};

/// CLI arguments for the `score` subcommand.
#[derive(Debug, Clone, Parser, Deserialize, Serialize, OrthoConfig, Default)]
#[command(
    long_about = "Score a listing read from a JSON file. Preferences can come \
                 from CLI flags, configuration files, or environment \
                 variables; anything left unset uses the built-in defaults.",
    about = "Score an apartment listing"
)]
#[ortho_config(prefix = "RENTSCORE")]
pub(crate) struct ScoreArgs {
    /// Path to a JSON file describing the listing.
    #[arg(value_name = "path")]
    #[serde(default)]
    pub(crate) listing_path: Option<Utf8PathBuf>,
    /// Hard monthly budget.
    #[arg(long = ARG_BUDGET_CAP, value_name = "amount")]
    #[serde(default)]
    pub(crate) budget_cap: Option<f64>,
    /// Typical rent for comparable units.
    #[arg(long = ARG_MARKET_AVG_RENT, value_name = "amount")]
    #[serde(default)]
    pub(crate) market_avg_rent: Option<f64>,
    /// Desired number of bedrooms.
    #[arg(long = ARG_IDEAL_BEDROOMS, value_name = "count")]
    #[serde(default)]
    pub(crate) ideal_bedrooms: Option<u32>,
    /// Desired number of bathrooms.
    #[arg(long = ARG_IDEAL_BATHROOMS, value_name = "count")]
    #[serde(default)]
    pub(crate) ideal_bathrooms: Option<f64>,
    /// Desired floor area in square feet.
    #[arg(long = ARG_IDEAL_SQFT, value_name = "sqft")]
    #[serde(default)]
    pub(crate) ideal_sqft: Option<u32>,
    /// Comma-separated required amenities.
    #[arg(long = ARG_NECESSITIES, value_name = "keys")]
    #[serde(default)]
    pub(crate) necessities: Option<String>,
    /// Comma-separated optional amenities.
    #[arg(long = ARG_NICE_TO_HAVES, value_name = "keys")]
    #[serde(default)]
    pub(crate) nice_to_haves: Option<String>,
    /// Latitude of the commute destination.
    #[arg(long = ARG_COMMUTE_LAT, value_name = "degrees", allow_hyphen_values = true)]
    #[serde(default)]
    pub(crate) commute_lat: Option<f64>,
    /// Longitude of the commute destination.
    #[arg(long = ARG_COMMUTE_LON, value_name = "degrees", allow_hyphen_values = true)]
    #[serde(default)]
    pub(crate) commute_lon: Option<f64>,
    /// Formula preset: `full` or `proximity`.
    #[arg(long = ARG_POLICY, value_name = "preset")]
    #[serde(default)]
    pub(crate) policy: Option<String>,
}

impl ScoreArgs {
    pub(crate) fn into_config(self) -> Result<ScoreConfig, CliError> {
        let merged = self.load_and_merge().map_err(CliError::Configuration)?;
        ScoreConfig::try_from(merged)
    }
}

/// Resolved `score` command configuration.
#[derive(Debug, Clone, PartialEq)]
pub(crate) struct ScoreConfig {
    /// Path to the JSON listing file.
    pub(crate) listing_path: Utf8PathBuf,
    /// Validated preferences.
    pub(crate) settings: Settings,
    /// Explicit formula preset, if one was chosen.
    pub(crate) policy: Option<ScoringPolicy>,
}

impl TryFrom<ScoreArgs> for ScoreConfig {
    type Error = CliError;

    fn try_from(args: ScoreArgs) -> Result<Self, Self::Error> {
        let listing_path = args.listing_path.ok_or(CliError::MissingArgument {
            field: ARG_SCORE_LISTING,
            env: ENV_SCORE_LISTING,
        })?;

        let mut settings = Settings::default();
        if let Some(budget_cap) = args.budget_cap {
            settings = settings.with_budget_cap(budget_cap);
        }
        if let Some(market_avg_rent) = args.market_avg_rent {
            settings = settings.with_market_avg_rent(market_avg_rent);
        }
        if let Some(bedrooms) = args.ideal_bedrooms {
            settings = settings.with_ideal_bedrooms(bedrooms);
        }
        if let Some(bathrooms) = args.ideal_bathrooms {
            settings = settings.with_ideal_bathrooms(bathrooms);
        }
        if let Some(sqft) = args.ideal_sqft {
            settings = settings.with_ideal_sqft(sqft);
        }
        if let Some(raw) = args.necessities.as_deref() {
            settings = settings.with_necessities(parse_amenities(ARG_NECESSITIES, raw)?);
        }
        if let Some(raw) = args.nice_to_haves.as_deref() {
            settings = settings.with_nice_to_haves(parse_amenities(ARG_NICE_TO_HAVES, raw)?);
        }
        let default_target = settings.commute_target();
        settings = settings.with_commute_target(GeoPoint::new(
            args.commute_lat.unwrap_or(default_target.lat),
            args.commute_lon.unwrap_or(default_target.lon),
        ));

        let policy = args
            .policy
            .as_deref()
            .map(ScoringPolicy::from_str)
            .transpose()
            .map_err(|message| CliError::InvalidOption {
                field: ARG_POLICY,
                message,
            })?;

        Ok(Self {
            listing_path,
            settings: settings.validate()?,
            policy,
        })
    }
}

/// Parse a comma-separated amenity list; blank entries are skipped.
fn parse_amenities(field: &'static str, raw: &str) -> Result<Vec<AmenityKey>, CliError> {
    raw.split(',')
        .map(str::trim)
        .filter(|key| !key.is_empty())
        .map(AmenityKey::from_str)
        .collect::<Result<_, _>>()
        .map_err(|message| CliError::InvalidOption { field, message })
}

/// Builds the scorer for one invocation.
pub(crate) trait ScorerBuilder {
    fn build(&self, policy: ScoringPolicy) -> Box<dyn ListingScorer>;
}

pub(crate) struct DefaultScorerBuilder;

impl ScorerBuilder for DefaultScorerBuilder {
    fn build(&self, policy: ScoringPolicy) -> Box<dyn ListingScorer> {
        Box::new(CategoryScorer::new(policy))
    }
}

/// Scores and colour tiers for one apartment.
#[derive(Debug, Serialize)]
struct ListingReport {
    #[serde(skip_serializing_if = "Option::is_none")]
    plan: Option<String>,
    scores: ScoreVector,
    colors: ScoreColors,
}

/// A single apartment reports as an object, floor plans as an array.
#[derive(Debug, Serialize)]
#[serde(untagged)]
enum Report {
    Single(ListingReport),
    Plans(Vec<ListingReport>),
}

pub(crate) fn run_score(args: ScoreArgs) -> Result<(), CliError> {
    let mut stdout = std::io::stdout().lock();
    run_score_with(args, &DefaultScorerBuilder, &mut stdout)
}

pub(crate) fn run_score_with(
    args: ScoreArgs,
    builder: &dyn ScorerBuilder,
    writer: &mut dyn Write,
) -> Result<(), CliError> {
    let config = args.into_config()?;
    let report = execute_score(&config, builder)?;
    write_report(writer, &report)
}

fn execute_score(config: &ScoreConfig, builder: &dyn ScorerBuilder) -> Result<Report, CliError> {
    let path = config.listing_path.as_path();
    let listing = load_listing(path)?;
    let candidates = listing.candidates(&config.settings);
    if candidates.is_empty() {
        return Err(CliError::EmptyListing {
            path: path.to_path_buf(),
        });
    }
    let neighborhood = listing.neighborhood(path, &config.settings)?;
    let scorer = builder.build(
        config
            .policy
            .unwrap_or_else(|| listing.default_policy()),
    );

    let mut reports = candidates
        .into_iter()
        .map(|Candidate { plan, apartment }| -> Result<ListingReport, CliError> {
            let scores = scorer.score(&apartment, &neighborhood, &config.settings)?;
            Ok(ListingReport {
                plan,
                colors: scores.colors(),
                scores,
            })
        })
        .collect::<Result<Vec<_>, CliError>>()?;

    if listing.is_single()
        && let Some(report) = reports.pop()
    {
        return Ok(Report::Single(report));
    }
    Ok(Report::Plans(reports))
}

fn write_report(writer: &mut dyn Write, report: &Report) -> Result<(), CliError> {
    let payload = serde_json::to_string_pretty(report).map_err(CliError::SerialiseReport)?;
    writer
        .write_all(payload.as_bytes())
        .map_err(CliError::WriteOutput)?;
    writer.write_all(b"\n").map_err(CliError::WriteOutput)?;
    Ok(())
}

#[cfg(test)]
pub(crate) fn config_from_layers_for_test(
    layers: Vec<ortho_config::MergeLayer<'static>>,
) -> Result<ScoreConfig, CliError> {
    let merged = ScoreArgs::merge_from_layers(layers).map_err(CliError::from)?;
    ScoreConfig::try_from(merged)
}
