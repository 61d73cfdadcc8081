//! Error types emitted by the rentscore CLI.
//!
//! Keep this error type reasonably small, as many CLI helpers return
//! `Result<_, CliError>` and the workspace enables `clippy::result_large_err`.

use std::sync::Arc;

use camino::Utf8PathBuf;
use rentscore_core::{ScoreError, SettingsError};
use rentscore_data::SurveyError;
use thiserror::Error;

/// Errors emitted by the rentscore CLI.
#[derive(Debug, Error)]
pub enum CliError {
    /// Provided arguments failed Clap validation.
    #[error(transparent)]
    ArgumentParsing(#[from] clap::Error),
    /// Configuration layering failed (files, env, CLI).
    #[error("failed to load configuration: {0}")]
    Configuration(#[from] Arc<ortho_config::OrthoError>),
    /// A required option is missing after configuration merging.
    #[error("missing {field} (set --{field} or {env})")]
    MissingArgument {
        /// Name of the missing option.
        field: &'static str,
        /// Environment variable that can supply it.
        env: &'static str,
    },
    /// An option value could not be parsed.
    #[error("invalid --{field}: {message}")]
    InvalidOption {
        /// Name of the rejected option.
        field: &'static str,
        /// Parser diagnostic.
        message: String,
    },
    /// The merged preferences failed validation.
    #[error("invalid settings: {0}")]
    InvalidSettings(#[from] SettingsError),
    /// Opening the listing file failed.
    #[error("failed to open listing at {path:?}: {source}")]
    OpenListing {
        /// Listing path.
        path: Utf8PathBuf,
        /// Underlying I/O failure.
        #[source]
        source: std::io::Error,
    },
    /// Listing JSON could not be decoded.
    #[error("failed to parse listing JSON at {path:?}: {source}")]
    ParseListing {
        /// Listing path.
        path: Utf8PathBuf,
        /// Decoder failure.
        #[source]
        source: serde_json::Error,
    },
    /// The listing has neither an apartment nor floor plans.
    #[error("listing at {path:?} describes no apartment or floor plans")]
    EmptyListing {
        /// Listing path.
        path: Utf8PathBuf,
    },
    /// The listing supplies both neighborhood facts and a survey.
    #[error("listing at {path:?} has both neighborhood facts and a survey")]
    ConflictingNeighborhood {
        /// Listing path.
        path: Utf8PathBuf,
    },
    /// The listing's survey could not be assembled.
    #[error("failed to assemble survey in {path:?}: {source}")]
    Survey {
        /// Listing path.
        path: Utf8PathBuf,
        /// Assembly failure.
        #[source]
        source: SurveyError,
    },
    /// The scorer rejected the listing.
    #[error("failed to score listing: {0}")]
    Score(#[from] ScoreError),
    /// Serialising the report failed.
    #[error("failed to serialise report: {0}")]
    SerialiseReport(#[source] serde_json::Error),
    /// Writing the report failed.
    #[error("failed to write output: {0}")]
    WriteOutput(#[source] std::io::Error),
}
