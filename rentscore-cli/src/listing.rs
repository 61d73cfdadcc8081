//! Listing files accepted by the `score` command.
//!
//! A listing names either one `apartment` or a set of scraped
//! `floor_plans`, plus optional canonical `amenities`, free-text
//! `amenity_text`, and at most one of `neighborhood` facts or a raw place
//! `survey`.

use std::io::BufReader;

use camino::Utf8Path;
use cap_std::{ambient_authority, fs_utf8};
use rentscore_core::{
    AmenitySet, Apartment, NeighborhoodFacts, ScoringPolicy, Settings, StraightLineEstimator,
};
use rentscore_data::{FloorPlan, NeighborhoodSurvey, classify_phrases, select_floor_plans};
use serde::Deserialize;

use crate::CliError;

/// Decoded listing file.
#[derive(Debug, Clone, PartialEq, Default, Deserialize)]
#[serde(default)]
pub(crate) struct Listing {
    pub(crate) apartment: Option<Apartment>,
    pub(crate) floor_plans: Vec<FloorPlan>,
    pub(crate) amenities: AmenitySet,
    pub(crate) amenity_text: Vec<String>,
    pub(crate) neighborhood: Option<NeighborhoodFacts>,
    pub(crate) survey: Option<NeighborhoodSurvey>,
}

/// One apartment to score, tagged with its floor-plan name when it came
/// from one.
#[derive(Debug, Clone, PartialEq)]
pub(crate) struct Candidate {
    pub(crate) plan: Option<String>,
    pub(crate) apartment: Apartment,
}

impl Listing {
    /// Canonical amenities plus those classified from the free text.
    pub(crate) fn amenity_set(&self) -> AmenitySet {
        let mut amenities = self.amenities.clone();
        amenities.extend(classify_phrases(&self.amenity_text));
        amenities
    }

    /// Whether the listing names a single apartment rather than floor plans.
    pub(crate) const fn is_single(&self) -> bool {
        self.apartment.is_some()
    }

    /// Apartments to score: the listed apartment, or the floor plans matching
    /// the ideal layout.
    pub(crate) fn candidates(&self, settings: &Settings) -> Vec<Candidate> {
        let amenities = self.amenity_set();
        if let Some(apartment) = &self.apartment {
            let mut merged = apartment.clone();
            merged.amenities.extend(amenities);
            return vec![Candidate {
                plan: None,
                apartment: merged,
            }];
        }
        select_floor_plans(&self.floor_plans, settings)
            .into_iter()
            .map(|plan| Candidate {
                plan: plan.name.clone(),
                apartment: plan.to_apartment(amenities.clone()),
            })
            .collect()
    }

    /// Policy used when the caller does not pick one: surveys carry no
    /// ratings or crime data, so they score proximity-only.
    pub(crate) const fn default_policy(&self) -> ScoringPolicy {
        if self.survey.is_some() {
            ScoringPolicy::proximity_only()
        } else {
            ScoringPolicy::full()
        }
    }

    /// Neighborhood facts given directly, assembled from the survey, or
    /// empty.
    pub(crate) fn neighborhood(
        &self,
        path: &Utf8Path,
        settings: &Settings,
    ) -> Result<NeighborhoodFacts, CliError> {
        match (&self.neighborhood, &self.survey) {
            (Some(_), Some(_)) => Err(CliError::ConflictingNeighborhood {
                path: path.to_path_buf(),
            }),
            (Some(facts), None) => Ok(facts.clone()),
            (None, Some(survey)) => survey
                .assemble(settings.commute_target(), &StraightLineEstimator::default())
                .map_err(|source| CliError::Survey {
                    path: path.to_path_buf(),
                    source,
                }),
            (None, None) => Ok(NeighborhoodFacts::default()),
        }
    }
}

/// Open a UTF-8 file path using ambient authority.
fn open_utf8_file(path: &Utf8Path) -> std::io::Result<fs_utf8::File> {
    fs_utf8::File::open_ambient(path, ambient_authority())
}

/// Loads a JSON-encoded [`Listing`] from disk.
pub(crate) fn load_listing(path: &Utf8Path) -> Result<Listing, CliError> {
    let file = open_utf8_file(path).map_err(|source| CliError::OpenListing {
        path: path.to_path_buf(),
        source,
    })?;
    let reader = BufReader::new(file);
    serde_json::from_reader(reader).map_err(|source| CliError::ParseListing {
        path: path.to_path_buf(),
        source,
    })
}
