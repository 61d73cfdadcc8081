//! Test helpers for writing listing files into temporary workspaces.

use camino::{Utf8Path, Utf8PathBuf};
use rentscore_core::test_support::{sample_apartment, sample_neighborhood};
use serde_json::{Value, json};
use tempfile::TempDir;

/// Temporary directory holding a single listing file.
pub(super) struct ListingWorkspace {
    _dir: TempDir,
    listing_path: Utf8PathBuf,
}

impl ListingWorkspace {
    pub(super) fn new() -> Self {
        let dir = TempDir::new().expect("tempdir");
        let root = Utf8PathBuf::from_path_buf(dir.path().to_path_buf()).expect("utf-8 workspace");
        Self {
            _dir: dir,
            listing_path: root.join("listing.json"),
        }
    }

    pub(super) fn listing_path(&self) -> &Utf8Path {
        &self.listing_path
    }

    pub(super) fn write_json(&self, value: &Value) {
        let payload = serde_json::to_string_pretty(value).expect("serialise listing");
        write_utf8(&self.listing_path, payload.as_bytes());
    }

    pub(super) fn write_raw(&self, contents: &[u8]) {
        write_utf8(&self.listing_path, contents);
    }
}

fn write_utf8(path: &Utf8Path, contents: &[u8]) {
    std::fs::write(path, contents).expect("write test file");
}

/// The reference apartment and its neighborhood facts.
pub(super) fn reference_listing() -> Value {
    json!({
        "apartment": sample_apartment(),
        "neighborhood": sample_neighborhood(),
    })
}

/// Two scraped floor plans, only one with the default ideal layout.
pub(super) fn floor_plan_listing() -> Value {
    json!({
        "floor_plans": [
            {
                "name": "A1",
                "bedrooms": 1,
                "bathrooms": 1.0,
                "sqft": 720,
                "units": [{ "unit": "101", "rent": 1495.0 }]
            },
            {
                "name": "B2",
                "bedrooms": 2,
                "bathrooms": 2.0,
                "sqft": 1040,
                "units": [{ "unit": "304", "rent": 2310.0 }, { "unit": "212", "rent": 2185.0 }]
            }
        ],
        "amenity_text": ["Heated underground parking", "Stainless dishwasher"],
        "neighborhood": sample_neighborhood(),
    })
}

/// An apartment paired with an empty place survey.
pub(super) fn survey_listing() -> Value {
    json!({
        "apartment": sample_apartment(),
        "survey": { "origin": { "lat": 44.95, "lon": -93.3 } },
    })
}
