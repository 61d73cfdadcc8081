//! Free-text amenity classification.
//!
//! Matching is plain case-insensitive substring search over the supplied
//! text. Broad keywords produce false positives: `"package"` alone selects
//! [`AmenityKey::PackageLockers`] and `"spa"` matches inside `"space"`. The
//! table is kept as collected from listing sites rather than tightened.

use rentscore_core::{AmenityKey, AmenitySet};

/// Keywords that select each amenity.
pub const AMENITY_KEYWORDS: [(AmenityKey, &[&str]); 8] = [
    (
        AmenityKey::CoveredParking,
        &[
            "covered parking",
            "garage parking",
            "indoor parking",
            "heated parking",
            "parking garage",
            "underground parking",
            "heated underground",
        ],
    ),
    (AmenityKey::Dishwasher, &["dishwasher"]),
    (
        AmenityKey::InUnitLaundry,
        &[
            "in-unit laundry",
            "in unit laundry",
            "washer/dryer",
            "washer and dryer",
            "in-home laundry",
            "w/d in unit",
            "washer & dryer",
            "in unit washer",
            "full-size washer",
            "in-unit washer",
            "washer dryer",
        ],
    ),
    (
        AmenityKey::Ac,
        &[
            "air conditioning",
            "a/c",
            "central air",
            "climate control",
            "air-conditioning",
        ],
    ),
    (AmenityKey::Pool, &["pool", "swimming"]),
    (
        AmenityKey::SaunaHotTub,
        &["sauna", "hot tub", "spa", "steam room"],
    ),
    (
        AmenityKey::Gym,
        &[
            "gym",
            "fitness center",
            "fitness room",
            "exercise room",
            "workout",
            "fitness",
        ],
    ),
    (
        AmenityKey::PackageLockers,
        &[
            "package locker",
            "parcel locker",
            "package room",
            "mailroom",
            "package concierge",
            "package",
        ],
    ),
];

/// Classify a block of text such as a whole listing page.
///
/// # Examples
/// ```
/// use rentscore_core::AmenityKey;
/// use rentscore_data::classify_text;
///
/// let found = classify_text("Heated Underground Parking and a 24-hour Fitness Center");
/// assert!(found.contains(&AmenityKey::CoveredParking));
/// assert!(found.contains(&AmenityKey::Gym));
/// ```
#[must_use]
pub fn classify_text(text: &str) -> AmenitySet {
    let haystack = text.to_lowercase();
    AMENITY_KEYWORDS
        .iter()
        .filter(|(_, keywords)| keywords.iter().any(|keyword| haystack.contains(keyword)))
        .map(|(key, _)| *key)
        .collect()
}

/// Classify individual amenity phrases scraped from a listing.
///
/// Phrases are joined with newlines before matching so that a keyword never
/// spans two phrases.
#[must_use]
pub fn classify_phrases<I, S>(phrases: I) -> AmenitySet
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let joined = phrases
        .into_iter()
        .map(|phrase| phrase.as_ref().to_owned())
        .collect::<Vec<_>>()
        .join("\n");
    classify_text(&joined)
}
