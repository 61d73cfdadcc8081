//! Category identifiers, the ten-category score vector, and colour tiers.
//!
//! A [`ScoreVector`] always carries all ten categories plus the overall
//! mean. It can only be built through [`ScoreVector::from_fn`], which clamps
//! every category into `0..=100` and derives `overall` itself, so a vector
//! with a stale or partial overall cannot exist.

use serde::{Deserialize, Serialize};

/// Highest value any score can take.
pub const MAX_SCORE: u8 = 100;

/// One of the ten scored categories, in report order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Category {
    /// Rent against budget and market.
    Price,
    /// Bedroom, bathroom, and floor-area fit.
    Rooms,
    /// All-or-nothing required amenities.
    Necessities,
    /// Proportional optional amenities.
    NiceToHaves,
    /// Nearby school quality or density.
    Schools,
    /// Inverted crime index.
    Crime,
    /// Restaurant density and quality.
    Restaurants,
    /// Drive time and transit access.
    Commute,
    /// Bar, club, and cinema density and quality.
    Nightlife,
    /// Grocery variety, proximity, and warehouse-club access.
    Grocery,
}

impl Category {
    /// Every category in report order.
    pub const ALL: [Self; 10] = [
        Self::Price,
        Self::Rooms,
        Self::Necessities,
        Self::NiceToHaves,
        Self::Schools,
        Self::Crime,
        Self::Restaurants,
        Self::Commute,
        Self::Nightlife,
        Self::Grocery,
    ];

    /// Return the category's report key.
    ///
    /// # Examples
    /// ```
    /// use rentscore_core::Category;
    ///
    /// assert_eq!(Category::NiceToHaves.as_str(), "nice_to_haves");
    /// ```
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Price => "price",
            Self::Rooms => "rooms",
            Self::Necessities => "necessities",
            Self::NiceToHaves => "nice_to_haves",
            Self::Schools => "schools",
            Self::Crime => "crime",
            Self::Restaurants => "restaurants",
            Self::Commute => "commute",
            Self::Nightlife => "nightlife",
            Self::Grocery => "grocery",
        }
    }
}

impl std::fmt::Display for Category {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl std::str::FromStr for Category {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let normalised = s.trim().to_lowercase();
        Self::ALL
            .into_iter()
            .find(|category| category.as_str() == normalised)
            .ok_or_else(|| format!("unknown category '{s}'"))
    }
}

/// Qualitative tier for presenting a score.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ScoreColor {
    /// `75..=100`.
    Green,
    /// `50..=74`.
    Yellow,
    /// `0..=49`.
    Red,
}

impl ScoreColor {
    /// Lowest score classified as green.
    pub const GREEN_THRESHOLD: u8 = 75;
    /// Lowest score classified as yellow.
    pub const YELLOW_THRESHOLD: u8 = 50;

    /// Map a score onto its tier.
    ///
    /// # Examples
    /// ```
    /// use rentscore_core::ScoreColor;
    ///
    /// assert_eq!(ScoreColor::classify(75), ScoreColor::Green);
    /// assert_eq!(ScoreColor::classify(49), ScoreColor::Red);
    /// ```
    #[must_use]
    pub const fn classify(score: u8) -> Self {
        if score >= Self::GREEN_THRESHOLD {
            Self::Green
        } else if score >= Self::YELLOW_THRESHOLD {
            Self::Yellow
        } else {
            Self::Red
        }
    }

    /// Return the tier as a lowercase `&str`.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Green => "green",
            Self::Yellow => "yellow",
            Self::Red => "red",
        }
    }
}

impl std::fmt::Display for ScoreColor {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Complete result of scoring one listing.
///
/// Serialises as a map with the ten category keys followed by `overall`.
///
/// # Examples
/// ```
/// use rentscore_core::{Category, ScoreVector};
///
/// let vector = ScoreVector::from_fn(|category| match category {
///     Category::Price => 100,
///     _ => 50,
/// });
/// assert_eq!(vector.get(Category::Price), 100);
/// assert_eq!(vector.overall(), 55);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub struct ScoreVector {
    price: u8,
    rooms: u8,
    necessities: u8,
    nice_to_haves: u8,
    schools: u8,
    crime: u8,
    restaurants: u8,
    commute: u8,
    nightlife: u8,
    grocery: u8,
    overall: u8,
}

impl ScoreVector {
    /// Build a vector by asking `score` for each category in report order.
    ///
    /// Values above [`MAX_SCORE`] are clamped. `overall` is the mean of the
    /// ten clamped values rounded half to even.
    #[must_use]
    pub fn from_fn<F>(mut score: F) -> Self
    where
        F: FnMut(Category) -> u8,
    {
        let [
            price,
            rooms,
            necessities,
            nice_to_haves,
            schools,
            crime,
            restaurants,
            commute,
            nightlife,
            grocery,
        ] = Category::ALL.map(|category| score(category).min(MAX_SCORE));
        let overall = rounded_mean(&[
            price,
            rooms,
            necessities,
            nice_to_haves,
            schools,
            crime,
            restaurants,
            commute,
            nightlife,
            grocery,
        ]);
        Self {
            price,
            rooms,
            necessities,
            nice_to_haves,
            schools,
            crime,
            restaurants,
            commute,
            nightlife,
            grocery,
            overall,
        }
    }

    /// Score for one category.
    #[must_use]
    pub const fn get(&self, category: Category) -> u8 {
        match category {
            Category::Price => self.price,
            Category::Rooms => self.rooms,
            Category::Necessities => self.necessities,
            Category::NiceToHaves => self.nice_to_haves,
            Category::Schools => self.schools,
            Category::Crime => self.crime,
            Category::Restaurants => self.restaurants,
            Category::Commute => self.commute,
            Category::Nightlife => self.nightlife,
            Category::Grocery => self.grocery,
        }
    }

    /// Rounded mean of the ten category scores.
    #[must_use]
    pub const fn overall(&self) -> u8 {
        self.overall
    }

    /// Walk the categories in report order.
    pub fn iter(&self) -> impl Iterator<Item = (Category, u8)> + '_ {
        Category::ALL
            .into_iter()
            .map(move |category| (category, self.get(category)))
    }

    /// Classify every score, including `overall`.
    #[must_use]
    pub const fn colors(&self) -> ScoreColors {
        ScoreColors {
            price: ScoreColor::classify(self.price),
            rooms: ScoreColor::classify(self.rooms),
            necessities: ScoreColor::classify(self.necessities),
            nice_to_haves: ScoreColor::classify(self.nice_to_haves),
            schools: ScoreColor::classify(self.schools),
            crime: ScoreColor::classify(self.crime),
            restaurants: ScoreColor::classify(self.restaurants),
            commute: ScoreColor::classify(self.commute),
            nightlife: ScoreColor::classify(self.nightlife),
            grocery: ScoreColor::classify(self.grocery),
            overall: ScoreColor::classify(self.overall),
        }
    }
}

/// Colour tiers for every key of a [`ScoreVector`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct ScoreColors {
    /// Tier of [`Category::Price`].
    pub price: ScoreColor,
    /// Tier of [`Category::Rooms`].
    pub rooms: ScoreColor,
    /// Tier of [`Category::Necessities`].
    pub necessities: ScoreColor,
    /// Tier of [`Category::NiceToHaves`].
    pub nice_to_haves: ScoreColor,
    /// Tier of [`Category::Schools`].
    pub schools: ScoreColor,
    /// Tier of [`Category::Crime`].
    pub crime: ScoreColor,
    /// Tier of [`Category::Restaurants`].
    pub restaurants: ScoreColor,
    /// Tier of [`Category::Commute`].
    pub commute: ScoreColor,
    /// Tier of [`Category::Nightlife`].
    pub nightlife: ScoreColor,
    /// Tier of [`Category::Grocery`].
    pub grocery: ScoreColor,
    /// Tier of the overall score.
    pub overall: ScoreColor,
}

#[expect(
    clippy::float_arithmetic,
    reason = "the mean is taken in floating point to round half to even"
)]
#[expect(
    clippy::cast_possible_truncation,
    clippy::cast_sign_loss,
    reason = "the mean of values in 0..=100 stays within u8"
)]
fn rounded_mean(scores: &[u8; 10]) -> u8 {
    let sum: u32 = scores.iter().copied().map(u32::from).sum();
    let mean = f64::from(sum) / 10.0;
    mean.round_ties_even() as u8
}
