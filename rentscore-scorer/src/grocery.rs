//! Grocery variety, proximity of the closest store, and warehouse-club
//! access.
//!
//! Variety is keyed on lower-cased store names, so differently named
//! branches of one chain count separately while identical names collapse.

use std::collections::BTreeSet;

use rentscore_core::GroceryStore;

use crate::math::{count_of, ratio, to_score};

const VARIETY_RADIUS_MILES: f64 = 3.0;
const VARIETY_MAX: f64 = 40.0;
const VARIETY_FULL_AT: f64 = 5.0;
const PROXIMITY_STEPS: [(f64, u8); 4] = [(0.5, 30), (1.0, 25), (2.0, 15), (3.0, 10)];
const WAREHOUSE_STEPS: [(f64, u8); 3] = [(3.0, 30), (5.0, 20), (10.0, 10)];
const WAREHOUSE_NAME: &str = "costco";

/// Score the grocery category; `0` without any stores.
///
/// # Examples
/// ```
/// use rentscore_core::GroceryStore;
/// use rentscore_scorer::score_grocery;
///
/// assert_eq!(score_grocery(&[]), 0);
/// assert_eq!(score_grocery(&[GroceryStore::new("Costco", 2.0)]), 53);
/// ```
#[must_use]
pub fn score_grocery(stores: &[GroceryStore]) -> u8 {
    let Some(closest) = closest_distance(stores.iter()) else {
        return 0;
    };
    let warehouse = closest_distance(
        stores
            .iter()
            .filter(|store| store.name.to_lowercase().contains(WAREHOUSE_NAME)),
    )
    .map_or(0, |distance| step(&WAREHOUSE_STEPS, distance));
    variety(stores) + step(&PROXIMITY_STEPS, closest) + warehouse
}

#[expect(clippy::float_arithmetic, reason = "variety scaled to forty points")]
fn variety(stores: &[GroceryStore]) -> u8 {
    let names: BTreeSet<String> = stores
        .iter()
        .filter(|store| store.distance_miles <= VARIETY_RADIUS_MILES)
        .map(|store| store.name.to_lowercase())
        .collect();
    to_score(VARIETY_MAX * ratio(count_of(names.len()), VARIETY_FULL_AT)).min(40)
}

fn closest_distance<'a, I>(stores: I) -> Option<f64>
where
    I: Iterator<Item = &'a GroceryStore>,
{
    stores
        .map(|store| store.distance_miles)
        .reduce(f64::min)
}

fn step(steps: &[(f64, u8)], distance: f64) -> u8 {
    steps
        .iter()
        .find(|(limit, _)| distance <= *limit)
        .map_or(0, |(_, points)| *points)
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    fn stores(entries: &[(&str, f64)]) -> Vec<GroceryStore> {
        entries
            .iter()
            .map(|(name, distance)| GroceryStore::new(*name, *distance))
            .collect()
    }

    #[rstest]
    fn empty_list_scores_zero() {
        assert_eq!(score_grocery(&[]), 0);
    }

    #[rstest]
    fn lone_costco_two_miles_out() {
        // Variety 8, proximity 15, warehouse 30.
        assert_eq!(score_grocery(&stores(&[("Costco", 2.0)])), 53);
    }

    #[rstest]
    fn sample_neighborhood_stores() {
        let list = stores(&[
            ("Trader Joe's", 0.8),
            ("Cub Foods", 1.2),
            ("Costco", 4.5),
            ("Aldi", 1.5),
            ("Target", 0.5),
        ]);
        assert_eq!(score_grocery(&list), 82);
    }

    #[rstest]
    fn identical_names_collapse_for_variety() {
        let list = stores(&[("Aldi", 0.4), ("ALDI", 1.0), ("aldi", 2.0)]);
        // Variety 8, proximity 30, no warehouse.
        assert_eq!(score_grocery(&list), 38);
    }

    #[rstest]
    fn variety_caps_at_forty() {
        let list = stores(&[
            ("A", 3.0),
            ("B", 3.0),
            ("C", 3.0),
            ("D", 3.0),
            ("E", 3.0),
            ("F", 3.0),
        ]);
        // Variety 40, proximity 10.
        assert_eq!(score_grocery(&list), 50);
    }

    #[rstest]
    fn stores_beyond_three_miles_add_no_variety() {
        assert_eq!(score_grocery(&stores(&[("Far Mart", 3.5)])), 0);
    }

    #[rstest]
    #[case(3.0, 30)]
    #[case(5.0, 20)]
    #[case(10.0, 10)]
    #[case(10.5, 0)]
    fn warehouse_bonus_uses_the_closest_match(#[case] distance: f64, #[case] bonus: u8) {
        let list = stores(&[
            ("Costco Business Center", 25.0),
            ("costco wholesale", distance),
            ("Lunds", 0.2),
        ]);
        let baseline = score_grocery(&stores(&[("Lunds", 0.2)]));
        let variety_gain = if distance <= 3.0 { 8 } else { 0 };
        assert_eq!(score_grocery(&list), baseline + variety_gain + bonus);
    }
}
