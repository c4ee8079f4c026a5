//! Baseline demographic estimation.
//!
//! All variation comes from [`coordinate_seed`], a trigonometric hash of
//! the center point, so estimates are idempotent: the same coordinates
//! always produce the same numbers.

use std::f64::consts::PI;

use territory_map_demographics_models::DemographicEstimate;

use crate::{regions, score};

/// US average population density, residents per square mile.
pub const US_AVG_DENSITY_PER_SQ_MI: f64 = 94.0;
/// US median household income, dollars (ACS baseline).
pub const US_MEDIAN_HOUSEHOLD_INCOME: f64 = 74580.0;
/// US median age, years.
pub const US_MEDIAN_AGE: f64 = 38.5;
/// US average household size.
const PERSONS_PER_HOUSEHOLD: f64 = 2.53;
/// Share of the population that is adult (18+).
const ADULT_SHARE: f64 = 0.77;
/// Base share of adults who are implant candidates.
const BASE_CANDIDATE_RATE: f64 = 0.065;

/// Deterministic pseudo-random value in `[0, 1)` hashed from a coordinate
/// pair.
///
/// The classic GPU-noise construction `fract(|sin(lat*k1 + lng*k2)| * k3)`.
/// Deliberately not a seeded PRNG object: idempotence over coordinates is a
/// required property of the estimator, so the seed must be a pure function
/// of the inputs.
#[must_use]
pub fn coordinate_seed(lat: f64, lng: f64) -> f64 {
    ((lat * 12.9898 + lng * 78.233).sin() * 43758.5453).abs().fract()
}

/// Rounds to one decimal place.
pub(crate) fn round1(value: f64) -> f64 {
    (value * 10.0).round() / 10.0
}

/// Rounds to two decimal places.
pub(crate) fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}

/// Estimates demographics for the disc of `radius_miles` around a point.
///
/// `state_code` selects regional modifiers (case-insensitive two-letter
/// abbreviation); unknown or absent codes use national averages. Negative
/// or NaN inputs are not validated and degrade to zeroed counts.
#[must_use]
#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
pub fn estimate_demographics(
    lat: f64,
    lng: f64,
    radius_miles: f64,
    state_code: Option<&str>,
) -> DemographicEstimate {
    let seed = coordinate_seed(lat, lng);
    let area_sq_miles = PI * radius_miles * radius_miles;
    let modifiers = regions::modifiers_for(state_code);

    // Density varies +/-30% around the regional baseline.
    let density_variation = 0.7 + seed * 0.6;
    let base_density =
        US_AVG_DENSITY_PER_SQ_MI * modifiers.population_multiplier * density_variation;

    let population = (area_sq_miles * base_density).round();
    let households = (population / PERSONS_PER_HOUSEHOLD).round();
    let median_age = round1(US_MEDIAN_AGE + modifiers.age_offset + (seed - 0.5) * 4.0);
    let median_household_income =
        (US_MEDIAN_HOUSEHOLD_INCOME * modifiers.income_multiplier * (0.9 + seed * 0.2)).round();

    // Wealthier and older markets carry more implant demand.
    let adult_population = population * ADULT_SHARE;
    let income_boost = if median_household_income > 75_000.0 {
        1.15
    } else if median_household_income > 50_000.0 {
        1.0
    } else {
        0.85
    };
    let age_boost = if median_age > 45.0 {
        1.2
    } else if median_age > 40.0 {
        1.0
    } else {
        0.8
    };
    let implant_candidates =
        (adult_population * BASE_CANDIDATE_RATE * income_boost * age_boost).round();

    let competitor_density =
        round1((base_density / US_AVG_DENSITY_PER_SQ_MI * 2.0).min(5.0));

    let market_score = score::market_score(
        population,
        median_household_income,
        median_age,
        implant_candidates,
        competitor_density,
    );

    DemographicEstimate {
        population: population as u64,
        households: households as u64,
        median_age,
        median_household_income: median_household_income as u64,
        implant_candidates: implant_candidates as u64,
        competitor_density,
        market_score,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn seed_is_deterministic_and_in_unit_range() {
        for (lat, lng) in [
            (30.2672, -97.7431),
            (39.7392, -104.9903),
            (0.0, 0.0),
            (-33.8688, 151.2093),
        ] {
            let seed = coordinate_seed(lat, lng);
            assert!((0.0..1.0).contains(&seed), "seed {seed} for ({lat}, {lng})");
            assert!((seed - coordinate_seed(lat, lng)).abs() < f64::EPSILON);
        }
    }

    #[test]
    fn estimate_is_idempotent() {
        let first = estimate_demographics(30.2672, -97.7431, 15.0, Some("TX"));
        let second = estimate_demographics(30.2672, -97.7431, 15.0, Some("TX"));
        assert_eq!(first, second);
    }

    #[test]
    fn nearby_points_differ() {
        let a = estimate_demographics(30.2672, -97.7431, 15.0, Some("TX"));
        let b = estimate_demographics(30.2673, -97.7431, 15.0, Some("TX"));
        assert_ne!(a.population, b.population);
    }

    #[test]
    fn population_scales_with_radius() {
        let small = estimate_demographics(30.2672, -97.7431, 5.0, Some("TX"));
        let large = estimate_demographics(30.2672, -97.7431, 20.0, Some("TX"));
        assert!(large.population > small.population);
        // Area grows with r^2, so a 4x radius is a 16x population.
        let ratio = large.population as f64 / small.population as f64;
        assert!((ratio - 16.0).abs() < 0.01, "ratio {ratio}");
    }

    #[test]
    fn households_follow_average_household_size() {
        let estimate = estimate_demographics(30.2672, -97.7431, 15.0, Some("TX"));
        let expected = (estimate.population as f64 / PERSONS_PER_HOUSEHOLD).round() as u64;
        assert_eq!(estimate.households, expected);
    }

    #[test]
    fn score_stays_in_bounds_across_inputs() {
        for (lat, lng, radius, state) in [
            (30.2672, -97.7431, 15.0, Some("TX")),
            (44.5, -89.5, 2.0, Some("WI")),
            (38.9072, -77.0369, 40.0, Some("DC")),
            (61.2181, -149.9003, 8.0, Some("AK")),
            (25.7617, -80.1918, 25.0, Some("FL")),
            (40.0, -100.0, 0.5, None),
        ] {
            let estimate = estimate_demographics(lat, lng, radius, state);
            assert!(estimate.market_score <= 100);
        }
    }

    #[test]
    fn competitor_density_capped_at_five() {
        let estimate = estimate_demographics(38.9072, -77.0369, 10.0, Some("DC"));
        assert!(estimate.competitor_density <= 5.0);
    }

    #[test]
    fn zero_radius_yields_empty_disc() {
        let estimate = estimate_demographics(30.2672, -97.7431, 0.0, Some("TX"));
        assert_eq!(estimate.population, 0);
        assert_eq!(estimate.households, 0);
        assert_eq!(estimate.implant_candidates, 0);
    }
}
