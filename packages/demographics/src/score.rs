//! Market attractiveness scoring.

use crate::estimate::US_MEDIAN_HOUSEHOLD_INCOME;

/// Scores a market's attractiveness from 0 (poor) to 100 (excellent).
///
/// Starts at a neutral 50 and adjusts for population size, income relative
/// to the national median, median age, implant-candidate rate, and
/// competitor density. Inputs are the raw (unrounded-to-integer) estimate
/// figures; the result is clamped and rounded to an integer.
#[must_use]
#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
pub fn market_score(
    population: f64,
    median_household_income: f64,
    median_age: f64,
    implant_candidates: f64,
    competitor_density: f64,
) -> u8 {
    let mut score = 50.0;

    // Larger markets support more lead volume.
    if population > 100_000.0 {
        score += 15.0;
    } else if population > 50_000.0 {
        score += 10.0;
    } else if population > 25_000.0 {
        score += 5.0;
    } else if population < 10_000.0 {
        score -= 10.0;
    }

    // Income relative to the national median, capped either way.
    let income_ratio = median_household_income / US_MEDIAN_HOUSEHOLD_INCOME;
    score += ((income_ratio - 1.0) * 30.0).clamp(-15.0, 15.0);

    // Implant demand skews older.
    if median_age > 50.0 {
        score += 10.0;
    } else if median_age > 45.0 {
        score += 7.0;
    } else if median_age > 40.0 {
        score += 3.0;
    } else if median_age < 35.0 {
        score -= 5.0;
    }

    let candidate_rate = implant_candidates / population;
    if candidate_rate > 0.08 {
        score += 10.0;
    } else if candidate_rate > 0.06 {
        score += 5.0;
    } else if candidate_rate < 0.04 {
        score -= 5.0;
    }

    if competitor_density < 1.0 {
        score += 10.0;
    } else if competitor_density < 2.0 {
        score += 5.0;
    } else if competitor_density > 4.0 {
        score -= 10.0;
    } else if competitor_density > 3.0 {
        score -= 5.0;
    }

    score.clamp(0.0, 100.0).round() as u8
}
