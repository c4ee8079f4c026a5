//! Detailed demographic breakdowns layered on the baseline estimate.

use territory_map_demographics_models::{
    AgeDistribution, DetailedDemographics, IncomeDistribution,
};

use crate::estimate::{
    self, US_MEDIAN_AGE, US_MEDIAN_HOUSEHOLD_INCOME, round2,
};

/// Average revenue per implant case, dollars.
const AVG_CASE_VALUE: f64 = 4500.0;
/// Share of candidates expected to convert within a year.
const ANNUAL_CONVERSION_RATE: f64 = 0.15;

/// Estimates demographics with age/income distributions, insurance and
/// visit rates, and an annual market-size figure.
///
/// Distribution buckets are shifted from national baseline shares by how
/// far the estimated medians sit from the national medians, then
/// normalized so each distribution sums to 1 (within rounding). Fractional
/// fields are rounded to two decimals for display.
#[must_use]
#[allow(clippy::cast_precision_loss, clippy::cast_possible_truncation, clippy::cast_sign_loss)]
pub fn detailed_demographics(
    lat: f64,
    lng: f64,
    radius_miles: f64,
    state_code: Option<&str>,
) -> DetailedDemographics {
    let estimate = estimate::estimate_demographics(lat, lng, radius_miles, state_code);

    // One unit of offset per decade the median sits away from the
    // national median age.
    let age_offset = (estimate.median_age - US_MEDIAN_AGE) / 10.0;
    let income_ratio = estimate.median_household_income as f64 / US_MEDIAN_HOUSEHOLD_INCOME;

    let age_distribution = age_distribution(age_offset);
    let income_distribution = income_distribution(income_ratio);

    let insurance_rate = round2((0.77 * (0.9 + income_ratio * 0.1)).min(0.95));
    let dental_visit_rate = round2((0.64 * (0.85 + income_ratio * 0.15)).min(0.85));
    let estimated_market_size =
        (estimate.implant_candidates as f64 * AVG_CASE_VALUE * ANNUAL_CONVERSION_RATE).round()
            as u64;

    DetailedDemographics {
        estimate,
        age_distribution,
        income_distribution,
        insurance_rate,
        dental_visit_rate,
        estimated_market_size,
    }
}

/// Shifts national baseline age shares toward older or younger brackets,
/// then normalizes.
fn age_distribution(offset: f64) -> AgeDistribution {
    let raw = [
        (0.21 - offset * 0.02).max(0.01), // under 18
        (0.23 - offset * 0.03).max(0.01), // 18-34
        (0.26 - offset * 0.01).max(0.01), // 35-54
        (0.13 + offset * 0.02).max(0.01), // 55-64
        (0.17 + offset * 0.04).max(0.01), // 65+
    ];
    let total: f64 = raw.iter().sum();

    AgeDistribution {
        under_18: round2(raw[0] / total),
        age_18_34: round2(raw[1] / total),
        age_35_54: round2(raw[2] / total),
        age_55_64: round2(raw[3] / total),
        age_65_plus: round2(raw[4] / total),
    }
}

/// Shifts national baseline income shares toward richer or poorer
/// brackets, then normalizes.
fn income_distribution(ratio: f64) -> IncomeDistribution {
    let shift = ratio - 1.0;
    let raw = [
        (0.34 - shift * 0.25).max(0.01), // under 50k
        (0.22 - shift * 0.05).max(0.01), // 50-75k
        (0.16 + shift * 0.05).max(0.01), // 75-100k
        (0.17 + shift * 0.12).max(0.01), // 100-150k
        (0.11 + shift * 0.13).max(0.01), // 150k+
    ];
    let total: f64 = raw.iter().sum();

    IncomeDistribution {
        under_50k: round2(raw[0] / total),
        from_50k_to_75k: round2(raw[1] / total),
        from_75k_to_100k: round2(raw[2] / total),
        from_100k_to_150k: round2(raw[3] / total),
        over_150k: round2(raw[4] / total),
    }
}
