#![cfg_attr(feature = "fail-on-warnings", deny(warnings))]
#![warn(clippy::all, clippy::pedantic, clippy::nursery, clippy::cargo)]
#![allow(clippy::multiple_crate_versions, clippy::cargo_common_metadata)]

//! Demographic estimate and pricing tier types.
//!
//! Output shapes of the demographics estimator. These are derived values
//! computed on demand from coordinates, never stored entities; persistence
//! (e.g. writing estimate fields onto a territory row before insert) is
//! the caller's concern.

use serde::{Deserialize, Serialize};
use strum_macros::{AsRefStr, Display, EnumString};

/// Market estimate for a territory's coverage disc.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DemographicEstimate {
    /// Estimated residents inside the coverage disc.
    pub population: u64,
    /// Estimated households (population / avg household size).
    pub households: u64,
    /// Estimated median age, one decimal.
    pub median_age: f64,
    /// Estimated median household income in dollars.
    pub median_household_income: u64,
    /// Modeled adults statistically likely to need implant treatment.
    pub implant_candidates: u64,
    /// Per-capita competition proxy, one decimal, capped at 5.
    pub competitor_density: f64,
    /// Heuristic 0-100 market attractiveness rating.
    pub market_score: u8,
}

/// Population share by age bracket. Fractions normalized to sum to 1.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AgeDistribution {
    pub under_18: f64,
    pub age_18_34: f64,
    pub age_35_54: f64,
    pub age_55_64: f64,
    pub age_65_plus: f64,
}

/// Household share by income bracket. Fractions normalized to sum to 1.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct IncomeDistribution {
    pub under_50k: f64,
    pub from_50k_to_75k: f64,
    pub from_75k_to_100k: f64,
    pub from_100k_to_150k: f64,
    pub over_150k: f64,
}

/// Full estimate with distribution breakdowns and market sizing.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DetailedDemographics {
    /// The basic estimate these breakdowns were derived from.
    #[serde(flatten)]
    pub estimate: DemographicEstimate,
    /// Population share by age bracket.
    pub age_distribution: AgeDistribution,
    /// Household share by income bracket.
    pub income_distribution: IncomeDistribution,
    /// Estimated share of residents with dental insurance.
    pub insurance_rate: f64,
    /// Estimated share of residents with an annual dental visit.
    pub dental_visit_rate: f64,
    /// Estimated annual revenue opportunity in dollars.
    pub estimated_market_size: u64,
}

/// Subscription tier for a territory.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    Serialize,
    Deserialize,
    Display,
    EnumString,
    AsRefStr,
)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase")]
pub enum TerritoryTier {
    /// Emerging markets.
    Starter,
    /// Strong mid-size markets.
    Growth,
    /// High-scoring major markets.
    Enterprise,
}

/// Pricing tier suggested for a territory, with a one-line rationale.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TierRecommendation {
    /// Suggested tier.
    pub tier: TerritoryTier,
    /// Monthly subscription price in dollars.
    pub monthly_price: u32,
    /// Why this tier fits.
    pub rationale: String,
}
