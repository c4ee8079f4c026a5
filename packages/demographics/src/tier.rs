//! Competitor counts and pricing tier recommendations.

use territory_map_demographics_models::{DemographicEstimate, TerritoryTier, TierRecommendation};

/// Enterprise tier monthly price, dollars.
const ENTERPRISE_PRICE: u32 = 4000;
/// Growth tier monthly price, dollars.
const GROWTH_PRICE: u32 = 2500;
/// Starter tier monthly price, dollars.
const STARTER_PRICE: u32 = 1500;

/// Estimates how many implant providers compete in a market.
///
/// Works from the national dentist-per-capita ratio, scales by the
/// competitor density proxy, and keeps the implant-focused share. Never
/// returns less than 1: a market always has at least one competitor worth
/// planning around.
#[must_use]
#[allow(clippy::cast_precision_loss, clippy::cast_possible_truncation, clippy::cast_sign_loss)]
pub fn estimate_competitor_count(population: u64, competitor_density: f64) -> u64 {
    let base_dentists = (population as f64 / 2000.0) * 1.6;
    let adjusted = base_dentists * (competitor_density / 2.0);
    let implant_providers = adjusted * 0.17;

    (implant_providers.round() as u64).max(1)
}

/// Recommends a subscription tier for a market.
///
/// Top-down decision table: high-scoring major markets get the enterprise
/// tier, strong mid-size markets the growth tier, everything else starts
/// small.
#[must_use]
pub fn recommend_territory_tier(demographics: &DemographicEstimate) -> TierRecommendation {
    if demographics.market_score >= 75 && demographics.population > 150_000 {
        TierRecommendation {
            tier: TerritoryTier::Enterprise,
            monthly_price: ENTERPRISE_PRICE,
            rationale:
                "High-scoring major market with the volume to support a dedicated enterprise engagement"
                    .to_string(),
        }
    } else if demographics.market_score >= 60 && demographics.population > 75_000 {
        TierRecommendation {
            tier: TerritoryTier::Growth,
            monthly_price: GROWTH_PRICE,
            rationale: "Strong mid-size market with room to expand lead volume".to_string(),
        }
    } else {
        TierRecommendation {
            tier: TerritoryTier::Starter,
            monthly_price: STARTER_PRICE,
            rationale: "Emerging market; start small and scale with demand".to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn estimate(market_score: u8, population: u64) -> DemographicEstimate {
        DemographicEstimate {
            population,
            households: population / 2,
            median_age: 40.0,
            median_household_income: 74_580,
            implant_candidates: population / 20,
            competitor_density: 2.0,
            market_score,
        }
    }

    #[test]
    fn high_score_large_market_is_enterprise() {
        let recommendation = recommend_territory_tier(&estimate(80, 200_000));
        assert_eq!(recommendation.tier, TerritoryTier::Enterprise);
        assert_eq!(recommendation.monthly_price, 4000);
    }

    #[test]
    fn mid_score_mid_market_is_growth() {
        let recommendation = recommend_territory_tier(&estimate(65, 80_000));
        assert_eq!(recommendation.tier, TerritoryTier::Growth);
        assert_eq!(recommendation.monthly_price, 2500);
    }

    #[test]
    fn everything_else_is_starter() {
        let recommendation = recommend_territory_tier(&estimate(40, 20_000));
        assert_eq!(recommendation.tier, TerritoryTier::Starter);
        assert_eq!(recommendation.monthly_price, 1500);
    }

    #[test]
    fn high_score_alone_does_not_reach_enterprise() {
        // Score qualifies but population misses the cutoff; falls through
        // to growth.
        let recommendation = recommend_territory_tier(&estimate(90, 100_000));
        assert_eq!(recommendation.tier, TerritoryTier::Growth);
    }

    #[test]
    fn competitor_count_never_below_one() {
        assert_eq!(estimate_competitor_count(0, 0.0), 1);
        assert_eq!(estimate_competitor_count(100, 0.1), 1);
    }

    #[test]
    fn competitor_count_scales_with_population_and_density() {
        let sparse = estimate_competitor_count(50_000, 1.0);
        let dense = estimate_competitor_count(50_000, 4.0);
        let bigger = estimate_competitor_count(200_000, 1.0);

        assert!(dense > sparse);
        assert!(bigger > sparse);
        // 50k population, density 1.0: (50000/2000)*1.6*0.5*0.17 = 3.4
        assert_eq!(sparse, 3);
    }
}
