//! Subcommand implementations and output formatting.

use std::path::Path;

use territory_map_demographics::{
    detailed_demographics, estimate_competitor_count, estimate_demographics,
    recommend_territory_tier,
};
use territory_map_demographics_models::DemographicEstimate;
use territory_map_territory::{format_overlap_description, validate_placement};
use territory_map_territory_models::{PlacementOptions, TerritoryLocation};

use crate::{CandidateArgs, territories};

type CommandResult = Result<(), Box<dyn std::error::Error>>;

/// Builds the candidate record a subcommand validates or prices.
///
/// Candidates have no row yet, so they get placeholder identity fields.
fn candidate_territory(args: &CandidateArgs) -> TerritoryLocation {
    TerritoryLocation {
        id: "new".to_string(),
        name: "New Territory".to_string(),
        center_lat: args.lat,
        center_lng: args.lng,
        radius_miles: args.radius,
        status: None,
        city: None,
        state: args.state.clone(),
    }
}

/// `estimate` subcommand.
pub fn estimate(args: &CandidateArgs, detailed: bool, json: bool) -> CommandResult {
    let state = args.state.as_deref();

    if detailed {
        let result = detailed_demographics(args.lat, args.lng, args.radius, state);
        if json {
            println!("{}", serde_json::to_string_pretty(&result)?);
            return Ok(());
        }

        print_estimate(&result.estimate);
        println!();
        println!("Age distribution:");
        println!("  Under 18:          {:.0}%", result.age_distribution.under_18 * 100.0);
        println!("  18-34:             {:.0}%", result.age_distribution.age_18_34 * 100.0);
        println!("  35-54:             {:.0}%", result.age_distribution.age_35_54 * 100.0);
        println!("  55-64:             {:.0}%", result.age_distribution.age_55_64 * 100.0);
        println!("  65+:               {:.0}%", result.age_distribution.age_65_plus * 100.0);
        println!("Income distribution:");
        println!("  Under $50k:        {:.0}%", result.income_distribution.under_50k * 100.0);
        println!("  $50k-$75k:         {:.0}%", result.income_distribution.from_50k_to_75k * 100.0);
        println!("  $75k-$100k:        {:.0}%", result.income_distribution.from_75k_to_100k * 100.0);
        println!("  $100k-$150k:       {:.0}%", result.income_distribution.from_100k_to_150k * 100.0);
        println!("  Over $150k:        {:.0}%", result.income_distribution.over_150k * 100.0);
        println!("Insurance rate:      {:.0}%", result.insurance_rate * 100.0);
        println!("Dental visit rate:   {:.0}%", result.dental_visit_rate * 100.0);
        println!("Est. market size:    ${}/yr", result.estimated_market_size);
        println!(
            "Est. competitors:    {}",
            estimate_competitor_count(
                result.estimate.population,
                result.estimate.competitor_density
            )
        );
    } else {
        let result = estimate_demographics(args.lat, args.lng, args.radius, state);
        if json {
            println!("{}", serde_json::to_string_pretty(&result)?);
            return Ok(());
        }
        print_estimate(&result);
    }

    Ok(())
}

/// `validate` subcommand.
pub fn validate(
    args: &CandidateArgs,
    territories_path: &Path,
    exclude_id: Option<String>,
    max_overlap_pct: f64,
    deny_waitlist_overlap: bool,
    json: bool,
) -> CommandResult {
    let existing = territories::load_territories(territories_path)?;
    let candidate = candidate_territory(args);

    let verdict = validate_placement(
        &candidate,
        &existing,
        &PlacementOptions {
            exclude_id,
            allow_waitlist_overlap: !deny_waitlist_overlap,
            max_allowed_overlap_percentage: max_overlap_pct,
        },
    );

    if json {
        println!("{}", serde_json::to_string_pretty(&verdict)?);
        return Ok(());
    }

    if verdict.valid {
        println!("Placement is valid");
    } else {
        println!("Placement is blocked");
    }

    if !verdict.conflicts.is_empty() {
        println!();
        println!("Conflicts:");
        for conflict in &verdict.conflicts {
            println!(
                "  {} ({:.1} mi between centers)",
                format_overlap_description(conflict),
                conflict.distance
            );
        }
    }

    if !verdict.warnings.is_empty() {
        println!();
        println!("Warnings:");
        for warning in &verdict.warnings {
            println!(
                "  {} ({:.1} mi between centers)",
                format_overlap_description(warning),
                warning.distance
            );
        }
    }

    Ok(())
}

/// `tier` subcommand.
pub fn tier(args: &CandidateArgs, json: bool) -> CommandResult {
    let estimate = estimate_demographics(args.lat, args.lng, args.radius, args.state.as_deref());
    let recommendation = recommend_territory_tier(&estimate);

    if json {
        let combined = serde_json::json!({
            "estimate": estimate,
            "recommendation": recommendation,
        });
        println!("{}", serde_json::to_string_pretty(&combined)?);
        return Ok(());
    }

    print_estimate(&estimate);
    println!();
    println!("Recommended tier:    {}", recommendation.tier);
    println!("Monthly price:       ${}", recommendation.monthly_price);
    println!("Rationale:           {}", recommendation.rationale);

    Ok(())
}

fn print_estimate(estimate: &DemographicEstimate) {
    println!("Population:          {}", estimate.population);
    println!("Households:          {}", estimate.households);
    println!("Median age:          {:.1}", estimate.median_age);
    println!("Median income:       ${}", estimate.median_household_income);
    println!("Implant candidates:  {}", estimate.implant_candidates);
    println!("Competitor density:  {:.1}", estimate.competitor_density);
    println!("Market score:        {}/100", estimate.market_score);
}
