//! Placement validation against existing territory claims.
//!
//! [`find_overlapping_territories`] is the shared search primitive;
//! [`validate_placement`] layers the one business rule this engine owns on
//! top of it: locked territories are exclusive-use, available/waitlist
//! territories are soft claims that may be allowed to overlap depending on
//! caller policy.

use territory_map_territory_models::{
    OverlapResult, OverlapSearchOptions, PlacementOptions, PlacementValidation, TerritoryLocation,
    TerritoryStatus,
};

use crate::overlap;

/// Finds existing territories whose discs intersect the candidate's.
///
/// Skips the `exclude_id` territory and any territory whose status misses a
/// non-empty `status_filter`, keeps overlapping pairs at or above
/// `min_overlap_percentage`, and sorts the results by descending overlap
/// percentage.
#[must_use]
pub fn find_overlapping_territories(
    candidate: &TerritoryLocation,
    existing: &[TerritoryLocation],
    options: &OverlapSearchOptions,
) -> Vec<OverlapResult> {
    let mut results: Vec<OverlapResult> = existing
        .iter()
        .filter(|territory| options.exclude_id.as_deref() != Some(territory.id.as_str()))
        .filter(|territory| match &options.status_filter {
            Some(filter) if !filter.is_empty() => {
                territory.status.is_some_and(|status| filter.contains(&status))
            }
            _ => true,
        })
        .filter_map(|territory| {
            let details = overlap::overlap_details(candidate, territory);
            (details.overlaps && details.overlap_percentage >= options.min_overlap_percentage)
                .then(|| OverlapResult {
                    territory: territory.clone(),
                    distance: details.distance,
                    overlap_miles: details.overlap_miles,
                    overlap_percentage: details.overlap_percentage,
                })
        })
        .collect();

    results.sort_by(|a, b| b.overlap_percentage.total_cmp(&a.overlap_percentage));
    results
}

/// Validates a candidate placement against existing claims.
///
/// Overlaps with `locked` territories are always conflicts. Overlaps with
/// `available`/`waitlist` territories are warnings when
/// `allow_waitlist_overlap` is set (the default), conflicts otherwise.
/// Territories with other or absent statuses never block placement.
/// Overlaps strictly below `max_allowed_overlap_percentage` are ignored
/// entirely; an overlap at exactly the allowance is still reported.
#[must_use]
pub fn validate_placement(
    candidate: &TerritoryLocation,
    existing: &[TerritoryLocation],
    options: &PlacementOptions,
) -> PlacementValidation {
    let overlapping = find_overlapping_territories(
        candidate,
        existing,
        &OverlapSearchOptions {
            exclude_id: options.exclude_id.clone(),
            min_overlap_percentage: options.max_allowed_overlap_percentage,
            status_filter: None,
        },
    );

    let mut conflicts = Vec::new();
    let mut warnings = Vec::new();

    for result in overlapping {
        match result.territory.status {
            Some(TerritoryStatus::Locked) => conflicts.push(result),
            Some(TerritoryStatus::Available | TerritoryStatus::Waitlist) => {
                if options.allow_waitlist_overlap {
                    warnings.push(result);
                } else {
                    conflicts.push(result);
                }
            }
            _ => {}
        }
    }

    log::debug!(
        "placement check for '{}': {} conflict(s), {} warning(s)",
        candidate.name,
        conflicts.len(),
        warnings.len()
    );

    PlacementValidation {
        valid: conflicts.is_empty(),
        conflicts,
        warnings,
    }
}

/// Human-readable one-liner for an overlap, tiered by severity.
#[must_use]
pub fn format_overlap_description(overlap: &OverlapResult) -> String {
    let name = &overlap.territory.name;
    let percentage = overlap.overlap_percentage;

    if percentage >= 100.0 {
        format!("Completely overlaps {name}")
    } else if percentage >= 50.0 {
        format!("Significant overlap ({percentage:.0}%) with {name}")
    } else if percentage >= 25.0 {
        format!("Moderate overlap ({percentage:.0}%) with {name}")
    } else {
        format!("Minor overlap ({percentage:.0}%) with {name}")
    }
}
