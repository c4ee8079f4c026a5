#![cfg_attr(feature = "fail-on-warnings", deny(warnings))]
#![warn(clippy::all, clippy::pedantic, clippy::nursery, clippy::cargo)]
#![allow(clippy::multiple_crate_versions, clippy::cargo_common_metadata)]

//! Territory coverage and overlap result types.
//!
//! A territory is an exclusive circular coverage area sold to at most one
//! practice, defined by a WGS84 center point and a radius in miles. These
//! types are shared between the overlap engine, the demographics estimator's
//! callers, and the CLI; none of them are persisted entities here.

use serde::{Deserialize, Serialize};
use strum_macros::{AsRefStr, Display, EnumString};

/// Lifecycle status of a territory claim.
///
/// Drives conflict-vs-warning classification during placement validation:
/// a `locked` territory is under exclusive assignment and any overlap with
/// it is a hard conflict, while `available` and `waitlist` territories are
/// soft claims.
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
pub enum TerritoryStatus {
    /// Under exclusive assignment to a client.
    Locked,
    /// Open for purchase.
    Available,
    /// Reserved by a prospect on the waitlist.
    Waitlist,
    /// Any status string this core does not recognize.
    #[serde(other)]
    Unknown,
}

/// A circular territory: center point plus radius.
///
/// Coordinates are WGS84 degrees. No range validation is performed here;
/// out-of-range or NaN inputs propagate through the geometry untouched.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TerritoryLocation {
    /// Opaque identifier.
    pub id: String,
    /// Display name (e.g. "Austin Metro North").
    pub name: String,
    /// Center latitude in degrees.
    pub center_lat: f64,
    /// Center longitude in degrees.
    pub center_lng: f64,
    /// Coverage radius in miles.
    pub radius_miles: f64,
    /// Claim status, if any.
    #[serde(default)]
    pub status: Option<TerritoryStatus>,
    /// Display metadata, unused in geometry.
    #[serde(default)]
    pub city: Option<String>,
    /// Two-letter state abbreviation, unused in geometry.
    #[serde(default)]
    pub state: Option<String>,
}

/// Pairwise overlap measurements between two territories.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OverlapDetails {
    /// Whether the discs intersect (center distance strictly less than the
    /// sum of radii; tangency does not count).
    pub overlaps: bool,
    /// Great-circle distance between centers, in miles.
    pub distance: f64,
    /// Combined radii minus distance, floored at zero.
    pub overlap_miles: f64,
    /// Overlap length relative to the smaller territory's diameter, capped
    /// at 100. A linear proxy, not a true area ratio.
    pub overlap_percentage: f64,
}

/// One existing territory that overlaps a candidate, with measurements.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OverlapResult {
    /// The existing territory.
    pub territory: TerritoryLocation,
    /// Great-circle distance between centers, in miles.
    pub distance: f64,
    /// Combined radii minus distance.
    pub overlap_miles: f64,
    /// Overlap percentage relative to the smaller diameter, capped at 100.
    pub overlap_percentage: f64,
}

/// Filters for overlap searches.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct OverlapSearchOptions {
    /// Skip the territory with this id (typically the candidate's own row
    /// when re-validating an edit).
    pub exclude_id: Option<String>,
    /// Keep only overlaps at or above this percentage.
    pub min_overlap_percentage: f64,
    /// Keep only territories in one of these statuses. `None` or an empty
    /// list means no status filter.
    pub status_filter: Option<Vec<TerritoryStatus>>,
}

/// Policy knobs for placement validation.
#[derive(Debug, Clone, PartialEq)]
pub struct PlacementOptions {
    /// Skip the territory with this id.
    pub exclude_id: Option<String>,
    /// When true, overlaps with `available`/`waitlist` territories are
    /// warnings instead of conflicts.
    pub allow_waitlist_overlap: bool,
    /// Overlaps strictly below this percentage are tolerated entirely.
    pub max_allowed_overlap_percentage: f64,
}

impl Default for PlacementOptions {
    fn default() -> Self {
        Self {
            exclude_id: None,
            allow_waitlist_overlap: true,
            max_allowed_overlap_percentage: 0.0,
        }
    }
}

/// Verdict of a placement validation run.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PlacementValidation {
    /// True when no hard conflicts were found.
    pub valid: bool,
    /// Overlaps that block placement (locked territories, plus soft claims
    /// when waitlist overlap is disallowed).
    pub conflicts: Vec<OverlapResult>,
    /// Overlaps the caller may choose to accept.
    pub warnings: Vec<OverlapResult>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn status_serializes_lowercase() {
        let json = serde_json::to_string(&TerritoryStatus::Locked).unwrap();
        assert_eq!(json, "\"locked\"");
    }

    #[test]
    fn status_deserializes_lowercase() {
        let status: TerritoryStatus = serde_json::from_str("\"waitlist\"").unwrap();
        assert_eq!(status, TerritoryStatus::Waitlist);
    }

    #[test]
    fn unrecognized_status_maps_to_unknown() {
        let status: TerritoryStatus = serde_json::from_str("\"pending\"").unwrap();
        assert_eq!(status, TerritoryStatus::Unknown);
    }

    #[test]
    fn territory_deserializes_camel_case() {
        let territory: TerritoryLocation = serde_json::from_str(
            r#"{
                "id": "t-1",
                "name": "Austin Metro",
                "centerLat": 30.2672,
                "centerLng": -97.7431,
                "radiusMiles": 15.0,
                "status": "locked"
            }"#,
        )
        .unwrap();
        assert_eq!(territory.status, Some(TerritoryStatus::Locked));
        assert!((territory.center_lat - 30.2672).abs() < f64::EPSILON);
        assert_eq!(territory.city, None);
    }

    #[test]
    fn placement_options_default_allows_waitlist_overlap() {
        let options = PlacementOptions::default();
        assert!(options.allow_waitlist_overlap);
        assert!(options.max_allowed_overlap_percentage.abs() < f64::EPSILON);
    }
}
