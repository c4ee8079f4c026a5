#![cfg_attr(feature = "fail-on-warnings", deny(warnings))]
#![warn(clippy::all, clippy::pedantic, clippy::nursery, clippy::cargo)]
#![allow(clippy::multiple_crate_versions, clippy::cargo_common_metadata)]

//! Territory geo-overlap engine.
//!
//! Computes pairwise geometric overlap between circular territories
//! (Haversine distance, overlap length/percentage, true lens intersection
//! area) and validates candidate placements against existing claims:
//! overlap with a `locked` territory is a hard conflict, overlap with an
//! `available` or `waitlist` territory is a soft claim the caller may
//! choose to tolerate.
//!
//! Everything here is a pure function over coordinates and radii. There is
//! no I/O, no shared state, and no error path: degenerate geometry (zero
//! radius, NaN coordinates) degrades to zero/NaN results rather than
//! failing. Callers that need hard guarantees validate at their boundary.

pub mod overlap;
pub mod placement;

pub use overlap::{
    distance_miles, overlap_area_sq_miles, overlap_details, territories_overlap,
    territory_area_sq_miles,
};
pub use placement::{find_overlapping_territories, format_overlap_description, validate_placement};
