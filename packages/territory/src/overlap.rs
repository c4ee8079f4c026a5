//! Disc geometry over great-circle distances.
//!
//! Territories are treated as filled discs on a sphere of radius
//! [`EARTH_RADIUS_MILES`]. Distances come from the standard Haversine
//! formula; overlap percentage is a cheap linear proxy (overlap length
//! relative to the smaller diameter) while [`overlap_area_sq_miles`] gives
//! the true circle-lens intersection area for call sites that need it.
//! The two measures are intentionally not unified.

use std::f64::consts::PI;

use territory_map_territory_models::{OverlapDetails, TerritoryLocation};

/// Mean Earth radius in miles, fixed so distances (and every overlap
/// percentage derived from them) are reproducible.
pub const EARTH_RADIUS_MILES: f64 = 3958.8;

/// Great-circle distance between two points, in miles.
///
/// Inputs are degrees. No validation: NaN or out-of-range coordinates
/// propagate NaN.
#[must_use]
pub fn distance_miles(lat1: f64, lng1: f64, lat2: f64, lng2: f64) -> f64 {
    let d_lat = (lat2 - lat1).to_radians();
    let d_lng = (lng2 - lng1).to_radians();

    let a = (d_lat / 2.0).sin().powi(2)
        + lat1.to_radians().cos() * lat2.to_radians().cos() * (d_lng / 2.0).sin().powi(2);
    let c = 2.0 * a.sqrt().atan2((1.0 - a).sqrt());

    EARTH_RADIUS_MILES * c
}

/// Whether two territories' discs intersect.
///
/// Strict inequality: centers exactly `r1 + r2` apart (tangent discs) do
/// not overlap.
#[must_use]
pub fn territories_overlap(a: &TerritoryLocation, b: &TerritoryLocation) -> bool {
    let distance = distance_miles(a.center_lat, a.center_lng, b.center_lat, b.center_lng);
    distance < a.radius_miles + b.radius_miles
}

/// Overlap measurements for a pair of territories.
///
/// `overlap_miles` is the combined radii minus the center distance;
/// `overlap_percentage` relates that length to the smaller territory's
/// diameter and is capped at 100. Both are zero when the discs do not
/// intersect. Symmetric in argument order.
#[must_use]
pub fn overlap_details(a: &TerritoryLocation, b: &TerritoryLocation) -> OverlapDetails {
    let distance = distance_miles(a.center_lat, a.center_lng, b.center_lat, b.center_lng);
    let combined_radii = a.radius_miles + b.radius_miles;

    if distance < combined_radii {
        let overlap_miles = (combined_radii - distance).max(0.0);
        let smaller_radius = a.radius_miles.min(b.radius_miles);
        let overlap_percentage = (overlap_miles / (2.0 * smaller_radius) * 100.0).min(100.0);

        OverlapDetails {
            overlaps: true,
            distance,
            overlap_miles,
            overlap_percentage,
        }
    } else {
        OverlapDetails {
            overlaps: false,
            distance,
            overlap_miles: 0.0,
            overlap_percentage: 0.0,
        }
    }
}

/// Area of a territory's coverage disc, in square miles.
#[must_use]
pub fn territory_area_sq_miles(radius_miles: f64) -> f64 {
    PI * radius_miles * radius_miles
}

/// True intersection area of two discs whose centers are `distance` apart.
///
/// Classic circle-lens formula: zero when disjoint or tangent, the smaller
/// disc's area when fully contained, otherwise the sum of the two circular
/// segments minus the kite term.
#[must_use]
pub fn overlap_area_sq_miles(r1: f64, r2: f64, distance: f64) -> f64 {
    if distance >= r1 + r2 {
        return 0.0;
    }

    if distance <= (r1 - r2).abs() {
        let smaller = r1.min(r2);
        return PI * smaller * smaller;
    }

    let d = distance;
    let part1 = r1 * r1 * ((d * d + r1 * r1 - r2 * r2) / (2.0 * d * r1)).acos();
    let part2 = r2 * r2 * ((d * d + r2 * r2 - r1 * r1) / (2.0 * d * r2)).acos();
    let part3 = 0.5
        * ((-d + r1 + r2) * (d + r1 - r2) * (d - r1 + r2) * (d + r1 + r2)).sqrt();

    part1 + part2 - part3
}

#[cfg(test)]
mod tests {
    use super::*;

    const AUSTIN: (f64, f64) = (30.2672, -97.7431);
    const DENVER: (f64, f64) = (39.7392, -104.9903);

    fn territory(id: &str, lat: f64, lng: f64, radius: f64) -> TerritoryLocation {
        TerritoryLocation {
            id: id.to_string(),
            name: id.to_string(),
            center_lat: lat,
            center_lng: lng,
            radius_miles: radius,
            status: None,
            city: None,
            state: None,
        }
    }

    #[test]
    fn distance_to_self_is_zero() {
        let d = distance_miles(AUSTIN.0, AUSTIN.1, AUSTIN.0, AUSTIN.1);
        assert!(d.abs() < 1e-9, "expected 0, got {d}");
    }

    #[test]
    fn austin_to_denver_is_roughly_777_miles() {
        let d = distance_miles(AUSTIN.0, AUSTIN.1, DENVER.0, DENVER.1);
        assert!((775.0..=780.0).contains(&d), "got {d}");
    }

    #[test]
    fn distance_is_symmetric() {
        let ab = distance_miles(AUSTIN.0, AUSTIN.1, DENVER.0, DENVER.1);
        let ba = distance_miles(DENVER.0, DENVER.1, AUSTIN.0, AUSTIN.1);
        assert!((ab - ba).abs() < 1e-9);
    }

    #[test]
    fn tangent_territories_do_not_overlap() {
        let a = territory("a", AUSTIN.0, AUSTIN.1, 10.0);
        let b = territory("b", DENVER.0, DENVER.1, 10.0);
        let d = distance_miles(AUSTIN.0, AUSTIN.1, DENVER.0, DENVER.1);

        // Split the exact distance between the two radii so the sum is
        // bit-identical to the computed distance.
        let a_exact = territory("a", AUSTIN.0, AUSTIN.1, d / 2.0);
        let b_exact = territory("b", DENVER.0, DENVER.1, d - d / 2.0);
        assert!(!territories_overlap(&a_exact, &b_exact));
        assert!(!territories_overlap(&a, &b));
    }

    #[test]
    fn barely_closer_than_radii_sum_overlaps() {
        let d = distance_miles(AUSTIN.0, AUSTIN.1, DENVER.0, DENVER.1);
        let a = territory("a", AUSTIN.0, AUSTIN.1, d / 2.0);
        let b = territory("b", DENVER.0, DENVER.1, d - d / 2.0 + 0.001);
        assert!(territories_overlap(&a, &b));
    }

    #[test]
    fn overlap_details_symmetric_distance_and_percentage() {
        let a = territory("a", 30.0, -97.0, 20.0);
        let b = territory("b", 30.2, -97.1, 8.0);
        let ab = overlap_details(&a, &b);
        let ba = overlap_details(&b, &a);

        assert!((ab.distance - ba.distance).abs() < 1e-9);
        assert!((ab.overlap_percentage - ba.overlap_percentage).abs() < 1e-9);
    }

    #[test]
    fn non_overlapping_pair_reports_zeroes() {
        let a = territory("a", AUSTIN.0, AUSTIN.1, 10.0);
        let b = territory("b", DENVER.0, DENVER.1, 10.0);
        let details = overlap_details(&a, &b);

        assert!(!details.overlaps);
        assert!(details.overlap_miles.abs() < f64::EPSILON);
        assert!(details.overlap_percentage.abs() < f64::EPSILON);
    }

    #[test]
    fn engulfed_territory_caps_percentage_at_100() {
        // Tiny disc near the center of a huge one.
        let big = territory("big", 30.0, -97.0, 50.0);
        let small = territory("small", 30.01, -97.01, 1.0);
        let details = overlap_details(&big, &small);

        assert!(details.overlaps);
        assert!((details.overlap_percentage - 100.0).abs() < f64::EPSILON);
    }

    #[test]
    fn disc_area_is_pi_r_squared() {
        let area = territory_area_sq_miles(10.0);
        assert!((area - PI * 100.0).abs() < 1e-9);
    }

    #[test]
    fn lens_area_zero_when_disjoint() {
        assert!(overlap_area_sq_miles(5.0, 5.0, 20.0).abs() < f64::EPSILON);
        assert!(overlap_area_sq_miles(5.0, 5.0, 10.0).abs() < f64::EPSILON);
    }

    #[test]
    fn lens_area_is_smaller_disc_when_contained() {
        let area = overlap_area_sq_miles(20.0, 3.0, 2.0);
        assert!((area - PI * 9.0).abs() < 1e-9);
    }

    #[test]
    fn coincident_equal_discs_overlap_fully() {
        let area = overlap_area_sq_miles(7.0, 7.0, 0.0);
        assert!((area - PI * 49.0).abs() < 1e-9);
    }

    #[test]
    fn lens_area_half_overlap_matches_closed_form() {
        // Two unit circles with centers one radius apart:
        // area = 2r^2 * acos(d / 2r) - (d / 2) * sqrt(4r^2 - d^2)
        let expected = 2.0 * (0.5_f64).acos() - 0.5 * (3.0_f64).sqrt();
        let area = overlap_area_sq_miles(1.0, 1.0, 1.0);
        assert!((area - expected).abs() < 1e-9, "got {area}, want {expected}");
    }
}
