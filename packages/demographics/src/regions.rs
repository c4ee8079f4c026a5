//! Per-state modifiers applied to national baseline figures.
//!
//! Coarse adjustments keyed by two-letter state abbreviation. Unlisted or
//! absent codes fall back to [`RegionalModifiers::DEFAULT`], which leaves
//! the national baselines untouched.

/// Multipliers and offsets applied to national-average baselines.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RegionalModifiers {
    /// Scales the national average population density.
    pub population_multiplier: f64,
    /// Scales the national median household income.
    pub income_multiplier: f64,
    /// Added to the national median age, in years.
    pub age_offset: f64,
}

impl RegionalModifiers {
    /// National-average passthrough, used for unknown or absent codes.
    pub const DEFAULT: Self = Self {
        population_multiplier: 1.0,
        income_multiplier: 1.0,
        age_offset: 0.0,
    };
}

const fn modifiers(population: f64, income: f64, age: f64) -> RegionalModifiers {
    RegionalModifiers {
        population_multiplier: population,
        income_multiplier: income,
        age_offset: age,
    }
}

/// Looks up modifiers for a state code (case-insensitive).
///
/// Covers the 50 states plus DC; anything else returns
/// [`RegionalModifiers::DEFAULT`].
#[must_use]
pub fn modifiers_for(state_code: Option<&str>) -> RegionalModifiers {
    let Some(code) = state_code else {
        return RegionalModifiers::DEFAULT;
    };

    match code.trim().to_uppercase().as_str() {
        "AL" => modifiers(0.85, 0.78, 1.0),
        "AK" => modifiers(0.35, 1.08, -1.5),
        "AZ" => modifiers(0.95, 0.92, 1.5),
        "AR" => modifiers(0.80, 0.72, 0.8),
        "CA" => modifiers(1.35, 1.22, -1.0),
        "CO" => modifiers(1.00, 1.12, -2.0),
        "CT" => modifiers(1.15, 1.18, 1.2),
        "DE" => modifiers(1.05, 1.05, 1.5),
        "DC" => modifiers(1.60, 1.35, -3.5),
        "FL" => modifiers(1.20, 0.88, 3.5),
        "GA" => modifiers(1.00, 0.92, -1.2),
        "HI" => modifiers(1.10, 1.15, 1.0),
        "ID" => modifiers(0.70, 0.85, -0.5),
        "IL" => modifiers(1.10, 1.02, -0.3),
        "IN" => modifiers(0.90, 0.84, -0.5),
        "IA" => modifiers(0.75, 0.88, 0.5),
        "KS" => modifiers(0.75, 0.88, -0.3),
        "KY" => modifiers(0.85, 0.78, 0.5),
        "LA" => modifiers(0.90, 0.76, -0.5),
        "ME" => modifiers(0.65, 0.88, 4.0),
        "MD" => modifiers(1.20, 1.25, 0.0),
        "MA" => modifiers(1.25, 1.25, 0.5),
        "MI" => modifiers(0.95, 0.88, 1.0),
        "MN" => modifiers(0.95, 1.08, -0.2),
        "MS" => modifiers(0.80, 0.68, 0.0),
        "MO" => modifiers(0.90, 0.85, 0.3),
        "MT" => modifiers(0.50, 0.85, 1.5),
        "NE" => modifiers(0.75, 0.92, -0.5),
        "NV" => modifiers(1.00, 0.95, -0.3),
        "NH" => modifiers(0.85, 1.18, 2.5),
        "NJ" => modifiers(1.30, 1.22, 0.5),
        "NM" => modifiers(0.70, 0.75, 0.8),
        "NY" => modifiers(1.30, 1.08, 0.3),
        "NC" => modifiers(1.00, 0.88, 0.2),
        "ND" => modifiers(0.55, 0.95, -2.0),
        "OH" => modifiers(0.95, 0.86, 0.5),
        "OK" => modifiers(0.80, 0.78, -0.5),
        "OR" => modifiers(0.90, 1.00, 0.8),
        "PA" => modifiers(1.05, 0.93, 1.5),
        "RI" => modifiers(1.20, 1.05, 1.0),
        "SC" => modifiers(0.95, 0.82, 1.5),
        "SD" => modifiers(0.60, 0.90, -0.5),
        "TN" => modifiers(0.95, 0.83, 0.0),
        "TX" => modifiers(1.10, 0.90, -2.5),
        "UT" => modifiers(0.90, 1.05, -5.0),
        "VT" => modifiers(0.60, 0.98, 3.5),
        "VA" => modifiers(1.10, 1.12, -0.3),
        "WA" => modifiers(1.05, 1.18, -0.8),
        "WV" => modifiers(0.70, 0.68, 2.5),
        "WI" => modifiers(0.90, 0.92, 0.8),
        "WY" => modifiers(0.45, 0.92, 0.0),
        _ => RegionalModifiers::DEFAULT,
    }
}
