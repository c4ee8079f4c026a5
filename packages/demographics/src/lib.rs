#![cfg_attr(feature = "fail-on-warnings", deny(warnings))]
#![warn(clippy::all, clippy::pedantic, clippy::nursery, clippy::cargo)]
#![allow(clippy::multiple_crate_versions, clippy::cargo_common_metadata)]

//! Deterministic demographic estimation for candidate territories.
//!
//! Given a center point, radius, and optional state code, estimates
//! population, households, income, age, implant-candidate counts,
//! competition, and a 0-100 market attractiveness score, plus detailed
//! age/income distributions and a pricing tier recommendation.
//!
//! Estimates are pseudo-random but deterministic: the variation source is
//! a trigonometric hash of the coordinates, so the same point always
//! produces the same numbers. This is a best-effort heuristic, not census
//! data. Every function is pure and total over numeric inputs; unknown
//! state codes fall back to national-average modifiers and degenerate
//! inputs degrade to zero rather than failing.

pub mod estimate;
pub mod regions;
pub mod score;
pub mod tier;

mod detail;

pub use detail::detailed_demographics;
pub use estimate::estimate_demographics;
pub use regions::{RegionalModifiers, modifiers_for};
pub use score::market_score;
pub use tier::{estimate_competitor_count, recommend_territory_tier};
