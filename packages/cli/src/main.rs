#![cfg_attr(feature = "fail-on-warnings", deny(warnings))]
#![warn(clippy::all, clippy::pedantic, clippy::nursery, clippy::cargo)]
#![allow(clippy::multiple_crate_versions, clippy::cargo_common_metadata)]

//! CLI for territory placement checks and market estimates.
//!
//! Wires the overlap engine and demographics estimator together the way
//! the sales dashboard does: estimate the market around a candidate
//! center point, validate the placement against existing territories
//! (loaded from a JSON file), and suggest a pricing tier.

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};

mod commands;
mod territories;

/// Candidate territory geography shared by every subcommand.
#[derive(Args)]
struct CandidateArgs {
    /// Center latitude in degrees.
    #[arg(long)]
    lat: f64,

    /// Center longitude in degrees.
    #[arg(long)]
    lng: f64,

    /// Coverage radius in miles.
    #[arg(long)]
    radius: f64,

    /// Two-letter state abbreviation for regional modifiers.
    #[arg(long)]
    state: Option<String>,
}

/// Territory placement checks and market estimates.
#[derive(Parser)]
#[command(name = "territory_map_cli")]
#[command(about = "Territory placement checks and market estimates")]
struct Cli {
    /// Subcommand to execute.
    #[command(subcommand)]
    command: Commands,
}

/// Top-level subcommands.
#[derive(Subcommand)]
enum Commands {
    /// Estimate demographics for a candidate territory.
    Estimate {
        #[command(flatten)]
        candidate: CandidateArgs,

        /// Include age/income distributions and market sizing.
        #[arg(long)]
        detailed: bool,

        /// Emit JSON instead of human-readable text.
        #[arg(long)]
        json: bool,
    },

    /// Validate a candidate placement against existing territories.
    Validate {
        #[command(flatten)]
        candidate: CandidateArgs,

        /// Path to a JSON array of existing territories.
        #[arg(long)]
        territories: PathBuf,

        /// Skip this territory id (when re-validating an edit).
        #[arg(long)]
        exclude_id: Option<String>,

        /// Tolerate overlaps strictly below this percentage.
        #[arg(long, default_value_t = 0.0)]
        max_overlap_pct: f64,

        /// Treat available/waitlist overlaps as conflicts, not warnings.
        #[arg(long)]
        deny_waitlist_overlap: bool,

        /// Emit JSON instead of human-readable text.
        #[arg(long)]
        json: bool,
    },

    /// Recommend a pricing tier for a candidate territory.
    Tier {
        #[command(flatten)]
        candidate: CandidateArgs,

        /// Emit JSON instead of human-readable text.
        #[arg(long)]
        json: bool,
    },
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    pretty_env_logger::init();

    let cli = Cli::parse();

    match cli.command {
        Commands::Estimate {
            candidate,
            detailed,
            json,
        } => commands::estimate(&candidate, detailed, json)?,
        Commands::Validate {
            candidate,
            territories,
            exclude_id,
            max_overlap_pct,
            deny_waitlist_overlap,
            json,
        } => commands::validate(
            &candidate,
            &territories,
            exclude_id,
            max_overlap_pct,
            deny_waitlist_overlap,
            json,
        )?,
        Commands::Tier { candidate, json } => commands::tier(&candidate, json)?,
    }

    Ok(())
}
