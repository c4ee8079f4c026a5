//! Loading existing territories from a JSON file.
//!
//! The file stands in for the persistence layer that supplies existing
//! claims in the full platform: a JSON array of territory records with
//! camelCase keys, matching what the dashboard exports.

use std::path::Path;

use territory_map_territory_models::TerritoryLocation;
use thiserror::Error;

/// Failure to read or parse a territory file.
#[derive(Debug, Error)]
pub enum TerritoryFileError {
    /// The file could not be read.
    #[error("failed to read territory file: {0}")]
    Io(#[from] std::io::Error),
    /// The file contents are not a valid territory array.
    #[error("failed to parse territory file: {0}")]
    Json(#[from] serde_json::Error),
}

/// Parses a JSON array of territory records.
///
/// # Errors
///
/// Returns [`TerritoryFileError::Json`] when the input is not a valid
/// territory array.
pub fn parse_territories(json: &str) -> Result<Vec<TerritoryLocation>, TerritoryFileError> {
    Ok(serde_json::from_str(json)?)
}

/// Loads a JSON array of territory records from disk.
///
/// # Errors
///
/// Returns [`TerritoryFileError::Io`] when the file cannot be read and
/// [`TerritoryFileError::Json`] when it does not parse.
pub fn load_territories(path: &Path) -> Result<Vec<TerritoryLocation>, TerritoryFileError> {
    let contents = std::fs::read_to_string(path)?;
    let territories = parse_territories(&contents)?;
    log::info!(
        "loaded {} territories from {}",
        territories.len(),
        path.display()
    );
    Ok(territories)
}
