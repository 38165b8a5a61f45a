//! JSON output: sorted keys, pretty on stdout, compact in files.

use serde::Serialize;
use std::fs;
use std::path::Path;

use crate::error::{GeospotError, Result};
use crate::spot::Spot;

/// Serializable view of a spot. The field declaration order is the sorted
/// key order of the emitted JSON.
#[derive(Debug, Serialize)]
pub struct SpotRecord {
    pub elevation: Option<f64>,
    pub latitude: f64,
    pub longitude: f64,
    pub title: String,
    pub url: String,
}

impl From<&Spot> for SpotRecord {
    fn from(spot: &Spot) -> Self {
        Self {
            elevation: spot.elevation(),
            latitude: spot.latitude(),
            longitude: spot.longitude(),
            title: spot.title().to_string(),
            url: spot.url().to_string(),
        }
    }
}

fn records(spots: &[Spot]) -> Vec<SpotRecord> {
    spots.iter().map(SpotRecord::from).collect()
}

/// Render spots as a pretty-printed JSON array
pub fn to_pretty(spots: &[Spot]) -> Result<String> {
    serde_json::to_string_pretty(&records(spots))
        .map_err(|e| GeospotError::serialization(format!("Failed to encode spots as JSON: {e}")))
}

/// Render spots as a compact JSON array
pub fn to_compact(spots: &[Spot]) -> Result<String> {
    serde_json::to_string(&records(spots))
        .map_err(|e| GeospotError::serialization(format!("Failed to encode spots as JSON: {e}")))
}

/// Print pretty JSON to stdout, or write compact JSON to `filename`
pub fn emit(spots: &[Spot], filename: Option<&Path>) -> Result<()> {
    match filename {
        Some(path) => fs::write(path, to_compact(spots)?)?,
        None => println!("{}", to_pretty(spots)?),
    }
    Ok(())
}
