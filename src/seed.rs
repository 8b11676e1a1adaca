// src/seed.rs

use crate::domain::spot::ParkingSpot;
use crate::errors::{AppError, AppResult};
use crate::inventory::InventoryStore;
use std::fs;
use std::path::Path;
use tracing::info;

/// Sample inventory shipped with the admin panel.
const SAMPLE_PARKING: &str = include_str!("../data/sample_parking.json");

/// Parses a JSON array of flat spot records.
pub fn parse_spots(json: &str) -> AppResult<Vec<ParkingSpot>> {
    serde_json::from_str(json).map_err(|e| AppError::Seed(format!("Invalid seed JSON: {e}")))
}

pub fn sample_spots() -> AppResult<Vec<ParkingSpot>> {
    parse_spots(SAMPLE_PARKING)
}

/// Builds a store from a seed file, or from the bundled sample when no
/// path is given. Every record is validated on the way in.
pub fn load_store(path: Option<&Path>) -> AppResult<InventoryStore> {
    let spots = match path {
        Some(path) => {
            let raw = fs::read_to_string(path).map_err(|e| {
                AppError::Seed(format!("Failed to read seed file {}: {e}", path.display()))
            })?;
            parse_spots(&raw)?
        }
        None => sample_spots()?,
    };

    let store = InventoryStore::with_spots(spots)?;
    info!(
        spots = store.len(),
        source = %path.map(|p| p.display().to_string()).unwrap_or_else(|| "sample".to_string()),
        "inventory loaded"
    );
    Ok(store)
}
