//! Dataset loading.
//!
//! Reads the card shop JSON file into [`CardShop`] listings. The schema
//! is small: a top-level `stations` array of `{station, cards}` objects.
//! Names are trimmed on the way in; a listing whose station name is
//! blank is dropped, as are blank card names inside a valid listing. A
//! missing, unreadable, or malformed file aborts the load with no
//! partial data.

use std::fs;
use std::path::Path;

use serde::Deserialize;
use tracing::{debug, info};

use crate::error::{CardShopError, Result};
use crate::models::CardShop;

/// On-disk shape of the dataset file.
#[derive(Debug, Deserialize)]
struct DataFile {
    /// Listings in source order. A file without the field is an empty
    /// dataset, not an error.
    #[serde(default)]
    stations: Vec<RawListing>,
}

/// One entry as written in the dataset, before trimming.
#[derive(Debug, Deserialize)]
struct RawListing {
    #[serde(default)]
    station: String,
    #[serde(default)]
    cards: Vec<String>,
}

/// Load card shop listings from `path`, preserving source order.
///
/// # Errors
///
/// Returns [`CardShopError::DataFileNotFound`] if `path` does not exist,
/// [`CardShopError::ReadData`] if it cannot be read, and
/// [`CardShopError::ParseData`] if the contents are not valid JSON or a
/// field has the wrong type.
pub fn load_card_shops(path: &Path) -> Result<Vec<CardShop>> {
    if !path.exists() {
        return Err(CardShopError::DataFileNotFound {
            path: path.to_path_buf(),
        });
    }

    debug!("Reading dataset from {}", path.display());
    let text = fs::read_to_string(path).map_err(|source| CardShopError::ReadData {
        path: path.to_path_buf(),
        source,
    })?;

    let data: DataFile = serde_json::from_str(&text).map_err(|source| CardShopError::ParseData {
        path: path.to_path_buf(),
        source,
    })?;

    let mut shops = Vec::with_capacity(data.stations.len());
    for listing in data.stations {
        let station = listing.station.trim();
        if station.is_empty() {
            debug!("Skipping listing with blank station name");
            continue;
        }

        let cards: Vec<String> = listing
            .cards
            .iter()
            .map(|card| card.trim())
            .filter(|card| !card.is_empty())
            .map(str::to_owned)
            .collect();

        shops.push(CardShop::new(station, cards));
    }

    info!(
        "Loaded {} card shop listings from {}",
        shops.len(),
        path.display()
    );
    Ok(shops)
}
