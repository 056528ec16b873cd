//! Core data model for card shop listings.
//!
//! A listing pairs one station with the cards sold at its shop. Listings
//! are produced once by the loader and never mutated afterwards; the
//! serde shape matches the JSON dataset so the embedded HTML payload
//! round-trips without a separate wire type.

use serde::{Deserialize, Serialize};

/// One station and the trading cards sold at its card shop.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CardShop {
    /// Station display name (trimmed, never blank after loading).
    pub station: String,

    /// Cards on sale at this station, in source order.
    ///
    /// May be empty; duplicates within one station are preserved.
    #[serde(default)]
    pub cards: Vec<String>,
}

impl CardShop {
    /// Create a listing from already-clean parts.
    pub fn new(station: impl Into<String>, cards: Vec<String>) -> Self {
        Self {
            station: station.into(),
            cards,
        }
    }

    /// Whether any cards are registered for this station.
    pub fn has_cards(&self) -> bool {
        !self.cards.is_empty()
    }
}
