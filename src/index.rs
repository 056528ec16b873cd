//! Lookup index construction.
//!
//! Derives the two case-folded maps behind station and card queries.
//! Indexes are rebuilt from the listing sequence on every invocation and
//! never mutated after construction.

use std::collections::HashMap;

use crate::models::CardShop;

/// Case-fold a name for case-insensitive matching.
///
/// Display names keep their original form; only index keys and queries
/// pass through here.
pub(crate) fn fold(text: &str) -> String {
    text.to_lowercase()
}

/// In-memory lookup indexes over one loaded dataset.
///
/// Station keys resolve to the full listing; on duplicate station names
/// the last occurrence wins. Card keys resolve to the selling stations'
/// display names in first-seen order, one entry per display name.
#[derive(Debug, Clone, Default)]
pub struct ShopIndex {
    pub(crate) stations: HashMap<String, CardShop>,
    pub(crate) cards: HashMap<String, Vec<String>>,
}

impl ShopIndex {
    /// Build both indexes by iterating the listings in source order.
    ///
    /// Pure function of its input; the listings themselves are not
    /// modified or consumed.
    pub fn build(shops: &[CardShop]) -> Self {
        let mut stations: HashMap<String, CardShop> = HashMap::new();
        let mut cards: HashMap<String, Vec<String>> = HashMap::new();

        for shop in shops {
            stations.insert(fold(&shop.station), shop.clone());

            for card in &shop.cards {
                let sellers = cards.entry(fold(card)).or_default();
                if !sellers.contains(&shop.station) {
                    sellers.push(shop.station.clone());
                }
            }
        }

        Self { stations, cards }
    }

    /// Number of distinct station keys in the index.
    pub fn station_count(&self) -> usize {
        self.stations.len()
    }

    /// Number of distinct card keys in the index.
    pub fn card_count(&self) -> usize {
        self.cards.len()
    }

    /// Whether the index holds no stations at all.
    pub fn is_empty(&self) -> bool {
        self.stations.is_empty()
    }
}
