//! Station and card queries.
//!
//! Exact-match lookups over [`ShopIndex`], case-folded on both sides.
//! Absence is an ordinary result here, not an error; the report layer
//! decides how to phrase it.

use crate::index::{ShopIndex, fold};
use crate::models::CardShop;

impl ShopIndex {
    /// Look up the listing for a station by name (case-insensitive)
    ///
    /// Matching is exact after case folding; two queries differing only
    /// in letter case return the same result.
    ///
    /// # Arguments
    /// * `name` - Station name as the user typed it
    ///
    /// # Returns
    /// The full listing for the station, or `None` when no station
    /// matches (absence, not an error)
    ///
    /// # Examples
    /// ```
    /// use momotetsu_cards::{CardShop, ShopIndex};
    ///
    /// let shops = vec![CardShop::new("駅A", vec!["カード1".to_string()])];
    /// let index = ShopIndex::build(&shops);
    /// assert!(index.search_by_station("駅a").is_some());
    /// assert!(index.search_by_station("駅X").is_none());
    /// ```
    pub fn search_by_station(&self, name: &str) -> Option<&CardShop> {
        self.stations.get(&fold(name))
    }

    /// Look up the stations selling a card by name (case-insensitive)
    ///
    /// Matching is exact after case folding. Sellers come back in
    /// first-seen dataset order with no duplicate display names.
    ///
    /// # Arguments
    /// * `name` - Card name as the user typed it
    ///
    /// # Returns
    /// Station display names selling the card; empty when no station
    /// sells it
    ///
    /// # Examples
    /// ```
    /// use momotetsu_cards::{CardShop, ShopIndex};
    ///
    /// let shops = vec![
    ///     CardShop::new("駅A", vec!["カード1".to_string()]),
    ///     CardShop::new("駅B", vec!["カード1".to_string()]),
    /// ];
    /// let index = ShopIndex::build(&shops);
    /// assert_eq!(index.search_by_card("カード1").len(), 2);
    /// assert!(index.search_by_card("幻のカード").is_empty());
    /// ```
    pub fn search_by_card(&self, name: &str) -> &[String] {
        self.cards
            .get(&fold(name))
            .map(Vec::as_slice)
            .unwrap_or_default()
    }
}
