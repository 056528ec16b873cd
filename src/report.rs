//! Terminal formatting for query results.
//!
//! Pure string builders for the three query modes. The command layer
//! owns stdout; nothing here prints.

use crate::constants::messages;
use crate::models::CardShop;

/// Japanese enumeration separator placed between listed names.
const LIST_SEPARATOR: &str = "、";

/// Format the outcome of a station query as a single line.
///
/// A found station renders as `駅名: カード1、カード2`; a found station
/// with no cards substitutes the no-cards notice after the colon. A miss
/// renders the not-found notice alone.
pub fn format_station_result(result: Option<&CardShop>) -> String {
    match result {
        None => messages::STATION_NOT_FOUND.to_string(),
        Some(shop) if shop.cards.is_empty() => {
            format!("{}: {}", shop.station, messages::NO_CARDS_REGISTERED)
        }
        Some(shop) => format!("{}: {}", shop.station, shop.cards.join(LIST_SEPARATOR)),
    }
}

/// Format the outcome of a card query as a single line.
///
/// Sellers already arrive deduplicated and ordered from the index, so
/// this is pure presentation: `カード名: 駅A、駅B`, or the queried name
/// with the not-found notice when no station sells it.
pub fn format_card_result(card_name: &str, stations: &[String]) -> String {
    if stations.is_empty() {
        format!("{}: {}", card_name, messages::CARD_NOT_FOUND)
    } else {
        format!("{}: {}", card_name, stations.join(LIST_SEPARATOR))
    }
}

/// Format every listing, one line per station, in dataset order.
///
/// Each line uses the same shape as a station query hit. An empty
/// dataset renders the no-shops notice instead.
pub fn format_preview(shops: &[CardShop]) -> String {
    if shops.is_empty() {
        return messages::NO_SHOPS_REGISTERED.to_string();
    }

    shops
        .iter()
        .map(|shop| format_station_result(Some(shop)))
        .collect::<Vec<_>>()
        .join("\n")
}
