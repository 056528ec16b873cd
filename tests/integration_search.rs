//! Integration tests for loading, indexing, and querying card shop data.
//!
//! Exercises the full pipeline from a dataset file on disk through the
//! case-folded indexes to the formatted terminal output.

use std::fs;
use std::path::PathBuf;

use momotetsu_cards::{CardShopError, ShopIndex, load_card_shops, report};
use tempfile::TempDir;

/// Write a dataset file into the temp dir and return its path.
fn write_dataset(dir: &TempDir, contents: &str) -> PathBuf {
    let path = dir.path().join("card_shops.json");
    fs::write(&path, contents).expect("failed to write test dataset");
    path
}

#[test]
fn test_load_index_and_query_end_to_end() {
    let dir = TempDir::new().unwrap();
    let path = write_dataset(
        &dir,
        r#"{"stations":[
            {"station":"駅A","cards":["カード1","カード2"]},
            {"station":"駅B","cards":["カード1"]}
        ]}"#,
    );

    let shops = load_card_shops(&path).unwrap();
    assert_eq!(shops.len(), 2);

    let index = ShopIndex::build(&shops);

    let sellers: Vec<&str> = index
        .search_by_card("カード1")
        .iter()
        .map(String::as_str)
        .collect();
    assert_eq!(sellers, ["駅A", "駅B"]);

    let hit = index.search_by_station("駅B").unwrap();
    assert_eq!(hit.cards, vec!["カード1"]);
}

#[test]
fn test_queries_are_case_insensitive_end_to_end() {
    let dir = TempDir::new().unwrap();
    let path = write_dataset(
        &dir,
        r#"{"stations":[{"station":"Sample Station","cards":["Gold Card"]}]}"#,
    );

    let shops = load_card_shops(&path).unwrap();
    let index = ShopIndex::build(&shops);

    assert_eq!(
        index.search_by_station("SAMPLE STATION"),
        index.search_by_station("sample station")
    );
    assert_eq!(
        index.search_by_card("GOLD CARD"),
        index.search_by_card("gold card")
    );
    assert_eq!(index.search_by_card("Gold Card").len(), 1);
}

#[test]
fn test_dirty_dataset_is_cleaned_before_indexing() {
    let dir = TempDir::new().unwrap();
    let path = write_dataset(
        &dir,
        r#"{"stations":[
            {"station":"  駅A ","cards":[" カード1 ",""]},
            {"station":"   ","cards":["カード2"]},
            {"station":"駅B"}
        ]}"#,
    );

    let shops = load_card_shops(&path).unwrap();
    assert_eq!(shops.len(), 2);

    let index = ShopIndex::build(&shops);
    assert_eq!(index.station_count(), 2);
    assert!(index.search_by_card("カード2").is_empty());

    let hit = index.search_by_station("駅A").unwrap();
    assert_eq!(hit.cards, vec!["カード1"]);
    assert!(!index.search_by_station("駅B").unwrap().has_cards());
}

#[test]
fn test_formatted_output_matches_queries() {
    let dir = TempDir::new().unwrap();
    let path = write_dataset(
        &dir,
        r#"{"stations":[
            {"station":"駅A","cards":["カード1","カード2"]},
            {"station":"駅B","cards":[]}
        ]}"#,
    );

    let shops = load_card_shops(&path).unwrap();
    let index = ShopIndex::build(&shops);

    assert_eq!(
        report::format_station_result(index.search_by_station("駅A")),
        "駅A: カード1、カード2"
    );
    assert_eq!(
        report::format_station_result(index.search_by_station("駅X")),
        "該当する駅が見つかりませんでした。"
    );
    assert_eq!(
        report::format_card_result("カード1", index.search_by_card("カード1")),
        "カード1: 駅A"
    );
    assert_eq!(
        report::format_card_result("カード9", index.search_by_card("カード9")),
        "カード9: 取り扱い駅が見つかりませんでした。"
    );

    let preview = report::format_preview(&shops);
    assert_eq!(
        preview,
        "駅A: カード1、カード2\n駅B: 登録されているカード情報がありません。"
    );
}

#[test]
fn test_duplicate_stations_resolve_to_last_listing() {
    let dir = TempDir::new().unwrap();
    let path = write_dataset(
        &dir,
        r#"{"stations":[
            {"station":"駅A","cards":["カード1"]},
            {"station":"駅a","cards":["カード2"]}
        ]}"#,
    );

    let shops = load_card_shops(&path).unwrap();
    assert_eq!(shops.len(), 2);

    let index = ShopIndex::build(&shops);
    assert_eq!(index.station_count(), 1);
    assert_eq!(index.search_by_station("駅A").unwrap().cards, vec!["カード2"]);

    // The preview still shows both listings in source order.
    let preview = report::format_preview(&shops);
    assert_eq!(preview.lines().count(), 2);
}

#[test]
fn test_missing_dataset_file_fails_cleanly() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("nope.json");

    let err = load_card_shops(&path).unwrap_err();
    assert!(matches!(err, CardShopError::DataFileNotFound { .. }));
    assert!(err.to_string().contains("nope.json"));
}

#[test]
fn test_malformed_dataset_reports_file_in_error() {
    let dir = TempDir::new().unwrap();
    let path = write_dataset(&dir, r#"{"stations": "not an array"}"#);

    let err = load_card_shops(&path).unwrap_err();
    assert!(matches!(err, CardShopError::ParseData { .. }));
    assert!(err.to_string().contains("card_shops.json"));
}

#[test]
fn test_bundled_dataset_loads_and_searches() {
    let path = PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("data/card_shops.json");

    let shops = load_card_shops(&path).unwrap();
    assert!(shops.len() >= 10);
    assert!(shops.iter().any(|s| !s.has_cards()));

    let index = ShopIndex::build(&shops);
    let hit = index.search_by_station("東京").unwrap();
    assert!(hit.has_cards());

    let sellers = index.search_by_card("ゴールドカード");
    assert!(sellers.len() >= 2);
}

#[test]
fn test_empty_dataset_previews_with_notice() {
    let dir = TempDir::new().unwrap();
    let path = write_dataset(&dir, r#"{"stations":[]}"#);

    let shops = load_card_shops(&path).unwrap();
    assert!(shops.is_empty());
    assert_eq!(
        report::format_preview(&shops),
        "登録されているカードショップ情報がありません。"
    );
}
