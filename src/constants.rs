//! Application constants for the card shop search tool.
//!
//! Default file locations and the user-facing result strings shared by
//! the terminal formatter and the generated HTML page.

// =============================================================================
// Default File Locations
// =============================================================================

/// Bundled card shop dataset, relative to the repository root.
pub const DEFAULT_DATA_PATH: &str = "data/card_shops.json";

/// Default HTML export target (published via the docs/ directory).
pub const DEFAULT_OUTPUT_PATH: &str = "docs/index.html";

// =============================================================================
// User-Facing Messages
// =============================================================================

/// Result strings shown to users.
///
/// The tool targets a Japanese audience; these strings are printed verbatim
/// by the CLI and mirrored by the inline script in the exported HTML page.
pub mod messages {
    /// Station query found no match.
    pub const STATION_NOT_FOUND: &str = "該当する駅が見つかりませんでした。";

    /// Card query found no selling stations.
    pub const CARD_NOT_FOUND: &str = "取り扱い駅が見つかりませんでした。";

    /// A matched station has no cards registered.
    pub const NO_CARDS_REGISTERED: &str = "登録されているカード情報がありません。";

    /// The dataset contains no listings at all.
    pub const NO_SHOPS_REGISTERED: &str = "登録されているカードショップ情報がありません。";

    /// Confirmation printed after a successful HTML export.
    pub const HTML_EXPORTED: &str = "HTML を生成しました";
}
