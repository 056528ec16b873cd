//! Static HTML preview generation.
//!
//! Renders the full listing sequence into a single self-contained page.
//! The listings are embedded as one JSON payload in a data `<script>`
//! block, and the page's inline script rebuilds the same case-folded
//! indexes the CLI uses, so search works without a server or network.

use std::fs;
use std::path::Path;

use chrono::Utc;
use tracing::info;

use crate::error::{CardShopError, Result};
use crate::models::CardShop;

/// Page skeleton compiled into the binary.
const TEMPLATE: &str = include_str!("templates/preview.html");

/// Placeholder replaced by the JSON payload. Appears exactly once in the
/// template, inside the data script block.
const DATA_PLACEHOLDER: &str = "__DATA__";

/// Placeholder replaced by the generation timestamp in the footer.
const GENERATED_PLACEHOLDER: &str = "__GENERATED__";

/// Serialize listings for embedding in the data script block.
///
/// Every `<` is escaped as `<` so no station or card name can close
/// the enclosing script element. The escape is purely textual; parsing
/// the payload yields the listings unchanged.
fn serialize_listings(shops: &[CardShop]) -> Result<String> {
    let json = serde_json::to_string(shops)
        .map_err(|e| CardShopError::configuration(format!("Failed to serialize listings: {}", e)))?;
    Ok(json.replace('<', "\\u003c"))
}

/// Render the complete preview document for `shops`.
///
/// The timestamp placeholder is filled first so the substitution can
/// never touch the payload text.
pub fn render_html(shops: &[CardShop]) -> Result<String> {
    let generated = Utc::now().format("%Y-%m-%d %H:%M UTC").to_string();
    let payload = serialize_listings(shops)?;

    Ok(TEMPLATE
        .replacen(GENERATED_PLACEHOLDER, &generated, 1)
        .replacen(DATA_PLACEHOLDER, &payload, 1))
}

/// Write the preview document for `shops` to `output`.
///
/// Missing parent directories are created. The write replaces any
/// existing file at the path.
///
/// # Errors
///
/// Returns [`CardShopError::WriteHtml`] when the directory cannot be
/// created or the file cannot be written.
pub fn export_html(shops: &[CardShop], output: &Path) -> Result<()> {
    let document = render_html(shops)?;

    if let Some(parent) = output.parent() {
        if !parent.as_os_str().is_empty() && !parent.exists() {
            fs::create_dir_all(parent).map_err(|source| CardShopError::WriteHtml {
                path: output.to_path_buf(),
                source,
            })?;
        }
    }

    fs::write(output, document).map_err(|source| CardShopError::WriteHtml {
        path: output.to_path_buf(),
        source,
    })?;

    info!("Wrote HTML preview to {}", output.display());
    Ok(())
}
