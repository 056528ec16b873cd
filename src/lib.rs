//! Momotetsu World Card Shop Search Library
//!
//! A Rust library for looking up which trading cards the card shops in
//! Momotaro Dentetsu World sell, station by station, and for exporting
//! the whole listing as a self-contained offline HTML page.
//!
//! This library provides tools for:
//! - Loading and cleaning the JSON card shop dataset
//! - Building case-folded station and card lookup indexes
//! - Case-insensitive exact-match queries in both directions
//! - Formatting results for the terminal
//! - Rendering a static HTML page with client-side search

pub mod config;
pub mod constants;
pub mod error;
pub mod html;
pub mod index;
pub mod loader;
pub mod models;
pub mod report;
pub mod search;

// CLI modules
pub mod cli {
    pub mod args;
    pub mod commands;
}

// Re-export commonly used types
pub use config::Config;
pub use error::{CardShopError, Result};
pub use html::{export_html, render_html};
pub use index::ShopIndex;
pub use loader::load_card_shops;
pub use models::CardShop;
