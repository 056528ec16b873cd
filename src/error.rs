//! Error handling for card shop data operations.
//!
//! Provides error types with path context for dataset loading,
//! JSON parsing, and HTML export failures.

use std::path::PathBuf;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum CardShopError {
    #[error("Data file not found: {}", .path.display())]
    DataFileNotFound { path: PathBuf },

    #[error("Failed to read data file {}: {}", .path.display(), .source)]
    ReadData {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Invalid JSON in data file {}: {}", .path.display(), .source)]
    ParseData {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    #[error("Failed to write HTML file {}: {}", .path.display(), .source)]
    WriteHtml {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Configuration error: {message}")]
    Configuration { message: String },
}

impl CardShopError {
    /// Create a configuration error from any printable message.
    pub fn configuration(message: impl Into<String>) -> Self {
        Self::Configuration {
            message: message.into(),
        }
    }
}

pub type Result<T> = std::result::Result<T, CardShopError>;
