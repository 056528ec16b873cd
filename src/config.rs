//! Configuration for dataset location and export target.
//!
//! Resolved from CLI arguments by the command layer; the loader and
//! exporter receive explicit paths instead of consulting global state.

use std::path::PathBuf;

use crate::constants::{DEFAULT_DATA_PATH, DEFAULT_OUTPUT_PATH};
use crate::error::{CardShopError, Result};

/// File locations for one invocation.
#[derive(Debug, Clone)]
pub struct Config {
    /// JSON dataset to load.
    pub data_path: PathBuf,
    /// Where the exported HTML document is written.
    pub output_path: PathBuf,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            data_path: PathBuf::from(DEFAULT_DATA_PATH),
            output_path: PathBuf::from(DEFAULT_OUTPUT_PATH),
        }
    }
}

impl Config {
    /// Create a configuration with default paths.
    pub fn new() -> Self {
        Self::default()
    }

    /// Override the dataset location.
    pub fn with_data_path(mut self, path: impl Into<PathBuf>) -> Self {
        self.data_path = path.into();
        self
    }

    /// Override the HTML export target.
    pub fn with_output_path(mut self, path: impl Into<PathBuf>) -> Self {
        self.output_path = path.into();
        self
    }

    /// Check that the configured paths are usable before any work starts.
    ///
    /// # Errors
    ///
    /// Returns [`CardShopError::DataFileNotFound`] when the dataset path
    /// does not exist, and [`CardShopError::Configuration`] when it
    /// points at a directory or the output path is empty.
    pub fn validate(&self) -> Result<()> {
        if !self.data_path.exists() {
            return Err(CardShopError::DataFileNotFound {
                path: self.data_path.clone(),
            });
        }

        if self.data_path.is_dir() {
            return Err(CardShopError::configuration(format!(
                "Data path points at a directory, not a file: {}",
                self.data_path.display()
            )));
        }

        if self.output_path.as_os_str().is_empty() {
            return Err(CardShopError::configuration(
                "Output path must not be empty",
            ));
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    #[test]
    fn test_default_paths() {
        let config = Config::default();
        assert_eq!(config.data_path, PathBuf::from("data/card_shops.json"));
        assert_eq!(config.output_path, PathBuf::from("docs/index.html"));
    }

    #[test]
    fn test_builder_overrides_paths() {
        let config = Config::new()
            .with_data_path("custom/shops.json")
            .with_output_path("out/page.html");

        assert_eq!(config.data_path, PathBuf::from("custom/shops.json"));
        assert_eq!(config.output_path, PathBuf::from("out/page.html"));
    }

    #[test]
    fn test_validate_accepts_existing_file() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("shops.json");
        fs::write(&path, "{}").unwrap();

        let config = Config::new().with_data_path(&path);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_validate_rejects_missing_file() {
        let config = Config::new().with_data_path("/nonexistent/shops.json");
        let err = config.validate().unwrap_err();
        assert!(matches!(err, CardShopError::DataFileNotFound { .. }));
    }

    #[test]
    fn test_validate_rejects_directory() {
        let dir = TempDir::new().unwrap();
        let config = Config::new().with_data_path(dir.path());
        let err = config.validate().unwrap_err();
        assert!(matches!(err, CardShopError::Configuration { .. }));
    }

    #[test]
    fn test_validate_rejects_empty_output_path() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("shops.json");
        fs::write(&path, "{}").unwrap();

        let config = Config::new().with_data_path(&path).with_output_path("");
        let err = config.validate().unwrap_err();
        assert!(matches!(err, CardShopError::Configuration { .. }));
    }
}
