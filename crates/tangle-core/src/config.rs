//! Store configuration for tangle
//!
//! Configuration lives in `config.toml` at the store root. A missing file
//! means defaults; unknown or missing fields fall back field-by-field.

use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::{Result, TangleError};

/// Current store format version
pub const STORE_FORMAT_VERSION: u32 = 1;

/// Per-store configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct StoreConfig {
    /// Store format version
    pub version: u32,
    /// Directory (relative to the store root) receiving CSV exports
    pub export_dir: String,
    /// Directedness used when `create` is not given an explicit flag
    pub default_directed: bool,
}

impl Default for StoreConfig {
    fn default() -> Self {
        StoreConfig {
            version: STORE_FORMAT_VERSION,
            export_dir: "exports".to_string(),
            default_directed: false,
        }
    }
}

impl StoreConfig {
    /// Load configuration from a `config.toml` file
    pub fn load(path: &Path) -> Result<Self> {
        let raw = fs::read_to_string(path)?;
        Ok(toml::from_str(&raw)?)
    }

    /// Write configuration to a `config.toml` file
    pub fn save(&self, path: &Path) -> Result<()> {
        let raw = toml::to_string_pretty(self)
            .map_err(|e| TangleError::Other(format!("failed to serialize config: {e}")))?;
        fs::write(path, raw)?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn test_defaults() {
        let config = StoreConfig::default();
        assert_eq!(config.version, STORE_FORMAT_VERSION);
        assert_eq!(config.export_dir, "exports");
        assert!(!config.default_directed);
    }

    #[test]
    fn test_save_load_round_trip() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("config.toml");

        let mut config = StoreConfig::default();
        config.default_directed = true;
        config.export_dir = "tables".to_string();
        config.save(&path).unwrap();

        let loaded = StoreConfig::load(&path).unwrap();
        assert_eq!(loaded.version, STORE_FORMAT_VERSION);
        assert_eq!(loaded.export_dir, "tables");
        assert!(loaded.default_directed);
    }

    #[test]
    fn test_missing_fields_use_defaults() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("config.toml");
        fs::write(&path, "version = 1\n").unwrap();

        let loaded = StoreConfig::load(&path).unwrap();
        assert_eq!(loaded.export_dir, "exports");
        assert!(!loaded.default_directed);
    }
}
