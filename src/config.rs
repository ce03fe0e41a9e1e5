// SPDX-License-Identifier: MIT
// SPDX-FileCopyrightText: 2025 Alexander Minges

//! Packager configuration loaded from JSON.
//! Every field is optional; missing fields take the export defaults.

use std::path::Path;

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};

use crate::utils::DEFAULT_FOLDER_NAME;

/// How to treat two stickers whose labels normalize to the same file name.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DuplicatePolicy {
    /// Keep the first name and append `-2`, `-3`, ... to later collisions.
    #[default]
    NumericSuffix,
    /// Fail the packaging run on the first collision.
    Reject,
}

/// Compression applied to sticker entries inside the archive.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Compression {
    #[default]
    Deflated,
    Stored,
}

impl Compression {
    pub(crate) fn method(self) -> zip::CompressionMethod {
        match self {
            Compression::Deflated => zip::CompressionMethod::Deflated,
            Compression::Stored => zip::CompressionMethod::Stored,
        }
    }
}

/// Settings shared by packaging and archive export.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct PackagerConfig {
    /// Top-level folder every sticker is placed under.
    pub folder_name: String,
    pub duplicate_names: DuplicatePolicy,
    pub compression: Compression,
    /// Add a `manifest.json` with sizes and SHA-256 digests next to the stickers.
    pub include_manifest: bool,
}

impl Default for PackagerConfig {
    fn default() -> Self {
        Self {
            folder_name: DEFAULT_FOLDER_NAME.to_string(),
            duplicate_names: DuplicatePolicy::default(),
            compression: Compression::default(),
            include_manifest: false,
        }
    }
}

impl PackagerConfig {
    /// Parse a configuration from a JSON string.
    ///
    /// # Errors
    ///
    /// Returns an error when the JSON is malformed, a value has the wrong
    /// shape, or an unknown field is present.
    pub fn from_json(json: &str) -> Result<Self> {
        serde_json::from_str(json).context("Failed to parse packager config JSON")
    }

    /// Read and parse a JSON configuration file.
    pub fn load(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read packager config {:?}", path))?;
        Self::from_json(&content).with_context(|| format!("Invalid packager config {:?}", path))
    }
}

#[cfg(test)]
mod tests {
    use super::{Compression, DuplicatePolicy, PackagerConfig};

    #[test]
    fn empty_object_yields_defaults() {
        let config = PackagerConfig::from_json("{}").unwrap();
        assert_eq!(config, PackagerConfig::default());
        assert_eq!(config.folder_name, "AI-Stickers");
        assert_eq!(config.duplicate_names, DuplicatePolicy::NumericSuffix);
        assert_eq!(config.compression, Compression::Deflated);
        assert!(!config.include_manifest);
    }

    #[test]
    fn parses_all_fields() {
        let json = r#"{
            "folder_name": "My Stickers",
            "duplicate_names": "reject",
            "compression": "stored",
            "include_manifest": true
        }"#;
        let config = PackagerConfig::from_json(json).unwrap();
        assert_eq!(config.folder_name, "My Stickers");
        assert_eq!(config.duplicate_names, DuplicatePolicy::Reject);
        assert_eq!(config.compression, Compression::Stored);
        assert!(config.include_manifest);
    }

    #[test]
    fn rejects_unknown_fields() {
        assert!(PackagerConfig::from_json(r#"{"folder": "x"}"#).is_err());
    }

    #[test]
    fn load_reads_file_from_disk() {
        use tempfile::TempDir;

        let tmp = TempDir::new().unwrap();
        let path = tmp.path().join("packager.json");
        std::fs::write(&path, r#"{"include_manifest": true}"#).unwrap();

        let config = PackagerConfig::load(&path).unwrap();
        assert!(config.include_manifest);
        assert!(PackagerConfig::load(&tmp.path().join("missing.json")).is_err());
    }
}
