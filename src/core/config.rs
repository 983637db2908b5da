//! Registry configuration.
//!
//! The registry needs exactly one setting: where its zone file lives. The
//! config is serde-enabled so hosts can embed it in their own config files.

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

/// File name used when no path is configured.
pub const DEFAULT_ZONES_FILE: &str = "zones.txt";

/// Configuration for a `ZoneRegistry`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct RegistryConfig {
    /// Path of the zone file read by `load` and written by `save`.
    pub file_path: PathBuf,
}

impl Default for RegistryConfig {
    fn default() -> Self {
        Self {
            file_path: PathBuf::from(DEFAULT_ZONES_FILE),
        }
    }
}

impl RegistryConfig {
    /// Create a config pointing at `file_path`.
    pub fn new(file_path: impl Into<PathBuf>) -> Self {
        Self {
            file_path: file_path.into(),
        }
    }

    /// Set the zone file path.
    #[must_use]
    pub fn with_file_path(mut self, file_path: impl Into<PathBuf>) -> Self {
        self.file_path = file_path.into();
        self
    }

    /// The configured zone file path.
    #[must_use]
    pub fn file_path(&self) -> &Path {
        &self.file_path
    }
}
