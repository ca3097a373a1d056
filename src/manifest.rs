//! Batch manifest (sheets.yaml) parsing.
//!
//! The manifest maps spritesheet files to output name prefixes and
//! carries the output directory plus optional slicer overrides.

use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::error::{Result, SnipError};
use crate::pipeline::SlicerConfig;

/// Default manifest filename.
pub const MANIFEST_FILENAME: &str = "sheets.yaml";

/// Batch manifest loaded from sheets.yaml.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct Manifest {
    /// Spritesheet filename → output name prefix.
    /// Paths are resolved relative to the manifest's directory.
    #[serde(default)]
    pub sheets: BTreeMap<String, String>,

    /// Output directory for sliced sprites.
    #[serde(default = "default_output")]
    pub output: PathBuf,

    /// Slicer tuning overrides; defaults apply where omitted.
    #[serde(default)]
    pub slicer: SlicerConfig,
}

fn default_output() -> PathBuf {
    PathBuf::from("sliced")
}

impl Default for Manifest {
    fn default() -> Self {
        Self {
            sheets: BTreeMap::new(),
            output: default_output(),
            slicer: SlicerConfig::default(),
        }
    }
}

impl Manifest {
    /// Load manifest from a sheets.yaml file.
    pub fn load(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path).map_err(|e| SnipError::Io {
            path: path.to_path_buf(),
            message: format!("Failed to read manifest: {}", e),
        })?;

        Self::parse(&content)
    }

    /// Parse manifest from YAML string.
    pub fn parse(content: &str) -> Result<Self> {
        serde_yaml::from_str(content).map_err(|e| SnipError::Manifest {
            message: format!("Invalid manifest: {}", e),
            help: Some("Check sheets.yaml syntax".to_string()),
        })
    }

    /// Sheet entries as (file, prefix), ordered by prefix.
    ///
    /// Prefixes carry an ordering convention (sheet01_, sheet02_, ...)
    /// while the source filenames are opaque export hashes, so batch
    /// runs iterate in prefix order.
    pub fn sheets_by_prefix(&self) -> Vec<(&str, &str)> {
        let mut entries: Vec<(&str, &str)> = self
            .sheets
            .iter()
            .map(|(file, prefix)| (file.as_str(), prefix.as_str()))
            .collect();
        entries.sort_by_key(|&(_, prefix)| prefix);
        entries
    }
}
