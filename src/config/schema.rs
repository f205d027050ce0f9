//! Configuration schema.
//!
//! [`ScanConfig`] is one layer as read from a file or assembled from flags;
//! every key is optional so layers can be stacked. [`ScanSettings`] is the
//! fully resolved result a run works with.

use serde::{Deserialize, Serialize};
use std::path::PathBuf;

use crate::shims::{scoop_shims_dir, ScoopRegistry};

/// One configuration layer (`bucket-scan.yml`, environment, or flags).
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ScanConfig {
    /// Directory holding the package families.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub root: Option<PathBuf>,

    /// Directory receiving `shims.txt` and `shims-map.csv`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub output: Option<PathBuf>,

    /// Family names to scan; everything when absent or empty.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub families: Option<Vec<String>>,

    /// Append `-v<version>` to shim names.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub include_version: Option<bool>,

    /// Plan shims without registering them.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub dry_run: Option<bool>,

    /// Shim directory checked for existing names.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub shims_dir: Option<PathBuf>,

    /// Command used to register shims (`<command> shim add ...`).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub registry_command: Option<String>,
}

/// Resolved settings for one run.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ScanSettings {
    pub root: PathBuf,
    pub output: PathBuf,
    /// Trimmed, non-empty family names. Empty means all families.
    pub families: Vec<String>,
    pub include_version: bool,
    pub dry_run: bool,
    pub shims_dir: PathBuf,
    pub registry_command: String,
}

impl Default for ScanSettings {
    fn default() -> Self {
        Self {
            root: PathBuf::from("."),
            output: PathBuf::from("."),
            families: Vec::new(),
            include_version: false,
            dry_run: false,
            shims_dir: scoop_shims_dir(),
            registry_command: ScoopRegistry::DEFAULT_COMMAND.to_string(),
        }
    }
}

impl ScanSettings {
    /// Resolve a merged layer on top of the built-in defaults.
    pub fn from_config(config: &ScanConfig) -> Self {
        let defaults = Self::default();
        Self {
            root: config.root.clone().unwrap_or(defaults.root),
            output: config.output.clone().unwrap_or(defaults.output),
            families: normalize_families(config.families.as_deref().unwrap_or_default()),
            include_version: config.include_version.unwrap_or(defaults.include_version),
            dry_run: config.dry_run.unwrap_or(defaults.dry_run),
            shims_dir: config.shims_dir.clone().unwrap_or(defaults.shims_dir),
            registry_command: config
                .registry_command
                .clone()
                .unwrap_or(defaults.registry_command),
        }
    }
}

/// Trim family names and drop empty entries.
pub fn normalize_families(raw: &[String]) -> Vec<String> {
    raw.iter()
        .map(|f| f.trim())
        .filter(|f| !f.is_empty())
        .map(String::from)
        .collect()
}
