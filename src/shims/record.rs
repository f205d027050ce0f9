//! The audit record for one shim.

use serde::Serialize;
use std::path::PathBuf;

use super::invocation::Invocation;

/// Value of the `type` column. Every shim the scanner creates is a root shim.
pub const SHIM_TYPE: &str = "root";

/// One classified script turned into a shim (real or planned).
///
/// Created once per script and never modified afterwards.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ShimRecord {
    /// Unique shim name.
    pub shim: String,
    #[serde(rename = "type")]
    pub kind: &'static str,
    pub family: String,
    pub app: String,
    /// Plugin the script belongs to, if any.
    pub tool: Option<String>,
    /// File name without extension.
    pub leaf: String,
    /// Extension including the dot, lowercased (`.py`).
    pub ext: String,
    /// Version from the `current` link; empty when unversioned.
    pub version: String,
    /// Full path of the script.
    pub target: PathBuf,
    /// How the shim launches the script.
    pub invocation: Invocation,
    pub dry_run: bool,
}

impl ShimRecord {
    /// Column names of the shim map, in order.
    pub const CSV_HEADER: [&'static str; 11] = [
        "shim",
        "type",
        "family",
        "app",
        "tool",
        "leaf",
        "ext",
        "version",
        "interpreter",
        "target",
        "isDryRun",
    ];

    /// Label of the interpreter that runs the script.
    pub fn interpreter(&self) -> &'static str {
        self.invocation.interpreter
    }

    /// Field values matching [`Self::CSV_HEADER`].
    pub fn csv_fields(&self) -> [String; 11] {
        [
            self.shim.clone(),
            self.kind.to_string(),
            self.family.clone(),
            self.app.clone(),
            self.tool.clone().unwrap_or_default(),
            self.leaf.clone(),
            self.ext.clone(),
            self.version.clone(),
            self.interpreter().to_string(),
            self.target.display().to_string(),
            self.dry_run.to_string(),
        ]
    }
}
