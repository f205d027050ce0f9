//! Script discovery.

use std::fs;
use std::path::{Path, PathBuf};

use walkdir::WalkDir;

use crate::shims::ScriptKind;

/// A file the scanner can turn into a shim.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScriptFile {
    /// Full path.
    pub path: PathBuf,
    /// File name without extension.
    pub leaf: String,
    /// Lowercased extension with its dot (`.ps1`).
    pub ext: String,
    pub kind: ScriptKind,
}

impl ScriptFile {
    /// Build a script from a path, or `None` if the extension is not recognized.
    pub fn from_path(path: &Path) -> Option<Self> {
        let kind = ScriptKind::from_path(path)?;
        let leaf = path.file_stem()?.to_string_lossy().to_string();
        let ext = path.extension()?.to_string_lossy().to_ascii_lowercase();
        Some(Self {
            path: path.to_path_buf(),
            leaf,
            ext: format!(".{}", ext),
            kind,
        })
    }
}

/// Scripts directly inside `dir` (not recursive).
pub fn collect_root_scripts(dir: &Path) -> Vec<ScriptFile> {
    let entries = match fs::read_dir(dir) {
        Ok(entries) => entries,
        Err(e) => {
            tracing::warn!("Cannot read {}: {}", dir.display(), e);
            return Vec::new();
        }
    };

    entries
        .filter_map(|entry| entry.ok())
        .map(|entry| entry.path())
        .filter(|path| path.is_file())
        .filter_map(|path| ScriptFile::from_path(&path))
        .collect()
}

/// Scripts anywhere below `dir`, following symbolic links.
pub fn collect_tool_scripts(dir: &Path) -> Vec<ScriptFile> {
    WalkDir::new(dir)
        .min_depth(1)
        .follow_links(true)
        .into_iter()
        .filter_map(|entry| match entry {
            Ok(entry) => Some(entry),
            Err(e) => {
                tracing::warn!("Failed to read entry under {}: {}", dir.display(), e);
                None
            }
        })
        .filter(|entry| entry.file_type().is_file())
        .filter_map(|entry| ScriptFile::from_path(entry.path()))
        .collect()
}
