//! Script kinds.

use serde::Serialize;
use std::path::Path;

/// Extensions the scanner picks up, without the leading dot.
pub const SCRIPT_EXTENSIONS: &[&str] = &["ps1", "py", "cmd", "bat", "sh", "zsh"];

/// Every script the scanner recognizes falls into exactly one kind.
///
/// Files with other extensions never reach classification; they are
/// filtered out during enumeration.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ScriptKind {
    /// `.ps1`
    PowerShell,
    /// `.py`
    Python,
    /// `.cmd` and `.bat`
    Batch,
    /// `.sh`
    Shell,
    /// `.zsh`
    Zsh,
}

impl ScriptKind {
    /// Classify an extension (case-insensitive, leading dot optional).
    pub fn from_extension(ext: &str) -> Option<Self> {
        let ext = ext.strip_prefix('.').unwrap_or(ext).to_ascii_lowercase();
        match ext.as_str() {
            "ps1" => Some(Self::PowerShell),
            "py" => Some(Self::Python),
            "cmd" | "bat" => Some(Self::Batch),
            "sh" => Some(Self::Shell),
            "zsh" => Some(Self::Zsh),
            _ => None,
        }
    }

    /// Classify a path by its extension.
    pub fn from_path(path: &Path) -> Option<Self> {
        path.extension()
            .and_then(|e| e.to_str())
            .and_then(Self::from_extension)
    }

    /// What the host is missing when this kind cannot be launched.
    pub fn missing_backend(&self) -> &'static str {
        match self {
            Self::Shell => "no POSIX shell backend (Git bash or WSL) found",
            Self::Zsh => "WSL not found",
            Self::PowerShell | Self::Python | Self::Batch => "no interpreter found",
        }
    }
}
