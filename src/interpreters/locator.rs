//! Host lookups behind a narrow seam.

use std::collections::{HashMap, HashSet};
use std::path::{Path, PathBuf};

/// Answers "where is this program" and "does this file exist".
///
/// Probing goes through this trait so capability discovery can be tested
/// without touching the real PATH.
pub trait ToolLocator {
    /// Resolve a command name on PATH to an absolute path.
    fn find(&self, command: &str) -> Option<PathBuf>;

    /// Check a fixed, well-known location.
    fn file_exists(&self, path: &Path) -> bool;

    /// Read an environment override.
    fn env(&self, key: &str) -> Option<String>;
}

/// Locator backed by the real PATH, filesystem and environment.
#[derive(Debug, Default, Clone, Copy)]
pub struct SystemLocator;

impl ToolLocator for SystemLocator {
    fn find(&self, command: &str) -> Option<PathBuf> {
        match which::which(command) {
            Ok(path) => Some(path),
            Err(e) => {
                tracing::trace!("'{}' not on PATH: {}", command, e);
                None
            }
        }
    }

    fn file_exists(&self, path: &Path) -> bool {
        path.is_file()
    }

    fn env(&self, key: &str) -> Option<String> {
        std::env::var(key).ok().filter(|v| !v.trim().is_empty())
    }
}

/// Locator with pre-configured answers, for tests and dry planning.
#[derive(Debug, Default, Clone)]
pub struct FixedLocator {
    commands: HashMap<String, PathBuf>,
    files: HashSet<PathBuf>,
    env: HashMap<String, String>,
}

impl FixedLocator {
    /// Create a locator that finds nothing.
    pub fn new() -> Self {
        Self::default()
    }

    /// Make `command` resolve to `path`.
    pub fn with_command(mut self, command: &str, path: impl Into<PathBuf>) -> Self {
        self.commands.insert(command.to_string(), path.into());
        self
    }

    /// Make a fixed path report as existing.
    pub fn with_file(mut self, path: impl Into<PathBuf>) -> Self {
        self.files.insert(path.into());
        self
    }

    /// Set an environment value.
    pub fn with_env(mut self, key: &str, value: &str) -> Self {
        self.env.insert(key.to_string(), value.to_string());
        self
    }
}

impl ToolLocator for FixedLocator {
    fn find(&self, command: &str) -> Option<PathBuf> {
        self.commands.get(command).cloned()
    }

    fn file_exists(&self, path: &Path) -> bool {
        self.files.contains(path)
    }

    fn env(&self, key: &str) -> Option<String> {
        self.env.get(key).cloned()
    }
}
