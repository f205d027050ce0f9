//! The package manager's shim registry.
//!
//! The scanner only needs three things from the registry: where shims live,
//! whether a name is taken, and a way to add one. [`ScoopRegistry`] drives
//! the real `scoop shim add` command; [`RecordingRegistry`] keeps everything
//! in memory for tests and previews.

use std::collections::HashSet;
use std::path::{Path, PathBuf};

use crate::error::{Result, ScanError};
use crate::process;

/// Contract with the external shim registry.
pub trait ShimRegistry {
    /// Directory holding the registry's shim executables.
    fn shims_dir(&self) -> &Path;

    /// Whether a shim called `name` already exists.
    ///
    /// Checks for `<name>.exe` in [`Self::shims_dir`]. The answer is only as
    /// fresh as the moment of the call; concurrent writers are not detected.
    fn exists(&self, name: &str) -> bool {
        self.shims_dir().join(format!("{}.exe", name)).exists()
    }

    /// Register a shim that runs `target args...`.
    ///
    /// Callers must have checked the name with [`Self::exists`] first.
    fn add(&mut self, name: &str, target: &Path, args: &[String]) -> Result<()>;
}

/// Default shim directory: `$SCOOP/shims`, else `~/scoop/shims`.
pub fn scoop_shims_dir() -> PathBuf {
    match std::env::var_os("SCOOP") {
        Some(root) if !root.is_empty() => PathBuf::from(root).join("shims"),
        _ => dirs::home_dir()
            .unwrap_or_else(|| PathBuf::from("~"))
            .join("scoop")
            .join("shims"),
    }
}

/// Registry backed by the `scoop` command line.
#[derive(Debug, Clone)]
pub struct ScoopRegistry {
    shims_dir: PathBuf,
    command: String,
}

impl ScoopRegistry {
    /// Default registry command.
    pub const DEFAULT_COMMAND: &'static str = "scoop";

    /// Create a registry rooted at `shims_dir` that runs `command shim add`.
    pub fn new(shims_dir: impl Into<PathBuf>, command: impl Into<String>) -> Self {
        Self {
            shims_dir: shims_dir.into(),
            command: command.into(),
        }
    }

    /// The command used for registration.
    pub fn command(&self) -> &str {
        &self.command
    }

    /// Resolve the registry command to an executable path.
    ///
    /// On Windows `scoop` is a `.cmd`/`.ps1` wrapper that `Command::new`
    /// cannot find by bare name, so PATH is searched with `PATHEXT`.
    fn program(&self) -> PathBuf {
        which::which(&self.command).unwrap_or_else(|_| PathBuf::from(&self.command))
    }
}

impl Default for ScoopRegistry {
    fn default() -> Self {
        Self::new(scoop_shims_dir(), Self::DEFAULT_COMMAND)
    }
}

impl ShimRegistry for ScoopRegistry {
    fn shims_dir(&self) -> &Path {
        &self.shims_dir
    }

    fn add(&mut self, name: &str, target: &Path, args: &[String]) -> Result<()> {
        let mut argv: Vec<String> = vec![
            "shim".to_string(),
            "add".to_string(),
            name.to_string(),
            target.to_string_lossy().to_string(),
        ];
        argv.extend(args.iter().cloned());

        let result =
            process::run(self.program(), &argv).map_err(|e| ScanError::RegistryFailed {
                shim: name.to_string(),
                message: e.to_string(),
            })?;

        if result.success {
            tracing::info!("Registered shim '{}' -> {}", name, target.display());
            Ok(())
        } else {
            Err(ScanError::RegistryFailed {
                shim: name.to_string(),
                message: result.failure_message(),
            })
        }
    }
}

/// A registration seen by [`RecordingRegistry`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AddCall {
    pub name: String,
    pub target: PathBuf,
    pub args: Vec<String>,
}

/// In-memory registry.
///
/// Treats a name as taken when it was pre-seeded, already added, or has an
/// `.exe` in the shim directory. Individual names can be made to fail.
#[derive(Debug, Default)]
pub struct RecordingRegistry {
    shims_dir: PathBuf,
    existing: HashSet<String>,
    failing: HashSet<String>,
    calls: Vec<AddCall>,
}

impl RecordingRegistry {
    /// Create an empty registry rooted at `shims_dir`.
    pub fn new(shims_dir: impl Into<PathBuf>) -> Self {
        Self {
            shims_dir: shims_dir.into(),
            ..Default::default()
        }
    }

    /// Pretend `name` is already registered.
    pub fn with_existing(mut self, name: &str) -> Self {
        self.existing.insert(name.to_string());
        self
    }

    /// Make `add` fail for `name`.
    pub fn fail_on(mut self, name: &str) -> Self {
        self.failing.insert(name.to_string());
        self
    }

    /// Every successful `add` call, in order.
    pub fn calls(&self) -> &[AddCall] {
        &self.calls
    }

    /// Names registered so far, in order.
    pub fn added_names(&self) -> Vec<&str> {
        self.calls.iter().map(|c| c.name.as_str()).collect()
    }
}

impl ShimRegistry for RecordingRegistry {
    fn shims_dir(&self) -> &Path {
        &self.shims_dir
    }

    fn exists(&self, name: &str) -> bool {
        self.existing.contains(name)
            || self.calls.iter().any(|c| c.name == name)
            || self.shims_dir.join(format!("{}.exe", name)).exists()
    }

    fn add(&mut self, name: &str, target: &Path, args: &[String]) -> Result<()> {
        if self.failing.contains(name) || self.exists(name) {
            return Err(ScanError::RegistryFailed {
                shim: name.to_string(),
                message: "shim already exists or registry refused it".to_string(),
            });
        }
        self.calls.push(AddCall {
            name: name.to_string(),
            target: target.to_path_buf(),
            args: args.to_vec(),
        });
        Ok(())
    }
}
