//! The per-run capability snapshot.

use serde::Serialize;
use std::path::PathBuf;

use super::locator::{SystemLocator, ToolLocator};

/// Where Git for Windows installs its bash.
pub const GIT_BASH_PATH: &str = r"C:\Program Files\Git\bin\bash.exe";

/// Environment variable overriding [`GIT_BASH_PATH`].
pub const GIT_BASH_ENV: &str = "GIT_BASH";

/// A discovered interpreter or shell backend.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Tool {
    /// Short label recorded in the shim map (`pwsh`, `py`, `bash`, ...).
    pub label: &'static str,
    /// Absolute path to the executable.
    pub path: PathBuf,
}

impl Tool {
    pub fn new(label: &'static str, path: impl Into<PathBuf>) -> Self {
        Self {
            label,
            path: path.into(),
        }
    }
}

/// Probe order for the PowerShell host: modern first, then legacy.
const POWERSHELL_CANDIDATES: &[(&str, &str)] = &[("pwsh", "pwsh"), ("powershell", "powershell")];

/// Probe order for Python: the numbered launcher, then plain interpreters.
const PYTHON_CANDIDATES: &[(&str, &str)] =
    &[("py", "py"), ("python", "python"), ("python3", "python")];

/// Interpreters available on this host, resolved once per run.
///
/// Read-only after construction. The emitter receives it by reference and
/// never probes the host again.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct Capabilities {
    /// PowerShell-compatible host.
    pub powershell: Option<Tool>,
    /// Python launcher (`py`) or plain interpreter.
    pub python: Option<Tool>,
    /// Native POSIX shell (Git bash at its fixed location).
    pub bash: Option<Tool>,
    /// WSL, the secondary shell backend.
    pub wsl: Option<Tool>,
}

impl Capabilities {
    /// Probe the real host.
    pub fn discover() -> Self {
        Self::discover_with(&SystemLocator)
    }

    /// Probe through a custom locator.
    pub fn discover_with<L: ToolLocator + ?Sized>(locator: &L) -> Self {
        let powershell = first_on_path(locator, POWERSHELL_CANDIDATES);
        let python = first_on_path(locator, PYTHON_CANDIDATES);

        let bash_path = locator
            .env(GIT_BASH_ENV)
            .map(PathBuf::from)
            .unwrap_or_else(|| PathBuf::from(GIT_BASH_PATH));
        let bash = if locator.file_exists(&bash_path) {
            Some(Tool::new("bash", bash_path))
        } else {
            None
        };

        let wsl = locator.find("wsl").map(|path| Tool::new("wsl", path));

        let caps = Self {
            powershell,
            python,
            bash,
            wsl,
        };
        tracing::debug!("Interpreter capabilities: {:?}", caps);
        caps
    }

    /// Whether any backend can run `.sh` scripts.
    pub fn has_posix_shell(&self) -> bool {
        self.bash.is_some() || self.wsl.is_some()
    }

    /// Rows of `(role, label, path)` for display.
    pub fn describe(&self) -> Vec<(&'static str, String, String)> {
        let row = |role: &'static str, tool: &Option<Tool>| match tool {
            Some(t) => (role, t.label.to_string(), t.path.display().to_string()),
            None => (role, "-".to_string(), "not found".to_string()),
        };
        vec![
            row("powershell", &self.powershell),
            row("python", &self.python),
            row("posix shell", &self.bash),
            row("wsl", &self.wsl),
        ]
    }
}

fn first_on_path<L: ToolLocator + ?Sized>(
    locator: &L,
    candidates: &[(&str, &'static str)],
) -> Option<Tool> {
    candidates
        .iter()
        .find_map(|&(command, label)| locator.find(command).map(|path| Tool::new(label, path)))
}
