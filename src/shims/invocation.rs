//! How a script gets launched.
//!
//! Each [`ScriptKind`] has a fixed preference list of interpreters. The first
//! one present in the [`Capabilities`] snapshot wins; PowerShell, Python and
//! batch scripts fall back to direct execution, while shell scripts have no
//! fallback and are skipped when no backend exists.

use serde::Serialize;
use std::path::{Path, PathBuf};

use crate::interpreters::Capabilities;

use super::kind::ScriptKind;

/// Interpreter label for scripts the registry runs as-is.
pub const DIRECT: &str = "direct";

/// A concrete command line for a shim: `target args...`.
///
/// The registry appends the caller's arguments at run time, so `args` only
/// holds the fixed prefix.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Invocation {
    /// Label of the interpreter that runs the script.
    pub interpreter: &'static str,
    /// Executable the shim points at.
    pub target: PathBuf,
    /// Fixed arguments placed before the caller's.
    pub args: Vec<String>,
}

impl Invocation {
    /// Run the script itself.
    pub fn direct(script: &Path) -> Self {
        Self {
            interpreter: DIRECT,
            target: script.to_path_buf(),
            args: Vec::new(),
        }
    }

    /// Choose how to launch `script`, or `None` when the host cannot run it.
    ///
    /// `leaf` becomes `$0` for shell-wrapped scripts.
    pub fn plan(kind: ScriptKind, script: &Path, leaf: &str, caps: &Capabilities) -> Option<Self> {
        let script_arg = script.to_string_lossy().to_string();
        match kind {
            ScriptKind::PowerShell => Some(match &caps.powershell {
                Some(host) => Self {
                    interpreter: host.label,
                    target: host.path.clone(),
                    args: vec![
                        "-NoProfile".to_string(),
                        "-ExecutionPolicy".to_string(),
                        "Bypass".to_string(),
                        "-File".to_string(),
                        script_arg,
                    ],
                },
                None => Self::direct(script),
            }),
            ScriptKind::Python => Some(match &caps.python {
                Some(py) if py.label == "py" => Self {
                    interpreter: py.label,
                    target: py.path.clone(),
                    args: vec!["-3".to_string(), script_arg],
                },
                Some(python) => Self {
                    interpreter: python.label,
                    target: python.path.clone(),
                    args: vec![script_arg],
                },
                None => Self::direct(script),
            }),
            ScriptKind::Batch => Some(Self::direct(script)),
            ScriptKind::Shell => {
                if let Some(bash) = &caps.bash {
                    let path = to_forward_slashes(&script_arg);
                    Some(Self {
                        interpreter: bash.label,
                        target: bash.path.clone(),
                        args: vec!["-c".to_string(), wrap_script(&path), leaf.to_string()],
                    })
                } else {
                    caps.wsl.as_ref().map(|wsl| Self {
                        interpreter: wsl.label,
                        target: wsl.path.clone(),
                        args: vec![
                            "-e".to_string(),
                            "bash".to_string(),
                            "-c".to_string(),
                            wrap_script(&to_wsl_path(&script_arg)),
                            leaf.to_string(),
                        ],
                    })
                }
            }
            ScriptKind::Zsh => caps.wsl.as_ref().map(|wsl| Self {
                interpreter: wsl.label,
                target: wsl.path.clone(),
                args: vec![
                    "-e".to_string(),
                    "zsh".to_string(),
                    "-lc".to_string(),
                    wrap_script(&to_wsl_path(&script_arg)),
                    leaf.to_string(),
                ],
            }),
        }
    }
}

/// Replace Windows separators with `/`.
pub fn to_forward_slashes(path: &str) -> String {
    path.replace('\\', "/")
}

/// Translate a drive path (`C:\a\b`) to its WSL mount (`/mnt/c/a/b`).
///
/// Paths without a drive letter only get their separators normalized.
pub fn to_wsl_path(path: &str) -> String {
    let normalized = to_forward_slashes(path);
    let bytes = normalized.as_bytes();
    if bytes.len() >= 2 && bytes[0].is_ascii_alphabetic() && bytes[1] == b':' {
        let drive = (bytes[0] as char).to_ascii_lowercase();
        let rest = &normalized[2..];
        if rest.starts_with('/') {
            format!("/mnt/{}{}", drive, rest)
        } else {
            format!("/mnt/{}/{}", drive, rest)
        }
    } else {
        normalized
    }
}

/// Build the `-c` body: run the script with the caller's arguments.
fn wrap_script(path: &str) -> String {
    format!("'{}' \"$@\"", path.replace('\'', r"'\''"))
}
