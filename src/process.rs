//! Synchronous external command execution.
//!
//! The shim registry is driven through its own CLI. Calls block until the
//! child exits; there is no timeout and no cancellation. Both output
//! streams are always captured so failures can be explained.

use crate::error::{Result, ScanError};
use std::ffi::OsStr;
use std::process::{Command, Stdio};

/// Result of executing an external command.
#[derive(Debug, Clone)]
pub struct CommandResult {
    /// Exit code (None if killed by signal).
    pub exit_code: Option<i32>,

    /// Standard output.
    pub stdout: String,

    /// Standard error.
    pub stderr: String,

    /// Whether command succeeded (exit code 0).
    pub success: bool,
}

impl CommandResult {
    /// Create a success result.
    pub fn success(stdout: String, stderr: String) -> Self {
        Self {
            exit_code: Some(0),
            stdout,
            stderr,
            success: true,
        }
    }

    /// Create a failure result.
    pub fn failure(exit_code: Option<i32>, stdout: String, stderr: String) -> Self {
        Self {
            exit_code,
            stdout,
            stderr,
            success: false,
        }
    }

    /// Best available one-line explanation of a failure.
    pub fn failure_message(&self) -> String {
        let text = if self.stderr.trim().is_empty() {
            self.stdout.trim()
        } else {
            self.stderr.trim()
        };
        match (text.lines().last(), self.exit_code) {
            (Some(line), _) => line.to_string(),
            (None, Some(code)) => format!("exited with code {}", code),
            (None, None) => "terminated by signal".to_string(),
        }
    }
}

/// Render a program and its arguments for logs and error messages.
pub fn display_command<S: AsRef<OsStr>>(program: impl AsRef<OsStr>, args: &[S]) -> String {
    let mut rendered = program.as_ref().to_string_lossy().to_string();
    for arg in args {
        let arg = arg.as_ref().to_string_lossy();
        rendered.push(' ');
        if arg.is_empty() || arg.contains(char::is_whitespace) {
            rendered.push('"');
            rendered.push_str(&arg.replace('"', "\\\""));
            rendered.push('"');
        } else {
            rendered.push_str(&arg);
        }
    }
    rendered
}

/// Run `program` with `args`, capture its output and wait for it to exit.
///
/// A spawn failure (program missing, permission denied) is an error; a
/// non-zero exit is reported through [`CommandResult::success`].
pub fn run<S: AsRef<OsStr>>(program: impl AsRef<OsStr>, args: &[S]) -> Result<CommandResult> {
    let rendered = display_command(&program, args);
    tracing::debug!("Running: {}", rendered);

    let output = Command::new(program)
        .args(args)
        .stdin(Stdio::null())
        .stdout(Stdio::piped())
        .stderr(Stdio::piped())
        .output()
        .map_err(|source| {
            tracing::debug!("Failed to spawn '{}': {}", rendered, source);
            ScanError::CommandSpawnFailed {
                command: rendered.clone(),
                source,
            }
        })?;

    let stdout = String::from_utf8_lossy(&output.stdout).to_string();
    let stderr = String::from_utf8_lossy(&output.stderr).to_string();

    if output.status.success() {
        Ok(CommandResult::success(stdout, stderr))
    } else {
        tracing::debug!("'{}' exited with {:?}", rendered, output.status.code());
        Ok(CommandResult::failure(output.status.code(), stdout, stderr))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_command_quotes_whitespace() {
        let rendered = display_command(
            "scoop",
            &["shim", "add", "ps-app-start", "C:/Program Files/app/start.ps1"],
        );
        assert_eq!(
            rendered,
            "scoop shim add ps-app-start \"C:/Program Files/app/start.ps1\""
        );
    }

    #[test]
    fn display_command_quotes_empty_args() {
        let rendered = display_command("tool", &[""]);
        assert_eq!(rendered, "tool \"\"");
    }

    #[test]
    fn failure_message_prefers_last_stderr_line() {
        let result = CommandResult::failure(
            Some(1),
            "some stdout".into(),
            "first\nshim already exists".into(),
        );
        assert_eq!(result.failure_message(), "shim already exists");
    }

    #[test]
    fn failure_message_falls_back_to_exit_code() {
        let result = CommandResult::failure(Some(3), String::new(), String::new());
        assert_eq!(result.failure_message(), "exited with code 3");
    }

    #[test]
    fn run_missing_program_keeps_the_io_error() {
        let result = run("bucket-scan-definitely-not-a-real-program", &["--version"]);
        match result {
            Err(ScanError::CommandSpawnFailed { command, source }) => {
                assert!(command.starts_with("bucket-scan-definitely-not-a-real-program"));
                assert_eq!(source.kind(), std::io::ErrorKind::NotFound);
            }
            other => panic!("Expected CommandSpawnFailed, got {:?}", other),
        }
    }

    #[test]
    fn run_missing_program_message_explains_cause() {
        let err = run("bucket-scan-definitely-not-a-real-program", &["x"]).unwrap_err();
        let msg = err.to_string();
        assert!(msg.contains("Failed to run"));
        assert!(!msg.contains("None"));
    }

    #[cfg(unix)]
    #[test]
    fn run_successful_command() {
        let result = run("sh", &["-c", "echo hello"]).unwrap();
        assert!(result.success);
        assert_eq!(result.exit_code, Some(0));
        assert!(result.stdout.contains("hello"));
    }

    #[cfg(unix)]
    #[test]
    fn run_failing_command() {
        let result = run("sh", &["-c", "echo nope >&2; exit 4"]).unwrap();
        assert!(!result.success);
        assert_eq!(result.exit_code, Some(4));
        assert_eq!(result.failure_message(), "nope");
    }
}
