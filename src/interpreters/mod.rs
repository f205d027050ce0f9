//! Interpreter discovery.
//!
//! Scripts are only as runnable as the host that executes them. This module
//! probes the machine once per run for a PowerShell host, a Python
//! interpreter and the two POSIX shell backends, and freezes the answer in a
//! [`Capabilities`] snapshot that the emitter consults for every script.
//!
//! # Example
//!
//! ```
//! use bucket_scan::interpreters::{Capabilities, FixedLocator};
//!
//! let locator = FixedLocator::new().with_command("py", "C:/Windows/py.exe");
//! let caps = Capabilities::discover_with(&locator);
//! assert_eq!(caps.python.as_ref().map(|t| t.label), Some("py"));
//! assert!(caps.bash.is_none());
//! ```

pub mod capabilities;
pub mod locator;

pub use capabilities::{Capabilities, Tool, GIT_BASH_ENV, GIT_BASH_PATH};
pub use locator::{FixedLocator, SystemLocator, ToolLocator};
