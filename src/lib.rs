//! bucket-scan - Register package-manager shims for installed app scripts.
//!
//! bucket-scan walks a tree of installed application families, finds the
//! scripts each app ships, and registers a uniquely named shim for each one
//! with the package manager. Every run leaves two artifacts behind: a list of
//! installed shim names and a CSV map describing every shim created or
//! planned.
//!
//! # Modules
//!
//! - [`audit`] - `shims.txt` and `shims-map.csv` writers
//! - [`cli`] - Command-line interface and argument parsing
//! - [`config`] - Configuration loading, layering, and validation
//! - [`error`] - Error types and result aliases
//! - [`interpreters`] - Interpreter and shell backend discovery
//! - [`naming`] - Shim name derivation and collision handling
//! - [`process`] - External command execution
//! - [`scan`] - Tree walking and the scan pipeline
//! - [`shims`] - Script classification, invocations, and the shim registry
//! - [`ui`] - Terminal output
//! - [`version`] - Version resolution from `current` links
//!
//! # Example
//!
//! ```
//! use bucket_scan::naming::{base_name, ShimNamer};
//!
//! let base = base_name("py", "tool1", None, "run", "2.0.0", true);
//! assert_eq!(base, "py-tool1-run-v2.0.0");
//!
//! let mut namer = ShimNamer::new();
//! let first = namer.next_name("ps-app-start", |_| false);
//! namer.reserve(&first);
//! assert_eq!(first, "ps-app-start");
//! assert_eq!(namer.next_name("ps-app-start", |_| false), "ps-app-start-2");
//! ```
//!
//! For complete runs against a directory tree, see the integration tests.

pub mod audit;
pub mod cli;
pub mod config;
pub mod error;
pub mod interpreters;
pub mod naming;
pub mod process;
pub mod scan;
pub mod shims;
pub mod ui;
pub mod version;

pub use error::{Result, ScanError};
