//! Configuration loading, layering, and validation.
//!
//! - Schema definitions in [`schema`]
//! - File discovery and loading in [`loader`]
//! - Layer merging in [`merger`]
//! - Validation in [`validator`]
//!
//! # Example
//!
//! ```
//! use bucket_scan::config::{load_config, merge_configs, ScanConfig, ScanSettings};
//! use tempfile::TempDir;
//! use std::fs;
//!
//! let temp = TempDir::new().unwrap();
//! fs::write(temp.path().join("bucket-scan.yml"), "families: [py]\ndry_run: true").unwrap();
//!
//! let file = load_config(None, temp.path()).unwrap();
//! let flags = ScanConfig { dry_run: Some(false), ..Default::default() };
//! let settings = ScanSettings::from_config(&merge_configs([file, flags]));
//!
//! assert_eq!(settings.families, vec!["py".to_string()]);
//! assert!(!settings.dry_run);
//! ```
//!
//! # Layers
//!
//! Later layers win:
//! 1. Built-in defaults
//! 2. `bucket-scan.yml` in the working directory, or `--config <path>`
//! 3. `BUCKET_SCAN_*` environment variables
//! 4. Command-line flags

pub mod loader;
pub mod merger;
pub mod schema;
pub mod validator;

pub use loader::{find_config, load_config, load_config_file, parse_config, CONFIG_FILE};
pub use merger::{merge, merge_configs};
pub use schema::{normalize_families, ScanConfig, ScanSettings};
pub use validator::validate;
