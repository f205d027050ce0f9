//! Configuration file discovery and loading.

use crate::config::schema::ScanConfig;
use crate::error::{Result, ScanError};
use std::fs;
use std::path::{Path, PathBuf};

/// Name of the configuration file looked up in the working directory.
pub const CONFIG_FILE: &str = "bucket-scan.yml";

/// Find `bucket-scan.yml` in `dir`.
pub fn find_config(dir: &Path) -> Option<PathBuf> {
    let path = dir.join(CONFIG_FILE);
    if path.is_file() {
        Some(path)
    } else {
        None
    }
}

/// Load a single config file.
///
/// Relative `root`, `output`, and `shims_dir` values are resolved against
/// the directory containing the file.
///
/// # Errors
///
/// Returns `ConfigNotFound` if the file doesn't exist.
/// Returns `ConfigParseError` if the YAML is invalid or has unknown keys.
pub fn load_config_file(path: &Path) -> Result<ScanConfig> {
    let content = fs::read_to_string(path).map_err(|e| {
        if e.kind() == std::io::ErrorKind::NotFound {
            ScanError::ConfigNotFound {
                path: path.to_path_buf(),
            }
        } else {
            ScanError::Io(e)
        }
    })?;

    let mut config = parse_config(&content, path)?;
    if let Some(base) = path.parent() {
        rebase_paths(&mut config, base);
    }
    Ok(config)
}

/// Parse YAML content into a [`ScanConfig`].
///
/// `source_path` is only used for error reporting. An empty document is
/// an empty layer.
pub fn parse_config(content: &str, source_path: &Path) -> Result<ScanConfig> {
    if content.trim().is_empty() {
        return Ok(ScanConfig::default());
    }
    serde_yaml::from_str(content).map_err(|e| ScanError::ConfigParseError {
        path: source_path.to_path_buf(),
        message: e.to_string(),
    })
}

/// Load the file layer for a run.
///
/// An explicit path must exist. Without one, `bucket-scan.yml` in
/// `working_dir` is used when present, else an empty layer.
pub fn load_config(explicit: Option<&Path>, working_dir: &Path) -> Result<ScanConfig> {
    let path = match explicit {
        Some(path) => path.to_path_buf(),
        None => match find_config(working_dir) {
            Some(path) => path,
            None => {
                tracing::debug!("No {} in {}", CONFIG_FILE, working_dir.display());
                return Ok(ScanConfig::default());
            }
        },
    };

    tracing::debug!("Loading config from {}", path.display());
    load_config_file(&path)
}

fn rebase_paths(config: &mut ScanConfig, base: &Path) {
    for slot in [
        &mut config.root,
        &mut config.output,
        &mut config.shims_dir,
    ] {
        if let Some(path) = slot.as_mut() {
            if path.is_relative() {
                *path = base.join(&*path);
            }
        }
    }
}
