//! Validation of resolved settings.

use crate::config::schema::ScanSettings;
use crate::error::{Result, ScanError};

/// Check settings before a scan starts.
///
/// The root must be an existing directory. The output directory need not
/// exist yet, but must not be a file.
pub fn validate(settings: &ScanSettings) -> Result<()> {
    if !settings.root.is_dir() {
        return Err(ScanError::RootNotFound {
            path: settings.root.clone(),
        });
    }

    if settings.output.is_file() {
        return Err(ScanError::ConfigValidationError {
            message: format!(
                "Output path '{}' is a file, expected a directory",
                settings.output.display()
            ),
        });
    }

    if settings.registry_command.trim().is_empty() {
        return Err(ScanError::ConfigValidationError {
            message: "Registry command must not be empty".to_string(),
        });
    }

    Ok(())
}
