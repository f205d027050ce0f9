//! Installed-version resolution.
//!
//! Package managers point an app's `current` entry at the active version
//! directory (`current -> 3.2.1`). The leaf of that link target is the
//! version string. A plain directory, a dangling lookup or any other
//! failure means "unversioned" and yields an empty string.

use std::fs;
use std::path::Path;

/// Resolve the version an app's `current` entry points at.
///
/// Never fails: anything other than a readable link resolves to `""`.
pub fn resolve_version(current: &Path) -> String {
    let metadata = match fs::symlink_metadata(current) {
        Ok(m) => m,
        Err(e) => {
            tracing::debug!("Cannot stat {}: {}", current.display(), e);
            return String::new();
        }
    };

    if !is_link(&metadata) {
        return String::new();
    }

    match fs::read_link(current) {
        Ok(target) => target
            .file_name()
            .map(|name| name.to_string_lossy().to_string())
            .unwrap_or_default(),
        Err(e) => {
            tracing::debug!("Cannot read link {}: {}", current.display(), e);
            String::new()
        }
    }
}

#[cfg(windows)]
fn is_link(metadata: &fs::Metadata) -> bool {
    use std::os::windows::fs::MetadataExt;
    const FILE_ATTRIBUTE_REPARSE_POINT: u32 = 0x400;
    // Junctions are reparse points but not symlinks.
    metadata.file_type().is_symlink()
        || metadata.file_attributes() & FILE_ATTRIBUTE_REPARSE_POINT != 0
}

#[cfg(not(windows))]
fn is_link(metadata: &fs::Metadata) -> bool {
    metadata.file_type().is_symlink()
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn missing_current_is_unversioned() {
        let temp = TempDir::new().unwrap();
        assert_eq!(resolve_version(&temp.path().join("current")), "");
    }

    #[test]
    fn plain_directory_is_unversioned() {
        let temp = TempDir::new().unwrap();
        let current = temp.path().join("current");
        fs::create_dir(&current).unwrap();
        assert_eq!(resolve_version(&current), "");
    }

    #[cfg(unix)]
    #[test]
    fn symlink_resolves_to_target_leaf() {
        let temp = TempDir::new().unwrap();
        let version_dir = temp.path().join("3.2.1");
        fs::create_dir(&version_dir).unwrap();
        let current = temp.path().join("current");
        std::os::unix::fs::symlink(&version_dir, &current).unwrap();

        assert_eq!(resolve_version(&current), "3.2.1");
    }

    #[cfg(unix)]
    #[test]
    fn relative_symlink_resolves_to_target_leaf() {
        let temp = TempDir::new().unwrap();
        fs::create_dir(temp.path().join("2.0.0")).unwrap();
        let current = temp.path().join("current");
        std::os::unix::fs::symlink("2.0.0", &current).unwrap();

        assert_eq!(resolve_version(&current), "2.0.0");
    }

    #[cfg(unix)]
    #[test]
    fn dangling_symlink_still_names_version() {
        let temp = TempDir::new().unwrap();
        let current = temp.path().join("current");
        std::os::unix::fs::symlink(temp.path().join("9.9"), &current).unwrap();

        assert_eq!(resolve_version(&current), "9.9");
    }
}
