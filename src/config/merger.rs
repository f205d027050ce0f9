//! Layering of configuration sources.
//!
//! # Merge Rules
//!
//! - A key set in the overlay replaces the base value
//! - A key absent from the overlay keeps the base value
//! - Lists (`families`) are replaced entirely, never concatenated

use crate::config::schema::ScanConfig;

/// Overlay `overlay` on `base`; keys present in `overlay` win.
pub fn merge(base: ScanConfig, overlay: ScanConfig) -> ScanConfig {
    ScanConfig {
        root: overlay.root.or(base.root),
        output: overlay.output.or(base.output),
        families: overlay.families.or(base.families),
        include_version: overlay.include_version.or(base.include_version),
        dry_run: overlay.dry_run.or(base.dry_run),
        shims_dir: overlay.shims_dir.or(base.shims_dir),
        registry_command: overlay.registry_command.or(base.registry_command),
    }
}

/// Merge layers in order (later overrides earlier).
pub fn merge_configs<I>(layers: I) -> ScanConfig
where
    I: IntoIterator<Item = ScanConfig>,
{
    layers.into_iter().fold(ScanConfig::default(), merge)
}
