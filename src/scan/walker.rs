//! Family → app → script enumeration.

use serde::Serialize;
use std::fs;
use std::path::{Path, PathBuf};

use crate::error::{Result, ScanError};
use crate::shims::{EmitOutcome, ScriptOwner, ShimEmitter, ShimRecord, ShimRegistry};
use crate::version::resolve_version;

use super::script::{collect_root_scripts, collect_tool_scripts, ScriptFile};

/// Name of the active-version entry inside an app directory.
pub const CURRENT_DIR: &str = "current";

/// Name of the plugin directory inside `current`.
pub const PLUGINS_DIR: &str = "plugins";

/// Progress reported while walking.
#[derive(Debug)]
pub enum ScanEvent<'e> {
    /// A family was left out by the family filter.
    FamilySkipped { family: &'e str },
    /// An app has no `current` entry.
    AppSkipped { family: &'e str, app: &'e str },
    /// A shim was registered or planned.
    Emitted(&'e ShimRecord),
    /// No interpreter can run a script.
    ScriptSkipped { script: &'e Path, reason: &'e str },
    /// Registering a shim failed; the walk continues.
    Failed { script: &'e Path, error: &'e ScanError },
}

/// Totals for one walk.
#[derive(Debug, Default, Serialize)]
pub struct ScanSummary {
    /// Families scanned (after filtering).
    pub families: usize,
    /// Apps with a `current` entry.
    pub apps: usize,
    /// Records in classification order.
    pub records: Vec<ShimRecord>,
    /// Scripts skipped for lack of an interpreter.
    pub skipped: usize,
    /// Scripts whose registration failed.
    pub failed: usize,
}

impl ScanSummary {
    /// Whether every attempted registration succeeded.
    pub fn is_clean(&self) -> bool {
        self.failed == 0
    }
}

/// Walk `root` and emit a shim for every script found.
///
/// `families` restricts the walk to exactly-named family directories; an
/// empty slice means all families. Fails only when `root` is not a
/// directory or cannot be listed, or when the audit files cannot be written.
pub fn walk<R, F>(
    root: &Path,
    families: &[String],
    emitter: &mut ShimEmitter<'_, R>,
    mut on_event: F,
) -> Result<ScanSummary>
where
    R: ShimRegistry + ?Sized,
    F: FnMut(ScanEvent<'_>),
{
    if !root.is_dir() {
        return Err(ScanError::RootNotFound {
            path: root.to_path_buf(),
        });
    }

    let mut summary = ScanSummary::default();

    for (family, family_path) in subdirectories(root)? {
        if !families.is_empty() && !families.iter().any(|f| f == &family) {
            tracing::debug!("Family '{}' not selected", family);
            on_event(ScanEvent::FamilySkipped { family: &family });
            continue;
        }
        summary.families += 1;

        for (app, app_path) in subdirectories(&family_path).unwrap_or_default() {
            let current = app_path.join(CURRENT_DIR);
            if !current.is_dir() {
                tracing::debug!("{}/{} has no '{}'", family, app, CURRENT_DIR);
                on_event(ScanEvent::AppSkipped {
                    family: &family,
                    app: &app,
                });
                continue;
            }
            summary.apps += 1;

            let version = resolve_version(&current);
            tracing::debug!("{}/{} version '{}'", family, app, version);

            let owner = ScriptOwner {
                family: &family,
                app: &app,
                tool: None,
                version: &version,
            };
            let scripts = collect_root_scripts(&current);
            emit_batch(&scripts, &owner, emitter, &mut on_event, &mut summary)?;

            let plugins = current.join(PLUGINS_DIR);
            if !plugins.is_dir() {
                continue;
            }
            for (tool, tool_path) in subdirectories(&plugins).unwrap_or_default() {
                let owner = ScriptOwner {
                    tool: Some(&tool),
                    ..owner
                };
                let scripts = collect_tool_scripts(&tool_path);
                emit_batch(&scripts, &owner, emitter, &mut on_event, &mut summary)?;
            }
        }
    }

    tracing::info!(
        "Scanned {} families, {} apps: {} shims, {} skipped, {} failed",
        summary.families,
        summary.apps,
        summary.records.len(),
        summary.skipped,
        summary.failed
    );
    Ok(summary)
}

fn emit_batch<R, F>(
    scripts: &[ScriptFile],
    owner: &ScriptOwner<'_>,
    emitter: &mut ShimEmitter<'_, R>,
    on_event: &mut F,
    summary: &mut ScanSummary,
) -> Result<()>
where
    R: ShimRegistry + ?Sized,
    F: FnMut(ScanEvent<'_>),
{
    for script in scripts {
        match emitter.emit(script, owner) {
            Ok(EmitOutcome::Emitted(record)) => {
                on_event(ScanEvent::Emitted(&record));
                summary.records.push(record);
            }
            Ok(EmitOutcome::Skipped { script, reason }) => {
                summary.skipped += 1;
                on_event(ScanEvent::ScriptSkipped {
                    script: &script,
                    reason: &reason,
                });
            }
            Err(error @ ScanError::RegistryFailed { .. }) => {
                tracing::error!("{}", error);
                summary.failed += 1;
                on_event(ScanEvent::Failed {
                    script: &script.path,
                    error: &error,
                });
            }
            Err(e) => return Err(e),
        }
    }
    Ok(())
}

/// Immediate subdirectories of `dir` as `(name, path)`, in directory order.
fn subdirectories(dir: &Path) -> Result<Vec<(String, PathBuf)>> {
    let entries = fs::read_dir(dir).inspect_err(|e| {
        tracing::warn!("Cannot read {}: {}", dir.display(), e);
    })?;
    Ok(entries
        .filter_map(|entry| entry.ok())
        .map(|entry| entry.path())
        .filter(|path| path.is_dir())
        .filter_map(|path| {
            let name = path.file_name()?.to_string_lossy().to_string();
            Some((name, path))
        })
        .collect())
}
