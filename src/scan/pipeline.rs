//! One complete run: reset the artifacts, then walk and emit.

use crate::audit::AuditSink;
use crate::config::ScanSettings;
use crate::error::{Result, ScanError};
use crate::interpreters::Capabilities;
use crate::shims::{EmitOptions, ShimEmitter, ShimRegistry};

use super::walker::{walk, ScanEvent, ScanSummary};

/// Run a scan with resolved settings.
///
/// A missing root fails before any artifact is touched. Otherwise the
/// artifacts in `settings.output` are reset and rewritten as shims are
/// emitted. A relative root is made absolute against the current
/// directory so every shim targets a full path.
pub fn run_scan<R, F>(
    settings: &ScanSettings,
    capabilities: &Capabilities,
    registry: &mut R,
    on_event: F,
) -> Result<ScanSummary>
where
    R: ShimRegistry + ?Sized,
    F: FnMut(ScanEvent<'_>),
{
    if !settings.root.is_dir() {
        return Err(ScanError::RootNotFound {
            path: settings.root.clone(),
        });
    }

    let root = std::path::absolute(&settings.root)?;

    let mut sink = AuditSink::new(&settings.output);
    sink.reset()?;
    tracing::debug!("Writing artifacts to {}", settings.output.display());

    let options = EmitOptions {
        include_version: settings.include_version,
        dry_run: settings.dry_run,
    };
    let mut emitter = ShimEmitter::new(capabilities, registry, &mut sink, options);
    walk(&root, &settings.families, &mut emitter, on_event)
}
