//! Turning one script into one shim.
//!
//! For every script the emitter:
//!
//! 1. picks an [`Invocation`] from the capability snapshot (or skips),
//! 2. picks the first free name,
//! 3. registers the shim unless this is a dry run,
//! 4. reserves the name and hands the [`ShimRecord`] to the [`AuditSink`].
//!
//! A failed registration stops at step 3: the name stays free, nothing is
//! recorded and the error is returned to the caller, which decides whether
//! to keep going.

use std::path::PathBuf;

use crate::audit::AuditSink;
use crate::error::Result;
use crate::interpreters::Capabilities;
use crate::naming::{base_name, ShimNamer};
use crate::scan::ScriptFile;

use super::invocation::Invocation;
use super::record::{ShimRecord, SHIM_TYPE};
use super::registry::ShimRegistry;

/// Switches that shape every shim of a run.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct EmitOptions {
    /// Append `-v<version>` to shim names.
    pub include_version: bool,
    /// Plan only: never touch the registry or the state list.
    pub dry_run: bool,
}

/// Where a script lives in the scanned tree.
#[derive(Debug, Clone, Copy)]
pub struct ScriptOwner<'a> {
    pub family: &'a str,
    pub app: &'a str,
    /// Plugin name for scripts under `current/plugins/<tool>`.
    pub tool: Option<&'a str>,
    pub version: &'a str,
}

/// What happened to one script.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EmitOutcome {
    /// A shim was registered (or planned) and recorded.
    Emitted(ShimRecord),
    /// The host cannot run this script; nothing was recorded.
    Skipped { script: PathBuf, reason: String },
}

/// Classifies scripts and emits shims for them.
pub struct ShimEmitter<'a, R: ShimRegistry + ?Sized> {
    capabilities: &'a Capabilities,
    registry: &'a mut R,
    sink: &'a mut AuditSink,
    namer: ShimNamer,
    options: EmitOptions,
}

impl<'a, R: ShimRegistry + ?Sized> ShimEmitter<'a, R> {
    /// Create an emitter for one run.
    pub fn new(
        capabilities: &'a Capabilities,
        registry: &'a mut R,
        sink: &'a mut AuditSink,
        options: EmitOptions,
    ) -> Self {
        Self {
            capabilities,
            registry,
            sink,
            namer: ShimNamer::new(),
            options,
        }
    }

    /// Emit a shim for `script`.
    ///
    /// Returns [`EmitOutcome::Skipped`] when no interpreter can run the
    /// script, and an error when registration or recording fails.
    pub fn emit(&mut self, script: &ScriptFile, owner: &ScriptOwner<'_>) -> Result<EmitOutcome> {
        let Some(invocation) =
            Invocation::plan(script.kind, &script.path, &script.leaf, self.capabilities)
        else {
            let reason = script.kind.missing_backend().to_string();
            tracing::warn!("Skipping {}: {}", script.path.display(), reason);
            return Ok(EmitOutcome::Skipped {
                script: script.path.clone(),
                reason,
            });
        };

        let base = base_name(
            owner.family,
            owner.app,
            owner.tool,
            &script.leaf,
            owner.version,
            self.options.include_version,
        );
        let registry = &*self.registry;
        let shim = self.namer.next_name(&base, |name| registry.exists(name));

        tracing::debug!(
            "{} -> {} via {} ({} {:?})",
            script.path.display(),
            shim,
            invocation.interpreter,
            invocation.target.display(),
            invocation.args
        );

        if !self.options.dry_run {
            self.registry
                .add(&shim, &invocation.target, &invocation.args)?;
        }
        self.namer.reserve(&shim);

        let record = ShimRecord {
            shim,
            kind: SHIM_TYPE,
            family: owner.family.to_string(),
            app: owner.app.to_string(),
            tool: owner.tool.map(String::from),
            leaf: script.leaf.clone(),
            ext: script.ext.clone(),
            version: owner.version.to_string(),
            target: script.path.clone(),
            invocation,
            dry_run: self.options.dry_run,
        };

        self.sink.record(&record)?;
        Ok(EmitOutcome::Emitted(record))
    }
}
