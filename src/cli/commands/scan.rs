//! Scan command implementation.
//!
//! The `bucket-scan scan` command resolves settings, probes interpreters,
//! and registers a shim for every script under the root.

use serde::Serialize;
use std::path::{Path, PathBuf};

use crate::audit::MAP_FILE;
use crate::cli::args::ScanArgs;
use crate::config::{load_config, merge_configs, validate, ScanSettings};
use crate::error::{Result, ScanError};
use crate::interpreters::Capabilities;
use crate::scan::{run_scan, ScanEvent, ScanSummary};
use crate::shims::{ScoopRegistry, ShimRegistry};
use crate::ui::{should_use_colors, ScanTheme, UserInterface};

use super::dispatcher::{Command, CommandResult};

/// The scan command implementation.
pub struct ScanCommand {
    working_dir: PathBuf,
    config_path: Option<PathBuf>,
    args: ScanArgs,
}

/// JSON shape of `scan --json`.
#[derive(Serialize)]
struct ScanReport<'a> {
    settings: &'a ScanSettings,
    summary: &'a ScanSummary,
}

impl ScanCommand {
    /// Create a new scan command.
    pub fn new(working_dir: &Path, config_path: Option<PathBuf>, args: ScanArgs) -> Self {
        Self {
            working_dir: working_dir.to_path_buf(),
            config_path,
            args,
        }
    }

    /// Resolve settings from the config file and flags.
    pub fn settings(&self) -> Result<ScanSettings> {
        let file = load_config(self.config_path.as_deref(), &self.working_dir)?;
        let merged = merge_configs([file, self.args.to_config()]);
        let settings = ScanSettings::from_config(&merged);
        tracing::debug!("Resolved settings: {:?}", settings);
        Ok(settings)
    }

    /// Run the scan against explicit capabilities and registry.
    pub fn run_with<R: ShimRegistry + ?Sized>(
        &self,
        settings: &ScanSettings,
        capabilities: &Capabilities,
        registry: &mut R,
        ui: &mut dyn UserInterface,
    ) -> Result<CommandResult> {
        let json = self.args.json;
        let details = ui.output_mode().shows_details() && !json;
        let theme = if should_use_colors() {
            ScanTheme::new()
        } else {
            ScanTheme::plain()
        };

        if !json {
            ui.show_header(&format!("Scanning {}", settings.root.display()));
            if settings.dry_run {
                ui.show_hint("Dry run: shims are planned, not registered");
            }
        }

        let outcome = run_scan(settings, capabilities, registry, |event| match event {
            ScanEvent::Emitted(record) if details => {
                ui.message(&theme.format_shim(
                    &record.shim,
                    record.interpreter(),
                    &record.target.display().to_string(),
                ));
            }
            ScanEvent::ScriptSkipped { script, reason } => {
                ui.warning(&format!("Skipped {}: {}", script.display(), reason));
            }
            ScanEvent::Failed { error, .. } => ui.error(&error.to_string()),
            _ => {}
        });

        let summary = match outcome {
            Ok(summary) => summary,
            Err(e @ ScanError::RootNotFound { .. }) => {
                ui.error(&e.to_string());
                return Ok(CommandResult::failure(2));
            }
            Err(e) => return Err(e),
        };

        if json {
            let report = ScanReport {
                settings,
                summary: &summary,
            };
            let output = serde_json::to_string_pretty(&report)
                .map_err(|e| ScanError::Other(e.into()))?;
            ui.message(&output);
        } else {
            self.show_summary(settings, &summary, ui);
        }

        if summary.is_clean() {
            Ok(CommandResult::success())
        } else {
            Ok(CommandResult::failure(1))
        }
    }

    fn show_summary(
        &self,
        settings: &ScanSettings,
        summary: &ScanSummary,
        ui: &mut dyn UserInterface,
    ) {
        let verb = if settings.dry_run { "planned" } else { "created" };
        let line = format!(
            "{} {}, {} skipped, {} failed",
            summary.records.len(),
            verb,
            summary.skipped,
            summary.failed
        );
        if summary.is_clean() {
            ui.success(&line);
        } else {
            ui.error(&line);
        }
        ui.show_hint(&format!(
            "Shim map written to {}",
            settings.output.join(MAP_FILE).display()
        ));
    }
}

impl Command for ScanCommand {
    fn execute(&self, ui: &mut dyn UserInterface) -> Result<CommandResult> {
        let settings = match self.settings().and_then(|s| validate(&s).map(|_| s)) {
            Ok(settings) => settings,
            Err(
                e @ (ScanError::RootNotFound { .. }
                | ScanError::ConfigNotFound { .. }
                | ScanError::ConfigParseError { .. }
                | ScanError::ConfigValidationError { .. }),
            ) => {
                ui.error(&e.to_string());
                return Ok(CommandResult::failure(2));
            }
            Err(e) => return Err(e),
        };

        let capabilities = Capabilities::discover();
        let mut registry = ScoopRegistry::new(&settings.shims_dir, &settings.registry_command);
        self.run_with(&settings, &capabilities, &mut registry, ui)
    }
}
