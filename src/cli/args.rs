//! CLI argument definitions.
//!
//! This module defines all CLI arguments using clap's derive macros.
//! The main entry point is the [`Cli`] struct.

use clap::{Parser, Subcommand};
use clap_complete::Shell;
use std::path::PathBuf;

use crate::config::ScanConfig;

/// bucket-scan - Register shims for scripts in installed app families.
#[derive(Debug, Parser)]
#[command(name = "bucket-scan")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Path to config file (overrides ./bucket-scan.yml)
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,

    /// Show one line per shim
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Minimal output
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// Disable colored output
    #[arg(long, global = true)]
    pub no_color: bool,

    /// Enable debug logging
    #[arg(long, global = true)]
    pub debug: bool,

    /// Scan options when no subcommand is given
    #[command(flatten)]
    pub scan: ScanArgs,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

/// Available subcommands.
#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Scan the apps tree and register shims (default if no command specified)
    Scan(ScanArgs),

    /// Show which interpreters and shell backends were found
    Interpreters(InterpretersArgs),

    /// Generate shell completions
    Completions(CompletionsArgs),
}

/// Arguments for the `scan` command.
#[derive(Debug, Clone, Default, clap::Args)]
pub struct ScanArgs {
    /// Directory holding the app families
    #[arg(long, value_name = "DIR", env = "BUCKET_SCAN_ROOT")]
    pub root: Option<PathBuf>,

    /// Directory for shims.txt and shims-map.csv
    #[arg(short, long, value_name = "DIR", env = "BUCKET_SCAN_OUTPUT")]
    pub output: Option<PathBuf>,

    /// Only scan these families (comma-separated, exact match)
    #[arg(
        short,
        long,
        value_name = "NAMES",
        value_delimiter = ',',
        env = "BUCKET_SCAN_FAMILIES"
    )]
    pub families: Vec<String>,

    /// Append -v<version> to shim names
    #[arg(long)]
    pub include_version: bool,

    /// Plan shims without registering them
    #[arg(short = 'n', long)]
    pub dry_run: bool,

    /// Shim directory checked for existing names
    #[arg(long, value_name = "DIR", env = "BUCKET_SCAN_SHIMS_DIR")]
    pub shims_dir: Option<PathBuf>,

    /// Command used to register shims
    #[arg(long, value_name = "CMD")]
    pub registry_command: Option<String>,

    /// Print the summary and records as JSON
    #[arg(long)]
    pub json: bool,
}

impl ScanArgs {
    /// The configuration layer these flags (and their env vars) define.
    ///
    /// Switches only ever turn options on; an absent switch leaves the
    /// lower layers in charge.
    pub fn to_config(&self) -> ScanConfig {
        ScanConfig {
            root: self.root.clone(),
            output: self.output.clone(),
            families: if self.families.is_empty() {
                None
            } else {
                Some(self.families.clone())
            },
            include_version: self.include_version.then_some(true),
            dry_run: self.dry_run.then_some(true),
            shims_dir: self.shims_dir.clone(),
            registry_command: self.registry_command.clone(),
        }
    }

    /// Combine scan options given before the `scan` subcommand with the
    /// ones given after it. Values after the subcommand win; switches set
    /// on either side stay on.
    pub fn overlaid_by(&self, later: &ScanArgs) -> ScanArgs {
        ScanArgs {
            root: later.root.clone().or_else(|| self.root.clone()),
            output: later.output.clone().or_else(|| self.output.clone()),
            families: if later.families.is_empty() {
                self.families.clone()
            } else {
                later.families.clone()
            },
            include_version: self.include_version || later.include_version,
            dry_run: self.dry_run || later.dry_run,
            shims_dir: later.shims_dir.clone().or_else(|| self.shims_dir.clone()),
            registry_command: later
                .registry_command
                .clone()
                .or_else(|| self.registry_command.clone()),
            json: self.json || later.json,
        }
    }
}

/// Arguments for the `interpreters` command.
#[derive(Debug, Clone, Default, clap::Args)]
pub struct InterpretersArgs {
    /// Print the snapshot as JSON
    #[arg(long)]
    pub json: bool,
}

/// Arguments for the `completions` command.
#[derive(Debug, Clone, clap::Args)]
pub struct CompletionsArgs {
    /// Shell to generate completions for
    #[arg(value_enum)]
    pub shell: Shell,
}
