//! Command-line interface for bucket-scan.
//!
//! - [`args`] - Argument definitions using clap derive macros
//! - [`commands`] - Command implementations

pub mod args;
pub mod commands;

pub use args::{Cli, Commands, CompletionsArgs, InterpretersArgs, ScanArgs};
pub use commands::{Command, CommandDispatcher, CommandResult};
