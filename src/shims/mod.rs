//! Script classification and shim emission.
//!
//! - [`kind`] - the closed set of script kinds, keyed by extension
//! - [`invocation`] - how each kind is launched given the host's interpreters
//! - [`record`] - the audit record produced for every emitted shim
//! - [`registry`] - the package manager's shim registry behind a trait
//! - [`emitter`] - names, registers and records one script at a time

pub mod emitter;
pub mod invocation;
pub mod kind;
pub mod record;
pub mod registry;

pub use emitter::{EmitOptions, EmitOutcome, ScriptOwner, ShimEmitter};
pub use invocation::{to_forward_slashes, to_wsl_path, Invocation, DIRECT};
pub use kind::{ScriptKind, SCRIPT_EXTENSIONS};
pub use record::{ShimRecord, SHIM_TYPE};
pub use registry::{scoop_shims_dir, AddCall, RecordingRegistry, ScoopRegistry, ShimRegistry};
