//! Walking the installed-apps tree.
//!
//! The layout is `root/<family>/<app>/current[/plugins/<tool>]`. Scripts
//! directly under `current` belong to the app; scripts anywhere below a
//! plugin directory belong to that tool.

pub mod pipeline;
pub mod script;
pub mod walker;

pub use pipeline::run_scan;
pub use script::{collect_root_scripts, collect_tool_scripts, ScriptFile};
pub use walker::{walk, ScanEvent, ScanSummary, CURRENT_DIR, PLUGINS_DIR};
