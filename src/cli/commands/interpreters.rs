//! Interpreters command implementation.
//!
//! The `bucket-scan interpreters` command prints the capability snapshot a
//! scan would use.

use crate::cli::args::InterpretersArgs;
use crate::error::{Result, ScanError};
use crate::interpreters::Capabilities;
use crate::ui::{Table, UserInterface};

use super::dispatcher::{Command, CommandResult};

/// The interpreters command implementation.
pub struct InterpretersCommand {
    args: InterpretersArgs,
}

impl InterpretersCommand {
    /// Create a new interpreters command.
    pub fn new(args: InterpretersArgs) -> Self {
        Self { args }
    }

    /// Report on an already probed snapshot.
    pub fn show(&self, capabilities: &Capabilities, ui: &mut dyn UserInterface) -> Result<()> {
        if self.args.json {
            let json = serde_json::to_string_pretty(capabilities)
                .map_err(|e| ScanError::Other(e.into()))?;
            ui.message(&json);
            return Ok(());
        }

        let mut table = Table::new(&["Role", "Label", "Path"]);
        for (role, label, path) in capabilities.describe() {
            table.add_row(&[role, label.as_str(), path.as_str()]);
        }
        ui.message(&table.render());

        if !capabilities.has_posix_shell() {
            ui.show_hint(".sh scripts will be skipped: install Git for Windows or WSL");
        }
        Ok(())
    }
}

impl Command for InterpretersCommand {
    fn execute(&self, ui: &mut dyn UserInterface) -> Result<CommandResult> {
        let capabilities = Capabilities::discover();
        self.show(&capabilities, ui)?;
        Ok(CommandResult::success())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::interpreters::Tool;
    use crate::ui::MockUI;

    #[test]
    fn table_lists_every_role() {
        let caps = Capabilities {
            powershell: Some(Tool::new("pwsh", "/opt/pwsh")),
            ..Default::default()
        };
        let mut ui = MockUI::new();
        InterpretersCommand::new(InterpretersArgs::default())
            .show(&caps, &mut ui)
            .unwrap();

        let table = &ui.messages()[0];
        assert!(table.contains("pwsh"));
        assert!(table.contains("/opt/pwsh"));
        assert!(table.contains("not found"));
        assert!(ui.hints().iter().any(|h| h.contains(".sh")));
    }

    #[test]
    fn no_hint_with_posix_shell() {
        let caps = Capabilities {
            wsl: Some(Tool::new("wsl", "/win/wsl.exe")),
            ..Default::default()
        };
        let mut ui = MockUI::new();
        InterpretersCommand::new(InterpretersArgs::default())
            .show(&caps, &mut ui)
            .unwrap();
        assert!(ui.hints().is_empty());
    }

    #[test]
    fn json_output() {
        let caps = Capabilities {
            python: Some(Tool::new("python", "/usr/bin/python3")),
            ..Default::default()
        };
        let mut ui = MockUI::new();
        InterpretersCommand::new(InterpretersArgs { json: true })
            .show(&caps, &mut ui)
            .unwrap();

        let value: serde_json::Value = serde_json::from_str(&ui.messages()[0]).unwrap();
        assert_eq!(value["python"]["label"], "python");
        assert!(value["wsl"].is_null());
    }

    #[test]
    fn execute_succeeds_on_any_host() {
        let mut ui = MockUI::new();
        let result = InterpretersCommand::new(InterpretersArgs::default())
            .execute(&mut ui)
            .unwrap();
        assert!(result.success);
    }
}
