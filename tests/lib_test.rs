//! Library integration tests.

use bucket_scan::ScanError;
use std::path::PathBuf;

#[test]
fn error_types_are_public() {
    let err = ScanError::RegistryFailed {
        shim: "py-tool1-run".into(),
        message: "already exists".into(),
    };
    assert!(err.to_string().contains("py-tool1-run"));

    let err = ScanError::RootNotFound {
        path: PathBuf::from("/missing"),
    };
    assert!(err.to_string().contains("/missing"));
}

#[test]
fn result_type_alias_is_public() {
    fn test_fn() -> bucket_scan::Result<()> {
        Ok(())
    }
    assert!(test_fn().is_ok());
}

#[test]
fn cli_types_are_public() {
    use bucket_scan::cli::{Cli, Commands};
    use clap::Parser;

    let cli = Cli::parse_from(["bucket-scan", "interpreters", "--json"]);
    if let Some(Commands::Interpreters(args)) = cli.command {
        assert!(args.json);
    } else {
        panic!("Expected Interpreters command");
    }
}

#[test]
fn naming_api_is_public() {
    use bucket_scan::naming::{base_name, uniquify};

    assert_eq!(base_name("dev", "suite", Some("lint"), "check", "", false), "dev-lint-check");
    assert_eq!(uniquify("foo", |n| n == "foo" || n == "foo-2"), "foo-3");
}

#[test]
fn shim_types_are_public() {
    use bucket_scan::shims::{ScriptKind, ShimRecord, SCRIPT_EXTENSIONS};

    assert_eq!(SCRIPT_EXTENSIONS.len(), 6);
    assert_eq!(ScriptKind::from_extension(".PS1"), Some(ScriptKind::PowerShell));
    assert_eq!(ShimRecord::CSV_HEADER[10], "isDryRun");
}
