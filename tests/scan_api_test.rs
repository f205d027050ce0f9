//! End-to-end scans through the public library API.

use bucket_scan::audit::{MAP_FILE, STATE_FILE};
use bucket_scan::config::ScanSettings;
use bucket_scan::interpreters::{Capabilities, FixedLocator, Tool, GIT_BASH_PATH};
use bucket_scan::scan::{run_scan, ScanEvent, ScanSummary};
use bucket_scan::shims::RecordingRegistry;
use std::fs;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

struct Tree {
    temp: TempDir,
}

impl Tree {
    fn new() -> Self {
        let temp = TempDir::new().unwrap();
        fs::create_dir_all(temp.path().join("apps")).unwrap();
        Self { temp }
    }

    fn root(&self) -> PathBuf {
        self.temp.path().join("apps")
    }

    fn out(&self) -> PathBuf {
        self.temp.path().join("out")
    }

    fn script(&self, rel: &str) -> PathBuf {
        let path = self.root().join(rel);
        fs::create_dir_all(path.parent().unwrap()).unwrap();
        fs::write(&path, "").unwrap();
        path
    }

    fn settings(&self) -> ScanSettings {
        ScanSettings {
            root: self.root(),
            output: self.out(),
            shims_dir: self.temp.path().join("shims"),
            ..Default::default()
        }
    }

    fn map_rows(&self) -> Vec<String> {
        fs::read_to_string(self.out().join(MAP_FILE))
            .unwrap()
            .lines()
            .skip(1)
            .map(String::from)
            .collect()
    }

    fn state(&self) -> Option<String> {
        fs::read_to_string(self.out().join(STATE_FILE)).ok()
    }
}

fn python_launcher() -> Capabilities {
    Capabilities {
        python: Some(Tool::new("py", "/win/py.exe")),
        ..Default::default()
    }
}

fn scan(
    settings: &ScanSettings,
    caps: &Capabilities,
    registry: &mut RecordingRegistry,
) -> (ScanSummary, usize) {
    let mut warnings = 0;
    let summary = run_scan(settings, caps, registry, |event| {
        if let ScanEvent::ScriptSkipped { .. } = event {
            warnings += 1;
        }
    })
    .unwrap();
    (summary, warnings)
}

#[test]
fn python_script_produces_one_row_and_state_line() {
    let tree = Tree::new();
    let script = tree.script("py/tool1/current/run.py");
    let settings = tree.settings();
    let mut registry = RecordingRegistry::new(&settings.shims_dir);

    scan(&settings, &python_launcher(), &mut registry);

    let rows = tree.map_rows();
    assert_eq!(rows.len(), 1);
    assert_eq!(
        rows[0],
        format!(
            "py-tool1-run,root,py,tool1,,run,.py,,py,{},false",
            script.display()
        )
    );
    assert_eq!(tree.state().as_deref(), Some("py-tool1-run\n"));

    let call = &registry.calls()[0];
    assert_eq!(call.target, PathBuf::from("/win/py.exe"));
    assert_eq!(
        call.args,
        vec!["-3".to_string(), script.display().to_string()]
    );
}

#[cfg(unix)]
#[test]
fn symlinked_current_versions_the_shim() {
    let tree = Tree::new();
    let app = tree.root().join("py/tool1");
    let release = app.join("2.0.0");
    fs::create_dir_all(&release).unwrap();
    fs::write(release.join("run.py"), "").unwrap();
    std::os::unix::fs::symlink(&release, app.join("current")).unwrap();

    let mut settings = tree.settings();
    settings.include_version = true;
    let mut registry = RecordingRegistry::new(&settings.shims_dir);

    let (summary, _) = scan(&settings, &python_launcher(), &mut registry);

    assert_eq!(summary.records.len(), 1);
    assert_eq!(summary.records[0].shim, "py-tool1-run-v2.0.0");
    assert_eq!(summary.records[0].version, "2.0.0");
    assert!(tree.map_rows()[0].contains(",2.0.0,"));
}

#[test]
fn colliding_names_are_numbered() {
    let tree = Tree::new();
    tree.script("ps/app/current/start.ps1");
    tree.script("ps/app/current/start.cmd");
    let settings = tree.settings();
    let mut registry = RecordingRegistry::new(&settings.shims_dir);

    let (summary, _) = scan(&settings, &Capabilities::default(), &mut registry);

    let mut names: Vec<&str> = summary.records.iter().map(|r| r.shim.as_str()).collect();
    names.sort();
    assert_eq!(names, vec!["ps-app-start", "ps-app-start-2"]);
}

#[test]
fn existing_registry_shims_push_numbering_up() {
    let tree = Tree::new();
    tree.script("ps/app/current/start.cmd");
    let settings = tree.settings();
    fs::create_dir_all(&settings.shims_dir).unwrap();
    fs::write(settings.shims_dir.join("ps-app-start.exe"), "").unwrap();
    fs::write(settings.shims_dir.join("ps-app-start-2.exe"), "").unwrap();
    let mut registry = RecordingRegistry::new(&settings.shims_dir);

    let (summary, _) = scan(&settings, &Capabilities::default(), &mut registry);

    assert_eq!(summary.records[0].shim, "ps-app-start-3");
}

#[test]
fn dry_run_plans_everything_and_installs_nothing() {
    let tree = Tree::new();
    tree.script("py/tool1/current/run.py");
    tree.script("ps/app/current/start.ps1");
    tree.script("ps/app/current/start.bat");
    let mut settings = tree.settings();
    settings.dry_run = true;
    let mut registry = RecordingRegistry::new(&settings.shims_dir);

    let (summary, _) = scan(&settings, &python_launcher(), &mut registry);

    assert!(registry.calls().is_empty());
    assert!(tree.state().is_none());
    let rows = tree.map_rows();
    assert_eq!(rows.len(), 3);
    assert!(rows.iter().all(|r| r.ends_with(",true")));

    // Within-run collisions are still resolved in a plan.
    let mut names: Vec<&str> = summary.records.iter().map(|r| r.shim.as_str()).collect();
    names.sort();
    assert_eq!(names, vec!["ps-app-start", "ps-app-start-2", "py-tool1-run"]);
}

#[test]
fn shell_script_without_backend_is_absent_from_artifacts() {
    let tree = Tree::new();
    tree.script("sh/tool/current/build.sh");
    let settings = tree.settings();
    let mut registry = RecordingRegistry::new(&settings.shims_dir);

    let (summary, warnings) = scan(&settings, &Capabilities::default(), &mut registry);

    assert!(summary.records.is_empty());
    assert_eq!(warnings, 1);
    assert!(tree.map_rows().is_empty());
    assert!(tree.state().is_none());
}

#[test]
fn shell_script_prefers_git_bash() {
    let tree = Tree::new();
    tree.script("sh/tool/current/build.sh");
    let settings = tree.settings();
    let mut registry = RecordingRegistry::new(&settings.shims_dir);

    let locator = FixedLocator::new()
        .with_file(GIT_BASH_PATH)
        .with_command("wsl", "/win/wsl.exe");
    let caps = Capabilities::discover_with(&locator);

    let (summary, _) = scan(&settings, &caps, &mut registry);

    assert_eq!(summary.records[0].interpreter(), "bash");
    assert_eq!(registry.calls()[0].target, PathBuf::from(GIT_BASH_PATH));
    assert_eq!(registry.calls()[0].args[0], "-c");
}

#[test]
fn family_filter_is_exact_and_case_sensitive() {
    let tree = Tree::new();
    tree.script("py/tool1/current/run.cmd");
    tree.script("PY/tool2/current/run.cmd");
    let mut settings = tree.settings();
    settings.families = vec!["py".to_string()];
    let mut registry = RecordingRegistry::new(&settings.shims_dir);

    let (summary, _) = scan(&settings, &Capabilities::default(), &mut registry);

    assert_eq!(summary.records.len(), 1);
    assert_eq!(summary.records[0].family, "py");
}

#[test]
fn plugin_scripts_are_found_recursively() {
    let tree = Tree::new();
    tree.script("dev/suite/current/plugins/lint/bin/deep/check.cmd");
    tree.script("dev/suite/current/nested/not-root.cmd");
    let settings = tree.settings();
    let mut registry = RecordingRegistry::new(&settings.shims_dir);

    let (summary, _) = scan(&settings, &Capabilities::default(), &mut registry);

    assert_eq!(summary.records.len(), 1);
    let record = &summary.records[0];
    assert_eq!(record.shim, "dev-lint-check");
    assert_eq!(record.tool.as_deref(), Some("lint"));
    assert_eq!(record.app, "suite");
}

#[test]
fn rerun_resets_artifacts() {
    let tree = Tree::new();
    tree.script("fam/app/current/go.cmd");
    let settings = tree.settings();

    let mut first = RecordingRegistry::new(&settings.shims_dir);
    scan(&settings, &Capabilities::default(), &mut first);

    let mut second = RecordingRegistry::new(&settings.shims_dir);
    scan(&settings, &Capabilities::default(), &mut second);

    assert_eq!(tree.map_rows().len(), 1);
    assert_eq!(tree.state().as_deref(), Some("fam-app-go\n"));
}

#[test]
fn base_names_are_stable_across_runs() {
    let tree = Tree::new();
    tree.script("fam/app/current/go.cmd");
    let mut settings = tree.settings();
    settings.dry_run = true;

    let names: Vec<String> = (0..2)
        .map(|_| {
            let mut registry = RecordingRegistry::new(&settings.shims_dir);
            let (summary, _) = scan(&settings, &Capabilities::default(), &mut registry);
            summary.records[0].shim.clone()
        })
        .collect();
    assert_eq!(names[0], names[1]);
    assert!(Path::new(&settings.output).join(MAP_FILE).is_file());
}
