//! Run artifacts.
//!
//! Two files are written to the output directory:
//!
//! - `shims.txt` - one shim name per line, real installs only
//! - `shims-map.csv` - one row per emitted or planned shim, with a final
//!   `isDryRun` column
//!
//! Both are reset at the start of every run and appended to as records
//! arrive, so they always reflect the latest run in classification order.

use std::fs::{self, OpenOptions};
use std::io::Write;
use std::path::{Path, PathBuf};

use crate::error::Result;
use crate::shims::ShimRecord;

/// File name of the installed-shim list.
pub const STATE_FILE: &str = "shims.txt";

/// File name of the shim metadata map.
pub const MAP_FILE: &str = "shims-map.csv";

/// Appends shim names and metadata rows to the run artifacts.
#[derive(Debug)]
pub struct AuditSink {
    state_path: PathBuf,
    map_path: PathBuf,
    states: usize,
    rows: usize,
}

impl AuditSink {
    /// Create a sink writing into `output_dir`. Nothing is touched until [`Self::reset`].
    pub fn new(output_dir: &Path) -> Self {
        Self {
            state_path: output_dir.join(STATE_FILE),
            map_path: output_dir.join(MAP_FILE),
            states: 0,
            rows: 0,
        }
    }

    /// Path of `shims.txt`.
    pub fn state_path(&self) -> &Path {
        &self.state_path
    }

    /// Path of `shims-map.csv`.
    pub fn map_path(&self) -> &Path {
        &self.map_path
    }

    /// Delete artifacts from earlier runs and start a fresh map with its header.
    pub fn reset(&mut self) -> Result<()> {
        if let Some(dir) = self.map_path.parent() {
            fs::create_dir_all(dir)?;
        }

        match fs::remove_file(&self.state_path) {
            Ok(()) => tracing::debug!("Removed {}", self.state_path.display()),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {}
            Err(e) => return Err(e.into()),
        }

        fs::write(&self.map_path, csv_line(&ShimRecord::CSV_HEADER))?;
        self.states = 0;
        self.rows = 0;
        Ok(())
    }

    /// Append a shim name to `shims.txt`. Dry runs record nothing.
    pub fn record_state(&mut self, shim: &str, dry_run: bool) -> Result<()> {
        if dry_run {
            return Ok(());
        }
        append(&self.state_path, &format!("{}\n", shim))?;
        self.states += 1;
        Ok(())
    }

    /// Append a metadata row to `shims-map.csv`, dry run or not.
    pub fn record_row(&mut self, record: &ShimRecord) -> Result<()> {
        append(&self.map_path, &csv_line(&record.csv_fields()))?;
        self.rows += 1;
        Ok(())
    }

    /// Record both artifacts for one shim.
    pub fn record(&mut self, record: &ShimRecord) -> Result<()> {
        self.record_state(&record.shim, record.dry_run)?;
        self.record_row(record)
    }

    /// Names written to `shims.txt` since the last reset.
    pub fn state_count(&self) -> usize {
        self.states
    }

    /// Rows written to `shims-map.csv` since the last reset (header excluded).
    pub fn row_count(&self) -> usize {
        self.rows
    }
}

fn append(path: &Path, text: &str) -> Result<()> {
    let mut file = OpenOptions::new().create(true).append(true).open(path)?;
    file.write_all(text.as_bytes())?;
    file.flush()?;
    Ok(())
}

/// Join fields into one CSV line, quoting where needed.
fn csv_line<S: AsRef<str>>(fields: &[S]) -> String {
    let mut line = fields
        .iter()
        .map(|f| csv_field(f.as_ref()))
        .collect::<Vec<_>>()
        .join(",");
    line.push('\n');
    line
}

fn csv_field(value: &str) -> String {
    if value.contains([',', '"', '\n', '\r']) {
        format!("\"{}\"", value.replace('"', "\"\""))
    } else {
        value.to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shims::{Invocation, SHIM_TYPE};
    use tempfile::TempDir;

    fn record(shim: &str, dry_run: bool) -> ShimRecord {
        let target = PathBuf::from("/apps/py/tool1/current/run.py");
        ShimRecord {
            shim: shim.into(),
            kind: SHIM_TYPE,
            family: "py".into(),
            app: "tool1".into(),
            tool: None,
            leaf: "run".into(),
            ext: ".py".into(),
            version: String::new(),
            invocation: Invocation::direct(&target),
            target,
            dry_run,
        }
    }

    #[test]
    fn reset_writes_header_and_removes_state() {
        let temp = TempDir::new().unwrap();
        fs::write(temp.path().join(STATE_FILE), "old-shim\n").unwrap();
        fs::write(temp.path().join(MAP_FILE), "stale\n").unwrap();

        let mut sink = AuditSink::new(temp.path());
        sink.reset().unwrap();

        assert!(!temp.path().join(STATE_FILE).exists());
        let map = fs::read_to_string(temp.path().join(MAP_FILE)).unwrap();
        assert_eq!(
            map,
            "shim,type,family,app,tool,leaf,ext,version,interpreter,target,isDryRun\n"
        );
    }

    #[test]
    fn reset_creates_output_dir() {
        let temp = TempDir::new().unwrap();
        let out = temp.path().join("nested").join("out");
        let mut sink = AuditSink::new(&out);
        sink.reset().unwrap();
        assert!(out.join(MAP_FILE).is_file());
    }

    #[test]
    fn real_record_writes_both_artifacts() {
        let temp = TempDir::new().unwrap();
        let mut sink = AuditSink::new(temp.path());
        sink.reset().unwrap();
        sink.record(&record("py-tool1-run", false)).unwrap();

        let state = fs::read_to_string(sink.state_path()).unwrap();
        assert_eq!(state, "py-tool1-run\n");
        let map = fs::read_to_string(sink.map_path()).unwrap();
        let lines: Vec<&str> = map.lines().collect();
        assert_eq!(lines.len(), 2);
        assert_eq!(
            lines[1],
            "py-tool1-run,root,py,tool1,,run,.py,,direct,/apps/py/tool1/current/run.py,false"
        );
        assert_eq!(sink.state_count(), 1);
        assert_eq!(sink.row_count(), 1);
    }

    #[test]
    fn dry_run_record_skips_state_file() {
        let temp = TempDir::new().unwrap();
        let mut sink = AuditSink::new(temp.path());
        sink.reset().unwrap();
        sink.record(&record("py-tool1-run", true)).unwrap();

        assert!(!sink.state_path().exists());
        let map = fs::read_to_string(sink.map_path()).unwrap();
        assert!(map.lines().nth(1).unwrap().ends_with(",true"));
        assert_eq!(sink.state_count(), 0);
    }

    #[test]
    fn rows_preserve_order() {
        let temp = TempDir::new().unwrap();
        let mut sink = AuditSink::new(temp.path());
        sink.reset().unwrap();
        for name in ["a", "b", "c"] {
            sink.record(&record(name, false)).unwrap();
        }
        let state = fs::read_to_string(sink.state_path()).unwrap();
        assert_eq!(state, "a\nb\nc\n");
    }

    #[test]
    fn csv_field_quotes_special_characters() {
        assert_eq!(csv_field("plain"), "plain");
        assert_eq!(csv_field("a,b"), "\"a,b\"");
        assert_eq!(csv_field("say \"hi\""), "\"say \"\"hi\"\"\"");
        assert_eq!(csv_field("two\nlines"), "\"two\nlines\"");
    }
}
