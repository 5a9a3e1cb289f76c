#![allow(dead_code)]
use assert_cmd::{Command, cargo_bin_cmd};
use std::fs;
use std::path::PathBuf;
use tempfile::TempDir;

pub fn wh() -> Command {
    cargo_bin_cmd!("workhours")
}

/// Isolated home, config file and record file for one test.
pub struct Sandbox {
    pub dir: TempDir,
    pub config: String,
    pub records: String,
}

impl Sandbox {
    pub fn new() -> Self {
        let dir = tempfile::tempdir().expect("create temp dir");
        let config = dir.path().join("preferences.yaml").to_string_lossy().to_string();
        let records = dir.path().join("work_record.json").to_string_lossy().to_string();
        Self {
            dir,
            config,
            records,
        }
    }

    /// Command bound to this sandbox's config and record file.
    pub fn cmd(&self) -> Command {
        let mut c = self.cmd_without_file();
        c.args(["--file", &self.records]);
        c
    }

    /// Command bound to the sandbox config only; the record file comes
    /// from the configuration or an explicit `--file`.
    pub fn cmd_without_file(&self) -> Command {
        let mut c = wh();
        c.env("HOME", self.dir.path())
            .env_remove("RUST_LOG")
            .env_remove("WORKHOURS_CONFIG")
            .args(["--config", &self.config]);
        c
    }

    pub fn path(&self, name: &str) -> PathBuf {
        self.dir.path().join(name)
    }

    pub fn write_config(&self, yaml: &str) {
        fs::write(&self.config, yaml).expect("write config");
    }

    /// Saved records as raw JSON values.
    pub fn records_json(&self) -> Vec<serde_json::Value> {
        let content = fs::read_to_string(&self.records).expect("read records");
        serde_json::from_str(&content).expect("records are a JSON array")
    }

    pub fn add(&self, badge: &str, date: &str, entry: &str, exit: &str) {
        self.cmd()
            .args(["add", badge, entry, exit, "--date", date])
            .assert()
            .success();
    }
}
