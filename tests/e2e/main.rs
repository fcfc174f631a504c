//! End-to-end CLI tests for bkd
//!
//! Every test runs the binary against a temporary data directory and an
//! explicit config file, so the user's own bookmarks are never touched.

mod cli_basic;
mod exchange_cli;

use std::fs;
use std::path::PathBuf;

use assert_cmd::Command;
use tempfile::TempDir;

/// Scratch home for one test: data directory plus config file
pub struct Sandbox {
    pub dir: TempDir,
}

impl Sandbox {
    pub fn new() -> Self {
        Self::with_config("")
    }

    pub fn with_config(config: &str) -> Self {
        let dir = TempDir::new().unwrap();
        fs::write(dir.path().join("config.toml"), config).unwrap();
        Self { dir }
    }

    pub fn data_dir(&self) -> PathBuf {
        self.dir.path().join("data")
    }

    pub fn path(&self, name: &str) -> PathBuf {
        self.dir.path().join(name)
    }

    /// `bkd --config <sandbox>/config.toml --data-dir <sandbox>/data`
    pub fn bkd(&self) -> Command {
        let mut cmd = Command::cargo_bin("bkd").unwrap();
        cmd.current_dir(self.dir.path())
            .arg("--config")
            .arg(self.path("config.toml"))
            .arg("--data-dir")
            .arg(self.data_dir());
        cmd
    }

    /// Add `urls` through the CLI
    pub fn seed(&self, urls: &[&str]) {
        for url in urls {
            self.bkd().args(["--add", url]).assert().success();
        }
    }

    /// Ids in stored order, read through `--list`
    pub fn ids(&self) -> Vec<String> {
        let output = self.bkd().arg("--list").output().unwrap();
        String::from_utf8(output.stdout)
            .unwrap()
            .lines()
            .filter_map(|line| line.split('\t').next().map(str::to_string))
            .collect()
    }
}
