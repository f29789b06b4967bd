//! Common test utilities for CLI integration tests.
//!
//! Provides an isolated data directory per test and helpers for the
//! commands most tests need.

use assert_cmd::Command;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

/// Environment variables the binary reads; cleared so the host cannot leak in.
const SEATBOOK_ENV_VARS: [&str; 5] = [
    "SEATBOOK_DATA_DIR",
    "SEATBOOK_DATA_FILE",
    "SEATBOOK_PAGE_SIZE",
    "SEATBOOK_OUTPUT_FORMAT",
    "SEATBOOK_LOG_MODE",
];

/// A reservation time far enough ahead to never be in the past.
#[allow(dead_code)]
pub const FUTURE: &str = "2099-01-01T18:00";

/// Test environment with an isolated data directory.
pub struct TestEnv {
    /// Temporary directory (kept alive for the duration of the test)
    #[allow(dead_code)]
    temp_dir: TempDir,
    /// Path to the temporary directory
    pub temp_path: PathBuf,
    /// Path to the seatbook data directory
    pub data_dir: PathBuf,
}

#[allow(dead_code)]
impl TestEnv {
    /// Create a new test environment.
    ///
    /// The data directory is not created; the binary creates it on the
    /// first write.
    pub fn new() -> Self {
        let temp_dir = tempfile::tempdir().expect("Failed to create temp dir");
        let temp_path = temp_dir.path().to_path_buf();
        let data_dir = temp_path.join("seatbook-data");

        Self {
            temp_dir,
            temp_path,
            data_dir,
        }
    }

    /// A command with no flags and a clean environment.
    pub fn command_bare(&self) -> Command {
        let mut cmd = Command::cargo_bin("seatbook").expect("Failed to find seatbook binary");
        for var in SEATBOOK_ENV_VARS {
            cmd.env_remove(var);
        }
        cmd
    }

    /// A command with `--data-dir` pointing at this environment.
    pub fn command(&self) -> Command {
        let mut cmd = self.command_bare();
        cmd.arg("--data-dir").arg(&self.data_dir);
        cmd
    }

    /// Path of the default backing file.
    pub fn data_file(&self) -> PathBuf {
        self.data_dir.join("reservations.dat")
    }

    /// Get the temp path.
    pub fn path(&self) -> &Path {
        &self.temp_path
    }

    /// Write a file under the temp directory and return its path.
    pub fn write_file(&self, name: &str, contents: &str) -> PathBuf {
        let path = self.temp_path.join(name);
        std::fs::write(&path, contents).expect("Failed to write test file");
        path
    }

    /// Write `config.yaml` into the data directory.
    pub fn write_config(&self, yaml: &str) {
        std::fs::create_dir_all(&self.data_dir).expect("Failed to create data dir");
        std::fs::write(self.data_dir.join("config.yaml"), yaml).expect("Failed to write config");
    }

    /// Add a reservation at [`FUTURE`] and return its id.
    ///
    /// # Panics
    /// Panics if the add command fails or doesn't print an id.
    pub fn add(&self, name: &str, seats: &str) -> u32 {
        self.add_at(name, FUTURE, seats)
    }

    /// Add a reservation at `time` and return its id.
    pub fn add_at(&self, name: &str, time: &str, seats: &str) -> u32 {
        let output = self
            .command()
            .args(["add", "--name", name, "--time", time, "--party-size", "2"])
            .args(["--seats", seats])
            .output()
            .expect("Failed to run add command");

        assert!(
            output.status.success(),
            "Add failed: {}",
            String::from_utf8_lossy(&output.stderr)
        );

        let stdout = String::from_utf8(output.stdout).expect("Invalid UTF-8 in output");
        stdout.trim().parse().expect("Output is not a valid id")
    }

    /// Import record lines and assert success.
    pub fn import(&self, lines: &str) {
        let file = self.write_file("import.txt", lines);
        self.command().arg("import").arg(file).assert().success();
    }

    /// Run `list --format json` with extra args and return the parsed items.
    pub fn list_json(&self, args: &[&str]) -> Vec<serde_json::Value> {
        let output = self
            .command()
            .args(["list", "--format", "json"])
            .args(args)
            .output()
            .expect("Failed to run list command");

        assert!(
            output.status.success(),
            "List failed: {}",
            String::from_utf8_lossy(&output.stderr)
        );

        serde_json::from_slice(&output.stdout).expect("List output is not JSON")
    }

    /// Ids from a JSON listing.
    pub fn list_ids(&self, args: &[&str]) -> Vec<u64> {
        self.list_json(args)
            .iter()
            .map(|r| r["id"].as_u64().expect("id is a number"))
            .collect()
    }
}

impl Default for TestEnv {
    fn default() -> Self {
        Self::new()
    }
}
