//! TestWorld pattern for declarative integration test setup.
//!
//! Provides an isolated data directory, roster seeding, and preconfigured
//! CLI invocations pointing at it.

use anyhow::Result;
use assert_cmd::Command;
use guet_types::Snapshot;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

/// Isolated environment for driving the `guet` binary.
///
/// # Example
/// ```no_run
/// use guet_testing::{TestWorld, fixtures};
///
/// let world = TestWorld::new().with_roster(&fixtures::sample_snapshot());
/// world.command().args(["list", "noire"]).assert().success();
/// ```
pub struct TestWorld {
    temp_dir: TempDir,
    data_dir: PathBuf,
}

impl Default for TestWorld {
    fn default() -> Self {
        Self::new()
    }
}

impl TestWorld {
    /// Create a new isolated data directory.
    pub fn new() -> Self {
        let temp_dir = TempDir::new().expect("Failed to create temp dir");
        let data_dir = temp_dir.path().join("guet");
        std::fs::create_dir_all(&data_dir).expect("Failed to create data dir");

        Self { temp_dir, data_dir }
    }

    /// Seed the roster file with the given snapshot.
    pub fn with_roster(self, snapshot: &Snapshot) -> Self {
        let content =
            serde_json::to_string_pretty(snapshot).expect("Failed to serialize snapshot");
        std::fs::write(self.roster_path(), content).expect("Failed to write roster file");
        self
    }

    /// Write a settings file next to the roster.
    pub fn with_settings(self, toml: &str) -> Self {
        std::fs::write(self.settings_path(), toml).expect("Failed to write settings file");
        self
    }

    pub fn data_dir(&self) -> &Path {
        &self.data_dir
    }

    pub fn roster_path(&self) -> PathBuf {
        self.data_dir.join("roster.json")
    }

    pub fn settings_path(&self) -> PathBuf {
        self.data_dir.join("config.toml")
    }

    pub fn temp_dir(&self) -> &Path {
        self.temp_dir.path()
    }

    /// `guet` invocation pointing at this world's data directory.
    pub fn command(&self) -> Command {
        let mut cmd = Command::cargo_bin("guet").expect("Failed to find guet binary");
        cmd.arg("--data").arg(&self.data_dir);
        cmd
    }

    /// Roster file contents, parsed.
    pub fn read_roster(&self) -> Result<Snapshot> {
        let content = std::fs::read_to_string(self.roster_path())?;
        Ok(serde_json::from_str(&content)?)
    }
}
