//! TestWorld pattern for CLI integration tests.
//!
//! Provides an isolated data directory, seeds the local store and config,
//! and configures `nodeview` commands to use them.

use anyhow::Result;
use assert_cmd::Command;
use nodeview_types::{BridgeType, JobRun, JobSpec, JobSpecWithRuns};
use std::path::{Path, PathBuf};
use tempfile::TempDir;

/// Declarative test environment builder.
///
/// # Example
/// ```no_run
/// use nodeview_testing::{TestWorld, fixtures};
///
/// let world = TestWorld::new()
///     .with_bridge(fixtures::sample_bridge("hapax", "http://hap.ax"))
///     .seed()
///     .unwrap();
///
/// let result = world.run(&["bridge", "list", "--size", "1"]).unwrap();
/// assert!(result.success());
/// ```
pub struct TestWorld {
    temp_dir: TempDir,
    data_dir: PathBuf,
    bridges: Vec<BridgeType>,
    jobs: Vec<JobSpec>,
    runs: Vec<JobRun>,
    format: &'static str,
}

impl Default for TestWorld {
    fn default() -> Self {
        Self::new()
    }
}

impl TestWorld {
    /// Create a new isolated test environment.
    pub fn new() -> Self {
        let temp_dir = TempDir::new().expect("Failed to create temp dir");
        let data_dir = temp_dir.path().join(".nodeview");
        std::fs::create_dir_all(&data_dir).expect("Failed to create data dir");

        Self {
            temp_dir,
            data_dir,
            bridges: Vec::new(),
            jobs: Vec::new(),
            runs: Vec::new(),
            format: "plain",
        }
    }

    pub fn data_dir(&self) -> &Path {
        &self.data_dir
    }

    pub fn store_path(&self) -> PathBuf {
        self.data_dir.join("store.json")
    }

    pub fn with_bridge(mut self, bridge: BridgeType) -> Self {
        self.bridges.push(bridge);
        self
    }

    pub fn with_job(mut self, job: JobSpec) -> Self {
        self.jobs.push(job);
        self
    }

    pub fn with_job_and_runs(mut self, composite: JobSpecWithRuns) -> Self {
        self.jobs.push(composite.job);
        self.runs.extend(composite.runs);
        self
    }

    /// Run commands with `--format json` instead of plain output.
    pub fn json(mut self) -> Self {
        self.format = "json";
        self
    }

    /// Write `config.toml` into the data directory.
    pub fn with_config(self, toml: &str) -> Result<Self> {
        std::fs::write(self.data_dir.join("config.toml"), toml)?;
        Ok(self)
    }

    /// Write the collected bridges, jobs and runs to `store.json`.
    pub fn seed(self) -> Result<Self> {
        let store = serde_json::json!({
            "bridges": self.bridges,
            "jobs": self.jobs,
            "runs": self.runs,
        });
        std::fs::write(self.store_path(), serde_json::to_vec_pretty(&store)?)?;
        Ok(self)
    }

    /// Write an arbitrary file under the temp root, returning its path.
    pub fn write_file(&self, name: &str, contents: &[u8]) -> Result<PathBuf> {
        let path = self.temp_dir.path().join(name);
        std::fs::write(&path, contents)?;
        Ok(path)
    }

    /// Configure a CLI command with this environment's data dir and format.
    pub fn configure_command<'a>(&self, cmd: &'a mut Command) -> &'a mut Command {
        cmd.arg("--data-dir")
            .arg(self.data_dir())
            .arg("--format")
            .arg(self.format)
            .env("NO_COLOR", "1")
            .current_dir(self.temp_dir.path())
    }

    /// Execute the `nodeview` binary with `args` in this environment.
    #[allow(deprecated)]
    pub fn run(&self, args: &[&str]) -> Result<CliResult> {
        let mut cmd = Command::cargo_bin("nodeview")
            .map_err(|e| anyhow::anyhow!("Failed to find nodeview binary: {}", e))?;

        self.configure_command(&mut cmd);
        cmd.args(args);

        let output = cmd.output()?;

        Ok(CliResult {
            status: output.status,
            stdout: String::from_utf8_lossy(&output.stdout).to_string(),
            stderr: String::from_utf8_lossy(&output.stderr).to_string(),
        })
    }
}

/// Result of a CLI command execution.
#[derive(Debug)]
pub struct CliResult {
    pub status: std::process::ExitStatus,
    pub stdout: String,
    pub stderr: String,
}

impl CliResult {
    pub fn success(&self) -> bool {
        self.status.success()
    }

    /// Parse stdout as JSON.
    pub fn json(&self) -> Result<serde_json::Value> {
        Ok(serde_json::from_str(&self.stdout)?)
    }
}
