//! Local record store backing the CLI.
//!
//! Records live in a single `store.json` in the data directory:
//! `{"bridges": [...], "jobs": [...], "runs": [...]}`. A missing file is an
//! empty store.

use nodeview_types::{BridgeName, BridgeType, JobRun, JobSpec};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use thiserror::Error;
use tracing::debug;

pub type Result<T> = std::result::Result<T, StoreError>;

#[derive(Debug, Error)]
pub enum StoreError {
    #[error("{kind} not found: {key}")]
    NotFound { kind: &'static str, key: String },

    #[error("{kind} already exists: {key}")]
    Conflict { kind: &'static str, key: String },

    #[error("Failed to access store at {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to parse store at {path}: {source}")]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
}

pub trait Store {
    fn bridges(&self) -> Result<Vec<BridgeType>>;
    fn find_bridge(&self, name: &BridgeName) -> Result<BridgeType>;
    fn add_bridge(&mut self, bridge: BridgeType) -> Result<()>;
    fn remove_bridge(&mut self, name: &BridgeName) -> Result<BridgeType>;
    fn jobs(&self) -> Result<Vec<JobSpec>>;
    fn find_job(&self, id: &str) -> Result<JobSpec>;
    /// Runs of one job, oldest first
    fn runs_for_job(&self, job_id: &str) -> Result<Vec<JobRun>>;
}

#[derive(Debug, Default, Serialize, Deserialize)]
struct Records {
    #[serde(default)]
    bridges: Vec<BridgeType>,
    #[serde(default)]
    jobs: Vec<JobSpec>,
    #[serde(default)]
    runs: Vec<JobRun>,
}

/// [`Store`] over a JSON file, rewritten whole on every change.
pub struct FileStore {
    path: PathBuf,
    records: Records,
}

impl FileStore {
    pub const FILE_NAME: &'static str = "store.json";

    pub fn open_in(data_dir: &Path) -> Result<Self> {
        Self::open(data_dir.join(Self::FILE_NAME))
    }

    pub fn open(path: PathBuf) -> Result<Self> {
        let records = if path.exists() {
            let bytes = std::fs::read(&path).map_err(|source| StoreError::Io {
                path: path.clone(),
                source,
            })?;
            serde_json::from_slice(&bytes).map_err(|source| StoreError::Parse {
                path: path.clone(),
                source,
            })?
        } else {
            Records::default()
        };

        debug!(
            path = %path.display(),
            bridges = records.bridges.len(),
            jobs = records.jobs.len(),
            runs = records.runs.len(),
            "opened store"
        );

        Ok(Self { path, records })
    }

    fn save(&self) -> Result<()> {
        let io_err = |source| StoreError::Io {
            path: self.path.clone(),
            source,
        };

        if let Some(parent) = self.path.parent() {
            std::fs::create_dir_all(parent).map_err(io_err)?;
        }
        let bytes =
            serde_json::to_vec_pretty(&self.records).map_err(|source| StoreError::Parse {
                path: self.path.clone(),
                source,
            })?;
        std::fs::write(&self.path, bytes).map_err(io_err)
    }
}

impl Store for FileStore {
    fn bridges(&self) -> Result<Vec<BridgeType>> {
        Ok(self.records.bridges.clone())
    }

    fn find_bridge(&self, name: &BridgeName) -> Result<BridgeType> {
        self.records
            .bridges
            .iter()
            .find(|b| &b.name == name)
            .cloned()
            .ok_or_else(|| StoreError::NotFound {
                kind: "bridge",
                key: name.to_string(),
            })
    }

    fn add_bridge(&mut self, bridge: BridgeType) -> Result<()> {
        if self.records.bridges.iter().any(|b| b.name == bridge.name) {
            return Err(StoreError::Conflict {
                kind: "bridge",
                key: bridge.name.to_string(),
            });
        }
        self.records.bridges.push(bridge);
        self.save()
    }

    fn remove_bridge(&mut self, name: &BridgeName) -> Result<BridgeType> {
        let index = self
            .records
            .bridges
            .iter()
            .position(|b| &b.name == name)
            .ok_or_else(|| StoreError::NotFound {
                kind: "bridge",
                key: name.to_string(),
            })?;
        let removed = self.records.bridges.remove(index);
        self.save()?;
        Ok(removed)
    }

    fn jobs(&self) -> Result<Vec<JobSpec>> {
        Ok(self.records.jobs.clone())
    }

    fn find_job(&self, id: &str) -> Result<JobSpec> {
        self.records
            .jobs
            .iter()
            .find(|j| j.id == id)
            .cloned()
            .ok_or_else(|| StoreError::NotFound {
                kind: "job",
                key: id.to_string(),
            })
    }

    fn runs_for_job(&self, job_id: &str) -> Result<Vec<JobRun>> {
        let mut runs: Vec<JobRun> = self
            .records
            .runs
            .iter()
            .filter(|r| r.job_id == job_id)
            .cloned()
            .collect();
        runs.sort_by_key(|r| r.created_at);
        Ok(runs)
    }
}
