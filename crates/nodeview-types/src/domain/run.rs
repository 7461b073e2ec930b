use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;

use super::job::Initiator;
use crate::new_id;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RunStatus {
    Unstarted,
    InProgress,
    PendingConfirmations,
    PendingBridge,
    Errored,
    Completed,
}

impl RunStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            RunStatus::Unstarted => "unstarted",
            RunStatus::InProgress => "in_progress",
            RunStatus::PendingConfirmations => "pending_confirmations",
            RunStatus::PendingBridge => "pending_bridge",
            RunStatus::Errored => "errored",
            RunStatus::Completed => "completed",
        }
    }
}

impl fmt::Display for RunStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Output of a finished run
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct RunResult {
    #[serde(default)]
    pub data: serde_json::Value,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct JobRun {
    pub id: String,
    pub job_id: String,
    pub status: RunStatus,
    pub initiator: Initiator,
    pub created_at: DateTime<Utc>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub completed_at: Option<DateTime<Utc>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub result: Option<RunResult>,
}

impl JobRun {
    pub fn new(job_id: String, initiator: Initiator) -> Self {
        Self {
            id: new_id(),
            job_id,
            status: RunStatus::Unstarted,
            initiator,
            created_at: Utc::now(),
            completed_at: None,
            result: None,
        }
    }

    /// Mark the run as completed with `data`.
    pub fn complete(mut self, data: serde_json::Value) -> Self {
        self.status = RunStatus::Completed;
        self.completed_at = Some(Utc::now());
        self.result = Some(RunResult { data, error: None });
        self
    }

    /// Mark the run as errored with `message`.
    pub fn fail(mut self, message: impl Into<String>) -> Self {
        self.status = RunStatus::Errored;
        self.completed_at = Some(Utc::now());
        self.result = Some(RunResult {
            data: serde_json::Value::Null,
            error: Some(message.into()),
        });
        self
    }

    pub fn error_message(&self) -> Option<&str> {
        self.result.as_ref().and_then(|r| r.error.as_deref())
    }
}
