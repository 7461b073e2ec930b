use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::bridge::BridgeName;
use super::run::JobRun;
use crate::new_id;

/// Trigger that starts a new run of a job.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum Initiator {
    /// Manual trigger through the API or CLI
    Web,
    /// Cron schedule (standard 5-field or 6-field with seconds)
    Cron { schedule: String },
    /// On-chain run request log
    RunLog {
        #[serde(default, skip_serializing_if = "Option::is_none")]
        address: Option<String>,
    },
    /// Any matching on-chain log
    EthLog {
        #[serde(default, skip_serializing_if = "Option::is_none")]
        address: Option<String>,
    },
    /// One-shot run at a fixed time
    RunAt { time: DateTime<Utc> },
}

impl Initiator {
    pub fn kind(&self) -> &'static str {
        match self {
            Initiator::Web => "web",
            Initiator::Cron { .. } => "cron",
            Initiator::RunLog { .. } => "runlog",
            Initiator::EthLog { .. } => "ethlog",
            Initiator::RunAt { .. } => "runat",
        }
    }

    /// Short human-readable form, e.g. `web` or `cron(*/5 * * * *)`.
    pub fn summary(&self) -> String {
        match self {
            Initiator::Cron { schedule } => format!("cron({})", schedule),
            other => other.kind().to_string(),
        }
    }
}

/// One step of a job's pipeline; `kind` names a core adapter or a bridge.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TaskSpec {
    #[serde(rename = "type")]
    pub kind: BridgeName,
    #[serde(default, skip_serializing_if = "serde_json::Value::is_null")]
    pub params: serde_json::Value,
}

impl TaskSpec {
    pub fn new(kind: BridgeName) -> Self {
        Self {
            kind,
            params: serde_json::Value::Null,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct JobSpec {
    pub id: String,
    pub created_at: DateTime<Utc>,
    #[serde(default)]
    pub initiators: Vec<Initiator>,
    #[serde(default)]
    pub tasks: Vec<TaskSpec>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub start_at: Option<DateTime<Utc>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub end_at: Option<DateTime<Utc>>,
    /// Minimum payment (in the smallest token unit) a requester must attach
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub min_payment: Option<u64>,
}

impl JobSpec {
    pub fn new(initiators: Vec<Initiator>, tasks: Vec<TaskSpec>) -> Self {
        Self {
            id: new_id(),
            created_at: Utc::now(),
            initiators,
            tasks,
            start_at: None,
            end_at: None,
            min_payment: None,
        }
    }

    /// Comma-joined initiator summaries, used as the trigger column.
    pub fn initiators_summary(&self) -> String {
        self.initiators
            .iter()
            .map(Initiator::summary)
            .collect::<Vec<_>>()
            .join(", ")
    }

    /// Comma-joined task types in pipeline order.
    pub fn tasks_summary(&self) -> String {
        self.tasks
            .iter()
            .map(|t| t.kind.as_str())
            .collect::<Vec<_>>()
            .join(", ")
    }

    /// Start a new, unstarted run triggered by `initiator`.
    pub fn new_run(&self, initiator: &Initiator) -> JobRun {
        JobRun::new(self.id.clone(), initiator.clone())
    }
}

/// A job paired with its runs, as shown by `job show`.
///
/// Runs keep the order of the collection they were taken from.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct JobSpecWithRuns {
    #[serde(flatten)]
    pub job: JobSpec,
    #[serde(default)]
    pub runs: Vec<JobRun>,
}

impl JobSpecWithRuns {
    pub fn new(job: JobSpec, runs: Vec<JobRun>) -> Self {
        Self { job, runs }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn task(name: &str) -> TaskSpec {
        TaskSpec::new(BridgeName::new(name).unwrap())
    }

    #[test]
    fn test_initiator_serde_tags() {
        let cron = Initiator::Cron {
            schedule: "*/5 * * * *".to_string(),
        };
        let value = serde_json::to_value(&cron).unwrap();
        assert_eq!(value["type"], "cron");
        assert_eq!(value["schedule"], "*/5 * * * *");

        let parsed: Initiator = serde_json::from_str(r#"{"type":"runlog"}"#).unwrap();
        assert_eq!(parsed, Initiator::RunLog { address: None });
    }

    #[test]
    fn test_summaries() {
        let job = JobSpec::new(
            vec![
                Initiator::Web,
                Initiator::Cron {
                    schedule: "0 0 * * *".to_string(),
                },
            ],
            vec![task("HttpGet"), task("jsonparse"), task("ethtx")],
        );

        assert_eq!(job.initiators_summary(), "web, cron(0 0 * * *)");
        assert_eq!(job.tasks_summary(), "httpget, jsonparse, ethtx");
    }

    #[test]
    fn test_new_run_links_back_to_job() {
        let job = JobSpec::new(vec![Initiator::Web], vec![task("noop")]);
        let run = job.new_run(&job.initiators[0]);
        assert_eq!(run.job_id, job.id);
        assert_eq!(run.initiator, Initiator::Web);
        assert_ne!(run.id, job.id);
    }

    #[test]
    fn test_job_with_runs_flattens_job_fields() {
        let job = JobSpec::new(vec![Initiator::Web], vec![task("noop")]);
        let composite = JobSpecWithRuns::new(job.clone(), vec![]);
        let value = serde_json::to_value(&composite).unwrap();
        assert_eq!(value["id"], job.id.as_str());
        assert!(value["runs"].as_array().unwrap().is_empty());

        let back: JobSpecWithRuns = serde_json::from_value(value).unwrap();
        assert_eq!(back, composite);
    }
}
