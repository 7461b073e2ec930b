//! Fixtures for bridges, jobs and runs.
//!
//! Functions prefixed with `sample_` are deterministic (fixed ids and
//! timestamps) so they can back snapshot tests; the `new_` ones generate
//! fresh ids like production code does.

use chrono::{DateTime, Duration, TimeZone, Utc};
use nodeview_types::{
    BridgeName, BridgeType, Initiator, JobRun, JobSpec, JobSpecWithRuns, RunStatus, TaskSpec,
};

/// Timestamp every `sample_` fixture is anchored to.
pub fn fixed_time() -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2024, 3, 1, 12, 0, 0).unwrap()
}

/// Bridge with generated tokens and zero default confirmations.
pub fn new_bridge(name: &str, url: &str) -> BridgeType {
    BridgeType::parse(name, url).expect("fixture bridge should be valid")
}

/// Bridge with fixed, recognizable tokens.
pub fn sample_bridge(name: &str, url: &str) -> BridgeType {
    let mut bridge = new_bridge(name, url);
    bridge.incoming_token = format!("in-{}-secret", bridge.name);
    bridge.outgoing_token = format!("out-{}-secret", bridge.name);
    bridge
}

pub fn task(kind: &str) -> TaskSpec {
    TaskSpec::new(BridgeName::new(kind).expect("fixture task type should be valid"))
}

/// Job triggered from the web with a single `noop` task.
pub fn new_job() -> JobSpec {
    JobSpec::new(vec![Initiator::Web], vec![task("noop")])
}

/// Job plus the web initiator runs should be started with.
pub fn new_job_with_web_initiator() -> (JobSpec, Initiator) {
    let job = new_job();
    let initiator = job.initiators[0].clone();
    (job, initiator)
}

/// Deterministic job: id derived from `seed`, created `seed` hours after
/// [`fixed_time`], web + cron initiators and an http/json/ethtx pipeline.
pub fn sample_job(seed: u8) -> JobSpec {
    let mut job = JobSpec::new(
        vec![
            Initiator::Web,
            Initiator::Cron {
                schedule: "0 */6 * * *".to_string(),
            },
        ],
        vec![task("httpget"), task("jsonparse"), task("ethtx")],
    );
    job.id = format!("{:032x}", seed);
    job.created_at = fixed_time() + Duration::hours(i64::from(seed));
    job
}

/// Deterministic run of `job` in state `status`.
pub fn sample_run(job: &JobSpec, seed: u8, status: RunStatus) -> JobRun {
    let mut run = job.new_run(&Initiator::Web);
    run.id = format!("{:032x}", 0x1000 + u32::from(seed));
    run.created_at = job.created_at + Duration::minutes(i64::from(seed));
    run = match status {
        RunStatus::Completed => run.complete(serde_json::json!({"value": "10583"})),
        RunStatus::Errored => run.fail("bridge returned 502"),
        other => {
            run.status = other;
            run
        }
    };
    if run.completed_at.is_some() {
        run.completed_at = Some(run.created_at + Duration::seconds(30));
    }
    run
}

/// `sample_job(seed)` with one completed and one errored run.
pub fn sample_job_with_runs(seed: u8) -> JobSpecWithRuns {
    let job = sample_job(seed);
    let runs = vec![
        sample_run(&job, 1, RunStatus::Completed),
        sample_run(&job, 2, RunStatus::Errored),
    ];
    JobSpecWithRuns::new(job, runs)
}

/// Body and `Link` header of a list response for `items[offset..offset+size]`,
/// as the node's list endpoints would send it.
pub fn paginated_response<T: serde::Serialize + Clone>(
    items: &[T],
    base: &str,
    offset: usize,
    size: usize,
) -> (Vec<u8>, Option<String>) {
    let paginator = nodeview_pagination::Paginator::with_default_max(base)
        .expect("fixture base should be valid");
    let page = paginator
        .paginate_sized(items, offset, size)
        .expect("fixture size should be valid");
    let header = page.links.to_link_header();
    let body = serde_json::to_vec_pretty(&page.into_document()).expect("fixture serializes");
    (body, header)
}
