use anyhow::Result;
use nodeview_testing::{TestWorld, fixtures};

#[test]
fn test_job_list_is_ordered_by_creation() -> Result<()> {
    let world = TestWorld::new()
        .with_job(fixtures::sample_job(3))
        .with_job(fixtures::sample_job(1))
        .with_job(fixtures::sample_job(2))
        .json()
        .seed()?;

    let doc = world.run(&["job", "list", "--size", "2"])?.json()?;
    assert_eq!(doc["meta"]["count"], 3);
    assert_eq!(doc["data"][0]["id"], fixtures::sample_job(1).id);
    assert_eq!(doc["data"][1]["id"], fixtures::sample_job(2).id);
    assert_eq!(doc["links"]["next"]["href"], "/v2/specs?offset=2&size=2");

    Ok(())
}

#[test]
fn test_job_list_plain() -> Result<()> {
    let world = TestWorld::new()
        .with_job(fixtures::sample_job(1))
        .seed()?;

    let result = world.run(&["job", "list"])?;
    assert!(result.success(), "stderr: {}", result.stderr);
    assert!(result.stdout.contains(&fixtures::sample_job(1).id));
    assert!(result.stdout.contains("httpget, jsonparse, ethtx"));
    assert!(!result.stderr.contains("next:"));

    Ok(())
}

#[test]
fn test_job_show_with_runs() -> Result<()> {
    let composite = fixtures::sample_job_with_runs(4);
    let job_id = composite.job.id.clone();
    let world = TestWorld::new().with_job_and_runs(composite).seed()?;

    let result = world.run(&["job", "show", &job_id])?;
    assert!(result.success(), "stderr: {}", result.stderr);
    assert!(result.stdout.contains(&job_id));
    assert!(result.stdout.contains("Runs (2)"));
    assert!(result.stdout.contains("completed"));
    assert!(result.stdout.contains("bridge returned 502"));

    Ok(())
}

#[test]
fn test_job_show_json_flattens_job() -> Result<()> {
    let composite = fixtures::sample_job_with_runs(4);
    let job_id = composite.job.id.clone();
    let world = TestWorld::new().with_job_and_runs(composite).json().seed()?;

    let doc = world.run(&["job", "show", &job_id])?.json()?;
    assert_eq!(doc["id"], job_id.as_str());
    assert_eq!(doc["runs"].as_array().unwrap().len(), 2);
    assert_eq!(doc["runs"][0]["status"], "completed");
    assert_eq!(doc["runs"][1]["status"], "errored");

    Ok(())
}

#[test]
fn test_job_show_unknown() -> Result<()> {
    let world = TestWorld::new().seed()?;

    let result = world.run(&["job", "show", "deadbeef"])?;
    assert!(!result.success());
    assert!(result.stderr.contains("job not found: deadbeef"));

    Ok(())
}
