use anyhow::Result;
use nodeview_testing::{TestWorld, fixtures};

#[test]
fn test_inspect_bridge_page_with_link_header() -> Result<()> {
    let bridges = vec![
        fixtures::sample_bridge("alpha", "http://alpha.example"),
        fixtures::sample_bridge("beta", "http://beta.example"),
        fixtures::sample_bridge("gamma", "http://gamma.example"),
    ];
    let (body, header) = fixtures::paginated_response(&bridges, "/v2/bridge_types", 1, 1);
    let header = header.expect("middle page has links");

    let world = TestWorld::new();
    let file = world.write_file("bridges.json", &body)?;
    let file = file.to_string_lossy().to_string();

    let result = world.run(&[
        "page",
        "inspect",
        &file,
        "--kind",
        "bridges",
        "--link-header",
        &header,
    ])?;
    assert!(result.success(), "stderr: {}", result.stderr);
    assert!(result.stdout.contains("beta"));
    assert!(!result.stdout.contains("alpha"));
    assert!(result.stderr.contains("next: --offset 2 --size 1"));
    assert!(result.stderr.contains("prev: --offset 0 --size 1"));

    Ok(())
}

#[test]
fn test_inspect_json_output() -> Result<()> {
    let jobs = vec![fixtures::sample_job(1), fixtures::sample_job(2)];
    let (body, _) = fixtures::paginated_response(&jobs, "/v2/specs", 0, 1);

    let world = TestWorld::new().json();
    let file = world.write_file("jobs.json", &body)?;

    let doc = world
        .run(&["page", "inspect", &file.to_string_lossy(), "--kind", "jobs"])?
        .json()?;
    assert_eq!(doc["data"][0]["id"], jobs[0].id.as_str());
    assert_eq!(doc["links"]["next"]["href"], "/v2/specs?offset=1&size=1");
    assert!(doc["links"].get("prev").is_none());

    Ok(())
}

#[test]
fn test_inspect_wrong_kind_fails() -> Result<()> {
    let jobs = vec![fixtures::sample_job(1)];
    let (body, _) = fixtures::paginated_response(&jobs, "/v2/specs", 0, 10);

    let world = TestWorld::new();
    let file = world.write_file("jobs.json", &body)?;

    let result = world.run(&["page", "inspect", &file.to_string_lossy(), "--kind", "bridges"])?;
    assert!(!result.success());
    assert!(result.stderr.contains("Failed to decode paginated response"));
    assert!(result.stdout.is_empty());

    Ok(())
}

#[test]
fn test_inspect_missing_file() -> Result<()> {
    let world = TestWorld::new();
    let result = world.run(&["page", "inspect", "absent.json", "--kind", "jobs"])?;
    assert!(!result.success());
    assert!(result.stderr.contains("Failed to read"));
    Ok(())
}
