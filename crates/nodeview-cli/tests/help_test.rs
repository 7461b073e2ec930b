use assert_cmd::Command;
use predicates::prelude::*;

#[allow(deprecated)]
fn nodeview() -> Command {
    Command::cargo_bin("nodeview").unwrap()
}

#[test]
fn test_version() {
    nodeview()
        .arg("--version")
        .assert()
        .success()
        .stdout(predicate::str::contains("nodeview"));
}

#[test]
fn test_main_help_lists_commands() {
    nodeview()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("bridge"))
        .stdout(predicate::str::contains("job"))
        .stdout(predicate::str::contains("page"))
        .stdout(predicate::str::contains("--data-dir"));
}

#[test]
fn test_list_help_documents_paging_flags() {
    for group in ["bridge", "job"] {
        nodeview()
            .args([group, "list", "--help"])
            .assert()
            .success()
            .stdout(predicate::str::contains("--offset"))
            .stdout(predicate::str::contains("--size"))
            .stdout(predicate::str::contains("--page"));
    }
}

#[test]
fn test_page_inspect_requires_kind() {
    nodeview()
        .args(["page", "inspect", "response.json"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("--kind"));
}

#[test]
fn test_offset_and_page_conflict() {
    nodeview()
        .args(["bridge", "list", "--offset", "2", "--page", "3"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("cannot be used with"));
}
