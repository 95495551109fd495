// tests/pr_workflow_test.rs
use release_tool::config::RepositoryConfig;
use release_tool::domain::TrunkBranch;
use release_tool::process::MockRunner;
use release_tool::workflow::PrWorkflow;
use release_tool::ReleaseError;
use std::fs;
use tempfile::TempDir;

const BRANCHES: &str = "* release/v2.0.0\n  develop\n  remotes/origin/develop\n  remotes/origin/main\n  remotes/origin/release/v2.0.0";

fn project(version: &str) -> TempDir {
    let dir = TempDir::new().unwrap();
    fs::write(
        dir.path().join("package.json"),
        format!("{{\"name\": \"widgets\", \"version\": \"{}\"}}", version),
    )
    .unwrap();
    dir
}

fn runner(current: &str) -> MockRunner {
    MockRunner::new()
        .with_output("git branch --show-current", current)
        .with_output("git branch -a", BRANCHES)
}

#[test]
fn test_opens_one_pr_per_trunk_in_order() {
    let dir = project("2.0.0");
    let runner = runner("release/v2.0.0");
    let repository = RepositoryConfig::default();

    let opened = PrWorkflow::new(&runner, &repository, dir.path(), Vec::new())
        .run(&["alice".to_string()])
        .unwrap();

    assert_eq!(
        opened.iter().map(|pr| pr.base).collect::<Vec<_>>(),
        vec![TrunkBranch::Develop, TrunkBranch::Main]
    );
    assert_eq!(
        runner.calls_to("gh"),
        vec![
            "gh pr create --title Release v2.0.0 --body ### Release v2.0.0 --base develop --reviewer alice",
            "gh pr create --title Release v2.0.0 --body ### Release v2.0.0 --base main --reviewer alice",
        ]
    );
}

#[test]
fn test_refuses_non_release_branch() {
    let dir = project("2.0.0");
    let runner = runner("feature/x");
    let repository = RepositoryConfig::default();

    let err = PrWorkflow::new(&runner, &repository, dir.path(), Vec::new())
        .run(&["alice".to_string()])
        .unwrap_err();

    assert!(matches!(err, ReleaseError::Precondition(_)));
    assert!(err.to_string().contains("feature/x"));
    assert!(runner.calls_to("gh").is_empty());
}

#[test]
fn test_refuses_trunk_branch() {
    let dir = project("2.0.0");
    let runner = runner("develop");
    let repository = RepositoryConfig::default();

    let err = PrWorkflow::new(&runner, &repository, dir.path(), Vec::new())
        .run(&["alice".to_string()])
        .unwrap_err();

    assert!(matches!(err, ReleaseError::Precondition(_)));
    assert!(runner.calls_to("gh").is_empty());
}

#[test]
fn test_default_reviewers_used_when_none_given() {
    let dir = project("2.0.0");
    let runner = runner("release/v2.0.0");
    let repository = RepositoryConfig::default();

    PrWorkflow::new(
        &runner,
        &repository,
        dir.path(),
        vec!["bob".to_string(), "carol".to_string()],
    )
    .run(&[])
    .unwrap();

    let calls = runner.calls_to("gh");
    assert_eq!(calls.len(), 2);
    assert!(calls
        .iter()
        .all(|c| c.ends_with("--reviewer bob --reviewer carol")));
}

#[test]
fn test_explicit_reviewers_override_defaults() {
    let dir = project("2.0.0");
    let runner = runner("release/v2.0.0");
    let repository = RepositoryConfig::default();

    PrWorkflow::new(&runner, &repository, dir.path(), vec!["bob".to_string()])
        .run(&["alice".to_string(), "dan".to_string()])
        .unwrap();

    assert!(runner
        .calls_to("gh")
        .iter()
        .all(|c| c.ends_with("--reviewer alice --reviewer dan")));
}

#[test]
fn test_reviewers_required() {
    let dir = project("2.0.0");
    let runner = runner("release/v2.0.0");
    let repository = RepositoryConfig::default();

    let err = PrWorkflow::new(&runner, &repository, dir.path(), Vec::new())
        .run(&[])
        .unwrap_err();

    assert!(matches!(err, ReleaseError::Precondition(_)));
    assert!(runner.calls().is_empty());
}

#[test]
fn test_version_comes_from_manifest() {
    let dir = project("2.0.1");
    let runner = runner("release/v2.0.0");
    let repository = RepositoryConfig::default();

    let opened = PrWorkflow::new(&runner, &repository, dir.path(), Vec::new())
        .run(&["alice".to_string()])
        .unwrap();

    assert!(opened.iter().all(|pr| pr.title == "Release v2.0.1"));
    assert!(opened.iter().all(|pr| pr.body == "### Release v2.0.1"));
}

#[test]
fn test_manifest_without_version() {
    let dir = TempDir::new().unwrap();
    fs::write(dir.path().join("package.json"), r#"{"name": "widgets"}"#).unwrap();
    let runner = runner("release/v2.0.0");
    let repository = RepositoryConfig::default();

    let err = PrWorkflow::new(&runner, &repository, dir.path(), Vec::new())
        .run(&["alice".to_string()])
        .unwrap_err();

    assert!(matches!(err, ReleaseError::InvalidVersion(_)));
    assert!(runner.calls_to("gh").is_empty());
}

#[test]
fn test_first_failure_stops_remaining_prs() {
    let dir = project("2.0.0");
    let runner = runner("release/v2.0.0").fail_on(
        "gh pr create --title Release v2.0.0 --body ### Release v2.0.0 --base develop --reviewer alice",
    );
    let repository = RepositoryConfig::default();

    let err = PrWorkflow::new(&runner, &repository, dir.path(), Vec::new())
        .run(&["alice".to_string()])
        .unwrap_err();

    assert!(matches!(err, ReleaseError::ExternalTool { .. }));
    assert_eq!(runner.calls_to("gh").len(), 1);
}

#[test]
fn test_no_trunk_branches_opens_nothing() {
    let dir = project("2.0.0");
    let runner = MockRunner::new()
        .with_output("git branch --show-current", "release/v2.0.0")
        .with_output("git branch -a", "* release/v2.0.0");
    let repository = RepositoryConfig::default();

    let opened = PrWorkflow::new(&runner, &repository, dir.path(), Vec::new())
        .run(&["alice".to_string()])
        .unwrap();

    assert!(opened.is_empty());
    assert!(runner.calls_to("gh").is_empty());
}

#[test]
fn test_reads_configured_manifest_path() {
    let dir = TempDir::new().unwrap();
    fs::create_dir(dir.path().join("app")).unwrap();
    fs::write(
        dir.path().join("app/package.json"),
        r#"{"name": "widgets", "version": "2.0.0"}"#,
    )
    .unwrap();
    let runner = runner("release/v2.0.0");
    let repository = RepositoryConfig {
        manifest: "app/package.json".to_string(),
        ..RepositoryConfig::default()
    };

    let opened = PrWorkflow::new(&runner, &repository, dir.path(), Vec::new())
        .run(&["alice".to_string()])
        .unwrap();

    assert_eq!(opened.len(), 2);
    assert!(opened.iter().all(|pr| pr.title == "Release v2.0.0"));
}
