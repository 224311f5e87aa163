use std::path::Path;

use quick_branch::commands::auth::save_verified_api_key;
use quick_branch::commands::issue::{IssueOptions, run_issue};
use quick_branch::commands::list::{handle_list_setup, list_issues};
use quick_branch::commands::start::{StartPlan, run_start, run_start_in};
use quick_branch::filtering::AssigneeFilter;
use quick_branch::{CliContext, CliContextBuilder, Config, ListConfig, LinearError, load_config};
use serde_json::json;
use wiremock::matchers::{body_string_contains, method};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn context(server: &MockServer, dir: &Path, api_key: Option<&str>, list: Option<ListConfig>) -> CliContext {
    let mut builder = CliContextBuilder::new()
        .with_config(Config { api_key: None, list })
        .with_config_path(dir.join("config.yaml"))
        .with_api_url(server.uri());
    if let Some(key) = api_key {
        builder = builder.with_api_key(key);
    }
    builder.build().unwrap()
}

fn list_config() -> ListConfig {
    ListConfig {
        team_id: "team-1".to_string(),
        team_name: "Engineering".to_string(),
        assignee_filter: AssigneeFilter::Me,
        state_ids: vec!["s1".to_string()],
    }
}

fn summary_json(title: &str, state: &str) -> serde_json::Value {
    json!({
        "id": "i7",
        "identifier": "ENG-7",
        "title": title,
        "priority": 2,
        "state": { "id": "s2", "name": state, "color": "#f2c94c", "type": "started" }
    })
}

fn git(dir: &Path, args: &[&str]) -> String {
    let output = std::process::Command::new("git")
        .args(args)
        .current_dir(dir)
        .output()
        .unwrap();
    assert!(output.status.success(), "git {:?}: {}", args, String::from_utf8_lossy(&output.stderr));
    String::from_utf8_lossy(&output.stdout).trim().to_string()
}

fn init_repo() -> tempfile::TempDir {
    let dir = tempfile::tempdir().unwrap();
    git(dir.path(), &["init", "--quiet"]);
    git(
        dir.path(),
        &["-c", "user.name=Test", "-c", "user.email=test@example.com", "commit", "--allow-empty", "--quiet", "-m", "init"],
    );
    dir
}

/// Viewer, team states, two updates and one issue fetch: a full `start` run.
async fn mount_full_start(server: &MockServer) {
    Mock::given(method("POST"))
        .and(body_string_contains("query Me"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "data": { "viewer": { "id": "u1", "name": "Sam", "email": "sam@example.com" } }
        })))
        .expect(1)
        .mount(server)
        .await;
    Mock::given(method("POST"))
        .and(body_string_contains("query TeamStates("))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "data": {
                "issue": { "team": { "states": { "nodes": [
                    { "id": "s1", "name": "Todo" },
                    { "id": "s2", "name": "In Progress" }
                ] } } }
            }
        })))
        .expect(1)
        .mount(server)
        .await;
    Mock::given(method("POST"))
        .and(body_string_contains("mutation IssueUpdate"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "data": { "issueUpdate": { "success": true, "issue": summary_json("Seven", "In Progress") } }
        })))
        .expect(2)
        .mount(server)
        .await;
    Mock::given(method("POST"))
        .and(body_string_contains("query Issue("))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "data": {
                "issue": {
                    "id": "i7",
                    "identifier": "ENG-7",
                    "title": "Seven",
                    "description": null,
                    "url": "https://linear.app/acme/issue/ENG-7/seven",
                    "priority": 2,
                    "branchName": "eng-7-seven",
                    "state": { "id": "s2", "name": "In Progress" },
                    "assignee": { "id": "u1", "name": "Sam", "email": "sam@example.com" }
                }
            }
        })))
        .expect(1)
        .mount(server)
        .await;
}

/// Fails the test if any request reaches the server.
async fn forbid_requests(server: &MockServer) {
    Mock::given(method("POST"))
        .respond_with(ResponseTemplate::new(500))
        .expect(0)
        .mount(server)
        .await;
}

#[tokio::test]
async fn test_commands_without_token_make_no_requests() {
    let server = MockServer::start().await;
    forbid_requests(&server).await;
    let dir = tempfile::tempdir().unwrap();

    let mut ctx = context(&server, dir.path(), None, Some(list_config()));
    let options = IssueOptions {
        issue_id: "ENG-7".to_string(),
        copy_url: false,
        copy_branch: false,
        checkout: false,
        verbose: false,
    };
    assert!(matches!(run_issue(&mut ctx, &options).await, Err(LinearError::ApiKeyNotFound)));
    assert!(matches!(list_issues(&mut ctx, 100).await, Err(LinearError::ApiKeyNotFound)));
    assert!(matches!(handle_list_setup(&mut ctx).await, Err(LinearError::ApiKeyNotFound)));

    let plan = StartPlan::new("ENG-7", true, false, false);
    assert!(matches!(run_start(&mut ctx, &plan).await, Err(LinearError::ApiKeyNotFound)));
}

#[tokio::test]
async fn test_list_without_setup_makes_no_requests() {
    let server = MockServer::start().await;
    forbid_requests(&server).await;
    let dir = tempfile::tempdir().unwrap();

    let mut ctx = context(&server, dir.path(), Some("lin_api_test"), None);
    assert!(matches!(list_issues(&mut ctx, 100).await, Err(LinearError::ListNotConfigured)));
}

#[tokio::test]
async fn test_list_fetches_saved_filter() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(body_string_contains("query FilteredIssues"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "data": { "issues": { "nodes": [summary_json("Seven", "Todo")] } }
        })))
        .expect(1)
        .mount(&server)
        .await;
    let dir = tempfile::tempdir().unwrap();

    let mut ctx = context(&server, dir.path(), Some("lin_api_test"), Some(list_config()));
    list_issues(&mut ctx, 80).await.unwrap();
}

#[tokio::test]
async fn test_issue_verbose_fetches_once() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(body_string_contains("query Issue("))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "data": {
                "issue": {
                    "id": "i7",
                    "identifier": "ENG-7",
                    "title": "Seven",
                    "description": "- first\n- second",
                    "url": "https://linear.app/acme/issue/ENG-7/seven",
                    "priority": 0,
                    "branchName": "eng-7-seven",
                    "state": { "id": "s1", "name": "Todo", "color": null, "type": "unstarted" },
                    "assignee": { "id": "u1", "name": "Sam", "email": "sam@example.com" }
                }
            }
        })))
        .expect(1)
        .mount(&server)
        .await;
    let dir = tempfile::tempdir().unwrap();

    let mut ctx = context(&server, dir.path(), Some("lin_api_test"), None);
    let options = IssueOptions {
        issue_id: "ENG-7".to_string(),
        copy_url: false,
        copy_branch: false,
        checkout: false,
        verbose: true,
    };
    run_issue(&mut ctx, &options).await.unwrap();
}

#[tokio::test]
async fn test_start_with_status_assigns_then_moves() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(body_string_contains("query Me"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "data": { "viewer": { "id": "u1", "name": "Sam", "email": "sam@example.com" } }
        })))
        .expect(1)
        .mount(&server)
        .await;
    Mock::given(method("POST"))
        .and(body_string_contains("query TeamStates("))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "data": {
                "issue": { "team": { "states": { "nodes": [
                    { "id": "s1", "name": "Todo" },
                    { "id": "s2", "name": "In Progress" }
                ] } } }
            }
        })))
        .expect(1)
        .mount(&server)
        .await;
    Mock::given(method("POST"))
        .and(body_string_contains("mutation IssueUpdate"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "data": { "issueUpdate": { "success": true, "issue": summary_json("Seven", "In Progress") } }
        })))
        .expect(2)
        .mount(&server)
        .await;
    Mock::given(method("POST"))
        .and(body_string_contains("query Issue("))
        .respond_with(ResponseTemplate::new(500))
        .expect(0)
        .mount(&server)
        .await;
    let dir = tempfile::tempdir().unwrap();

    let mut ctx = context(&server, dir.path(), Some("lin_api_test"), None);
    run_start(&mut ctx, &StartPlan::new("ENG-7", false, true, false)).await.unwrap();
}

#[tokio::test]
async fn test_turbo_runs_status_and_checkout() {
    let server = MockServer::start().await;
    mount_full_start(&server).await;
    let dir = tempfile::tempdir().unwrap();
    let repo = init_repo();

    let mut ctx = context(&server, dir.path(), Some("lin_api_test"), None);
    run_start_in(&mut ctx, &StartPlan::new("ENG-7", true, false, false), Some(repo.path()))
        .await
        .unwrap();

    assert_eq!(git(repo.path(), &["rev-parse", "--abbrev-ref", "HEAD"]), "eng-7-seven");
}

#[tokio::test]
async fn test_status_and_checkout_flags_match_turbo() {
    let server = MockServer::start().await;
    mount_full_start(&server).await;
    let dir = tempfile::tempdir().unwrap();
    let repo = init_repo();

    let mut ctx = context(&server, dir.path(), Some("lin_api_test"), None);
    run_start_in(&mut ctx, &StartPlan::new("ENG-7", false, true, true), Some(repo.path()))
        .await
        .unwrap();

    assert_eq!(git(repo.path(), &["rev-parse", "--abbrev-ref", "HEAD"]), "eng-7-seven");
}

#[tokio::test]
async fn test_start_checkout_fails_when_branch_exists() {
    let server = MockServer::start().await;
    mount_full_start(&server).await;
    let dir = tempfile::tempdir().unwrap();
    let repo = init_repo();
    git(repo.path(), &["branch", "eng-7-seven"]);

    let mut ctx = context(&server, dir.path(), Some("lin_api_test"), None);
    let result = run_start_in(&mut ctx, &StartPlan::new("ENG-7", true, false, false), Some(repo.path())).await;
    assert!(matches!(result, Err(LinearError::GitError(_))));
}

#[tokio::test]
async fn test_list_with_no_matches() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(body_string_contains("query FilteredIssues"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "data": { "issues": { "nodes": [] } }
        })))
        .expect(1)
        .mount(&server)
        .await;
    let dir = tempfile::tempdir().unwrap();

    let mut ctx = context(&server, dir.path(), Some("lin_api_test"), Some(list_config()));
    list_issues(&mut ctx, 100).await.unwrap();
}

#[tokio::test]
async fn test_start_stops_when_in_progress_is_missing() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(body_string_contains("query Me"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "data": { "viewer": { "id": "u1", "name": "Sam", "email": "sam@example.com" } }
        })))
        .mount(&server)
        .await;
    Mock::given(method("POST"))
        .and(body_string_contains("query TeamStates("))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "data": { "issue": { "team": { "states": { "nodes": [{ "id": "s1", "name": "Todo" }] } } } }
        })))
        .mount(&server)
        .await;
    Mock::given(method("POST"))
        .and(body_string_contains("mutation IssueUpdate"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "data": { "issueUpdate": { "success": true, "issue": summary_json("Seven", "Todo") } }
        })))
        .expect(1)
        .mount(&server)
        .await;
    let dir = tempfile::tempdir().unwrap();

    let mut ctx = context(&server, dir.path(), Some("lin_api_test"), None);
    let result = run_start(&mut ctx, &StartPlan::new("ENG-7", true, false, false)).await;
    assert!(matches!(result, Err(LinearError::InvalidInput(_))));
}

#[tokio::test]
async fn test_auth_saves_verified_key() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(body_string_contains("query Me"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "data": { "viewer": { "id": "u1", "name": "Sam", "email": "sam@example.com" } }
        })))
        .expect(1)
        .mount(&server)
        .await;
    let dir = tempfile::tempdir().unwrap();

    let mut ctx = context(&server, dir.path(), None, Some(list_config()));
    save_verified_api_key(&mut ctx, "  lin_api_good  ").await.unwrap();

    let saved = load_config(&dir.path().join("config.yaml")).unwrap();
    assert_eq!(saved.api_key.as_deref(), Some("lin_api_good"));
    assert_eq!(saved.list, Some(list_config()));
    assert_eq!(ctx.api_key().unwrap(), "lin_api_good");
}

#[tokio::test]
async fn test_auth_rejected_key_is_not_saved() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .respond_with(ResponseTemplate::new(401).set_body_string("Authentication required"))
        .mount(&server)
        .await;
    let dir = tempfile::tempdir().unwrap();

    let mut ctx = context(&server, dir.path(), None, None);
    assert!(save_verified_api_key(&mut ctx, "lin_api_bad").await.is_err());
    assert!(!dir.path().join("config.yaml").exists());
    assert!(!ctx.has_api_key());
}
