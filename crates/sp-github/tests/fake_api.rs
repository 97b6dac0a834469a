//! `GithubClient` against a local `tiny_http` server standing in for api.github.com.

use std::thread;

use chrono::NaiveDate;
use pretty_assertions::assert_eq;
use sp_github::{GithubClient, GithubError};
use tiny_http::{Header, Response, Server};

const REPOS: &str = r#"[
    {"full_name": "octocat/hello", "private": false, "updated_at": "2026-10-18T09:12:00Z",
     "html_url": "https://github.com/octocat/hello", "description": null}
]"#;

const COMMITS: &str = r#"[
    {"commit": {"committer": {"date": "2026-10-18T21:00:00Z"}}},
    {"commit": {"committer": {"date": "2026-10-14T09:00:00Z"}}}
]"#;

fn json(body: &str, status: u16) -> Response<std::io::Cursor<Vec<u8>>> {
    Response::from_string(body)
        .with_status_code(status)
        .with_header(Header::from_bytes("Content-Type", "application/json").unwrap())
}

/// Serve canned GitHub responses until the test process exits.
/// Requests without the expected bearer token get 401.
fn spawn_fake_github() -> String {
    let server = Server::http("127.0.0.1:0").unwrap();
    let port = server.server_addr().to_ip().unwrap().port();

    thread::spawn(move || {
        for request in server.incoming_requests() {
            let authorized = request.headers().iter().any(|h| {
                h.field.equiv("Authorization") && h.value.as_str() == "Bearer gho_test"
            });
            let accepts_v3 = request.headers().iter().any(|h| {
                h.field.equiv("Accept") && h.value.as_str() == "application/vnd.github.v3+json"
            });
            let url = request.url().to_string();

            let response = if !authorized || !accepts_v3 {
                json(r#"{"message":"Bad credentials"}"#, 401)
            } else if url == "/user/repos?sort=updated&per_page=100&type=all" {
                json(REPOS, 200)
            } else if url == "/repos/octocat/hello/commits?per_page=100" {
                json(COMMITS, 200)
            } else if url == "/repos/octocat/empty/commits?per_page=100" {
                json(r#"{"message":"Git Repository is empty."}"#, 409)
            } else if url == "/repos/octocat/busy/commits?per_page=100" {
                json(r#"{"message":"slow down"}"#, 429)
                    .with_header(Header::from_bytes("Retry-After", "15").unwrap())
            } else {
                json(r#"{"message":"Not Found"}"#, 404)
            };
            let _ = request.respond(response);
        }
    });

    format!("http://127.0.0.1:{port}")
}

fn today() -> NaiveDate {
    NaiveDate::from_ymd_opt(2026, 10, 19).unwrap()
}

#[tokio::test]
async fn lists_repositories() {
    let client = GithubClient::new(&spawn_fake_github(), "gho_test", "planner-tests").unwrap();
    let repos = client.list_repositories().await.unwrap();
    assert_eq!(repos.len(), 1);
    assert_eq!(repos[0].name, "octocat/hello");
    assert_eq!(repos[0].description, "No description");
}

#[tokio::test]
async fn builds_snapshot_with_streak() {
    let client = GithubClient::new(&spawn_fake_github(), "gho_test", "planner-tests").unwrap();
    let (snapshot, activity) = client
        .fetch_snapshot(7, "octocat/hello", today())
        .await
        .unwrap();
    assert_eq!(snapshot.user_id, 7);
    assert_eq!(snapshot.commit_count, 2);
    assert_eq!(
        snapshot.last_commit_date,
        NaiveDate::from_ymd_opt(2026, 10, 18)
    );
    assert_eq!(snapshot.streak_count, 1);
    assert_eq!(activity.commits_last_week, 2);
    assert_eq!(activity.active_days, 2);
    assert_eq!(activity.commit_gaps, 1);
}

#[tokio::test]
async fn empty_repository_has_no_activity() {
    let client = GithubClient::new(&spawn_fake_github(), "gho_test", "planner-tests").unwrap();
    let (snapshot, activity) = client
        .fetch_snapshot(7, "octocat/empty", today())
        .await
        .unwrap();
    assert_eq!(activity.active_days, 0);
    assert_eq!(snapshot.commit_count, 0);
    assert_eq!(snapshot.last_commit_date, None);
    assert_eq!(snapshot.streak_count, 0);
}

#[tokio::test]
async fn missing_repository() {
    let client = GithubClient::new(&spawn_fake_github(), "gho_test", "planner-tests").unwrap();
    let err = client
        .commit_activity("octocat", "nope", today())
        .await
        .unwrap_err();
    assert!(matches!(err, GithubError::RepoNotFound(ref r) if r == "octocat/nope"));
}

#[tokio::test]
async fn rate_limit_surfaces_retry_after() {
    let client = GithubClient::new(&spawn_fake_github(), "gho_test", "planner-tests").unwrap();
    let err = client
        .commit_activity("octocat", "busy", today())
        .await
        .unwrap_err();
    assert!(matches!(
        err,
        GithubError::RateLimited {
            retry_after_secs: 15
        }
    ));
}

#[tokio::test]
async fn wrong_token_is_api_error() {
    let client = GithubClient::new(&spawn_fake_github(), "expired", "planner-tests").unwrap();
    let err = client.list_repositories().await.unwrap_err();
    assert!(matches!(err, GithubError::Api { status: 401, ref message } if message == "Bad credentials"));
}
