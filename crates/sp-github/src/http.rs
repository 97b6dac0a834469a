//! Shared HTTP response helpers.
//!
//! Centralizes status-code checks (429 rate limiting with `Retry-After`
//! parsing, non-success → [`GithubError::Api`]) so the endpoint modules stay
//! focused on request construction and response mapping.

use crate::error::GithubError;

/// Media type GitHub documents for the v3 REST API.
pub const GITHUB_ACCEPT: &str = "application/vnd.github.v3+json";

/// Check an HTTP response for common error conditions.
///
/// Returns the response unchanged on success. Handles:
/// - **429 Too Many Requests** → [`GithubError::RateLimited`] with
///   `Retry-After` header parsing (falls back to 60 s if absent or
///   unparseable).
/// - **Non-success status** → [`GithubError::Api`] with status code and
///   the `message` field of the JSON error body (or the raw body).
pub async fn check_response(resp: reqwest::Response) -> Result<reqwest::Response, GithubError> {
    if resp.status() == 429 {
        let retry_after = parse_retry_after(&resp);
        return Err(GithubError::RateLimited {
            retry_after_secs: retry_after,
        });
    }
    if !resp.status().is_success() {
        let status = resp.status().as_u16();
        let body = resp.text().await.unwrap_or_default();
        return Err(GithubError::Api {
            status,
            message: api_message(&body),
        });
    }
    Ok(resp)
}

/// Parse the `Retry-After` header as seconds, falling back to 60 s.
fn parse_retry_after(resp: &reqwest::Response) -> u64 {
    resp.headers()
        .get(reqwest::header::RETRY_AFTER)
        .and_then(|v| v.to_str().ok())
        .and_then(|v| v.parse::<u64>().ok())
        .unwrap_or(60)
}

/// GitHub error bodies look like `{"message": "...", "documentation_url": "..."}`.
fn api_message(body: &str) -> String {
    serde_json::from_str::<serde_json::Value>(body)
        .ok()
        .and_then(|v| v.get("message").and_then(|m| m.as_str()).map(str::to_string))
        .unwrap_or_else(|| body.to_string())
}
