//! # sp-github
//!
//! GitHub REST client for the activity side of the planner:
//! - list the signed-in user's repositories
//! - summarize recent commit activity of one repository
//! - turn that summary into an activity snapshot with a commit streak

pub mod commits;
pub mod repos;

mod error;
mod http;

pub use commits::CommitActivity;
pub use error::GithubError;
pub use repos::Repository;

use std::time::Duration;

/// Default REST endpoint.
pub const DEFAULT_API_URL: &str = "https://api.github.com";

/// Authenticated GitHub API client.
///
/// Holds one `reqwest::Client` (10 s timeout) and the user's access token.
pub struct GithubClient {
    http: reqwest::Client,
    base_url: String,
    token: String,
}

impl GithubClient {
    /// Create a client against `base_url` (no trailing slash needed).
    ///
    /// # Errors
    ///
    /// Returns [`GithubError::Http`] if the underlying `reqwest::Client`
    /// fails to build.
    pub fn new(base_url: &str, token: &str, user_agent: &str) -> Result<Self, GithubError> {
        let http = reqwest::Client::builder()
            .user_agent(user_agent)
            .timeout(Duration::from_secs(10))
            .build()?;
        Ok(Self {
            http,
            base_url: base_url.trim_end_matches('/').to_string(),
            token: token.to_string(),
        })
    }

    /// GET `{base_url}{path}` with the token and GitHub media type.
    async fn get(&self, path: &str) -> Result<reqwest::Response, reqwest::Error> {
        let url = format!("{}{path}", self.base_url);
        tracing::debug!(%url, "github request");
        self.http
            .get(&url)
            .bearer_auth(&self.token)
            .header(reqwest::header::ACCEPT, http::GITHUB_ACCEPT)
            .send()
            .await
    }
}
