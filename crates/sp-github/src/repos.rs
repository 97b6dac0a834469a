//! Repository listing.

use serde::{Deserialize, Serialize};

use crate::{GithubClient, error::GithubError, http::check_response};

/// Placeholder shown for repositories without a description.
pub const NO_DESCRIPTION: &str = "No description";

/// One repository visible to the signed-in user.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Repository {
    /// `owner/name`.
    pub name: String,
    pub private: bool,
    pub updated_at: String,
    pub html_url: String,
    pub description: String,
}

#[derive(Deserialize)]
struct RepoEntry {
    full_name: String,
    private: bool,
    updated_at: String,
    html_url: String,
    description: Option<String>,
}

impl From<RepoEntry> for Repository {
    fn from(r: RepoEntry) -> Self {
        Self {
            name: r.full_name,
            private: r.private,
            updated_at: r.updated_at,
            html_url: r.html_url,
            description: r
                .description
                .filter(|d| !d.is_empty())
                .unwrap_or_else(|| NO_DESCRIPTION.to_string()),
        }
    }
}

impl GithubClient {
    /// Repositories of the authenticated user, most recently updated first.
    ///
    /// Only the first page (up to 100 repositories) is fetched.
    ///
    /// # Errors
    ///
    /// Returns [`GithubError`] if the request fails, GitHub returns a
    /// non-success status, or the body is not a repository list.
    pub async fn list_repositories(&self) -> Result<Vec<Repository>, GithubError> {
        let resp = check_response(
            self.get("/user/repos?sort=updated&per_page=100&type=all")
                .await?,
        )
        .await?;
        let body = resp.text().await?;
        let entries: Vec<RepoEntry> = serde_json::from_str(&body)
            .map_err(|e| GithubError::Parse(format!("repository list: {e}")))?;
        Ok(entries.into_iter().map(Repository::from).collect())
    }
}
