//! GitHub client error types.

use sp_core::errors::CoreError;
use thiserror::Error;

/// Errors that can occur when talking to the GitHub API.
#[derive(Debug, Error)]
pub enum GithubError {
    /// HTTP transport error.
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// GitHub returned a non-success status code.
    #[error("GitHub API error ({status}): {message}")]
    Api {
        /// HTTP status code returned by GitHub.
        status: u16,
        /// Error message or response body.
        message: String,
    },

    /// GitHub returned a 429 Too Many Requests response.
    #[error("rate limited, retry after {retry_after_secs}s")]
    RateLimited {
        /// Seconds to wait before retrying.
        retry_after_secs: u64,
    },

    /// The repository does not exist or is not visible with this token.
    #[error("repository not found: {0}")]
    RepoNotFound(String),

    /// Failed to parse a GitHub response.
    #[error("parse error: {0}")]
    Parse(String),

    /// The repository label is not `owner/name`.
    #[error(transparent)]
    InvalidRepo(#[from] CoreError),
}
