//! OAuth application credentials for the GitHub and Google providers.

use serde::{Deserialize, Serialize};

fn default_github_api_url() -> String {
    "https://api.github.com".to_string()
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct GithubConfig {
    /// OAuth app client ID.
    #[serde(default)]
    pub client_id: String,

    /// OAuth app client secret.
    #[serde(default)]
    pub client_secret: String,

    /// REST API base URL used for repository and commit lookups.
    #[serde(default = "default_github_api_url")]
    pub api_url: String,
}

impl Default for GithubConfig {
    fn default() -> Self {
        Self {
            client_id: String::new(),
            client_secret: String::new(),
            api_url: default_github_api_url(),
        }
    }
}

impl GithubConfig {
    /// Check if both OAuth credentials are present.
    pub fn is_configured(&self) -> bool {
        !self.client_id.is_empty() && !self.client_secret.is_empty()
    }
}

#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct GoogleConfig {
    /// OAuth client ID.
    #[serde(default)]
    pub client_id: String,

    /// OAuth client secret.
    #[serde(default)]
    pub client_secret: String,
}

impl GoogleConfig {
    /// Check if both OAuth credentials are present.
    pub fn is_configured(&self) -> bool {
        !self.client_id.is_empty() && !self.client_secret.is_empty()
    }
}
