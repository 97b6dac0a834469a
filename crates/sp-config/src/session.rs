//! Logged-in identity override.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct SessionConfig {
    /// Act as this user (by email) instead of the one stored by `spl auth login`.
    #[serde(default)]
    pub user_email: String,
}

impl SessionConfig {
    #[must_use]
    pub fn user_email(&self) -> Option<&str> {
        Some(self.user_email.as_str()).filter(|email| !email.is_empty())
    }
}
