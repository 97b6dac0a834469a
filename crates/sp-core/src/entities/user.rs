use chrono::{DateTime, Utc};
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::enums::{OAuthProvider, UserRole};

/// A person who signed in through an OAuth provider. Unique by email.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct User {
    pub id: i64,
    pub name: String,
    pub email: String,
    pub role: UserRole,
    pub oauth_provider: OAuthProvider,
    /// Provider login (GitHub username). `None` for Google accounts.
    pub external_username: Option<String>,
    #[serde(skip_serializing, default)]
    pub access_token: Option<String>,
    pub avatar_url: Option<String>,
    pub created_at: DateTime<Utc>,
}

/// Profile data produced by a successful OAuth exchange, ready to upsert.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct NewUser {
    pub name: String,
    pub email: String,
    pub role: UserRole,
    pub oauth_provider: OAuthProvider,
    pub external_username: Option<String>,
    #[serde(skip_serializing, default)]
    pub access_token: Option<String>,
    pub avatar_url: Option<String>,
}
