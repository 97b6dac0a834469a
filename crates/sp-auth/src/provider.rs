//! Identity provider descriptions.
//!
//! Everything that differs between GitHub and Google sign-in is data here,
//! so the client itself has a single code path.

use sp_core::enums::{OAuthProvider, UserRole};

/// How the access token is presented on profile requests.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AuthScheme {
    /// `Authorization: token {t}` (GitHub's classic form).
    Token,
    /// `Authorization: Bearer {t}`.
    Bearer,
}

impl AuthScheme {
    #[must_use]
    pub fn header_value(self, token: &str) -> String {
        match self {
            Self::Token => format!("token {token}"),
            Self::Bearer => format!("Bearer {token}"),
        }
    }
}

/// JSON field names in the provider's profile response.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ProfileFields {
    pub login: Option<&'static str>,
    pub name: &'static str,
    pub email: &'static str,
    pub avatar: &'static str,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProviderConfig {
    pub provider: OAuthProvider,
    pub authorize_url: String,
    pub token_url: String,
    pub profile_url: String,
    /// Secondary endpoint listing the user's addresses, when the profile
    /// does not reliably carry one.
    pub emails_url: Option<String>,
    pub scope: &'static str,
    pub extra_params: &'static [(&'static str, &'static str)],
    pub auth_scheme: AuthScheme,
    pub fields: ProfileFields,
    /// Role for a first-time user who does not pick one. An existing user
    /// keeps their stored role.
    pub default_role: UserRole,
    /// Path on the local callback listener the provider redirects to.
    pub callback_path: &'static str,
}

impl ProviderConfig {
    /// GitHub, with the REST API at `https://api.github.com`.
    #[must_use]
    pub fn github() -> Self {
        Self::github_with_api_url("https://api.github.com")
    }

    /// GitHub with a custom REST API base (GitHub Enterprise or tests).
    #[must_use]
    pub fn github_with_api_url(api_url: &str) -> Self {
        let api = api_url.trim_end_matches('/');
        Self {
            provider: OAuthProvider::Github,
            authorize_url: "https://github.com/login/oauth/authorize".into(),
            token_url: "https://github.com/login/oauth/access_token".into(),
            profile_url: format!("{api}/user"),
            emails_url: Some(format!("{api}/user/emails")),
            scope: "repo,user",
            extra_params: &[],
            auth_scheme: AuthScheme::Token,
            fields: ProfileFields {
                login: Some("login"),
                name: "name",
                email: "email",
                avatar: "avatar_url",
            },
            default_role: UserRole::It,
            callback_path: "/github-callback",
        }
    }

    #[must_use]
    pub fn google() -> Self {
        Self {
            provider: OAuthProvider::Google,
            authorize_url: "https://accounts.google.com/o/oauth2/v2/auth".into(),
            token_url: "https://oauth2.googleapis.com/token".into(),
            profile_url: "https://www.googleapis.com/oauth2/v2/userinfo".into(),
            emails_url: None,
            scope: "openid email profile",
            extra_params: &[("access_type", "offline")],
            auth_scheme: AuthScheme::Bearer,
            fields: ProfileFields {
                login: None,
                name: "name",
                email: "email",
                avatar: "picture",
            },
            default_role: UserRole::Normal,
            callback_path: "/callback",
        }
    }

    /// Point every endpoint at `base` (a fake provider in tests).
    #[must_use]
    pub fn with_base_url(mut self, base: &str) -> Self {
        let base = base.trim_end_matches('/');
        self.authorize_url = format!("{base}/authorize");
        self.token_url = format!("{base}/token");
        self.profile_url = format!("{base}/profile");
        if self.emails_url.is_some() {
            self.emails_url = Some(format!("{base}/emails"));
        }
        self
    }
}
