//! Authorization-code OAuth client shared by both providers.
//!
//! Sign-in is three HTTP calls at most: exchange the code for an access
//! token, fetch the profile, and (GitHub only) fetch the address list to find
//! the primary email. Each call has a 10-second timeout and is not retried.

use std::time::Duration;

use serde::Deserialize;
use serde_json::Value;
use sp_core::entities::NewUser;
use sp_core::enums::{OAuthProvider, UserRole};

use crate::error::AuthError;
use crate::provider::ProviderConfig;

/// Identity returned by a successful sign-in.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UserProfile {
    pub provider: OAuthProvider,
    /// Role to store if this identity has no user row yet.
    pub default_role: UserRole,
    pub name: String,
    pub email: String,
    /// Provider username (GitHub login). `None` for Google.
    pub login: Option<String>,
    pub avatar_url: Option<String>,
    pub access_token: String,
}

impl UserProfile {
    /// The user record to upsert for this identity, with `role` in place of
    /// the provider default when the user picked one.
    #[must_use]
    pub fn into_new_user(self, role: Option<UserRole>) -> NewUser {
        NewUser {
            name: self.name,
            email: self.email,
            role: role.unwrap_or(self.default_role),
            oauth_provider: self.provider,
            external_username: self.login,
            access_token: Some(self.access_token),
            avatar_url: self.avatar_url,
        }
    }
}

#[derive(Deserialize)]
struct TokenResponse {
    access_token: Option<String>,
    error: Option<String>,
    error_description: Option<String>,
}

#[derive(Deserialize)]
struct EmailEntry {
    email: String,
    #[serde(default)]
    primary: bool,
}

pub struct OAuthClient {
    http: reqwest::Client,
    provider: ProviderConfig,
    client_id: String,
    client_secret: String,
    redirect_uri: String,
}

impl OAuthClient {
    /// Build a client. The redirect URI is `redirect_base` plus the
    /// provider's callback path.
    ///
    /// # Errors
    ///
    /// Returns `AuthError::Http` if the HTTP client cannot be built.
    pub fn new(
        provider: ProviderConfig,
        client_id: &str,
        client_secret: &str,
        redirect_base: &str,
        user_agent: &str,
    ) -> Result<Self, AuthError> {
        let http = reqwest::Client::builder()
            .user_agent(user_agent)
            .timeout(Duration::from_secs(10))
            .build()?;
        let redirect_uri = format!(
            "{}{}",
            redirect_base.trim_end_matches('/'),
            provider.callback_path
        );
        Ok(Self {
            http,
            provider,
            client_id: client_id.to_string(),
            client_secret: client_secret.to_string(),
            redirect_uri,
        })
    }

    #[must_use]
    pub const fn provider(&self) -> &ProviderConfig {
        &self.provider
    }

    #[must_use]
    pub fn redirect_uri(&self) -> &str {
        &self.redirect_uri
    }

    /// URL the user's browser is sent to. Deterministic for the same `state`.
    #[must_use]
    pub fn authorization_url(&self, state: Option<&str>) -> String {
        let mut url = format!(
            "{}?client_id={}&redirect_uri={}&scope={}&response_type=code",
            self.provider.authorize_url,
            urlencoding::encode(&self.client_id),
            urlencoding::encode(&self.redirect_uri),
            urlencoding::encode(self.provider.scope),
        );
        for (key, value) in self.provider.extra_params {
            url.push_str(&format!("&{key}={}", urlencoding::encode(value)));
        }
        if let Some(state) = state {
            url.push_str(&format!("&state={}", urlencoding::encode(state)));
        }
        url
    }

    /// Exchange an authorization code and load the user's profile.
    ///
    /// # Errors
    ///
    /// Returns `AuthError::TokenExchange` or `AuthError::Profile` when the
    /// provider rejects a step or answers with unexpected JSON, and
    /// `AuthError::Http` on transport failure.
    pub async fn authenticate(&self, code: &str) -> Result<UserProfile, AuthError> {
        let access_token = self.exchange_code(code).await?;
        let profile = self.fetch_profile(&access_token).await?;
        let fields = self.provider.fields;

        let text = |key: &str| {
            profile
                .get(key)
                .and_then(Value::as_str)
                .filter(|s| !s.is_empty())
                .map(str::to_string)
        };

        let login = fields.login.and_then(text);
        let name = text(fields.name).or_else(|| login.clone());
        let email = match (&self.provider.emails_url, &login) {
            (Some(url), Some(login)) => self.primary_email(url, &access_token, login).await,
            _ => text(fields.email)
                .ok_or_else(|| AuthError::Profile("profile has no email".into()))?,
        };
        let name = name.unwrap_or_else(|| email.clone());

        tracing::info!(provider = %self.provider.provider, %email, "signed in");
        Ok(UserProfile {
            provider: self.provider.provider,
            default_role: self.provider.default_role,
            name,
            email,
            login,
            avatar_url: text(fields.avatar),
            access_token,
        })
    }

    async fn exchange_code(&self, code: &str) -> Result<String, AuthError> {
        let form = [
            ("client_id", self.client_id.as_str()),
            ("client_secret", self.client_secret.as_str()),
            ("code", code),
            ("redirect_uri", self.redirect_uri.as_str()),
            ("grant_type", "authorization_code"),
        ]
        .iter()
        .map(|(k, v)| format!("{k}={}", urlencoding::encode(v)))
        .collect::<Vec<_>>()
        .join("&");

        tracing::debug!(url = %self.provider.token_url, "exchanging authorization code");
        let resp = self
            .http
            .post(&self.provider.token_url)
            .header(reqwest::header::ACCEPT, "application/json")
            .header(
                reqwest::header::CONTENT_TYPE,
                "application/x-www-form-urlencoded",
            )
            .body(form)
            .send()
            .await?;

        let status = resp.status();
        let body = resp.text().await?;
        if !status.is_success() {
            return Err(AuthError::TokenExchange(format!("HTTP {status}: {body}")));
        }
        let token: TokenResponse = serde_json::from_str(&body)
            .map_err(|e| AuthError::TokenExchange(format!("unexpected response: {e}")))?;

        match (token.access_token, token.error) {
            (Some(t), None) if !t.is_empty() => Ok(t),
            (_, Some(error)) => Err(AuthError::TokenExchange(match token.error_description {
                Some(desc) => format!("{error}: {desc}"),
                None => error,
            })),
            _ => Err(AuthError::TokenExchange("no access_token in response".into())),
        }
    }

    async fn fetch_profile(&self, access_token: &str) -> Result<Value, AuthError> {
        tracing::debug!(url = %self.provider.profile_url, "fetching profile");
        let resp = self
            .http
            .get(&self.provider.profile_url)
            .header(
                reqwest::header::AUTHORIZATION,
                self.provider.auth_scheme.header_value(access_token),
            )
            .header(reqwest::header::ACCEPT, "application/json")
            .send()
            .await?;

        let status = resp.status();
        let body = resp.text().await?;
        if !status.is_success() {
            return Err(AuthError::Profile(format!("HTTP {status}: {body}")));
        }
        let profile: Value = serde_json::from_str(&body)
            .map_err(|e| AuthError::Profile(format!("unexpected response: {e}")))?;
        if !profile.is_object() {
            return Err(AuthError::Profile("profile is not a JSON object".into()));
        }
        Ok(profile)
    }

    /// Primary address from the email list, or the provider's no-reply
    /// address when the list is unavailable or has no primary entry.
    async fn primary_email(&self, url: &str, access_token: &str, login: &str) -> String {
        let fallback = || {
            tracing::warn!(login, "no primary email available, using noreply address");
            noreply_email(login)
        };

        let resp = match self
            .http
            .get(url)
            .header(
                reqwest::header::AUTHORIZATION,
                self.provider.auth_scheme.header_value(access_token),
            )
            .header(reqwest::header::ACCEPT, "application/json")
            .send()
            .await
        {
            Ok(resp) if resp.status().is_success() => resp,
            Ok(resp) => {
                tracing::debug!(status = %resp.status(), "email list request rejected");
                return fallback();
            }
            Err(error) => {
                tracing::debug!(%error, "email list request failed");
                return fallback();
            }
        };

        match resp.json::<Vec<EmailEntry>>().await {
            Ok(entries) => entries
                .into_iter()
                .find(|e| e.primary)
                .map_or_else(fallback, |e| e.email),
            Err(error) => {
                tracing::debug!(%error, "email list unparseable");
                fallback()
            }
        }
    }
}

/// GitHub's no-reply address for a login.
#[must_use]
pub fn noreply_email(login: &str) -> String {
    format!("{login}@users.noreply.github.com")
}
