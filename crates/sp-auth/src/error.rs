use thiserror::Error;

#[derive(Debug, Error)]
pub enum AuthError {
    #[error("not signed in, run `spl auth login`")]
    NotAuthenticated,

    #[error("browser login failed: {0}")]
    BrowserFlowFailed(String),

    #[error("OAuth callback failed: {0}")]
    Callback(String),

    #[error("token exchange failed: {0}")]
    TokenExchange(String),

    #[error("profile fetch failed: {0}")]
    Profile(String),

    #[error("session store error: {0}")]
    SessionStore(String),

    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),
}
