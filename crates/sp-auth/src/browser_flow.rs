use std::time::Duration;

use crate::callback::CallbackListener;
use crate::error::AuthError;
use crate::oauth_client::{OAuthClient, UserProfile};

/// Execute the browser-based OAuth login flow.
///
/// 1. Bind the callback listener on `host:port`
/// 2. Open the browser at the provider's authorization page (printing the
///    URL when no browser can be launched)
/// 3. Wait for the redirect in `spawn_blocking` (`tiny_http::recv` blocks)
/// 4. Exchange the code and load the profile
///
/// # Errors
///
/// Returns `AuthError::Callback` if the listener cannot bind or the callback
/// times out, `AuthError::BrowserFlowFailed` if the state nonce cannot be
/// generated, and any error from [`OAuthClient::authenticate`].
pub async fn login(
    client: &OAuthClient,
    host: &str,
    port: u16,
    timeout: Duration,
) -> Result<UserProfile, AuthError> {
    let listener = CallbackListener::bind(host, port, client.provider().callback_path)?;
    let state = new_state()?;
    let url = client.authorization_url(Some(&state));

    tracing::info!(provider = %client.provider().provider, port = listener.port(), "starting browser login");
    eprintln!("Opening browser to: {url}");
    if let Err(error) = open::that(&url) {
        tracing::warn!(%error, "failed to open browser");
        eprintln!("Open the URL above manually, then return here.");
    }

    let code = tokio::task::spawn_blocking(move || listener.wait_for_code(timeout, Some(&state)))
        .await
        .map_err(|e| AuthError::BrowserFlowFailed(format!("spawn_blocking join: {e}")))??;

    client.authenticate(&code).await
}

/// Random 16-byte hex nonce used as the OAuth `state`.
fn new_state() -> Result<String, AuthError> {
    let mut bytes = [0u8; 16];
    getrandom::fill(&mut bytes)
        .map_err(|e| AuthError::BrowserFlowFailed(format!("failed to generate state: {e}")))?;
    Ok(bytes.iter().map(|b| format!("{b:02x}")).collect())
}
