//! # sp-auth
//!
//! OAuth sign-in for the study planner CLI.
//!
//! One [`OAuthClient`] serves both identity providers; the differences live
//! in a [`ProviderConfig`] (GitHub for the commit track, Google for the
//! subject track). The browser flow receives the authorization code on a
//! local `tiny_http` listener, and the signed-in identity is remembered in a
//! small session file under `~/.studyplan`.

pub mod browser_flow;
pub mod callback;
pub mod error;
pub mod oauth_client;
pub mod provider;
pub mod session_store;

pub use error::AuthError;
pub use oauth_client::{OAuthClient, UserProfile};
pub use provider::ProviderConfig;
pub use session_store::Session;

/// Forget the signed-in user.
///
/// # Errors
///
/// Returns `AuthError::SessionStore` if the session file cannot be removed.
pub fn logout() -> Result<(), AuthError> {
    session_store::delete()
}
