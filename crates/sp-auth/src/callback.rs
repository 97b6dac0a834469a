//! Local HTTP listener that receives the OAuth redirect.

use std::time::{Duration, Instant};

use crate::error::AuthError;

const SUCCESS_PAGE: &str = "<html><body><h1>Authentication Successful!</h1>\
                            <p>You can close this window and return to the terminal.</p></body></html>";
const FAILURE_PAGE: &str = "<html><body><h1>Authentication Failed</h1>\
                            <p>Check the terminal for details.</p></body></html>";

/// A bound callback listener waiting on one path.
pub struct CallbackListener {
    server: tiny_http::Server,
    path: String,
    port: u16,
}

impl CallbackListener {
    /// Bind `host:port` (port 0 picks a free port) and listen for `path`.
    ///
    /// # Errors
    ///
    /// Returns `AuthError::Callback` if the address is in use or invalid.
    pub fn bind(host: &str, port: u16, path: &str) -> Result<Self, AuthError> {
        let server = tiny_http::Server::http((host, port))
            .map_err(|e| AuthError::Callback(format!("failed to bind {host}:{port}: {e}")))?;
        let port = server
            .server_addr()
            .to_ip()
            .map(|a| a.port())
            .ok_or_else(|| AuthError::Callback("listener has no TCP port".into()))?;
        Ok(Self {
            server,
            path: path.to_string(),
            port,
        })
    }

    #[must_use]
    pub const fn port(&self) -> u16 {
        self.port
    }

    /// Block until the provider redirects to our path, and return the code.
    ///
    /// Requests for other paths (favicon and the like) get `204` and are
    /// ignored. When `expected_state` is set, a callback carrying a different
    /// `state` fails the login.
    ///
    /// # Errors
    ///
    /// Returns `AuthError::Callback` on timeout, state mismatch, or a
    /// callback without a code.
    pub fn wait_for_code(
        self,
        timeout: Duration,
        expected_state: Option<&str>,
    ) -> Result<String, AuthError> {
        let deadline = Instant::now() + timeout;
        let timed_out = || {
            AuthError::Callback(format!(
                "no callback received within {}s",
                timeout.as_secs()
            ))
        };

        loop {
            let remaining = deadline.saturating_duration_since(Instant::now());
            if remaining.is_zero() {
                return Err(timed_out());
            }

            let request = match self.server.recv_timeout(remaining) {
                Ok(Some(req)) => req,
                Ok(None) => return Err(timed_out()),
                Err(e) => return Err(AuthError::Callback(format!("recv error: {e}"))),
            };

            let url = request.url().to_string();
            let route = url.split('?').next().unwrap_or_default();
            if route != self.path {
                let _ = request.respond(tiny_http::Response::empty(tiny_http::StatusCode(204)));
                continue;
            }

            let outcome = check_callback(&url, expected_state);
            let page = if outcome.is_ok() {
                SUCCESS_PAGE
            } else {
                FAILURE_PAGE
            };
            let _ = request.respond(html(page));
            return outcome;
        }
    }
}

fn html(body: &str) -> tiny_http::Response<std::io::Cursor<Vec<u8>>> {
    let response = tiny_http::Response::from_string(body);
    match tiny_http::Header::from_bytes("Content-Type", "text/html; charset=utf-8") {
        Ok(header) => response.with_header(header),
        Err(()) => response,
    }
}

fn check_callback(url: &str, expected_state: Option<&str>) -> Result<String, AuthError> {
    if let Some(error) = query_param(url, "error") {
        return Err(AuthError::Callback(format!("provider returned error: {error}")));
    }
    if let Some(expected) = expected_state
        && query_param(url, "state").as_deref() != Some(expected)
    {
        return Err(AuthError::Callback("state mismatch in callback".into()));
    }
    extract_code(url).ok_or_else(|| AuthError::Callback("callback has no code".into()))
}

/// The text after the first `code=` up to the next `&`, percent-decoded.
///
/// The token request form-encodes the code again, so returning the raw
/// query text would double-encode codes such as Google's `4/0Ab...`.
#[must_use]
pub fn extract_code(url: &str) -> Option<String> {
    let (_, rest) = url.split_once("code=")?;
    let code = rest.split('&').next().unwrap_or_default();
    if code.is_empty() {
        None
    } else {
        Some(urlencoding::decode(code).map_or_else(|_| code.to_string(), std::borrow::Cow::into_owned))
    }
}

fn query_param(url: &str, key: &str) -> Option<String> {
    let (_, query) = url.split_once('?')?;
    query.split('&').find_map(|pair| {
        let (k, v) = pair.split_once('=')?;
        (k == key).then(|| {
            urlencoding::decode(v).map_or_else(|_| v.to_string(), std::borrow::Cow::into_owned)
        })
    })
}
