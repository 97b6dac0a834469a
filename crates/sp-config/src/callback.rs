//! Local OAuth redirect listener configuration.

use serde::{Deserialize, Serialize};

fn default_host() -> String {
    "127.0.0.1".to_string()
}

const fn default_port() -> u16 {
    8888
}

const fn default_timeout_secs() -> u64 {
    120
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct CallbackConfig {
    /// Interface the listener binds to.
    #[serde(default = "default_host")]
    pub host: String,

    /// Fixed port. Must match the redirect URIs registered with the providers.
    #[serde(default = "default_port")]
    pub port: u16,

    /// How long to wait for the browser redirect, in seconds.
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,
}

impl Default for CallbackConfig {
    fn default() -> Self {
        Self {
            host: default_host(),
            port: default_port(),
            timeout_secs: default_timeout_secs(),
        }
    }
}

impl CallbackConfig {
    /// `http://localhost:{port}`. Providers match redirect URIs literally, so
    /// this stays `localhost` even when binding `127.0.0.1`.
    #[must_use]
    pub fn redirect_base(&self) -> String {
        format!("http://localhost:{}", self.port)
    }

    /// `host:port` for binding.
    #[must_use]
    pub fn bind_addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}
