//! # sp-config
//!
//! Layered configuration loading for the study planner using figment.
//!
//! Configuration sources (in priority order, highest wins):
//! 1. Environment variables (`STUDYPLAN_*` prefix, `__` as separator)
//! 2. Project-level `.studyplan/config.toml`
//! 3. User-level `~/.config/studyplan/config.toml`
//! 4. Built-in defaults
//!
//! # Environment Variable Mapping
//!
//! Figment maps `STUDYPLAN_GITHUB__CLIENT_ID` -> `github.client_id`,
//! `STUDYPLAN_CALLBACK__PORT` -> `callback.port`, etc.
//! The `__` (double underscore) separates nested config sections.
//!
//! # Usage
//!
//! ```no_run
//! use sp_config::PlannerConfig;
//!
//! let config = PlannerConfig::load_with_dotenv().expect("config");
//! if config.github.is_configured() {
//!     println!("GitHub login available on port {}", config.callback.port);
//! }
//! ```

mod callback;
mod database;
mod error;
mod general;
mod oauth;
mod session;

pub use callback::CallbackConfig;
pub use database::DatabaseConfig;
pub use error::ConfigError;
pub use general::GeneralConfig;
pub use oauth::{GithubConfig, GoogleConfig};
pub use session::SessionConfig;

use figment::{
    Figment,
    providers::{Env, Format, Serialized, Toml},
};
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Name of the per-user data directory under `$HOME`.
const DATA_DIR_NAME: &str = ".studyplan";

#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct PlannerConfig {
    #[serde(default)]
    pub database: DatabaseConfig,
    #[serde(default)]
    pub github: GithubConfig,
    #[serde(default)]
    pub google: GoogleConfig,
    #[serde(default)]
    pub callback: CallbackConfig,
    #[serde(default)]
    pub session: SessionConfig,
    #[serde(default)]
    pub general: GeneralConfig,
}

impl PlannerConfig {
    /// Load configuration from all sources (TOML files + environment variables).
    ///
    /// Does NOT call `dotenvy` -- use [`Self::load_with_dotenv`] if you need
    /// `.env` file loading.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::Figment` if a source cannot be parsed or a value
    /// has the wrong type.
    pub fn load() -> Result<Self, ConfigError> {
        Self::figment().extract().map_err(ConfigError::from)
    }

    /// Load configuration with `.env` file support from the current directory.
    ///
    /// # Errors
    ///
    /// See [`Self::load`].
    pub fn load_with_dotenv() -> Result<Self, ConfigError> {
        let _ = dotenvy::dotenv();
        Self::load()
    }

    /// Build the figment provider chain.
    ///
    /// Public so tests can inspect the figment directly or add providers on top.
    pub fn figment() -> Figment {
        let mut figment = Figment::from(Serialized::defaults(Self::default()));

        // Layer 1: User-global config
        if let Some(global_path) = Self::global_config_path()
            && global_path.exists()
        {
            figment = figment.merge(Toml::file(global_path));
        }

        // Layer 2: Project-local config
        let local_path = PathBuf::from(".studyplan/config.toml");
        if local_path.exists() {
            figment = figment.merge(Toml::file(local_path));
        }

        // Layer 3: Environment variables (highest priority)
        figment.merge(Env::prefixed("STUDYPLAN_").split("__"))
    }

    /// Fail unless the provider's OAuth credentials are present.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::NotConfigured` naming the section.
    pub fn require_provider(&self, provider: &str) -> Result<(), ConfigError> {
        let configured = match provider {
            "github" => self.github.is_configured(),
            "google" => self.google.is_configured(),
            _ => false,
        };
        if configured {
            Ok(())
        } else {
            Err(ConfigError::NotConfigured {
                section: provider.to_string(),
            })
        }
    }

    /// Path to the user-global config file.
    fn global_config_path() -> Option<PathBuf> {
        dirs::config_dir().map(|p| p.join("studyplan").join("config.toml"))
    }
}

/// `~/.studyplan`, home of the default database and the session file.
#[must_use]
pub fn data_dir() -> Option<PathBuf> {
    dirs::home_dir().map(|home| home.join(DATA_DIR_NAME))
}
