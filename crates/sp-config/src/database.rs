//! Local database configuration.

use std::path::PathBuf;

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct DatabaseConfig {
    /// Path to the libSQL database file. Empty means `~/.studyplan/planner.db`.
    #[serde(default)]
    pub path: String,
}

impl DatabaseConfig {
    /// Resolve the database file path, falling back to the per-user default.
    ///
    /// Returns `None` only when no path is configured and the home directory
    /// cannot be determined.
    #[must_use]
    pub fn resolved_path(&self) -> Option<PathBuf> {
        if self.path.is_empty() {
            crate::data_dir().map(|dir| dir.join("planner.db"))
        } else {
            Some(PathBuf::from(&self.path))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn explicit_path_wins() {
        let config = DatabaseConfig {
            path: "/tmp/planner-test.db".into(),
        };
        assert_eq!(
            config.resolved_path(),
            Some(PathBuf::from("/tmp/planner-test.db"))
        );
    }

    #[test]
    fn default_path_is_under_data_dir() {
        let config = DatabaseConfig::default();
        if let Some(path) = config.resolved_path() {
            assert!(path.ends_with(".studyplan/planner.db"));
        }
    }
}
