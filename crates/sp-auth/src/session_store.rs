//! Who is signed in.
//!
//! The CLI remembers the signed-in user as a small JSON file at
//! `~/.studyplan/session` (mode 0600 on Unix). The access token itself lives
//! in the database row, not here.

use std::fs;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::error::AuthError;

const SESSION_FILE_NAME: &str = "session";

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Session {
    pub user_id: i64,
    pub email: String,
}

/// Default session file location.
///
/// # Errors
///
/// Returns `AuthError::SessionStore` if the home directory is unknown.
pub fn session_path() -> Result<PathBuf, AuthError> {
    dirs::home_dir()
        .map(|h| h.join(".studyplan").join(SESSION_FILE_NAME))
        .ok_or_else(|| AuthError::SessionStore("home directory not found".into()))
}

/// Persist the session at the default location.
///
/// # Errors
///
/// Returns `AuthError::SessionStore` if the file cannot be written.
pub fn store(session: &Session) -> Result<(), AuthError> {
    store_at(&session_path()?, session)
}

/// Load the session from the default location, if any.
#[must_use]
pub fn load() -> Option<Session> {
    session_path().ok().and_then(|p| load_from(&p))
}

/// Remove the session file at the default location.
///
/// # Errors
///
/// Returns `AuthError::SessionStore` if the file exists but cannot be removed.
pub fn delete() -> Result<(), AuthError> {
    delete_at(&session_path()?)
}

/// Persist a session to `path`, creating the parent directory (0700).
///
/// # Errors
///
/// Returns `AuthError::SessionStore` on any filesystem failure.
pub fn store_at(path: &Path, session: &Session) -> Result<(), AuthError> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)
            .map_err(|e| AuthError::SessionStore(format!("mkdir {}: {e}", parent.display())))?;
        #[cfg(unix)]
        {
            use std::os::unix::fs::PermissionsExt;
            if let Err(e) = fs::set_permissions(parent, fs::Permissions::from_mode(0o700)) {
                tracing::warn!("failed to chmod 0700 {}: {e}", parent.display());
            }
        }
    }

    let json = serde_json::to_string(session)
        .map_err(|e| AuthError::SessionStore(format!("serialize session: {e}")))?;
    fs::write(path, json)
        .map_err(|e| AuthError::SessionStore(format!("write {}: {e}", path.display())))?;

    #[cfg(unix)]
    {
        use std::os::unix::fs::PermissionsExt;
        fs::set_permissions(path, fs::Permissions::from_mode(0o600))
            .map_err(|e| AuthError::SessionStore(format!("chmod {}: {e}", path.display())))?;
    }

    tracing::debug!(user_id = session.user_id, "session stored");
    Ok(())
}

/// Read a session from `path`. Missing or unreadable files mean no session.
#[must_use]
pub fn load_from(path: &Path) -> Option<Session> {
    let raw = fs::read_to_string(path).ok()?;
    match serde_json::from_str(&raw) {
        Ok(session) => Some(session),
        Err(error) => {
            tracing::warn!(%error, path = %path.display(), "ignoring malformed session file");
            None
        }
    }
}

/// Remove the session file at `path` if it exists.
///
/// # Errors
///
/// Returns `AuthError::SessionStore` if removal fails.
pub fn delete_at(path: &Path) -> Result<(), AuthError> {
    if path.exists() {
        fs::remove_file(path)
            .map_err(|e| AuthError::SessionStore(format!("delete {}: {e}", path.display())))?;
    }
    Ok(())
}
