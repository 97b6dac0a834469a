//! Cross-cutting error types for the planner.
//!
//! Domain-specific errors (e.g., `DatabaseError`, `AuthError`) are defined in
//! their respective crates. All of them converge into `anyhow` in `sp-cli`.

use thiserror::Error;

/// Errors that can be raised by any planner crate.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum CoreError {
    /// Entity lookup returned no result.
    #[error("Entity not found: {entity_type} {id}")]
    NotFound { entity_type: String, id: String },

    /// A state machine transition was attempted that is not allowed.
    #[error("Invalid state transition: {entity_type} {id} from {from} to {to}")]
    InvalidTransition {
        entity_type: String,
        id: String,
        from: String,
        to: String,
    },

    /// Data failed validation (format, range, constraints).
    #[error("Validation error: {0}")]
    Validation(String),
}
