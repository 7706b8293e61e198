//! Unified error types for the moderation engine.
//!
//! `NotActionable` and `EntityNotFound` are recoverable signals: the collection
//! passed to the engine is never touched, so callers can keep showing it.

use crate::entities::ModerationStatus;
use thiserror::Error;

/// All errors produced by this crate.
#[derive(Debug, Error)]
pub enum Error {
    /// Configuration could not be read or parsed
    #[error("Configuration error: {message}")]
    Config {
        /// What went wrong
        message: String,
    },

    /// A moderation decision targeted an entity that is no longer pending
    #[error("{kind} {id} is not actionable: already {status}")]
    NotActionable {
        /// Entity kind label ("User", "Item")
        kind: &'static str,
        /// Entity id
        id: i64,
        /// The terminal status the entity is in
        status: ModerationStatus,
    },

    /// A moderation decision targeted an id that is not in the collection
    #[error("{kind} {id} not found")]
    EntityNotFound {
        /// Entity kind label ("User", "Item")
        kind: &'static str,
        /// Entity id
        id: i64,
    },

    /// Page number or page size out of range
    #[error("Invalid query: {message}")]
    InvalidQuery {
        /// What was wrong with the query
        message: String,
    },

    /// A submitted form field failed validation
    #[error("Invalid {field}: {message}")]
    Validation {
        /// Name of the offending field
        field: &'static str,
        /// Human-readable reason
        message: String,
    },

    /// The session lacks the capability for the requested action
    #[error("User '{username}' is not allowed to moderate")]
    Unauthorized {
        /// Username of the session that attempted the action
        username: String,
    },

    /// Unrecognised enum value in text input
    #[error("Unknown {what}: '{value}'")]
    Parse {
        /// Which kind of value was being parsed
        what: &'static str,
        /// The rejected input
        value: String,
    },
}

/// Convenience `Result` type
pub type Result<T> = std::result::Result<T, Error>;
