//! Error types for the Truth or Dare data engine.

use thiserror::Error;

/// A shared error type for the whole engine.
///
/// The store itself never surfaces these to callers (persistence failures
/// are logged and swallowed, invariant violations are silently rejected);
/// they exist at the substrate boundary and in the validation layer above
/// the store.
#[derive(Error, Debug, Clone)]
pub enum GameError {
    /// Entity not found error with type information
    #[error("Entity not found: {entity_type} '{id}'")]
    NotFound {
        entity_type: &'static str,
        id: String,
    },

    /// IO error (file system operations)
    #[error("IO error: {message}")]
    Io { message: String },

    /// Serialization/deserialization error
    #[error("Serialization error: {format} - {message}")]
    Serialization { format: String, message: String },

    /// Persistence substrate error
    #[error("Storage error: {0}")]
    Storage(String),

    /// Player name rejected by validation
    #[error("Invalid player name: {0}")]
    InvalidPlayerName(String),

    /// A player with the same name (case-insensitive) already exists
    #[error("A player named '{0}' already exists")]
    DuplicatePlayerName(String),
}

impl GameError {
    /// Creates a NotFound error
    pub fn not_found(entity_type: &'static str, id: impl Into<String>) -> Self {
        Self::NotFound {
            entity_type,
            id: id.into(),
        }
    }

    /// Creates an IO error
    pub fn io(message: impl Into<String>) -> Self {
        Self::Io {
            message: message.into(),
        }
    }

    /// Creates a Storage error
    pub fn storage(message: impl Into<String>) -> Self {
        Self::Storage(message.into())
    }

    /// Check if this is a NotFound error
    pub fn is_not_found(&self) -> bool {
        matches!(self, Self::NotFound { .. })
    }
}

impl From<std::io::Error> for GameError {
    fn from(err: std::io::Error) -> Self {
        Self::Io {
            message: format!("{} (kind: {:?})", err, err.kind()),
        }
    }
}

impl From<serde_json::Error> for GameError {
    fn from(err: serde_json::Error) -> Self {
        Self::Serialization {
            format: "JSON".to_string(),
            message: err.to_string(),
        }
    }
}

/// A type alias for `Result<T, GameError>`.
pub type Result<T> = std::result::Result<T, GameError>;
