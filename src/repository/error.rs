use std::fmt;

use serde::{Deserialize, Serialize};

/// Machine-readable code identifying each repository error kind.
///
/// Serializes as the same SCREAMING_SNAKE_CASE string [`as_str`](ErrorCode::as_str)
/// renders.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ErrorCode {
    NotFound,
    AlreadyExists,
    ValidationError,
}

impl ErrorCode {
    /// The canonical string form of the code.
    pub fn as_str(&self) -> &'static str {
        match self {
            ErrorCode::NotFound => "NOT_FOUND",
            ErrorCode::AlreadyExists => "ALREADY_EXISTS",
            ErrorCode::ValidationError => "VALIDATION_ERROR",
        }
    }
}

impl fmt::Display for ErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Error type for repository operations.
///
/// The variant set is closed: every failure a repository reports is one of
/// these, built through the named constructors. Identifiers are stringified
/// at construction so the error stays non-generic whatever the entity's id
/// type is.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RepositoryError {
    /// No entity is stored under the requested id.
    NotFound { id: String },
    /// An entity is already stored under the id being saved.
    AlreadyExists { id: String },
    /// The entity failed a caller-defined validation rule.
    Validation { message: String },
}

impl RepositoryError {
    /// A lookup found nothing under `id`.
    pub fn not_found(id: impl fmt::Display) -> Self {
        RepositoryError::NotFound { id: id.to_string() }
    }

    /// An insert collided with an entity already stored under `id`.
    pub fn already_exists(id: impl fmt::Display) -> Self {
        RepositoryError::AlreadyExists { id: id.to_string() }
    }

    /// A caller-defined validation failure; `message` is kept verbatim.
    pub fn validation_error(message: impl Into<String>) -> Self {
        RepositoryError::Validation {
            message: message.into(),
        }
    }

    /// The machine-readable code for this error.
    pub fn code(&self) -> ErrorCode {
        match self {
            RepositoryError::NotFound { .. } => ErrorCode::NotFound,
            RepositoryError::AlreadyExists { .. } => ErrorCode::AlreadyExists,
            RepositoryError::Validation { .. } => ErrorCode::ValidationError,
        }
    }

    /// The human-readable message, identical to what `Display` renders.
    pub fn message(&self) -> String {
        self.to_string()
    }
}

impl fmt::Display for RepositoryError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RepositoryError::NotFound { id } => {
                write!(f, "entity with id '{}' not found", id)
            }
            RepositoryError::AlreadyExists { id } => {
                write!(f, "entity with id '{}' already exists", id)
            }
            RepositoryError::Validation { message } => f.write_str(message),
        }
    }
}

impl std::error::Error for RepositoryError {}
