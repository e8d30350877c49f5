//! Outward error taxonomy handed to the provisioning engine.
//!
//! Every failure from the store, the projector, or the patch engine is
//! translated here. Callers match on [`ConnectorError::kind`] rather than on
//! messages.

use std::fmt;

use roster_core::errors::ProjectionError;
use roster_store::StoreError;
use thiserror::Error;

use crate::patch::PatchError;

#[derive(Debug, Error)]
pub enum ConnectorError {
    /// The secondary key is held by another live resource.
    #[error("Conflict: {0}")]
    Conflict(String),

    /// No resource with the requested identifier exists.
    #[error("Not found: {0}")]
    NotFound(String),

    /// A required field is missing or empty, or an identifier is malformed.
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    /// A group member references a principal that is not a user.
    #[error("Invalid member type: {0}")]
    InvalidMemberType(String),

    /// The query asks for something the directory cannot serve.
    #[error("Unsupported: {0}")]
    Unsupported(String),

    /// Catch-all for unanticipated failures.
    #[error(transparent)]
    Unknown(#[from] anyhow::Error),
}

/// Discriminant of [`ConnectorError`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorKind {
    Conflict,
    NotFound,
    InvalidInput,
    InvalidMemberType,
    Unsupported,
    Unknown,
}

impl ErrorKind {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Conflict => "conflict",
            Self::NotFound => "not_found",
            Self::InvalidInput => "invalid_input",
            Self::InvalidMemberType => "invalid_member_type",
            Self::Unsupported => "unsupported",
            Self::Unknown => "unknown",
        }
    }
}

impl fmt::Display for ErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl ConnectorError {
    #[must_use]
    pub const fn kind(&self) -> ErrorKind {
        match self {
            Self::Conflict(_) => ErrorKind::Conflict,
            Self::NotFound(_) => ErrorKind::NotFound,
            Self::InvalidInput(_) => ErrorKind::InvalidInput,
            Self::InvalidMemberType(_) => ErrorKind::InvalidMemberType,
            Self::Unsupported(_) => ErrorKind::Unsupported,
            Self::Unknown(_) => ErrorKind::Unknown,
        }
    }

    pub(crate) fn invalid_input(message: impl Into<String>) -> Self {
        let message = message.into();
        tracing::debug!(%message, "request rejected");
        Self::InvalidInput(message)
    }
}

impl From<StoreError> for ConnectorError {
    fn from(error: StoreError) -> Self {
        match error {
            StoreError::Conflict { .. } => Self::Conflict(error.to_string()),
            StoreError::NotFound { .. } => Self::NotFound(error.to_string()),
            StoreError::MissingIdentifier { .. } => Self::InvalidInput(error.to_string()),
            StoreError::UnsupportedAttribute { .. } | StoreError::UnsupportedOperator { .. } => {
                Self::Unsupported(error.to_string())
            }
            StoreError::Other(source) => {
                tracing::warn!(error = %source, "store failure");
                Self::Unknown(source)
            }
        }
    }
}

impl From<ProjectionError> for ConnectorError {
    fn from(error: ProjectionError) -> Self {
        match error {
            ProjectionError::InvalidIdentifier(_) => Self::InvalidInput(error.to_string()),
            ProjectionError::InvalidMemberType { .. } => {
                Self::InvalidMemberType(error.to_string())
            }
        }
    }
}

impl From<PatchError> for ConnectorError {
    fn from(error: PatchError) -> Self {
        match error {
            PatchError::Invalid(message) => Self::InvalidInput(message),
            PatchError::Other(source) => {
                tracing::warn!(error = %source, "patch engine failure");
                Self::Unknown(source)
            }
        }
    }
}
