//! Cross-cutting error types for Roster.
//!
//! Store-specific errors (`StoreError`) live in `roster-store`. The outward
//! taxonomy handed to the provisioning engine (`ConnectorError`) is defined in
//! `roster-connector`, where all crate errors converge.

use thiserror::Error;

/// A resource identifier could not be parsed.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("Invalid resource identifier: '{value}'")]
pub struct InvalidIdentifier {
    pub value: String,
}

/// Errors raised while mapping canonical resources to internal records.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ProjectionError {
    /// The resource identifier or a member reference is not a valid identifier.
    #[error(transparent)]
    InvalidIdentifier(#[from] InvalidIdentifier),

    /// A group member references something other than a user.
    #[error("Group member {value} has unsupported type '{member_type}'")]
    InvalidMemberType { member_type: String, value: String },
}
