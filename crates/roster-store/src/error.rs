//! Store error types for roster-store.

use roster_core::enums::{ComparisonOperator, ResourceKind};
use roster_core::ids::ResourceId;
use thiserror::Error;

/// Errors from directory store operations.
#[derive(Debug, Error)]
pub enum StoreError {
    /// Another live record already holds the secondary key.
    #[error("a {kind} with {attribute} '{key}' already exists", attribute = .kind.secondary_key_attribute())]
    Conflict { kind: ResourceKind, key: String },

    /// No record with this identifier exists.
    #[error("no {kind} with id {id}")]
    NotFound { kind: ResourceKind, id: ResourceId },

    /// A replace was attempted with a record that carries no identifier.
    #[error("{kind} record has no identifier")]
    MissingIdentifier { kind: ResourceKind },

    /// The filter targets an attribute that is not indexed for this kind.
    #[error("filtering {kind} resources on '{attribute}' is not supported")]
    UnsupportedAttribute {
        kind: ResourceKind,
        attribute: String,
    },

    /// The filter uses an operator other than equality.
    #[error("filter operator '{operator}' is not supported")]
    UnsupportedOperator { operator: ComparisonOperator },

    /// Catch-all for unexpected backend failures.
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}
