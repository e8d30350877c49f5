//! Seam for the external patch-application engine.

use roster_core::canonical::Resource;
use thiserror::Error;

/// Applies a partial-update document to a canonical resource in place.
///
/// The connector retrieves the current resource, hands it to the engine, and
/// commits the result through the replace path, so uniqueness and existence
/// rules apply to patches exactly as they do to replaces. The engine must
/// not change the resource kind; the identifier is restored after `apply`.
pub trait PatchEngine {
    /// The patch document understood by this engine.
    type Document;

    /// Apply `document` to `resource`.
    ///
    /// # Errors
    ///
    /// Returns `PatchError::Invalid` when the document cannot be applied to
    /// this resource.
    fn apply(&self, resource: &mut Resource, document: &Self::Document) -> Result<(), PatchError>;
}

/// Errors reported by a [`PatchEngine`].
#[derive(Debug, Error)]
pub enum PatchError {
    /// The document is malformed or targets attributes the resource lacks.
    #[error("Invalid patch: {0}")]
    Invalid(String),

    #[error(transparent)]
    Other(#[from] anyhow::Error),
}
