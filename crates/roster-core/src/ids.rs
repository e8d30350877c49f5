//! Structured resource identifiers.
//!
//! Every stored user and group carries a [`ResourceId`] assigned by the store.
//! Identifiers are UUIDs held in their native form, so collections can key on
//! them directly.

use std::fmt;
use std::str::FromStr;

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::errors::InvalidIdentifier;

/// Opaque, immutable identifier of a stored user or group.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize, JsonSchema,
)]
#[serde(transparent)]
pub struct ResourceId(Uuid);

impl ResourceId {
    /// Generate a fresh random identifier.
    #[must_use]
    pub fn generate() -> Self {
        Self(Uuid::new_v4())
    }

    #[must_use]
    pub const fn from_uuid(uuid: Uuid) -> Self {
        Self(uuid)
    }

    #[must_use]
    pub const fn as_uuid(&self) -> &Uuid {
        &self.0
    }

    /// Parse an identifier from its textual form.
    ///
    /// # Errors
    ///
    /// Returns [`InvalidIdentifier`] if `value` is not a UUID.
    pub fn parse(value: &str) -> Result<Self, InvalidIdentifier> {
        Uuid::parse_str(value)
            .map(Self)
            .map_err(|_| InvalidIdentifier {
                value: value.to_string(),
            })
    }
}

impl fmt::Display for ResourceId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.0.hyphenated(), f)
    }
}

impl FromStr for ResourceId {
    type Err = InvalidIdentifier;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl From<Uuid> for ResourceId {
    fn from(value: Uuid) -> Self {
        Self(value)
    }
}
