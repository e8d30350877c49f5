//! # roster-connector
//!
//! The facade a provisioning engine calls to manage users and groups.
//!
//! [`Connector`] validates inbound canonical resources, projects them onto
//! internal records, drives the directory store, and projects results back.
//! It is the single place where store, projector, and patch-engine failures
//! become a [`ConnectorError`].
//!
//! # Usage
//!
//! ```
//! use roster_connector::Connector;
//! use roster_core::canonical::CanonicalUser;
//! use roster_core::projection::Projector;
//! use roster_store::InMemoryStore;
//!
//! let connector = Connector::new(InMemoryStore::new(), Projector::default());
//! let created = connector.create_user(CanonicalUser::new("alice")).unwrap();
//! assert!(created.id.is_some());
//! ```

pub mod error;
pub mod patch;
pub mod telemetry;

mod group;
mod resource;
mod user;

pub use error::{ConnectorError, ErrorKind};
pub use patch::{PatchEngine, PatchError};

use roster_config::ConnectorConfig;
use roster_core::enums::ResourceKind;
use roster_core::filter::{Filter, QueryParameters};
use roster_core::ids::ResourceId;
use roster_core::projection::Projector;

/// Facade over an injected directory store.
///
/// `S` implements `UserRepository` and/or `GroupRepository`; the per-kind
/// operations are available for whichever traits it implements. The
/// connector is `Send + Sync` whenever the store is, so a host can share one
/// instance across request handlers behind an `Arc`.
#[derive(Debug)]
pub struct Connector<S> {
    store: S,
    projector: Projector,
}

impl<S> Connector<S> {
    #[must_use]
    pub const fn new(store: S, projector: Projector) -> Self {
        Self { store, projector }
    }

    /// Build a connector whose projector follows `config`.
    #[must_use]
    pub const fn from_config(store: S, config: &ConnectorConfig) -> Self {
        Self::new(store, Projector::new(config.member_type_policy))
    }

    pub const fn store(&self) -> &S {
        &self.store
    }

    pub const fn projector(&self) -> &Projector {
        &self.projector
    }
}

/// Parse an inbound identifier.
fn parse_id(kind: ResourceKind, id: &str) -> Result<ResourceId, ConnectorError> {
    ResourceId::parse(id)
        .map_err(|error| ConnectorError::invalid_input(format!("{kind} identifier: {error}")))
}

/// Reject a missing or blank secondary key.
fn require_secondary_key(kind: ResourceKind, value: &str) -> Result<(), ConnectorError> {
    if value.trim().is_empty() {
        return Err(ConnectorError::invalid_input(format!(
            "{kind} requires a non-empty {}",
            kind.secondary_key_attribute()
        )));
    }
    Ok(())
}

/// Check the shape of `params` and return the single filter, if any.
fn single_filter(params: &QueryParameters) -> Result<Option<&Filter>, ConnectorError> {
    match params.filters.as_slice() {
        [] => Ok(None),
        [filter] => {
            if filter.attribute_path.trim().is_empty() {
                return Err(ConnectorError::invalid_input(
                    "filter has an empty attribute path",
                ));
            }
            if filter.value.trim().is_empty() {
                return Err(ConnectorError::invalid_input(format!(
                    "filter on '{}' has a blank value",
                    filter.attribute_path
                )));
            }
            Ok(Some(filter))
        }
        filters => {
            tracing::debug!(count = filters.len(), "query rejected: more than one filter");
            Err(ConnectorError::Unsupported(format!(
                "at most one filter is supported, got {}",
                filters.len()
            )))
        }
    }
}
