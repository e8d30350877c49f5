//! # roster-store
//!
//! Keyed storage of user and group records for Roster.
//!
//! The store owns identifier assignment, secondary-key uniqueness
//! (`userName` for users, `displayName` for groups), existence checks, and
//! group membership normalization. Its contract is the pair of traits in
//! [`repos`]; [`InMemoryStore`] is the reference implementation.
//!
//! A durable backend is a drop-in replacement when it implements the same
//! traits with the same conflict semantics, using a conditional insert/update
//! keyed on the secondary key (a unique index on `users.user_name` and
//! `groups.display_name`) instead of a process-wide lock.

pub mod error;
mod collection;
mod helpers;
pub mod membership;
pub mod repos;

#[cfg(test)]
mod test_support;

pub use error::StoreError;
pub use repos::{GroupRepository, UserRepository};

use roster_core::records::{GroupRecord, UserRecord};

use collection::Collection;

/// In-memory directory of users and groups.
///
/// Each collection has its own reader-writer lock: a mutation holds the write
/// lock across its uniqueness check and write, so two concurrent creates with
/// the same secondary key cannot both succeed. Reads share the lock and run
/// concurrently. The store is meant to be constructed once by the host and
/// injected into the connector.
#[derive(Debug, Default)]
pub struct InMemoryStore {
    users: Collection<UserRecord>,
    groups: Collection<GroupRecord>,
}

impl InMemoryStore {
    /// Create an empty store.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }
}
