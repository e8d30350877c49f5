//! Repository contracts for users and groups.
//!
//! Each module implements its trait for `InMemoryStore`. Any backend that
//! implements both traits can stand behind the connector, provided it keeps
//! these semantics:
//! - `create_*` assigns a fresh identifier and fails `Conflict` when a live
//!   record holds the same secondary key (exact, case-sensitive).
//! - `replace_*` requires an existing identifier (`NotFound`), fails
//!   `Conflict` when a *different* record holds the secondary key, and
//!   otherwise replaces the whole record (last write wins).
//! - `delete_*` fails `NotFound` when the identifier is absent.
//! - `query_*` takes at most one equality filter on an indexed attribute and
//!   compares values case-insensitively.
//! - A failed call leaves the stored state unchanged.

pub mod group;
pub mod user;

use roster_core::filter::Filter;
use roster_core::ids::ResourceId;
use roster_core::records::{GroupRecord, UserRecord};

use crate::error::StoreError;

/// Storage of user records, unique on `user_name`.
pub trait UserRepository: Send + Sync {
    /// Store a new user under a fresh identifier; any incoming id is replaced.
    fn create_user(&self, record: UserRecord) -> Result<UserRecord, StoreError>;

    fn retrieve_user(&self, id: ResourceId) -> Result<UserRecord, StoreError>;

    /// Replace the user identified by `record.id`.
    fn replace_user(&self, record: UserRecord) -> Result<UserRecord, StoreError>;

    fn delete_user(&self, id: ResourceId) -> Result<(), StoreError>;

    /// Users matching `filter` (`userName` or `externalId`), or all users.
    fn query_users(&self, filter: Option<&Filter>) -> Result<Vec<UserRecord>, StoreError>;

    /// Number of live users.
    fn count_users(&self) -> Result<usize, StoreError>;
}

/// Storage of group records, unique on `display_name`, with duplicate-free
/// membership lists.
pub trait GroupRepository: Send + Sync {
    /// Store a new group under a fresh identifier with members deduplicated.
    fn create_group(&self, record: GroupRecord) -> Result<GroupRecord, StoreError>;

    fn retrieve_group(&self, id: ResourceId) -> Result<GroupRecord, StoreError>;

    /// Replace the group identified by `record.id`.
    ///
    /// Members are deduplicated only when the ordered list differs from the
    /// stored one.
    fn replace_group(&self, record: GroupRecord) -> Result<GroupRecord, StoreError>;

    fn delete_group(&self, id: ResourceId) -> Result<(), StoreError>;

    /// Groups matching `filter` (`displayName` or `externalId`), or all groups.
    fn query_groups(&self, filter: Option<&Filter>) -> Result<Vec<GroupRecord>, StoreError>;

    /// Number of live groups.
    fn count_groups(&self) -> Result<usize, StoreError>;
}
