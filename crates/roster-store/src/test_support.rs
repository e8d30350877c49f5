//! Shared test utilities for roster-store unit tests.

pub(crate) mod helpers {
    use roster_core::records::{GroupRecord, UserRecord};

    use crate::InMemoryStore;

    /// Create an empty store.
    pub fn test_store() -> InMemoryStore {
        InMemoryStore::new()
    }

    /// An active user with only the secondary key and a work email set.
    pub fn user(user_name: &str) -> UserRecord {
        UserRecord {
            active: true,
            mail: Some(format!("{user_name}@example.com")),
            ..UserRecord::new(user_name)
        }
    }

    pub fn group(display_name: &str) -> GroupRecord {
        GroupRecord::new(display_name)
    }
}
