//! User repository: create, retrieve, replace, delete, query.

use roster_core::filter::Filter;
use roster_core::ids::ResourceId;
use roster_core::records::UserRecord;

use crate::InMemoryStore;
use crate::error::StoreError;
use crate::repos::UserRepository;

impl UserRepository for InMemoryStore {
    fn create_user(&self, record: UserRecord) -> Result<UserRecord, StoreError> {
        self.users.create(record, |_| {})
    }

    fn retrieve_user(&self, id: ResourceId) -> Result<UserRecord, StoreError> {
        self.users.retrieve(id)
    }

    fn replace_user(&self, record: UserRecord) -> Result<UserRecord, StoreError> {
        self.users.replace(record, |_, _| {})
    }

    fn delete_user(&self, id: ResourceId) -> Result<(), StoreError> {
        self.users.delete(id)
    }

    fn query_users(&self, filter: Option<&Filter>) -> Result<Vec<UserRecord>, StoreError> {
        self.users.query(filter)
    }

    fn count_users(&self) -> Result<usize, StoreError> {
        Ok(self.users.len())
    }
}
