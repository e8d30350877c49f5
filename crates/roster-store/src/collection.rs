//! A lock-guarded keyed collection shared by the user and group repositories.

use std::collections::HashMap;

use parking_lot::RwLock;
use roster_core::filter::Filter;
use roster_core::ids::ResourceId;
use roster_core::records::{GroupRecord, UserRecord};

use crate::error::StoreError;
use crate::helpers::{Indexed, matches, resolve_attribute};

/// A record that the store can key and check for uniqueness.
pub(crate) trait Keyed: Indexed + Clone {
    fn id(&self) -> Option<ResourceId>;
    fn assign_id(&mut self, id: ResourceId);
    fn secondary_key(&self) -> &str;
}

impl Keyed for UserRecord {
    fn id(&self) -> Option<ResourceId> {
        self.id
    }

    fn assign_id(&mut self, id: ResourceId) {
        self.id = Some(id);
    }

    fn secondary_key(&self) -> &str {
        UserRecord::secondary_key(self)
    }
}

impl Keyed for GroupRecord {
    fn id(&self) -> Option<ResourceId> {
        self.id
    }

    fn assign_id(&mut self, id: ResourceId) {
        self.id = Some(id);
    }

    fn secondary_key(&self) -> &str {
        GroupRecord::secondary_key(self)
    }
}

#[derive(Debug)]
pub(crate) struct Collection<R> {
    records: RwLock<HashMap<ResourceId, R>>,
}

impl<R> Default for Collection<R> {
    fn default() -> Self {
        Self {
            records: RwLock::new(HashMap::new()),
        }
    }
}

impl<R: Keyed> Collection<R> {
    /// Insert `record` under a freshly generated identifier.
    ///
    /// `prepare` runs under the write lock after the uniqueness check, right
    /// before the record is stored.
    pub(crate) fn create(
        &self,
        mut record: R,
        prepare: impl FnOnce(&mut R),
    ) -> Result<R, StoreError> {
        let mut records = self.records.write();

        if records
            .values()
            .any(|existing| existing.secondary_key() == record.secondary_key())
        {
            tracing::debug!(kind = %R::KIND, key = record.secondary_key(), "create rejected: secondary key taken");
            return Err(StoreError::Conflict {
                kind: R::KIND,
                key: record.secondary_key().to_string(),
            });
        }

        let id = loop {
            let candidate = ResourceId::generate();
            if !records.contains_key(&candidate) {
                break candidate;
            }
        };
        record.assign_id(id);
        prepare(&mut record);
        records.insert(id, record.clone());

        tracing::debug!(kind = %R::KIND, %id, key = record.secondary_key(), "record created");
        Ok(record)
    }

    pub(crate) fn retrieve(&self, id: ResourceId) -> Result<R, StoreError> {
        self.records
            .read()
            .get(&id)
            .cloned()
            .ok_or(StoreError::NotFound { kind: R::KIND, id })
    }

    /// Replace the stored record with the same identifier.
    ///
    /// `normalize` receives the stored record and the replacement under the
    /// write lock, after existence and uniqueness have been checked.
    pub(crate) fn replace(
        &self,
        mut record: R,
        normalize: impl FnOnce(&R, &mut R),
    ) -> Result<R, StoreError> {
        let id = record
            .id()
            .ok_or(StoreError::MissingIdentifier { kind: R::KIND })?;

        let mut records = self.records.write();

        let Some(previous) = records.get(&id) else {
            tracing::debug!(kind = %R::KIND, %id, "replace rejected: unknown identifier");
            return Err(StoreError::NotFound { kind: R::KIND, id });
        };

        if records.values().any(|existing| {
            existing.id() != Some(id) && existing.secondary_key() == record.secondary_key()
        }) {
            tracing::debug!(kind = %R::KIND, %id, key = record.secondary_key(), "replace rejected: secondary key taken");
            return Err(StoreError::Conflict {
                kind: R::KIND,
                key: record.secondary_key().to_string(),
            });
        }

        normalize(previous, &mut record);
        records.insert(id, record.clone());

        tracing::debug!(kind = %R::KIND, %id, key = record.secondary_key(), "record replaced");
        Ok(record)
    }

    pub(crate) fn delete(&self, id: ResourceId) -> Result<(), StoreError> {
        if self.records.write().remove(&id).is_none() {
            return Err(StoreError::NotFound { kind: R::KIND, id });
        }
        tracing::debug!(kind = %R::KIND, %id, "record deleted");
        Ok(())
    }

    /// Snapshot of the live records matching `filter`, or all of them.
    /// Order is unspecified.
    pub(crate) fn query(&self, filter: Option<&Filter>) -> Result<Vec<R>, StoreError> {
        let records = self.records.read();
        let Some(filter) = filter else {
            return Ok(records.values().cloned().collect());
        };

        let attribute = resolve_attribute::<R>(filter)?;
        Ok(records
            .values()
            .filter(|record| matches(*record, attribute, filter))
            .cloned()
            .collect())
    }

    pub(crate) fn len(&self) -> usize {
        self.records.read().len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn keyed_secondary_key_matches_record_definition() {
        let user = UserRecord::new("alice");
        assert_eq!(Keyed::secondary_key(&user), user.secondary_key());

        let group = GroupRecord::new("admins");
        assert_eq!(Keyed::secondary_key(&group), group.secondary_key());
    }

    #[test]
    fn conflicting_create_leaves_collection_unchanged() {
        let users = Collection::<UserRecord>::default();
        users.create(UserRecord::new("alice"), |_| {}).unwrap();
        assert!(users.create(UserRecord::new("alice"), |_| {}).is_err());
        assert_eq!(users.len(), 1);
    }
}
