//! Group repository: create, retrieve, replace, delete, query, with
//! membership normalization.

use roster_core::filter::Filter;
use roster_core::ids::ResourceId;
use roster_core::records::GroupRecord;

use crate::InMemoryStore;
use crate::error::StoreError;
use crate::membership::{dedup_members, normalize_members};
use crate::repos::GroupRepository;

impl GroupRepository for InMemoryStore {
    fn create_group(&self, record: GroupRecord) -> Result<GroupRecord, StoreError> {
        self.groups
            .create(record, |group| dedup_members(&mut group.members))
    }

    fn retrieve_group(&self, id: ResourceId) -> Result<GroupRecord, StoreError> {
        self.groups.retrieve(id)
    }

    fn replace_group(&self, record: GroupRecord) -> Result<GroupRecord, StoreError> {
        self.groups.replace(record, |previous, next| {
            if normalize_members(&previous.members, &mut next.members) {
                tracing::debug!(
                    id = ?next.id,
                    members = next.members.len(),
                    "group membership changed"
                );
            }
        })
    }

    fn delete_group(&self, id: ResourceId) -> Result<(), StoreError> {
        self.groups.delete(id)
    }

    fn query_groups(&self, filter: Option<&Filter>) -> Result<Vec<GroupRecord>, StoreError> {
        self.groups.query(filter)
    }

    fn count_groups(&self) -> Result<usize, StoreError> {
        Ok(self.groups.len())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::UserRepository;
    use crate::test_support::helpers::{group, test_store, user};
    use pretty_assertions::assert_eq;
    use roster_core::enums::ResourceKind;

    #[test]
    fn create_deduplicates_members() {
        let store = test_store();
        let a = ResourceId::generate();
        let b = ResourceId::generate();

        let created = store
            .create_group(group("admins").with_members([a, b, a, b]))
            .unwrap();
        assert_eq!(created.members, vec![a, b]);

        let fetched = store.retrieve_group(created.id.unwrap()).unwrap();
        assert_eq!(fetched.members, vec![a, b]);
    }

    #[test]
    fn duplicate_display_name_conflicts() {
        let store = test_store();
        store.create_group(group("admins")).unwrap();
        assert!(matches!(
            store.create_group(group("admins")),
            Err(StoreError::Conflict { kind: ResourceKind::Group, .. })
        ));
    }

    #[test]
    fn users_and_groups_are_independent_key_spaces() {
        let store = test_store();
        store.create_user(user("ops")).unwrap();
        store.create_group(group("ops")).unwrap();
        assert_eq!(store.count_users().unwrap(), 1);
        assert_eq!(store.count_groups().unwrap(), 1);
    }

    #[test]
    fn replace_over_empty_deduplicates() {
        let store = test_store();
        let stored = store.create_group(group("admins")).unwrap();
        let a = ResourceId::generate();
        let b = ResourceId::generate();

        let next = GroupRecord {
            members: vec![a, b, a],
            ..stored.clone()
        };
        let replaced = store.replace_group(next).unwrap();

        assert_eq!(replaced.members, vec![a, b]);
        assert_eq!(
            store.retrieve_group(stored.id.unwrap()).unwrap().members,
            vec![a, b]
        );
    }

    #[test]
    fn reorder_is_stored_verbatim() {
        let store = test_store();
        let a = ResourceId::generate();
        let b = ResourceId::generate();
        let stored = store
            .create_group(group("admins").with_members([a, b]))
            .unwrap();

        let next = GroupRecord {
            members: vec![b, a],
            ..stored.clone()
        };
        store.replace_group(next).unwrap();

        assert_eq!(
            store.retrieve_group(stored.id.unwrap()).unwrap().members,
            vec![b, a]
        );
    }

    #[test]
    fn replace_into_taken_display_name_conflicts() {
        let store = test_store();
        store.create_group(group("admins")).unwrap();
        let ops = store.create_group(group("ops")).unwrap();

        let renamed = GroupRecord {
            display_name: "admins".into(),
            ..ops.clone()
        };
        assert!(matches!(
            store.replace_group(renamed),
            Err(StoreError::Conflict { .. })
        ));
        assert_eq!(store.retrieve_group(ops.id.unwrap()).unwrap(), ops);
    }

    #[test]
    fn replace_unknown_group_is_not_found() {
        let store = test_store();
        let mut ghost = group("ghost");
        ghost.id = Some(ResourceId::generate());
        assert!(matches!(
            store.replace_group(ghost),
            Err(StoreError::NotFound { kind: ResourceKind::Group, .. })
        ));
    }

    #[test]
    fn delete_group_twice_is_not_found() {
        let store = test_store();
        let id = store.create_group(group("admins")).unwrap().id.unwrap();
        store.delete_group(id).unwrap();
        assert!(store.delete_group(id).is_err());
        assert_eq!(store.count_groups().unwrap(), 0);
    }

    #[test]
    fn query_by_display_name_ignores_case() {
        let store = test_store();
        store.create_group(group("Admins")).unwrap();
        store.create_group(group("ops")).unwrap();

        let found = store
            .query_groups(Some(&Filter::equals("displayName", "ADMINS")))
            .unwrap();
        assert_eq!(found.len(), 1);
        assert_eq!(found[0].display_name, "Admins");
    }

    #[test]
    fn query_by_external_id_matches_external_id_only() {
        let store = test_store();
        store
            .create_group(GroupRecord {
                external_id: Some("G-EXT".into()),
                ..group("admins")
            })
            .unwrap();
        store.create_group(group("g-ext")).unwrap();

        let found = store
            .query_groups(Some(&Filter::equals("externalId", "g-ext")))
            .unwrap();
        assert_eq!(found.len(), 1);
        assert_eq!(found[0].display_name, "admins");
    }

    #[test]
    fn query_groups_on_user_name_is_unsupported() {
        let store = test_store();
        assert!(matches!(
            store.query_groups(Some(&Filter::equals("userName", "x"))),
            Err(StoreError::UnsupportedAttribute { kind: ResourceKind::Group, .. })
        ));
    }
}
