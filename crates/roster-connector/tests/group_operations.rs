//! Group operations through the connector facade.

use pretty_assertions::assert_eq;
use roster_connector::{Connector, ErrorKind};
use roster_core::canonical::{CanonicalGroup, CanonicalUser, Member, Resource};
use roster_core::enums::{MemberTypePolicy, ResourceKind};
use roster_core::filter::{Filter, QueryParameters};
use roster_core::projection::Projector;
use roster_store::InMemoryStore;
use rstest::rstest;

fn connector() -> Connector<InMemoryStore> {
    Connector::new(InMemoryStore::new(), Projector::default())
}

fn user_id(connector: &Connector<InMemoryStore>, name: &str) -> String {
    connector
        .create_user(CanonicalUser::new(name))
        .unwrap()
        .id
        .unwrap()
}

fn group_with(name: &str, members: &[&str]) -> CanonicalGroup {
    CanonicalGroup {
        members: Some(members.iter().map(|id| Member::user(*id)).collect()),
        ..CanonicalGroup::new(name)
    }
}

fn member_values(group: &CanonicalGroup) -> Vec<String> {
    group
        .members
        .iter()
        .flatten()
        .map(|member| member.value.clone())
        .collect()
}

fn foreign(value: &str) -> Member {
    Member {
        member_type: Some("Group".into()),
        value: value.into(),
        display: None,
    }
}

#[test]
fn create_collapses_duplicate_members() {
    let connector = connector();
    let a = user_id(&connector, "a");
    let b = user_id(&connector, "b");

    let created = connector
        .create_group(group_with("admins", &[a.as_str(), b.as_str(), a.as_str()]))
        .unwrap();
    assert_eq!(member_values(&created), vec![a.clone(), b.clone()]);

    let fetched = connector
        .retrieve_group(created.id.as_deref().unwrap())
        .unwrap();
    assert_eq!(fetched, created);
}

#[test]
fn members_are_emitted_as_user_principals() {
    let connector = connector();
    let a = user_id(&connector, "a");
    let created = connector.create_group(group_with("admins", &[a.as_str()])).unwrap();
    assert_eq!(created.members, Some(vec![Member::user(a)]));
}

#[test]
fn replace_over_empty_membership_deduplicates() {
    let connector = connector();
    let a = user_id(&connector, "a");
    let b = user_id(&connector, "b");
    let stored = connector.create_group(CanonicalGroup::new("admins")).unwrap();

    let replaced = connector
        .replace_group(CanonicalGroup {
            id: stored.id.clone(),
            ..group_with("admins", &[a.as_str(), b.as_str(), a.as_str()])
        })
        .unwrap();
    assert_eq!(member_values(&replaced), vec![a, b]);
}

#[test]
fn reordered_membership_is_stored_verbatim() {
    let connector = connector();
    let a = user_id(&connector, "a");
    let b = user_id(&connector, "b");
    let stored = connector
        .create_group(group_with("admins", &[a.as_str(), b.as_str()]))
        .unwrap();
    let id = stored.id.clone().unwrap();

    connector
        .replace_group(CanonicalGroup {
            id: Some(id.clone()),
            ..group_with("admins", &[b.as_str(), a.as_str()])
        })
        .unwrap();
    assert_eq!(
        member_values(&connector.retrieve_group(&id).unwrap()),
        vec![b, a]
    );
}

#[test]
fn replace_without_members_clears_membership() {
    let connector = connector();
    let a = user_id(&connector, "a");
    let stored = connector.create_group(group_with("admins", &[a.as_str()])).unwrap();

    let replaced = connector
        .replace_group(CanonicalGroup {
            members: None,
            ..stored
        })
        .unwrap();
    assert_eq!(replaced.members, Some(Vec::new()));
}

#[test]
fn duplicate_display_name_conflicts() {
    let connector = connector();
    connector.create_group(CanonicalGroup::new("admins")).unwrap();
    assert_eq!(
        connector
            .create_group(CanonicalGroup::new("admins"))
            .unwrap_err()
            .kind(),
        ErrorKind::Conflict
    );
    assert_eq!(
        connector
            .create_group(CanonicalGroup::new(""))
            .unwrap_err()
            .kind(),
        ErrorKind::InvalidInput
    );
}

#[test]
fn foreign_member_is_rejected_by_default() {
    let connector = connector();
    let other = connector
        .create_group(CanonicalGroup::new("nested"))
        .unwrap()
        .id
        .unwrap();

    let group = CanonicalGroup {
        members: Some(vec![foreign(&other)]),
        ..CanonicalGroup::new("admins")
    };
    assert_eq!(
        connector.create_group(group).unwrap_err().kind(),
        ErrorKind::InvalidMemberType
    );
    assert_eq!(
        connector
            .query_groups(&QueryParameters::all())
            .unwrap()
            .len(),
        1
    );
}

#[test]
fn foreign_member_is_kept_under_accept_policy() {
    let connector = Connector::new(
        InMemoryStore::new(),
        Projector::new(MemberTypePolicy::Accept),
    );
    let other = connector
        .create_group(CanonicalGroup::new("nested"))
        .unwrap()
        .id
        .unwrap();

    let created = connector
        .create_group(CanonicalGroup {
            members: Some(vec![foreign(&other)]),
            ..CanonicalGroup::new("admins")
        })
        .unwrap();
    assert_eq!(member_values(&created), vec![other]);
}

#[rstest]
#[case(None)]
#[case(Some("user"))]
#[case(Some("USER"))]
fn user_typed_or_untyped_members_are_accepted(#[case] member_type: Option<&str>) {
    let connector = connector();
    let a = user_id(&connector, "a");

    let created = connector
        .create_group(CanonicalGroup {
            members: Some(vec![Member {
                member_type: member_type.map(str::to_string),
                value: a.clone(),
                display: None,
            }]),
            ..CanonicalGroup::new("admins")
        })
        .unwrap();
    assert_eq!(member_values(&created), vec![a]);
}

#[test]
fn malformed_member_id_is_invalid_input() {
    let connector = connector();
    assert_eq!(
        connector
            .create_group(group_with("admins", &["not-an-id"]))
            .unwrap_err()
            .kind(),
        ErrorKind::InvalidInput
    );
}

#[test]
fn excluded_members_are_stripped_from_query_results() {
    let connector = connector();
    let a = user_id(&connector, "a");
    connector.create_group(group_with("admins", &[a.as_str()])).unwrap();

    let full = connector.query_groups(&QueryParameters::all()).unwrap();
    assert_eq!(full[0].members.as_ref().map(Vec::len), Some(1));

    let stripped = connector
        .query_groups(&QueryParameters::all().excluding("Members"))
        .unwrap();
    assert_eq!(stripped.len(), 1);
    assert_eq!(stripped[0].members, None);
    assert_eq!(stripped[0].display_name, "admins");
}

#[test]
fn query_by_display_name_ignores_case() {
    let connector = connector();
    connector.create_group(CanonicalGroup::new("Admins")).unwrap();
    connector.create_group(CanonicalGroup::new("ops")).unwrap();

    let found = connector
        .query(
            ResourceKind::Group,
            &QueryParameters::all().with_filter(Filter::equals("displayName", "ADMINS")),
        )
        .unwrap();
    assert_eq!(found.len(), 1);
    assert_eq!(found[0].secondary_key(), "Admins");
}

#[test]
fn query_by_external_id_ignores_case_and_skips_display_name() {
    let connector = connector();
    connector
        .create_group(CanonicalGroup {
            external_id: Some("G-EXT".into()),
            ..CanonicalGroup::new("admins")
        })
        .unwrap();
    connector.create_group(CanonicalGroup::new("g-ext")).unwrap();

    let found = connector
        .query_groups(&QueryParameters::all().with_filter(Filter::equals("externalId", "g-ext")))
        .unwrap();
    let names: Vec<_> = found.iter().map(|group| group.display_name.as_str()).collect();
    assert_eq!(names, vec!["admins"]);
    assert_eq!(found[0].external_id.as_deref(), Some("G-EXT"));
}

#[test]
fn query_on_members_is_unsupported() {
    let connector = connector();
    let params = QueryParameters::all().with_filter(Filter::equals("members", "x"));
    assert_eq!(
        connector.query_groups(&params).unwrap_err().kind(),
        ErrorKind::Unsupported
    );
}

#[test]
fn replace_dispatch_on_group_resource() {
    let connector = connector();
    let created = connector
        .create(Resource::Group(CanonicalGroup::new("admins")))
        .unwrap();

    let mut renamed = created.into_group().unwrap();
    renamed.display_name = "owners".into();
    renamed.external_id = Some("G-1".into());
    let replaced = connector.replace(Resource::Group(renamed.clone())).unwrap();

    assert_eq!(replaced, Resource::Group(renamed));
}
