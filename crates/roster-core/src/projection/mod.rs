//! Projection between canonical resources and internal records.
//!
//! The mapping is deterministic and stateless apart from the configured
//! [`MemberTypePolicy`]:
//! - internal → canonical: every single-valued field expands to exactly one
//!   tagged entry, even when empty.
//! - canonical → internal: the first entry with the expected tag wins; later
//!   entries with the same tag are dropped, absent collections and
//!   sub-objects leave the internal fields empty.
//!
//! For canonical resources that use only recognized tags, with at most one
//! entry per tag, `to_canonical(from_canonical(r))` reproduces every scalar
//! attribute of `r`.

pub mod group;
pub mod user;

use crate::canonical::Resource;
use crate::enums::MemberTypePolicy;
use crate::errors::ProjectionError;
use crate::records::Record;

/// Maps resources of either kind, applying the configured member policy.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Projector {
    member_policy: MemberTypePolicy,
}

impl Projector {
    #[must_use]
    pub const fn new(member_policy: MemberTypePolicy) -> Self {
        Self { member_policy }
    }

    #[must_use]
    pub const fn member_policy(&self) -> MemberTypePolicy {
        self.member_policy
    }

    /// Expand an internal record into its canonical resource.
    #[must_use]
    pub fn to_canonical(&self, record: &Record) -> Resource {
        match record {
            Record::User(user) => Resource::User(user::to_canonical(user)),
            Record::Group(group) => Resource::Group(group::to_canonical(group)),
        }
    }

    /// Flatten a canonical resource into an internal record.
    ///
    /// # Errors
    ///
    /// Returns `ProjectionError::InvalidIdentifier` for a malformed resource or
    /// member identifier, and `ProjectionError::InvalidMemberType` for a
    /// non-user member under [`MemberTypePolicy::Reject`].
    pub fn from_canonical(&self, resource: &Resource) -> Result<Record, ProjectionError> {
        match resource {
            Resource::User(canonical) => user::from_canonical(canonical).map(Record::User),
            Resource::Group(canonical) => {
                group::from_canonical(canonical, self.member_policy).map(Record::Group)
            }
        }
    }
}

/// Parse the optional identifier carried by a canonical resource.
pub(crate) fn parse_optional_id(
    id: Option<&str>,
) -> Result<Option<crate::ids::ResourceId>, ProjectionError> {
    id.map(crate::ids::ResourceId::parse)
        .transpose()
        .map_err(ProjectionError::from)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::canonical::{CanonicalGroup, CanonicalUser, Member};
    use crate::enums::ResourceKind;

    #[test]
    fn dispatch_preserves_kind() {
        let projector = Projector::default();

        let user = Resource::User(CanonicalUser::new("alice"));
        let record = projector.from_canonical(&user).unwrap();
        assert_eq!(record.kind(), ResourceKind::User);
        assert_eq!(projector.to_canonical(&record).kind(), ResourceKind::User);

        let group = Resource::Group(CanonicalGroup::new("admins"));
        let record = projector.from_canonical(&group).unwrap();
        assert_eq!(record.kind(), ResourceKind::Group);
        assert_eq!(record.secondary_key(), "admins");
    }

    #[test]
    fn policy_is_applied_to_groups() {
        let mut group = CanonicalGroup::new("nested");
        group.members = Some(vec![Member {
            member_type: Some("Group".into()),
            value: "3fa85f64-5717-4562-b3fc-2c963f66afa6".into(),
            display: None,
        }]);
        let resource = Resource::Group(group);

        let strict = Projector::new(MemberTypePolicy::Reject);
        assert!(matches!(
            strict.from_canonical(&resource),
            Err(ProjectionError::InvalidMemberType { .. })
        ));

        let lenient = Projector::new(MemberTypePolicy::Accept);
        assert!(lenient.from_canonical(&resource).is_ok());
    }
}
