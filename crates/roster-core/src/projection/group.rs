//! Group projection.

use crate::canonical::{CanonicalGroup, Member, tags};
use crate::enums::MemberTypePolicy;
use crate::errors::ProjectionError;
use crate::ids::ResourceId;
use crate::records::GroupRecord;

/// Expand a group record; every member is emitted as a user principal.
#[must_use]
pub fn to_canonical(record: &GroupRecord) -> CanonicalGroup {
    CanonicalGroup {
        id: record.id.map(|id| id.to_string()),
        display_name: record.display_name.clone(),
        external_id: record.external_id.clone(),
        members: Some(
            record
                .members
                .iter()
                .map(|member| Member::user(member.to_string()))
                .collect(),
        ),
    }
}

/// A member is a user when its type is absent or equals `user` ignoring ASCII case.
fn is_user_member(member: &Member) -> bool {
    member
        .member_type
        .as_deref()
        .is_none_or(|member_type| member_type.eq_ignore_ascii_case(tags::USER_MEMBER))
}

fn member_id(member: &Member, policy: MemberTypePolicy) -> Result<ResourceId, ProjectionError> {
    if policy == MemberTypePolicy::Reject && !is_user_member(member) {
        return Err(ProjectionError::InvalidMemberType {
            member_type: member.member_type.clone().unwrap_or_default(),
            value: member.value.clone(),
        });
    }
    Ok(ResourceId::parse(&member.value)?)
}

/// Flatten a canonical group into a group record.
///
/// Member order is preserved as received; duplicates are left for the store
/// to normalize.
///
/// # Errors
///
/// Returns `ProjectionError::InvalidIdentifier` for a malformed group or member
/// identifier, and `ProjectionError::InvalidMemberType` for a non-user member
/// when `policy` is [`MemberTypePolicy::Reject`].
pub fn from_canonical(
    resource: &CanonicalGroup,
    policy: MemberTypePolicy,
) -> Result<GroupRecord, ProjectionError> {
    let id = super::parse_optional_id(resource.id.as_deref())?;

    let members = resource
        .members
        .as_deref()
        .unwrap_or_default()
        .iter()
        .map(|member| member_id(member, policy))
        .collect::<Result<Vec<_>, _>>()?;

    Ok(GroupRecord {
        id,
        display_name: resource.display_name.clone(),
        external_id: resource.external_id.clone(),
        members,
    })
}
