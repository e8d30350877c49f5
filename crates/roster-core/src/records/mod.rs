//! Flattened internal records held by the directory store.
//!
//! Records are the single-valued shape that persistence works with: one work
//! email, one work address, three phone slots. The durable layout is two
//! tables (`users` unique on `user_name`, `groups` unique on `display_name`)
//! plus a `group_members` association table.

mod group;
mod user;

pub use group::GroupRecord;
pub use user::{UserRecord, WorkAddress};

use crate::enums::ResourceKind;
use crate::ids::ResourceId;

/// An internal record of either kind.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Record {
    User(UserRecord),
    Group(GroupRecord),
}

impl Record {
    #[must_use]
    pub const fn kind(&self) -> ResourceKind {
        match self {
            Self::User(_) => ResourceKind::User,
            Self::Group(_) => ResourceKind::Group,
        }
    }

    #[must_use]
    pub const fn id(&self) -> Option<ResourceId> {
        match self {
            Self::User(user) => user.id,
            Self::Group(group) => group.id,
        }
    }

    /// The value that must be unique among live records of the same kind.
    #[must_use]
    pub fn secondary_key(&self) -> &str {
        match self {
            Self::User(user) => user.secondary_key(),
            Self::Group(group) => group.secondary_key(),
        }
    }
}

impl From<UserRecord> for Record {
    fn from(value: UserRecord) -> Self {
        Self::User(value)
    }
}

impl From<GroupRecord> for Record {
    fn from(value: GroupRecord) -> Self {
        Self::Group(value)
    }
}
