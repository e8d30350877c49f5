//! Canonical resources exchanged with the provisioning engine.
//!
//! These are the multi-valued shapes of the protocol: tagged collections of
//! emails, addresses, and phone numbers, a name sub-object, the enterprise
//! extension, and group members. Attribute names follow the protocol
//! (`userName`, `phoneNumbers`, `type`, ...) so the engine can serialize them
//! as-is. Parsing and rendering the wire format stays with the engine.

mod group;
mod user;

pub use group::{CanonicalGroup, Member};
pub use user::{
    Address, CanonicalUser, Email, EnterpriseExtension, Manager, Name, PhoneNumber, Tagged,
};

use crate::enums::ResourceKind;

/// Tags of multi-valued entries recognized by the projector.
pub mod tags {
    pub const WORK: &str = "work";
    pub const MOBILE: &str = "mobile";
    pub const FAX: &str = "fax";
    /// Member type emitted for user principals.
    pub const USER_MEMBER: &str = "User";
}

/// Schema URN under which the enterprise extension is exchanged.
pub const ENTERPRISE_USER_SCHEMA: &str = "urn:ietf:params:scim:schemas:extension:enterprise:2.0:User";

/// A canonical resource of either kind.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Resource {
    User(CanonicalUser),
    Group(CanonicalGroup),
}

impl Resource {
    #[must_use]
    pub const fn kind(&self) -> ResourceKind {
        match self {
            Self::User(_) => ResourceKind::User,
            Self::Group(_) => ResourceKind::Group,
        }
    }

    /// The identifier as received, if any.
    #[must_use]
    pub fn id(&self) -> Option<&str> {
        match self {
            Self::User(user) => user.id.as_deref(),
            Self::Group(group) => group.id.as_deref(),
        }
    }

    pub fn set_id(&mut self, id: Option<String>) {
        match self {
            Self::User(user) => user.id = id,
            Self::Group(group) => group.id = id,
        }
    }

    /// The secondary-key value (`userName` or `displayName`).
    #[must_use]
    pub fn secondary_key(&self) -> &str {
        match self {
            Self::User(user) => &user.user_name,
            Self::Group(group) => &group.display_name,
        }
    }

    #[must_use]
    pub fn into_user(self) -> Option<CanonicalUser> {
        match self {
            Self::User(user) => Some(user),
            Self::Group(_) => None,
        }
    }

    #[must_use]
    pub fn into_group(self) -> Option<CanonicalGroup> {
        match self {
            Self::Group(group) => Some(group),
            Self::User(_) => None,
        }
    }
}

impl From<CanonicalUser> for Resource {
    fn from(value: CanonicalUser) -> Self {
        Self::User(value)
    }
}

impl From<CanonicalGroup> for Resource {
    fn from(value: CanonicalGroup) -> Self {
        Self::Group(value)
    }
}
