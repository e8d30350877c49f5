use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::ids::ResourceId;

/// The single work postal address of a user.
#[derive(Debug, Clone, Default, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct WorkAddress {
    /// Office or free-form formatted address.
    pub formatted: Option<String>,
    pub street: Option<String>,
    pub city: Option<String>,
    pub region: Option<String>,
    pub postal_code: Option<String>,
    pub country: Option<String>,
}

/// A user as stored in the directory.
///
/// `id` is `None` only before the record is first stored.
#[derive(Debug, Clone, Default, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct UserRecord {
    pub id: Option<ResourceId>,
    /// Secondary key; unique among live users (case-sensitive).
    pub user_name: String,
    pub active: bool,
    pub display_name: Option<String>,
    pub job_title: Option<String>,
    /// Work email.
    pub mail: Option<String>,
    pub preferred_language: Option<String>,
    pub given_name: Option<String>,
    pub family_name: Option<String>,
    pub formatted_name: Option<String>,
    pub address: WorkAddress,
    /// Work phone.
    pub telephone: Option<String>,
    pub mobile: Option<String>,
    pub fax: Option<String>,
    pub external_id: Option<String>,
    pub employee_id: Option<String>,
    pub department: Option<String>,
    /// Opaque reference to the manager.
    pub manager: Option<String>,
}

impl UserRecord {
    #[must_use]
    pub fn new(user_name: impl Into<String>) -> Self {
        Self {
            user_name: user_name.into(),
            ..Self::default()
        }
    }

    #[must_use]
    pub fn secondary_key(&self) -> &str {
        &self.user_name
    }
}
