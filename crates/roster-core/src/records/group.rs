use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::ids::ResourceId;

/// A group as stored in the directory. Members are user identifiers.
#[derive(Debug, Clone, Default, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct GroupRecord {
    pub id: Option<ResourceId>,
    /// Secondary key; unique among live groups (case-sensitive).
    pub display_name: String,
    pub external_id: Option<String>,
    pub members: Vec<ResourceId>,
}

impl GroupRecord {
    #[must_use]
    pub fn new(display_name: impl Into<String>) -> Self {
        Self {
            display_name: display_name.into(),
            ..Self::default()
        }
    }

    #[must_use]
    pub fn with_members(mut self, members: impl IntoIterator<Item = ResourceId>) -> Self {
        self.members = members.into_iter().collect();
        self
    }

    #[must_use]
    pub fn secondary_key(&self) -> &str {
        &self.display_name
    }
}
