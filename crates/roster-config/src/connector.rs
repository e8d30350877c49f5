//! Connector facade configuration.

use roster_core::enums::MemberTypePolicy;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize, Serialize)]
pub struct ConnectorConfig {
    /// What to do with a group member whose declared type is not `User`
    /// (`"reject"` or `"accept"`).
    #[serde(default)]
    pub member_type_policy: MemberTypePolicy,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rejects_foreign_members_by_default() {
        assert_eq!(
            ConnectorConfig::default().member_type_policy,
            MemberTypePolicy::Reject
        );
    }
}
