//! Resource kinds, filter operators, and membership policy for Roster.
//!
//! All enums serialize with the lowercase names used in configuration files
//! and filter expressions.

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use std::fmt;

// ---------------------------------------------------------------------------
// ResourceKind
// ---------------------------------------------------------------------------

/// The two resource types held in the directory.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "snake_case")]
pub enum ResourceKind {
    User,
    Group,
}

impl ResourceKind {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::User => "user",
            Self::Group => "group",
        }
    }

    /// Name of the secondary-key attribute that must be unique for this kind.
    #[must_use]
    pub const fn secondary_key_attribute(self) -> &'static str {
        match self {
            Self::User => crate::filter::attributes::USER_NAME,
            Self::Group => crate::filter::attributes::DISPLAY_NAME,
        }
    }
}

impl fmt::Display for ResourceKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

// ---------------------------------------------------------------------------
// ComparisonOperator
// ---------------------------------------------------------------------------

/// Comparison operator of a single filter predicate.
///
/// Only [`ComparisonOperator::Equals`] is served by the directory; the others
/// exist so that callers can describe what they asked for and receive a typed
/// "unsupported" answer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, JsonSchema)]
pub enum ComparisonOperator {
    #[serde(rename = "eq")]
    Equals,
    #[serde(rename = "ne")]
    NotEquals,
    #[serde(rename = "co")]
    Contains,
    #[serde(rename = "sw")]
    StartsWith,
    #[serde(rename = "ew")]
    EndsWith,
    #[serde(rename = "gt")]
    GreaterThan,
    #[serde(rename = "ge")]
    GreaterThanOrEquals,
    #[serde(rename = "lt")]
    LessThan,
    #[serde(rename = "le")]
    LessThanOrEquals,
    #[serde(rename = "pr")]
    Present,
}

impl ComparisonOperator {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Equals => "eq",
            Self::NotEquals => "ne",
            Self::Contains => "co",
            Self::StartsWith => "sw",
            Self::EndsWith => "ew",
            Self::GreaterThan => "gt",
            Self::GreaterThanOrEquals => "ge",
            Self::LessThan => "lt",
            Self::LessThanOrEquals => "le",
            Self::Present => "pr",
        }
    }
}

impl fmt::Display for ComparisonOperator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

// ---------------------------------------------------------------------------
// MemberTypePolicy
// ---------------------------------------------------------------------------

/// How the projector treats group members whose type is not a user.
///
/// Group-of-groups is unsupported either way: with `Accept` the member value
/// is still stored as a plain identifier.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "snake_case")]
pub enum MemberTypePolicy {
    /// Fail the conversion with `InvalidMemberType`.
    #[default]
    Reject,
    /// Keep the member regardless of its declared type.
    Accept,
}

impl MemberTypePolicy {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Reject => "reject",
            Self::Accept => "accept",
        }
    }
}

impl fmt::Display for MemberTypePolicy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
