//! Query filters and query parameters.
//!
//! A query carries at most one equality predicate over an indexed attribute.
//! The parameters type can describe more than that (several filters, any
//! operator) so the connector can reject what it does not serve with a typed
//! error instead of losing information at the boundary.

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::enums::ComparisonOperator;

/// Canonical attribute paths understood by the directory.
pub mod attributes {
    pub const USER_NAME: &str = "userName";
    pub const DISPLAY_NAME: &str = "displayName";
    pub const EXTERNAL_ID: &str = "externalId";
    pub const MEMBERS: &str = "members";
}

/// A single `attribute operator value` predicate.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct Filter {
    pub attribute_path: String,
    pub operator: ComparisonOperator,
    pub value: String,
}

impl Filter {
    #[must_use]
    pub fn new(
        attribute_path: impl Into<String>,
        operator: ComparisonOperator,
        value: impl Into<String>,
    ) -> Self {
        Self {
            attribute_path: attribute_path.into(),
            operator,
            value: value.into(),
        }
    }

    /// Shorthand for an equality predicate.
    #[must_use]
    pub fn equals(attribute_path: impl Into<String>, value: impl Into<String>) -> Self {
        Self::new(attribute_path, ComparisonOperator::Equals, value)
    }

    /// Whether this predicate targets `attribute` (ASCII case-insensitive).
    #[must_use]
    pub fn targets(&self, attribute: &str) -> bool {
        self.attribute_path.eq_ignore_ascii_case(attribute)
    }

    /// Case-insensitive exact comparison of `candidate` against the filter value.
    #[must_use]
    pub fn matches_value(&self, candidate: &str) -> bool {
        candidate.to_lowercase() == self.value.to_lowercase()
    }
}

/// Filters and attribute exclusions for a query.
#[derive(Debug, Clone, Default, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct QueryParameters {
    #[serde(default)]
    pub filters: Vec<Filter>,
    #[serde(default)]
    pub excluded_attributes: Vec<String>,
}

impl QueryParameters {
    /// Parameters selecting every live record.
    #[must_use]
    pub fn all() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn with_filter(mut self, filter: Filter) -> Self {
        self.filters.push(filter);
        self
    }

    #[must_use]
    pub fn excluding(mut self, attribute: impl Into<String>) -> Self {
        self.excluded_attributes.push(attribute.into());
        self
    }

    /// Whether the caller excluded `attribute` from the results.
    #[must_use]
    pub fn excludes(&self, attribute: &str) -> bool {
        self.excluded_attributes
            .iter()
            .any(|excluded| excluded.eq_ignore_ascii_case(attribute))
    }
}
