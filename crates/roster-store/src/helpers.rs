//! Filter resolution against the indexed attributes of each record kind.
//!
//! Users are indexed on `userName` and `externalId`, groups on `displayName`
//! and `externalId`. Attribute names match ignoring ASCII case; values match
//! case-insensitively, which is deliberately looser than the case-sensitive
//! uniqueness check on create and replace.

use roster_core::enums::{ComparisonOperator, ResourceKind};
use roster_core::filter::{Filter, attributes};
use roster_core::records::{GroupRecord, UserRecord};

use crate::error::StoreError;

/// A record type that exposes a fixed set of filterable attributes.
pub(crate) trait Indexed {
    const KIND: ResourceKind;
    const INDEXED: &'static [&'static str];

    /// Value of an indexed attribute; `attribute` is one of [`Self::INDEXED`].
    fn indexed_value(&self, attribute: &str) -> Option<&str>;
}

impl Indexed for UserRecord {
    const KIND: ResourceKind = ResourceKind::User;
    const INDEXED: &'static [&'static str] = &[attributes::USER_NAME, attributes::EXTERNAL_ID];

    fn indexed_value(&self, attribute: &str) -> Option<&str> {
        match attribute {
            attributes::USER_NAME => Some(&self.user_name),
            attributes::EXTERNAL_ID => self.external_id.as_deref(),
            _ => None,
        }
    }
}

impl Indexed for GroupRecord {
    const KIND: ResourceKind = ResourceKind::Group;
    const INDEXED: &'static [&'static str] =
        &[attributes::DISPLAY_NAME, attributes::EXTERNAL_ID];

    fn indexed_value(&self, attribute: &str) -> Option<&str> {
        match attribute {
            attributes::DISPLAY_NAME => Some(&self.display_name),
            attributes::EXTERNAL_ID => self.external_id.as_deref(),
            _ => None,
        }
    }
}

/// Resolve `filter` to the canonical name of an indexed attribute of `R`.
///
/// # Errors
///
/// Returns `StoreError::UnsupportedOperator` for anything but equality and
/// `StoreError::UnsupportedAttribute` for an attribute outside the index.
pub(crate) fn resolve_attribute<R: Indexed>(filter: &Filter) -> Result<&'static str, StoreError> {
    if filter.operator != ComparisonOperator::Equals {
        return Err(StoreError::UnsupportedOperator {
            operator: filter.operator,
        });
    }
    R::INDEXED
        .iter()
        .copied()
        .find(|attribute| filter.targets(attribute))
        .ok_or_else(|| StoreError::UnsupportedAttribute {
            kind: R::KIND,
            attribute: filter.attribute_path.clone(),
        })
}

/// Whether `record` satisfies the resolved equality predicate.
pub(crate) fn matches<R: Indexed>(record: &R, attribute: &str, filter: &Filter) -> bool {
    record
        .indexed_value(attribute)
        .is_some_and(|value| filter.matches_value(value))
}
