//! Group operations.

use roster_core::canonical::{CanonicalGroup, Resource};
use roster_core::enums::ResourceKind;
use roster_core::filter::{QueryParameters, attributes};
use roster_core::projection::group::{from_canonical, to_canonical};
use roster_store::GroupRepository;

use crate::{
    Connector, ConnectorError, PatchEngine, parse_id, require_secondary_key, single_filter,
};

const KIND: ResourceKind = ResourceKind::Group;

impl<S: GroupRepository> Connector<S> {
    /// Store a new group and return it with its assigned identifier.
    ///
    /// Duplicate member references are collapsed on the way in.
    ///
    /// # Errors
    ///
    /// `InvalidInput` when the group carries an identifier, has a blank
    /// `displayName`, or references a malformed member id;
    /// `InvalidMemberType` for a non-user member under the reject policy;
    /// `Conflict` when the `displayName` is taken.
    pub fn create_group(&self, group: CanonicalGroup) -> Result<CanonicalGroup, ConnectorError> {
        if let Some(id) = &group.id {
            return Err(ConnectorError::invalid_input(format!(
                "a new group must not carry an identifier (got '{id}')"
            )));
        }
        require_secondary_key(KIND, &group.display_name)?;

        let record = from_canonical(&group, self.projector.member_policy())?;
        let stored = self.store.create_group(record)?;
        Ok(to_canonical(&stored))
    }

    /// # Errors
    ///
    /// `InvalidInput` for a malformed identifier, `NotFound` when absent.
    pub fn retrieve_group(&self, id: &str) -> Result<CanonicalGroup, ConnectorError> {
        let id = parse_id(KIND, id)?;
        Ok(to_canonical(&self.store.retrieve_group(id)?))
    }

    /// Replace the stored group identified by `group.id`.
    ///
    /// An absent `members` collection replaces the membership with an empty
    /// list.
    ///
    /// # Errors
    ///
    /// As [`Self::create_group`], with `NotFound` for an unknown identifier
    /// and `InvalidInput` for a missing one.
    pub fn replace_group(&self, group: CanonicalGroup) -> Result<CanonicalGroup, ConnectorError> {
        if group.id.is_none() {
            return Err(ConnectorError::invalid_input(
                "replacing a group requires an identifier",
            ));
        }
        require_secondary_key(KIND, &group.display_name)?;

        let record = from_canonical(&group, self.projector.member_policy())?;
        let stored = self.store.replace_group(record)?;
        Ok(to_canonical(&stored))
    }

    /// Apply `document` to the stored group through `engine` and commit the
    /// result as a replace.
    ///
    /// # Errors
    ///
    /// Everything [`Self::retrieve_group`] and [`Self::replace_group`] can
    /// return, plus the engine's own failures.
    pub fn patch_group<E: PatchEngine>(
        &self,
        id: &str,
        engine: &E,
        document: &E::Document,
    ) -> Result<(), ConnectorError> {
        let resource_id = parse_id(KIND, id)?;
        let current = to_canonical(&self.store.retrieve_group(resource_id)?);

        let mut resource = Resource::Group(current);
        engine.apply(&mut resource, document)?;
        let Some(mut patched) = resource.into_group() else {
            return Err(ConnectorError::invalid_input(
                "patch turned a group into another resource kind",
            ));
        };
        patched.id = Some(resource_id.to_string());

        self.replace_group(patched)?;
        tracing::debug!(id = %resource_id, "group patched");
        Ok(())
    }

    /// # Errors
    ///
    /// `InvalidInput` for a malformed identifier, `NotFound` when absent.
    pub fn delete_group(&self, id: &str) -> Result<(), ConnectorError> {
        let id = parse_id(KIND, id)?;
        self.store.delete_group(id)?;
        Ok(())
    }

    /// Groups matching the single filter in `params`, or all groups.
    ///
    /// When `members` is excluded, results carry no membership collection.
    ///
    /// # Errors
    ///
    /// `Unsupported` for more than one filter, a non-indexed attribute, or a
    /// non-equality operator; `InvalidInput` for an empty attribute or value.
    pub fn query_groups(
        &self,
        params: &QueryParameters,
    ) -> Result<Vec<CanonicalGroup>, ConnectorError> {
        let filter = single_filter(params)?;
        let strip_members = params.excludes(attributes::MEMBERS);

        Ok(self
            .store
            .query_groups(filter)?
            .iter()
            .map(|record| {
                let mut group = to_canonical(record);
                if strip_members {
                    group.members = None;
                }
                group
            })
            .collect())
    }
}
