//! Kind-dispatching operations over [`Resource`].

use roster_core::canonical::Resource;
use roster_core::enums::ResourceKind;
use roster_core::filter::QueryParameters;
use roster_store::{GroupRepository, UserRepository};

use crate::{Connector, ConnectorError, PatchEngine};

impl<S: UserRepository + GroupRepository> Connector<S> {
    /// # Errors
    ///
    /// See [`Self::create_user`] and [`Self::create_group`].
    pub fn create(&self, resource: Resource) -> Result<Resource, ConnectorError> {
        match resource {
            Resource::User(user) => self.create_user(user).map(Resource::User),
            Resource::Group(group) => self.create_group(group).map(Resource::Group),
        }
    }

    /// # Errors
    ///
    /// See [`Self::retrieve_user`] and [`Self::retrieve_group`].
    pub fn retrieve(&self, kind: ResourceKind, id: &str) -> Result<Resource, ConnectorError> {
        match kind {
            ResourceKind::User => self.retrieve_user(id).map(Resource::User),
            ResourceKind::Group => self.retrieve_group(id).map(Resource::Group),
        }
    }

    /// # Errors
    ///
    /// See [`Self::replace_user`] and [`Self::replace_group`].
    pub fn replace(&self, resource: Resource) -> Result<Resource, ConnectorError> {
        match resource {
            Resource::User(user) => self.replace_user(user).map(Resource::User),
            Resource::Group(group) => self.replace_group(group).map(Resource::Group),
        }
    }

    /// # Errors
    ///
    /// See [`Self::patch_user`] and [`Self::patch_group`].
    pub fn patch<E: PatchEngine>(
        &self,
        kind: ResourceKind,
        id: &str,
        engine: &E,
        document: &E::Document,
    ) -> Result<(), ConnectorError> {
        match kind {
            ResourceKind::User => self.patch_user(id, engine, document),
            ResourceKind::Group => self.patch_group(id, engine, document),
        }
    }

    /// # Errors
    ///
    /// See [`Self::delete_user`] and [`Self::delete_group`].
    pub fn delete(&self, kind: ResourceKind, id: &str) -> Result<(), ConnectorError> {
        match kind {
            ResourceKind::User => self.delete_user(id),
            ResourceKind::Group => self.delete_group(id),
        }
    }

    /// # Errors
    ///
    /// See [`Self::query_users`] and [`Self::query_groups`].
    pub fn query(
        &self,
        kind: ResourceKind,
        params: &QueryParameters,
    ) -> Result<Vec<Resource>, ConnectorError> {
        Ok(match kind {
            ResourceKind::User => self
                .query_users(params)?
                .into_iter()
                .map(Resource::User)
                .collect(),
            ResourceKind::Group => self
                .query_groups(params)?
                .into_iter()
                .map(Resource::Group)
                .collect(),
        })
    }
}
