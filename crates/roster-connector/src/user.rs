//! User operations.

use roster_core::canonical::{CanonicalUser, Resource};
use roster_core::enums::ResourceKind;
use roster_core::filter::QueryParameters;
use roster_core::projection::user::{from_canonical, to_canonical};
use roster_store::UserRepository;

use crate::{
    Connector, ConnectorError, PatchEngine, parse_id, require_secondary_key, single_filter,
};

const KIND: ResourceKind = ResourceKind::User;

impl<S: UserRepository> Connector<S> {
    /// Store a new user and return it with its assigned identifier.
    ///
    /// # Errors
    ///
    /// `InvalidInput` when the user carries an identifier or has a blank
    /// `userName`, `Conflict` when the `userName` is taken.
    pub fn create_user(&self, user: CanonicalUser) -> Result<CanonicalUser, ConnectorError> {
        if let Some(id) = &user.id {
            return Err(ConnectorError::invalid_input(format!(
                "a new user must not carry an identifier (got '{id}')"
            )));
        }
        require_secondary_key(KIND, &user.user_name)?;

        let record = from_canonical(&user)?;
        let stored = self.store.create_user(record)?;
        Ok(to_canonical(&stored))
    }

    /// # Errors
    ///
    /// `InvalidInput` for a malformed identifier, `NotFound` when absent.
    pub fn retrieve_user(&self, id: &str) -> Result<CanonicalUser, ConnectorError> {
        let id = parse_id(KIND, id)?;
        Ok(to_canonical(&self.store.retrieve_user(id)?))
    }

    /// Replace the stored user identified by `user.id`.
    ///
    /// # Errors
    ///
    /// `InvalidInput` for a missing or malformed identifier or a blank
    /// `userName`, `NotFound` when absent, `Conflict` when another user holds
    /// the `userName`.
    pub fn replace_user(&self, user: CanonicalUser) -> Result<CanonicalUser, ConnectorError> {
        if user.id.is_none() {
            return Err(ConnectorError::invalid_input(
                "replacing a user requires an identifier",
            ));
        }
        require_secondary_key(KIND, &user.user_name)?;

        let record = from_canonical(&user)?;
        let stored = self.store.replace_user(record)?;
        Ok(to_canonical(&stored))
    }

    /// Apply `document` to the stored user through `engine` and commit the
    /// result as a replace.
    ///
    /// # Errors
    ///
    /// Everything [`Self::retrieve_user`] and [`Self::replace_user`] can
    /// return, plus the engine's own failures.
    pub fn patch_user<E: PatchEngine>(
        &self,
        id: &str,
        engine: &E,
        document: &E::Document,
    ) -> Result<(), ConnectorError> {
        let resource_id = parse_id(KIND, id)?;
        let current = to_canonical(&self.store.retrieve_user(resource_id)?);

        let mut resource = Resource::User(current);
        engine.apply(&mut resource, document)?;
        let Some(mut patched) = resource.into_user() else {
            return Err(ConnectorError::invalid_input(
                "patch turned a user into another resource kind",
            ));
        };
        patched.id = Some(resource_id.to_string());

        self.replace_user(patched)?;
        tracing::debug!(id = %resource_id, "user patched");
        Ok(())
    }

    /// # Errors
    ///
    /// `InvalidInput` for a malformed identifier, `NotFound` when absent.
    pub fn delete_user(&self, id: &str) -> Result<(), ConnectorError> {
        let id = parse_id(KIND, id)?;
        self.store.delete_user(id)?;
        Ok(())
    }

    /// Users matching the single filter in `params`, or all users.
    ///
    /// # Errors
    ///
    /// `Unsupported` for more than one filter, a non-indexed attribute, or a
    /// non-equality operator; `InvalidInput` for an empty attribute or value.
    pub fn query_users(
        &self,
        params: &QueryParameters,
    ) -> Result<Vec<CanonicalUser>, ConnectorError> {
        let filter = single_filter(params)?;
        Ok(self
            .store
            .query_users(filter)?
            .iter()
            .map(to_canonical)
            .collect())
    }
}
