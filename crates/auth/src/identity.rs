use serde::{Deserialize, Serialize};
use thiserror::Error;

use claimdesk_core::UserId;

use crate::actor::Actor;
use crate::roles::{Role, RoleSet};

/// What the identity collaborator yields for a bearer credential: the account
/// id, its activation flag, and the roles resolved from the role table.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AuthenticatedUser {
    pub id: UserId,
    pub is_active: bool,
    pub roles: Vec<Role>,
}

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum IdentityError {
    #[error("user account is inactive")]
    Inactive,
}

impl AuthenticatedUser {
    /// Promote to an [`Actor`] eligible for policy evaluation.
    ///
    /// Inactive accounts are rejected here, before any `AccessRequest`
    /// exists: deactivation is an authentication outcome, not a policy
    /// decision.
    pub fn into_actor(self) -> Result<Actor, IdentityError> {
        if !self.is_active {
            return Err(IdentityError::Inactive);
        }
        let roles: RoleSet = self.roles.into_iter().collect();
        Ok(Actor::new(self.id, roles))
    }
}
