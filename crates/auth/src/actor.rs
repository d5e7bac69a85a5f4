use serde::{Deserialize, Serialize};

use claimdesk_core::UserId;

use crate::roles::RoleSet;

/// A fully resolved actor for authorization decisions.
///
/// Construction is intentionally decoupled from storage and transport: the
/// caller resolves the identity and its role set once per request (see
/// [`crate::identity::AuthenticatedUser`]) before the engine is consulted.
/// The engine performs no lookups of its own.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Actor {
    pub id: UserId,
    pub roles: RoleSet,
}

impl Actor {
    pub fn new(id: UserId, roles: RoleSet) -> Self {
        Self { id, roles }
    }
}
