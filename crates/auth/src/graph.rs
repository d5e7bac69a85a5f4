//! Read-only fact sources the engine consults during evaluation.
//!
//! Both traits are pure lookups against externally owned data (the persisted
//! binding table and the client-profile table). Mutation — creating or
//! removing bindings, registering client profiles — is the storage
//! collaborator's concern and never happens here.

use std::collections::{HashMap, HashSet};

use claimdesk_core::{ClientId, UserId};

/// The directed supervisor→operator binding relation.
///
/// The relation is many-to-many and **non-transitive**: a chain of
/// supervisors is never collapsed, each binding is checked independently, and
/// the engine never infers covers-of-covers.
pub trait AssignmentGraph {
    /// Does a binding `(supervisor_id, operator_id)` exist?
    fn covers(&self, supervisor_id: UserId, operator_id: UserId) -> bool;
}

/// In-memory binding set, for tests and callers that preload bindings.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SupervisorBindings {
    edges: HashSet<(UserId, UserId)>,
}

impl SupervisorBindings {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn bind(&mut self, supervisor_id: UserId, operator_id: UserId) {
        self.edges.insert((supervisor_id, operator_id));
    }
}

impl AssignmentGraph for SupervisorBindings {
    fn covers(&self, supervisor_id: UserId, operator_id: UserId) -> bool {
        self.edges.contains(&(supervisor_id, operator_id))
    }
}

/// Resolves which client profile, if any, a user account owns.
///
/// Consulted only when scoping a client's claim listing: a client-role actor
/// with no linked profile must get a distinct not-found outcome rather than a
/// silently empty result set.
pub trait ClientDirectory {
    fn client_for(&self, owning_user_id: UserId) -> Option<ClientId>;
}

/// In-memory user→client mapping, for tests and preloaded callers.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ClientProfiles {
    by_owner: HashMap<UserId, ClientId>,
}

impl ClientProfiles {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn register(&mut self, owning_user_id: UserId, client_id: ClientId) {
        self.by_owner.insert(owning_user_id, client_id);
    }
}

impl ClientDirectory for ClientProfiles {
    fn client_for(&self, owning_user_id: UserId) -> Option<ClientId> {
        self.by_owner.get(&owning_user_id).copied()
    }
}
