use std::borrow::Cow;
use std::collections::HashSet;

use serde::{Deserialize, Serialize};

/// Well-known role names.
///
/// The set is open: organizations may define further roles, which the engine
/// treats as unprivileged unless a rule names them.
pub mod names {
    pub const ADMIN: &str = "admin";
    pub const SUPERVISOR: &str = "supervisor";
    pub const OPERATOR: &str = "operator";
    pub const CLIENT: &str = "client";
}

/// Role identifier used for RBAC.
///
/// Roles are opaque strings at this layer. Names are case-insensitive: they
/// are normalized to lowercase at construction, so `Role::new("Admin")` and
/// `Role::new("admin")` compare equal.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Role(Cow<'static, str>);

impl Role {
    pub fn new(name: impl AsRef<str>) -> Self {
        Self(Cow::Owned(name.as_ref().to_lowercase()))
    }

    pub fn admin() -> Self {
        Self(Cow::Borrowed(names::ADMIN))
    }

    pub fn supervisor() -> Self {
        Self(Cow::Borrowed(names::SUPERVISOR))
    }

    pub fn operator() -> Self {
        Self(Cow::Borrowed(names::OPERATOR))
    }

    pub fn client() -> Self {
        Self(Cow::Borrowed(names::CLIENT))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl core::fmt::Display for Role {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(&self.0)
    }
}

/// The set of roles held by an actor, resolved once per request.
///
/// Roles never expire within a request; an actor may hold several at once
/// (e.g. supervisor and operator).
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct RoleSet(HashSet<Role>);

impl RoleSet {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn has(&self, name: &str) -> bool {
        self.0.contains(&Role::new(name))
    }

    pub fn is_admin(&self) -> bool {
        self.has(names::ADMIN)
    }

    pub fn insert(&mut self, role: Role) {
        self.0.insert(role);
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Role> {
        self.0.iter()
    }
}

impl FromIterator<Role> for RoleSet {
    fn from_iter<I: IntoIterator<Item = Role>>(iter: I) -> Self {
        Self(iter.into_iter().collect())
    }
}
