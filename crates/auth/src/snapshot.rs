use serde::{Deserialize, Serialize};

use claimdesk_core::UserId;

/// The resource types the engine knows how to gate.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ResourceKind {
    Lead,
    Client,
    Claim,
    Product,
    User,
}

impl core::fmt::Display for ResourceKind {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        let name = match self {
            ResourceKind::Lead => "lead",
            ResourceKind::Client => "client",
            ResourceKind::Claim => "claim",
            ResourceKind::Product => "product",
            ResourceKind::User => "user",
        };
        f.write_str(name)
    }
}

/// Ownership facts of one lead instance.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct LeadSnapshot {
    pub assigned_operator_id: Option<UserId>,
}

/// Ownership facts of one client profile.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ClientSnapshot {
    /// The user account the profile is linked to (one-to-one).
    pub owning_user_id: UserId,
}

/// Ownership and assignment facts of one claim instance.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ClaimSnapshot {
    /// User account owning the client profile the claim belongs to.
    pub client_owning_user_id: UserId,
    pub assigned_operator_id: Option<UserId>,
    pub assigned_supervisor_id: Option<UserId>,
}

/// Identity of the user record an action targets (needed for self-service
/// rules like "users may update their own profile").
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserSnapshot {
    pub user_id: UserId,
}

/// A read-only, resource-type-specific view of the ownership/assignment
/// fields relevant to a decision.
///
/// Snapshots are constructed fresh per request from current storage state and
/// must reflect a single consistent point-in-time read; the engine never
/// caches them across requests. Products carry no ownership dimension, so
/// there is no product variant.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ResourceSnapshot {
    Lead(LeadSnapshot),
    Client(ClientSnapshot),
    Claim(ClaimSnapshot),
    User(UserSnapshot),
}

impl ResourceSnapshot {
    pub fn kind(&self) -> ResourceKind {
        match self {
            ResourceSnapshot::Lead(_) => ResourceKind::Lead,
            ResourceSnapshot::Client(_) => ResourceKind::Client,
            ResourceSnapshot::Claim(_) => ResourceKind::Claim,
            ResourceSnapshot::User(_) => ResourceKind::User,
        }
    }
}

impl From<LeadSnapshot> for ResourceSnapshot {
    fn from(value: LeadSnapshot) -> Self {
        Self::Lead(value)
    }
}

impl From<ClientSnapshot> for ResourceSnapshot {
    fn from(value: ClientSnapshot) -> Self {
        Self::Client(value)
    }
}

impl From<ClaimSnapshot> for ResourceSnapshot {
    fn from(value: ClaimSnapshot) -> Self {
        Self::Claim(value)
    }
}

impl From<UserSnapshot> for ResourceSnapshot {
    fn from(value: UserSnapshot) -> Self {
        Self::User(value)
    }
}
