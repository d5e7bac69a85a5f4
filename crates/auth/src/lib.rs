//! `claimdesk-auth` — pure authorization boundary (zero-trust).
//!
//! This crate is intentionally decoupled from HTTP and storage: the caller
//! resolves identity, roles, and resource snapshots, and the engine returns a
//! decision value the caller enforces at its own boundary.

pub mod action;
pub mod actor;
pub mod claims;
pub mod decision;
pub mod engine;
pub mod explain;
pub mod graph;
pub mod identity;
pub mod roles;
pub mod scope;
pub mod snapshot;

pub use action::{Action, ActionKind};
pub use actor::Actor;
pub use claims::{JwtClaims, TokenValidationError, validate_claims};
pub use decision::{AccessDecision, AccessDenial, ForbiddenReason};
pub use engine::{AccessRequest, PolicyEngine};
pub use explain::DecisionRecord;
pub use graph::{AssignmentGraph, ClientDirectory, ClientProfiles, SupervisorBindings};
pub use identity::{AuthenticatedUser, IdentityError};
pub use roles::{Role, RoleSet};
pub use scope::ScopeFilter;
pub use snapshot::{
    ClaimSnapshot, ClientSnapshot, LeadSnapshot, ResourceKind, ResourceSnapshot, UserSnapshot,
};
