use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::action::ActionKind;
use crate::scope::ScopeFilter;
use crate::snapshot::ResourceKind;

/// Outcome of a policy evaluation.
///
/// Decisions are returned, never thrown for control flow, so callers can
/// pattern-match exhaustively. List actions come back as `AllowScoped`; item
/// actions as `Allow`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum AccessDecision {
    Allow,
    AllowScoped(ScopeFilter),
    Deny(AccessDenial),
}

impl AccessDecision {
    pub fn is_allowed(&self) -> bool {
        !matches!(self, AccessDecision::Deny(_))
    }

    /// The scope filter, when this is a list decision.
    pub fn scope(&self) -> Option<ScopeFilter> {
        match self {
            AccessDecision::AllowScoped(scope) => Some(*scope),
            _ => None,
        }
    }

    /// Bridge into `?`-style call sites: `Ok` carries the list scope when
    /// there is one.
    pub fn into_result(self) -> Result<Option<ScopeFilter>, AccessDenial> {
        match self {
            AccessDecision::Allow => Ok(None),
            AccessDecision::AllowScoped(scope) => Ok(Some(scope)),
            AccessDecision::Deny(denial) => Err(denial),
        }
    }
}

/// Structured denial.
///
/// `Forbidden` is an access-denied outcome (403-style at the transport
/// layer); `ProfileNotFound` is raised only when scoping a client's claim
/// listing and the actor has no linked client profile, so callers can answer
/// not-found-style (404) instead. Neither is ever retried.
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum AccessDenial {
    #[error("{action} on {resource} forbidden: {reason}")]
    Forbidden {
        resource: ResourceKind,
        action: ActionKind,
        reason: ForbiddenReason,
    },

    #[error("no client profile linked to this user")]
    ProfileNotFound,
}

/// Why a forbidden outcome was reached.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ForbiddenReason {
    /// None of the actor's roles are admitted to this action.
    RoleNotAdmitted,
    /// A role was admitted, but the required ownership/assignment
    /// relationship does not hold.
    RelationshipNotSatisfied,
}

impl core::fmt::Display for ForbiddenReason {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            ForbiddenReason::RoleNotAdmitted => f.write_str("role not admitted"),
            ForbiddenReason::RelationshipNotSatisfied => {
                f.write_str("relationship not satisfied")
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use claimdesk_core::UserId;

    #[test]
    fn into_result_surfaces_scope_and_denial() {
        assert_eq!(AccessDecision::Allow.into_result(), Ok(None));

        let scoped = AccessDecision::AllowScoped(ScopeFilter::ByOwningUser(UserId::new(11)));
        assert_eq!(
            scoped.into_result(),
            Ok(Some(ScopeFilter::ByOwningUser(UserId::new(11))))
        );

        let denied = AccessDecision::Deny(AccessDenial::ProfileNotFound);
        assert_eq!(denied.into_result(), Err(AccessDenial::ProfileNotFound));
    }

    #[test]
    fn forbidden_display_names_the_action_and_resource() {
        let denial = AccessDenial::Forbidden {
            resource: ResourceKind::Claim,
            action: ActionKind::Update,
            reason: ForbiddenReason::RelationshipNotSatisfied,
        };
        assert_eq!(
            denial.to_string(),
            "update on claim forbidden: relationship not satisfied"
        );
    }
}
