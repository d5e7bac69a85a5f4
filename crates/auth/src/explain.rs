//! Serializable record of a decision, for audit sinks.
//!
//! The engine itself never persists or audits anything; callers that keep an
//! activity log serialize one of these after each evaluation.

use serde::Serialize;

use claimdesk_core::UserId;

use crate::action::ActionKind;
use crate::decision::{AccessDecision, AccessDenial};
use crate::engine::AccessRequest;
use crate::scope::ScopeFilter;
use crate::snapshot::ResourceKind;

/// What was asked, by whom, and how it was decided.
#[derive(Debug, Clone, Serialize)]
pub struct DecisionRecord {
    pub actor_id: UserId,

    /// Role names, sorted for stable output.
    pub roles: Vec<String>,

    pub resource: ResourceKind,
    pub action: ActionKind,
    pub granted: bool,

    /// Scope the caller was told to apply, for list decisions.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub scope: Option<ScopeFilter>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub denial: Option<AccessDenial>,
}

impl DecisionRecord {
    pub fn new(request: &AccessRequest, decision: &AccessDecision) -> Self {
        let mut roles: Vec<String> = request
            .actor
            .roles
            .iter()
            .map(|role| role.as_str().to_string())
            .collect();
        roles.sort();

        let (scope, denial) = match decision {
            AccessDecision::Allow => (None, None),
            AccessDecision::AllowScoped(scope) => (Some(*scope), None),
            AccessDecision::Deny(denial) => (None, Some(*denial)),
        };

        Self {
            actor_id: request.actor.id,
            roles,
            resource: request.resource,
            action: request.action.kind(),
            granted: decision.is_allowed(),
            scope,
            denial,
        }
    }
}
