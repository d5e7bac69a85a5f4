use serde::{Deserialize, Serialize};

use claimdesk_core::UserId;

use crate::snapshot::ResourceSnapshot;

/// A declarative narrowing the caller applies to a list query.
///
/// Exactly one variant is returned per list decision; the variants are a
/// precedence, never a conjunction. `Unrestricted` comes back if and only if
/// the actor is admin or the rule table grants unscoped listing explicitly —
/// callers must not stack additional ad hoc narrowing on top, or their
/// queries drift from the policy.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case", tag = "by", content = "id")]
pub enum ScopeFilter {
    Unrestricted,
    ByAssignedOperator(UserId),
    ByAssignedSupervisor(UserId),
    ByOwningUser(UserId),
}

impl ScopeFilter {
    /// Whether a single resource instance falls inside this scope.
    ///
    /// Storage backends translate the filter into a query-level restriction
    /// instead; this predicate is the reference semantics for that
    /// translation, and what in-memory callers and tests apply directly.
    pub fn permits(&self, snapshot: &ResourceSnapshot) -> bool {
        match *self {
            ScopeFilter::Unrestricted => true,
            ScopeFilter::ByAssignedOperator(id) => match snapshot {
                ResourceSnapshot::Lead(lead) => lead.assigned_operator_id == Some(id),
                ResourceSnapshot::Claim(claim) => claim.assigned_operator_id == Some(id),
                _ => false,
            },
            ScopeFilter::ByAssignedSupervisor(id) => match snapshot {
                ResourceSnapshot::Claim(claim) => claim.assigned_supervisor_id == Some(id),
                _ => false,
            },
            ScopeFilter::ByOwningUser(id) => match snapshot {
                ResourceSnapshot::Claim(claim) => claim.client_owning_user_id == id,
                ResourceSnapshot::Client(client) => client.owning_user_id == id,
                _ => false,
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::snapshot::{ClaimSnapshot, LeadSnapshot};

    fn claim(owner: i64, operator: Option<i64>, supervisor: Option<i64>) -> ResourceSnapshot {
        ResourceSnapshot::Claim(ClaimSnapshot {
            client_owning_user_id: UserId::new(owner),
            assigned_operator_id: operator.map(UserId::new),
            assigned_supervisor_id: supervisor.map(UserId::new),
        })
    }

    #[test]
    fn unrestricted_permits_everything() {
        assert!(ScopeFilter::Unrestricted.permits(&claim(1, None, None)));
    }

    #[test]
    fn operator_scope_matches_assignment_only() {
        let scope = ScopeFilter::ByAssignedOperator(UserId::new(7));
        assert!(scope.permits(&claim(1, Some(7), None)));
        assert!(!scope.permits(&claim(1, Some(9), None)));
        assert!(!scope.permits(&claim(1, None, None)));
    }

    #[test]
    fn operator_scope_applies_to_leads() {
        let scope = ScopeFilter::ByAssignedOperator(UserId::new(7));
        assert!(scope.permits(&ResourceSnapshot::Lead(LeadSnapshot {
            assigned_operator_id: Some(UserId::new(7)),
        })));
        assert!(!scope.permits(&ResourceSnapshot::Lead(LeadSnapshot {
            assigned_operator_id: None,
        })));
    }

    #[test]
    fn owning_user_scope_matches_claim_owner() {
        let scope = ScopeFilter::ByOwningUser(UserId::new(11));
        assert!(scope.permits(&claim(11, Some(7), None)));
        assert!(!scope.permits(&claim(12, Some(7), None)));
    }

    #[test]
    fn supervisor_scope_requires_direct_assignment() {
        let scope = ScopeFilter::ByAssignedSupervisor(UserId::new(3));
        assert!(scope.permits(&claim(1, Some(9), Some(3))));
        assert!(!scope.permits(&claim(1, Some(9), None)));
    }
}
