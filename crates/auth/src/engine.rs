//! The policy engine: the single source of truth for "can actor A do action V
//! on resource type T (optionally on instance snapshot S)?".
//!
//! Evaluation is pure and deterministic: no I/O, no mutation, no clock. All
//! facts (actor roles, resource snapshot, bindings, client profiles) are
//! resolved by the caller before the engine runs, so concurrent evaluation
//! needs no locking.
//!
//! The per-resource rules are encoded as grant tables keyed by
//! `(ResourceKind, ActionKind)` rather than nested role conditionals, so the
//! asymmetries between resources (leads give supervisors no visibility,
//! claims give them coverage rights) are visible data instead of prose.

use serde::{Deserialize, Serialize};

use claimdesk_core::UserId;

use crate::action::{Action, ActionKind};
use crate::actor::Actor;
use crate::decision::{AccessDecision, AccessDenial, ForbiddenReason};
use crate::graph::{AssignmentGraph, ClientDirectory};
use crate::roles::names;
use crate::scope::ScopeFilter;
use crate::snapshot::{ClaimSnapshot, ResourceKind, ResourceSnapshot};

/// One pending operation, fully resolved by the caller.
///
/// `snapshot` is omitted for list actions and for creations without ownership
/// facts (lead create); claim create carries the owning-user fact the caller
/// resolved from the target `client_id`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AccessRequest {
    pub actor: Actor,
    pub action: Action,
    pub resource: ResourceKind,
    pub snapshot: Option<ResourceSnapshot>,
}

impl AccessRequest {
    pub fn new(actor: Actor, action: Action, resource: ResourceKind) -> Self {
        Self {
            actor,
            action,
            resource,
            snapshot: None,
        }
    }

    pub fn with_snapshot(mut self, snapshot: impl Into<ResourceSnapshot>) -> Self {
        self.snapshot = Some(snapshot.into());
        self
    }
}

/// One way an actor can be admitted to an action: an optional role
/// requirement plus an optional relationship requirement. A grant admits the
/// actor only when both hold.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct Grant {
    role: Option<&'static str>,
    relation: Relation,
}

impl Grant {
    /// Any authenticated actor.
    const ANYONE: Grant = Grant {
        role: None,
        relation: Relation::None,
    };

    const fn role(name: &'static str) -> Grant {
        Grant {
            role: Some(name),
            relation: Relation::None,
        }
    }

    const fn related(relation: Relation) -> Grant {
        Grant {
            role: None,
            relation,
        }
    }

    const fn role_related(name: &'static str, relation: Relation) -> Grant {
        Grant {
            role: Some(name),
            relation,
        }
    }
}

/// Relationship tests between the actor and the target instance.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Relation {
    /// No relationship required.
    None,
    /// The snapshot's assigned operator is the actor.
    AssignedOperator,
    /// The claim's assigned supervisor is the actor (direct only; bindings
    /// are not consulted).
    AssignedSupervisor,
    /// The claim's assigned supervisor is the actor, OR the claim's assigned
    /// operator is covered by a binding from the actor. Never transitive.
    SupervisorCoverage,
    /// [`Relation::SupervisorCoverage`] on the claim, AND the operator named
    /// in the action is covered by the actor. A supervisor cannot hand a
    /// claim to an operator they do not supervise.
    SupervisorCoverageOfTarget,
    /// The snapshot's owning user is the actor.
    OwningUser,
    /// The targeted user record is the actor's own.
    TargetSelf,
}

/// The rule table. Empty slice means admin-only (the admin bypass happens
/// before the table is consulted).
mod rules {
    use super::{Grant, Relation};
    use crate::roles::names;

    pub(super) const ADMIN_ONLY: &[Grant] = &[];
    pub(super) const ANYONE: &[Grant] = &[Grant::ANYONE];

    pub(super) const LEAD_CREATE: &[Grant] = &[Grant::role(names::OPERATOR)];
    // Intentionally narrower than claims: no supervisor carve-out for leads.
    pub(super) const LEAD_OWNED: &[Grant] =
        &[Grant::role_related(names::OPERATOR, Relation::AssignedOperator)];
    pub(super) const LEAD_COMMENT: &[Grant] = &[
        Grant::role(names::SUPERVISOR),
        Grant::role_related(names::OPERATOR, Relation::AssignedOperator),
    ];

    pub(super) const CLAIM_CREATE: &[Grant] =
        &[Grant::role_related(names::CLIENT, Relation::OwningUser)];
    // Shared by read and upload_file: any party who can see a claim may
    // attach files to it.
    pub(super) const CLAIM_VIEW: &[Grant] = &[
        Grant::related(Relation::OwningUser),
        Grant::related(Relation::AssignedOperator),
        Grant::related(Relation::AssignedSupervisor),
    ];
    pub(super) const CLAIM_UPDATE: &[Grant] = &[
        Grant::role_related(names::SUPERVISOR, Relation::SupervisorCoverage),
        Grant::role_related(names::OPERATOR, Relation::AssignedOperator),
    ];
    // Update's gates plus the owning client: comment is strictly broader.
    pub(super) const CLAIM_COMMENT: &[Grant] = &[
        Grant::role_related(names::CLIENT, Relation::OwningUser),
        Grant::role_related(names::SUPERVISOR, Relation::SupervisorCoverage),
        Grant::role_related(names::OPERATOR, Relation::AssignedOperator),
    ];
    pub(super) const CLAIM_ASSIGN_OPERATOR: &[Grant] = &[Grant::role_related(
        names::SUPERVISOR,
        Relation::SupervisorCoverageOfTarget,
    )];
    pub(super) const CLAIM_CHANGE_STATUS: &[Grant] =
        &[Grant::role_related(names::SUPERVISOR, Relation::SupervisorCoverage)];

    pub(super) const USER_SELF: &[Grant] = &[Grant::related(Relation::TargetSelf)];
}

fn grants(resource: ResourceKind, action: ActionKind) -> &'static [Grant] {
    use ActionKind as A;
    use ResourceKind as R;

    match (resource, action) {
        (R::Lead, A::Create) => rules::LEAD_CREATE,
        (R::Lead, A::Read | A::Update | A::Delete) => rules::LEAD_OWNED,
        (R::Lead, A::Comment) => rules::LEAD_COMMENT,
        (R::Lead, A::AssignOperator) => rules::ADMIN_ONLY,

        (R::Client, A::Read | A::Comment | A::ReadClaims) => rules::ANYONE,
        (R::Client, A::AssignProduct) => rules::ADMIN_ONLY,

        (R::Claim, A::Create) => rules::CLAIM_CREATE,
        (R::Claim, A::Read | A::UploadFile) => rules::CLAIM_VIEW,
        (R::Claim, A::Update) => rules::CLAIM_UPDATE,
        (R::Claim, A::Comment) => rules::CLAIM_COMMENT,
        (R::Claim, A::AssignOperator) => rules::CLAIM_ASSIGN_OPERATOR,
        (R::Claim, A::AssignSupervisor) => rules::ADMIN_ONLY,
        (R::Claim, A::ChangeStatus) => rules::CLAIM_CHANGE_STATUS,

        (R::Product, A::Read) => rules::ANYONE,
        (R::Product, A::Create | A::Update | A::Delete) => rules::ADMIN_ONLY,

        (R::User, A::Read) => rules::ANYONE,
        (R::User, A::Update | A::ChangePassword) => rules::USER_SELF,
        (R::User, A::Create | A::Deactivate | A::AssignRole | A::BindOperator) => {
            rules::ADMIN_ONLY
        }

        // Silently allowing or denying an uncovered combination would itself
        // be a security bug, so fail loudly.
        (resource, action) => {
            panic!("no access rule for action `{action}` on resource `{resource}`")
        }
    }
}

/// The authorization decision engine.
///
/// Borrows its two read-only fact sources; holds no state of its own.
pub struct PolicyEngine<'a> {
    bindings: &'a dyn AssignmentGraph,
    clients: &'a dyn ClientDirectory,
}

impl<'a> PolicyEngine<'a> {
    pub fn new(bindings: &'a dyn AssignmentGraph, clients: &'a dyn ClientDirectory) -> Self {
        Self { bindings, clients }
    }

    /// Decide whether the requested operation is permitted.
    ///
    /// Never errs for well-typed rule-table input: refusals come back as
    /// structured [`AccessDecision::Deny`] values. Panics on caller bugs: an
    /// action/resource pair outside the rule table, a snapshot of the wrong
    /// resource type, or a missing snapshot for a relationship rule.
    pub fn evaluate(&self, request: &AccessRequest) -> AccessDecision {
        if let Some(snapshot) = &request.snapshot {
            assert_eq!(
                snapshot.kind(),
                request.resource,
                "snapshot type does not match requested resource type"
            );
        }

        let decision = self.decide(request);
        tracing::debug!(
            actor = %request.actor.id,
            resource = %request.resource,
            action = %request.action.kind(),
            allowed = decision.is_allowed(),
            "access decision"
        );
        decision
    }

    fn decide(&self, request: &AccessRequest) -> AccessDecision {
        // Admin bypass is total and first-checked, before any relationship
        // test and regardless of snapshot content.
        if request.actor.roles.is_admin() {
            return match request.action {
                Action::List => AccessDecision::AllowScoped(ScopeFilter::Unrestricted),
                _ => AccessDecision::Allow,
            };
        }

        if let Action::List = request.action {
            return self.list_scope(request);
        }

        let admitted = grants(request.resource, request.action.kind());
        for grant in admitted {
            if self.satisfies(*grant, request) {
                return AccessDecision::Allow;
            }
        }

        let role_admitted = admitted.iter().any(|grant| match grant.role {
            Some(role) => request.actor.roles.has(role),
            None => true,
        });
        let reason = if admitted.is_empty() || !role_admitted {
            ForbiddenReason::RoleNotAdmitted
        } else {
            ForbiddenReason::RelationshipNotSatisfied
        };

        AccessDecision::Deny(AccessDenial::Forbidden {
            resource: request.resource,
            action: request.action.kind(),
            reason,
        })
    }

    /// Scope resolution for list actions.
    ///
    /// Mirrors the item-level rules above: supervisors browsing leads are
    /// scoped as if they were the named operator id (the narrower
    /// single-owner lead rule), while claim listings scope supervisors by
    /// their own direct assignment.
    fn list_scope(&self, request: &AccessRequest) -> AccessDecision {
        let actor = &request.actor;
        let scope = match request.resource {
            ResourceKind::Client | ResourceKind::Product => ScopeFilter::Unrestricted,

            ResourceKind::Lead => {
                if actor.roles.has(names::OPERATOR) || actor.roles.has(names::SUPERVISOR) {
                    ScopeFilter::ByAssignedOperator(actor.id)
                } else {
                    return self.deny_list(request, ForbiddenReason::RoleNotAdmitted);
                }
            }

            ResourceKind::Claim => {
                if actor.roles.has(names::SUPERVISOR) {
                    ScopeFilter::ByAssignedSupervisor(actor.id)
                } else if actor.roles.has(names::OPERATOR) {
                    ScopeFilter::ByAssignedOperator(actor.id)
                } else if self.clients.client_for(actor.id).is_some() {
                    ScopeFilter::ByOwningUser(actor.id)
                } else {
                    // Distinct from Forbidden: the caller answers
                    // not-found-style instead of denial-style.
                    return AccessDecision::Deny(AccessDenial::ProfileNotFound);
                }
            }

            ResourceKind::User => {
                if actor.roles.has(names::SUPERVISOR) {
                    ScopeFilter::Unrestricted
                } else {
                    return self.deny_list(request, ForbiddenReason::RoleNotAdmitted);
                }
            }
        };

        AccessDecision::AllowScoped(scope)
    }

    fn deny_list(&self, request: &AccessRequest, reason: ForbiddenReason) -> AccessDecision {
        AccessDecision::Deny(AccessDenial::Forbidden {
            resource: request.resource,
            action: ActionKind::List,
            reason,
        })
    }

    fn satisfies(&self, grant: Grant, request: &AccessRequest) -> bool {
        if let Some(role) = grant.role {
            if !request.actor.roles.has(role) {
                return false;
            }
        }

        let actor_id = request.actor.id;
        match grant.relation {
            Relation::None => true,

            Relation::AssignedOperator => match self.snapshot(request) {
                ResourceSnapshot::Lead(lead) => lead.assigned_operator_id == Some(actor_id),
                ResourceSnapshot::Claim(claim) => claim.assigned_operator_id == Some(actor_id),
                _ => panic!("operator-assignment rule on a resource without one"),
            },

            Relation::AssignedSupervisor => {
                self.claim(request).assigned_supervisor_id == Some(actor_id)
            }

            Relation::SupervisorCoverage => self.supervisor_covers(actor_id, request),

            Relation::SupervisorCoverageOfTarget => {
                let target = match request.action {
                    Action::AssignOperator { operator_id } => operator_id,
                    _ => panic!("target-coverage rule on an action without a target operator"),
                };
                self.supervisor_covers(actor_id, request)
                    && self.bindings.covers(actor_id, target)
            }

            Relation::OwningUser => match self.snapshot(request) {
                ResourceSnapshot::Claim(claim) => claim.client_owning_user_id == actor_id,
                ResourceSnapshot::Client(client) => client.owning_user_id == actor_id,
                _ => panic!("ownership rule on a resource without an owning user"),
            },

            Relation::TargetSelf => match self.snapshot(request) {
                ResourceSnapshot::User(user) => user.user_id == actor_id,
                _ => panic!("self-target rule on a non-user resource"),
            },
        }
    }

    /// Direct assignment or a binding to the claim's assigned operator.
    fn supervisor_covers(&self, supervisor_id: UserId, request: &AccessRequest) -> bool {
        let claim = self.claim(request);
        if claim.assigned_supervisor_id == Some(supervisor_id) {
            return true;
        }
        claim
            .assigned_operator_id
            .is_some_and(|operator_id| self.bindings.covers(supervisor_id, operator_id))
    }

    fn claim<'r>(&self, request: &'r AccessRequest) -> &'r ClaimSnapshot {
        match self.snapshot(request) {
            ResourceSnapshot::Claim(claim) => claim,
            _ => panic!("supervisor-coverage rule on a non-claim resource"),
        }
    }

    fn snapshot<'r>(&self, request: &'r AccessRequest) -> &'r ResourceSnapshot {
        request.snapshot.as_ref().unwrap_or_else(|| {
            panic!(
                "missing snapshot for action `{}` on resource `{}`",
                request.action.kind(),
                request.resource
            )
        })
    }
}
