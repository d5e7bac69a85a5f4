use serde::{Deserialize, Serialize};

use claimdesk_core::UserId;

/// An operation an actor is attempting.
///
/// Variants carry a payload only where the rule needs one: assigning an
/// operator to a claim requires knowing *which* operator, because a
/// supervisor may only hand claims to operators they cover.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum Action {
    Create,
    Read,
    Update,
    Delete,
    List,
    Comment,
    UploadFile,
    ReadClaims,
    AssignProduct,
    AssignOperator { operator_id: UserId },
    AssignSupervisor { supervisor_id: UserId },
    ChangeStatus,
    ChangePassword,
    Deactivate,
    AssignRole,
    BindOperator,
}

impl Action {
    pub fn kind(&self) -> ActionKind {
        match self {
            Action::Create => ActionKind::Create,
            Action::Read => ActionKind::Read,
            Action::Update => ActionKind::Update,
            Action::Delete => ActionKind::Delete,
            Action::List => ActionKind::List,
            Action::Comment => ActionKind::Comment,
            Action::UploadFile => ActionKind::UploadFile,
            Action::ReadClaims => ActionKind::ReadClaims,
            Action::AssignProduct => ActionKind::AssignProduct,
            Action::AssignOperator { .. } => ActionKind::AssignOperator,
            Action::AssignSupervisor { .. } => ActionKind::AssignSupervisor,
            Action::ChangeStatus => ActionKind::ChangeStatus,
            Action::ChangePassword => ActionKind::ChangePassword,
            Action::Deactivate => ActionKind::Deactivate,
            Action::AssignRole => ActionKind::AssignRole,
            Action::BindOperator => ActionKind::BindOperator,
        }
    }
}

/// Fieldless mirror of [`Action`], used in denials and decision records so
/// they stay `Copy` and cheap to compare.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ActionKind {
    Create,
    Read,
    Update,
    Delete,
    List,
    Comment,
    UploadFile,
    ReadClaims,
    AssignProduct,
    AssignOperator,
    AssignSupervisor,
    ChangeStatus,
    ChangePassword,
    Deactivate,
    AssignRole,
    BindOperator,
}

impl core::fmt::Display for ActionKind {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        let name = match self {
            ActionKind::Create => "create",
            ActionKind::Read => "read",
            ActionKind::Update => "update",
            ActionKind::Delete => "delete",
            ActionKind::List => "list",
            ActionKind::Comment => "comment",
            ActionKind::UploadFile => "upload_file",
            ActionKind::ReadClaims => "read_claims",
            ActionKind::AssignProduct => "assign_product",
            ActionKind::AssignOperator => "assign_operator",
            ActionKind::AssignSupervisor => "assign_supervisor",
            ActionKind::ChangeStatus => "change_status",
            ActionKind::ChangePassword => "change_password",
            ActionKind::Deactivate => "deactivate",
            ActionKind::AssignRole => "assign_role",
            ActionKind::BindOperator => "bind_operator",
        };
        f.write_str(name)
    }
}
