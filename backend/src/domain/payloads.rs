//! Request payloads and their validation rules.
//!
//! Missing fields decode to their zero value so they surface as `required`
//! violations rather than decode failures. Unknown fields are ignored.

use serde::{Deserialize, Serialize};

use crate::domain::ids::UserId;
use crate::domain::todo::{TodoChanges, TodoDraft};
use crate::domain::user::UserDraft;
use crate::domain::validation::{FieldRules, Rule, Validate};

const USERNAME_RULES: &[Rule] = &[Rule::Required, Rule::Min(3), Rule::Max(20)];
const EMAIL_RULES: &[Rule] = &[Rule::Required, Rule::Email];
const PASSWORD_RULES: &[Rule] = &[Rule::Required, Rule::Min(8), Rule::Max(255)];
const TITLE_RULES: &[Rule] = &[Rule::Required, Rule::Min(1), Rule::Max(255)];
const DESCRIPTION_RULES: &[Rule] = &[Rule::Max(1000)];
const REFERENCE_RULES: &[Rule] = &[Rule::Required, Rule::Min(1)];
const PRESENT_RULES: &[Rule] = &[Rule::Required];

/// Body of user create and replace requests.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct UserPayload {
    pub username: String,
    pub email: String,
    pub password: String,
}

impl Validate for UserPayload {
    fn field_rules(&self) -> Vec<FieldRules<'_>> {
        vec![
            FieldRules::text("username", &self.username, USERNAME_RULES),
            FieldRules::text("email", &self.email, EMAIL_RULES),
            FieldRules::text("password", &self.password, PASSWORD_RULES),
        ]
    }
}

impl From<UserPayload> for UserDraft {
    fn from(payload: UserPayload) -> Self {
        Self {
            username: payload.username,
            email: payload.email,
            password: payload.password,
        }
    }
}

/// Body of todo create requests.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct TodoCreatePayload {
    pub title: String,
    pub description: String,
    pub creator_id: i32,
}

impl Validate for TodoCreatePayload {
    fn field_rules(&self) -> Vec<FieldRules<'_>> {
        vec![
            FieldRules::text("title", &self.title, TITLE_RULES),
            FieldRules::text("description", &self.description, DESCRIPTION_RULES),
            FieldRules::integer("creatorId", i64::from(self.creator_id), REFERENCE_RULES),
        ]
    }
}

impl From<TodoCreatePayload> for TodoDraft {
    fn from(payload: TodoCreatePayload) -> Self {
        Self {
            title: payload.title,
            description: payload.description,
            creator_id: UserId::new(payload.creator_id),
        }
    }
}

/// Body of todo replace requests. `completed` must be present.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct TodoUpdatePayload {
    pub title: String,
    pub description: String,
    pub creator_id: i32,
    pub completed: Option<bool>,
}

impl Validate for TodoUpdatePayload {
    fn field_rules(&self) -> Vec<FieldRules<'_>> {
        vec![
            FieldRules::text("title", &self.title, TITLE_RULES),
            FieldRules::text("description", &self.description, DESCRIPTION_RULES),
            FieldRules::integer("creatorId", i64::from(self.creator_id), REFERENCE_RULES),
            FieldRules::flag("completed", self.completed, PRESENT_RULES),
        ]
    }
}

impl From<TodoUpdatePayload> for TodoChanges {
    fn from(payload: TodoUpdatePayload) -> Self {
        Self {
            title: payload.title,
            description: payload.description,
            creator_id: UserId::new(payload.creator_id),
            completed: payload.completed.unwrap_or_default(),
        }
    }
}

/// Body of todo assignment requests.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct TodoAssignPayload {
    pub user_id: i32,
}

impl TodoAssignPayload {
    /// The assignee named by the payload.
    pub const fn assignee(&self) -> UserId {
        UserId::new(self.user_id)
    }
}

impl Validate for TodoAssignPayload {
    fn field_rules(&self) -> Vec<FieldRules<'_>> {
        vec![FieldRules::integer(
            "userId",
            i64::from(self.user_id),
            REFERENCE_RULES,
        )]
    }
}
