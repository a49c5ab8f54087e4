//! User data model.

use serde::Serialize;

use crate::domain::ids::UserId;

/// A stored user row.
///
/// The password is kept as given; hashing is outside this service. Outbound
/// representations drop it, see the HTTP response schemas.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct User {
    pub id: UserId,
    pub username: String,
    pub email: String,
    pub password: String,
}

/// Validated field values used to create or replace a user.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct UserDraft {
    pub username: String,
    pub email: String,
    pub password: String,
}

impl UserDraft {
    /// Materialise the draft as the row stored under `id`.
    pub fn into_user(self, id: UserId) -> User {
        User {
            id,
            username: self.username,
            email: self.email,
            password: self.password,
        }
    }
}
