//! Driving port for the user resource.
use async_trait::async_trait;

use crate::domain::{Error, Todo, TodoFilter, User, UserId, UserPayload};

/// Use cases exposed to inbound adapters for users.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait UserOperations: Send + Sync {
    /// Validate and store a new user.
    async fn create_user(&self, payload: UserPayload) -> Result<User, Error>;

    /// Every stored user.
    async fn list_users(&self) -> Result<Vec<User>, Error>;

    /// Validate and replace user `id`.
    async fn update_user(&self, id: UserId, payload: UserPayload) -> Result<User, Error>;

    /// Remove user `id`.
    async fn delete_user(&self, id: UserId) -> Result<(), Error>;

    /// Todos related to user `id`, selected by `filter`.
    async fn list_user_todos(&self, id: UserId, filter: TodoFilter) -> Result<Vec<Todo>, Error>;
}
