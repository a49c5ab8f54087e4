//! Port abstraction for user persistence adapters.
use async_trait::async_trait;

use crate::domain::{User, UserDraft, UserId};

use super::StoreError;

/// Typed CRUD access to stored users.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait UserRepository: Send + Sync {
    /// Insert a user and return the stored row with its assigned id.
    async fn create(&self, draft: &UserDraft) -> Result<User, StoreError>;

    /// Every stored user in id order.
    async fn list(&self) -> Result<Vec<User>, StoreError>;

    /// Replace the mutable fields of user `id`.
    ///
    /// Returns [`StoreError::NotFound`] when no row has that id.
    async fn update(&self, id: UserId, draft: &UserDraft) -> Result<User, StoreError>;

    /// Remove user `id`, returning the number of rows deleted.
    async fn delete(&self, id: UserId) -> Result<u64, StoreError>;

    /// Whether a user with `id` is stored.
    async fn exists(&self, id: UserId) -> Result<bool, StoreError>;
}
