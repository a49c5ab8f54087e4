//! Port abstraction for todo and assignment persistence adapters.
use async_trait::async_trait;

use crate::domain::{Assignment, Todo, TodoChanges, TodoDraft, TodoFilter, TodoId, UserId};

use super::StoreError;

/// Typed CRUD access to stored todos and their assignments.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait TodoRepository: Send + Sync {
    /// Insert a todo and return the stored row with its assigned id.
    ///
    /// A missing creator surfaces as a foreign-key
    /// [`StoreError::ConstraintViolation`].
    async fn create(&self, draft: &TodoDraft) -> Result<Todo, StoreError>;

    /// Every stored todo in id order.
    async fn list(&self) -> Result<Vec<Todo>, StoreError>;

    /// Todos related to `user` as selected by `filter`, in id order.
    async fn list_for_user(&self, user: UserId, filter: TodoFilter)
    -> Result<Vec<Todo>, StoreError>;

    /// Replace the mutable fields of todo `id`.
    ///
    /// Returns [`StoreError::NotFound`] when no row has that id.
    async fn update(&self, id: TodoId, changes: &TodoChanges) -> Result<Todo, StoreError>;

    /// Remove todo `id`, returning the number of rows deleted.
    async fn delete(&self, id: TodoId) -> Result<u64, StoreError>;

    /// Record an assignment.
    ///
    /// Missing rows and duplicate pairs surface as
    /// [`StoreError::ConstraintViolation`].
    async fn assign(&self, assignment: Assignment) -> Result<(), StoreError>;
}
