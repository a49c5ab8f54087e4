//! Driving port for the todo resource.
use async_trait::async_trait;

use crate::domain::{
    Error, Todo, TodoAssignPayload, TodoCreatePayload, TodoId, TodoUpdatePayload,
};

/// Use cases exposed to inbound adapters for todos.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait TodoOperations: Send + Sync {
    /// Validate and store a new todo.
    async fn create_todo(&self, payload: TodoCreatePayload) -> Result<Todo, Error>;

    /// Every stored todo.
    async fn list_todos(&self) -> Result<Vec<Todo>, Error>;

    /// Validate and replace todo `id`.
    async fn update_todo(&self, id: TodoId, payload: TodoUpdatePayload) -> Result<Todo, Error>;

    /// Remove todo `id`.
    async fn delete_todo(&self, id: TodoId) -> Result<(), Error>;

    /// Validate and record an assignee for todo `id`.
    async fn assign_todo(&self, id: TodoId, payload: TodoAssignPayload) -> Result<(), Error>;
}
