//! Todo resource operations.

use std::sync::Arc;

use async_trait::async_trait;
use tracing::debug;

use crate::domain::ports::{TodoOperations, TodoRepository};
use crate::domain::translation::{WriteContext, translate_store_error};
use crate::domain::{
    Assignment, Error, Todo, TodoAssignPayload, TodoChanges, TodoCreatePayload, TodoDraft,
    TodoId, TodoUpdatePayload, Validator,
};

/// Service implementing [`TodoOperations`] over the store port.
#[derive(Clone)]
pub struct TodoService {
    todos: Arc<dyn TodoRepository>,
    validator: Arc<dyn Validator>,
}

impl TodoService {
    /// Create a new service with the given ports.
    pub fn new(todos: Arc<dyn TodoRepository>, validator: Arc<dyn Validator>) -> Self {
        Self { todos, validator }
    }
}

#[async_trait]
impl TodoOperations for TodoService {
    async fn create_todo(&self, payload: TodoCreatePayload) -> Result<Todo, Error> {
        self.validator.check(&payload)?;
        let draft = TodoDraft::from(payload);
        let ctx = WriteContext::new().referencing_user(draft.creator_id);
        self.todos
            .create(&draft)
            .await
            .map_err(|err| translate_store_error(err, ctx))
    }

    async fn list_todos(&self) -> Result<Vec<Todo>, Error> {
        self.todos
            .list()
            .await
            .map_err(|err| translate_store_error(err, WriteContext::new()))
    }

    async fn update_todo(&self, id: TodoId, payload: TodoUpdatePayload) -> Result<Todo, Error> {
        self.validator.check(&payload)?;
        let changes = TodoChanges::from(payload);
        let ctx = WriteContext::for_todo(id).referencing_user(changes.creator_id);
        self.todos
            .update(id, &changes)
            .await
            .map_err(|err| translate_store_error(err, ctx))
    }

    async fn delete_todo(&self, id: TodoId) -> Result<(), Error> {
        let removed = self
            .todos
            .delete(id)
            .await
            .map_err(|err| translate_store_error(err, WriteContext::for_todo(id)))?;
        debug!(todo_id = %id, removed, "todo delete");
        if removed == 0 {
            return Err(Error::todo_not_found(id));
        }
        Ok(())
    }

    async fn assign_todo(&self, id: TodoId, payload: TodoAssignPayload) -> Result<(), Error> {
        self.validator.check(&payload)?;
        let assignment = Assignment {
            todo_id: id,
            user_id: payload.assignee(),
        };
        let ctx = WriteContext::for_todo(id).referencing_user(assignment.user_id);
        self.todos
            .assign(assignment)
            .await
            .map_err(|err| translate_store_error(err, ctx))
    }
}

#[cfg(test)]
#[path = "todo_service_tests.rs"]
mod tests;
