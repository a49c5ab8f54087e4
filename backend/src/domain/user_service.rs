//! User resource operations.
//!
//! Each verb validates its payload, performs a single store call and
//! translates store failures by constraint identity.

use std::sync::Arc;

use async_trait::async_trait;
use tracing::debug;

use crate::domain::ports::{TodoRepository, UserOperations, UserRepository};
use crate::domain::translation::{WriteContext, translate_store_error};
use crate::domain::{Error, Todo, TodoFilter, User, UserDraft, UserId, UserPayload, Validator};

/// Service implementing [`UserOperations`] over the store ports.
#[derive(Clone)]
pub struct UserService {
    users: Arc<dyn UserRepository>,
    todos: Arc<dyn TodoRepository>,
    validator: Arc<dyn Validator>,
}

impl UserService {
    /// Create a new service with the given ports.
    pub fn new(
        users: Arc<dyn UserRepository>,
        todos: Arc<dyn TodoRepository>,
        validator: Arc<dyn Validator>,
    ) -> Self {
        Self {
            users,
            todos,
            validator,
        }
    }
}

#[async_trait]
impl UserOperations for UserService {
    async fn create_user(&self, payload: UserPayload) -> Result<User, Error> {
        self.validator.check(&payload)?;
        let draft = UserDraft::from(payload);
        self.users
            .create(&draft)
            .await
            .map_err(|err| translate_store_error(err, WriteContext::new()))
    }

    async fn list_users(&self) -> Result<Vec<User>, Error> {
        self.users
            .list()
            .await
            .map_err(|err| translate_store_error(err, WriteContext::new()))
    }

    async fn update_user(&self, id: UserId, payload: UserPayload) -> Result<User, Error> {
        self.validator.check(&payload)?;
        let draft = UserDraft::from(payload);
        self.users
            .update(id, &draft)
            .await
            .map_err(|err| translate_store_error(err, WriteContext::for_user(id)))
    }

    async fn delete_user(&self, id: UserId) -> Result<(), Error> {
        let removed = self
            .users
            .delete(id)
            .await
            .map_err(|err| translate_store_error(err, WriteContext::for_user(id)))?;
        debug!(user_id = %id, removed, "user delete");
        if removed == 0 {
            return Err(Error::user_not_found(id));
        }
        Ok(())
    }

    async fn list_user_todos(&self, id: UserId, filter: TodoFilter) -> Result<Vec<Todo>, Error> {
        let ctx = WriteContext::for_user(id);
        let known = self
            .users
            .exists(id)
            .await
            .map_err(|err| translate_store_error(err, ctx))?;
        if !known {
            return Err(Error::user_not_found(id));
        }
        self.todos
            .list_for_user(id, filter)
            .await
            .map_err(|err| translate_store_error(err, ctx))
    }
}

#[cfg(test)]
#[path = "user_service_tests.rs"]
mod tests;
