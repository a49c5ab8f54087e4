//! In-memory store adapter for tests.
//!
//! [`InMemoryStore`] implements both repository ports over a mutex-guarded
//! map and reports constraint failures under the same names the PostgreSQL
//! schema declares, so the domain translator sees identical errors whichever
//! store is plugged in. Deletes cascade the way `ON DELETE CASCADE` does.

use std::collections::{BTreeMap, BTreeSet};
use std::sync::{Mutex, MutexGuard, PoisonError};

use async_trait::async_trait;

use crate::domain::ports::{ConstraintKind, StoreError, TodoRepository, UserRepository};
use crate::domain::translation::{
    ASSIGNMENT_PKEY, ASSIGNMENT_TODO_FKEY, ASSIGNMENT_USER_FKEY, TODO_CREATOR_FKEY,
};
use crate::domain::{
    Assignment, Todo, TodoChanges, TodoDraft, TodoFilter, TodoId, User, UserDraft, UserId,
};

/// Unique index on `users.username`.
pub const USERNAME_KEY: &str = "users_username_key";
/// Unique index on `users.email`.
pub const EMAIL_KEY: &str = "users_email_key";

#[derive(Debug, Default)]
struct State {
    last_user_id: i32,
    last_todo_id: i32,
    users: BTreeMap<UserId, User>,
    todos: BTreeMap<TodoId, Todo>,
    assignments: BTreeSet<Assignment>,
}

impl State {
    fn next_user_id(&mut self) -> UserId {
        self.last_user_id += 1;
        UserId::new(self.last_user_id)
    }

    fn next_todo_id(&mut self) -> TodoId {
        self.last_todo_id += 1;
        TodoId::new(self.last_todo_id)
    }

    fn check_user_unique(
        &self,
        draft: &UserDraft,
        except: Option<UserId>,
    ) -> Result<(), StoreError> {
        let others = self.users.values().filter(|user| Some(user.id) != except);
        for user in others {
            if user.username == draft.username {
                return Err(unique(USERNAME_KEY));
            }
            if user.email == draft.email {
                return Err(unique(EMAIL_KEY));
            }
        }
        Ok(())
    }

    fn check_creator(&self, creator: UserId) -> Result<(), StoreError> {
        if self.users.contains_key(&creator) {
            Ok(())
        } else {
            Err(foreign_key(TODO_CREATOR_FKEY))
        }
    }

    fn remove_todo(&mut self, id: TodoId) -> u64 {
        self.assignments.retain(|assignment| assignment.todo_id != id);
        u64::from(self.todos.remove(&id).is_some())
    }

    fn is_related(&self, todo: &Todo, user: UserId, filter: TodoFilter) -> bool {
        let created = todo.creator_id == user;
        let assigned = self.assignments.contains(&Assignment {
            todo_id: todo.id,
            user_id: user,
        });
        match filter {
            TodoFilter::All => created || assigned,
            TodoFilter::Created => created,
            TodoFilter::Assigned => assigned,
        }
    }
}

fn unique(name: &str) -> StoreError {
    StoreError::constraint_violation(name, ConstraintKind::Unique)
}

fn foreign_key(name: &str) -> StoreError {
    StoreError::constraint_violation(name, ConstraintKind::ForeignKey)
}

/// Mutex-guarded store implementing [`UserRepository`] and [`TodoRepository`].
///
/// # Examples
/// ```
/// use std::sync::Arc;
/// use todo_api::domain::ports::{TodoRepository, UserRepository};
/// use todo_api::test_support::InMemoryStore;
///
/// let store = Arc::new(InMemoryStore::new());
/// let users: Arc<dyn UserRepository> = store.clone();
/// let todos: Arc<dyn TodoRepository> = store;
/// # let _ = (users, todos);
/// ```
#[derive(Debug, Default)]
pub struct InMemoryStore {
    state: Mutex<State>,
}

impl InMemoryStore {
    /// Empty store; ids start at 1.
    pub fn new() -> Self {
        Self::default()
    }

    fn state(&self) -> MutexGuard<'_, State> {
        self.state.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

#[async_trait]
impl UserRepository for InMemoryStore {
    async fn create(&self, draft: &UserDraft) -> Result<User, StoreError> {
        let mut state = self.state();
        state.check_user_unique(draft, None)?;
        let id = state.next_user_id();
        let user = draft.clone().into_user(id);
        state.users.insert(id, user.clone());
        Ok(user)
    }

    async fn list(&self) -> Result<Vec<User>, StoreError> {
        Ok(self.state().users.values().cloned().collect())
    }

    async fn update(&self, id: UserId, draft: &UserDraft) -> Result<User, StoreError> {
        let mut state = self.state();
        if !state.users.contains_key(&id) {
            return Err(StoreError::not_found());
        }
        state.check_user_unique(draft, Some(id))?;
        let user = draft.clone().into_user(id);
        state.users.insert(id, user.clone());
        Ok(user)
    }

    async fn delete(&self, id: UserId) -> Result<u64, StoreError> {
        let mut state = self.state();
        if state.users.remove(&id).is_none() {
            return Ok(0);
        }
        let created: Vec<TodoId> = state
            .todos
            .values()
            .filter(|todo| todo.creator_id == id)
            .map(|todo| todo.id)
            .collect();
        for todo_id in created {
            state.remove_todo(todo_id);
        }
        state.assignments.retain(|assignment| assignment.user_id != id);
        Ok(1)
    }

    async fn exists(&self, id: UserId) -> Result<bool, StoreError> {
        Ok(self.state().users.contains_key(&id))
    }
}

#[async_trait]
impl TodoRepository for InMemoryStore {
    async fn create(&self, draft: &TodoDraft) -> Result<Todo, StoreError> {
        let mut state = self.state();
        state.check_creator(draft.creator_id)?;
        let id = state.next_todo_id();
        let todo = draft.clone().into_todo(id);
        state.todos.insert(id, todo.clone());
        Ok(todo)
    }

    async fn list(&self) -> Result<Vec<Todo>, StoreError> {
        Ok(self.state().todos.values().cloned().collect())
    }

    async fn list_for_user(
        &self,
        user: UserId,
        filter: TodoFilter,
    ) -> Result<Vec<Todo>, StoreError> {
        let state = self.state();
        Ok(state
            .todos
            .values()
            .filter(|todo| state.is_related(todo, user, filter))
            .cloned()
            .collect())
    }

    async fn update(&self, id: TodoId, changes: &TodoChanges) -> Result<Todo, StoreError> {
        let mut state = self.state();
        if !state.todos.contains_key(&id) {
            return Err(StoreError::not_found());
        }
        state.check_creator(changes.creator_id)?;
        let todo = changes.clone().into_todo(id);
        state.todos.insert(id, todo.clone());
        Ok(todo)
    }

    async fn delete(&self, id: TodoId) -> Result<u64, StoreError> {
        Ok(self.state().remove_todo(id))
    }

    async fn assign(&self, assignment: Assignment) -> Result<(), StoreError> {
        let mut state = self.state();
        // PostgreSQL checks the primary key on insert and the foreign keys
        // afterwards in constraint name order.
        if state.assignments.contains(&assignment) {
            return Err(unique(ASSIGNMENT_PKEY));
        }
        if !state.todos.contains_key(&assignment.todo_id) {
            return Err(foreign_key(ASSIGNMENT_TODO_FKEY));
        }
        if !state.users.contains_key(&assignment.user_id) {
            return Err(foreign_key(ASSIGNMENT_USER_FKEY));
        }
        state.assignments.insert(assignment);
        Ok(())
    }
}
