//! PostgreSQL-backed `TodoRepository` implementation using Diesel ORM.
//!
//! Every method is a single statement. Missing creators, missing assignment
//! targets and duplicate pairs are left to the schema constraints and come
//! back as named constraint violations.

use async_trait::async_trait;
use diesel::prelude::*;
use diesel_async::RunQueryDsl;

use crate::domain::ports::{StoreError, TodoRepository};
use crate::domain::{Assignment, Todo, TodoChanges, TodoDraft, TodoFilter, TodoId, UserId};

use super::diesel_error_mapping::{map_diesel_error, map_pool_error};
use super::models::{AssignmentRow, NewTodoRow, TodoRow, TodoUpdate};
use super::pool::DbPool;
use super::schema::{todo, todo_user};

/// Diesel-backed implementation of the `TodoRepository` port.
#[derive(Clone)]
pub struct DieselTodoRepository {
    pool: DbPool,
}

impl DieselTodoRepository {
    /// Create a new repository with the given connection pool.
    pub fn new(pool: DbPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl TodoRepository for DieselTodoRepository {
    async fn create(&self, draft: &TodoDraft) -> Result<Todo, StoreError> {
        let mut conn = self.pool.get().await.map_err(map_pool_error)?;
        diesel::insert_into(todo::table)
            .values(NewTodoRow::from(draft))
            .returning(TodoRow::as_returning())
            .get_result(&mut conn)
            .await
            .map(Todo::from)
            .map_err(map_diesel_error)
    }

    async fn list(&self) -> Result<Vec<Todo>, StoreError> {
        let mut conn = self.pool.get().await.map_err(map_pool_error)?;
        let rows: Vec<TodoRow> = todo::table
            .select(TodoRow::as_select())
            .order(todo::id.asc())
            .load(&mut conn)
            .await
            .map_err(map_diesel_error)?;
        Ok(rows.into_iter().map(Todo::from).collect())
    }

    async fn list_for_user(
        &self,
        user: UserId,
        filter: TodoFilter,
    ) -> Result<Vec<Todo>, StoreError> {
        let mut conn = self.pool.get().await.map_err(map_pool_error)?;
        let user_id = user.get();
        let assigned = todo_user::table
            .filter(todo_user::user_id.eq(user_id))
            .select(todo_user::todo_id);
        let base = todo::table
            .select(TodoRow::as_select())
            .order(todo::id.asc())
            .into_boxed();
        let query = match filter {
            TodoFilter::Created => base.filter(todo::creator_id.eq(user_id)),
            TodoFilter::Assigned => base.filter(todo::id.eq_any(assigned)),
            TodoFilter::All => {
                base.filter(todo::creator_id.eq(user_id).or(todo::id.eq_any(assigned)))
            }
        };
        let rows: Vec<TodoRow> = query.load(&mut conn).await.map_err(map_diesel_error)?;
        Ok(rows.into_iter().map(Todo::from).collect())
    }

    async fn update(&self, id: TodoId, changes: &TodoChanges) -> Result<Todo, StoreError> {
        let mut conn = self.pool.get().await.map_err(map_pool_error)?;
        diesel::update(todo::table.find(id.get()))
            .set(TodoUpdate::from(changes))
            .returning(TodoRow::as_returning())
            .get_result(&mut conn)
            .await
            .map(Todo::from)
            .map_err(map_diesel_error)
    }

    async fn delete(&self, id: TodoId) -> Result<u64, StoreError> {
        let mut conn = self.pool.get().await.map_err(map_pool_error)?;
        let removed = diesel::delete(todo::table.find(id.get()))
            .execute(&mut conn)
            .await
            .map_err(map_diesel_error)?;
        Ok(u64::try_from(removed).unwrap_or(u64::MAX))
    }

    async fn assign(&self, assignment: Assignment) -> Result<(), StoreError> {
        let mut conn = self.pool.get().await.map_err(map_pool_error)?;
        diesel::insert_into(todo_user::table)
            .values(AssignmentRow::from(assignment))
            .execute(&mut conn)
            .await
            .map(|_| ())
            .map_err(map_diesel_error)
    }
}
