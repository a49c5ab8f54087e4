//! Internal Diesel row structs for database operations.
//!
//! These types are implementation details of the persistence layer and must
//! never be exposed to the domain.

use diesel::prelude::*;

use crate::domain::{Assignment, Todo, TodoChanges, TodoDraft, TodoId, User, UserDraft, UserId};

use super::schema::{todo, todo_user, users};

/// Row struct for reading from the users table.
#[derive(Debug, Clone, Queryable, Selectable)]
#[diesel(table_name = users)]
#[diesel(check_for_backend(diesel::pg::Pg))]
pub(crate) struct UserRow {
    pub id: i32,
    pub username: String,
    pub email: String,
    pub password: String,
}

impl From<UserRow> for User {
    fn from(row: UserRow) -> Self {
        Self {
            id: UserId::new(row.id),
            username: row.username,
            email: row.email,
            password: row.password,
        }
    }
}

/// Column values written on user insert and replace.
#[derive(Debug, Clone, Insertable, AsChangeset)]
#[diesel(table_name = users)]
pub(crate) struct UserValues<'a> {
    pub username: &'a str,
    pub email: &'a str,
    pub password: &'a str,
}

impl<'a> From<&'a UserDraft> for UserValues<'a> {
    fn from(draft: &'a UserDraft) -> Self {
        Self {
            username: &draft.username,
            email: &draft.email,
            password: &draft.password,
        }
    }
}

/// Row struct for reading from the todo table.
#[derive(Debug, Clone, Queryable, Selectable)]
#[diesel(table_name = todo)]
#[diesel(check_for_backend(diesel::pg::Pg))]
pub(crate) struct TodoRow {
    pub id: i32,
    pub title: String,
    pub description: String,
    pub creator_id: i32,
    pub completed: bool,
}

impl From<TodoRow> for Todo {
    fn from(row: TodoRow) -> Self {
        Self {
            id: TodoId::new(row.id),
            title: row.title,
            description: row.description,
            creator_id: UserId::new(row.creator_id),
            completed: row.completed,
        }
    }
}

/// Insertable struct for new todos; `completed` takes the column default.
#[derive(Debug, Clone, Insertable)]
#[diesel(table_name = todo)]
pub(crate) struct NewTodoRow<'a> {
    pub title: &'a str,
    pub description: &'a str,
    pub creator_id: i32,
}

impl<'a> From<&'a TodoDraft> for NewTodoRow<'a> {
    fn from(draft: &'a TodoDraft) -> Self {
        Self {
            title: &draft.title,
            description: &draft.description,
            creator_id: draft.creator_id.get(),
        }
    }
}

/// Changeset replacing every mutable todo column.
#[derive(Debug, Clone, AsChangeset)]
#[diesel(table_name = todo)]
pub(crate) struct TodoUpdate<'a> {
    pub title: &'a str,
    pub description: &'a str,
    pub creator_id: i32,
    pub completed: bool,
}

impl<'a> From<&'a TodoChanges> for TodoUpdate<'a> {
    fn from(changes: &'a TodoChanges) -> Self {
        Self {
            title: &changes.title,
            description: &changes.description,
            creator_id: changes.creator_id.get(),
            completed: changes.completed,
        }
    }
}

/// Insertable struct for the todo_user join table.
#[derive(Debug, Clone, Copy, Insertable)]
#[diesel(table_name = todo_user)]
pub(crate) struct AssignmentRow {
    pub todo_id: i32,
    pub user_id: i32,
}

impl From<Assignment> for AssignmentRow {
    fn from(assignment: Assignment) -> Self {
        Self {
            todo_id: assignment.todo_id.get(),
            user_id: assignment.user_id.get(),
        }
    }
}
