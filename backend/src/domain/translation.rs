//! Store failure to domain error translation.
//!
//! Constraint violations are matched by constraint name and kind against a
//! fixed table. A match only becomes a semantic error when the identifier
//! it names is part of the request being served; everything else is an
//! internal error whose cause stays in the logs.

use tracing::warn;

use crate::domain::Error;
use crate::domain::ids::{TodoId, UserId};
use crate::domain::ports::{ConstraintKind, StoreError};

/// Foreign key from `todo.creator_id` to `users.id`.
pub const TODO_CREATOR_FKEY: &str = "todo_creator_id_fkey";
/// Foreign key from `todo_user.todo_id` to `todo.id`.
pub const ASSIGNMENT_TODO_FKEY: &str = "todo_user_todo_id_fkey";
/// Foreign key from `todo_user.user_id` to `users.id`.
pub const ASSIGNMENT_USER_FKEY: &str = "todo_user_user_id_fkey";
/// Primary key of `todo_user`, one row per (todo, user) pair.
pub const ASSIGNMENT_PKEY: &str = "todo_user_pkey";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Outcome {
    MissingUser,
    MissingTodo,
    DuplicateAssignment,
}

const KNOWN_CONSTRAINTS: &[(&str, ConstraintKind, Outcome)] = &[
    (TODO_CREATOR_FKEY, ConstraintKind::ForeignKey, Outcome::MissingUser),
    (ASSIGNMENT_USER_FKEY, ConstraintKind::ForeignKey, Outcome::MissingUser),
    (ASSIGNMENT_TODO_FKEY, ConstraintKind::ForeignKey, Outcome::MissingTodo),
    (ASSIGNMENT_PKEY, ConstraintKind::Unique, Outcome::DuplicateAssignment),
];

/// Resource a write primarily targets; decides what a missing row means.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Subject {
    User(UserId),
    Todo(TodoId),
}

/// Identifiers taking part in one store call.
///
/// # Examples
/// ```
/// use todo_api::domain::translation::{translate_store_error, WriteContext};
/// use todo_api::domain::ports::StoreError;
/// use todo_api::domain::{ErrorKind, UserId};
///
/// let ctx = WriteContext::for_user(UserId::new(4));
/// let err = translate_store_error(StoreError::not_found(), ctx);
/// assert_eq!(err.kind(), ErrorKind::UserNotFound);
/// ```
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct WriteContext {
    subject: Option<Subject>,
    todo: Option<TodoId>,
    user: Option<UserId>,
}

impl WriteContext {
    /// A write with no identifier known up front, such as an insert.
    pub const fn new() -> Self {
        Self {
            subject: None,
            todo: None,
            user: None,
        }
    }

    /// A write aimed at user `id`.
    pub const fn for_user(id: UserId) -> Self {
        Self {
            subject: Some(Subject::User(id)),
            todo: None,
            user: Some(id),
        }
    }

    /// A write aimed at todo `id`.
    pub const fn for_todo(id: TodoId) -> Self {
        Self {
            subject: Some(Subject::Todo(id)),
            todo: Some(id),
            user: None,
        }
    }

    /// The write also references user `id`.
    #[must_use]
    pub const fn referencing_user(mut self, id: UserId) -> Self {
        self.user = Some(id);
        self
    }
}

/// Map a store failure to the error reported to clients.
pub fn translate_store_error(err: StoreError, ctx: WriteContext) -> Error {
    if matches!(err, StoreError::NotFound) {
        return match ctx.subject {
            Some(Subject::User(id)) => Error::user_not_found(id),
            Some(Subject::Todo(id)) => Error::todo_not_found(id),
            None => Error::internal(err),
        };
    }

    let Some((constraint, kind)) = err.constraint() else {
        return Error::internal(err);
    };

    let known = KNOWN_CONSTRAINTS
        .iter()
        .find(|(name, expected, _)| *name == constraint && *expected == kind);
    let Some((_, _, outcome)) = known else {
        warn!(constraint, %kind, "unrecognised constraint violation");
        return Error::internal(err);
    };

    match (outcome, ctx.user, ctx.todo) {
        (Outcome::MissingUser, Some(user), _) => Error::user_not_found(user),
        (Outcome::MissingTodo, _, Some(todo)) => Error::todo_not_found(todo),
        (Outcome::DuplicateAssignment, Some(_), Some(_)) => Error::duplicate_assignment(),
        _ => Error::internal(err),
    }
}
