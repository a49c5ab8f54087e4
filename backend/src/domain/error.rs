//! Domain-level error taxonomy.
//!
//! Every failure a client can observe is one of the kinds below. Errors are
//! transport agnostic: they carry the wire `type` tag, a title, an optional
//! detail and, for validation failures, the per-field report. Inbound
//! adapters decide status codes and envelope shapes.

use std::fmt;

use crate::domain::ids::{TodoId, UserId};
use crate::domain::validation::ValidationErrorReport;

/// Stable category of a failure.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorKind {
    /// The request body could not be decoded.
    JsonDecode,
    /// The body decoded but at least one field violated its rules.
    Validation,
    /// A user path segment was not a usable identifier.
    InvalidUserId,
    /// A todo path segment was not a usable identifier.
    InvalidTodoId,
    /// The referenced user does not exist.
    UserNotFound,
    /// The referenced todo does not exist.
    TodoNotFound,
    /// A query parameter held an unsupported value.
    InvalidQuery,
    /// The assignment already exists.
    TodoAssign,
    /// Anything unexpected; details stay server side.
    Internal,
}

impl ErrorKind {
    /// Wire tag placed in the `type` field of error bodies.
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::JsonDecode => "json-decode-error",
            Self::Validation => "validation-error",
            Self::InvalidUserId => "invalid-user-id",
            Self::InvalidTodoId => "invalid-todo-id",
            Self::UserNotFound => "user-not-found",
            Self::TodoNotFound => "todo-not-found",
            Self::InvalidQuery => "invalid-query",
            Self::TodoAssign => "todo-assign-error",
            Self::Internal => "internal-server-error",
        }
    }
}

impl fmt::Display for ErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A failure surfaced to clients.
///
/// # Examples
/// ```
/// use todo_api::domain::{Error, ErrorKind, UserId};
///
/// let err = Error::user_not_found(UserId::new(7));
/// assert_eq!(err.kind(), ErrorKind::UserNotFound);
/// assert_eq!(err.detail(), Some("User with id 7 not found"));
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Error {
    kind: ErrorKind,
    title: String,
    detail: Option<String>,
    invalid_params: Option<ValidationErrorReport>,
    cause: Option<String>,
}

impl Error {
    fn new(kind: ErrorKind, title: impl Into<String>, detail: Option<String>) -> Self {
        Self {
            kind,
            title: title.into(),
            detail,
            invalid_params: None,
            cause: None,
        }
    }

    /// The body could not be decoded; `reason` is the decoder's message.
    pub fn json_decode(reason: impl fmt::Display) -> Self {
        Self::new(
            ErrorKind::JsonDecode,
            "Your request payload didn't decode",
            Some(reason.to_string()),
        )
    }

    /// One or more fields failed validation.
    pub fn validation(report: ValidationErrorReport) -> Self {
        Self {
            invalid_params: Some(report),
            ..Self::new(
                ErrorKind::Validation,
                "Your request parameters didn't validate",
                Some("Your request parameters didn't validate.".to_owned()),
            )
        }
    }

    /// The user id path segment `raw` was unusable.
    pub fn invalid_user_id(raw: &str) -> Self {
        Self::new(
            ErrorKind::InvalidUserId,
            "Invalid user id",
            Some(format!("The user id {raw} is not valid")),
        )
    }

    /// The todo id path segment `raw` was unusable.
    pub fn invalid_todo_id(raw: &str) -> Self {
        Self::new(
            ErrorKind::InvalidTodoId,
            "Invalid todo id",
            Some(format!("The todo id {raw} is not valid")),
        )
    }

    /// No user exists with `id`.
    pub fn user_not_found(id: UserId) -> Self {
        Self::new(
            ErrorKind::UserNotFound,
            "User not found",
            Some(format!("User with id {id} not found")),
        )
    }

    /// No todo exists with `id`.
    pub fn todo_not_found(id: TodoId) -> Self {
        Self::new(
            ErrorKind::TodoNotFound,
            "Todo not found",
            Some(format!("Todo with id {id} not found")),
        )
    }

    /// A query parameter held `actual`; `options` lists accepted values.
    pub fn invalid_query(actual: &str, options: &[&str]) -> Self {
        Self::new(
            ErrorKind::InvalidQuery,
            "Invalid query",
            Some(format!(
                "The query parameter {actual} is not valid. Valid options are [{}]",
                options.join(" ")
            )),
        )
    }

    /// The user is already assigned to the todo.
    pub fn duplicate_assignment() -> Self {
        Self::new(
            ErrorKind::TodoAssign,
            "User already assigned",
            Some("The user is already assigned to the todo".to_owned()),
        )
    }

    /// Unexpected failure. `cause` is logged but never sent to clients.
    pub fn internal(cause: impl fmt::Display) -> Self {
        Self {
            cause: Some(cause.to_string()),
            ..Self::new(ErrorKind::Internal, "Something went wrong", None)
        }
    }

    /// Category of the failure.
    pub const fn kind(&self) -> ErrorKind {
        self.kind
    }

    /// Short summary for clients.
    pub fn title(&self) -> &str {
        self.title.as_str()
    }

    /// Longer explanation for clients, when one exists.
    pub fn detail(&self) -> Option<&str> {
        self.detail.as_deref()
    }

    /// Per-field report for validation failures.
    pub const fn invalid_params(&self) -> Option<&ValidationErrorReport> {
        self.invalid_params.as_ref()
    }

    /// Server-side diagnostic for internal failures.
    pub fn cause(&self) -> Option<&str> {
        self.cause.as_deref()
    }
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match (&self.detail, &self.cause) {
            (Some(detail), _) => write!(f, "{}: {detail}", self.kind),
            (None, Some(cause)) => write!(f, "{}: {cause}", self.kind),
            (None, None) => write!(f, "{}: {}", self.kind, self.title),
        }
    }
}

impl std::error::Error for Error {}
