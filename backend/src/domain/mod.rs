//! Domain primitives, rules and use cases.
//!
//! Purpose: define the users and todos managed by the API, the rules their
//! payloads must satisfy, and the translation of store failures into the
//! closed error taxonomy. Nothing here depends on HTTP or Diesel.
//!
//! Public surface:
//! - Error / ErrorKind: failures reported to clients.
//! - UserId / TodoId: store identifiers parsed from path segments.
//! - User, Todo and their drafts: stored rows and write inputs.
//! - Payloads: request bodies with their validation rules.
//! - UserService / TodoService: validate, store and translate per verb.

pub mod error;
pub mod ids;
pub mod payloads;
pub mod ports;
pub mod todo;
pub mod todo_service;
pub mod translation;
pub mod user;
pub mod user_service;
pub mod validation;

pub use self::error::{Error, ErrorKind};
pub use self::ids::{InvalidIdError, TodoId, UserId};
pub use self::payloads::{TodoAssignPayload, TodoCreatePayload, TodoUpdatePayload, UserPayload};
pub use self::todo::{Assignment, Todo, TodoChanges, TodoDraft, TodoFilter};
pub use self::todo_service::TodoService;
pub use self::user::{User, UserDraft};
pub use self::user_service::UserService;
pub use self::validation::{RuleValidator, ValidationErrorReport, Validator};

/// Convenient API result alias.
///
/// # Examples
/// ```
/// use todo_api::domain::{ApiResult, Error, TodoId};
///
/// fn handler() -> ApiResult<()> {
///     Err(Error::todo_not_found(TodoId::new(1)))
/// }
/// # assert!(handler().is_err());
/// ```
pub type ApiResult<T> = Result<T, Error>;
