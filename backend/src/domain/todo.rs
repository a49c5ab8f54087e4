//! Todo data model and the per-user listing filter.

use crate::domain::Error;
use crate::domain::ids::{TodoId, UserId};

/// A stored todo row.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Todo {
    pub id: TodoId,
    pub title: String,
    pub description: String,
    pub creator_id: UserId,
    pub completed: bool,
}

/// Validated field values for a new todo. New todos start incomplete.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TodoDraft {
    pub title: String,
    pub description: String,
    pub creator_id: UserId,
}

impl TodoDraft {
    /// Materialise the draft as the row stored under `id`.
    pub fn into_todo(self, id: TodoId) -> Todo {
        Todo {
            id,
            title: self.title,
            description: self.description,
            creator_id: self.creator_id,
            completed: false,
        }
    }
}

/// Full replacement of a todo's mutable fields.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TodoChanges {
    pub title: String,
    pub description: String,
    pub creator_id: UserId,
    pub completed: bool,
}

impl TodoChanges {
    /// Apply the changes to the row stored under `id`.
    pub fn into_todo(self, id: TodoId) -> Todo {
        Todo {
            id,
            title: self.title,
            description: self.description,
            creator_id: self.creator_id,
            completed: self.completed,
        }
    }
}

/// A (todo, user) pair linking an assignee to a todo.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Assignment {
    pub todo_id: TodoId,
    pub user_id: UserId,
}

/// Which of a user's todos to list.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum TodoFilter {
    /// Todos the user created or is assigned to.
    #[default]
    All,
    /// Todos the user created.
    Created,
    /// Todos the user is assigned to.
    Assigned,
}

impl TodoFilter {
    /// Accepted values of the `type` query parameter.
    pub const OPTIONS: [&'static str; 3] = ["all", "assigned", "created"];

    /// Interpret the raw `type` query parameter.
    ///
    /// Absent and empty values mean [`TodoFilter::All`].
    ///
    /// # Errors
    /// Returns an `invalid-query` error listing [`TodoFilter::OPTIONS`] for
    /// any other value.
    ///
    /// # Examples
    /// ```
    /// use todo_api::domain::TodoFilter;
    ///
    /// assert_eq!(TodoFilter::from_query(None).unwrap(), TodoFilter::All);
    /// assert_eq!(TodoFilter::from_query(Some("created")).unwrap(), TodoFilter::Created);
    /// assert!(TodoFilter::from_query(Some("bogus")).is_err());
    /// ```
    pub fn from_query(raw: Option<&str>) -> Result<Self, Error> {
        match raw.unwrap_or_default() {
            "" | "all" => Ok(Self::All),
            "created" => Ok(Self::Created),
            "assigned" => Ok(Self::Assigned),
            other => Err(Error::invalid_query(other, &Self::OPTIONS)),
        }
    }

    /// Wire spelling of the filter.
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::All => "all",
            Self::Created => "created",
            Self::Assigned => "assigned",
        }
    }
}
