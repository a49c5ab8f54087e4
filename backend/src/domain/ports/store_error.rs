//! Failure vocabulary shared by every store adapter.
//!
//! Adapters classify driver failures into these variants so the domain can
//! translate them by constraint identity without ever seeing driver types.

use std::fmt;

use super::define_port_error;

/// Category of a violated store constraint.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ConstraintKind {
    ForeignKey,
    Unique,
}

impl fmt::Display for ConstraintKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::ForeignKey => "foreign key",
            Self::Unique => "unique",
        })
    }
}

define_port_error! {
    /// Errors raised by store adapters.
    pub enum StoreError {
        /// A statement that must touch exactly one row touched none.
        NotFound => "no matching row",
        /// A named constraint rejected the write.
        ConstraintViolation { constraint: String, kind: ConstraintKind } =>
            "{kind} constraint {constraint} violated",
        /// Store connection could not be established.
        Connection { message: String } => "store connection failed: {message}",
        /// Query or mutation failed during execution.
        Query { message: String } => "store query failed: {message}",
    }
}

impl StoreError {
    /// Name and kind of the violated constraint, when this is a violation.
    pub fn constraint(&self) -> Option<(&str, ConstraintKind)> {
        match self {
            Self::ConstraintViolation { constraint, kind } => Some((constraint.as_str(), *kind)),
            _ => None,
        }
    }
}
