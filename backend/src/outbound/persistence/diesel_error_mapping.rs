//! Diesel and pool error classification shared by the store adapters.
//!
//! Foreign-key and uniqueness violations keep the constraint name reported by
//! PostgreSQL so the domain can translate them by identity. Everything else
//! collapses into connection or query failures with generic messages.

use diesel::result::{DatabaseErrorKind, Error as DieselError};
use tracing::debug;

use crate::domain::ports::{ConstraintKind, StoreError};

use super::pool::PoolError;

/// Map pool errors to store connection errors.
pub(crate) fn map_pool_error(error: PoolError) -> StoreError {
    match error {
        PoolError::Checkout { message } | PoolError::Build { message } => {
            StoreError::connection(message)
        }
    }
}

fn constraint_kind(kind: &DatabaseErrorKind) -> Option<ConstraintKind> {
    match kind {
        DatabaseErrorKind::ForeignKeyViolation => Some(ConstraintKind::ForeignKey),
        DatabaseErrorKind::UniqueViolation => Some(ConstraintKind::Unique),
        _ => None,
    }
}

/// Map Diesel errors to store errors.
pub(crate) fn map_diesel_error(error: DieselError) -> StoreError {
    match &error {
        DieselError::DatabaseError(kind, info) => {
            debug!(
                ?kind,
                message = info.message(),
                constraint = info.constraint_name(),
                "diesel operation failed"
            );
        }
        _ => debug!(
            error_type = %std::any::type_name_of_val(&error),
            "diesel operation failed"
        ),
    }

    match error {
        DieselError::NotFound => StoreError::not_found(),
        DieselError::DatabaseError(DatabaseErrorKind::ClosedConnection, _) => {
            StoreError::connection("database connection error")
        }
        DieselError::DatabaseError(kind, info) => {
            match (constraint_kind(&kind), info.constraint_name()) {
                (Some(constraint_kind), Some(name)) => {
                    StoreError::constraint_violation(name, constraint_kind)
                }
                _ => StoreError::query("database error"),
            }
        }
        DieselError::QueryBuilderError(_) => StoreError::query("database query error"),
        _ => StoreError::query("database error"),
    }
}
