//! Domain ports and supporting types for the hexagonal boundary.
//!
//! Driven ports (`UserRepository`, `TodoRepository`) are implemented by
//! store adapters. Driving ports (`UserOperations`, `TodoOperations`) are
//! implemented by the domain services and consumed by inbound adapters.

mod macros;
pub(crate) use macros::define_port_error;

mod store_error;
mod todo_operations;
mod todo_repository;
mod user_operations;
mod user_repository;

pub use store_error::{ConstraintKind, StoreError};
#[cfg(test)]
pub use todo_operations::MockTodoOperations;
pub use todo_operations::TodoOperations;
#[cfg(test)]
pub use todo_repository::MockTodoRepository;
pub use todo_repository::TodoRepository;
#[cfg(test)]
pub use user_operations::MockUserOperations;
pub use user_operations::UserOperations;
#[cfg(test)]
pub use user_repository::MockUserRepository;
pub use user_repository::UserRepository;
