//! PostgreSQL store adapters built on Diesel.
//!
//! Row structs and the table DSL stay private to this module; callers only
//! see the repository types, the pool and its configuration.

mod diesel_error_mapping;
mod diesel_todo_repository;
mod diesel_user_repository;
mod models;
mod pool;
mod schema;

pub use diesel_todo_repository::DieselTodoRepository;
pub use diesel_user_repository::DieselUserRepository;
pub use pool::{DbPool, PoolConfig, PoolError};
