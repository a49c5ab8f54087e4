//! Shared HTTP adapter state.
//!
//! HTTP handlers accept this state via `actix_web::web::Data` so they only
//! depend on the driving ports and remain testable without I/O.

use std::sync::Arc;

use crate::domain::ports::{TodoOperations, UserOperations};

/// Dependency bundle for HTTP handlers.
#[derive(Clone)]
pub struct HttpState {
    pub users: Arc<dyn UserOperations>,
    pub todos: Arc<dyn TodoOperations>,
}

impl HttpState {
    /// Bundle the resource operations.
    pub fn new(users: Arc<dyn UserOperations>, todos: Arc<dyn TodoOperations>) -> Self {
        Self { users, todos }
    }
}
