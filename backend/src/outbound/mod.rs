//! Outbound adapters implementing the domain's driven ports.
//!
//! Only PostgreSQL persistence lives here. Adapters translate between Diesel
//! rows and domain types and hold no business rules.

pub mod persistence;
