//! Domain entities and value types.

pub mod customer;
pub mod types;
