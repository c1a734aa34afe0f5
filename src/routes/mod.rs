//! HTTP route handlers.

pub mod customers;
