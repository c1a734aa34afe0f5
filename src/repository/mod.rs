//! Read-side access to the externally-owned customer collection.

use crate::domain::customer::Customer;
use crate::repository::errors::RepositoryResult;

pub mod errors;
pub mod memory;
#[cfg(any(test, feature = "test-mocks"))]
pub mod mock;

/// Read access to the customer collection.
///
/// The service always reads the full set and does its own filtering and
/// pagination; implementations only have to return every record in source
/// order.
pub trait CustomerReader {
    fn list_customers(&self) -> RepositoryResult<Vec<Customer>>;
}
