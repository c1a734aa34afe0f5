//! In-memory customer repository seeded from JSON.

use std::fs::File;
use std::io::BufReader;
use std::path::Path;
use std::sync::Arc;

use crate::domain::customer::Customer;
use crate::repository::CustomerReader;
use crate::repository::errors::RepositoryResult;

/// In-memory implementation of [`CustomerReader`].
///
/// The collection is loaded once at startup and shared between workers;
/// cloning the repository only bumps a reference count.
#[derive(Clone, Debug)]
pub struct InMemoryCustomerRepository {
    customers: Arc<Vec<Customer>>,
}

impl InMemoryCustomerRepository {
    #[must_use]
    pub fn new(customers: Vec<Customer>) -> Self {
        Self {
            customers: Arc::new(customers),
        }
    }

    /// Loads the collection from a JSON file holding an array of customers.
    pub fn from_json_file(path: impl AsRef<Path>) -> RepositoryResult<Self> {
        let file = File::open(path.as_ref())?;
        let customers: Vec<Customer> = serde_json::from_reader(BufReader::new(file))?;
        Ok(Self::new(customers))
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.customers.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.customers.is_empty()
    }
}

impl CustomerReader for InMemoryCustomerRepository {
    fn list_customers(&self) -> RepositoryResult<Vec<Customer>> {
        Ok(self.customers.as_ref().clone())
    }
}
