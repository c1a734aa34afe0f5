//! Mock repository implementation for isolating services in tests.

use mockall::mock;

use crate::domain::customer::Customer;
use crate::repository::CustomerReader;
use crate::repository::errors::RepositoryResult;

mock! {
    pub CustomerRepo {}

    impl CustomerReader for CustomerRepo {
        fn list_customers(&self) -> RepositoryResult<Vec<Customer>>;
    }
}
