//! Service layer: validation and the query pipeline.

use thiserror::Error;

use crate::repository::errors::RepositoryError;

pub mod customers;

/// Failures a service call can report.
///
/// The validation variants carry their exact wire messages: clients assert
/// on these strings verbatim, so they are part of the external contract.
#[derive(Debug, Error)]
pub enum ServiceError {
    #[error("Invalid page or limit. Both must be positive numbers.")]
    InvalidPageOrLimit,

    #[error(
        "Unsupported size value. Supported values are All, Small, Medium, Enterprise, Large Enterprise, and Very Large Enterprise."
    )]
    UnsupportedSize,

    #[error(
        "Unsupported industry value. Supported values are All, Logistics, Retail, Technology, HR, and Finance."
    )]
    UnsupportedIndustry,

    #[error("Repository error: {0}")]
    Repository(#[from] RepositoryError),
}

impl ServiceError {
    /// Whether the error was caused by the caller's input.
    #[must_use]
    pub const fn is_validation(&self) -> bool {
        matches!(
            self,
            Self::InvalidPageOrLimit | Self::UnsupportedSize | Self::UnsupportedIndustry
        )
    }
}

pub type ServiceResult<T> = Result<T, ServiceError>;
