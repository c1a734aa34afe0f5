//! Closed enumerations used by customer entities.
//!
//! Sizes and industries are fixed vocabularies on the wire. Parsing from the
//! query string happens once at the service boundary; past that point the
//! values are trusted tagged variants.

use std::fmt::{Display, Formatter};
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Error produced when a wire string does not name a known variant.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum UnknownVariantError {
    /// The string is not one of the five size buckets.
    #[error("unknown company size: {0}")]
    Size(String),
    /// The string is not one of the five industries.
    #[error("unknown industry: {0}")]
    Industry(String),
}

/// Size bucket derived from a customer's employee count.
#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq, Eq, Hash)]
pub enum CompanySize {
    Small,
    Medium,
    Enterprise,
    #[serde(rename = "Large Enterprise")]
    LargeEnterprise,
    #[serde(rename = "Very Large Enterprise")]
    VeryLargeEnterprise,
}

impl CompanySize {
    /// Classifies an employee count into its size bucket.
    ///
    /// Intervals are half-open and contiguous: [0, 100) is `Small`,
    /// [100, 1000) is `Medium`, [1000, 10000) is `Enterprise`,
    /// [10000, 50000) is `LargeEnterprise`, and everything above is
    /// `VeryLargeEnterprise`.
    #[must_use]
    pub const fn classify(employees: u32) -> Self {
        match employees {
            0..=99 => Self::Small,
            100..=999 => Self::Medium,
            1000..=9999 => Self::Enterprise,
            10000..=49999 => Self::LargeEnterprise,
            _ => Self::VeryLargeEnterprise,
        }
    }
}

impl Display for CompanySize {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            Self::Small => "Small",
            Self::Medium => "Medium",
            Self::Enterprise => "Enterprise",
            Self::LargeEnterprise => "Large Enterprise",
            Self::VeryLargeEnterprise => "Very Large Enterprise",
        };
        f.write_str(name)
    }
}

impl FromStr for CompanySize {
    type Err = UnknownVariantError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "Small" => Ok(Self::Small),
            "Medium" => Ok(Self::Medium),
            "Enterprise" => Ok(Self::Enterprise),
            "Large Enterprise" => Ok(Self::LargeEnterprise),
            "Very Large Enterprise" => Ok(Self::VeryLargeEnterprise),
            other => Err(UnknownVariantError::Size(other.to_string())),
        }
    }
}

/// Industry a customer operates in.
#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq, Eq, Hash)]
pub enum Industry {
    Logistics,
    Retail,
    Technology,
    HR,
    Finance,
}

impl Display for Industry {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            Self::Logistics => "Logistics",
            Self::Retail => "Retail",
            Self::Technology => "Technology",
            Self::HR => "HR",
            Self::Finance => "Finance",
        };
        f.write_str(name)
    }
}

impl FromStr for Industry {
    type Err = UnknownVariantError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "Logistics" => Ok(Self::Logistics),
            "Retail" => Ok(Self::Retail),
            "Technology" => Ok(Self::Technology),
            "HR" => Ok(Self::HR),
            "Finance" => Ok(Self::Finance),
            other => Err(UnknownVariantError::Industry(other.to_string())),
        }
    }
}
