//! DTOs exposed by the `/customers` endpoint.

use serde::{Deserialize, Serialize};

use crate::domain::customer::{Address, ContactInfo, Customer};
use crate::domain::types::{CompanySize, Industry};

/// Raw query parameters accepted by the `/customers` service.
///
/// All fields arrive as unvalidated strings; `page` and `limit` in
/// particular must stay textual so that non-numeric input reaches the
/// validation step instead of being rejected by deserialization.
#[derive(Debug, Default, Deserialize)]
pub struct CustomersQuery {
    /// Requested page number, defaults to 1.
    pub page: Option<String>,
    /// Requested page size, defaults to 10.
    pub limit: Option<String>,
    /// Size bucket filter, `All` or absent for no filtering.
    pub size: Option<String>,
    /// Industry filter, `All` or absent for no filtering.
    pub industry: Option<String>,
}

/// A customer as rendered on the wire, with its derived size bucket.
#[derive(Clone, Debug, Serialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct CustomerRecord {
    pub id: i32,
    pub name: String,
    pub employees: u32,
    pub industry: Industry,
    pub size: CompanySize,
    pub contact_info: Option<ContactInfo>,
    pub address: Option<Address>,
}

impl From<Customer> for CustomerRecord {
    fn from(customer: Customer) -> Self {
        let size = CompanySize::classify(customer.employees);
        Self {
            id: customer.id,
            name: customer.name,
            employees: customer.employees,
            industry: customer.industry,
            size,
            contact_info: customer.contact_info,
            address: customer.address,
        }
    }
}

/// Pagination metadata computed against the filtered set.
#[derive(Clone, Debug, Serialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct PageInfo {
    pub current_page: usize,
    pub total_pages: usize,
    pub total_customers: usize,
}

impl PageInfo {
    /// Derives the metadata for a filtered set of `total_customers` records
    /// split into pages of `limit`.
    ///
    /// An empty set still reports one page so that `totalPages` is never
    /// zero.
    #[must_use]
    pub fn new(current_page: usize, total_customers: usize, limit: usize) -> Self {
        let total_pages = total_customers.div_ceil(limit).max(1);
        Self {
            current_page,
            total_pages,
            total_customers,
        }
    }
}

/// Result payload returned by [`crate::services::customers::list_customers`].
#[derive(Clone, Debug, Serialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct CustomersPage {
    /// Page slice of the filtered set, in source order.
    pub customers: Vec<CustomerRecord>,
    pub page_info: PageInfo,
}

/// Error body returned on validation failures.
#[derive(Clone, Debug, Serialize, PartialEq, Eq)]
pub struct ErrorResponse {
    pub error: String,
}
