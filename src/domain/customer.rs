use serde::{Deserialize, Serialize};

use crate::domain::types::Industry;

/// A customer record as supplied by the data source.
///
/// The `size` bucket is intentionally absent here: it is derived from
/// `employees` at query time, never stored.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct Customer {
    pub id: i32,
    pub name: String,
    pub employees: u32,
    pub industry: Industry,
    /// Optional contact person, `null` when the customer has none on file.
    pub contact_info: Option<ContactInfo>,
    /// Optional postal address, `null` when unknown.
    pub address: Option<Address>,
}

/// Contact person attached to a customer.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct ContactInfo {
    pub name: String,
    pub email: String,
}

/// Postal address attached to a customer.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct Address {
    pub street: String,
    pub city: String,
    pub state: String,
    pub zip_code: String,
    pub country: String,
}
