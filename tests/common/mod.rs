//! Shared fixtures for integration tests.

use customer_api::domain::customer::{Address, ContactInfo, Customer};
use customer_api::domain::types::Industry;
use customer_api::repository::memory::InMemoryCustomerRepository;

pub fn customer(id: i32, employees: u32, industry: Industry) -> Customer {
    Customer {
        id,
        name: format!("Customer #{id}"),
        employees,
        industry,
        contact_info: Some(ContactInfo {
            name: format!("Contact #{id}"),
            email: format!("contact{id}@example.com"),
        }),
        address: Some(Address {
            street: format!("{id} Main St"),
            city: "Springfield".to_string(),
            state: "IL".to_string(),
            zip_code: "62701".to_string(),
            country: "United States of America".to_string(),
        }),
    }
}

pub fn customer_without_contacts(id: i32, employees: u32, industry: Industry) -> Customer {
    Customer {
        contact_info: None,
        address: None,
        ..customer(id, employees, industry)
    }
}

/// Twelve customers covering every size bucket and industry, in id order.
pub fn sample_customers() -> Vec<Customer> {
    vec![
        customer(1, 10, Industry::Logistics),
        customer(2, 150, Industry::Technology),
        customer_without_contacts(3, 99, Industry::Retail),
        customer(4, 100, Industry::HR),
        customer(5, 999, Industry::Technology),
        customer(6, 1000, Industry::Finance),
        customer_without_contacts(7, 9999, Industry::Logistics),
        customer(8, 10000, Industry::Technology),
        customer(9, 49999, Industry::Retail),
        customer(10, 50000, Industry::Finance),
        customer(11, 75000, Industry::Technology),
        customer(12, 450, Industry::HR),
    ]
}

pub fn sample_repo() -> InMemoryCustomerRepository {
    InMemoryCustomerRepository::new(sample_customers())
}
