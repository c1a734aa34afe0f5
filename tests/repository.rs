use std::io::Write;

use customer_api::domain::types::Industry;
use customer_api::repository::CustomerReader;
use customer_api::repository::errors::RepositoryError;
use customer_api::repository::memory::InMemoryCustomerRepository;
use tempfile::NamedTempFile;

mod common;

#[test]
fn lists_customers_in_source_order() {
    let repo = common::sample_repo();

    let customers = repo.list_customers().unwrap();

    let ids: Vec<i32> = customers.iter().map(|c| c.id).collect();
    assert_eq!(ids, (1..=12).collect::<Vec<i32>>());
}

#[test]
fn repeated_reads_are_identical() {
    let repo = common::sample_repo();

    let first = repo.list_customers().unwrap();
    let second = repo.list_customers().unwrap();

    assert_eq!(first, second);
}

#[test]
fn loads_customers_from_a_json_file() {
    let mut file = NamedTempFile::new().unwrap();
    write!(
        file,
        r#"[
            {{
                "id": 1,
                "name": "Jacobs Co",
                "employees": 99,
                "industry": "Logistics",
                "contactInfo": {{"name": "Ann", "email": "ann@jacobs.example"}},
                "address": {{
                    "street": "988 Kimberly Fort Apt. 921",
                    "city": "Lake Tracy",
                    "state": "Connecticut",
                    "zipCode": "07115",
                    "country": "United States of America"
                }}
            }},
            {{
                "id": 2,
                "name": "Kilback Co",
                "employees": 100000,
                "industry": "Technology",
                "contactInfo": null,
                "address": null
            }}
        ]"#
    )
    .unwrap();

    let repo = InMemoryCustomerRepository::from_json_file(file.path()).unwrap();
    assert_eq!(repo.len(), 2);

    let customers = repo.list_customers().unwrap();
    assert_eq!(customers[0].name, "Jacobs Co");
    assert_eq!(customers[0].industry, Industry::Logistics);
    assert_eq!(
        customers[0].address.as_ref().unwrap().zip_code,
        "07115"
    );
    assert_eq!(customers[1].contact_info, None);
    assert_eq!(customers[1].address, None);
}

#[test]
fn missing_seed_file_is_an_io_error() {
    let result = InMemoryCustomerRepository::from_json_file("does-not-exist.json");

    assert!(matches!(result, Err(RepositoryError::Io(_))));
}

#[test]
fn malformed_seed_file_is_a_deserialization_error() {
    let mut file = NamedTempFile::new().unwrap();
    write!(file, "{{\"not\": \"an array\"}}").unwrap();

    let result = InMemoryCustomerRepository::from_json_file(file.path());

    assert!(matches!(
        result,
        Err(RepositoryError::Deserialization(_))
    ));
}

#[test]
fn empty_collection_is_valid() {
    let repo = InMemoryCustomerRepository::new(vec![]);

    assert!(repo.is_empty());
    assert!(repo.list_customers().unwrap().is_empty());
}
