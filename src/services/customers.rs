//! The customer query pipeline: validate, classify, filter, paginate.

use std::str::FromStr;

use crate::domain::types::{CompanySize, Industry};
use crate::dto::customers::{CustomerRecord, CustomersPage, CustomersQuery, PageInfo};
use crate::repository::CustomerReader;
use crate::services::{ServiceError, ServiceResult};

/// Page number used when the caller does not send one.
pub const DEFAULT_PAGE: usize = 1;
/// Page size used when the caller does not send one.
pub const DEFAULT_LIMIT: usize = 10;

/// Parses an optional numeric parameter, requiring a strictly positive
/// integer when present.
fn parse_positive(raw: Option<&str>, default: usize) -> ServiceResult<usize> {
    match raw {
        None => Ok(default),
        Some(value) => match value.trim().parse::<i64>() {
            Ok(n) if n > 0 => Ok(n as usize),
            _ => Err(ServiceError::InvalidPageOrLimit),
        },
    }
}

/// Parses an optional enum filter where `All` (or absence) means no filter.
fn parse_filter<T: FromStr>(raw: Option<&str>) -> Result<Option<T>, T::Err> {
    match raw {
        None | Some("All") => Ok(None),
        Some(value) => value.parse().map(Some),
    }
}

/// Returns one page of the customer collection, filtered and classified.
///
/// Validation is fail-fast: `page`/`limit` are checked before `size`, and
/// `size` before `industry`, so simultaneous failures report a single error.
/// Filters that match nothing yield an empty page, never an error, and a
/// page past the end of the filtered set does the same.
pub fn list_customers<R>(repo: &R, params: CustomersQuery) -> ServiceResult<CustomersPage>
where
    R: CustomerReader + ?Sized,
{
    let page = parse_positive(params.page.as_deref(), DEFAULT_PAGE)?;
    let limit = parse_positive(params.limit.as_deref(), DEFAULT_LIMIT)?;
    let size_filter: Option<CompanySize> =
        parse_filter(params.size.as_deref()).map_err(|_| ServiceError::UnsupportedSize)?;
    let industry_filter: Option<Industry> =
        parse_filter(params.industry.as_deref()).map_err(|_| ServiceError::UnsupportedIndustry)?;

    let filtered: Vec<CustomerRecord> = repo
        .list_customers()?
        .into_iter()
        .map(CustomerRecord::from)
        .filter(|c| industry_filter.is_none_or(|industry| c.industry == industry))
        .filter(|c| size_filter.is_none_or(|size| c.size == size))
        .collect();

    let page_info = PageInfo::new(page, filtered.len(), limit);
    let customers = filtered
        .into_iter()
        .skip((page - 1).saturating_mul(limit))
        .take(limit)
        .collect();

    Ok(CustomersPage {
        customers,
        page_info,
    })
}
