use actix_web::{HttpResponse, Responder, get, web};
use log::error;

use crate::dto::customers::{CustomersQuery, ErrorResponse};
use crate::repository::memory::InMemoryCustomerRepository;
use crate::services::customers::list_customers;

#[get("/customers")]
pub async fn customers(
    params: web::Query<CustomersQuery>,
    repo: web::Data<InMemoryCustomerRepository>,
) -> impl Responder {
    match list_customers(repo.get_ref(), params.into_inner()) {
        Ok(page) => HttpResponse::Ok().json(page),
        Err(e) if e.is_validation() => HttpResponse::BadRequest().json(ErrorResponse {
            error: e.to_string(),
        }),
        Err(e) => {
            error!("Failed to list customers: {e}");
            HttpResponse::InternalServerError().finish()
        }
    }
}
