use actix_cors::Cors;
use actix_web::{App, HttpServer, middleware, web};

use crate::models::config::ServerConfig;
use crate::repository::memory::InMemoryCustomerRepository;
use crate::routes::customers::customers;

pub mod domain;
pub mod dto;
pub mod models;
pub mod repository;
pub mod routes;
pub mod services;

/// Builds and runs the Actix-Web HTTP server using the provided configuration.
pub async fn run(server_config: ServerConfig) -> std::io::Result<()> {
    // Load the customer collection once; workers share it read-only.
    let repo = InMemoryCustomerRepository::from_json_file(&server_config.customers_file)
        .map_err(|e| std::io::Error::other(format!("Failed to load customer data: {e}")))?;

    log::info!(
        "Serving {} customers from {}",
        repo.len(),
        server_config.customers_file
    );

    let bind_address = (server_config.address.clone(), server_config.port);

    HttpServer::new(move || {
        App::new()
            .wrap(Cors::permissive())
            .wrap(middleware::Compress::default())
            .wrap(middleware::Logger::default())
            .service(customers)
            .app_data(web::Data::new(repo.clone()))
    })
    .bind(bind_address)?
    .run()
    .await
}
