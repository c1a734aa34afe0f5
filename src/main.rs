use config::Config;
use dotenvy::dotenv;

use customer_api::models::config::ServerConfig;

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    dotenv().ok();
    env_logger::init();

    let server_config: ServerConfig = Config::builder()
        .set_default("address", "127.0.0.1")
        .and_then(|b| b.set_default("port", 3001))
        .and_then(|b| b.set_default("customers_file", "data/customers.json"))
        .map_err(|e| std::io::Error::other(format!("Failed to set defaults: {e}")))?
        .add_source(config::File::with_name("config").required(false))
        .add_source(config::Environment::default())
        .build()
        .and_then(Config::try_deserialize)
        .map_err(|e| std::io::Error::other(format!("Failed to load configuration: {e}")))?;

    customer_api::run(server_config).await
}
