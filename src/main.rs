mod api;
mod config;
mod middleware;
mod models;
mod store;
mod utils;

use actix_web::{middleware::Logger, web, App, HttpServer};
use dotenv::dotenv;

use crate::api::metrics::RequestMetrics;
use crate::config::ServerConfig;
use crate::store::UserStore;

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    // Load environment variables
    dotenv().ok();

    // Initialize logger
    env_logger::init_from_env(env_logger::Env::new().default_filter_or("info"));

    let config = ServerConfig::from_env();

    log::info!("🚀 Starting User Service...");

    // Store e métricas vivem o processo todo; cada worker recebe um handle
    let store = web::Data::new(UserStore::new());
    let metrics = web::Data::new(RequestMetrics::new());

    log::info!("🌐 server is listening on {}", config.bind_address());
    log::info!("📚 Swagger UI available at: http://{}/swagger-ui/", config.bind_address());

    HttpServer::new(move || {
        App::new()
            .app_data(store.clone())
            .app_data(metrics.clone())
            .wrap(middleware::RequestCounter::new(metrics.clone()))
            .wrap(Logger::default())
            .configure(api::configure)
    })
    .bind(config.bind_address())?
    .run()
    .await
}
