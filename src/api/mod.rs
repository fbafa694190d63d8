pub mod root;
pub mod users;
pub mod health;
pub mod metrics;
pub mod swagger;

use actix_web::web;
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

/// Limite do corpo do `POST /user` (o default do actix é 256 KiB).
pub const MAX_BODY_BYTES: usize = 16 * 1024 * 1024;

/// Registra todas as rotas. `UserStore` e `RequestMetrics` devem estar em
/// `app_data`.
pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.app_data(web::PayloadConfig::new(MAX_BODY_BYTES))
    .service(
        SwaggerUi::new("/swagger-ui/{_:.*}")
            .url("/api-docs/openapi.json", swagger::ApiDoc::openapi()),
    )
    // Health check
    .route("/health", web::get().to(health::health_check))
    // Metrics
    .route("/metrics", web::get().to(metrics::get_metrics))
    .route("/", web::get().to(root::root))
    .route("/", web::head().to(root::root))
    // Users
    .route("/user", web::post().to(users::create_user))
    .route("/user/{id}", web::get().to(users::get_user))
    .route("/user/{id}", web::head().to(users::get_user))
    .route("/user/{id}", web::delete().to(users::delete_user))
    .default_service(web::to(root::fallback));
}
