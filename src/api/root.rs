use actix_web::{http::header::ContentType, http::Method, HttpRequest, HttpResponse};

pub const GREETING: &str = "Hello Developer 💀 👋...";

#[utoipa::path(
    get,
    path = "/",
    tag = "Root",
    responses(
        (status = 200, description = "Plaintext greeting", body = String)
    )
)]
pub async fn root() -> HttpResponse {
    HttpResponse::Ok()
        .content_type(ContentType::plaintext())
        .body(GREETING)
}

/// Qualquer GET sem rota cai no greeting; os outros métodos recebem 405.
pub async fn fallback(req: HttpRequest) -> HttpResponse {
    if *req.method() == Method::GET || *req.method() == Method::HEAD {
        return root().await;
    }

    log::warn!("❌ {} {} - method not allowed", req.method(), req.path());
    HttpResponse::MethodNotAllowed()
        .content_type(ContentType::plaintext())
        .body("Method Not Allowed")
}
