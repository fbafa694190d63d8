use actix_web::{http::header::ContentType, web, HttpResponse};

use crate::{
    models::{CreateUserRequest, User},
    store::{UserId, UserStore},
    utils::AppError,
};

fn parse_id(raw: &str) -> Result<UserId, AppError> {
    raw.parse::<UserId>()
        .map_err(|_| AppError::NotFound { malformed_id: true })
}

#[utoipa::path(
    post,
    path = "/user",
    tag = "Users",
    request_body = CreateUserRequest,
    responses(
        (status = 200, description = "User created", body = String),
        (status = 400, description = "Invalid JSON, missing field or email already exists", body = String)
    )
)]
pub async fn create_user(
    store: web::Data<UserStore>,
    body: web::Bytes,
) -> Result<HttpResponse, AppError> {
    log::info!("📝 POST /user");

    let user = CreateUserRequest::from_body(&body)
        .and_then(CreateUserRequest::into_user)
        .map_err(|e| {
            log::warn!("❌ Rejected user payload: {}", e);
            e
        })?;

    match store.insert(user) {
        Ok(id) => {
            log::info!("✅ User {} created", id);
            Ok(HttpResponse::Ok()
                .content_type(ContentType::plaintext())
                .body("user created successfully"))
        }
        Err(e) => {
            log::warn!("❌ Create user failed: {}", e);
            Err(e.into())
        }
    }
}

#[utoipa::path(
    get,
    path = "/user/{id}",
    tag = "Users",
    params(("id" = u64, Path, description = "User id")),
    responses(
        (status = 200, description = "User found", body = User),
        (status = 400, description = "Invalid id or user not found", body = String),
        (status = 500, description = "Response encoding failed", body = String)
    )
)]
pub async fn get_user(
    store: web::Data<UserStore>,
    path: web::Path<String>,
) -> Result<HttpResponse, AppError> {
    let raw_id = path.into_inner();
    log::info!("👤 GET /user/{}", raw_id);

    let id = parse_id(&raw_id)?;
    let user = store.get(id).map_err(|e| {
        log::warn!("❌ {}", e);
        AppError::from(e)
    })?;

    let body = serde_json::to_string(&user).map_err(|e| {
        log::error!("❌ Failed to encode user {}: {}", id, e);
        AppError::SerializationError(e.to_string())
    })?;

    Ok(HttpResponse::Ok()
        .content_type(ContentType::json())
        .body(body))
}

#[utoipa::path(
    delete,
    path = "/user/{id}",
    tag = "Users",
    params(("id" = u64, Path, description = "User id")),
    responses(
        (status = 200, description = "User deleted", body = String),
        (status = 400, description = "Invalid id or user not found", body = String)
    )
)]
pub async fn delete_user(
    store: web::Data<UserStore>,
    path: web::Path<String>,
) -> Result<HttpResponse, AppError> {
    let raw_id = path.into_inner();
    log::info!("🗑️  DELETE /user/{}", raw_id);

    let id = parse_id(&raw_id)?;
    store.delete(id).map_err(|e| {
        log::warn!("❌ {}", e);
        AppError::from(e)
    })?;

    log::info!("✅ User {} deleted", id);
    Ok(HttpResponse::Ok()
        .content_type(ContentType::plaintext())
        .body("user deleted successfully"))
}
