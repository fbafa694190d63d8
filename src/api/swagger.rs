use utoipa::OpenApi;

#[derive(OpenApi)]
#[openapi(
    info(
        title = "User Service API",
        version = "1.0.0",
        description = "In-memory user registry.\n\n**Features:**\n- Create, fetch and delete users\n- Unique email per live user\n- Health monitoring and metrics"
    ),
    paths(
        crate::api::root::root,

        // Users
        crate::api::users::create_user,
        crate::api::users::get_user,
        crate::api::users::delete_user,

        // Health & Metrics
        crate::api::health::health_check,
        crate::api::metrics::get_metrics,
    ),
    components(
        schemas(
            crate::models::User,
            crate::models::CreateUserRequest,
            crate::api::health::HealthResponse,
            crate::api::metrics::MetricsResponse,
        )
    ),
    tags(
        (name = "Root", description = "Greeting endpoint."),
        (name = "Users", description = "Create, fetch and delete users. Errors are plaintext with status 400."),
        (name = "Health", description = "Health check and system metrics endpoints for monitoring service status."),
    )
)]
pub struct ApiDoc;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_openapi_lists_user_routes() {
        let doc = ApiDoc::openapi();

        assert!(doc.paths.paths.contains_key("/user"));
        assert!(doc.paths.paths.contains_key("/user/{id}"));
        assert!(doc.paths.paths.contains_key("/health"));
    }
}
