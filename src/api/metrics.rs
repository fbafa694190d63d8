use actix_web::{web, HttpResponse};
use serde::{Deserialize, Serialize};
use std::sync::atomic::{AtomicU64, Ordering};

use crate::store::UserStore;

/// Contadores HTTP do processo, alimentados pelo middleware `RequestCounter`.
#[derive(Default)]
pub struct RequestMetrics {
    requests: AtomicU64,
    errors: AtomicU64,
}

impl RequestMetrics {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn increment_request_count(&self) {
        self.requests.fetch_add(1, Ordering::Relaxed);
    }

    pub fn increment_error_count(&self) {
        self.errors.fetch_add(1, Ordering::Relaxed);
    }

    pub fn snapshot(&self, users: usize) -> MetricsResponse {
        MetricsResponse {
            http_requests_total: self.requests.load(Ordering::Relaxed),
            http_errors_total: self.errors.load(Ordering::Relaxed),
            users_total: users as u64,
        }
    }
}

#[derive(Debug, Serialize, Deserialize, utoipa::ToSchema)]
pub struct MetricsResponse {
    pub http_requests_total: u64,
    pub http_errors_total: u64,
    pub users_total: u64,
}

impl MetricsResponse {
    pub fn to_prometheus(&self) -> String {
        format!(
            "# HELP http_requests_total Total number of HTTP requests\n\
             # TYPE http_requests_total counter\n\
             http_requests_total {}\n\
             \n\
             # HELP http_errors_total Total number of HTTP errors\n\
             # TYPE http_errors_total counter\n\
             http_errors_total {}\n\
             \n\
             # HELP users_total Users currently stored\n\
             # TYPE users_total gauge\n\
             users_total {}\n",
            self.http_requests_total, self.http_errors_total, self.users_total
        )
    }
}

#[utoipa::path(
    get,
    path = "/metrics",
    tag = "Health",
    responses(
        (status = 200, description = "System metrics", body = MetricsResponse)
    )
)]
pub async fn get_metrics(
    metrics: web::Data<RequestMetrics>,
    store: web::Data<UserStore>,
) -> HttpResponse {
    HttpResponse::Ok()
        .content_type("text/plain; version=0.0.4")
        .body(metrics.snapshot(store.len()).to_prometheus())
}
