use actix_web::{
    dev::{forward_ready, Service, ServiceRequest, ServiceResponse, Transform},
    web, Error,
};
use futures::future::LocalBoxFuture;
use std::future::{ready, Ready};

use crate::api::metrics::RequestMetrics;

/// Conta cada request e cada resposta com status >= 400.
pub struct RequestCounter {
    metrics: web::Data<RequestMetrics>,
}

impl RequestCounter {
    pub fn new(metrics: web::Data<RequestMetrics>) -> Self {
        Self { metrics }
    }
}

impl<S, B> Transform<S, ServiceRequest> for RequestCounter
where
    S: Service<ServiceRequest, Response = ServiceResponse<B>, Error = Error>,
    S::Future: 'static,
    B: 'static,
{
    type Response = ServiceResponse<B>;
    type Error = Error;
    type InitError = ();
    type Transform = RequestCounterMiddleware<S>;
    type Future = Ready<Result<Self::Transform, Self::InitError>>;

    fn new_transform(&self, service: S) -> Self::Future {
        ready(Ok(RequestCounterMiddleware {
            service,
            metrics: self.metrics.clone(),
        }))
    }
}

pub struct RequestCounterMiddleware<S> {
    service: S,
    metrics: web::Data<RequestMetrics>,
}

impl<S, B> Service<ServiceRequest> for RequestCounterMiddleware<S>
where
    S: Service<ServiceRequest, Response = ServiceResponse<B>, Error = Error>,
    S::Future: 'static,
    B: 'static,
{
    type Response = ServiceResponse<B>;
    type Error = Error;
    type Future = LocalBoxFuture<'static, Result<Self::Response, Self::Error>>;

    forward_ready!(service);

    fn call(&self, req: ServiceRequest) -> Self::Future {
        self.metrics.increment_request_count();

        let metrics = self.metrics.clone();
        let fut = self.service.call(req);

        Box::pin(async move {
            let result = fut.await;

            let failed = match &result {
                Ok(res) => res.status().is_client_error() || res.status().is_server_error(),
                Err(_) => true,
            };
            if failed {
                metrics.increment_error_count();
            }

            result
        })
    }
}
