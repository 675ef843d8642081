use std::future::{ready, Ready};
use std::time::Instant;

use actix_web::dev::{forward_ready, Service, ServiceRequest, ServiceResponse, Transform};
use actix_web::http::StatusCode;
use actix_web::Error as ActixError;
use futures_util::future::LocalBoxFuture;
use tracing::{error, info, warn};

use super::request_trace::trace_id_of;

/// Emits one `request_completed` event per request, at a level chosen by
/// the status class: 5xx error, 4xx warn, everything else info.
///
/// Routing happens inside this middleware, so the matched route pattern and
/// the `chat_id` segment are read from the response's request.
pub struct StructuredLogger;

impl<S, B> Transform<S, ServiceRequest> for StructuredLogger
where
    S: Service<ServiceRequest, Response = ServiceResponse<B>, Error = ActixError>,
    S::Future: 'static,
    B: 'static,
{
    type Response = ServiceResponse<B>;
    type Error = ActixError;
    type InitError = ();
    type Transform = StructuredLoggerMiddleware<S>;
    type Future = Ready<Result<Self::Transform, Self::InitError>>;

    fn new_transform(&self, service: S) -> Self::Future {
        ready(Ok(StructuredLoggerMiddleware { service }))
    }
}

pub struct StructuredLoggerMiddleware<S> {
    service: S,
}

struct Completion {
    method: String,
    path: String,
    route: Option<String>,
    chat_id: Option<String>,
    trace_id: String,
    status: StatusCode,
    duration_us: u64,
}

impl Completion {
    fn emit(&self) {
        let status_code = self.status.as_u16();
        let route = self.route.as_deref().unwrap_or("-");
        let chat_id = self.chat_id.as_deref().unwrap_or("-");
        let (method, path, trace_id, duration_us) =
            (&self.method, &self.path, &self.trace_id, self.duration_us);

        if self.status.is_server_error() {
            error!(http.method = %method, url.path = %path, http.route = route, chat_id, http.status_code = status_code, duration_us, trace_id = %trace_id, "request_completed");
        } else if self.status.is_client_error() {
            warn!(http.method = %method, url.path = %path, http.route = route, chat_id, http.status_code = status_code, duration_us, trace_id = %trace_id, "request_completed");
        } else {
            info!(http.method = %method, url.path = %path, http.route = route, chat_id, http.status_code = status_code, duration_us, trace_id = %trace_id, "request_completed");
        }
    }
}

impl<S, B> Service<ServiceRequest> for StructuredLoggerMiddleware<S>
where
    S: Service<ServiceRequest, Response = ServiceResponse<B>, Error = ActixError>,
    S::Future: 'static,
    B: 'static,
{
    type Response = ServiceResponse<B>;
    type Error = ActixError;
    type Future = LocalBoxFuture<'static, Result<Self::Response, Self::Error>>;

    forward_ready!(service);

    fn call(&self, req: ServiceRequest) -> Self::Future {
        let start = Instant::now();
        let method = req.method().to_string();
        let path = req.path().to_string();
        let trace_id = trace_id_of(&req, "unknown");

        let fut = self.service.call(req);

        Box::pin(async move {
            let result = fut.await;

            let (status, route, chat_id) = match &result {
                Ok(res) => (
                    res.status(),
                    res.request().match_pattern(),
                    res.request().match_info().get("chat_id").map(str::to_string),
                ),
                Err(err) => (err.as_response_error().status_code(), None, None),
            };

            Completion {
                method,
                path,
                route,
                chat_id,
                trace_id,
                status,
                duration_us: u64::try_from(start.elapsed().as_micros()).unwrap_or(u64::MAX),
            }
            .emit();

            result
        })
    }
}
