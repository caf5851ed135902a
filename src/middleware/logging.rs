//! Request logging middleware.
//!
//! Captures method and path before dispatch and emits exactly one log line
//! per request once the final status code is known. Each request gets a
//! generated id that appears in the log line and is echoed back in the
//! `x-request-id` response header.

use std::future::Future;
use std::pin::Pin;
use std::task::{Context, Poll};

use http::{HeaderValue, Request, Response};
use tower::{Layer, Service};
use tracing::info;
use uuid::Uuid;

/// Header carrying the generated request ID back to the caller.
pub const REQUEST_ID_HEADER: &str = "x-request-id";

/// Tower layer for request logging.
#[derive(Clone, Copy, Default)]
pub struct LoggingLayer;

impl LoggingLayer {
    #[must_use]
    pub const fn new() -> Self {
        Self
    }
}

impl<S> Layer<S> for LoggingLayer {
    type Service = LoggingMiddleware<S>;

    fn layer(&self, inner: S) -> Self::Service {
        LoggingMiddleware { inner }
    }
}

/// Request logging middleware service.
#[derive(Clone)]
pub struct LoggingMiddleware<S> {
    inner: S,
}

impl<S, ReqBody, ResBody> Service<Request<ReqBody>> for LoggingMiddleware<S>
where
    S: Service<Request<ReqBody>, Response = Response<ResBody>> + Clone + Send + 'static,
    S::Future: Send,
    ReqBody: Send + 'static,
    ResBody: Send + 'static,
{
    type Response = S::Response;
    type Error = S::Error;
    type Future = Pin<Box<dyn Future<Output = Result<Self::Response, Self::Error>> + Send>>;

    fn poll_ready(&mut self, cx: &mut Context<'_>) -> Poll<Result<(), Self::Error>> {
        self.inner.poll_ready(cx)
    }

    fn call(&mut self, req: Request<ReqBody>) -> Self::Future {
        // Request facts are captured before dispatch so the log line can be
        // emitted no matter what happens downstream.
        let method = req.method().clone();
        let path = req.uri().path().to_string();
        let request_id = Uuid::new_v4().to_string();

        let mut inner = self.inner.clone();

        Box::pin(async move {
            let mut response = inner.call(req).await?;

            if let Ok(value) = HeaderValue::from_str(&request_id) {
                response.headers_mut().insert(REQUEST_ID_HEADER, value);
            }

            info!(
                request_id = %request_id,
                method = %method,
                path = %path,
                status = response.status().as_u16(),
                "HTTP request completed"
            );

            Ok(response)
        })
    }
}
