//! Last-resort error boundary for the request pipeline.
//!
//! Catches panics unwinding out of the inner service, logs them with their
//! payload, and converts them into the uniform opaque 500 response.
//! Expected failures never reach this layer; handlers convert those into
//! typed responses themselves.

use std::any::Any;
use std::future::Future;
use std::panic::AssertUnwindSafe;
use std::pin::Pin;
use std::task::{Context, Poll};

use axum::body::Body;
use futures::FutureExt;
use http::{Request, Response};
use tower::{Layer, Service};
use tracing::error;

use crate::error::internal_error_response;

/// Tower layer installing the panic boundary.
#[derive(Clone, Copy, Default)]
pub struct ErrorHandlingLayer;

impl ErrorHandlingLayer {
    #[must_use]
    pub const fn new() -> Self {
        Self
    }
}

impl<S> Layer<S> for ErrorHandlingLayer {
    type Service = ErrorHandlingMiddleware<S>;

    fn layer(&self, inner: S) -> Self::Service {
        ErrorHandlingMiddleware { inner }
    }
}

/// Panic boundary middleware service.
#[derive(Clone)]
pub struct ErrorHandlingMiddleware<S> {
    inner: S,
}

impl<S, ReqBody> Service<Request<ReqBody>> for ErrorHandlingMiddleware<S>
where
    S: Service<Request<ReqBody>, Response = Response<Body>> + Clone + Send + 'static,
    S::Future: Send,
    ReqBody: Send + 'static,
{
    type Response = S::Response;
    type Error = S::Error;
    type Future = Pin<Box<dyn Future<Output = Result<Self::Response, Self::Error>> + Send>>;

    fn poll_ready(&mut self, cx: &mut Context<'_>) -> Poll<Result<(), Self::Error>> {
        self.inner.poll_ready(cx)
    }

    fn call(&mut self, req: Request<ReqBody>) -> Self::Future {
        let method = req.method().clone();
        let path = req.uri().path().to_string();
        let mut inner = self.inner.clone();

        Box::pin(async move {
            match AssertUnwindSafe(inner.call(req)).catch_unwind().await {
                Ok(result) => result,
                Err(panic) => {
                    error!(
                        method = %method,
                        path = %path,
                        panic = panic_detail(&panic),
                        "Unhandled panic while serving request"
                    );
                    Ok(internal_error_response())
                }
            }
        })
    }
}

/// Best-effort extraction of a panic payload's message.
fn panic_detail(panic: &(dyn Any + Send)) -> &str {
    if let Some(message) = panic.downcast_ref::<&str>() {
        message
    } else if let Some(message) = panic.downcast_ref::<String>() {
        message
    } else {
        "non-string panic payload"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn str_panic_payloads_are_extracted() {
        let payload: Box<dyn Any + Send> = Box::new("boom");
        assert_eq!(panic_detail(payload.as_ref()), "boom");
    }

    #[test]
    fn string_panic_payloads_are_extracted() {
        let payload: Box<dyn Any + Send> = Box::new("boom".to_string());
        assert_eq!(panic_detail(payload.as_ref()), "boom");
    }

    #[test]
    fn opaque_panic_payloads_fall_back() {
        let payload: Box<dyn Any + Send> = Box::new(42_u32);
        assert_eq!(panic_detail(payload.as_ref()), "non-string panic payload");
    }
}
