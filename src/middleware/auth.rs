//! Bearer-token authentication middleware.
//!
//! Disabled by default; the startup wiring installs this layer only when
//! accepted tokens are configured. Tokens are opaque strings checked
//! against a fixed set.

use std::collections::HashSet;
use std::future::Future;
use std::pin::Pin;
use std::sync::Arc;
use std::task::{Context, Poll};

use axum::body::Body;
use http::{Request, Response, StatusCode};
use tower::{Layer, Service};
use tracing::debug;

/// Capability for deciding whether a presented token grants access.
pub trait TokenValidator: Send + Sync {
    fn validate(&self, token: &str) -> bool;
}

/// Validator backed by a fixed set of accepted tokens.
#[derive(Debug, Clone)]
pub struct StaticTokenValidator {
    tokens: HashSet<String>,
}

impl StaticTokenValidator {
    pub fn new(tokens: impl IntoIterator<Item = String>) -> Self {
        Self {
            tokens: tokens.into_iter().collect(),
        }
    }
}

impl TokenValidator for StaticTokenValidator {
    fn validate(&self, token: &str) -> bool {
        self.tokens.contains(token)
    }
}

/// Routes that bypass authentication.
const PUBLIC_ROUTES: &[&str] = &["/"];

/// Tower layer for bearer-token authentication.
#[derive(Clone)]
pub struct AuthLayer {
    validator: Arc<dyn TokenValidator>,
}

impl AuthLayer {
    #[must_use]
    pub fn new(validator: Arc<dyn TokenValidator>) -> Self {
        Self { validator }
    }
}

impl<S> Layer<S> for AuthLayer {
    type Service = AuthMiddleware<S>;

    fn layer(&self, inner: S) -> Self::Service {
        AuthMiddleware {
            inner,
            validator: Arc::clone(&self.validator),
        }
    }
}

/// Authentication middleware service.
#[derive(Clone)]
pub struct AuthMiddleware<S> {
    inner: S,
    validator: Arc<dyn TokenValidator>,
}

impl<S, ReqBody> Service<Request<ReqBody>> for AuthMiddleware<S>
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
        let path = req.uri().path();

        if is_public_route(path) {
            debug!(path, "Public route - skipping auth");
            let mut inner = self.inner.clone();
            return Box::pin(async move { inner.call(req).await });
        }

        let denial = match bearer_token(&req) {
            Some(token) if self.validator.validate(token) => None,
            Some(_) => Some("Invalid token"),
            None => Some("Missing bearer token"),
        };

        match denial {
            None => {
                let mut inner = self.inner.clone();
                Box::pin(async move { inner.call(req).await })
            }
            Some(reason) => Box::pin(async move { Ok(unauthorized_response(reason)) }),
        }
    }
}

const BEARER_PREFIX: &str = "Bearer ";

/// Extract a non-empty bearer token from the Authorization header.
fn bearer_token<T>(req: &Request<T>) -> Option<&str> {
    req.headers()
        .get(http::header::AUTHORIZATION)
        .and_then(|v| v.to_str().ok())
        .and_then(|header| {
            header
                .strip_prefix(BEARER_PREFIX)
                .or_else(|| header.strip_prefix("bearer "))
        })
        .filter(|token| !token.is_empty())
}

fn is_public_route(path: &str) -> bool {
    PUBLIC_ROUTES.contains(&path)
}

fn unauthorized_response(reason: &str) -> Response<Body> {
    Response::builder()
        .status(StatusCode::UNAUTHORIZED)
        .header("content-type", "application/json")
        .header("www-authenticate", "Bearer")
        .body(Body::from(format!(r#"{{"error":"{reason}"}}"#)))
        .expect("valid response")
}

#[cfg(test)]
mod tests {
    use super::*;

    fn validator() -> StaticTokenValidator {
        StaticTokenValidator::new(["token123".to_string(), "secret456".to_string()])
    }

    #[test]
    fn accepted_tokens_validate() {
        let v = validator();
        assert!(v.validate("token123"));
        assert!(v.validate("secret456"));
    }

    #[test]
    fn unknown_tokens_are_rejected() {
        let v = validator();
        assert!(!v.validate("admin789"));
        assert!(!v.validate(""));
    }

    #[test]
    fn main_page_is_public() {
        assert!(is_public_route("/"));
        assert!(!is_public_route("/users"));
        assert!(!is_public_route("/users/1"));
    }

    #[test]
    fn bearer_token_extraction() {
        let with_token = Request::builder()
            .header("authorization", "Bearer token123")
            .body(())
            .unwrap();
        assert_eq!(bearer_token(&with_token), Some("token123"));

        let lowercase = Request::builder()
            .header("authorization", "bearer token123")
            .body(())
            .unwrap();
        assert_eq!(bearer_token(&lowercase), Some("token123"));

        let empty = Request::builder()
            .header("authorization", "Bearer ")
            .body(())
            .unwrap();
        assert_eq!(bearer_token(&empty), None);

        let missing = Request::builder().body(()).unwrap();
        assert_eq!(bearer_token(&missing), None);
    }
}
