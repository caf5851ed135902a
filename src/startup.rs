//! Server wiring: state, router, and middleware stack.

use std::net::SocketAddr;
use std::sync::Arc;

use axum::Router;
use tracing::info;

use crate::config::Config;
use crate::middleware::{AuthLayer, ErrorHandlingLayer, LoggingLayer, StaticTokenValidator};
use crate::routes::api_routes;
use crate::store::UserStore;
use crate::users::User;

/// Application state shared across handlers.
#[derive(Clone)]
pub struct AppState {
    pub store: Arc<UserStore>,
}

/// Build and configure the complete application.
pub fn build_app(config: &Config) -> anyhow::Result<(Router, SocketAddr)> {
    let addr: SocketAddr = config.http_address.parse()?;

    let store = Arc::new(UserStore::new());
    seed_store(&store);

    let state = AppState { store };
    let app = apply_middleware(api_routes(state), config);

    Ok((app, addr))
}

/// Seed the store with its initial records through the ordinary create path.
pub(crate) fn seed_store(store: &UserStore) {
    for (name, age) in [("Oleg", 18), ("Andrij", 20)] {
        store.create(User {
            name: name.to_string(),
            age,
        });
    }
    info!(users = 2, "Seeded user store");
}

/// Apply the middleware stack.
///
/// Later layers sit further out, so auth (when enabled) is innermost, the
/// error boundary wraps it, and logging wraps everything.
pub(crate) fn apply_middleware(router: Router, config: &Config) -> Router {
    let router = match config.accepted_tokens() {
        Some(tokens) => {
            info!(tokens = tokens.len(), "Token authentication enabled");
            let validator = Arc::new(StaticTokenValidator::new(tokens));
            router.layer(AuthLayer::new(validator))
        }
        None => router,
    };

    router
        .layer(ErrorHandlingLayer::new())
        .layer(LoggingLayer::new())
}
