//! HTTP route table.

use axum::Router;
use axum::routing::get;

use crate::startup::AppState;
use crate::users::{create_user, delete_user, get_user, list_users, main_page, update_user};

/// Build the API routes with the given application state.
pub fn api_routes(state: AppState) -> Router {
    Router::new()
        .route("/", get(main_page))
        .route("/users", get(list_users).post(create_user))
        .route(
            "/users/{id}",
            get(get_user).put(update_user).delete(delete_user),
        )
        .with_state(state)
}
