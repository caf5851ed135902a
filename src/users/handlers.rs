//! CRUD handlers for the users resource.
//!
//! Thin handlers that decode the request, run validation, and delegate to
//! the store. Expected failures come back as typed [`AppError`] values;
//! only undecodable bodies are escalated to the opaque internal error.

use axum::Json;
use axum::extract::rejection::JsonRejection;
use axum::extract::{Path, State};
use axum::http::StatusCode;
use tracing::instrument;

use super::{User, validate};
use crate::error::{AppError, AppResult};
use crate::startup::AppState;
use crate::store::UserId;

pub async fn main_page() -> &'static str {
    "Main page"
}

pub async fn list_users(State(state): State<AppState>) -> Json<Vec<User>> {
    Json(state.store.list())
}

pub async fn get_user(
    State(state): State<AppState>,
    Path(id): Path<UserId>,
) -> AppResult<Json<User>> {
    state.store.get(id).map(Json).ok_or(AppError::UserNotFound)
}

#[instrument(skip(state, payload))]
pub async fn create_user(
    State(state): State<AppState>,
    payload: Result<Json<Option<User>>, JsonRejection>,
) -> AppResult<StatusCode> {
    let user = validate(decode_body(payload)?)?;
    let id = state.store.create(user);
    tracing::debug!(id, "User created");
    Ok(StatusCode::CREATED)
}

#[instrument(skip(state, payload))]
pub async fn update_user(
    State(state): State<AppState>,
    Path(id): Path<UserId>,
    payload: Result<Json<Option<User>>, JsonRejection>,
) -> AppResult<Json<User>> {
    let user = validate(decode_body(payload)?)?;
    let stored = state.store.update(id, user).ok_or(AppError::UserNotFound)?;
    Ok(Json(stored))
}

#[instrument(skip(state))]
pub async fn delete_user(
    State(state): State<AppState>,
    Path(id): Path<UserId>,
) -> AppResult<StatusCode> {
    state.store.remove(id).ok_or(AppError::UserNotFound)?;
    Ok(StatusCode::NO_CONTENT)
}

/// Decode an optional JSON body.
///
/// A literal `null` body decodes to `None` and is left for the validator to
/// reject; an undecodable body is an unexpected failure, not a validation
/// outcome.
fn decode_body(payload: Result<Json<Option<User>>, JsonRejection>) -> AppResult<Option<User>> {
    match payload {
        Ok(Json(candidate)) => Ok(candidate),
        Err(rejection) => Err(AppError::Internal(rejection.to_string())),
    }
}
