use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};

use crate::models::ApiError;

/// Logs `err` with its full chain and answers with an opaque 500.
pub fn internal_server_error(err: impl Into<anyhow::Error>, error: &'static str) -> Response {
    let err = err.into();
    tracing::error!("internal server error: {err:#}");
    self::error(StatusCode::INTERNAL_SERVER_ERROR, error)
}

pub fn error(code: StatusCode, error: &'static str) -> Response {
    (code, Json(ApiError { error })).into_response()
}
