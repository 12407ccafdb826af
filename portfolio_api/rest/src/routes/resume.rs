use std::sync::Arc;

use anyhow::Context;
use axum::{
    extract::State,
    http::{header, HeaderValue, StatusCode},
    response::{IntoResponse, Response},
    routing, Router,
};
use portfolio_core_resume_contracts::{ResumeFeatureService, ResumeGetError};
use portfolio_models::resume::Resume;

use crate::errors::{error, internal_server_error};

pub fn router(service: Arc<impl ResumeFeatureService>) -> Router<()> {
    Router::new()
        .route("/api/resume", routing::get(get_resume))
        .with_state(service)
}

async fn get_resume(service: State<Arc<impl ResumeFeatureService>>) -> Response {
    match service.get_resume().await {
        Ok(Resume { filename, content }) => match content_disposition(&filename) {
            Ok(disposition) => (
                [
                    (
                        header::CONTENT_TYPE,
                        HeaderValue::from_static(Resume::CONTENT_TYPE),
                    ),
                    (header::CONTENT_DISPOSITION, disposition),
                ],
                content,
            )
                .into_response(),
            Err(err) => internal_server_error(err, "Failed to serve resume"),
        },
        Err(ResumeGetError::NotFound) => error(StatusCode::NOT_FOUND, "Resume not found"),
        Err(ResumeGetError::Other(err)) => internal_server_error(err, "Failed to serve resume"),
    }
}

fn content_disposition(filename: &str) -> anyhow::Result<HeaderValue> {
    HeaderValue::try_from(format!("attachment; filename=\"{filename}\""))
        .with_context(|| format!("Invalid resume file name {filename:?}"))
}
