use std::sync::Arc;

use axum::{
    body::Bytes,
    extract::State,
    http::StatusCode,
    response::{IntoResponse, Response},
    routing, Json, Router,
};
use portfolio_core_contact_contracts::{ContactFeatureService, ContactSubmitError};
use portfolio_models::contact::form::{ContactFormErrors, ContactMessageInput};

use crate::{
    errors::internal_server_error,
    models::contact::{ApiContactMessageCreated, ApiInvalidInput},
};

pub fn router(service: Arc<impl ContactFeatureService>) -> Router<()> {
    Router::new()
        .route("/api/contact", routing::post(submit_message))
        .with_state(service)
}

// The body is parsed here instead of by the `Json` extractor, so malformed
// bodies get the same 400 shape as invalid fields.
async fn submit_message(
    service: State<Arc<impl ContactFeatureService>>,
    body: Bytes,
) -> Response {
    let input = match ContactMessageInput::from_slice(&body) {
        Ok(input) => input,
        Err(errors) => return invalid_input(errors),
    };

    match service.submit_message(input).await {
        Ok(message) => (
            StatusCode::CREATED,
            Json(ApiContactMessageCreated::new(message.id)),
        )
            .into_response(),
        Err(ContactSubmitError::Invalid(errors)) => invalid_input(errors),
        Err(ContactSubmitError::Other(err)) => internal_server_error(err, "Failed to save message"),
    }
}

fn invalid_input(errors: ContactFormErrors) -> Response {
    (StatusCode::BAD_REQUEST, Json(ApiInvalidInput::from(errors))).into_response()
}
