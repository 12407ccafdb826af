use portfolio_models::contact::{
    form::{ContactFormErrors, ContactFormViolation},
    ContactMessageId,
};
use serde::Serialize;

#[derive(Debug, Serialize)]
pub struct ApiContactMessageCreated {
    pub success: bool,
    pub message: &'static str,
    pub id: ContactMessageId,
}

impl ApiContactMessageCreated {
    pub fn new(id: ContactMessageId) -> Self {
        Self {
            success: true,
            message: "Message received successfully",
            id,
        }
    }
}

#[derive(Debug, Serialize)]
pub struct ApiInvalidInput {
    pub error: &'static str,
    pub details: Vec<ContactFormViolation>,
}

impl From<ContactFormErrors> for ApiInvalidInput {
    fn from(value: ContactFormErrors) -> Self {
        Self {
            error: "Invalid input",
            details: value.into_violations(),
        }
    }
}
