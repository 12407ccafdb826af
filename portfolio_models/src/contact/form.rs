//! Validation rules for contact submissions.
//!
//! This is the single definition of what a valid contact submission looks
//! like. The HTTP handler runs it on every request body and the `contact`
//! client command runs it before anything is sent, so both sides always
//! accept and reject the same inputs.

use serde::Serialize;
use serde_json::Value;
use thiserror::Error;

use super::{ContactEmail, ContactForm, ContactMessageBody, ContactName};

/// An untrusted contact submission as received from a client.
///
/// Fields hold the raw JSON values; extra fields of the submitted object are
/// dropped when the input is constructed.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ContactMessageInput {
    pub name: Option<Value>,
    pub email: Option<Value>,
    pub message: Option<Value>,
}

impl ContactMessageInput {
    pub fn new(
        name: impl Into<String>,
        email: impl Into<String>,
        message: impl Into<String>,
    ) -> Self {
        Self {
            name: Some(Value::String(name.into())),
            email: Some(Value::String(email.into())),
            message: Some(Value::String(message.into())),
        }
    }

    /// Parses a raw request body. Anything but a JSON object is rejected.
    pub fn from_slice(body: &[u8]) -> Result<Self, ContactFormErrors> {
        serde_json::from_slice(body)
            .map_err(|_| ContactFormErrors(vec![ContactFormViolation::not_an_object()]))
            .and_then(Self::from_json)
    }

    pub fn from_json(value: Value) -> Result<Self, ContactFormErrors> {
        let Value::Object(mut fields) = value else {
            return Err(ContactFormErrors(vec![ContactFormViolation::not_an_object()]));
        };

        Ok(Self {
            name: fields.remove(ContactField::Name.as_str()),
            email: fields.remove(ContactField::Email.as_str()),
            message: fields.remove(ContactField::Message.as_str()),
        })
    }

    /// Checks every field and either returns the typed form or all
    /// violations found, ordered by field.
    pub fn validate(&self) -> Result<ContactForm, ContactFormErrors> {
        let name = check(
            ContactField::Name,
            self.name.as_ref(),
            |s| ContactName::try_new(s),
            ContactFormViolationCode::TooShort,
        );
        let email = check(
            ContactField::Email,
            self.email.as_ref(),
            |s| ContactEmail::try_new(s),
            ContactFormViolationCode::InvalidFormat,
        );
        let message = check(
            ContactField::Message,
            self.message.as_ref(),
            |s| ContactMessageBody::try_new(s),
            ContactFormViolationCode::TooShort,
        );

        match (name, email, message) {
            (Ok(name), Ok(email), Ok(message)) => Ok(ContactForm {
                name,
                email,
                message,
            }),
            (name, email, message) => Err(ContactFormErrors(
                [name.err(), email.err(), message.err()]
                    .into_iter()
                    .flatten()
                    .collect(),
            )),
        }
    }
}

fn check<T, E>(
    field: ContactField,
    value: Option<&Value>,
    try_new: impl FnOnce(String) -> Result<T, E>,
    rule: ContactFormViolationCode,
) -> Result<T, ContactFormViolation> {
    let value = match value {
        None | Some(Value::Null) => {
            return Err(ContactFormViolation::new(
                field,
                ContactFormViolationCode::Required,
            ))
        }
        Some(Value::String(value)) => value.clone(),
        Some(_) => {
            return Err(ContactFormViolation::new(
                field,
                ContactFormViolationCode::InvalidType,
            ))
        }
    };

    try_new(value).map_err(|_| ContactFormViolation::new(field, rule))
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ContactField {
    Name,
    Email,
    Message,
}

impl ContactField {
    pub fn as_str(self) -> &'static str {
        match self {
            ContactField::Name => "name",
            ContactField::Email => "email",
            ContactField::Message => "message",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ContactFormViolationCode {
    Required,
    InvalidType,
    TooShort,
    InvalidFormat,
}

/// A single field-level constraint failure.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ContactFormViolation {
    /// The offending field, or `None` if the submission as a whole is
    /// malformed.
    pub field: Option<ContactField>,
    pub code: ContactFormViolationCode,
    pub message: &'static str,
}

impl ContactFormViolation {
    pub fn new(field: ContactField, code: ContactFormViolationCode) -> Self {
        use ContactField as F;
        use ContactFormViolationCode as C;

        let message = match (field, code) {
            (F::Name, C::Required) => "Name is required",
            (F::Email, C::Required) => "Email is required",
            (F::Message, C::Required) => "Message is required",
            (F::Name, C::InvalidType) => "Name must be a string",
            (F::Email, C::InvalidType) => "Email must be a string",
            (F::Message, C::InvalidType) => "Message must be a string",
            (F::Name, _) => "Name must be at least 2 characters",
            (F::Email, _) => "Please enter a valid email",
            (F::Message, _) => "Message must be at least 10 characters",
        };

        Self {
            field: Some(field),
            code,
            message,
        }
    }

    fn not_an_object() -> Self {
        Self {
            field: None,
            code: ContactFormViolationCode::InvalidType,
            message: "Expected a JSON object",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("Invalid contact form: {}", .0.iter().map(|v| v.message).collect::<Vec<_>>().join(", "))]
pub struct ContactFormErrors(pub Vec<ContactFormViolation>);

impl ContactFormErrors {
    pub fn violations(&self) -> &[ContactFormViolation] {
        &self.0
    }

    pub fn into_violations(self) -> Vec<ContactFormViolation> {
        self.0
    }
}
