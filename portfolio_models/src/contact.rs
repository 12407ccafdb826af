use std::sync::LazyLock;

use chrono::{DateTime, Utc};
use nutype::nutype;
use regex::Regex;
use serde::{Deserialize, Serialize};

use crate::macros::id;

pub mod form;

id!(ContactMessageId);

/// A contact submission that passed validation and has been persisted.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContactMessage {
    pub id: ContactMessageId,
    pub name: ContactName,
    pub email: ContactEmail,
    pub message: ContactMessageBody,
    pub created_at: DateTime<Utc>,
}

/// The validated fields of a contact submission, before the store has
/// assigned an id and a timestamp.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContactForm {
    pub name: ContactName,
    pub email: ContactEmail,
    pub message: ContactMessageBody,
}

impl ContactMessage {
    pub fn new(id: ContactMessageId, form: ContactForm, created_at: DateTime<Utc>) -> Self {
        let ContactForm {
            name,
            email,
            message,
        } = form;

        Self {
            id,
            name,
            email,
            message,
            created_at,
        }
    }
}

#[nutype(
    validate(len_char_min = 2),
    derive(Debug, Clone, PartialEq, Eq, TryFrom, Deref, Serialize, Deserialize)
)]
pub struct ContactName(String);

#[nutype(
    validate(predicate = is_valid_email),
    derive(Debug, Clone, PartialEq, Eq, TryFrom, Deref, Serialize, Deserialize)
)]
pub struct ContactEmail(String);

#[nutype(
    validate(len_char_min = 10),
    derive(Debug, Clone, PartialEq, Eq, TryFrom, Deref, Serialize, Deserialize)
)]
pub struct ContactMessageBody(String);

static EMAIL_REGEX: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^[A-Za-z0-9_'+\-.]*[A-Za-z0-9_+\-]@([A-Za-z0-9][A-Za-z0-9\-]*\.)+[A-Za-z]{2,}$")
        .unwrap()
});

/// Checks a single address of the form `local@domain`.
///
/// The domain must contain at least one dot and end in an alphabetic label
/// of two or more characters. The local part must not start with a dot or
/// contain two consecutive dots.
pub fn is_valid_email(email: &str) -> bool {
    let Some((local, _)) = email.split_once('@') else {
        return false;
    };

    !local.starts_with('.') && !local.contains("..") && EMAIL_REGEX.is_match(email)
}
