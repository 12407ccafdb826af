use std::sync::LazyLock;

use chrono::{DateTime, Utc};
use portfolio_models::contact::{form::ContactMessageInput, ContactForm, ContactMessage};

use crate::{UUID1, UUID2};

pub static INPUT_1: LazyLock<ContactMessageInput> =
    LazyLock::new(|| ContactMessageInput::new("Al", "al@x.com", "Hello there, nice site!"));

pub static FORM_1: LazyLock<ContactForm> = LazyLock::new(|| ContactForm {
    name: "Al".to_owned().try_into().unwrap(),
    email: "al@x.com".to_owned().try_into().unwrap(),
    message: "Hello there, nice site!".to_owned().try_into().unwrap(),
});

pub static FORM_2: LazyLock<ContactForm> = LazyLock::new(|| ContactForm {
    name: "Max Mustermann".to_owned().try_into().unwrap(),
    email: "max.mustermann@example.de".to_owned().try_into().unwrap(),
    message: "Are you available for a short project in spring?"
        .to_owned()
        .try_into()
        .unwrap(),
});

pub static CREATED_AT_1: LazyLock<DateTime<Utc>> =
    LazyLock::new(|| DateTime::from_timestamp(1_730_000_000, 0).unwrap());

pub static MESSAGE_1: LazyLock<ContactMessage> =
    LazyLock::new(|| ContactMessage::new(UUID1.into(), FORM_1.clone(), *CREATED_AT_1));

pub static MESSAGE_2: LazyLock<ContactMessage> = LazyLock::new(|| {
    ContactMessage::new(
        UUID2.into(),
        FORM_2.clone(),
        *CREATED_AT_1 + chrono::Duration::minutes(5),
    )
});
