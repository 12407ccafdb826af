use std::future::Future;

use portfolio_models::contact::{
    form::{ContactFormErrors, ContactMessageInput},
    ContactMessage,
};
use thiserror::Error;

#[cfg_attr(feature = "mock", mockall::automock)]
pub trait ContactFeatureService: Send + Sync + 'static {
    /// Validates an untrusted contact submission and, if it is valid, stores
    /// it as a new message.
    ///
    /// Invalid submissions never reach the store.
    fn submit_message(
        &self,
        input: ContactMessageInput,
    ) -> impl Future<Output = Result<ContactMessage, ContactSubmitError>> + Send;
}

#[derive(Debug, Error)]
pub enum ContactSubmitError {
    #[error(transparent)]
    Invalid(#[from] ContactFormErrors),
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

#[cfg(feature = "mock")]
impl MockContactFeatureService {
    pub fn with_submit_message(
        mut self,
        input: ContactMessageInput,
        result: Result<ContactMessage, ContactSubmitError>,
    ) -> Self {
        self.expect_submit_message()
            .once()
            .with(mockall::predicate::eq(input))
            .return_once(|_| Box::pin(std::future::ready(result)));
        self
    }
}
