use std::future::Future;

use portfolio_models::contact::{ContactForm, ContactMessage, ContactMessageId};
use thiserror::Error;

/// Append-only storage for accepted contact messages.
///
/// Messages can be created and looked up, but never updated or deleted.
#[cfg_attr(feature = "mock", mockall::automock)]
pub trait ContactMessageRepository: Send + Sync + 'static {
    /// Assigns a fresh unique id and the creation time, appends the message
    /// and returns the stored record.
    fn create(
        &self,
        form: ContactForm,
    ) -> impl Future<Output = Result<ContactMessage, ContactRepoError>> + Send;

    /// Returns the message with the given id.
    fn get(
        &self,
        id: ContactMessageId,
    ) -> impl Future<Output = anyhow::Result<Option<ContactMessage>>> + Send;

    /// Returns all messages in creation order.
    fn list(&self) -> impl Future<Output = anyhow::Result<Vec<ContactMessage>>> + Send;

    /// Returns the number of stored messages.
    fn count(&self) -> impl Future<Output = anyhow::Result<u64>> + Send;

    /// Verify that the store is able to accept writes.
    fn ping(&self) -> impl Future<Output = anyhow::Result<()>> + Send;
}

#[derive(Debug, Error)]
pub enum ContactRepoError {
    #[error("Timed out while persisting the message.")]
    Timeout,
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

#[cfg(feature = "mock")]
impl MockContactMessageRepository {
    pub fn with_create(
        mut self,
        form: ContactForm,
        result: Result<ContactMessage, ContactRepoError>,
    ) -> Self {
        self.expect_create()
            .once()
            .with(mockall::predicate::eq(form))
            .return_once(|_| Box::pin(std::future::ready(result)));
        self
    }

    pub fn with_ping(mut self, ok: bool) -> Self {
        self.expect_ping().once().return_once(move || {
            Box::pin(std::future::ready(if ok {
                Ok(())
            } else {
                Err(anyhow::anyhow!("store unavailable"))
            }))
        });
        self
    }
}
