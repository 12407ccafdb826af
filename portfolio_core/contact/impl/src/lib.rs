use anyhow::anyhow;
use portfolio_core_contact_contracts::{ContactFeatureService, ContactSubmitError};
use portfolio_models::contact::{form::ContactMessageInput, ContactMessage};
use portfolio_persistence_contracts::contact::{ContactMessageRepository, ContactRepoError};
use tracing::{debug, info};

#[derive(Debug, Clone, Default)]
pub struct ContactFeatureServiceImpl<ContactRepo> {
    contact_repo: ContactRepo,
}

impl<ContactRepo> ContactFeatureServiceImpl<ContactRepo> {
    pub fn new(contact_repo: ContactRepo) -> Self {
        Self { contact_repo }
    }
}

impl<ContactRepo> ContactFeatureService for ContactFeatureServiceImpl<ContactRepo>
where
    ContactRepo: ContactMessageRepository,
{
    #[tracing::instrument(skip_all)]
    async fn submit_message(
        &self,
        input: ContactMessageInput,
    ) -> Result<ContactMessage, ContactSubmitError> {
        let form = input
            .validate()
            .inspect_err(|err| debug!("rejected contact submission: {err}"))?;

        let message = self
            .contact_repo
            .create(form)
            .await
            .map_err(|err| match err {
                ContactRepoError::Timeout => anyhow!("Timed out while saving contact message"),
                ContactRepoError::Other(err) => err.context("Failed to save contact message"),
            })?;

        info!(id = %message.id, "Received contact message");

        Ok(message)
    }
}

#[cfg(test)]
mod tests {
    use portfolio_demo::contact::{FORM_1, INPUT_1, MESSAGE_1};
    use portfolio_models::contact::form::{ContactField, ContactFormViolationCode};
    use portfolio_persistence_contracts::contact::MockContactMessageRepository;
    use portfolio_utils::assert_matches;
    use pretty_assertions::assert_eq;

    use super::*;

    #[tokio::test]
    async fn ok() {
        // Arrange
        let contact_repo =
            MockContactMessageRepository::new().with_create(FORM_1.clone(), Ok(MESSAGE_1.clone()));

        let sut = ContactFeatureServiceImpl { contact_repo };

        // Act
        let result = sut.submit_message(INPUT_1.clone()).await;

        // Assert
        assert_eq!(result.unwrap(), *MESSAGE_1);
    }

    #[tokio::test]
    async fn invalid_input_never_reaches_store() {
        // Arrange
        let contact_repo = MockContactMessageRepository::new();

        let sut = ContactFeatureServiceImpl { contact_repo };

        // Act
        let result = sut
            .submit_message(ContactMessageInput::new("A", "bad-email", "hi"))
            .await;

        // Assert
        let errors = match result {
            Err(ContactSubmitError::Invalid(errors)) => errors,
            other => panic!("expected validation error, got {other:?}"),
        };
        assert_eq!(
            errors
                .violations()
                .iter()
                .map(|v| (v.field, v.code))
                .collect::<Vec<_>>(),
            [
                (Some(ContactField::Name), ContactFormViolationCode::TooShort),
                (
                    Some(ContactField::Email),
                    ContactFormViolationCode::InvalidFormat
                ),
                (
                    Some(ContactField::Message),
                    ContactFormViolationCode::TooShort
                ),
            ]
        );
    }

    #[tokio::test]
    async fn short_name_never_reaches_store() {
        let contact_repo = MockContactMessageRepository::new();

        let sut = ContactFeatureServiceImpl { contact_repo };

        let result = sut
            .submit_message(ContactMessageInput::new(
                "A",
                "al@x.com",
                "Hello there, nice site!",
            ))
            .await;

        assert_matches!(result, Err(ContactSubmitError::Invalid(_)));
    }

    #[tokio::test]
    async fn store_error() {
        // Arrange
        let contact_repo = MockContactMessageRepository::new().with_create(
            FORM_1.clone(),
            Err(ContactRepoError::Other(anyhow!("disk full"))),
        );

        let sut = ContactFeatureServiceImpl { contact_repo };

        // Act
        let result = sut.submit_message(INPUT_1.clone()).await;

        // Assert
        assert_matches!(result, Err(ContactSubmitError::Other(_)));
    }

    #[tokio::test]
    async fn store_timeout() {
        // Arrange
        let contact_repo = MockContactMessageRepository::new()
            .with_create(FORM_1.clone(), Err(ContactRepoError::Timeout));

        let sut = ContactFeatureServiceImpl { contact_repo };

        // Act
        let result = sut.submit_message(INPUT_1.clone()).await;

        // Assert
        assert_matches!(result, Err(ContactSubmitError::Other(_)));
    }
}
