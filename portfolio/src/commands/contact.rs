use clap::Args;
use portfolio_config::Config;
use portfolio_models::contact::{
    form::{ContactFormErrors, ContactMessageInput},
    ContactMessageId,
};
use reqwest::StatusCode;
use serde::Deserialize;
use tracing::warn;
use url::Url;

#[derive(Debug, Args)]
pub struct ContactCommand {
    /// Your name
    #[arg(long)]
    name: String,
    /// Address to reply to
    #[arg(long)]
    email: String,
    /// The message itself
    #[arg(long)]
    message: String,
    /// Base url of the server [default: client.url from the config]
    #[arg(long)]
    url: Option<Url>,
}

impl ContactCommand {
    pub async fn invoke(self, config: Config) -> anyhow::Result<()> {
        let url = self.url.unwrap_or(config.client.url);
        let input = ContactMessageInput::new(self.name, self.email, self.message);

        match send_message(&reqwest::Client::new(), &url, &input).await {
            Ok(id) => {
                println!("Message received successfully (id: {id})");
                Ok(())
            }
            Err(ContactSendError::Invalid(errors)) => {
                for violation in errors.violations() {
                    eprintln!("- {}", violation.message);
                }
                anyhow::bail!("Please correct the fields above and try again.")
            }
            Err(ContactSendError::Failed(err)) => {
                warn!("Failed to send contact message: {err:#}");
                anyhow::bail!("Could not send your message, please try again later.")
            }
        }
    }
}

#[derive(Debug)]
pub enum ContactSendError {
    /// Rejected locally, nothing was sent.
    Invalid(ContactFormErrors),
    Failed(anyhow::Error),
}

#[derive(Deserialize)]
struct Created {
    id: ContactMessageId,
}

/// Validates `input` with the same rules the server applies and submits it to
/// the server at `base_url`.
pub async fn send_message(
    client: &reqwest::Client,
    base_url: &Url,
    input: &ContactMessageInput,
) -> Result<ContactMessageId, ContactSendError> {
    let form = input.validate().map_err(ContactSendError::Invalid)?;

    let send = async {
        let url = base_url.join("api/contact")?;
        let response = client.post(url).json(&form).send().await?;

        let status = response.status();
        if status != StatusCode::CREATED {
            let body = response.text().await.unwrap_or_default();
            anyhow::bail!("Server responded with {status}: {body}");
        }

        let Created { id } = response.json().await?;
        Ok::<_, anyhow::Error>(id)
    };

    send.await.map_err(ContactSendError::Failed)
}
