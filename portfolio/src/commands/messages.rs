use std::io::Write;

use anyhow::Context;
use clap::Subcommand;
use portfolio_config::Config;
use portfolio_models::contact::ContactMessage;
use portfolio_persistence_contracts::contact::ContactMessageRepository;

use crate::environment;

#[derive(Debug, Subcommand)]
pub enum MessagesCommand {
    /// Print all stored messages as JSON lines, oldest first
    #[command(aliases(["ls", "l"]))]
    List,
}

impl MessagesCommand {
    pub async fn invoke(self, config: Config) -> anyhow::Result<()> {
        match self {
            MessagesCommand::List => {
                let messages = list_messages(&config).await?;
                let mut stdout = std::io::stdout().lock();
                for message in messages {
                    serde_json::to_writer(&mut stdout, &message)?;
                    writeln!(stdout)?;
                }
            }
        }

        Ok(())
    }
}

async fn list_messages(config: &Config) -> anyhow::Result<Vec<ContactMessage>> {
    anyhow::ensure!(
        config.store.journal.is_some(),
        "No journal configured, messages only exist in the memory of the running server"
    );

    environment::contact_repo(&config.store)
        .await?
        .list()
        .await
        .context("Failed to list messages")
}
