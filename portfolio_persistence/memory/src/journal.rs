use std::{
    path::{Path, PathBuf},
    time::Duration,
};

use anyhow::Context;
use portfolio_models::contact::ContactMessage;
use portfolio_persistence_contracts::contact::ContactRepoError;
use tokio::{
    fs::{File, OpenOptions},
    io::AsyncWriteExt,
};
use tracing::{error, trace};

#[derive(Debug, Clone)]
pub struct JournalConfig {
    pub path: PathBuf,
    /// Upper bound for appending and syncing a single message.
    pub write_timeout: Duration,
}

/// Append-only JSON-lines file with one message per line.
#[derive(Debug)]
pub(crate) struct Journal {
    file: File,
    /// Length of the file after the last complete line.
    len: u64,
    /// Set when an incomplete line could not be removed again. Appending
    /// after it would make the file unreadable on the next start.
    poisoned: bool,
    config: JournalConfig,
}

impl Journal {
    pub(crate) async fn open(config: JournalConfig) -> anyhow::Result<(Self, Vec<ContactMessage>)> {
        let path = &config.path;

        if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
            tokio::fs::create_dir_all(parent)
                .await
                .with_context(|| format!("Failed to create directory {}", parent.display()))?;
        }

        let messages = match tokio::fs::read_to_string(path).await {
            Ok(content) => parse(&content)
                .with_context(|| format!("Failed to load journal at {}", path.display()))?,
            Err(err) if err.kind() == std::io::ErrorKind::NotFound => Vec::new(),
            Err(err) => {
                return Err(anyhow::Error::new(err)
                    .context(format!("Failed to read journal at {}", path.display())))
            }
        };

        let file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(path)
            .await
            .with_context(|| format!("Failed to open journal at {}", path.display()))?;

        let len = file
            .metadata()
            .await
            .context("Failed to read journal metadata")?
            .len();

        Ok((
            Self {
                file,
                len,
                poisoned: false,
                config,
            },
            messages,
        ))
    }

    pub(crate) fn path(&self) -> &Path {
        &self.config.path
    }

    /// Appends `message` and waits until it has reached the disk.
    ///
    /// On failure the file is truncated back to its previous length, so a
    /// partially written line never precedes later entries. If that fails
    /// too, every later append is refused.
    pub(crate) async fn append(&mut self, message: &ContactMessage) -> Result<(), ContactRepoError> {
        if self.poisoned {
            return Err(self.poisoned_error().into());
        }

        let mut line =
            serde_json::to_vec(message).context("Failed to serialize contact message")?;
        line.push(b'\n');

        let file = &mut self.file;
        let write = async {
            file.write_all(&line).await?;
            file.flush().await?;
            file.sync_data().await
        };

        let result = match tokio::time::timeout(self.config.write_timeout, write).await {
            Ok(Ok(())) => {
                self.len += line.len() as u64;
                trace!(id = %message.id, "appended message to journal");
                return Ok(());
            }
            Ok(Err(err)) => Err(ContactRepoError::Other(anyhow::Error::new(err).context(
                format!("Failed to append to journal at {}", self.path().display()),
            ))),
            Err(_) => Err(ContactRepoError::Timeout),
        };

        if let Err(err) = self.file.set_len(self.len).await {
            error!(
                path = %self.path().display(),
                "Failed to roll back incomplete journal entry, refusing further writes: {err}"
            );
            self.poisoned = true;
        }

        result
    }

    /// Checks that the journal file is still present and writable.
    pub(crate) async fn ping(&self) -> anyhow::Result<()> {
        if self.poisoned {
            return Err(self.poisoned_error());
        }

        tokio::fs::metadata(self.path())
            .await
            .map(|_| ())
            .with_context(|| format!("Journal at {} is not accessible", self.path().display()))
    }

    fn poisoned_error(&self) -> anyhow::Error {
        anyhow::anyhow!(
            "Journal at {} ends with an incomplete entry that could not be removed",
            self.path().display()
        )
    }

    #[cfg(test)]
    pub(crate) fn replace_file(&mut self, file: File) {
        self.file = file;
    }
}

fn parse(content: &str) -> anyhow::Result<Vec<ContactMessage>> {
    content
        .lines()
        .enumerate()
        .filter(|(_, line)| !line.trim().is_empty())
        .map(|(idx, line)| {
            serde_json::from_str(line).with_context(|| format!("Invalid entry on line {}", idx + 1))
        })
        .collect()
}
