use std::{collections::HashMap, sync::Arc};

use anyhow::Context;
use portfolio_models::contact::{ContactForm, ContactMessage, ContactMessageId};
use portfolio_persistence_contracts::contact::{ContactMessageRepository, ContactRepoError};
use portfolio_shared_contracts::{id::IdService, time::TimeService};
use tokio::sync::Mutex;
use tracing::{info, warn};

pub use journal::JournalConfig;
use journal::Journal;

mod journal;

/// Process-memory message store.
///
/// Without a journal, everything is lost when the process exits. With a
/// journal, every message is appended to a JSON-lines file before it
/// becomes visible and the file is replayed on [`open`](Self::open).
#[derive(Debug, Clone)]
pub struct MemoryContactMessageRepository<Id, Time> {
    id: Id,
    time: Time,
    state: Arc<Mutex<State>>,
}

#[derive(Debug, Default)]
struct State {
    messages: Vec<ContactMessage>,
    index: HashMap<ContactMessageId, usize>,
    journal: Option<Journal>,
}

impl State {
    fn push(&mut self, message: ContactMessage) {
        self.index.insert(message.id, self.messages.len());
        self.messages.push(message);
    }
}

impl<Id, Time> MemoryContactMessageRepository<Id, Time> {
    /// Creates an empty store without durability.
    pub fn new(id: Id, time: Time) -> Self {
        Self {
            id,
            time,
            state: Default::default(),
        }
    }

    /// Creates a store backed by the journal at `config.path`, loading all
    /// messages it already contains.
    pub async fn open(id: Id, time: Time, config: JournalConfig) -> anyhow::Result<Self> {
        let (journal, messages) = Journal::open(config).await?;

        let mut state = State::default();
        for message in messages {
            if state.index.contains_key(&message.id) {
                anyhow::bail!(
                    "Journal at {} contains message {} more than once",
                    journal.path().display(),
                    message.id
                );
            }
            state.push(message);
        }

        info!(
            path = %journal.path().display(),
            messages = state.messages.len(),
            "Loaded contact message journal"
        );

        state.journal = Some(journal);

        Ok(Self {
            id,
            time,
            state: Arc::new(Mutex::new(state)),
        })
    }
}

impl<Id, Time> ContactMessageRepository for MemoryContactMessageRepository<Id, Time>
where
    Id: IdService,
    Time: TimeService,
{
    #[tracing::instrument(skip_all)]
    async fn create(&self, form: ContactForm) -> Result<ContactMessage, ContactRepoError> {
        // held until the message is appended, so id assignment and the write
        // are a single step for concurrent callers
        let mut state = self.state.lock().await;

        let id = loop {
            let id = self.id.generate::<ContactMessageId>();
            if !state.index.contains_key(&id) {
                break id;
            }
            warn!(%id, "generated id is already taken, retrying");
        };

        let message = ContactMessage::new(id, form, self.time.now());

        if let Some(journal) = state.journal.as_mut() {
            journal.append(&message).await?;
        }

        state.push(message.clone());

        Ok(message)
    }

    async fn get(&self, id: ContactMessageId) -> anyhow::Result<Option<ContactMessage>> {
        let state = self.state.lock().await;
        Ok(state
            .index
            .get(&id)
            .map(|&idx| state.messages[idx].clone()))
    }

    async fn list(&self) -> anyhow::Result<Vec<ContactMessage>> {
        Ok(self.state.lock().await.messages.clone())
    }

    async fn count(&self) -> anyhow::Result<u64> {
        let len = self.state.lock().await.messages.len();
        u64::try_from(len).context("Message count does not fit into u64")
    }

    async fn ping(&self) -> anyhow::Result<()> {
        match self.state.lock().await.journal.as_ref() {
            Some(journal) => journal.ping().await,
            None => Ok(()),
        }
    }
}
