//! Wiring of the concrete service implementations.

use std::sync::Arc;

use portfolio_config::{Config, StoreConfig};
use portfolio_core_health_impl::HealthFeatureConfig;
use portfolio_core_resume_impl::ResumeFeatureConfig;
use portfolio_persistence_memory::JournalConfig;
use tracing::warn;
use types::{ContactFeature, ContactRepo, HealthFeature, Id, ResumeFeature, RestServer, Time};

pub mod types;

/// Opens the message store, replaying the journal if one is configured.
pub async fn contact_repo(config: &StoreConfig) -> anyhow::Result<ContactRepo> {
    match &config.journal {
        Some(path) => {
            ContactRepo::open(
                Id::default(),
                Time::default(),
                JournalConfig {
                    path: path.clone(),
                    write_timeout: config.write_timeout.into(),
                },
            )
            .await
        }
        None => {
            warn!("No journal configured, contact messages are lost on restart");
            Ok(ContactRepo::new(Id::default(), Time::default()))
        }
    }
}

pub fn rest_server(config: &Config, contact_repo: ContactRepo) -> RestServer {
    let resume = ResumeFeature::new(ResumeFeatureConfig {
        path: Arc::new(config.resume.path.clone()),
        filename: config.resume.filename.as_str().into(),
    });

    let health = HealthFeature::new(
        Time::default(),
        contact_repo.clone(),
        resume.clone(),
        HealthFeatureConfig {
            cache_ttl: config.health.cache_ttl.into(),
        },
    );

    let contact = ContactFeature::new(contact_repo);

    RestServer::new(health, contact, resume)
}
