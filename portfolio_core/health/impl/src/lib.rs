use std::{sync::Arc, time::Duration};

use chrono::{DateTime, Utc};
use portfolio_core_health_contracts::{HealthFeatureService, HealthStatus};
use portfolio_core_resume_contracts::ResumeFeatureService;
use portfolio_persistence_contracts::contact::ContactMessageRepository;
use portfolio_shared_contracts::time::TimeService;
use tokio::sync::RwLock;
use tracing::{error, warn};

#[derive(Debug, Clone)]
pub struct HealthFeatureServiceImpl<Time, ContactRepo, Resume> {
    time: Time,
    contact_repo: ContactRepo,
    resume: Resume,
    config: HealthFeatureConfig,
    state: Arc<State>,
}

#[derive(Debug, Clone)]
pub struct HealthFeatureConfig {
    pub cache_ttl: Duration,
}

#[derive(Debug, Default)]
struct State {
    cache: RwLock<Option<CachedStatus>>,
}

#[derive(Debug)]
struct CachedStatus {
    status: HealthStatus,
    timestamp: DateTime<Utc>,
}

impl<Time, ContactRepo, Resume> HealthFeatureServiceImpl<Time, ContactRepo, Resume> {
    pub fn new(
        time: Time,
        contact_repo: ContactRepo,
        resume: Resume,
        config: HealthFeatureConfig,
    ) -> Self {
        Self {
            time,
            contact_repo,
            resume,
            config,
            state: Default::default(),
        }
    }
}

impl<Time, ContactRepo, Resume> HealthFeatureService
    for HealthFeatureServiceImpl<Time, ContactRepo, Resume>
where
    Time: TimeService,
    ContactRepo: ContactMessageRepository,
    Resume: ResumeFeatureService,
{
    async fn get_status(&self) -> HealthStatus {
        let now = self.time.now();
        let cache_guard = self.state.cache.read().await;
        if let Some(cached) = cache_guard
            .as_ref()
            .filter(|c| now < c.timestamp + self.config.cache_ttl)
        {
            return cached.status;
        }
        drop(cache_guard);

        let mut cache_guard = self.state.cache.write().await;
        if let Some(cached) = cache_guard
            .as_ref()
            .filter(|c| now < c.timestamp + self.config.cache_ttl)
        {
            return cached.status;
        }

        let store = self
            .contact_repo
            .ping()
            .await
            .inspect_err(|err| error!("Failed to ping message store: {err:#}"))
            .is_ok();

        let resume = self.resume.exists().await;
        if !resume {
            warn!("Resume document is missing");
        }

        let status = HealthStatus { store, resume };

        cache_guard
            .insert(CachedStatus {
                status,
                timestamp: now,
            })
            .status
    }
}

#[cfg(test)]
mod tests {
    use portfolio_core_resume_contracts::MockResumeFeatureService;
    use portfolio_demo::contact::CREATED_AT_1;
    use portfolio_persistence_contracts::contact::MockContactMessageRepository;
    use portfolio_shared_contracts::time::MockTimeService;

    use super::*;

    fn config() -> HealthFeatureConfig {
        HealthFeatureConfig {
            cache_ttl: Duration::from_secs(10),
        }
    }

    #[tokio::test]
    async fn healthy() {
        // Arrange
        let time = MockTimeService::new().with_now(*CREATED_AT_1);
        let contact_repo = MockContactMessageRepository::new().with_ping(true);
        let resume = MockResumeFeatureService::new().with_exists(true);

        let sut = HealthFeatureServiceImpl::new(time, contact_repo, resume, config());

        // Act
        let result = sut.get_status().await;

        // Assert
        assert_eq!(
            result,
            HealthStatus {
                store: true,
                resume: true
            }
        );
        assert!(result.is_ok());
    }

    #[tokio::test]
    async fn store_down() {
        // Arrange
        let time = MockTimeService::new().with_now(*CREATED_AT_1);
        let contact_repo = MockContactMessageRepository::new().with_ping(false);
        let resume = MockResumeFeatureService::new().with_exists(false);

        let sut = HealthFeatureServiceImpl::new(time, contact_repo, resume, config());

        // Act
        let result = sut.get_status().await;

        // Assert
        assert_eq!(
            result,
            HealthStatus {
                store: false,
                resume: false
            }
        );
        assert!(!result.is_ok());
    }

    #[tokio::test]
    async fn cached() {
        // Arrange
        let mut time = MockTimeService::new();
        time.expect_now().times(2).return_const(*CREATED_AT_1);
        let contact_repo = MockContactMessageRepository::new().with_ping(true);
        let resume = MockResumeFeatureService::new().with_exists(false);

        let sut = HealthFeatureServiceImpl::new(time, contact_repo, resume, config());

        // Act
        let first = sut.get_status().await;
        let second = sut.get_status().await;

        // Assert
        assert_eq!(first, second);
        assert!(first.store);
        assert!(!first.resume);
    }
}
