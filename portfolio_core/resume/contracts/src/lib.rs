use std::future::Future;

use portfolio_models::resume::Resume;
use thiserror::Error;

#[cfg_attr(feature = "mock", mockall::automock)]
pub trait ResumeFeatureService: Send + Sync + 'static {
    /// Returns the résumé document.
    fn get_resume(&self) -> impl Future<Output = Result<Resume, ResumeGetError>> + Send;

    /// Returns whether the résumé document is available.
    fn exists(&self) -> impl Future<Output = bool> + Send;
}

#[derive(Debug, Error)]
pub enum ResumeGetError {
    #[error("The resume could not be found.")]
    NotFound,
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

#[cfg(feature = "mock")]
impl MockResumeFeatureService {
    pub fn with_get_resume(mut self, result: Result<Resume, ResumeGetError>) -> Self {
        self.expect_get_resume()
            .once()
            .return_once(|| Box::pin(std::future::ready(result)));
        self
    }

    pub fn with_exists(mut self, exists: bool) -> Self {
        self.expect_exists()
            .once()
            .return_once(move || Box::pin(std::future::ready(exists)));
        self
    }
}
