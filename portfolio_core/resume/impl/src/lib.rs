use std::{io::ErrorKind, path::PathBuf, sync::Arc};

use portfolio_core_resume_contracts::{ResumeFeatureService, ResumeGetError};
use portfolio_models::resume::Resume;

#[derive(Debug, Clone)]
pub struct ResumeFeatureServiceImpl {
    config: ResumeFeatureConfig,
}

#[derive(Debug, Clone)]
pub struct ResumeFeatureConfig {
    pub path: Arc<PathBuf>,
    /// File name suggested for the download.
    pub filename: Arc<str>,
}

impl ResumeFeatureServiceImpl {
    pub fn new(config: ResumeFeatureConfig) -> Self {
        Self { config }
    }
}

impl ResumeFeatureService for ResumeFeatureServiceImpl {
    #[tracing::instrument(skip(self), fields(path = %self.config.path.display()))]
    async fn get_resume(&self) -> Result<Resume, ResumeGetError> {
        let content = match tokio::fs::read(&*self.config.path).await {
            Ok(content) => content,
            Err(err) if err.kind() == ErrorKind::NotFound => return Err(ResumeGetError::NotFound),
            Err(err) => {
                return Err(anyhow::Error::new(err)
                    .context(format!(
                        "Failed to read resume at {}",
                        self.config.path.display()
                    ))
                    .into())
            }
        };

        Ok(Resume {
            filename: self.config.filename.to_string(),
            content,
        })
    }

    async fn exists(&self) -> bool {
        tokio::fs::metadata(&*self.config.path)
            .await
            .map(|meta| meta.is_file())
            .inspect_err(|err| tracing::debug!("resume is not accessible: {err}"))
            .unwrap_or(false)
    }
}

#[cfg(test)]
mod tests {
    use portfolio_utils::assert_matches;

    use super::*;

    fn sut(path: PathBuf) -> ResumeFeatureServiceImpl {
        ResumeFeatureServiceImpl::new(ResumeFeatureConfig {
            path: Arc::new(path),
            filename: "Jane_Doe_Resume.pdf".into(),
        })
    }

    #[tokio::test]
    async fn ok() {
        // Arrange
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("resume.pdf");
        std::fs::write(&path, b"%PDF-1.4 test").unwrap();

        let sut = sut(path);

        // Act
        let result = sut.get_resume().await;

        // Assert
        assert_eq!(
            result.unwrap(),
            Resume {
                filename: "Jane_Doe_Resume.pdf".into(),
                content: b"%PDF-1.4 test".to_vec(),
            }
        );
        assert!(sut.exists().await);
    }

    #[tokio::test]
    async fn not_found() {
        // Arrange
        let dir = tempfile::tempdir().unwrap();
        let sut = sut(dir.path().join("missing.pdf"));

        // Act
        let result = sut.get_resume().await;

        // Assert
        assert_matches!(result, Err(ResumeGetError::NotFound));
        assert!(!sut.exists().await);
    }

    #[tokio::test]
    async fn unreadable() {
        // a directory cannot be read as a file
        let dir = tempfile::tempdir().unwrap();
        let sut = sut(dir.path().to_owned());

        let result = sut.get_resume().await;

        assert_matches!(result, Err(ResumeGetError::Other(_)));
        assert!(!sut.exists().await);
    }
}
