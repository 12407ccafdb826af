use std::{
    net::SocketAddr,
    path::{Path, PathBuf},
};

use anyhow::Context;
use config::{Environment, File, FileFormat};
use serde::Deserialize;
use url::Url;

pub use duration::Duration;

mod duration;

/// Defaults compiled into every binary.
pub const DEFAULT_CONFIG: &str = include_str!("../../config.toml");

/// Colon separated list of additional config files, applied in order.
pub const CONFIG_PATHS_ENV: &str = "PORTFOLIO_CONFIG";

/// Prefix of environment variables overriding single values, e.g.
/// `PORTFOLIO__HTTP__ADDRESS=0.0.0.0:8000`.
pub const ENV_PREFIX: &str = "PORTFOLIO";

/// Loads the default config, the files listed in [`CONFIG_PATHS_ENV`] and
/// finally any `PORTFOLIO__*` environment variables.
pub fn load() -> anyhow::Result<Config> {
    let paths = std::env::var_os(CONFIG_PATHS_ENV)
        .map(|paths| std::env::split_paths(&paths).collect::<Vec<_>>())
        .unwrap_or_default();

    builder(paths.as_slice(), &[])?
        .add_source(
            Environment::with_prefix(ENV_PREFIX)
                .prefix_separator("__")
                .separator("__"),
        )
        .build()?
        .try_deserialize::<Config>()
        .context("Failed to load config")?
        .validated()
}

/// Loads the default config, then `paths`, then the inline TOML `overrides`.
/// The environment is not consulted.
pub fn load_from(paths: &[impl AsRef<Path>], overrides: &[&str]) -> anyhow::Result<Config> {
    builder(paths, overrides)?
        .build()?
        .try_deserialize::<Config>()
        .context("Failed to load config")?
        .validated()
}

fn builder(
    paths: &[impl AsRef<Path>],
    overrides: &[&str],
) -> anyhow::Result<config::ConfigBuilder<config::builder::DefaultState>> {
    let builder =
        config::Config::builder().add_source(File::from_str(DEFAULT_CONFIG, FileFormat::Toml));

    let builder = paths.iter().try_fold(builder, |builder, path| {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file at {}", path.display()))?;
        let source = File::from_str(&content, FileFormat::Toml);
        anyhow::Ok(builder.add_source(source))
    })?;

    Ok(overrides.iter().fold(builder, |builder, content| {
        builder.add_source(File::from_str(content, FileFormat::Toml))
    }))
}

#[derive(Debug, Deserialize)]
pub struct Config {
    pub http: HttpConfig,
    pub store: StoreConfig,
    pub resume: ResumeConfig,
    pub health: HealthConfig,
    pub client: ClientConfig,
}

impl Config {
    fn validated(self) -> anyhow::Result<Self> {
        anyhow::ensure!(
            is_valid_filename(&self.resume.filename),
            "Invalid resume.filename {:?}: must be non-empty printable ASCII without quotes, \
             backslashes or slashes",
            self.resume.filename
        );
        Ok(self)
    }
}

/// Download file names end up quoted in a `Content-Disposition` header.
fn is_valid_filename(filename: &str) -> bool {
    !filename.is_empty()
        && filename
            .chars()
            .all(|c| (c.is_ascii_graphic() || c == ' ') && !matches!(c, '"' | '\\' | '/'))
}

#[derive(Debug, Deserialize)]
pub struct HttpConfig {
    pub address: SocketAddr,
}

#[derive(Debug, Deserialize)]
pub struct StoreConfig {
    pub journal: Option<PathBuf>,
    pub write_timeout: Duration,
}

#[derive(Debug, Deserialize)]
pub struct ResumeConfig {
    pub path: PathBuf,
    pub filename: String,
}

#[derive(Debug, Deserialize)]
pub struct HealthConfig {
    pub cache_ttl: Duration,
}

#[derive(Debug, Deserialize)]
pub struct ClientConfig {
    pub url: Url,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn load_default_config() {
        let config = load_from(&[] as &[PathBuf], &[]).unwrap();

        assert_eq!(config.http.address, "127.0.0.1:8000".parse::<SocketAddr>().unwrap());
        assert_eq!(config.store.journal, None);
        assert_eq!(
            *config.store.write_timeout,
            std::time::Duration::from_secs(5)
        );
        assert_eq!(config.resume.filename, "Resume.pdf");
    }

    #[test]
    fn overrides() {
        let config = load_from(
            &[] as &[PathBuf],
            &[
                "store.journal = \"/var/lib/portfolio/messages.jsonl\"",
                "http.address = \"0.0.0.0:80\"\nhealth.cache_ttl = \"1m 30s\"",
            ],
        )
        .unwrap();

        assert_eq!(
            config.store.journal.as_deref(),
            Some(Path::new("/var/lib/portfolio/messages.jsonl"))
        );
        assert_eq!(config.http.address.port(), 80);
        assert_eq!(config.health.cache_ttl.as_secs(), 90);
    }

    #[test]
    fn files_are_layered() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("local.toml");
        std::fs::write(&path, "[resume]\nfilename = \"Jane_Doe.pdf\"\n").unwrap();

        let config = load_from(&[&path], &[]).unwrap();

        assert_eq!(config.resume.filename, "Jane_Doe.pdf");
        assert_eq!(config.resume.path, Path::new("attached_assets/resume.pdf"));
    }

    #[test]
    fn resume_filename() {
        for (filename, ok) in [
            ("Resume.pdf", true),
            ("Jane Doe.pdf", true),
            ("", false),
            ("Jane \"Doe\".pdf", false),
            ("../resume.pdf", false),
            ("Lebenslauf_Müller.pdf", false),
        ] {
            let filename = format!("resume.filename = {filename:?}");
            let result = load_from(&[] as &[PathBuf], &[filename.as_str()]);
            assert_eq!(result.is_ok(), ok, "{filename}");
        }
    }

    #[test]
    fn missing_file() {
        let result = load_from(&[Path::new("/nonexistent/portfolio.toml")], &[]);
        assert!(result.is_err());
    }
}
