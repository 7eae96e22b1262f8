use std::fs;
use std::io;
use std::path::{Path, PathBuf};
use std::sync::Arc;
use std::time::Duration;

use catalog_core::{StaleResponsePolicy, DEFAULT_TRANSITION_DELAY};
use catalog_engine::{FetchSettings, FileProductSource, ProductSource, ReqwestProductSource};
use catalog_logging::LogSettings;
use serde::Deserialize;
use thiserror::Error;

pub(crate) const CONFIG_ENV: &str = "CATALOG_CONFIG";
const DEFAULT_CONFIG_FILE: &str = "./catalog.ron";

#[derive(Debug, Error)]
pub(crate) enum ConfigError {
    #[error("failed to read config: {0}")]
    Read(#[from] io::Error),
    #[error("failed to parse config: {0}")]
    Parse(#[from] ron::error::SpannedError),
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub(crate) enum SourceConfig {
    Http(String),
    File(PathBuf),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
pub(crate) enum StaleResponses {
    #[default]
    DiscardStale,
    LastWriteWins,
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub(crate) struct AppConfig {
    pub source: SourceConfig,
    pub category: Option<String>,
    pub connect_timeout_ms: u64,
    pub request_timeout_ms: u64,
    pub max_bytes: u64,
    pub transition_delay_ms: u64,
    pub stale_responses: StaleResponses,
    pub location_file: PathBuf,
    pub log: LogSettings,
}

impl Default for AppConfig {
    fn default() -> Self {
        let fetch = FetchSettings::default();
        Self {
            source: SourceConfig::Http("http://localhost:3000/api/products.json".to_string()),
            category: fetch.category,
            connect_timeout_ms: fetch.connect_timeout.as_millis() as u64,
            request_timeout_ms: fetch.request_timeout.as_millis() as u64,
            max_bytes: fetch.max_bytes,
            transition_delay_ms: DEFAULT_TRANSITION_DELAY.as_millis() as u64,
            stale_responses: StaleResponses::default(),
            location_file: PathBuf::from("./.catalog_location"),
            log: LogSettings::default(),
        }
    }
}

impl AppConfig {
    pub(crate) fn fetch_settings(&self) -> FetchSettings {
        FetchSettings {
            connect_timeout: Duration::from_millis(self.connect_timeout_ms),
            request_timeout: Duration::from_millis(self.request_timeout_ms),
            max_bytes: self.max_bytes,
            category: self.category.clone(),
            ..FetchSettings::default()
        }
    }

    pub(crate) fn product_source(&self) -> Arc<dyn ProductSource> {
        match &self.source {
            SourceConfig::Http(endpoint) => Arc::new(ReqwestProductSource::new(
                endpoint.clone(),
                self.fetch_settings(),
            )),
            SourceConfig::File(path) => {
                Arc::new(FileProductSource::new(path.clone(), self.category.clone()))
            }
        }
    }

    pub(crate) fn transition_delay(&self) -> Duration {
        Duration::from_millis(self.transition_delay_ms)
    }

    pub(crate) fn stale_policy(&self) -> StaleResponsePolicy {
        match self.stale_responses {
            StaleResponses::DiscardStale => StaleResponsePolicy::DiscardStale,
            StaleResponses::LastWriteWins => StaleResponsePolicy::LastWriteWins,
        }
    }
}

pub(crate) fn config_path() -> PathBuf {
    std::env::var_os(CONFIG_ENV)
        .map(PathBuf::from)
        .unwrap_or_else(|| PathBuf::from(DEFAULT_CONFIG_FILE))
}

/// A missing file is not an error; it yields the defaults.
pub(crate) fn load_config(path: &Path) -> Result<AppConfig, ConfigError> {
    let content = match fs::read_to_string(path) {
        Ok(text) => text,
        Err(err) if err.kind() == io::ErrorKind::NotFound => return Ok(AppConfig::default()),
        Err(err) => return Err(err.into()),
    };
    Ok(ron::from_str(&content)?)
}
