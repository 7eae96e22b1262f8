use std::path::PathBuf;
use std::time::Duration;

use futures_util::StreamExt;
use reqwest::header::CONTENT_TYPE;
use url::Url;

use crate::decode::decode_products;
use crate::{FailureKind, FetchError, ProductRecord};

#[derive(Debug, Clone)]
pub struct FetchSettings {
    pub connect_timeout: Duration,
    pub request_timeout: Duration,
    pub max_bytes: u64,
    pub allowed_content_types: Vec<String>,
    /// Keep only records of this category; `None` keeps everything.
    pub category: Option<String>,
}

impl Default for FetchSettings {
    fn default() -> Self {
        Self {
            connect_timeout: Duration::from_secs(10),
            request_timeout: Duration::from_secs(30),
            max_bytes: 5 * 1024 * 1024,
            allowed_content_types: vec![
                "application/json".to_string(),
                "text/plain".to_string(),
            ],
            category: Some("accessories".to_string()),
        }
    }
}

/// Loads the product list for the page. Takes no arguments; every call is a full reload.
#[async_trait::async_trait]
pub trait ProductSource: Send + Sync {
    async fn fetch_products(&self) -> Result<Vec<ProductRecord>, FetchError>;
}

#[derive(Debug, Clone)]
pub struct ReqwestProductSource {
    endpoint: String,
    settings: FetchSettings,
}

impl ReqwestProductSource {
    pub fn new(endpoint: impl Into<String>, settings: FetchSettings) -> Self {
        Self {
            endpoint: endpoint.into(),
            settings,
        }
    }

    fn build_client(&self) -> Result<reqwest::Client, FetchError> {
        reqwest::Client::builder()
            .connect_timeout(self.settings.connect_timeout)
            .timeout(self.settings.request_timeout)
            .build()
            .map_err(|err| FetchError::new(FailureKind::Network, err.to_string()))
    }

    fn is_content_type_allowed(&self, content_type: &str) -> bool {
        let ct = content_type.split(';').next().unwrap_or(content_type).trim();
        self.settings
            .allowed_content_types
            .iter()
            .any(|allowed| allowed.eq_ignore_ascii_case(ct))
    }

    fn too_large(&self, actual: u64) -> FetchError {
        FetchError::new(
            FailureKind::TooLarge {
                max_bytes: self.settings.max_bytes,
                actual: Some(actual),
            },
            "response too large",
        )
    }
}

#[async_trait::async_trait]
impl ProductSource for ReqwestProductSource {
    async fn fetch_products(&self) -> Result<Vec<ProductRecord>, FetchError> {
        let parsed = Url::parse(&self.endpoint)
            .map_err(|err| FetchError::new(FailureKind::InvalidUrl, err.to_string()))?;
        let client = self.build_client()?;

        let response = client
            .get(parsed)
            .send()
            .await
            .map_err(map_reqwest_error)?;

        let status = response.status();
        if !status.is_success() {
            return Err(FetchError::new(
                FailureKind::HttpStatus(status.as_u16()),
                status.to_string(),
            ));
        }

        if let Some(content_len) = response.content_length() {
            if content_len > self.settings.max_bytes {
                return Err(self.too_large(content_len));
            }
        }

        if let Some(ct) = response
            .headers()
            .get(CONTENT_TYPE)
            .and_then(|value| value.to_str().ok())
        {
            if !self.is_content_type_allowed(ct) {
                return Err(FetchError::new(
                    FailureKind::UnsupportedContentType {
                        content_type: ct.to_string(),
                    },
                    "unsupported content type",
                ));
            }
        }

        let mut bytes = Vec::new();
        let mut stream = response.bytes_stream();
        while let Some(chunk) = stream.next().await {
            let chunk = chunk.map_err(map_reqwest_error)?;
            let next_len = bytes.len() as u64 + chunk.len() as u64;
            if next_len > self.settings.max_bytes {
                return Err(self.too_large(next_len));
            }
            bytes.extend_from_slice(&chunk);
        }

        decode_products(&bytes, self.settings.category.as_deref())
    }
}

/// Reads the product list from a JSON file on disk.
#[derive(Debug, Clone)]
pub struct FileProductSource {
    path: PathBuf,
    category: Option<String>,
}

impl FileProductSource {
    pub fn new(path: impl Into<PathBuf>, category: Option<String>) -> Self {
        Self {
            path: path.into(),
            category,
        }
    }
}

#[async_trait::async_trait]
impl ProductSource for FileProductSource {
    async fn fetch_products(&self) -> Result<Vec<ProductRecord>, FetchError> {
        let bytes = tokio::fs::read(&self.path).await.map_err(|err| {
            FetchError::new(
                FailureKind::Io,
                format!("{}: {}", self.path.display(), err),
            )
        })?;
        decode_products(&bytes, self.category.as_deref())
    }
}

fn map_reqwest_error(err: reqwest::Error) -> FetchError {
    if err.is_timeout() {
        return FetchError::new(FailureKind::Timeout, err.to_string());
    }
    FetchError::new(FailureKind::Network, err.to_string())
}
