//! Where the source documents come from.
//!
//! Supports:
//! - Local files (the static assets directory, by default)
//! - HTTP(S) URLs
//! - In-memory bytes (bundled data, tests)

use std::fmt;
use std::path::PathBuf;
use std::str::FromStr;

use async_trait::async_trait;
use reqwest::Client;
use serde::{Deserialize, Serialize};
use tracing::debug;
use url::Url;

use super::LoadError;

/// Configured location of a source document.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub enum DataSource {
    File(PathBuf),
    Url(Url),
}

impl DataSource {
    /// Build the fetcher for this location. HTTP sources share `client`.
    pub fn into_source(self, client: &Client) -> Box<dyn TableSource> {
        match self {
            DataSource::File(path) => Box::new(FileSource::new(path)),
            DataSource::Url(url) => Box::new(HttpSource::new(client.clone(), url)),
        }
    }

    pub fn is_empty(&self) -> bool {
        match self {
            DataSource::File(path) => path.as_os_str().is_empty(),
            DataSource::Url(_) => false,
        }
    }
}

impl FromStr for DataSource {
    type Err = url::ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        let lower = s.to_lowercase();
        if lower.starts_with("http://") || lower.starts_with("https://") {
            Ok(DataSource::Url(Url::parse(s)?))
        } else {
            Ok(DataSource::File(PathBuf::from(s)))
        }
    }
}

impl TryFrom<String> for DataSource {
    type Error = url::ParseError;

    fn try_from(s: String) -> Result<Self, Self::Error> {
        s.parse()
    }
}

impl From<DataSource> for String {
    fn from(source: DataSource) -> Self {
        source.to_string()
    }
}

impl fmt::Display for DataSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DataSource::File(path) => write!(f, "{}", path.display()),
            DataSource::Url(url) => write!(f, "{}", url),
        }
    }
}

/// Something that can produce the raw bytes of one source document.
#[async_trait]
pub trait TableSource: Send + Sync {
    /// Retrieve the whole document.
    async fn fetch(&self) -> Result<Vec<u8>, LoadError>;

    /// Human-readable location, for logs.
    fn describe(&self) -> String;
}

/// Reads a document from the local filesystem.
pub struct FileSource {
    path: PathBuf,
}

impl FileSource {
    pub fn new(path: PathBuf) -> Self {
        Self { path }
    }
}

#[async_trait]
impl TableSource for FileSource {
    async fn fetch(&self) -> Result<Vec<u8>, LoadError> {
        debug!("Reading {:?}", self.path);
        Ok(tokio::fs::read(&self.path).await?)
    }

    fn describe(&self) -> String {
        self.path.display().to_string()
    }
}

/// Fetches a document over HTTP.
pub struct HttpSource {
    client: Client,
    url: Url,
}

impl HttpSource {
    pub fn new(client: Client, url: Url) -> Self {
        Self { client, url }
    }
}

#[async_trait]
impl TableSource for HttpSource {
    async fn fetch(&self) -> Result<Vec<u8>, LoadError> {
        debug!("Fetching {}", self.url);
        let response = self.client.get(self.url.as_str()).send().await?;

        let status = response.status();
        if !status.is_success() {
            return Err(LoadError::HttpStatus {
                url: self.url.to_string(),
                status: status.as_u16(),
            });
        }

        Ok(response.bytes().await?.to_vec())
    }

    fn describe(&self) -> String {
        self.url.to_string()
    }
}

/// A document already held in memory.
pub struct MemorySource {
    bytes: Vec<u8>,
}

impl MemorySource {
    pub fn new(bytes: impl Into<Vec<u8>>) -> Self {
        Self {
            bytes: bytes.into(),
        }
    }
}

#[async_trait]
impl TableSource for MemorySource {
    async fn fetch(&self) -> Result<Vec<u8>, LoadError> {
        Ok(self.bytes.clone())
    }

    fn describe(&self) -> String {
        format!("<memory, {} bytes>", self.bytes.len())
    }
}
