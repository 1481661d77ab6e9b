//! Blocking client that reads sources over HTTP(S) or from disk.

use super::ByteSource;
use crate::utils::config::{DEFAULT_FETCH_TIMEOUT, REMOTE_SCHEMES};
use crate::utils::error::FetchError;
use log::{debug, info};
use reqwest::blocking::Client;
use std::path::Path;
use std::time::Duration;

/// Source client for fetching company and travel collections
pub struct SourceClient {
    client: Client,
}

impl SourceClient {
    /// Create a new client with the default timeout
    pub fn new() -> Result<Self, FetchError> {
        Self::with_timeout(DEFAULT_FETCH_TIMEOUT)
    }

    /// Create a client with custom timeout
    pub fn with_timeout(timeout: Duration) -> Result<Self, FetchError> {
        let client = Client::builder()
            .timeout(timeout)
            .build()
            .map_err(FetchError::RequestFailed)?;

        Ok(Self { client })
    }

    /// GET a remote source and return its body
    fn fetch_remote(&self, url: &str) -> Result<Vec<u8>, FetchError> {
        info!("Fetching {}", url);

        let response = self
            .client
            .get(url)
            .send()
            .map_err(FetchError::RequestFailed)?;

        // Check HTTP status
        if !response.status().is_success() {
            let status = response.status().as_u16();
            return Err(FetchError::HttpStatus {
                source_name: url.to_string(),
                status,
                body: response.text().unwrap_or_default(),
            });
        }

        let body = response.bytes().map_err(FetchError::RequestFailed)?;
        debug!("Received {} bytes from {}", body.len(), url);

        Ok(body.to_vec())
    }
}

impl ByteSource for SourceClient {
    fn fetch(&self, name: &str) -> Result<Vec<u8>, FetchError> {
        let name = name.trim();

        if name.is_empty() {
            return Err(FetchError::InvalidSource("source name is empty".to_string()));
        }

        if is_remote(name) {
            self.fetch_remote(name)
        } else {
            read_local(Path::new(name))
        }
    }
}

/// Whether a source name should be fetched over HTTP
pub fn is_remote(name: &str) -> bool {
    let lower = name.to_ascii_lowercase();
    REMOTE_SCHEMES.iter().any(|scheme| lower.starts_with(scheme))
}

/// Read a local file source
fn read_local(path: &Path) -> Result<Vec<u8>, FetchError> {
    info!("Reading {}", path.display());

    std::fs::read(path).map_err(|source| FetchError::ReadFailed {
        path: path.to_path_buf(),
        source,
    })
}
