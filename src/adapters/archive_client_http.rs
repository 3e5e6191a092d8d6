//! Installer archive download using reqwest.

use std::time::Duration;

use reqwest::blocking::Client;
use url::Url;

use crate::domain::{AppError, LauncherConfig};
use crate::ports::ArchiveDownloader;

/// HTTP transport for the SteamCMD archive.
///
/// One GET per call, no retries.
#[derive(Debug, Clone)]
pub struct HttpArchiveClient {
    client: Client,
}

impl HttpArchiveClient {
    pub fn new(config: &LauncherConfig) -> Result<Self, AppError> {
        let client = Client::builder()
            .timeout(Duration::from_secs(config.download_timeout_secs))
            .build()
            .map_err(|e| AppError::Network {
                url: config.installer_url.to_string(),
                details: format!("Failed to create HTTP client: {}", e),
            })?;

        Ok(Self { client })
    }
}

impl ArchiveDownloader for HttpArchiveClient {
    fn download(&self, url: &Url) -> Result<Vec<u8>, AppError> {
        let network_error =
            |details: String| AppError::Network { url: url.to_string(), details };

        let response = self
            .client
            .get(url.clone())
            .send()
            .map_err(|e| network_error(format!("HTTP request failed: {}", e)))?;

        let status = response.status();
        if !status.is_success() {
            return Err(network_error(format!("Server responded with {}", status)));
        }

        let body =
            response.bytes().map_err(|e| network_error(format!("Failed to read body: {}", e)))?;
        Ok(body.to_vec())
    }
}
