use async_trait::async_trait;
use thiserror::Error;
use tracing::{debug, instrument, trace};

/// Failures of a single document retrieval.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum SourceError {
    /// The server answered with a non-success status
    #[error("HTTP status {0}")]
    Status(u16),

    /// The request could not be completed or the body could not be read
    #[error("{0}")]
    Transport(String),
}

/// Retrieves the raw body of a forecast document.
///
/// Implementations perform exactly one request per call, with no retry.
#[async_trait]
pub trait ForecastSource: Send + Sync {
    async fn fetch(&self, url: &str) -> Result<String, SourceError>;
}

#[async_trait]
impl ForecastSource for Box<dyn ForecastSource> {
    async fn fetch(&self, url: &str) -> Result<String, SourceError> {
        (**self).fetch(url).await
    }
}

/// Fetches documents from the provider over HTTP.
#[derive(Debug, Clone, Default)]
pub struct HttpForecastSource {
    client: reqwest::Client,
}

impl HttpForecastSource {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl ForecastSource for HttpForecastSource {
    #[instrument(skip(self))]
    async fn fetch(&self, url: &str) -> Result<String, SourceError> {
        trace!("Sending GET request");
        let response = self
            .client
            .get(url)
            .send()
            .await
            .map_err(|e| SourceError::Transport(e.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            debug!("Provider answered with status {}", status);
            return Err(SourceError::Status(status.as_u16()));
        }

        let body = response
            .text()
            .await
            .map_err(|e| SourceError::Transport(e.to_string()))?;
        debug!("Received {} bytes", body.len());
        Ok(body)
    }
}
