use anyhow::{Result, anyhow};
use compute::{DynForecastRenderer, ForecastRenderer, ForecastSource, HttpForecastSource, TimestampStyle};
use std::sync::Arc;
use tracing::{debug, info};

use crate::schemas::AppState;

/// Settings resolved from CLI arguments, the environment and `.env`.
#[derive(Debug, Clone)]
pub struct AppConfig {
    /// Address prefix of the provider's forecast documents
    pub base_url: String,
    /// Presentation of provider timestamps
    pub timestamps: TimestampStyle,
}

impl AppConfig {
    pub fn new(base_url: &str, timestamps: &str) -> Result<Self> {
        let timestamps = timestamps.parse::<TimestampStyle>().map_err(|e| anyhow!(e))?;
        let base_url = if base_url.ends_with('/') {
            base_url.to_string()
        } else {
            format!("{}/", base_url)
        };
        Ok(Self { base_url, timestamps })
    }

    /// Builds the renderer over the provider's HTTP endpoint.
    pub fn renderer(&self) -> DynForecastRenderer {
        self.renderer_with_source(Box::new(HttpForecastSource::new()))
    }

    pub fn renderer_with_source(&self, source: Box<dyn ForecastSource>) -> DynForecastRenderer {
        ForecastRenderer::new(source, self.base_url.clone(), self.timestamps)
    }
}

/// Initialize application state
pub fn initialize_app_state(config: &AppConfig) -> AppState {
    info!("Forecast documents are fetched from {}", config.base_url);
    debug!("Timestamp style: {:?}", config.timestamps);
    AppState {
        renderer: Arc::new(config.renderer()),
    }
}
