use model::{ForecastDocument, ForecastHorizon};
use std::fmt;
use tracing::{debug, info, instrument, trace, warn};

use crate::error::{RenderError, RenderResult};
use crate::extract::{TimestampStyle, extract};
use crate::source::{ForecastSource, SourceError};

/// Address prefix of the provider's forecast documents.
pub const DEFAULT_BASE_URL: &str = "https://www.jma.go.jp/bosai/forecast/data/forecast/";

/// Turns the current control state into a forecast view.
///
/// Each call is independent: it performs at most one retrieval, keeps
/// nothing afterwards, and every failure comes back as a [`RenderError`].
pub struct ForecastRenderer<S> {
    source: S,
    base_url: String,
    timestamps: TimestampStyle,
}

/// Renderer over a source chosen at runtime.
pub type DynForecastRenderer = ForecastRenderer<Box<dyn ForecastSource>>;

impl<S> fmt::Debug for ForecastRenderer<S> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ForecastRenderer")
            .field("base_url", &self.base_url)
            .field("timestamps", &self.timestamps)
            .finish()
    }
}

impl<S: ForecastSource> ForecastRenderer<S> {
    pub fn new(source: S, base_url: impl Into<String>, timestamps: TimestampStyle) -> Self {
        Self {
            source,
            base_url: base_url.into(),
            timestamps,
        }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    pub fn timestamps(&self) -> TimestampStyle {
        self.timestamps
    }

    /// Retrieval address of a region's document.
    pub fn document_url(&self, region_code: &str) -> String {
        format!("{}{}.json", self.base_url, region_code)
    }

    /// Renders the forecast of `region_code` for `horizon`.
    ///
    /// An empty code is the placeholder selection and yields
    /// [`RenderError::NoSelection`] without any retrieval.
    #[instrument(skip(self))]
    pub async fn render(&self, region_code: &str, horizon: ForecastHorizon) -> RenderResult {
        let region_code = region_code.trim();
        if region_code.is_empty() {
            debug!("No region selected, skipping fetch");
            return Err(RenderError::NoSelection);
        }

        let url = self.document_url(region_code);
        info!("📡 {} からデータを取得中...", url);

        let body = self.source.fetch(&url).await.map_err(|e| match e {
            SourceError::Status(status) => {
                warn!("Fetching {} failed with HTTP status {}", url, status);
                RenderError::HttpFailure { status }
            }
            SourceError::Transport(message) => RenderError::processing(message),
        })?;

        trace!("Parsing document for region {}", region_code);
        let document = ForecastDocument::from_json(&body)?;
        let dataset = document.select(horizon)?;
        let view = extract(&dataset, self.timestamps);

        info!(
            "Rendered {} forecast for region {}: {} areas",
            horizon,
            region_code,
            view.areas.len()
        );
        Ok(view)
    }
}
