use tracing::{debug, warn};

use crate::document::{ForecastDataset, ForecastDocument, TimeSeriesBlock};
use crate::error::{DocumentError, Result};
use crate::horizon::ForecastHorizon;

/// Publisher fields shared by both dataset shapes.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DatasetHeader<'a> {
    pub publishing_office: Option<&'a str>,
    pub report_datetime: Option<&'a str>,
}

impl<'a> DatasetHeader<'a> {
    fn of(dataset: &'a ForecastDataset) -> Self {
        Self {
            publishing_office: dataset.publishing_office.as_deref().filter(|s| !s.is_empty()),
            report_datetime: dataset.report_datetime.as_deref().filter(|s| !s.is_empty()),
        }
    }
}

/// Near-term dataset: block 0 holds weather, wind and wave per area.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ShortTermDataset<'a> {
    pub header: DatasetHeader<'a>,
    pub weather: &'a TimeSeriesBlock,
}

/// Multi-day dataset: block 0 holds weather, precipitation probability and
/// reliability; block 1, when present, holds temperature extremes.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct WeeklyDataset<'a> {
    pub header: DatasetHeader<'a>,
    pub weather: &'a TimeSeriesBlock,
    pub temperature: Option<&'a TimeSeriesBlock>,
}

/// A dataset validated against one of the two known shapes.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Dataset<'a> {
    ShortTerm(ShortTermDataset<'a>),
    Weekly(WeeklyDataset<'a>),
}

impl<'a> Dataset<'a> {
    pub fn header(&self) -> DatasetHeader<'a> {
        match self {
            Dataset::ShortTerm(d) => d.header,
            Dataset::Weekly(d) => d.header,
        }
    }

    /// The block whose `timeDefines` every area sequence is indexed against.
    pub fn weather(&self) -> &'a TimeSeriesBlock {
        match self {
            Dataset::ShortTerm(d) => d.weather,
            Dataset::Weekly(d) => d.weather,
        }
    }

    pub fn horizon(&self) -> ForecastHorizon {
        match self {
            Dataset::ShortTerm(_) => ForecastHorizon::ShortTerm,
            Dataset::Weekly(_) => ForecastHorizon::Weekly,
        }
    }
}

impl ForecastDocument {
    /// Selects and validates the dataset for `horizon`.
    ///
    /// Fails with [`DocumentError::MissingDataset`] when the top-level array
    /// has no entry (or `null`) at the horizon's index and with
    /// [`DocumentError::MissingTimeSeries`] when that entry has no first
    /// time-series block (or it is `null`). A weekly dataset without a temperature block is
    /// accepted.
    pub fn select(&self, horizon: ForecastHorizon) -> Result<Dataset<'_>> {
        let index = horizon.dataset_index();
        let dataset = self.dataset(index).ok_or_else(|| {
            warn!("No dataset at index {} ({} available)", index, self.datasets.len());
            DocumentError::MissingDataset { index }
        })?;

        let weather = dataset.block(0).ok_or_else(|| {
            warn!("Dataset {} has no time series", index);
            DocumentError::MissingTimeSeries { index }
        })?;

        let header = DatasetHeader::of(dataset);
        debug!(
            "Selected {} dataset: {} time defines, {} areas",
            horizon,
            weather.time_defines.len(),
            weather.areas.len()
        );

        Ok(match horizon {
            ForecastHorizon::ShortTerm => Dataset::ShortTerm(ShortTermDataset { header, weather }),
            ForecastHorizon::Weekly => Dataset::Weekly(WeeklyDataset {
                header,
                weather,
                temperature: dataset.block(1),
            }),
        })
    }
}
