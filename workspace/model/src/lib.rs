//! Domain model of the JMA forecast viewer.
//!
//! The region catalog and forecast horizons are static and read-only. The
//! provider document types mirror the JSON published by the Japan
//! Meteorological Agency and are validated into one of the two known dataset
//! shapes before anything is extracted from them.

pub mod dataset;
pub mod document;
pub mod error;
pub mod horizon;
pub mod region;

pub use dataset::{Dataset, DatasetHeader, ShortTermDataset, WeeklyDataset};
pub use document::{AreaEntry, AreaRef, ForecastDataset, ForecastDocument, TimeSeriesBlock};
pub use error::{DocumentError, Result};
pub use horizon::ForecastHorizon;
pub use region::{PLACEHOLDER_LABEL, Region, RegionCatalog};
