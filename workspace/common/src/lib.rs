//! Common transport-layer types shared between backend and frontend.
//! These structs mirror the backend handlers' response payloads so the
//! frontend can deserialize API responses without duplicating shapes.

pub mod datetime;
mod forecast;
pub mod sequence;

pub use datetime::format_timestamp;
pub use forecast::{AreaView, ForecastView, PeriodEntry, SlotDetails, TimeSlot};
pub use sequence::{RequestSequence, RequestToken};

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Generic API response wrapper used by the backend.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct ApiResponse<T> {
    /// Response data
    pub data: T,
    /// Response message
    pub message: String,
    /// Success flag
    pub success: bool,
}

/// Error body returned by the backend for every failed request.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema, PartialEq)]
pub struct ErrorResponse {
    /// User-facing error message
    pub error: String,
    /// Machine readable error code, e.g. "MISSING_DATA"
    pub code: String,
    /// Success status (always false for errors)
    pub success: bool,
}

// ===================== Controls =====================

/// One entry of the region control.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema, PartialEq)]
pub struct RegionDto {
    /// Display label, e.g. "大阪府"
    pub label: String,
    /// Six digit provider code, e.g. "270000"
    pub code: String,
}

/// One choice of the forecast horizon control.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema, PartialEq)]
pub struct HorizonDto {
    /// Identifier used in requests ("short" or "weekly")
    pub id: String,
    /// Display label
    pub label: String,
    /// Index of the dataset in the provider document
    pub index: usize,
    /// Whether this choice is pre-selected
    pub default: bool,
}
