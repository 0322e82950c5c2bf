use common::{
    ApiResponse, AreaView, ErrorResponse, ForecastView, HorizonDto, PeriodEntry, RegionDto,
    SlotDetails, TimeSlot,
};
use compute::DynForecastRenderer;
use model::RegionCatalog;
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use utoipa::{IntoParams, OpenApi, ToSchema};
use validator::{Validate, ValidationError};

/// Application state shared across handlers
#[derive(Clone, Debug)]
pub struct AppState {
    /// Renderer used for every forecast request
    pub renderer: Arc<DynForecastRenderer>,
}

/// Query parameters for the forecast endpoint
#[derive(Debug, Deserialize, ToSchema, IntoParams, Validate)]
pub struct ForecastQuery {
    /// Six digit region code; empty or absent means no selection
    #[validate(custom(function = "validate_region_code"))]
    pub region: Option<String>,
    /// Forecast horizon: "short" (default) or "weekly"
    pub horizon: Option<String>,
}

fn validate_region_code(code: &str) -> Result<(), ValidationError> {
    if code.trim().is_empty() || RegionCatalog::is_valid_code(code.trim()) {
        Ok(())
    } else {
        Err(ValidationError::new("region_code"))
    }
}

/// Health check response
#[derive(Serialize, Deserialize, ToSchema)]
pub struct HealthResponse {
    /// Service status
    pub status: String,
    /// Service version
    pub version: String,
    /// Address prefix forecast documents are fetched from
    pub upstream: String,
}

/// OpenAPI documentation
#[derive(OpenApi)]
#[openapi(
    paths(
        crate::handlers::health::health_check,
        crate::handlers::controls::get_regions,
        crate::handlers::controls::get_horizons,
        crate::handlers::forecast::get_forecast,
    ),
    components(
        schemas(
            ApiResponse<ForecastView>,
            ApiResponse<Vec<RegionDto>>,
            ApiResponse<Vec<HorizonDto>>,
            ErrorResponse,
            HealthResponse,
            ForecastQuery,
            ForecastView,
            PeriodEntry,
            AreaView,
            TimeSlot,
            SlotDetails,
            RegionDto,
            HorizonDto,
        )
    ),
    tags(
        (name = "health", description = "Health check endpoints"),
        (name = "controls", description = "Region and forecast horizon choices"),
        (name = "forecast", description = "Rendered JMA forecasts"),
    ),
    info(
        title = "JMA Forecast API",
        description = "Renders Japan Meteorological Agency forecasts for a selected region and horizon",
        version = "0.1.0",
        license(
            name = "MIT",
            url = "https://opensource.org/licenses/MIT"
        )
    )
)]
pub struct ApiDoc;
