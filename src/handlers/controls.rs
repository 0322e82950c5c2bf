use axum::{http::StatusCode, response::Json};
use common::{ApiResponse, HorizonDto, RegionDto};
use model::{ForecastHorizon, RegionCatalog};
use tracing::{debug, instrument};

/// List the selectable regions in display order
#[utoipa::path(
    get,
    path = "/api/v1/regions",
    tag = "controls",
    responses(
        (status = 200, description = "Regions retrieved successfully", body = ApiResponse<Vec<RegionDto>>)
    )
)]
#[instrument]
pub async fn get_regions() -> (StatusCode, Json<ApiResponse<Vec<RegionDto>>>) {
    let regions: Vec<RegionDto> = RegionCatalog::standard()
        .entries()
        .iter()
        .map(|r| RegionDto {
            label: r.label.to_string(),
            code: r.code.to_string(),
        })
        .collect();
    debug!("Returning {} regions", regions.len());

    (
        StatusCode::OK,
        Json(ApiResponse {
            data: regions,
            message: "Regions retrieved successfully".to_string(),
            success: true,
        }),
    )
}

/// List the forecast horizons; the first one is pre-selected
#[utoipa::path(
    get,
    path = "/api/v1/horizons",
    tag = "controls",
    responses(
        (status = 200, description = "Forecast horizons retrieved successfully", body = ApiResponse<Vec<HorizonDto>>)
    )
)]
#[instrument]
pub async fn get_horizons() -> (StatusCode, Json<ApiResponse<Vec<HorizonDto>>>) {
    let horizons = ForecastHorizon::ALL
        .iter()
        .map(|h| HorizonDto {
            id: h.id().to_string(),
            label: h.label().to_string(),
            index: h.dataset_index(),
            default: *h == ForecastHorizon::default(),
        })
        .collect();

    (
        StatusCode::OK,
        Json(ApiResponse {
            data: horizons,
            message: "Forecast horizons retrieved successfully".to_string(),
            success: true,
        }),
    )
}
