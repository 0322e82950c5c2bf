use axum::{
    extract::{Query, State},
    http::StatusCode,
    response::Json,
};
use axum_valid::Valid;
use common::{ApiResponse, ErrorResponse, ForecastView};
use compute::RenderError;
use model::ForecastHorizon;
use tracing::{debug, info, instrument, trace, warn};

use crate::schemas::{AppState, ForecastQuery};

type ForecastResult = Result<(StatusCode, Json<ApiResponse<ForecastView>>), (StatusCode, Json<ErrorResponse>)>;

/// Render the forecast of a region
///
/// Performs exactly one request to the provider unless no region is
/// selected. Every failure is reported with its user-facing message.
#[utoipa::path(
    get,
    path = "/api/v1/forecast",
    tag = "forecast",
    params(ForecastQuery),
    responses(
        (status = 200, description = "Forecast rendered successfully", body = ApiResponse<ForecastView>),
        (status = 400, description = "No region selected or invalid query", body = ErrorResponse),
        (status = 404, description = "Forecast data not found in the provider document", body = ErrorResponse),
        (status = 500, description = "Provider document could not be processed", body = ErrorResponse),
        (status = 502, description = "Provider answered with a non-success status", body = ErrorResponse)
    )
)]
#[instrument]
pub async fn get_forecast(
    Valid(Query(query)): Valid<Query<ForecastQuery>>,
    State(state): State<AppState>,
) -> ForecastResult {
    trace!("Entering get_forecast function");

    let horizon = match query.horizon.as_deref() {
        None | Some("") => ForecastHorizon::default(),
        Some(raw) => match raw.parse::<ForecastHorizon>() {
            Ok(horizon) => horizon,
            Err(e) => {
                warn!("Invalid forecast horizon: {}", e);
                return Err((
                    StatusCode::BAD_REQUEST,
                    Json(ErrorResponse {
                        error: e,
                        code: "INVALID_HORIZON".to_string(),
                        success: false,
                    }),
                ));
            }
        },
    };

    let region = query.region.unwrap_or_default();
    debug!("Rendering forecast for region {:?} ({})", region, horizon);

    match state.renderer.render(&region, horizon).await {
        Ok(view) => {
            info!("Successfully rendered forecast with {} areas", view.areas.len());
            Ok((
                StatusCode::OK,
                Json(ApiResponse {
                    data: view,
                    message: "Forecast rendered successfully".to_string(),
                    success: true,
                }),
            ))
        }
        Err(e) => Err(error_response(e)),
    }
}

fn error_response(error: RenderError) -> (StatusCode, Json<ErrorResponse>) {
    let status = match &error {
        RenderError::NoSelection => StatusCode::BAD_REQUEST,
        RenderError::HttpFailure { .. } => StatusCode::BAD_GATEWAY,
        RenderError::MissingData(_) => StatusCode::NOT_FOUND,
        RenderError::ProcessingError(_) => StatusCode::INTERNAL_SERVER_ERROR,
    };
    debug!("Forecast not rendered ({}): {}", status, error);

    (
        status,
        Json(ErrorResponse {
            error: error.to_string(),
            code: error.code().to_string(),
            success: false,
        }),
    )
}
