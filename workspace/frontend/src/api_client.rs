use common::{ApiResponse, ErrorResponse, ForecastView};
use gloo_net::http::Request;
use model::ForecastHorizon;
use serde::Deserialize;
use crate::settings;

// API_BASE is retrieved from settings
fn api_base() -> String {
    settings::get_settings().api_base_url()
}

/// Common GET request handler
///
/// Non-OK responses carry the backend's user-facing message, which is
/// returned unchanged so it can be shown in the output region.
pub async fn get<T>(endpoint: &str) -> Result<T, String>
where
    T: for<'de> Deserialize<'de>,
{
    let url = format!("{}{}", api_base(), endpoint);
    log::debug!("GET request to: {}", url);

    let response = Request::get(&url)
        .send()
        .await
        .map_err(|e| {
            let error_msg = format!("❌ データの処理中にエラーが発生しました: {}", e);
            log::error!("GET {} - {}", endpoint, error_msg);
            error_msg
        })?;

    if !response.ok() {
        log::warn!("GET {} - Non-OK response: {}", endpoint, response.status());
        let error_response: Result<ErrorResponse, _> = response.json().await;
        return Err(match error_response {
            Ok(err) => {
                log::debug!("GET {} - API error {}: {}", endpoint, err.code, err.error);
                err.error
            }
            Err(_) => {
                let error_msg = format!(
                    "エラー: データの取得に失敗しました。HTTPステータス: {}",
                    response.status()
                );
                log::error!("GET {} - {}", endpoint, error_msg);
                error_msg
            }
        });
    }

    log::trace!("GET {} - Response received, parsing JSON", endpoint);
    let api_response: ApiResponse<T> = response
        .json()
        .await
        .map_err(|e| {
            let error_msg = format!("❌ データの処理中にエラーが発生しました: {}", e);
            log::error!("GET {} - {}", endpoint, error_msg);
            error_msg
        })?;

    log::info!("GET {} - Success", endpoint);
    Ok(api_response.data)
}

/// Fetch the rendered forecast of a region
pub async fn get_forecast(region_code: &str, horizon: ForecastHorizon) -> Result<ForecastView, String> {
    get(&forecast_endpoint(region_code, horizon)).await
}

fn forecast_endpoint(region_code: &str, horizon: ForecastHorizon) -> String {
    format!("/forecast?region={}&horizon={}", region_code, horizon.id())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_forecast_endpoint() {
        assert_eq!(
            forecast_endpoint("270000", ForecastHorizon::Weekly),
            "/forecast?region=270000&horizon=weekly"
        );
        assert_eq!(
            forecast_endpoint("130000", ForecastHorizon::ShortTerm),
            "/forecast?region=130000&horizon=short"
        );
    }
}
