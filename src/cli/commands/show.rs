use anyhow::Result;
use compute::render_text;
use model::{ForecastHorizon, RegionCatalog};
use tracing::{debug, info, trace};

use crate::config::AppConfig;

/// Renders one forecast and prints it to stdout.
///
/// Render failures are printed like any other result; they are recoverable
/// and do not make the command fail.
pub async fn show(config: &AppConfig, region: &str, horizon: ForecastHorizon) -> Result<()> {
    trace!("Entering show function");
    debug!("Region: {:?}, horizon: {}", region, horizon);
    match RegionCatalog::standard().find_by_code(region.trim()) {
        Some(entry) => info!("Showing {} for {}", horizon.label(), entry.label),
        None if !region.trim().is_empty() => debug!("Region {} is not in the catalog", region),
        None => {}
    }

    let renderer = config.renderer();
    let result = renderer.render(region, horizon).await;
    print!("{}", render_text(&result));

    Ok(())
}
