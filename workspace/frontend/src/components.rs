mod control_panel;
mod forecast_view;

pub use control_panel::ControlPanel;
pub use forecast_view::ForecastOutput;
