use yew::prelude::*;

mod components;
pub mod api_client;
pub mod common;
pub mod hooks;
pub mod settings;

use components::{ControlPanel, ForecastOutput};
use hooks::use_forecast;

#[function_component(App)]
pub fn app() -> Html {
    let (fetch_state, on_change) = use_forecast();

    html! {
        <main class="container">
            <h1>{"☀️ 気象庁 天気予報ビューア"}</h1>
            <ControlPanel {on_change} />
            <ForecastOutput state={(*fetch_state).clone()} />
        </main>
    }
}

#[wasm_bindgen::prelude::wasm_bindgen(start)]
pub fn run_app() {
    // Initialize settings first
    settings::init_settings();

    // Initialize logger with settings
    let settings = settings::get_settings();
    wasm_logger::init(wasm_logger::Config::new(settings.log_level));

    log::info!("=== JMA Forecast Frontend Starting ===");
    log::info!("Application settings: {:?}", settings);
    log::debug!("API base URL: {}", settings.api_base_url());
    log::debug!("Debug mode: {}", settings.debug_mode);

    log::trace!("Initializing Yew renderer");
    yew::Renderer::<App>::new().render();
    log::info!("Application initialized successfully");
}
