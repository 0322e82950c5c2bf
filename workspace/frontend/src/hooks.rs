use common::{ForecastView, RequestSequence, RequestToken};
use model::ForecastHorizon;
use yew::prelude::*;

use crate::api_client;
use crate::settings;

/// State of the output region
#[derive(Clone, PartialEq, Debug)]
pub enum FetchState<T> {
    /// No region selected; the prompt is shown
    NotStarted,
    /// Request in flight for the given provider address
    Loading(String),
    Success(T),
    Error(String),
}

impl<T> Default for FetchState<T> {
    fn default() -> Self {
        Self::NotStarted
    }
}

/// Current values of the two controls
#[derive(Clone, PartialEq, Debug, Default)]
pub struct Selection {
    /// Region code; empty while the placeholder is selected
    pub region: String,
    pub horizon: ForecastHorizon,
}

/// Decides what the output region shows right after a control changed.
///
/// Every change supersedes the requests still in flight. The token is `None`
/// when no request should be made.
pub fn begin_request(
    sequence: &RequestSequence,
    selection: &Selection,
) -> (FetchState<ForecastView>, Option<RequestToken>) {
    let token = sequence.begin();
    if selection.region.trim().is_empty() {
        return (FetchState::NotStarted, None);
    }
    let url = settings::get_settings().upstream_url(&selection.region);
    (FetchState::Loading(url), Some(token))
}

/// Output region state plus the callback the controls report changes to.
///
/// Every change fully replaces the output. Responses of superseded requests
/// are dropped so the last initiated request always wins.
#[hook]
pub fn use_forecast() -> (UseStateHandle<FetchState<ForecastView>>, Callback<Selection>) {
    let fetch_state = use_state(FetchState::default);
    let sequence = use_memo((), |_| RequestSequence::new());

    let on_change = {
        let fetch_state = fetch_state.clone();
        let sequence = sequence.clone();

        use_callback((), move |selection: Selection, _| {
            log::debug!("Controls changed: {:?}", selection);
            let (state, token) = begin_request(&sequence, &selection);
            fetch_state.set(state);

            let Some(token) = token else {
                return;
            };

            let fetch_state = fetch_state.clone();
            let sequence = (*sequence).clone();
            wasm_bindgen_futures::spawn_local(async move {
                let result = api_client::get_forecast(&selection.region, selection.horizon).await;
                let committed = sequence.commit_if_current(token, || {
                    fetch_state.set(match result {
                        Ok(view) => FetchState::Success(view),
                        Err(err) => FetchState::Error(err),
                    });
                });
                if !committed {
                    log::debug!("Dropped response for superseded request {}", token.value());
                }
            });
        })
    };

    (fetch_state, on_change)
}
