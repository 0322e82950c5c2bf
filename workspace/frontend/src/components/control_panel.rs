use model::{ForecastHorizon, RegionCatalog, PLACEHOLDER_LABEL};
use web_sys::{HtmlInputElement, HtmlSelectElement};
use yew::prelude::*;

use crate::hooks::Selection;

#[derive(Properties, PartialEq)]
pub struct ControlPanelProps {
    /// Called with the current state of both controls after either changes
    pub on_change: Callback<Selection>,
}

/// Region dropdown and forecast horizon radio group
#[function_component(ControlPanel)]
pub fn control_panel(props: &ControlPanelProps) -> Html {
    let select_ref = use_node_ref();
    let horizon = use_state(ForecastHorizon::default);

    let current_region = {
        let select_ref = select_ref.clone();
        move || {
            select_ref
                .cast::<HtmlSelectElement>()
                .map(|select| select.value())
                .unwrap_or_default()
        }
    };

    let on_region_change = {
        let on_change = props.on_change.clone();
        let horizon = horizon.clone();
        let current_region = current_region.clone();
        Callback::from(move |_: Event| {
            let selection = Selection {
                region: current_region(),
                horizon: *horizon,
            };
            log::trace!("Region control changed to {:?}", selection.region);
            on_change.emit(selection);
        })
    };

    let on_horizon_change = {
        let on_change = props.on_change.clone();
        let horizon = horizon.clone();
        Callback::from(move |e: Event| {
            let input: HtmlInputElement = e.target_unchecked_into();
            let Ok(selected) = input.value().parse::<ForecastHorizon>() else {
                log::warn!("Unknown forecast horizon value: {}", input.value());
                return;
            };
            horizon.set(selected);
            let selection = Selection {
                region: current_region(),
                horizon: selected,
            };
            log::trace!("Horizon control changed to {}", selected);
            on_change.emit(selection);
        })
    };

    html! {
        <div class="controls">
            <label for="areaSelect">{"地域: "}</label>
            <select id="areaSelect" ref={select_ref} onchange={on_region_change}>
                <option value="" selected=true>{PLACEHOLDER_LABEL}</option>
                { for RegionCatalog::standard().entries().iter().map(|region| html! {
                    <option value={region.code}>{region.label}</option>
                }) }
            </select>
            <div class="horizon">
                { for ForecastHorizon::ALL.iter().map(|choice| {
                    let id = format!("forecastType{}", choice.dataset_index());
                    html! {
                        <label for={id.clone()}>
                            <input
                                type="radio"
                                id={id}
                                name="forecastType"
                                value={choice.id()}
                                checked={*choice == *horizon}
                                onchange={on_horizon_change.clone()}
                            />
                            {choice.label()}
                        </label>
                    }
                }) }
            </div>
        </div>
    }
}
