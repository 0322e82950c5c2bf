use common::{AreaView, ForecastView, SlotDetails, TimeSlot};
use yew::prelude::*;

use crate::common::error::ErrorDisplay;
use crate::common::loading::Loading;
use crate::hooks::FetchState;

/// Prompt shown while no region is selected
pub const SELECT_PROMPT: &str = "地域を選択してください。";

#[derive(Properties, PartialEq)]
pub struct ForecastOutputProps {
    pub state: FetchState<ForecastView>,
}

/// Output region. Each state replaces whatever was shown before.
#[function_component(ForecastOutput)]
pub fn forecast_output(props: &ForecastOutputProps) -> Html {
    let content = match &props.state {
        FetchState::NotStarted => html! { {SELECT_PROMPT} },
        FetchState::Loading(url) => html! { <Loading url={url.clone()} /> },
        FetchState::Error(message) => html! { <ErrorDisplay message={message.clone()} /> },
        FetchState::Success(view) => html! { <ForecastViewDisplay view={view.clone()} /> },
    };

    html! {
        <div id="output">{content}</div>
    }
}

#[derive(Properties, PartialEq)]
pub struct ForecastViewDisplayProps {
    pub view: ForecastView,
}

#[function_component(ForecastViewDisplay)]
pub fn forecast_view_display(props: &ForecastViewDisplayProps) -> Html {
    let view = &props.view;
    log::debug!(
        "Rendering {} forecast with {} periods and {} areas",
        view.horizon,
        view.periods.len(),
        view.areas.len()
    );

    html! {
        <>
            <p><strong>{"📢 発表元:"}</strong>{format!(" {}", view.publishing_office)}</p>
            <p><strong>{"📢 発表日時:"}</strong>{format!(" {}", view.report_datetime)}</p>

            <h2>{format!("🗓️ 予報対象期間 ({}回)", view.periods.len())}</h2>
            <ul style="list-style-type: none; padding: 0;">
                { for view.periods.iter().map(|period| html! {
                    <li>
                        <strong>{format!("{}回目:", period.sequence)}</strong>
                        {format!(" {}", period.time)}
                    </li>
                }) }
            </ul>
            <hr />

            <h2>{"📍 細分区域別予報詳細"}</h2>
            { for view.areas.iter().map(area_block) }
        </>
    }
}

fn area_block(area: &AreaView) -> Html {
    html! {
        <div class="area-info">
            <h3>{&area.name}</h3>
            { for area.slots.iter().map(slot_block) }
        </div>
    }
}

fn slot_block(slot: &TimeSlot) -> Html {
    html! {
        <div class="time-info">
            <h4>{format!("[{}]", slot.time)}</h4>
            <ul>{slot_fields(&slot.details)}</ul>
        </div>
    }
}

fn slot_fields(details: &SlotDetails) -> Html {
    match details {
        SlotDetails::ShortTerm { weather, wind, wave } => html! {
            <>
                {field("天気", weather.clone())}
                {field("風", wind.clone())}
                {field("波", wave.clone())}
            </>
        },
        SlotDetails::Weekly {
            weather,
            precipitation_probability,
            temp_min,
            temp_max,
            reliability,
        } => html! {
            <>
                {field("天気", weather.clone())}
                {field("降水確率", precipitation_probability.clone())}
                {field("気温", format!("最低 {}°C / 最高 {}°C", temp_min, temp_max))}
                {field("信頼度", reliability.clone())}
            </>
        },
    }
}

fn field(label: &str, value: String) -> Html {
    html! {
        <li><strong>{format!("{}:", label)}</strong>{format!(" {}", value)}</li>
    }
}
