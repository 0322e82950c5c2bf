use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct LoadingProps {
    /// Provider document being fetched
    pub url: String,
}

/// Loading line shown while a forecast request is in flight
#[function_component(Loading)]
pub fn loading(props: &LoadingProps) -> Html {
    html! {
        <p class="loading">{format!("📡 {} からデータを取得中...", props.url)}</p>
    }
}
