//! Page Components
//!
//! One component per main-view section. Every page reads the shared
//! `AppState` and drives it through `krishi_core::actions`.

use krishi_core::actions;
use krishi_core::view::{self as labels, MandiRows};
use krishi_core::{CropInfoView, CropKey, PanelView, Section};
use leptos::*;

use crate::api::ApiClient;
use crate::components::*;
use crate::dom;
use crate::state::*;

const SOILS: [(&str, &str); 5] = [
    ("clay", "Clay"),
    ("sandy", "Sandy"),
    ("loamy", "Loamy"),
    ("black", "Black"),
    ("red", "Red"),
];

const SEASONS: [(&str, &str); 3] = [
    ("kharif", "Kharif (Monsoon)"),
    ("rabi", "Rabi (Winter)"),
    ("zaid", "Zaid (Summer)"),
];

const FERTILIZER_CROPS: [&str; 12] = [
    "wheat",
    "rice",
    "maize",
    "sugarcane",
    "cotton",
    "soybean",
    "mustard",
    "groundnut",
    "potato",
    "tomato",
    "onion",
    "chilli",
];

/// Render a panel's loading and failure states; `ready` draws the payload.
fn panel_body<T: Clone + 'static>(
    view: PanelView<T>,
    loading_label: &'static str,
    ready: impl FnOnce(T) -> View,
) -> View {
    match view {
        PanelView::Idle => ().into_view(),
        PanelView::Loading => view! { <LoadingSpinner label=loading_label/> }.into_view(),
        PanelView::Ready(payload) => ready(payload),
        PanelView::Failed(message) => view! { <ErrorDisplay message=message/> }.into_view(),
    }
}

fn options(items: &[(&'static str, &'static str)]) -> View {
    items
        .iter()
        .map(|(value, label)| view! { <option value=*value>{*label}</option> })
        .collect_view()
}

/// Dashboard - landing overview
#[component]
pub fn DashboardPage() -> impl IntoView {
    let app_state = expect_context::<SharedState>();

    let weather = move || {
        app_state.read(|s| {
            s.weather
                .view()
                .ready()
                .map(|w| format!("{}: {}, {}", w.city, w.temperature, w.condition))
        })
    };
    let prices = move || {
        app_state.read(|s| match s.mandi.view().ready().map(|m| &m.rows) {
            Some(MandiRows::Prices(rows)) => format!("{} commodities tracked", rows.len()),
            Some(MandiRows::Message(message)) => message.to_string(),
            None => labels::PROCESSING.to_string(),
        })
    };

    view! {
        <SectionPanel section=Section::Dashboard>
            <p class="welcome">"Namaste! Your farming assistant is ready."</p>
            <div class="dashboard-cards">
                <div class="card">
                    <h3>"🌤️ Today's Weather"</h3>
                    <p>{move || weather().unwrap_or_else(|| labels::PROCESSING.to_string())}</p>
                </div>
                <div class="card">
                    <h3>"💰 Mandi Prices"</h3>
                    <p>{prices}</p>
                </div>
            </div>
        </SectionPanel>
    }
}

/// Crop recommendation form
#[component]
pub fn RecommendPage() -> impl IntoView {
    let app_state = expect_context::<SharedState>();
    let client = expect_context::<ApiClient>();
    let form_ref = create_node_ref::<html::Form>();

    let on_submit = move |ev: ev::SubmitEvent| {
        ev.prevent_default();
        let Some(form) = form_ref.get_untracked() else {
            return;
        };
        let payload = dom::form_payload(&form);
        let client = client.clone();
        spawn_local(async move {
            actions::submit_recommendation(&client, &app_state, &payload).await;
        });
    };

    let result = move || {
        let view = app_state.read(|s| s.recommend.view().clone());
        panel_body(view, labels::PROCESSING, |r| {
            view! {
                <div class="result-card success">
                    <h3>{r.heading}</h3>
                    <p>{r.location}</p>
                    <p>{r.conditions}</p>
                    <p>{r.confidence}</p>
                </div>
            }
            .into_view()
        })
    };

    view! {
        <SectionPanel section=Section::Recommend>
            <form id="recommend-form" node_ref=form_ref on:submit=on_submit>
                <label>
                    "Soil Type"
                    <select name="soil" required=true>{options(&SOILS)}</select>
                </label>
                <label>
                    "Season"
                    <select name="season" required=true>{options(&SEASONS)}</select>
                </label>
                <button type="submit" class="primary-button">"Get Recommendation"</button>
            </form>
            <div id="recommend-result" class="result">{result}</div>
        </SectionPanel>
    }
}

/// Leaf image upload, preview and disease detection
#[component]
pub fn DiseasePage() -> impl IntoView {
    let app_state = expect_context::<SharedState>();
    let client = expect_context::<ApiClient>();

    let on_file = move |ev: ev::Event| {
        let input = event_target::<web_sys::HtmlInputElement>(&ev);
        let Some(file) = input.files().and_then(|files| files.get(0)) else {
            return;
        };
        dom::read_data_url(file, move |data_url| {
            actions::set_image_preview(&app_state, data_url);
        });
    };

    let on_detect = move |_: ev::MouseEvent| {
        let client = client.clone();
        spawn_local(async move {
            actions::detect_disease(&client, &app_state).await;
        });
    };

    let preview = move || {
        app_state
            .read(|s| s.image_preview.clone())
            .map(|src| view! { <img src=src alt="Leaf preview" class="leaf-preview"/> })
    };

    let result = move || {
        let view = app_state.read(|s| s.detect.view().clone());
        panel_body(view, labels::ANALYZING, |d| {
            view! {
                <div class="result-card warning">
                    <h3>{d.heading}</h3>
                    <p>{d.severity}</p>
                    <p>{d.confidence}</p>
                    <p>{d.solution}</p>
                </div>
            }
            .into_view()
        })
    };

    view! {
        <SectionPanel section=Section::Disease>
            <input id="leaf-image" type="file" accept="image/*" on:change=on_file/>
            <div id="image-preview" class="image-preview">{preview}</div>
            <button class="primary-button" on:click=on_detect>"Detect Disease"</button>
            <div id="disease-result" class="result">{result}</div>
        </SectionPanel>
    }
}

/// Weather for the selected city
#[component]
pub fn WeatherPage() -> impl IntoView {
    let app_state = expect_context::<SharedState>();
    let client = expect_context::<ApiClient>();
    let cities = app_state.0.with_untracked(|s| s.config.cities.clone());

    let on_city = move |ev: ev::Event| {
        let city = event_target_value(&ev);
        let client = client.clone();
        spawn_local(async move {
            actions::select_city(&client, &app_state, &city).await;
        });
    };

    let content = move || {
        let view = app_state.read(|s| s.weather.view().clone());
        panel_body(view, labels::PROCESSING, |w| {
            view! {
                <div id="weather-data" class="weather-card">
                    <div class="weather-now">
                        <span class="temperature">{w.temperature}</span>
                        <span class="condition">{w.condition}</span>
                        {w.humidity.map(|h| view! { <span class="humidity">{h}</span> })}
                    </div>
                    <ForecastList days=w.forecast/>
                    {w.footer.map(|f| view! { <small class="weather-footer">{f}</small> })}
                </div>
            }
            .into_view()
        })
    };

    view! {
        <SectionPanel section=Section::Weather>
            <select
                id="city-select"
                prop:value=move || app_state.read(|s| s.selected_city.clone())
                on:change=on_city
            >
                {cities
                    .into_iter()
                    .map(|city| view! { <option value=city.clone()>{city}</option> })
                    .collect_view()}
            </select>
            <h3 id="weather-city">{move || app_state.read(|s| s.weather_city.clone())}</h3>
            {content}
        </SectionPanel>
    }
}

/// Mandi (market) price table
#[component]
pub fn MandiPage() -> impl IntoView {
    let app_state = expect_context::<SharedState>();
    let client = expect_context::<ApiClient>();

    let on_refresh = move |_: ev::MouseEvent| {
        let client = client.clone();
        spawn_local(async move {
            actions::load_mandi(&client, &app_state).await;
        });
    };

    let table = move || app_state.read(|s| s.mandi_table());
    let location = move || {
        table()
            .map(|t| t.location)
            .unwrap_or_else(|| labels::MANDI_DEFAULT_LOCATION.to_string())
    };
    let rows = move || match table() {
        None => view! { <tr><td colspan="5">{labels::PROCESSING}</td></tr> }.into_view(),
        Some(t) => match t.rows {
            MandiRows::Prices(rows) => rows
                .into_iter()
                .map(|row| view! { <PriceTableRow row=row/> })
                .collect_view(),
            MandiRows::Message(message) => {
                view! { <tr><td colspan="5">{message}</td></tr> }.into_view()
            }
        },
    };
    let footer = move || {
        table()
            .and_then(|t| t.footer)
            .map(|f| view! { <small class="mandi-footer">{f}</small> })
    };

    view! {
        <SectionPanel section=Section::Mandi>
            <div class="mandi-header">
                <h3 id="mandi-location">{location}</h3>
                <button class="secondary-button" on:click=on_refresh>"🔄 Refresh"</button>
            </div>
            <table class="price-table">
                <thead>
                    <tr>
                        <th>"Commodity"</th>
                        <th>"City"</th>
                        <th>"Price"</th>
                        <th>"Unit"</th>
                        <th>"Variety"</th>
                    </tr>
                </thead>
                <tbody id="mandi-prices">{rows}</tbody>
            </table>
            {footer}
        </SectionPanel>
    }
}

/// Static crop reference
#[component]
pub fn CropInfoPage() -> impl IntoView {
    let app_state = expect_context::<SharedState>();

    let info = move || match app_state.read(|s| s.crop_info.clone()) {
        None => ().into_view(),
        Some(CropInfoView::Card(facts)) => view! { <CropCard facts=facts/> }.into_view(),
        Some(other) => view! { <p class="crop-message">{other.message()}</p> }.into_view(),
    };

    view! {
        <SectionPanel section=Section::Crops>
            <select
                id="crop-select"
                prop:value=move || app_state.read(|s| s.crop_selection.clone())
                on:change=move |ev| actions::show_crop_info(&app_state, &event_target_value(&ev))
            >
                <option value="">"-- Select a crop --"</option>
                {CropKey::ALL
                    .into_iter()
                    .map(|key| view! { <option value=key.key()>{key.facts().name}</option> })
                    .collect_view()}
            </select>
            <div id="crop-info">{info}</div>
        </SectionPanel>
    }
}

/// Fertilizer advice form
#[component]
pub fn FertilizerPage() -> impl IntoView {
    let app_state = expect_context::<SharedState>();
    let client = expect_context::<ApiClient>();
    let form_ref = create_node_ref::<html::Form>();

    let on_submit = move |ev: ev::SubmitEvent| {
        ev.prevent_default();
        let Some(form) = form_ref.get_untracked() else {
            return;
        };
        let payload = dom::form_payload(&form);
        let client = client.clone();
        spawn_local(async move {
            actions::submit_fertilizer(&client, &app_state, &payload).await;
        });
    };

    let result = move || {
        let view = app_state.read(|s| s.fertilizer.view().clone());
        panel_body(view, labels::PROCESSING, |f| {
            view! {
                <div class="result-card success">
                    <h3>{f.heading}</h3>
                    <p>{f.recommendation}</p>
                    <p>{f.method}</p>
                </div>
            }
            .into_view()
        })
    };

    view! {
        <SectionPanel section=Section::Fertilizer>
            <form id="fertilizer-form" node_ref=form_ref on:submit=on_submit>
                <label>
                    "Crop"
                    <select name="crop" required=true>
                        {FERTILIZER_CROPS
                            .into_iter()
                            .map(|crop| view! { <option value=crop>{crop}</option> })
                            .collect_view()}
                    </select>
                </label>
                <button type="submit" class="primary-button">"Get Advice"</button>
            </form>
            <div id="fertilizer-result" class="result">{result}</div>
        </SectionPanel>
    }
}

/// Chat assistant
#[component]
pub fn ChatPage() -> impl IntoView {
    let app_state = expect_context::<SharedState>();
    let client = expect_context::<ApiClient>();
    let history = create_node_ref::<html::Div>();

    // Keep the newest message in view.
    create_effect(move |_| {
        app_state.read(|s| s.chat.scroll_ticks());
        request_animation_frame(move || {
            if let Some(log) = history.get_untracked() {
                log.set_scroll_top(log.scroll_height());
            }
        });
    });

    let on_send = move |message: String| {
        let client = client.clone();
        spawn_local(async move {
            actions::send_chat(&client, &app_state, &message).await;
        });
    };

    let entries = move || app_state.read(|s| s.chat.entries().to_vec());

    view! {
        <SectionPanel section=Section::Chat>
            <div id="chat-history" class="chat-history" node_ref=history>
                <For
                    each=entries
                    key=|entry| entry.id.clone()
                    children=|entry| view! { <MessageBubble entry=entry/> }
                />
            </div>
            <ChatInput on_send=on_send/>
        </SectionPanel>
    }
}
