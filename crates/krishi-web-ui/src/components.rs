//! Reusable UI Components
//!
//! Leptos components shared by the section pages.

use krishi_core::actions;
use krishi_core::view::{ForecastView, PriceRow};
use krishi_core::{ChatEntry, ChatRole, CropFacts, PanelView, Section};
use leptos::*;

use crate::api::ApiClient;
use crate::state::*;

/// Sidebar navigation, one link per section
#[component]
pub fn Sidebar() -> impl IntoView {
    let app_state = expect_context::<SharedState>();
    let client = expect_context::<ApiClient>();

    view! {
        <aside class="sidebar">
            <div class="sidebar-brand">
                <h1>"🌾 Krishi Sevak"</h1>
            </div>
            <nav class="sidebar-nav">
                {Section::ALL
                    .into_iter()
                    .map(|section| {
                        let client = client.clone();
                        let on_click = move |ev: ev::MouseEvent| {
                            ev.prevent_default();
                            let client = client.clone();
                            spawn_local(async move {
                                let _ = actions::show_section(&client, &app_state, section.key())
                                    .await;
                            });
                        };
                        view! {
                            <a
                                href="#"
                                id=section.nav_id()
                                class="nav-link"
                                class:active=move || app_state.read(|s| s.active == section)
                                on:click=on_click
                            >
                                {section.icon()}
                                " "
                                {section.title()}
                            </a>
                        }
                    })
                    .collect_view()}
            </nav>
        </aside>
    }
}

/// Header with the quick status line and the theme toggle
#[component]
pub fn Header() -> impl IntoView {
    let app_state = expect_context::<SharedState>();
    let store = expect_context::<LocalThemeStore>();

    let status = move || {
        app_state.read(|s| match s.status.view() {
            PanelView::Ready(text) | PanelView::Failed(text) => text.clone(),
            PanelView::Idle | PanelView::Loading => "Checking components...".to_string(),
        })
    };
    let icon = move || app_state.read(|s| s.theme.icon());

    view! {
        <header class="header">
            <span id="quick-status" class="quick-status">{status}</span>
            <button
                id="themeToggle"
                class="theme-toggle"
                on:click=move |_| {
                    actions::toggle_theme(&app_state, &store);
                }
            >
                {icon}
            </button>
        </header>
    }
}

/// A main-view section, shown only while it is the active one
#[component]
pub fn SectionPanel(section: Section, children: Children) -> impl IntoView {
    let app_state = expect_context::<SharedState>();
    let display = move || {
        if app_state.read(|s| s.is_visible(section)) {
            "block"
        } else {
            "none"
        }
    };

    view! {
        <section id=section.panel_id() class="section" style:display=display>
            <h2 class="section-title">{section.icon()} " " {section.title()}</h2>
            {children()}
        </section>
    }
}

/// Chat message display component
#[component]
pub fn MessageBubble(entry: ChatEntry) -> impl IntoView {
    let class = match entry.role {
        ChatRole::User => "message user",
        ChatRole::Assistant => "message bot",
        ChatRole::Error => "message bot error",
        ChatRole::Typing => "message bot typing",
    };

    view! {
        <div class=class id=entry.id.clone()>
            <div class="message-content">{entry.text.clone()}</div>
            <span class="message-time">{entry.timestamp.clone()}</span>
        </div>
    }
}

/// Chat input component
#[component]
pub fn ChatInput(#[prop(into)] on_send: Callback<String>) -> impl IntoView {
    let (input_value, set_input_value) = create_signal(String::new());

    let send = move || {
        let value = input_value.get_untracked();
        if !value.trim().is_empty() {
            on_send.call(value);
            set_input_value.set(String::new());
        }
    };

    let handle_keydown = move |ev: ev::KeyboardEvent| {
        if ev.key() == "Enter" {
            ev.prevent_default();
            send();
        }
    };

    view! {
        <div class="chat-input-row">
            <input
                id="chat-input"
                class="chat-input"
                type="text"
                placeholder="Ask about crops, soil, pests or prices..."
                prop:value=input_value
                on:input=move |ev| set_input_value.set(event_target_value(&ev))
                on:keydown=handle_keydown
            />
            <button class="send-button" on:click=move |_| send()>
                "Send"
            </button>
        </div>
    }
}

/// Forecast strip under the current weather
#[component]
pub fn ForecastList(days: Vec<ForecastView>) -> impl IntoView {
    view! {
        <div class="forecast">
            {days
                .into_iter()
                .map(|day| {
                    view! {
                        <div class="forecast-day">
                            <strong>{day.day}</strong>
                            <span class="forecast-temp">{day.temp}</span>
                            <span class="forecast-condition">{day.condition}</span>
                        </div>
                    }
                })
                .collect_view()}
        </div>
    }
}

/// Mandi price table row
#[component]
pub fn PriceTableRow(row: PriceRow) -> impl IntoView {
    view! {
        <tr class="price-row">
            <td>{row.name}</td>
            <td>{row.city}</td>
            <td class="price">{row.price}</td>
            <td>{row.unit}</td>
            <td>{row.variety}</td>
        </tr>
    }
}

/// Crop reference card
#[component]
pub fn CropCard(facts: &'static CropFacts) -> impl IntoView {
    view! {
        <div class="crop-card">
            <h3>{facts.name}</h3>
            <p><strong>"Season: "</strong>{facts.season}</p>
            <p><strong>"Water: "</strong>{facts.water}</p>
            <p><strong>"Temperature: "</strong>{facts.temperature}</p>
            <p><strong>"Major States: "</strong>{facts.states}</p>
            <p><strong>"Tips: "</strong>{facts.tips}</p>
        </div>
    }
}

/// Loading spinner
#[component]
pub fn LoadingSpinner(#[prop(default = "Loading...")] label: &'static str) -> impl IntoView {
    view! {
        <div class="loading-spinner">
            <div class="spinner"></div>
            <span>{label}</span>
        </div>
    }
}

/// Error display
#[component]
pub fn ErrorDisplay(message: String) -> impl IntoView {
    view! {
        <div class="error-display">
            <span class="error-icon">"⚠️"</span>
            <span class="error-message">{message}</span>
        </div>
    }
}
