//! Pure Rust WebAssembly Frontend for Krishi Sevak
//!
//! This is a Leptos-based frontend that:
//! - Compiles to WebAssembly
//! - Talks to the Krishi Sevak backend over JSON
//! - Shows one section at a time: dashboard, crop advice, disease
//!   detection, weather, mandi prices, crop facts, fertilizer and chat

use krishi_core::{actions, AppState, UiConfig};
use leptos::*;

mod api;
mod components;
mod dom;
mod pages;
mod state;

pub use api::*;
pub use components::*;
pub use pages::*;
pub use state::*;

/// Main application component
#[component]
pub fn App() -> impl IntoView {
    // Initialize tracing for WASM
    tracing_wasm::set_as_global_default();

    let config = UiConfig::default().with_api_base(option_env!("KRISHI_API_BASE"));
    let client = ApiClient::from_config(&config);
    let store = LocalThemeStore::new(&config.theme_storage_key);

    // Create global application state
    let app_state = SharedState::new(AppState::new(config));
    provide_context(app_state);
    provide_context(client.clone());
    provide_context(store.clone());

    create_effect(move |_| apply_theme(app_state.read(|s| s.theme)));

    spawn_local(async move {
        actions::startup(&client, &app_state, &store).await;
    });

    view! {
        <div class="app-container">
            <Sidebar/>
            <main class="main-content">
                <Header/>
                <DashboardPage/>
                <RecommendPage/>
                <DiseasePage/>
                <WeatherPage/>
                <MandiPage/>
                <CropInfoPage/>
                <FertilizerPage/>
                <ChatPage/>
            </main>
        </div>
    }
}

/// Application entry point for WASM
#[wasm_bindgen::prelude::wasm_bindgen(start)]
pub fn main() {
    console_error_panic_hook::set_once();
    mount_to_body(App);
}
