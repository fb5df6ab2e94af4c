//! Application State Management
//!
//! Wraps the core `AppState` in a Leptos signal so actions can drive it and
//! components re-render from it.

use krishi_core::{AppState, StateCell, Theme, ThemeStore};
use leptos::*;
use tracing::warn;

/// Global application state, shared through context
#[derive(Clone, Copy)]
pub struct SharedState(pub RwSignal<AppState>);

impl SharedState {
    pub fn new(state: AppState) -> Self {
        Self(create_rw_signal(state))
    }

    /// Tracked read for use inside reactive closures
    pub fn read<R>(&self, f: impl FnOnce(&AppState) -> R) -> R {
        self.0.with(f)
    }
}

impl StateCell for SharedState {
    fn with_state_mut<R>(&self, f: impl FnOnce(&mut AppState) -> R) -> Option<R> {
        self.0.try_update(f)
    }

    fn with_state<R>(&self, f: impl FnOnce(&AppState) -> R) -> Option<R> {
        self.0.try_with_untracked(f)
    }
}

/// Theme preference in `window.localStorage`
#[derive(Clone, Debug)]
pub struct LocalThemeStore {
    key: String,
}

impl LocalThemeStore {
    pub fn new(key: &str) -> Self {
        Self {
            key: key.to_string(),
        }
    }
}

fn local_storage() -> Option<web_sys::Storage> {
    web_sys::window()?.local_storage().ok().flatten()
}

impl ThemeStore for LocalThemeStore {
    fn load(&self) -> Option<String> {
        local_storage()?.get_item(&self.key).ok().flatten()
    }

    fn save(&self, theme: &str) {
        let Some(storage) = local_storage() else {
            warn!("localStorage unavailable, theme not persisted");
            return;
        };
        if let Err(e) = storage.set_item(&self.key, theme) {
            warn!("Failed to persist theme: {:?}", e);
        }
    }
}

/// Reflect the theme on `<body data-theme>`.
pub fn apply_theme(theme: Theme) {
    let Some(body) = document().body() else {
        return;
    };
    if let Err(e) = body.set_attribute("data-theme", theme.as_str()) {
        warn!("Failed to apply theme: {:?}", e);
    }
}
