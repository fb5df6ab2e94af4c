//! Light/dark theme with injected persistence

use std::cell::RefCell;
use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::error::Error;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum Theme {
    #[default]
    Light,
    Dark,
}

impl Theme {
    pub fn as_str(&self) -> &'static str {
        match self {
            Theme::Light => "light",
            Theme::Dark => "dark",
        }
    }

    pub fn toggled(self) -> Theme {
        match self {
            Theme::Light => Theme::Dark,
            Theme::Dark => Theme::Light,
        }
    }

    /// Toggle button glyph: the theme you would switch to.
    pub fn icon(&self) -> &'static str {
        match self {
            Theme::Dark => "☀️",
            Theme::Light => "🌙",
        }
    }
}

impl fmt::Display for Theme {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Theme {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "light" => Ok(Theme::Light),
            "dark" => Ok(Theme::Dark),
            other => Err(Error::UnknownTheme(other.to_string())),
        }
    }
}

/// Persistent storage for the theme preference.
///
/// Storage that is unavailable behaves as empty; writes are best effort.
pub trait ThemeStore {
    fn load(&self) -> Option<String>;
    fn save(&self, theme: &str);
}

/// In-memory store, used natively and in tests
#[derive(Debug, Default)]
pub struct MemoryThemeStore {
    value: RefCell<Option<String>>,
}

impl MemoryThemeStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_value(value: &str) -> Self {
        Self {
            value: RefCell::new(Some(value.to_string())),
        }
    }
}

impl ThemeStore for MemoryThemeStore {
    fn load(&self) -> Option<String> {
        self.value.borrow().clone()
    }

    fn save(&self, theme: &str) {
        *self.value.borrow_mut() = Some(theme.to_string());
    }
}

pub struct ThemeController;

impl ThemeController {
    /// Read the persisted preference; absent or unrecognised values mean light.
    pub fn load(store: &dyn ThemeStore) -> Theme {
        match store.load() {
            Some(raw) => raw.parse().unwrap_or_else(|e| {
                debug!("Ignoring stored theme: {}", e);
                Theme::Light
            }),
            None => Theme::Light,
        }
    }

    /// Flip `current`, persist it and return the new theme.
    pub fn toggle(current: Theme, store: &dyn ThemeStore) -> Theme {
        let next = current.toggled();
        store.save(next.as_str());
        next
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_is_light() {
        let store = MemoryThemeStore::new();
        assert_eq!(ThemeController::load(&store), Theme::Light);
        assert_eq!(Theme::Light.icon(), "🌙");
    }

    #[test]
    fn test_garbage_value_defaults_to_light() {
        let store = MemoryThemeStore::with_value("sepia");
        assert_eq!(ThemeController::load(&store), Theme::Light);
    }

    #[test]
    fn test_toggle_twice_round_trips() {
        let store = MemoryThemeStore::new();
        let start = ThemeController::load(&store);
        let once = ThemeController::toggle(start, &store);
        assert_eq!(once, Theme::Dark);
        assert_eq!(once.icon(), "☀️");
        let twice = ThemeController::toggle(once, &store);
        assert_eq!(twice, start);
    }

    #[test]
    fn test_toggle_survives_reload() {
        let store = MemoryThemeStore::new();
        ThemeController::toggle(Theme::Light, &store);
        assert_eq!(store.load().as_deref(), Some("dark"));
        assert_eq!(ThemeController::load(&store), Theme::Dark);
    }
}
