//! Application State
//!
//! The whole UI is a function of [`AppState`]. Components read it, actions
//! mutate it through a [`StateCell`], and nothing else holds UI state.

use std::cell::RefCell;

use crate::chat::ChatLog;
use crate::config::UiConfig;
use crate::crops::CropInfoView;
use crate::panel::{Panel, PanelView};
use crate::section::Section;
use crate::theme::Theme;
use crate::view::{
    DiseaseView, FertilizerView, MandiView, RecommendationView, WeatherView,
};

/// Global application state
#[derive(Clone, Debug, PartialEq)]
pub struct AppState {
    pub config: UiConfig,
    pub theme: Theme,
    /// The only visible section; the nav indicator reads the same field
    pub active: Section,
    /// City chosen in the weather selector
    pub selected_city: String,
    /// City named in the weather header, echoed as soon as a load starts
    pub weather_city: String,
    /// Component summary line
    pub status: Panel<String>,
    pub recommend: Panel<RecommendationView>,
    pub detect: Panel<DiseaseView>,
    pub weather: Panel<WeatherView>,
    pub mandi: Panel<MandiView>,
    pub fertilizer: Panel<FertilizerView>,
    pub crop_selection: String,
    pub crop_info: Option<CropInfoView>,
    /// Data URL of the selected leaf image
    pub image_preview: Option<String>,
    pub chat: ChatLog,
}

impl AppState {
    pub fn new(config: UiConfig) -> Self {
        let city = config.default_city.clone();
        Self {
            config,
            theme: Theme::default(),
            active: Section::default(),
            selected_city: city.clone(),
            weather_city: city,
            status: Panel::new("status"),
            recommend: Panel::new("recommend"),
            detect: Panel::new("detect"),
            weather: Panel::new("weather"),
            mandi: Panel::new("mandi"),
            fertilizer: Panel::new("fertilizer"),
            crop_selection: String::new(),
            crop_info: None,
            image_preview: None,
            chat: ChatLog::new(),
        }
    }

    pub fn is_visible(&self, section: Section) -> bool {
        self.active == section
    }

    /// Table body for the mandi panel; `None` while nothing has loaded yet.
    pub fn mandi_table(&self) -> Option<MandiView> {
        match self.mandi.view() {
            PanelView::Ready(view) => Some(view.clone()),
            PanelView::Failed(_) => Some(MandiView::failed()),
            PanelView::Idle | PanelView::Loading => None,
        }
    }
}

impl Default for AppState {
    fn default() -> Self {
        Self::new(UiConfig::default())
    }
}

/// Shared, mutable access to the application state.
///
/// Closures never span an `.await`, so implementations can hand out plain
/// mutable borrows. `None` means the state no longer exists (e.g. the UI was
/// torn down while a request was in flight).
pub trait StateCell {
    fn with_state_mut<R>(&self, f: impl FnOnce(&mut AppState) -> R) -> Option<R>;

    fn with_state<R>(&self, f: impl FnOnce(&AppState) -> R) -> Option<R>;
}

impl StateCell for RefCell<AppState> {
    fn with_state_mut<R>(&self, f: impl FnOnce(&mut AppState) -> R) -> Option<R> {
        Some(f(&mut self.borrow_mut()))
    }

    fn with_state<R>(&self, f: impl FnOnce(&AppState) -> R) -> Option<R> {
        Some(f(&self.borrow()))
    }
}
