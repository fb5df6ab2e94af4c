//! User-triggered operations
//!
//! Each action performs at most one backend round trip and one state update.
//! Actions are generic over the backend ([`KrishiApi`]) and the state holder
//! ([`StateCell`]) so the browser and the tests drive the same code.

use std::future::Future;

use tracing::{debug, info, warn};

use crate::api::{
    DetectRequest, DetectResponse, FertilizerResponse, FormPayload, KrishiApi, MandiResponse,
    RecommendResponse, StatusResponse, WeatherResponse,
};
use crate::crops::CropInfoView;
use crate::error::{ApiError, Result};
use crate::panel::Panel;
use crate::section::Section;
use crate::state::{AppState, StateCell};
use crate::theme::{Theme, ThemeController, ThemeStore};
use crate::view::{
    self, DiseaseView, FertilizerView, MandiView, RecommendationView, WeatherView,
};

/// Issue a ticket on `panel`, await `request`, and apply the rendered outcome.
///
/// Returns whether the outcome was applied (false if superseded).
async fn round_trip<S, T, R, Fut>(
    state: &S,
    panel: fn(&mut AppState) -> &mut Panel<T>,
    request: Fut,
    render: impl FnOnce(R) -> T,
    failure: String,
) -> bool
where
    S: StateCell,
    Fut: Future<Output = std::result::Result<R, ApiError>>,
{
    let Some(ticket) = state.with_state_mut(|s| panel(s).begin()) else {
        return false;
    };

    let outcome = match request.await {
        Ok(response) => Ok(render(response)),
        Err(e) => {
            warn!(seq = ticket.seq(), "Request failed: {}", e);
            Err(failure)
        }
    };

    state
        .with_state_mut(|s| panel(s).finish(ticket, outcome))
        .unwrap_or(false)
}

/// Probe backend component health once.
pub async fn quick_status<A, S>(api: &A, state: &S) -> bool
where
    A: KrishiApi + ?Sized,
    S: StateCell,
{
    round_trip(
        state,
        |s| &mut s.status,
        api.status(),
        |r: StatusResponse| view::status_summary(&r.models),
        view::STATUS_UNAVAILABLE.to_string(),
    )
    .await
}

/// Post the recommendation form.
pub async fn submit_recommendation<A, S>(api: &A, state: &S, form: &FormPayload) -> bool
where
    A: KrishiApi + ?Sized,
    S: StateCell,
{
    debug!(fields = form.len(), "Submitting recommendation form");
    round_trip(
        state,
        |s| &mut s.recommend,
        api.recommend(form),
        |r: RecommendResponse| RecommendationView::from(&r),
        view::RECOMMEND_FAILED.to_string(),
    )
    .await
}

/// Post the fertilizer form.
pub async fn submit_fertilizer<A, S>(api: &A, state: &S, form: &FormPayload) -> bool
where
    A: KrishiApi + ?Sized,
    S: StateCell,
{
    debug!(fields = form.len(), "Submitting fertilizer form");
    round_trip(
        state,
        |s| &mut s.fertilizer,
        api.fertilizer(form),
        |r: FertilizerResponse| FertilizerView::from(&r),
        view::FERTILIZER_FAILED.to_string(),
    )
    .await
}

/// Analyse the previewed leaf image, if any.
pub async fn detect_disease<A, S>(api: &A, state: &S) -> bool
where
    A: KrishiApi + ?Sized,
    S: StateCell,
{
    let request = DetectRequest {
        image: state.with_state(|s| s.image_preview.clone()).flatten(),
    };
    if request.image.is_none() {
        debug!("Detecting disease without an image");
    }
    round_trip(
        state,
        |s| &mut s.detect,
        api.detect(&request),
        |r: DetectResponse| DiseaseView::from(&r),
        view::DETECT_FAILED.to_string(),
    )
    .await
}

/// Fetch weather for `city`. The header shows `city` before the request completes.
pub async fn load_weather<A, S>(api: &A, state: &S, city: &str) -> bool
where
    A: KrishiApi + ?Sized,
    S: StateCell,
{
    state.with_state_mut(|s| s.weather_city = city.to_string());
    round_trip(
        state,
        |s| &mut s.weather,
        api.weather(city),
        |r: WeatherResponse| WeatherView::new(city, &r),
        view::weather_failed(city),
    )
    .await
}

/// Change the selected city and reload its weather.
pub async fn select_city<A, S>(api: &A, state: &S, city: &str) -> bool
where
    A: KrishiApi + ?Sized,
    S: StateCell,
{
    let city = city.trim();
    let city = if city.is_empty() {
        state
            .with_state(|s| s.config.default_city.clone())
            .unwrap_or_default()
    } else {
        city.to_string()
    };
    state.with_state_mut(|s| s.selected_city = city.clone());
    load_weather(api, state, &city).await
}

/// Fetch the mandi price list.
pub async fn load_mandi<A, S>(api: &A, state: &S) -> bool
where
    A: KrishiApi + ?Sized,
    S: StateCell,
{
    round_trip(
        state,
        |s| &mut s.mandi,
        api.mandi(),
        |r: MandiResponse| MandiView::from(&r),
        view::MANDI_FAILED.to_string(),
    )
    .await
}

/// Send a chat message. Returns false if the input was blank.
pub async fn send_chat<A, S>(api: &A, state: &S, input: &str) -> bool
where
    A: KrishiApi + ?Sized,
    S: StateCell,
{
    let Some(pending) = state.with_state_mut(|s| s.chat.submit(input)).flatten() else {
        return false;
    };

    let reply = api.chat(&pending.message).await.map(|r| r.reply);
    if let Err(e) = &reply {
        warn!("Chat request failed: {}", e);
    }

    state.with_state_mut(|s| s.chat.resolve(&pending, reply));
    true
}

/// Make `key` the only visible section.
///
/// Unknown keys leave the state untouched. Opening the weather section
/// reloads the selected city.
pub async fn show_section<A, S>(api: &A, state: &S, key: &str) -> Result<()>
where
    A: KrishiApi + ?Sized,
    S: StateCell,
{
    let section: Section = key.parse().map_err(|e| {
        warn!("Ignoring navigation: {}", e);
        e
    })?;

    let city = state.with_state_mut(|s| {
        s.active = section;
        if s.selected_city.is_empty() {
            s.config.default_city.clone()
        } else {
            s.selected_city.clone()
        }
    });

    if section == Section::Weather {
        if let Some(city) = city {
            load_weather(api, state, &city).await;
        }
    }
    Ok(())
}

/// Render the static facts for the selected crop key.
pub fn show_crop_info<S>(state: &S, selection: &str)
where
    S: StateCell,
{
    let view = CropInfoView::for_selection(selection);
    if let CropInfoView::Unknown(key) = &view {
        warn!("No crop facts for '{}'", key);
    }
    state.with_state_mut(|s| {
        s.crop_selection = selection.to_string();
        s.crop_info = Some(view);
    });
}

/// Remember the selected leaf image (as a data URL) for preview and detection.
pub fn set_image_preview<S>(state: &S, data_url: Option<String>)
where
    S: StateCell,
{
    state.with_state_mut(|s| s.image_preview = data_url);
}

/// Flip the theme and persist it.
pub fn toggle_theme<S>(state: &S, store: &dyn ThemeStore) -> Option<Theme>
where
    S: StateCell,
{
    state.with_state_mut(|s| {
        s.theme = ThemeController::toggle(s.theme, store);
        s.theme
    })
}

/// Initial load: theme, dashboard, then status, prices and default-city
/// weather concurrently.
pub async fn startup<A, S>(api: &A, state: &S, store: &dyn ThemeStore)
where
    A: KrishiApi + ?Sized,
    S: StateCell,
{
    let theme = ThemeController::load(store);
    let Some(city) = state.with_state_mut(|s| {
        s.theme = theme;
        s.active = Section::Dashboard;
        s.config.default_city.clone()
    }) else {
        return;
    };
    info!(theme = %theme, city = %city, "Starting farming assistant");

    futures::join!(
        quick_status(api, state),
        load_mandi(api, state),
        load_weather(api, state, &city)
    );
}
