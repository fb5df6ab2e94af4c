//! Backend contracts
//!
//! Request and response shapes for every endpoint the client calls, plus the
//! [`KrishiApi`] trait the browser client implements. Optional fields carry
//! `#[serde(default)]` so fallbacks live in [`crate::view`], not in markup.

use std::collections::BTreeMap;

use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::error::ApiError;

/// Endpoint paths, relative to the configured API base
pub mod endpoints {
    pub const STATUS: &str = "/status";
    pub const RECOMMEND: &str = "/api/recommend";
    pub const DETECT: &str = "/api/detect";
    pub const WEATHER: &str = "/api/weather";
    pub const MANDI: &str = "/api/mandi";
    pub const FERTILIZER: &str = "/api/fertilizer";
    pub const CHAT: &str = "/api/chat";

    /// `/api/weather?city=<city>` with the city encoded like `encodeURIComponent`.
    pub fn weather_path(city: &str) -> String {
        format!("{}?city={}", WEATHER, urlencoding::encode(city))
    }
}

/// Health probe response (`GET /status`)
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct StatusResponse {
    #[serde(default)]
    pub status: Option<String>,
    pub models: ModelFlags,
    #[serde(default)]
    pub apis: Option<ApiFlags>,
}

#[derive(Debug, Clone, Copy, Deserialize, Serialize, PartialEq, Eq)]
pub struct ModelFlags {
    pub huggingface_model: bool,
    pub crop_recommendation_model: bool,
    #[serde(default)]
    pub chat_model: Option<bool>,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct ApiFlags {
    #[serde(default)]
    pub weather: Option<String>,
}

/// Crop recommendation (`POST /api/recommend`)
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct RecommendResponse {
    pub crop: String,
    pub confidence: f64,
    pub details: CropDetails,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct CropDetails {
    pub best_state: String,
    pub season: String,
    pub water: String,
    pub temperature: String,
}

/// Disease detection request (`POST /api/detect`)
///
/// Serialises to `{}` when no image has been previewed.
#[derive(Debug, Clone, Default, Serialize)]
pub struct DetectRequest {
    /// Data URL of the selected leaf image
    #[serde(skip_serializing_if = "Option::is_none")]
    pub image: Option<String>,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct DetectResponse {
    pub disease: String,
    pub severity: String,
    pub confidence: f64,
    pub solution: String,
}

/// Weather lookup (`GET /api/weather?city=`)
///
/// Temperatures arrive either as numbers or as strings that already carry a
/// unit, so they are kept as raw JSON values.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct WeatherResponse {
    pub temperature: Value,
    pub condition: String,
    pub forecast: Vec<ForecastEntry>,
    #[serde(default)]
    pub city: Option<String>,
    #[serde(default)]
    pub humidity: Option<Value>,
    #[serde(default)]
    pub source: Option<String>,
    #[serde(default)]
    pub last_updated: Option<String>,
}

#[derive(Debug, Clone, Deserialize, Serialize, PartialEq)]
pub struct ForecastEntry {
    pub day: String,
    pub temp: Value,
    pub condition: String,
}

/// Mandi price list (`GET /api/mandi`)
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct MandiResponse {
    #[serde(default)]
    pub location: Option<String>,
    #[serde(default)]
    pub commodities: Option<Vec<Commodity>>,
    #[serde(default)]
    pub source: Option<String>,
    #[serde(default)]
    pub update_time: Option<String>,
}

/// One price row. Every field is optional and may be any JSON scalar.
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct Commodity {
    #[serde(default)]
    pub name: Option<Value>,
    #[serde(default)]
    pub city: Option<Value>,
    #[serde(default)]
    pub price: Option<Value>,
    #[serde(default)]
    pub unit: Option<Value>,
    #[serde(default)]
    pub variety: Option<Value>,
    #[serde(default)]
    pub market: Option<Value>,
}

/// Fertilizer advice (`POST /api/fertilizer`)
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct FertilizerResponse {
    pub recommendation: String,
    pub method: String,
}

/// Chat request (`POST /api/chat`)
#[derive(Debug, Clone, Serialize)]
pub struct ChatRequest {
    pub message: String,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct ChatResponse {
    pub reply: String,
}

/// Flat form submission: every named field as a string.
///
/// Later entries with the same name replace earlier ones.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct FormPayload(BTreeMap<String, String>);

impl FormPayload {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, name: impl Into<String>, value: impl Into<String>) {
        self.0.insert(name.into(), value.into());
    }

    pub fn get(&self, name: &str) -> Option<&str> {
        self.0.get(name).map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.0.keys().map(String::as_str)
    }
}

impl<K: Into<String>, V: Into<String>> FromIterator<(K, V)> for FormPayload {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let mut payload = FormPayload::new();
        for (name, value) in iter {
            payload.insert(name, value);
        }
        payload
    }
}

/// The backend as seen by the client.
///
/// Implementations must report any non-2xx response as
/// [`ApiError::Status`] before attempting to decode the body. Futures are
/// `?Send` because browser fetch futures are tied to the UI thread.
#[async_trait(?Send)]
pub trait KrishiApi {
    async fn status(&self) -> Result<StatusResponse, ApiError>;

    async fn recommend(&self, form: &FormPayload) -> Result<RecommendResponse, ApiError>;

    async fn detect(&self, request: &DetectRequest) -> Result<DetectResponse, ApiError>;

    async fn weather(&self, city: &str) -> Result<WeatherResponse, ApiError>;

    async fn mandi(&self) -> Result<MandiResponse, ApiError>;

    async fn fertilizer(&self, form: &FormPayload) -> Result<FertilizerResponse, ApiError>;

    async fn chat(&self, message: &str) -> Result<ChatResponse, ApiError>;
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_form_payload_serializes_exact_keys() {
        let form: FormPayload = [("N", "90"), ("P", "42"), ("K", "43"), ("soil_type", "loamy")]
            .into_iter()
            .collect();

        let body = serde_json::to_value(&form).unwrap();
        assert_eq!(
            body,
            json!({"N": "90", "P": "42", "K": "43", "soil_type": "loamy"})
        );
        assert_eq!(body.as_object().unwrap().len(), 4);
    }

    #[test]
    fn test_form_payload_last_duplicate_wins() {
        let form: FormPayload = [("crop", "wheat"), ("crop", "rice")].into_iter().collect();
        assert_eq!(form.len(), 1);
        assert_eq!(form.get("crop"), Some("rice"));
    }

    #[test]
    fn test_detect_request_without_image_is_empty_object() {
        let body = serde_json::to_string(&DetectRequest::default()).unwrap();
        assert_eq!(body, "{}");

        let body = serde_json::to_value(DetectRequest {
            image: Some("data:image/png;base64,AAAA".to_string()),
        })
        .unwrap();
        assert_eq!(body, json!({"image": "data:image/png;base64,AAAA"}));
    }

    #[test]
    fn test_weather_path_encodes_city() {
        assert_eq!(endpoints::weather_path("Agra"), "/api/weather?city=Agra");
        assert_eq!(
            endpoints::weather_path("New Delhi & NCR"),
            "/api/weather?city=New%20Delhi%20%26%20NCR"
        );
    }

    #[test]
    fn test_weather_response_accepts_mixed_temperatures() {
        let parsed: WeatherResponse = serde_json::from_value(json!({
            "city": "Agra",
            "temperature": 31,
            "condition": "Clear",
            "humidity": 40,
            "forecast": [
                {"day": "Today", "temp": "33°C", "condition": "Clear"},
                {"day": "Tomorrow", "temp": 34, "condition": "Partly cloudy"}
            ],
            "source": "Open-Meteo.com"
        }))
        .unwrap();

        assert_eq!(parsed.forecast.len(), 2);
        assert_eq!(parsed.forecast[1].temp, json!(34));
        assert_eq!(parsed.source.as_deref(), Some("Open-Meteo.com"));
        assert!(parsed.last_updated.is_none());
    }

    #[test]
    fn test_weather_response_requires_forecast() {
        let parsed = serde_json::from_value::<WeatherResponse>(json!({
            "temperature": 31,
            "condition": "Clear"
        }));
        assert!(parsed.is_err());
    }

    #[test]
    fn test_mandi_response_tolerates_missing_fields() {
        let parsed: MandiResponse = serde_json::from_value(json!({
            "commodities": [{"name": "Wheat", "price": 2200}, {}]
        }))
        .unwrap();
        assert!(parsed.location.is_none());
        let rows = parsed.commodities.unwrap();
        assert_eq!(rows.len(), 2);
        assert!(rows[1].name.is_none());

        let empty: MandiResponse = serde_json::from_value(json!({})).unwrap();
        assert!(empty.commodities.is_none());
    }

    #[test]
    fn test_status_response_extra_flags_optional() {
        let parsed: StatusResponse = serde_json::from_value(json!({
            "models": {"huggingface_model": false, "crop_recommendation_model": true}
        }))
        .unwrap();
        assert!(!parsed.models.huggingface_model);
        assert!(parsed.models.crop_recommendation_model);
        assert!(parsed.models.chat_model.is_none());
    }
}
