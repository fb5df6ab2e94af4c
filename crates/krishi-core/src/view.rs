//! View models
//!
//! Pure functions turning endpoint payloads into the exact text each panel
//! shows. Components render these verbatim; no fallback or formatting logic
//! lives in markup.

use serde_json::Value;

use crate::api::{
    Commodity, DetectResponse, FertilizerResponse, ForecastEntry, MandiResponse, ModelFlags,
    RecommendResponse, WeatherResponse,
};

pub const STATUS_UNAVAILABLE: &str = "Unable to connect";
pub const RECOMMEND_FAILED: &str = "Error: Could not get recommendation";
pub const DETECT_FAILED: &str = "Error: Could not analyze image";
pub const FERTILIZER_FAILED: &str = "Error: Could not get recommendation";
pub const MANDI_FAILED: &str = "Could not load prices";
pub const MANDI_EMPTY: &str = "No price data available";
pub const MANDI_DEFAULT_LOCATION: &str = "Mandi Prices";
pub const CHAT_FAILED: &str = "Sorry, I could not process your request.";

pub const PROCESSING: &str = "Processing...";
pub const ANALYZING: &str = "Analyzing image...";
pub const THINKING: &str = "Thinking...";

const CELSIUS: &str = "°C";

pub fn weather_failed(city: &str) -> String {
    format!("❌ Could not load weather for {}", city)
}

fn mark(flag: bool) -> &'static str {
    if flag {
        "✓"
    } else {
        "✗"
    }
}

/// Two-flag component summary for the header
pub fn status_summary(models: &ModelFlags) -> String {
    format!(
        "Components: {} Disease AI {} Crop Model",
        mark(models.huggingface_model),
        mark(models.crop_recommendation_model)
    )
}

fn percent(confidence: f64) -> String {
    format!("{:.1}%", confidence * 100.0)
}

fn number_text(n: &serde_json::Number) -> String {
    if let Some(i) = n.as_i64() {
        return i.to_string();
    }
    match n.as_f64() {
        Some(f) if f.fract() == 0.0 && f.abs() < 1e15 => format!("{}", f as i64),
        Some(f) => f.to_string(),
        None => n.to_string(),
    }
}

/// Text of a JSON scalar, `None` for values JavaScript treats as falsy.
pub fn truthy_text(value: Option<&Value>) -> Option<String> {
    match value? {
        Value::String(s) if s.is_empty() => None,
        Value::String(s) => Some(s.clone()),
        Value::Number(n) if n.as_f64() == Some(0.0) => None,
        Value::Number(n) => Some(number_text(n)),
        Value::Bool(false) | Value::Null => None,
        Value::Bool(true) => Some("true".to_string()),
        other => Some(other.to_string()),
    }
}

/// Render a temperature, appending the unit unless the backend already did.
pub fn celsius(value: &Value) -> String {
    let text = match value {
        Value::String(s) => s.trim().to_string(),
        Value::Number(n) => number_text(n),
        Value::Null => String::new(),
        other => other.to_string(),
    };
    if text.ends_with(CELSIUS) {
        text
    } else {
        format!("{}{}", text, CELSIUS)
    }
}

fn footer(source: Option<&str>, updated: Option<&str>) -> Option<String> {
    match (source, updated) {
        (Some(s), Some(u)) => Some(format!("Source: {} · Updated {}", s, u)),
        (Some(s), None) => Some(format!("Source: {}", s)),
        (None, Some(u)) => Some(format!("Updated {}", u)),
        (None, None) => None,
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct RecommendationView {
    pub heading: String,
    pub location: String,
    pub conditions: String,
    pub confidence: String,
}

impl From<&RecommendResponse> for RecommendationView {
    fn from(r: &RecommendResponse) -> Self {
        Self {
            heading: format!("Recommended Crop: {}", r.crop.to_uppercase()),
            location: format!(
                "Best grown in {} during {} season.",
                r.details.best_state, r.details.season
            ),
            conditions: format!(
                "Water requirement: {}, Temperature: {}",
                r.details.water, r.details.temperature
            ),
            confidence: format!("Confidence: {}", percent(r.confidence)),
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct DiseaseView {
    pub heading: String,
    pub severity: String,
    pub confidence: String,
    pub solution: String,
}

impl From<&DetectResponse> for DiseaseView {
    fn from(r: &DetectResponse) -> Self {
        Self {
            heading: format!("Disease Detected: {}", r.disease),
            severity: r.severity.clone(),
            confidence: format!("Confidence: {}", percent(r.confidence)),
            solution: r.solution.clone(),
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct ForecastView {
    pub day: String,
    pub temp: String,
    pub condition: String,
}

impl From<&ForecastEntry> for ForecastView {
    fn from(entry: &ForecastEntry) -> Self {
        Self {
            day: entry.day.clone(),
            temp: celsius(&entry.temp),
            condition: entry.condition.clone(),
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct WeatherView {
    pub city: String,
    pub temperature: String,
    pub condition: String,
    pub humidity: Option<String>,
    /// In the order the backend sent them
    pub forecast: Vec<ForecastView>,
    pub footer: Option<String>,
}

impl WeatherView {
    /// `city` is the requested city, not the backend's echo of it.
    pub fn new(city: &str, r: &WeatherResponse) -> Self {
        Self {
            city: city.to_string(),
            temperature: celsius(&r.temperature),
            condition: r.condition.clone(),
            humidity: truthy_text(r.humidity.as_ref()).map(|h| format!("Humidity: {}%", h)),
            forecast: r.forecast.iter().map(ForecastView::from).collect(),
            footer: footer(r.source.as_deref(), r.last_updated.as_deref()),
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct PriceRow {
    pub name: String,
    pub city: String,
    pub price: String,
    pub unit: String,
    pub variety: String,
}

impl From<&Commodity> for PriceRow {
    fn from(c: &Commodity) -> Self {
        Self {
            name: truthy_text(c.name.as_ref()).unwrap_or_else(|| "Unknown".to_string()),
            city: truthy_text(c.city.as_ref()).unwrap_or_else(|| "N/A".to_string()),
            price: format!(
                "₹{}",
                truthy_text(c.price.as_ref()).unwrap_or_else(|| "N/A".to_string())
            ),
            unit: truthy_text(c.unit.as_ref()).unwrap_or_else(|| "per quintal".to_string()),
            variety: truthy_text(c.variety.as_ref()).unwrap_or_else(|| "Common".to_string()),
        }
    }
}

/// Price table body: either rows or a single full-width message row
#[derive(Debug, Clone, PartialEq)]
pub enum MandiRows {
    Prices(Vec<PriceRow>),
    Message(&'static str),
}

#[derive(Debug, Clone, PartialEq)]
pub struct MandiView {
    pub location: String,
    pub rows: MandiRows,
    pub footer: Option<String>,
}

impl From<&MandiResponse> for MandiView {
    fn from(r: &MandiResponse) -> Self {
        let location = r
            .location
            .as_deref()
            .filter(|l| !l.is_empty())
            .unwrap_or(MANDI_DEFAULT_LOCATION)
            .to_string();
        let rows = match r.commodities.as_deref() {
            Some(items) if !items.is_empty() => {
                MandiRows::Prices(items.iter().map(PriceRow::from).collect())
            }
            _ => MandiRows::Message(MANDI_EMPTY),
        };
        Self {
            location,
            rows,
            footer: footer(r.source.as_deref(), r.update_time.as_deref()),
        }
    }
}

impl MandiView {
    /// What the table shows when the request fails
    pub fn failed() -> Self {
        Self {
            location: MANDI_DEFAULT_LOCATION.to_string(),
            rows: MandiRows::Message(MANDI_FAILED),
            footer: None,
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct FertilizerView {
    pub heading: String,
    pub recommendation: String,
    pub method: String,
}

impl From<&FertilizerResponse> for FertilizerView {
    fn from(r: &FertilizerResponse) -> Self {
        Self {
            heading: "Fertilizer Recommendation".to_string(),
            recommendation: r.recommendation.clone(),
            method: format!("Application Method: {}", r.method),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::CropDetails;
    use serde_json::json;

    #[test]
    fn test_status_summary() {
        let flags = ModelFlags {
            huggingface_model: false,
            crop_recommendation_model: true,
            chat_model: None,
        };
        assert_eq!(status_summary(&flags), "Components: ✗ Disease AI ✓ Crop Model");
    }

    #[test]
    fn test_recommendation_view() {
        let view = RecommendationView::from(&RecommendResponse {
            crop: "rice".to_string(),
            confidence: 0.85,
            details: CropDetails {
                best_state: "West Bengal".to_string(),
                season: "kharif".to_string(),
                water: "1000-1500mm".to_string(),
                temperature: "20-35°C".to_string(),
            },
        });
        assert_eq!(view.heading, "Recommended Crop: RICE");
        assert_eq!(view.location, "Best grown in West Bengal during kharif season.");
        assert_eq!(view.conditions, "Water requirement: 1000-1500mm, Temperature: 20-35°C");
        assert_eq!(view.confidence, "Confidence: 85.0%");
    }

    #[test]
    fn test_disease_view() {
        let view = DiseaseView::from(&DetectResponse {
            disease: "Rust".to_string(),
            severity: "medium".to_string(),
            confidence: 0.78,
            solution: "Apply fungicide treatment".to_string(),
        });
        assert_eq!(view.heading, "Disease Detected: Rust");
        assert_eq!(view.confidence, "Confidence: 78.0%");
    }

    #[test]
    fn test_celsius_does_not_double_unit() {
        assert_eq!(celsius(&json!(32)), "32°C");
        assert_eq!(celsius(&json!(31.0)), "31°C");
        assert_eq!(celsius(&json!(30.5)), "30.5°C");
        assert_eq!(celsius(&json!("33°C")), "33°C");
        assert_eq!(celsius(&json!("33")), "33°C");
    }

    #[test]
    fn test_weather_view_keeps_forecast_order() {
        let response: WeatherResponse = serde_json::from_value(json!({
            "temperature": 32,
            "condition": "Sunny",
            "forecast": [
                {"day": "Mon", "temp": 30, "condition": "Clear"},
                {"day": "Tue", "temp": 31, "condition": "Cloudy"},
                {"day": "Wed", "temp": "29°C", "condition": "Rain"}
            ],
            "source": "Mock fallback"
        }))
        .unwrap();

        let view = WeatherView::new("Pune", &response);
        assert_eq!(view.city, "Pune");
        assert_eq!(view.temperature, "32°C");
        let days: Vec<_> = view.forecast.iter().map(|f| f.day.as_str()).collect();
        assert_eq!(days, vec!["Mon", "Tue", "Wed"]);
        assert_eq!(view.forecast[2].temp, "29°C");
        assert!(view.humidity.is_none());
        assert_eq!(view.footer.as_deref(), Some("Source: Mock fallback"));
    }

    #[test]
    fn test_weather_failed_message() {
        assert_eq!(weather_failed("Delhi"), "❌ Could not load weather for Delhi");
    }

    #[test]
    fn test_mandi_empty_list_single_row() {
        let view = MandiView::from(&MandiResponse {
            commodities: Some(vec![]),
            ..Default::default()
        });
        assert_eq!(view.rows, MandiRows::Message(MANDI_EMPTY));
        assert_eq!(view.location, MANDI_DEFAULT_LOCATION);

        let absent = MandiView::from(&MandiResponse::default());
        assert_eq!(absent.rows, MandiRows::Message(MANDI_EMPTY));
    }

    #[test]
    fn test_mandi_fallbacks_are_independent() {
        let response: MandiResponse = serde_json::from_value(json!({
            "location": "Top 10 Indian Cities",
            "commodities": [
                {"name": "Wheat", "city": "Agra", "unit": "per kg"},
                {"price": 3100, "variety": "Basmati"},
                {"name": "", "price": "", "city": null}
            ]
        }))
        .unwrap();

        let view = MandiView::from(&response);
        assert_eq!(view.location, "Top 10 Indian Cities");
        let MandiRows::Prices(rows) = view.rows else {
            panic!("expected price rows");
        };
        assert_eq!(rows.len(), 3);

        assert_eq!(rows[0].name, "Wheat");
        assert_eq!(rows[0].city, "Agra");
        assert_eq!(rows[0].price, "₹N/A");
        assert_eq!(rows[0].unit, "per kg");
        assert_eq!(rows[0].variety, "Common");

        assert_eq!(rows[1].name, "Unknown");
        assert_eq!(rows[1].city, "N/A");
        assert_eq!(rows[1].price, "₹3100");
        assert_eq!(rows[1].unit, "per quintal");
        assert_eq!(rows[1].variety, "Basmati");

        assert_eq!(rows[2].name, "Unknown");
        assert_eq!(rows[2].price, "₹N/A");
        assert_eq!(rows[2].city, "N/A");
    }

    #[test]
    fn test_mandi_failed_view() {
        let view = MandiView::failed();
        assert_eq!(view.rows, MandiRows::Message(MANDI_FAILED));
    }

    #[test]
    fn test_fertilizer_view() {
        let view = FertilizerView::from(&FertilizerResponse {
            recommendation: "Standard NPK 100:50:50 kg/ha".to_string(),
            method: "Split application".to_string(),
        });
        assert_eq!(view.heading, "Fertilizer Recommendation");
        assert_eq!(view.method, "Application Method: Split application");
    }

    #[test]
    fn test_truthy_text() {
        assert_eq!(truthy_text(None), None);
        assert_eq!(truthy_text(Some(&json!(0))), None);
        assert_eq!(truthy_text(Some(&json!("0"))), Some("0".to_string()));
        assert_eq!(truthy_text(Some(&json!(2200.0))), Some("2200".to_string()));
        assert_eq!(truthy_text(Some(&Value::Null)), None);
    }
}
