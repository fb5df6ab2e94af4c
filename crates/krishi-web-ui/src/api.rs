//! API client for the Krishi Sevak backend

use async_trait::async_trait;
use gloo_net::http::{Request, Response};
use krishi_core::api::{
    endpoints, ChatRequest, ChatResponse, DetectRequest, DetectResponse, FertilizerResponse,
    MandiResponse, RecommendResponse, StatusResponse, WeatherResponse,
};
use krishi_core::{ApiError, FormPayload, KrishiApi, UiConfig};
use serde::de::DeserializeOwned;
use serde::Serialize;

/// API client
#[derive(Clone, Debug)]
pub struct ApiClient {
    config: UiConfig,
}

impl ApiClient {
    pub fn new(base_url: &str) -> Self {
        Self::from_config(&UiConfig::default().with_api_base(Some(base_url)))
    }

    pub fn from_config(config: &UiConfig) -> Self {
        Self {
            config: config.clone(),
        }
    }

    async fn get<T: DeserializeOwned>(&self, path: &str) -> Result<T, ApiError> {
        let response = Request::get(&self.config.url(path))
            .send()
            .await
            .map_err(|e| ApiError::transport(e.to_string()))?;

        decode(response).await
    }

    async fn post<B: Serialize, T: DeserializeOwned>(
        &self,
        path: &str,
        body: &B,
    ) -> Result<T, ApiError> {
        let body = serde_json::to_string(body)?;

        let response = Request::post(&self.config.url(path))
            .header("Content-Type", "application/json")
            .body(body)
            .map_err(|e| ApiError::transport(e.to_string()))?
            .send()
            .await
            .map_err(|e| ApiError::transport(e.to_string()))?;

        decode(response).await
    }
}

/// Reject non-2xx before touching the body.
async fn decode<T: DeserializeOwned>(response: Response) -> Result<T, ApiError> {
    if !response.ok() {
        return Err(ApiError::Status(response.status()));
    }

    response
        .json::<T>()
        .await
        .map_err(|e| ApiError::decode(e.to_string()))
}

#[async_trait(?Send)]
impl KrishiApi for ApiClient {
    /// Backend component health
    async fn status(&self) -> Result<StatusResponse, ApiError> {
        self.get(endpoints::STATUS).await
    }

    async fn recommend(&self, form: &FormPayload) -> Result<RecommendResponse, ApiError> {
        self.post(endpoints::RECOMMEND, form).await
    }

    async fn detect(&self, request: &DetectRequest) -> Result<DetectResponse, ApiError> {
        self.post(endpoints::DETECT, request).await
    }

    async fn weather(&self, city: &str) -> Result<WeatherResponse, ApiError> {
        self.get(&endpoints::weather_path(city)).await
    }

    async fn mandi(&self) -> Result<MandiResponse, ApiError> {
        self.get(endpoints::MANDI).await
    }

    async fn fertilizer(&self, form: &FormPayload) -> Result<FertilizerResponse, ApiError> {
        self.post(endpoints::FERTILIZER, form).await
    }

    async fn chat(&self, message: &str) -> Result<ChatResponse, ApiError> {
        let request = ChatRequest {
            message: message.to_string(),
        };
        self.post(endpoints::CHAT, &request).await
    }
}
