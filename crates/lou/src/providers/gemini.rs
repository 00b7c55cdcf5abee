use async_trait::async_trait;
use reqwest::Client;
use serde_json::Value;

use super::base::{Provider, ProviderResponse};
use super::configs::GeminiProviderConfig;
use crate::errors::{ChatError, ChatResult};
use crate::models::request::GenerateContentRequest;

pub struct GeminiProvider {
    client: Client,
    config: GeminiProviderConfig,
}

impl GeminiProvider {
    pub fn new(config: GeminiProviderConfig) -> ChatResult<Self> {
        let client = Client::builder().timeout(config.timeout).build()?;

        Ok(Self { client, config })
    }

    fn endpoint(&self) -> String {
        format!(
            "{}/v1beta/models/{}:generateContent",
            self.config.host.trim_end_matches('/'),
            self.config.model
        )
    }

    async fn post(&self, api_key: &str, request: &GenerateContentRequest) -> ChatResult<ProviderResponse> {
        let response = self
            .client
            .post(self.endpoint())
            .header("x-goog-api-key", api_key)
            .json(request)
            .send()
            .await?;

        let status = response.status().as_u16();
        let text = response.text().await?;
        tracing::debug!(status, bytes = text.len(), "gemini responded");

        let body: Value = serde_json::from_str(&text).map_err(|e| {
            ChatError::provider(format!(
                "Response is not valid JSON ({}): {} - {}",
                e, status, text
            ))
        })?;

        Ok(ProviderResponse::new(status, body))
    }
}

#[async_trait]
impl Provider for GeminiProvider {
    async fn generate(&self, request: &GenerateContentRequest) -> ChatResult<ProviderResponse> {
        let api_key = self.config.api_key().ok_or(ChatError::MissingCredential)?;

        self.post(api_key, request).await
    }
}
