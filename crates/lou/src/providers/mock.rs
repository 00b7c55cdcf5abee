use async_trait::async_trait;
use serde_json::json;
use std::sync::{Arc, Mutex};

use crate::errors::ChatResult;
use crate::models::request::GenerateContentRequest;
use crate::providers::base::{Provider, ProviderResponse};

/// A mock provider that returns pre-configured responses and records every request
#[derive(Clone, Default)]
pub struct MockProvider {
    responses: Arc<Mutex<Vec<ChatResult<ProviderResponse>>>>,
    requests: Arc<Mutex<Vec<GenerateContentRequest>>>,
}

impl MockProvider {
    /// Create a new mock provider with a sequence of responses
    pub fn new(responses: Vec<ChatResult<ProviderResponse>>) -> Self {
        Self {
            responses: Arc::new(Mutex::new(responses)),
            requests: Arc::new(Mutex::new(Vec::new())),
        }
    }

    pub fn replying(text: &str) -> Self {
        Self::new(vec![Ok(ProviderResponse::ok(json!({
            "candidates": [{"content": {"role": "model", "parts": [{"text": text}]}}]
        })))])
    }

    pub fn requests(&self) -> Vec<GenerateContentRequest> {
        self.requests.lock().unwrap().clone()
    }
}

#[async_trait]
impl Provider for MockProvider {
    async fn generate(&self, request: &GenerateContentRequest) -> ChatResult<ProviderResponse> {
        self.requests.lock().unwrap().push(request.clone());

        let mut responses = self.responses.lock().unwrap();
        if responses.is_empty() {
            // Empty candidate list if no more pre-configured responses
            Ok(ProviderResponse::ok(json!({"candidates": []})))
        } else {
            responses.remove(0)
        }
    }
}
