use async_trait::async_trait;
use serde_json::Value;

use crate::errors::ChatResult;
use crate::models::request::GenerateContentRequest;

/// What came back from the provider once the transport call completed
#[derive(Debug, Clone, PartialEq)]
pub struct ProviderResponse {
    pub status: u16,
    pub success: bool,
    pub body: Value,
}

impl ProviderResponse {
    pub fn new(status: u16, body: Value) -> Self {
        Self {
            status,
            success: (200..300).contains(&status),
            body,
        }
    }

    pub fn ok(body: Value) -> Self {
        Self::new(200, body)
    }
}

/// Base trait for the text-generation backend
#[async_trait]
pub trait Provider: Send + Sync {
    /// Send the assembled conversation and return the raw provider output.
    ///
    /// A missing credential is reported before any network traffic.
    async fn generate(&self, request: &GenerateContentRequest) -> ChatResult<ProviderResponse>;
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_response_success_follows_status() {
        assert!(ProviderResponse::ok(json!({})).success);
        assert!(ProviderResponse::new(204, Value::Null).success);
        assert!(!ProviderResponse::new(429, json!({"error": {}})).success);
        assert!(!ProviderResponse::new(500, Value::Null).success);
    }
}
