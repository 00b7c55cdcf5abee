use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use crate::configuration::LEGACY_API_KEY_VAR;
use lou::errors::ChatError;
use serde::Serialize;
use thiserror::Error;

pub const PROVIDER_FAILURE: &str = "Lou could not answer right now, please try again later";
pub const MISSING_CREDENTIAL: &str = "provider API key is not configured";
pub const METHOD_NOT_ALLOWED: &str = "method not allowed";

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Invalid server address: {0}")]
    InvalidAddress(String),
    #[error("Configuration error: {0}")]
    Other(#[from] config::ConfigError),
}

// Convert a configuration path to its environment variable
pub fn to_env_var(field_path: &str) -> String {
    format!("LOU_{}", field_path.to_uppercase().replace('.', "__"))
}

/// Names the variables that can carry the provider credential
pub fn credential_hint() -> String {
    format!("set {} or {}", to_env_var("provider.api_key"), LEGACY_API_KEY_VAR)
}

#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    pub error: String,
}

/// A chat failure on its way out of the handler
#[derive(Debug)]
pub struct ApiError(pub ChatError);

impl From<ChatError> for ApiError {
    fn from(err: ChatError) -> Self {
        ApiError(err)
    }
}

impl ApiError {
    pub fn status(&self) -> StatusCode {
        match &self.0 {
            ChatError::InvalidInput(_) => StatusCode::BAD_REQUEST,
            _ => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    // Provider details are logged, never returned
    fn message(&self) -> String {
        match &self.0 {
            ChatError::InvalidInput(message) => message.clone(),
            ChatError::MissingCredential => MISSING_CREDENTIAL.to_string(),
            _ => PROVIDER_FAILURE.to_string(),
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        match &self.0 {
            ChatError::InvalidInput(message) => tracing::info!("rejected chat request: {}", message),
            ChatError::MissingCredential => {
                tracing::error!("provider API key is not configured, {}", credential_hint())
            }
            other => tracing::error!("provider call failed: {}", other),
        }

        let status = self.status();
        (status, Json(ErrorResponse { error: self.message() })).into_response()
    }
}

pub async fn method_not_allowed() -> impl IntoResponse {
    (
        StatusCode::METHOD_NOT_ALLOWED,
        Json(ErrorResponse {
            error: METHOD_NOT_ALLOWED.to_string(),
        }),
    )
}
