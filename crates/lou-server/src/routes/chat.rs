use crate::error::{method_not_allowed, ApiError};
use crate::state::AppState;
use axum::{extract::State, routing::post, Json, Router};
use bytes::Bytes;
use lou::{
    chat::{self, ChatRequest},
    errors::ChatError,
};
use serde::Serialize;
use serde_json::Value;

#[derive(Debug, Serialize)]
struct ChatResponse {
    reply: String,
}

// An empty body is an empty request; anything else must be a JSON object
fn parse_request(body: &[u8]) -> Result<ChatRequest, ApiError> {
    if body.iter().all(u8::is_ascii_whitespace) {
        return Ok(ChatRequest::default());
    }

    let invalid = |reason: String| {
        tracing::debug!("unreadable chat request body: {}", reason);
        ApiError(ChatError::InvalidInput(
            "request body must be a JSON object".to_string(),
        ))
    };

    match serde_json::from_slice::<Value>(body) {
        Ok(value @ Value::Object(_)) => {
            serde_json::from_value(value).map_err(|e| invalid(e.to_string()))
        }
        Ok(other) => Err(invalid(format!("body is not an object: {}", other))),
        Err(e) => Err(invalid(e.to_string())),
    }
}

async fn handler(
    State(state): State<AppState>,
    body: Bytes,
) -> Result<Json<ChatResponse>, ApiError> {
    let request = parse_request(&body)?;
    let reply = chat::reply(state.provider.as_ref(), request).await?;
    tracing::info!(reply_chars = reply.chars().count(), "chat reply sent");

    Ok(Json(ChatResponse { reply }))
}

// Configure routes for this module
pub fn routes(state: AppState) -> Router {
    let chat = post(handler).fallback(method_not_allowed);

    Router::new()
        .route("/", chat.clone())
        .route("/api/lou", chat)
        .with_state(state)
}
