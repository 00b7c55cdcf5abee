use serde_json::Value;

use crate::errors::{ChatError, ChatResult};
use crate::providers::base::ProviderResponse;

/// Shown when the provider answered but produced no usable text
pub const FALLBACK_REPLY: &str = "Desculpe, fiquei em silêncio por um instante. Pode repetir?";

/// Pull the reply text out of a provider response.
///
/// An unsuccessful response is an error. A successful one always yields a
/// non-empty string, falling back to [`FALLBACK_REPLY`].
pub fn extract_reply(response: &ProviderResponse) -> ChatResult<String> {
    if !response.success {
        return Err(ChatError::provider(format!(
            "Request failed: {} - {}",
            response.status, response.body
        )));
    }

    match first_candidate_text(&response.body) {
        Some(text) => Ok(text.to_string()),
        None => {
            tracing::warn!("provider response had no candidate text, using fallback reply");
            Ok(FALLBACK_REPLY.to_string())
        }
    }
}

// candidates[0].content.parts[0].text
fn first_candidate_text(body: &Value) -> Option<&str> {
    body.get("candidates")?
        .get(0)?
        .get("content")?
        .get("parts")?
        .get(0)?
        .get("text")?
        .as_str()
        .filter(|text| !text.is_empty())
}
