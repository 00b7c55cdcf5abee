use serde_json::Value;

use crate::errors::{ChatError, ChatResult};

/// Sent in place of an unresolved `{{...}}` template token so that a
/// misconfigured client still gets a reply it can recognize.
pub const DEFAULT_TEST_UTTERANCE: &str = "Olá, Lou. Esta é uma mensagem de teste.";

pub const MISSING_UTTERANCE: &str = "user utterance is required and must be a non-empty string";

/// A string the client forgot to render, e.g. `{{user_message}}`
pub fn is_template_placeholder(text: &str) -> bool {
    text.starts_with("{{") && text.ends_with("}}")
}

/// Validate the raw `userInput` field, repairing template placeholders.
///
/// The accepted utterance is returned unchanged; it is not trimmed.
pub fn sanitize_user_input(raw: Option<&Value>) -> ChatResult<String> {
    let text = match raw {
        Some(Value::String(text)) if is_template_placeholder(text) => {
            tracing::warn!(
                placeholder = %text,
                "user input is an unresolved template placeholder, substituting the default test utterance"
            );
            DEFAULT_TEST_UTTERANCE
        }
        Some(Value::String(text)) => text.as_str(),
        _ => return Err(ChatError::InvalidInput(MISSING_UTTERANCE.to_string())),
    };

    if text.trim().is_empty() {
        return Err(ChatError::InvalidInput(MISSING_UTTERANCE.to_string()));
    }

    Ok(text.to_string())
}
