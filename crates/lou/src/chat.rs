use serde::Deserialize;
use serde_json::Value;

use crate::compose::build_request;
use crate::errors::ChatResult;
use crate::history::normalize_history;
use crate::providers::base::Provider;
use crate::reply::extract_reply;
use crate::sanitize::sanitize_user_input;

/// The request body as received. Both fields are left untyped because
/// clients have sent them in several shapes over time.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct ChatRequest {
    #[serde(rename = "userInput")]
    pub user_input: Option<Value>,
    /// Legacy name for `userInput`, used only when `userInput` is absent
    pub mensagem: Option<Value>,
    pub history: Option<Value>,
}

impl ChatRequest {
    pub fn new(user_input: Value) -> Self {
        Self {
            user_input: Some(user_input),
            ..Default::default()
        }
    }

    pub fn with_history(mut self, history: Value) -> Self {
        self.history = Some(history);
        self
    }

    pub fn utterance(&self) -> Option<&Value> {
        self.user_input.as_ref().or(self.mensagem.as_ref())
    }
}

/// Run one chat turn: sanitize the utterance, normalize the history, build the
/// provider payload, call the provider once and extract the reply.
///
/// Input errors are returned before the provider is called.
pub async fn reply(provider: &dyn Provider, request: ChatRequest) -> ChatResult<String> {
    let utterance = sanitize_user_input(request.utterance())?;
    let history = normalize_history(request.history.as_ref());
    tracing::debug!(history_turns = history.len(), "composing provider request");

    let payload = build_request(&utterance, &history);
    let response = provider.generate(&payload).await?;

    extract_reply(&response)
}
