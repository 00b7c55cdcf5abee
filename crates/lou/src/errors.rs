use thiserror::Error;

/// Every way a single chat turn can fail.
///
/// Malformed history is deliberately absent: it is recovered from, never reported.
#[non_exhaustive]
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ChatError {
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    #[error("Provider API key is not configured")]
    MissingCredential,

    #[error("Provider error: {0}")]
    Provider(String),
}

impl ChatError {
    pub fn provider<S: Into<String>>(detail: S) -> Self {
        ChatError::Provider(detail.into())
    }
}

impl From<reqwest::Error> for ChatError {
    fn from(err: reqwest::Error) -> Self {
        ChatError::Provider(err.to_string())
    }
}

pub type ChatResult<T> = Result<T, ChatError>;
