use std::time::Duration;

pub const GEMINI_HOST: &str = "https://generativelanguage.googleapis.com";
pub const GEMINI_MODEL: &str = "gemini-1.5-flash";

#[derive(Debug, Clone)]
pub struct GeminiProviderConfig {
    pub host: String,
    pub model: String,
    pub api_key: Option<String>,
    pub timeout: Duration,
}

impl GeminiProviderConfig {
    /// The credential, treating an empty value as unset
    pub fn api_key(&self) -> Option<&str> {
        self.api_key.as_deref().filter(|key| !key.trim().is_empty())
    }
}

impl Default for GeminiProviderConfig {
    fn default() -> Self {
        Self {
            host: GEMINI_HOST.to_string(),
            model: GEMINI_MODEL.to_string(),
            api_key: None,
            timeout: Duration::from_secs(60),
        }
    }
}
