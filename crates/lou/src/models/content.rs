use super::role::Role;
use serde::Serialize;

/// A Gemini content block: one role-tagged entry of the `contents` array.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Content {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub role: Option<Role>,
    pub parts: Vec<Part>,
}

/// A text part. `text` is omitted when the source turn carried no content.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Part {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub text: Option<String>,
}

impl Content {
    pub fn new(role: Option<Role>, text: Option<String>) -> Self {
        Content {
            role,
            parts: vec![Part { text }],
        }
    }

    pub fn user<S: Into<String>>(text: S) -> Self {
        Content::new(Some(Role::User), Some(text.into()))
    }

    /// Text of the first part, if any
    pub fn as_text(&self) -> Option<&str> {
        self.parts.first().and_then(|part| part.text.as_deref())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_content_serialization() {
        let content = Content::user("Olá");
        assert_eq!(
            serde_json::to_value(&content).unwrap(),
            json!({"role": "user", "parts": [{"text": "Olá"}]})
        );
        assert_eq!(content.as_text(), Some("Olá"));
    }

    #[test]
    fn test_content_without_text_or_role() {
        let content = Content::new(None, None);
        assert_eq!(serde_json::to_value(&content).unwrap(), json!({"parts": [{}]}));
        assert_eq!(content.as_text(), None);
    }
}
