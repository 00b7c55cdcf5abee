use super::role::Role;
use serde::Serialize;

/// One utterance in a conversation.
///
/// Fields absent from the client payload stay `None` and are omitted when the
/// turn is replayed to the provider.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Turn {
    #[serde(skip_serializing_if = "Option::is_none")]
    role: Option<Role>,
    #[serde(skip_serializing_if = "Option::is_none")]
    content: Option<String>,
}

impl Turn {
    pub fn new(role: Option<Role>, content: Option<String>) -> Self {
        Turn { role, content }
    }

    pub fn user<S: Into<String>>(content: S) -> Self {
        Turn::new(Some(Role::User), Some(content.into()))
    }

    pub fn assistant<S: Into<String>>(content: S) -> Self {
        Turn::new(Some(Role::Assistant), Some(content.into()))
    }

    pub fn role(&self) -> Option<&Role> {
        self.role.as_ref()
    }

    pub fn content(&self) -> Option<&str> {
        self.content.as_deref()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_turn_constructors() {
        let turn = Turn::user("Oi");
        assert_eq!(turn.role(), Some(&Role::User));
        assert_eq!(turn.content(), Some("Oi"));

        let turn = Turn::assistant("Olá");
        assert_eq!(turn.role(), Some(&Role::Assistant));
    }

    #[test]
    fn test_missing_fields_are_omitted() {
        let turn = Turn::new(None, Some("sem papel".to_string()));
        assert_eq!(serde_json::to_value(&turn).unwrap(), json!({"content": "sem papel"}));

        let turn = Turn::new(Some(Role::User), None);
        assert_eq!(serde_json::to_value(&turn).unwrap(), json!({"role": "user"}));
    }
}
