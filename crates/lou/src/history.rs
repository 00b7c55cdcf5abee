use serde_json::Value;

use crate::models::role::Role;
use crate::models::turn::Turn;

/// The shapes a client may send the `history` field in.
///
/// Handlers are tried in declaration order and every one of them is total.
#[derive(Debug, Clone, PartialEq)]
pub enum HistoryShape<'a> {
    /// A real JSON array of turn-like objects
    Turns(&'a [Value]),
    /// A JSON document that was encoded into a string
    Encoded(&'a str),
    /// Absent, null, or any other scalar/object
    Unrecognized,
}

impl<'a> HistoryShape<'a> {
    pub fn of(raw: Option<&'a Value>) -> Self {
        match raw {
            Some(Value::Array(items)) => HistoryShape::Turns(items),
            Some(Value::String(text)) => HistoryShape::Encoded(text),
            _ => HistoryShape::Unrecognized,
        }
    }

    pub fn into_turns(self) -> Vec<Turn> {
        match self {
            HistoryShape::Turns(items) => items.iter().map(turn_from_value).collect(),
            HistoryShape::Encoded(text) => match serde_json::from_str::<Value>(text) {
                Ok(Value::Array(items)) => items.iter().map(turn_from_value).collect(),
                Ok(other) => {
                    tracing::warn!(
                        "history string decoded to a non-array value ({}), using empty history",
                        json_kind(&other)
                    );
                    Vec::new()
                }
                Err(e) => {
                    tracing::warn!("history string is not valid JSON ({}), using empty history", e);
                    Vec::new()
                }
            },
            HistoryShape::Unrecognized => Vec::new(),
        }
    }
}

/// Normalize the raw `history` field into an ordered list of turns.
///
/// Never fails: anything unrecognized becomes an empty history.
pub fn normalize_history(raw: Option<&Value>) -> Vec<Turn> {
    HistoryShape::of(raw).into_turns()
}

// Elements are neither filtered nor validated; missing fields stay missing.
fn turn_from_value(value: &Value) -> Turn {
    let role = value.get("role").and_then(Value::as_str).map(Role::from);

    let content = match value.get("content") {
        None | Some(Value::Null) => None,
        Some(Value::String(text)) => Some(text.clone()),
        Some(other) => Some(other.to_string()),
    };

    Turn::new(role, content)
}

fn json_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}
