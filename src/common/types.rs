use std::fmt;

use chrono::{DateTime, Local};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use uuid::Uuid;

/// Who a rendered line belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Sender {
    You,
    Dm,
}

impl Sender {
    pub fn label(self) -> &'static str {
        match self {
            Sender::You => "You",
            Sender::Dm => "DM",
        }
    }
}

/// One line in the chat container. Lives only as long as the window does.
#[derive(Debug, Clone)]
pub struct Message {
    pub sender: Sender,
    pub text: String,
    pub rendered_at: DateTime<Local>,
}

impl Message {
    pub fn you(text: impl Into<String>) -> Self {
        Self::new(Sender::You, text)
    }

    pub fn dm(text: impl Into<String>) -> Self {
        Self::new(Sender::Dm, text)
    }

    fn new(sender: Sender, text: impl Into<String>) -> Self {
        Self {
            sender,
            text: text.into(),
            rendered_at: Local::now(),
        }
    }
}

impl fmt::Display for Message {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.sender.label(), self.text)
    }
}

/// A trimmed, non-empty message on its way from the form to the server.
#[derive(Debug, Clone)]
pub struct Submission {
    pub id: Uuid,
    pub text: String,
}

impl Submission {
    pub fn new(text: String) -> Self {
        Self {
            id: Uuid::new_v4(),
            text,
        }
    }
}

/// Wire body of `POST /message`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MessageRequest {
    #[serde(default)]
    pub message: String,
}

/// Reply of `POST /message`, decoded from whatever JSON the server sent.
#[derive(Debug, Clone, PartialEq)]
pub enum ServerResponse {
    Error(String),
    Narration(String),
    /// Any other shape, kept verbatim.
    Unknown(Value),
}

impl ServerResponse {
    /// Returns `None` for a bare `null` body, which carries no fields to probe.
    pub fn from_value(value: Value) -> Option<Self> {
        if value.is_null() {
            return None;
        }

        if let Some(error) = value.get("error").filter(|v| is_truthy(v)) {
            return Some(ServerResponse::Error(field_text(error)));
        }
        if let Some(narration) = value.get("narration").filter(|v| is_truthy(v)) {
            return Some(ServerResponse::Narration(field_text(narration)));
        }

        Some(ServerResponse::Unknown(value))
    }

    /// Text shown after the `DM: ` prefix.
    pub fn dm_text(&self) -> String {
        match self {
            ServerResponse::Error(error) => format!("Error: {error}"),
            ServerResponse::Narration(narration) => narration.clone(),
            ServerResponse::Unknown(raw) => with_integral_floats(raw.clone()).to_string(),
        }
    }
}

fn is_truthy(value: &Value) -> bool {
    match value {
        Value::Null => false,
        Value::Bool(b) => *b,
        Value::Number(n) => n.as_f64().is_some_and(|n| n != 0.0),
        Value::String(s) => !s.is_empty(),
        Value::Array(_) | Value::Object(_) => true,
    }
}

fn field_text(value: &Value) -> String {
    match value {
        Value::String(s) => s.clone(),
        other => with_integral_floats(other.clone()).to_string(),
    }
}

/// Largest integer a double holds exactly (2^53 - 1).
const MAX_SAFE_INTEGER: f64 = 9_007_199_254_740_991.0;

/// Rewrites whole-number floats as integers, so `1.0` dumps as `1` the way a
/// browser's `JSON.stringify` prints it.
fn with_integral_floats(value: Value) -> Value {
    match value {
        Value::Number(n) if n.is_f64() => match n.as_f64() {
            Some(f) if f.is_finite() && f.fract() == 0.0 && f.abs() <= MAX_SAFE_INTEGER => {
                Value::from(f as i64)
            }
            _ => Value::Number(n),
        },
        Value::Array(items) => Value::Array(items.into_iter().map(with_integral_floats).collect()),
        Value::Object(map) => Value::Object(
            map.into_iter()
                .map(|(key, item)| (key, with_integral_floats(item)))
                .collect(),
        ),
        other => other,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn error_wins_over_narration() {
        let resp = ServerResponse::from_value(json!({"narration": "x", "error": "Invalid action"}));
        assert_eq!(resp, Some(ServerResponse::Error("Invalid action".into())));
        assert_eq!(resp.unwrap().dm_text(), "Error: Invalid action");
    }

    #[test]
    fn narration_is_shown_as_is() {
        let resp = ServerResponse::from_value(json!({"narration": "Hello"})).unwrap();
        assert_eq!(resp.dm_text(), "Hello");
    }

    #[test]
    fn falsy_fields_fall_through_to_raw_dump() {
        let resp = ServerResponse::from_value(json!({"error": "", "narration": null})).unwrap();
        assert_eq!(resp.dm_text(), r#"{"error":"","narration":null}"#);
    }

    #[test]
    fn unknown_shape_keeps_key_order() {
        let raw: Value = serde_json::from_str(r#"{"zeta":1,"alpha":2}"#).unwrap();
        let resp = ServerResponse::from_value(raw).unwrap();
        assert_eq!(resp.dm_text(), r#"{"zeta":1,"alpha":2}"#);
    }

    #[test]
    fn whole_floats_dump_without_fraction() {
        let raw: Value = serde_json::from_str(r#"{"foo": 1.0, "bar": 1e2, "hp": [-0.0, 2.5]}"#).unwrap();
        let resp = ServerResponse::from_value(raw).unwrap();
        assert_eq!(resp.dm_text(), r#"{"foo":1,"bar":100,"hp":[0,2.5]}"#);
    }

    #[test]
    fn non_string_error_float_is_integral() {
        let resp = ServerResponse::from_value(json!({"error": 500.0})).unwrap();
        assert_eq!(resp.dm_text(), "Error: 500");
    }

    #[test]
    fn non_object_bodies() {
        assert_eq!(ServerResponse::from_value(Value::Null), None);
        let resp = ServerResponse::from_value(json!([1, 2])).unwrap();
        assert_eq!(resp.dm_text(), "[1,2]");
        let resp = ServerResponse::from_value(json!("plain")).unwrap();
        assert_eq!(resp.dm_text(), r#""plain""#);
    }

    #[test]
    fn non_string_error_is_rendered_as_json() {
        let resp = ServerResponse::from_value(json!({"error": 404})).unwrap();
        assert_eq!(resp.dm_text(), "Error: 404");
    }

    #[test]
    fn message_display_uses_sender_label() {
        assert_eq!(Message::you("look around").to_string(), "You: look around");
        assert_eq!(Message::dm("A dark cave.").to_string(), "DM: A dark cave.");
    }
}
