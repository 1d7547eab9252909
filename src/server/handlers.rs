use axum::Json;
use axum::extract::State;
use axum::http::StatusCode;
use serde_json::{Value, json};

use super::llama::CompletionClient;

/// `POST /message`: forwards the player's move and answers with the narration.
///
/// The body is taken as loose JSON: a missing, null or otherwise empty
/// `message` is a 400, any other non-string value is sent on as its JSON text.
pub async fn message(
    State(completion): State<CompletionClient>,
    Json(body): Json<Value>,
) -> (StatusCode, Json<Value>) {
    let Some(message) = body.get("message").and_then(message_text) else {
        return (
            StatusCode::BAD_REQUEST,
            Json(json!({ "error": "No message provided" })),
        );
    };

    match completion.complete(&message).await {
        Ok(narration) => (StatusCode::OK, Json(json!({ "narration": narration }))),
        Err(err) => {
            log::warn!("Completion request failed: {err}");
            (StatusCode::OK, Json(json!({ "error": err.to_string() })))
        }
    }
}

fn message_text(value: &Value) -> Option<String> {
    match value {
        Value::Null | Value::Bool(false) => None,
        Value::String(s) if s.is_empty() => None,
        Value::Array(items) if items.is_empty() => None,
        Value::Object(map) if map.is_empty() => None,
        Value::Number(n) if n.as_f64() == Some(0.0) => None,
        Value::String(s) => Some(s.clone()),
        other => Some(other.to_string()),
    }
}
