use reqwest::Client;
use reqwest::header::{CONTENT_TYPE, HeaderValue};
use serde_json::Value;
use thiserror::Error;

use crate::common::{MessageRequest, ServerResponse};

pub const MESSAGE_PATH: &str = "/message";

#[derive(Debug, Error)]
pub enum ExchangeError {
    #[error("request failed: {0}")]
    Request(#[from] reqwest::Error),
    #[error("invalid JSON: {0}")]
    Json(#[from] serde_json::Error),
    #[error("response body is null")]
    NullBody,
}

/// HTTP side of one `/message` round trip.
#[derive(Clone)]
pub struct HttpTransport {
    client: Client,
    endpoint: String,
}

impl HttpTransport {
    /// No request timeout is set; the transport's own defaults apply.
    pub fn new(server_url: &str) -> Result<Self, reqwest::Error> {
        let client = Client::builder().build()?;
        Ok(Self {
            client,
            endpoint: format!("{}{}", server_url.trim_end_matches('/'), MESSAGE_PATH),
        })
    }

    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }

    /// Any JSON body is accepted whatever the status code.
    pub async fn post_message(&self, text: &str) -> Result<ServerResponse, ExchangeError> {
        let body = MessageRequest {
            message: text.to_string(),
        };

        let bytes = self
            .client
            .post(&self.endpoint)
            .header(CONTENT_TYPE, HeaderValue::from_static("application/json"))
            .body(serde_json::to_vec(&body)?)
            .send()
            .await?
            .bytes()
            .await?;

        let value: Value = serde_json::from_slice(&bytes)?;
        ServerResponse::from_value(value).ok_or(ExchangeError::NullBody)
    }
}
