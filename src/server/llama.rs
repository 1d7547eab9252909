use std::time::Duration;

use reqwest::Client;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::config::AppConfig;

const STOP_TOKENS: [&str; 2] = ["<|user|>", "<|system|>"];

#[derive(Debug, Error)]
pub enum CompletionError {
    #[error("{0}")]
    Http(#[from] reqwest::Error),
}

#[derive(Debug, Serialize)]
struct CompletionRequest<'a> {
    prompt: String,
    temperature: f32,
    n_predict: u32,
    stop: [&'a str; 2],
    stream: bool,
}

#[derive(Debug, Deserialize)]
struct CompletionReply {
    #[serde(default)]
    response: Option<String>,
    #[serde(default)]
    content: Option<String>,
}

/// Client for the local llama-style completion server.
#[derive(Clone)]
pub struct CompletionClient {
    client: Client,
    url: String,
    system_prompt: String,
    temperature: f32,
    n_predict: u32,
}

impl CompletionClient {
    pub fn from_config(config: &AppConfig) -> Result<Self, reqwest::Error> {
        let client = Client::builder()
            .timeout(Duration::from_secs(config.llama_timeout_secs))
            .build()?;
        Ok(Self {
            client,
            url: config.llama_url.clone(),
            system_prompt: config.system_prompt.clone(),
            temperature: config.temperature,
            n_predict: config.n_predict,
        })
    }

    pub fn prompt_for(&self, message: &str) -> String {
        format!(
            "<|system|>\n{}\n<|user|>\n{}\n<|assistant|>\n",
            self.system_prompt, message
        )
    }

    /// Returns the trimmed reply text; empty when the server sent neither field.
    pub async fn complete(&self, message: &str) -> Result<String, CompletionError> {
        let request = CompletionRequest {
            prompt: self.prompt_for(message),
            temperature: self.temperature,
            n_predict: self.n_predict,
            stop: STOP_TOKENS,
            stream: false,
        };

        let reply: CompletionReply = self
            .client
            .post(&self.url)
            .json(&request)
            .send()
            .await?
            .error_for_status()?
            .json()
            .await?;

        let text = reply
            .response
            .filter(|text| !text.is_empty())
            .or(reply.content)
            .unwrap_or_default();
        Ok(text.trim().to_string())
    }
}
